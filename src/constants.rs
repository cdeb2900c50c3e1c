// DOM naming conventions the widget consumes and produces.

// Consumed: markup inside the carousel container
pub const SLIDE_ITEM_CLASS: &str = "slide__item";
pub const PREV_BUTTON_CLASS: &str = "slide__btn-prev";
pub const NEXT_BUTTON_CLASS: &str = "slide__btn-next";

// Produced: positioning wrapper inserted around the container
pub const WRAPPER_TAG: &str = "div";
pub const WRAPPER_POSITION: &str = "relative";
pub const WRAPPER_ID_PREFIX: &str = "slide-wrap-";
pub const WRAPPER_ID_LETTERS: usize = 8;
