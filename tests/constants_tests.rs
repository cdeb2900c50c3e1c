// Host-side tests for the DOM naming conventions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn class_names_share_the_slide_block() {
    for class in [SLIDE_ITEM_CLASS, PREV_BUTTON_CLASS, NEXT_BUTTON_CLASS] {
        assert!(class.starts_with("slide__"), "{class} is outside the block");
        assert!(!class.contains(char::is_whitespace));
        assert!(!class.starts_with('.'), "{class} should be a class, not a selector");
    }
}

#[test]
fn control_classes_are_distinct() {
    assert_ne!(PREV_BUTTON_CLASS, NEXT_BUTTON_CLASS);
    assert_ne!(PREV_BUTTON_CLASS, SLIDE_ITEM_CLASS);
    assert_ne!(NEXT_BUTTON_CLASS, SLIDE_ITEM_CLASS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wrapper_is_a_positioned_div() {
    assert_eq!(WRAPPER_TAG, "div");
    assert_eq!(WRAPPER_POSITION, "relative");
    assert!(WRAPPER_ID_LETTERS > 0);
    assert!(WRAPPER_ID_PREFIX
        .chars()
        .all(|c| c.is_ascii_lowercase() || c == '-'));
}
