pub mod carousel;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod options;
pub mod surface;

pub use carousel::*;
pub use constants::*;
pub use error::*;
pub use gesture::*;
pub use options::*;
pub use surface::*;
