use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlideError {
    /// No element with the requested id exists in the document.
    #[error("element #{id} does not exist")]
    ElementNotFound { id: String },
    /// A DOM call failed while restructuring or styling the carousel.
    #[error("dom error: {0}")]
    Dom(String),
}
