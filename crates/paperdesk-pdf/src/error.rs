use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfOpError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("PDF is password protected")]
    Encrypted,

    #[error("No input documents")]
    EmptyInput,

    #[error("PDF operation failed: {0}")]
    Operation(String),

    #[error("Unreadable image: {0}")]
    Image(String),
}
