use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Unsupported method: {0}. Expected rail-fence or vigenere")]
    UnsupportedMethod(String),

    #[error("Unsupported operation: {0}. Expected encrypt or decrypt")]
    UnsupportedOperation(String),

    #[error("No input: provide TEXT or --input FILE")]
    MissingInput,
}

pub type Result<T> = std::result::Result<T, CipherError>;
