use crate::error::{CipherError, Result};
use crate::method::{CipherRequest, CipherResponse, Method, Operation};
use log::info;
use std::path::{Path, PathBuf};

/// Options for the encrypt and decrypt commands
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub method: Method,
    /// `None` selects the method's default key
    pub key: Option<String>,
    /// Text given on the command line
    pub text: Option<String>,
    /// UTF-8 file to read the text from instead
    pub input: Option<PathBuf>,
    /// Write the result here instead of returning it for stdout
    pub output: Option<PathBuf>,
}

impl TransformOptions {
    fn load_text(&self) -> Result<String> {
        match (&self.text, &self.input) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read_text(path),
            (None, None) => Err(CipherError::MissingInput),
        }
    }

    pub fn request(&self, operation: Operation) -> Result<CipherRequest> {
        let mut request = CipherRequest::new(self.load_text()?, self.method, operation);
        request.key = self.key.clone();
        Ok(request)
    }
}

/// Run one encrypt/decrypt command.
/// The response is returned either way; it has already been written to
/// `options.output` when that is set.
pub fn transform(options: &TransformOptions, operation: Operation) -> Result<CipherResponse> {
    let response = options.request(operation)?.respond();

    if let Some(path) = &options.output {
        write_text(path, &response.result)?;
        info!("wrote {} chars to {}", response.result.chars().count(), path.display());
    }

    Ok(response)
}

pub fn encrypt_text(options: &TransformOptions) -> Result<CipherResponse> {
    transform(options, Operation::Encrypt)
}

pub fn decrypt_text(options: &TransformOptions) -> Result<CipherResponse> {
    transform(options, Operation::Decrypt)
}

/// Plain UTF-8, no framing
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text.as_bytes())?;
    Ok(())
}
