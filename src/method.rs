use crate::cipher::{
    extract_rail_count, rail_fence_decrypt, rail_fence_encrypt, vigenere_decrypt, vigenere_encrypt,
};
use crate::error::{CipherError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Cipher method options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    #[default]
    RailFence,
    Vigenere,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::RailFence, Method::Vigenere];

    /// Key used when none is supplied
    pub fn default_key(self) -> &'static str {
        match self {
            Self::RailFence => "3",
            Self::Vigenere => "ключ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RailFence => "rail-fence",
            Self::Vigenere => "vigenere",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Method {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rail-fence" | "railfence" | "rail" | "fence" => Ok(Self::RailFence),
            "vigenere" | "vigenère" | "progressive-vigenere" => Ok(Self::Vigenere),
            _ => Err(CipherError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Direction of a cipher call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Encrypt,
    Decrypt,
}

impl std::str::FromStr for Operation {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Self::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Self::Decrypt),
            _ => Err(CipherError::UnsupportedOperation(s.to_string())),
        }
    }
}

/// One `(text, key, method)` call into the ciphers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    pub text: String,
    /// Falls back to [`Method::default_key`] when absent
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub method: Method,
    #[serde(default)]
    pub operation: Operation,
}

impl CipherRequest {
    pub fn new(text: impl Into<String>, method: Method, operation: Operation) -> Self {
        Self {
            text: text.into(),
            key: None,
            method,
            operation,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn effective_key(&self) -> &str {
        self.key.as_deref().unwrap_or_else(|| self.method.default_key())
    }

    /// Run the request. Never fails: every odd input has a defined result.
    pub fn run(&self) -> String {
        let key = self.effective_key();
        debug!("{:?} with {} ({} chars)", self.operation, self.method, self.text.chars().count());
        match (self.method, self.operation) {
            (Method::RailFence, Operation::Encrypt) => {
                rail_fence_encrypt(&self.text, extract_rail_count(key))
            }
            (Method::RailFence, Operation::Decrypt) => {
                rail_fence_decrypt(&self.text, extract_rail_count(key))
            }
            (Method::Vigenere, Operation::Encrypt) => vigenere_encrypt(&self.text, key),
            (Method::Vigenere, Operation::Decrypt) => vigenere_decrypt(&self.text, key),
        }
    }

    pub fn respond(&self) -> CipherResponse {
        CipherResponse {
            method: self.method,
            operation: self.operation,
            key: self.effective_key().to_string(),
            result: self.run(),
        }
    }
}

/// Result of a [`CipherRequest`], echoing the parameters actually used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResponse {
    pub method: Method,
    pub operation: Operation,
    pub key: String,
    pub result: String,
}
