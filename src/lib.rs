//! cyrcipher - classical ciphers over the Cyrillic alphabet
//!
//! Two pedagogical ciphers restricted to the 33-letter Russian alphabet
//! (Ё included). Only Cyrillic letters are transformed; digits,
//! punctuation, whitespace and Latin letters keep their exact positions.
//!
//! - **Rail fence**: letters are written along a zig-zag over `rails` rails
//!   and read back rail by rail. The rail count comes from the first run of
//!   digits in the key (2 when there is none).
//! - **Progressive Vigenère**: each letter is shifted by the current key
//!   letter, and every key letter shifts one further each time it is reused.
//!
//! Neither cipher is secure.
//!
//! ## Example
//!
//! ```
//! use cyrcipher::{rail_fence_encrypt, vigenere_decrypt, vigenere_encrypt};
//!
//! assert_eq!(rail_fence_encrypt("привет", 2), "пиервт");
//!
//! let secret = vigenere_encrypt("Встреча в 10:00", "ключ");
//! assert_eq!(vigenere_decrypt(&secret, "ключ"), "Встреча в 10:00");
//! assert!(secret.ends_with(" 10:00"));
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod method;

pub use cipher::{
    extract_rail_count, rail_fence_decrypt, rail_fence_encrypt, vigenere_decrypt,
    vigenere_encrypt,
};
pub use error::{CipherError, Result};
pub use method::{CipherRequest, CipherResponse, Method, Operation};
