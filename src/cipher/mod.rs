pub mod positional;
pub mod rail_fence;
pub mod vigenere;

pub use positional::{apply, LetterSplit};
pub use rail_fence::{extract_rail_count, DEFAULT_RAILS};
pub use vigenere::KeySchedule;

/// Rail-fence encrypt the Cyrillic letters of `text`, leaving all other
/// characters where they are.
pub fn rail_fence_encrypt(text: &str, rails: usize) -> String {
    apply(text, |letters| rail_fence::encrypt(&letters, rails))
}

pub fn rail_fence_decrypt(text: &str, rails: usize) -> String {
    apply(text, |letters| rail_fence::decrypt(&letters, rails))
}

pub fn vigenere_encrypt(text: &str, key: &str) -> String {
    vigenere::encrypt(text, key)
}

pub fn vigenere_decrypt(text: &str, key: &str) -> String {
    vigenere::decrypt(text, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rail_fence_mixed_text() {
        // Letters: Приветмир -> rails 2 -> Пиемр + рвти
        let encrypted = rail_fence_encrypt("Привет, мир! 42", 2);
        assert_eq!(encrypted, "Пиемрр, вти! 42");
        assert_eq!(rail_fence_decrypt(&encrypted, 2), "Привет, мир! 42");
    }

    #[test]
    fn test_rail_fence_identity_policies() {
        assert_eq!(rail_fence_encrypt("привет", 1), "привет");
        assert_eq!(rail_fence_encrypt("", 5), "");
        assert_eq!(rail_fence_encrypt("hello, world", 3), "hello, world");
    }

    #[test]
    fn test_vigenere_mixed_text() {
        let text = "Hello, Мир 2024!";
        let encrypted = vigenere_encrypt(text, "ключ");
        assert!(encrypted.starts_with("Hello, "));
        assert!(encrypted.ends_with(" 2024!"));
        assert_eq!(vigenere_decrypt(&encrypted, "ключ"), text);
    }

    #[test]
    fn test_vigenere_letterless_key() {
        assert_eq!(vigenere_encrypt("привет", "123"), "привет");
    }
}
