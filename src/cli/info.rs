use crate::alphabet::{filter_letters, ALPHABET_LEN, LOWER, UPPER};
use crate::cipher::{extract_rail_count, KeySchedule};
use crate::method::Method;

/// Describe the alphabet, the methods and, optionally, how a key is read
pub fn show_info(key: Option<&str>) -> String {
    let mut output = String::new();

    output.push_str("cyrcipher\n");
    output.push_str("=========\n\n");

    output.push_str(&format!("Alphabet ({} letters):\n", ALPHABET_LEN));
    output.push_str(&format!("  Upper: {}\n", UPPER.iter().collect::<String>()));
    output.push_str(&format!("  Lower: {}\n", LOWER.iter().collect::<String>()));
    output.push('\n');

    output.push_str("Methods:\n");
    for method in Method::ALL {
        output.push_str(&format!(
            "  {:<12} default key: {}\n",
            method.name(),
            method.default_key()
        ));
    }

    if let Some(key) = key {
        output.push('\n');
        output.push_str(&format!("Key: {}\n", key));
        output.push_str(&format!("  Rail count: {}\n", extract_rail_count(key)));
        match KeySchedule::from_key(key) {
            Some(schedule) => output.push_str(&format!(
                "  Vigenere key: {} ({} letters)\n",
                filter_letters(key),
                schedule.key_len()
            )),
            None => output.push_str("  Vigenere key: none (text passes through unchanged)\n"),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_lists_alphabet_and_methods() {
        let info = show_info(None);
        assert!(info.contains("Alphabet (33 letters)"));
        assert!(info.contains("АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ"));
        assert!(info.contains("rail-fence"));
        assert!(info.contains("vigenere"));
        assert!(!info.contains("Key:"));
    }

    #[test]
    fn test_info_describes_key() {
        let info = show_info(Some("ключ7abc"));
        assert!(info.contains("Rail count: 7"));
        assert!(info.contains("Vigenere key: ключ (4 letters)"));

        let info = show_info(Some("12"));
        assert!(info.contains("Rail count: 12"));
        assert!(info.contains("Vigenere key: none"));
    }
}
