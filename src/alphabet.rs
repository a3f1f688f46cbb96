//! The 33-letter Cyrillic alphabet (Ё placed after Е).
//!
//! Both ciphers work on letter positions rather than code points. Unicode
//! keeps Ё/ё outside the contiguous А..я block, so lookups splice it back in
//! at position 6.

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 33;

/// Upper-case letters in canonical order.
pub const UPPER: [char; ALPHABET_LEN] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П',
    'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Lower-case letters, index-for-index with [`UPPER`].
pub const LOWER: [char; ALPHABET_LEN] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н', 'о', 'п',
    'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'ю', 'я',
];

const YO_INDEX: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Upper,
    Lower,
}

/// A letter's alphabet position together with its case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    /// Position in `0..ALPHABET_LEN`
    pub index: usize,
    pub case: Case,
}

impl Letter {
    /// The letter `shift` positions further along, wrapping, same case.
    pub fn shifted(self, shift: usize) -> Self {
        Self {
            index: (self.index + shift % ALPHABET_LEN) % ALPHABET_LEN,
            case: self.case,
        }
    }

    /// The letter `shift` positions back, wrapping, same case.
    pub fn unshifted(self, shift: usize) -> Self {
        let index = (self.index as isize - (shift % ALPHABET_LEN) as isize)
            .rem_euclid(ALPHABET_LEN as isize) as usize;
        Self {
            index,
            case: self.case,
        }
    }

    pub fn to_char(self) -> char {
        char_at(self.index, self.case)
    }
}

/// Look up a character in the alphabet. `None` for anything else,
/// including Latin look-alikes and combining forms.
pub fn index_of(ch: char) -> Option<Letter> {
    let (index, case) = match ch {
        'А'..='Е' => (ch as usize - 'А' as usize, Case::Upper),
        'Ё' => (YO_INDEX, Case::Upper),
        'Ж'..='Я' => (ch as usize - 'Ж' as usize + YO_INDEX + 1, Case::Upper),
        'а'..='е' => (ch as usize - 'а' as usize, Case::Lower),
        'ё' => (YO_INDEX, Case::Lower),
        'ж'..='я' => (ch as usize - 'ж' as usize + YO_INDEX + 1, Case::Lower),
        _ => return None,
    };
    Some(Letter { index, case })
}

/// Inverse of [`index_of`]. `index` must be below [`ALPHABET_LEN`].
pub fn char_at(index: usize, case: Case) -> char {
    match case {
        Case::Upper => UPPER[index],
        Case::Lower => LOWER[index],
    }
}

pub fn is_letter(ch: char) -> bool {
    index_of(ch).is_some()
}

/// Keep only alphabet letters, preserving order and case.
pub fn filter_letters(s: &str) -> String {
    s.chars().filter(|&ch| is_letter(ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_match_arithmetic_lookup() {
        for (i, (&upper, &lower)) in UPPER.iter().zip(LOWER.iter()).enumerate() {
            assert_eq!(index_of(upper), Some(Letter { index: i, case: Case::Upper }));
            assert_eq!(index_of(lower), Some(Letter { index: i, case: Case::Lower }));
            assert_eq!(char_at(i, Case::Upper), upper);
            assert_eq!(char_at(i, Case::Lower), lower);
        }
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        let upper: HashSet<char> = UPPER.iter().copied().collect();
        let lower: HashSet<char> = LOWER.iter().copied().collect();
        assert_eq!(upper.len(), ALPHABET_LEN);
        assert_eq!(lower.len(), ALPHABET_LEN);
    }

    #[test]
    fn test_yo_sits_after_ye() {
        assert_eq!(index_of('Е').unwrap().index, 5);
        assert_eq!(index_of('Ё').unwrap().index, 6);
        assert_eq!(index_of('ж').unwrap().index, 7);
        assert_eq!(index_of('я').unwrap().index, 32);
    }

    #[test]
    fn test_non_letters_not_found() {
        for ch in ['a', 'Z', '0', ' ', '!', 'Ѐ', 'ѐ', 'є', 'Ђ', '\u{0300}'] {
            assert_eq!(index_of(ch), None, "{:?} should not be a letter", ch);
        }
    }

    #[test]
    fn test_filter_letters() {
        assert_eq!(filter_letters("Ключ-7 key ёж"), "Ключёж");
        assert_eq!(filter_letters("123 abc"), "");
        assert_eq!(filter_letters(""), "");
    }

    #[test]
    fn test_shift_wraps_both_ways() {
        let ya = index_of('я').unwrap();
        assert_eq!(ya.shifted(1).to_char(), 'а');
        let a = index_of('А').unwrap();
        assert_eq!(a.unshifted(1).to_char(), 'Я');
        assert_eq!(a.unshifted(ALPHABET_LEN * 3 + 2).to_char(), 'Ю');
    }
}
