use crate::alphabet;
use log::trace;

/// Cyrillic letters of a text together with where each one came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSplit {
    /// The letters, in order
    pub letters: Vec<char>,
    /// `positions[i]` is the char index of `letters[i]` in the source text
    pub positions: Vec<usize>,
}

impl LetterSplit {
    pub fn of(text: &str) -> Self {
        let mut split = Self::default();
        for (i, ch) in text.chars().enumerate() {
            if alphabet::is_letter(ch) {
                split.letters.push(ch);
                split.positions.push(i);
            }
        }
        split
    }
}

/// Run `transform` over the letters of `text` only and write its output
/// back into the letter slots, leaving every other character in place.
///
/// Panics if `transform` returns a different number of letters than it
/// was given.
pub fn apply<F>(text: &str, transform: F) -> String
where
    F: FnOnce(Vec<char>) -> Vec<char>,
{
    let LetterSplit { letters, positions } = LetterSplit::of(text);
    trace!("positional filter: {} of {} chars are letters", letters.len(), text.chars().count());
    if letters.is_empty() {
        return text.to_string();
    }

    let expected = letters.len();
    let transformed = transform(letters);
    assert_eq!(
        transformed.len(),
        expected,
        "cipher changed the number of letters"
    );

    let mut result: Vec<char> = text.chars().collect();
    for (pos, ch) in positions.into_iter().zip(transformed) {
        result[pos] = ch;
    }
    result.into_iter().collect()
}
