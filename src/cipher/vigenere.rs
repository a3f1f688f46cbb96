use crate::alphabet::{self, ALPHABET_LEN};
use crate::cipher::positional;
use log::{debug, trace};
use std::collections::VecDeque;

/// Progressive key: each key letter's shift grows by one every time it is
/// used, so a short key never repeats identically over a long text.
///
/// Values are kept reduced modulo the alphabet length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchedule {
    shifts: VecDeque<usize>,
}

impl KeySchedule {
    /// Build a schedule from the alphabet letters of `key`.
    /// Returns `None` when the key holds no letters at all.
    pub fn from_key(key: &str) -> Option<Self> {
        let shifts: VecDeque<usize> = key
            .chars()
            .filter_map(alphabet::index_of)
            .map(|letter| letter.index)
            .collect();

        if shifts.is_empty() {
            None
        } else {
            Some(Self { shifts })
        }
    }

    /// Number of key letters in rotation
    pub fn key_len(&self) -> usize {
        self.shifts.len()
    }

    /// Take the front shift, then requeue it at the back incremented by one
    pub fn next_shift(&mut self) -> usize {
        let shift = self.shifts.pop_front().expect("key schedule is never empty");
        self.shifts.push_back((shift + 1) % ALPHABET_LEN);
        shift
    }

    /// Shift every letter forward. `letters` must hold alphabet letters only.
    pub fn encrypt_letters(&mut self, letters: &[char]) -> Vec<char> {
        letters
            .iter()
            .map(|&ch| match alphabet::index_of(ch) {
                Some(letter) => letter.shifted(self.next_shift()).to_char(),
                None => ch,
            })
            .collect()
    }

    /// Shift every letter back, consuming the schedule exactly as
    /// [`KeySchedule::encrypt_letters`] does.
    pub fn decrypt_letters(&mut self, letters: &[char]) -> Vec<char> {
        letters
            .iter()
            .map(|&ch| match alphabet::index_of(ch) {
                Some(letter) => letter.unshifted(self.next_shift()).to_char(),
                None => ch,
            })
            .collect()
    }
}

/// Encrypt the Cyrillic letters of `text`; everything else stays put.
/// A key without Cyrillic letters leaves the text unchanged.
pub fn encrypt(text: &str, key: &str) -> String {
    let Some(mut schedule) = KeySchedule::from_key(key) else {
        trace!("vigenere encrypt: key has no letters, identity");
        return text.to_string();
    };
    debug!("vigenere encrypt: key schedule of {} shifts", schedule.key_len());
    positional::apply(text, |letters| schedule.encrypt_letters(&letters))
}

pub fn decrypt(text: &str, key: &str) -> String {
    let Some(mut schedule) = KeySchedule::from_key(key) else {
        trace!("vigenere decrypt: key has no letters, identity");
        return text.to_string();
    };
    debug!("vigenere decrypt: key schedule of {} shifts", schedule.key_len());
    positional::apply(text, |letters| schedule.decrypt_letters(&letters))
}
