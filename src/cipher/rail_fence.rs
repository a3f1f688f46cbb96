use log::{debug, trace};

/// Rail count used when a key carries no digits
pub const DEFAULT_RAILS: usize = 2;

/// Rail index visited at each step of a zig-zag over `rails` rails:
/// 0, 1, .., rails-1, rails-2, .., 1, 0, 1, ..
#[derive(Debug, Clone)]
struct ZigZag {
    rails: usize,
    rail: usize,
    descending: bool,
}

impl ZigZag {
    fn new(rails: usize) -> Self {
        assert!(rails >= 2, "zig-zag needs at least two rails, got {}", rails);
        Self {
            rails,
            rail: 0,
            descending: true,
        }
    }
}

impl Iterator for ZigZag {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.rail;
        if self.descending {
            self.rail += 1;
        } else {
            self.rail -= 1;
        }
        if self.rail == 0 || self.rail == self.rails - 1 {
            self.descending = !self.descending;
        }
        Some(current)
    }
}

/// Rails that actually get used: `None` means identity.
/// Beyond `len` rails the zig-zag never turns, so the extra rails stay empty.
fn effective_rails(len: usize, rails: usize) -> Option<usize> {
    if rails <= 1 || len == 0 {
        return None;
    }
    Some(rails.min(len).max(2))
}

/// Write symbols along the zig-zag and read them back rail by rail
pub fn encrypt<T: Clone>(letters: &[T], rails: usize) -> Vec<T> {
    let Some(rails) = effective_rails(letters.len(), rails) else {
        trace!("rail fence encrypt: identity ({} symbols)", letters.len());
        return letters.to_vec();
    };
    debug!("rail fence encrypt: {} symbols over {} rails", letters.len(), rails);

    let mut fence: Vec<Vec<T>> = vec![Vec::new(); rails];
    for (symbol, rail) in letters.iter().zip(ZigZag::new(rails)) {
        fence[rail].push(symbol.clone());
    }

    fence.into_iter().flatten().collect()
}

/// Invert [`encrypt`].
///
/// The rail of each position depends only on the position, while the
/// bucket contents are only known from the concatenated cipher text. So
/// the zig-zag is replayed once to size the buckets, the cipher text is
/// cut into them in rail order, and the zig-zag is replayed again to read
/// the symbols back in their original order.
pub fn decrypt<T: Clone>(cipher: &[T], rails: usize) -> Vec<T> {
    let Some(rails) = effective_rails(cipher.len(), rails) else {
        trace!("rail fence decrypt: identity ({} symbols)", cipher.len());
        return cipher.to_vec();
    };
    debug!("rail fence decrypt: {} symbols over {} rails", cipher.len(), rails);

    // Pass 1: position -> rail
    let layout: Vec<usize> = ZigZag::new(rails).take(cipher.len()).collect();
    let mut rail_lengths = vec![0usize; rails];
    for &rail in &layout {
        rail_lengths[rail] += 1;
    }

    // Pass 2: cut the cipher text into rail buckets
    let mut fence: Vec<&[T]> = Vec::with_capacity(rails);
    let mut rest = cipher;
    for &len in &rail_lengths {
        let (bucket, tail) = rest.split_at(len);
        fence.push(bucket);
        rest = tail;
    }
    assert!(rest.is_empty(), "rail buckets must consume the whole cipher text");

    // Pass 3: replay the zig-zag, taking the next unused symbol of each rail
    let mut cursors = vec![0usize; rails];
    layout
        .into_iter()
        .map(|rail| {
            let symbol = fence[rail][cursors[rail]].clone();
            cursors[rail] += 1;
            symbol
        })
        .collect()
}

/// Rail count from a free-form key: the first run of ASCII digits found
/// anywhere in it, or [`DEFAULT_RAILS`] when there is none.
/// A run too long for `usize` saturates.
pub fn extract_rail_count(key: &str) -> usize {
    let digits: String = key
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return DEFAULT_RAILS;
    }
    digits.parse().unwrap_or(usize::MAX)
}
