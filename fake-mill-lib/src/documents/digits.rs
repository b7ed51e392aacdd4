//! Digit-sequence helpers shared by the document families.

use rand::Rng;

/// Formatting punctuation accepted (and removed) by every validator.
pub const PUNCTUATION: [char; 3] = ['.', '/', '-'];

/// Remove document punctuation, leaving every other character untouched.
pub fn strip_punctuation(input: &str) -> String {
    input.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Parse exactly `N` ASCII decimal digits.
pub(crate) fn parse_digits<const N: usize>(input: &str) -> Option<[u8; N]> {
    let mut digits = [0u8; N];
    let mut chars = input.chars();
    for slot in digits.iter_mut() {
        let digit = chars.next()?.to_digit(10)?;
        *slot = u8::try_from(digit).ok()?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(digits)
}

/// True when every digit equals the first one.
pub(crate) fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

pub(crate) fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| u32::from(*d) * w).sum()
}

pub(crate) fn random_digits<R: Rng + ?Sized, const N: usize>(rng: &mut R) -> [u8; N] {
    let mut digits = [0u8; N];
    for slot in digits.iter_mut() {
        *slot = rng.gen_range(0..10);
    }
    digits
}

pub(crate) fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit % 10)
}

pub(crate) fn to_string(digits: &[u8]) -> String {
    digits.iter().copied().map(digit_char).collect()
}
