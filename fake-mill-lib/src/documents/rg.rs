//! RG: state identity card number, 8 digits plus a check character.
//!
//! The check character is `0`-`9` or `X`.

use rand::Rng;

use super::digits::{
    digit_char, parse_digits, random_digits, strip_punctuation, to_string, weighted_sum,
};

/// Characters in an unformatted RG, check character included.
pub const LENGTH: usize = 9;

const BASE_LENGTH: usize = 8;
const WEIGHTS: [u32; BASE_LENGTH] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Check character for the eight leading digits.
pub fn check_char(base: &[u8; BASE_LENGTH]) -> char {
    match 11 - weighted_sum(base, &WEIGHTS) % 11 {
        10 => 'X',
        11 => '0',
        digit => digit_char(digit as u8),
    }
}

/// Remove punctuation and upper-case the check character.
pub fn unformat(rg: &str) -> String {
    strip_punctuation(rg).to_uppercase()
}

/// Validate an RG, formatted (`XX.XXX.XXX-X`) or bare. A lower-case `x` is accepted.
pub fn validate(input: &str) -> bool {
    let clean = unformat(input);
    let mut chars = clean.chars();

    let Some(check) = chars.next_back() else {
        return false;
    };
    if !(check.is_ascii_digit() || check == 'X') {
        return false;
    }
    let Some(base) = parse_digits::<BASE_LENGTH>(chars.as_str()) else {
        return false;
    };

    check_char(&base) == check
}

/// Render as `XX.XXX.XXX-X`; input that is not 9 characters once cleaned is returned unchanged.
pub fn format(rg: &str) -> String {
    let clean = unformat(rg);
    if clean.len() != LENGTH || !clean.is_ascii() {
        return rg.to_string();
    }
    format!("{}.{}.{}-{}", &clean[0..2], &clean[2..5], &clean[5..8], &clean[8..9])
}

/// Generate an RG number.
///
/// With `valid == false` the check character is a random digit.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, formatted: bool, valid: bool) -> String {
    let base: [u8; BASE_LENGTH] = random_digits(rng);
    let check = if valid { check_char(&base) } else { digit_char(rng.gen_range(0..10)) };

    let mut rg = to_string(&base);
    rg.push(check);

    if formatted {
        format(&rg)
    } else {
        rg
    }
}
