//! CPF: 11-digit individual taxpayer number with two mod-11 check digits.

use rand::Rng;

use super::digits::{is_repeated, parse_digits, random_digits, strip_punctuation, to_string};

/// Digits in an unformatted CPF.
pub const LENGTH: usize = 11;

/// Leading digits drawn at random.
const BASE_LENGTH: usize = 9;

/// Check digit over `digits`, weighted from `len + 1` down to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip(2u32..)
        .map(|(d, weight)| u32::from(*d) * weight)
        .sum();
    let digit = 11 - sum % 11;
    if digit >= 10 {
        0
    } else {
        digit as u8
    }
}

/// Both check digits for the nine leading digits.
pub fn check_digits(base: &[u8; BASE_LENGTH]) -> [u8; 2] {
    let first = check_digit(base);

    let mut extended = [0u8; BASE_LENGTH + 1];
    extended[..BASE_LENGTH].copy_from_slice(base);
    extended[BASE_LENGTH] = first;

    [first, check_digit(&extended)]
}

/// Validate a CPF, formatted (`XXX.XXX.XXX-XX`) or bare.
pub fn validate(input: &str) -> bool {
    let Some(digits) = parse_digits::<LENGTH>(&strip_punctuation(input)) else {
        return false;
    };
    if is_repeated(&digits) {
        return false;
    }

    let mut base = [0u8; BASE_LENGTH];
    base.copy_from_slice(&digits[..BASE_LENGTH]);
    check_digits(&base) == [digits[9], digits[10]]
}

/// Render 11 digits as `XXX.XXX.XXX-XX`; anything else is returned unchanged.
pub fn format(cpf: &str) -> String {
    if cpf.len() != LENGTH || !cpf.is_ascii() {
        return cpf.to_string();
    }
    format!("{}.{}.{}-{}", &cpf[0..3], &cpf[3..6], &cpf[6..9], &cpf[9..11])
}

pub fn unformat(cpf: &str) -> String {
    strip_punctuation(cpf)
}

/// Generate a CPF.
///
/// With `valid == false` every position, check digits included, is random,
/// so a small fraction of outputs still passes [`validate`].
pub fn generate<R: Rng + ?Sized>(rng: &mut R, formatted: bool, valid: bool) -> String {
    let cpf = if valid {
        let base: [u8; BASE_LENGTH] = random_digits(rng);
        let [first, second] = check_digits(&base);
        let mut digits = base.to_vec();
        digits.extend([first, second]);
        to_string(&digits)
    } else {
        to_string(&random_digits::<R, LENGTH>(rng))
    };

    if formatted {
        format(&cpf)
    } else {
        cpf
    }
}
