//! CNPJ: 14-digit company registration number.
//!
//! Layout is 8 root digits, a 4-digit branch (`0001` for the head office)
//! and two mod-11 check digits.

use rand::Rng;

use super::digits::{
    is_repeated, parse_digits, random_digits, strip_punctuation, to_string, weighted_sum,
};

/// Digits in an unformatted CNPJ.
pub const LENGTH: usize = 14;

const BASE_LENGTH: usize = 12;
const ROOT_LENGTH: usize = 8;
const HEAD_OFFICE: [u8; 4] = [0, 0, 0, 1];

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let remainder = weighted_sum(digits, weights) % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Both check digits for the twelve leading digits.
pub fn check_digits(base: &[u8; BASE_LENGTH]) -> [u8; 2] {
    let first = check_digit(base, &FIRST_WEIGHTS);

    let mut extended = [0u8; BASE_LENGTH + 1];
    extended[..BASE_LENGTH].copy_from_slice(base);
    extended[BASE_LENGTH] = first;

    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

/// Validate a CNPJ, formatted (`XX.XXX.XXX/XXXX-XX`) or bare.
pub fn validate(input: &str) -> bool {
    let Some(digits) = parse_digits::<LENGTH>(&strip_punctuation(input)) else {
        return false;
    };
    if is_repeated(&digits) {
        return false;
    }

    let mut base = [0u8; BASE_LENGTH];
    base.copy_from_slice(&digits[..BASE_LENGTH]);
    check_digits(&base) == [digits[12], digits[13]]
}

/// Render 14 digits as `XX.XXX.XXX/XXXX-XX`; anything else is returned unchanged.
pub fn format(cnpj: &str) -> String {
    if cnpj.len() != LENGTH || !cnpj.is_ascii() {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &cnpj[0..2],
        &cnpj[2..5],
        &cnpj[5..8],
        &cnpj[8..12],
        &cnpj[12..14]
    )
}

pub fn unformat(cnpj: &str) -> String {
    strip_punctuation(cnpj)
}

/// Generate a head-office CNPJ.
///
/// With `valid == false` all 14 digits are random (branch included).
pub fn generate<R: Rng + ?Sized>(rng: &mut R, formatted: bool, valid: bool) -> String {
    let cnpj = if valid {
        let root: [u8; ROOT_LENGTH] = random_digits(rng);
        let mut base = [0u8; BASE_LENGTH];
        base[..ROOT_LENGTH].copy_from_slice(&root);
        base[ROOT_LENGTH..].copy_from_slice(&HEAD_OFFICE);

        let [first, second] = check_digits(&base);
        let mut digits = base.to_vec();
        digits.extend([first, second]);
        to_string(&digits)
    } else {
        to_string(&random_digits::<R, LENGTH>(rng))
    };

    if formatted {
        format(&cnpj)
    } else {
        cnpj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
    }

    #[test]
    fn low_remainder_yields_zero() {
        // remainders 0 and 0
        assert_eq!(check_digits(&[1, 1, 2, 2, 2, 5, 8, 5, 0, 0, 0, 1]), [0, 0]);
        // remainders 1 and 1
        assert_eq!(check_digits(&[1, 1, 2, 2, 2, 4, 0, 3, 0, 0, 0, 1]), [0, 0]);
        // second remainder 1
        assert_eq!(check_digits(&[1, 1, 2, 2, 2, 3, 3, 7, 0, 0, 0, 1]), [6, 0]);

        assert!(validate("11.222.585/0001-00"));
        assert!(validate("11222403000100"));
        assert!(validate("11.222.337/0001-60"));
        assert!(!validate("11.222.337/0001-61"));
    }

    #[test]
    fn format_layout() {
        assert_eq!(format("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format("1122233300018"), "1122233300018");
    }
}
