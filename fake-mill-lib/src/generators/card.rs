use chrono::Datelike;
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::reference::random_full_name;

pub const BRANDS: [&str; 4] = ["visa", "mastercard", "elo", "amex"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub number: String,
    pub brand: String,
    pub cvv: String,
    pub expiration_date: String,
    pub holder_name: String,
}

/// Card of the requested brand (random when `None`), expiring two to five years after `today`.
///
/// The number is sixteen random digits in groups of four and carries no Luhn check.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, brand: Option<&str>) -> CreditCard {
    let brand = match brand.map(str::trim).filter(|b| !b.is_empty()) {
        Some(brand) => capitalize(brand),
        None => capitalize(BRANDS[rng.gen_range(0..BRANDS.len())]),
    };

    let number = (0..4)
        .map(|_| format!("{:04}", rng.gen_range(0..10_000)))
        .collect::<Vec<_>>()
        .join(" ");
    let cvv = format!("{:03}", rng.gen_range(0..1_000));

    let year = today.year() + rng.gen_range(2..=5);
    let month = rng.gen_range(1..=12);
    let expiration_date = format!("{month:02}/{:02}", year.rem_euclid(100));

    CreditCard { number, brand, cvv, expiration_date, holder_name: random_full_name(rng) }
}

fn capitalize(value: &str) -> String {
    let lower = value.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn brand_is_capitalized() {
        let mut rng = StdRng::seed_from_u64(4);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(generate(&mut rng, today, Some("MASTERCARD")).brand, "Mastercard");
        let random = generate(&mut rng, today, None).brand;
        assert!(BRANDS.iter().any(|b| capitalize(b) == random));
    }

    #[test]
    fn card_fields_have_expected_shape() {
        let mut rng = StdRng::seed_from_u64(8);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for _ in 0..50 {
            let card = generate(&mut rng, today, Some("visa"));
            assert_eq!(card.number.len(), 19);
            assert_eq!(card.number.split(' ').count(), 4);
            assert_eq!(card.cvv.len(), 3);

            let (month, year) = card.expiration_date.split_once('/').unwrap();
            assert!((1..=12).contains(&month.parse::<u32>().unwrap()));
            assert!((27..=30).contains(&year.parse::<u32>().unwrap()));
            assert_eq!(card.holder_name.split(' ').count(), 2);
        }
    }
}
