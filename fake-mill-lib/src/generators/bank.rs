use rand::Rng;
use serde::Serialize;

use crate::reference::{find_bank, random_bank, Bank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub bank: Bank,
    pub agency: String,
    pub account: String,
    pub account_type: AccountType,
}

/// Account at the bank with code `bank`, or at a random bank when the code is unknown.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, bank: Option<&str>) -> BankAccount {
    let bank = *bank.and_then(find_bank).unwrap_or_else(|| random_bank(rng));
    let agency = format!("{:04}-{}", rng.gen_range(1..=9_999), rng.gen_range(0..10));
    let account = format!("{:08}-{}", rng.gen_range(1..=99_999_999), rng.gen_range(0..10));
    let account_type = if rng.gen_bool(0.5) { AccountType::Checking } else { AccountType::Savings };

    BankAccount { bank, agency, account, account_type }
}
