//! Record generators built on the document algorithms and reference data.
//!
//! Each submodule exposes a `generate` function over any [`rand::Rng`] so tests
//! can seed it; [`Generator`] wires them to the thread-local RNG and the
//! current date.

pub mod bank;
pub mod card;
pub mod email;
pub mod phone;
pub mod rg;

use chrono::{NaiveDate, Utc};
use rand::thread_rng;

use crate::documents::{cnpj, cpf};

pub use bank::{AccountType, BankAccount};
pub use card::CreditCard;
pub use email::Email;
pub use phone::{NumberType, Phone, PhoneKind, PhoneValidation, Region};
pub use rg::RgDocument;

/// Stateless entry point used by request handlers.
///
/// Safe to share across threads: every call draws from the calling thread's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    pub fn cpf(&self, formatted: bool, valid: bool) -> String {
        cpf::generate(&mut thread_rng(), formatted, valid)
    }

    pub fn cnpj(&self, formatted: bool, valid: bool) -> String {
        cnpj::generate(&mut thread_rng(), formatted, valid)
    }

    pub fn rg(&self, state: Option<&str>, formatted: bool, valid: bool) -> RgDocument {
        rg::generate(&mut thread_rng(), today(), state, formatted, valid)
    }

    pub fn email(&self, domain: Option<&str>) -> Email {
        email::generate(&mut thread_rng(), domain)
    }

    pub fn phone(&self, state: Option<&str>, kind: Option<PhoneKind>) -> Phone {
        phone::generate(&mut thread_rng(), state, kind)
    }

    pub fn bank_account(&self, bank: Option<&str>) -> BankAccount {
        bank::generate(&mut thread_rng(), bank)
    }

    pub fn credit_card(&self, brand: Option<&str>) -> CreditCard {
        card::generate(&mut thread_rng(), today(), brand)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
