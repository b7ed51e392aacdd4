use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bank {
    pub code: &'static str,
    pub name: &'static str,
}

pub static BANKS: &[Bank] = &[
    Bank { code: "001", name: "Banco do Brasil" },
    Bank { code: "237", name: "Bradesco" },
    Bank { code: "341", name: "Itaú Unibanco" },
    Bank { code: "104", name: "Caixa Econômica Federal" },
    Bank { code: "033", name: "Santander" },
    Bank { code: "260", name: "Nu Pagamentos S.A. (Nubank)" },
    Bank { code: "077", name: "Banco Inter" },
    Bank { code: "336", name: "Banco C6 S.A." },
];

pub fn find_bank(code: &str) -> Option<&'static Bank> {
    BANKS.iter().find(|bank| bank.code == code.trim())
}

pub fn random_bank<R: Rng + ?Sized>(rng: &mut R) -> &'static Bank {
    &BANKS[rng.gen_range(0..BANKS.len())]
}
