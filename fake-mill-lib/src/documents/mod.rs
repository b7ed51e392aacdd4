//! Brazilian document numbers: check-digit arithmetic, validation,
//! formatting and random generation.
//!
//! | Module   | Document | Digits          | Check               |
//! |----------|----------|-----------------|---------------------|
//! | [`cpf`]  | CPF      | 9 + 2           | two mod-11 digits   |
//! | [`cnpj`] | CNPJ     | 12 + 2          | two mod-11 digits   |
//! | [`rg`]   | RG       | 8 + 1           | mod-11 digit or `X` |
//!
//! Validators are total: any string, including empty or non-ASCII input,
//! yields `true` or `false`.

pub mod cnpj;
pub mod cpf;
mod digits;
pub mod rg;

pub use digits::{strip_punctuation, PUNCTUATION};
