//! Static reference data compiled into the binary.

pub mod banks;
pub mod domains;
pub mod names;
pub mod states;

pub use banks::{find_bank, random_bank, Bank, BANKS};
pub use domains::random_domain;
pub use names::random_full_name;
pub use states::{find_state, random_state, State, STATES};
