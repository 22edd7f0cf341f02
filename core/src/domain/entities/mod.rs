//! Domain entities.

pub mod principal;

pub use principal::{Principal, CLAIM_EMAIL, CLAIM_ID, CLAIM_USERNAME};
