//! Domain layer containing the identity carried inside tokens.

pub mod entities;

pub use entities::*;
