pub mod token_state;

pub use token_state::{InMemoryTokenStore, TokenStateStore};
