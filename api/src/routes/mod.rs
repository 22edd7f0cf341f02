//! Route handlers

pub mod token;
