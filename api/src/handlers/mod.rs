//! Response builders shared across routes

pub mod error;
