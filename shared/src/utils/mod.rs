//! Shared utility functions

pub mod validation;

pub use validation::{is_valid_password, is_valid_phone, mask_phone};
