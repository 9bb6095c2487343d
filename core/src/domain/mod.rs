//! Domain model

pub mod entities;
