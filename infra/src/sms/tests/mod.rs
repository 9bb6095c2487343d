//! SMS gateway tests

mod cloopen_tests;
