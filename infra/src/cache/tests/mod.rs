//! Cache tests

mod redis_client_tests;
