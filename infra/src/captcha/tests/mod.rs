//! Captcha tests
