//! Captcha image generation
//!
//! Renders short random codes as distorted JPEG images using a built-in
//! bitmap font, so no font files ship with the binary.

pub mod font;
pub mod generator;

#[cfg(test)]
mod tests;

pub use generator::JpegCaptcha;
