// Library exports for testing
pub mod config;
pub mod constants;
pub mod glyph;
pub mod ico;
pub mod icon;
pub mod resample;
