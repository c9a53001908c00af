//! Visual theme for Career Theme Park.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
