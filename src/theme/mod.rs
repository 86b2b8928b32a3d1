//! Theme for the Orbgate portal.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
