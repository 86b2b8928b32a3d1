//! Page components for the Orbgate portal.

mod connected;
mod portal;

pub use connected::{Arrival, Connected};
pub use portal::Portal;
