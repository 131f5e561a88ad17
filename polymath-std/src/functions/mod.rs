//! Hyperbolic functions

mod acosh;
mod csch;

pub use acosh::{acosh, acosh_real};
pub use csch::{csch, csch_real};
