//! Design space: the candidate representation and its box constraint.
//!
//! - [`Candidate`]: eight reals in [`Dimension`] order
//! - [`Bounds`]: one closed interval per dimension, with uniform sampling
//!   and projection

mod bounds;
mod candidate;

pub use bounds::{Bound, Bounds};
pub use candidate::{Candidate, Dimension, DIM};
