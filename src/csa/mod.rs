//! Cuckoo Search (CSA).
//!
//! Every generation each nest lays one egg a Lévy flight away; the egg
//! replaces its own nest only if it is fitter. Independently, a fraction
//! `discovery_rate` of the nests is found by the hosts and rebuilt at
//! random positions.
//!
//! ```text
//! x' = project(x + step_scale · width ⊙ Lévy(β))
//! ```
//!
//! # References
//!
//! - Yang & Deb (2009), "Cuckoo Search via Lévy Flights"

mod config;
mod levy;
mod strategy;
mod types;

pub use config::CsaConfig;
pub use levy::LevyFlight;
pub use strategy::CuckooSearch;
pub use types::CsaState;
