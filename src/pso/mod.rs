//! Particle Swarm Optimization (PSO).
//!
//! Each particle keeps a position, a velocity and its personal best; the
//! swarm shares one global best. Per iteration:
//!
//! ```text
//! v ← w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)     (clamped)
//! x ← project(x + v)
//! ```
//!
//! followed by personal/global best updates. PSO also watches its own
//! progress: once the global best has improved by less than
//! `stagnation_threshold` for `stagnation_patience` consecutive iterations,
//! that iteration is recorded as the swarm's stagnation point.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod strategy;
mod types;

pub use config::PsoConfig;
pub use strategy::ParticleSwarm;
pub use types::{Particle, PsoState};
