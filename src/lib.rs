//! Particle Swarm Optimization
//!
//! Minimizes a caller-supplied fitness function over a bounded real vector
//! space. A fixed swarm of particles moves under inertia, attraction to each
//! particle's personal best, and attraction to a reference best (swarm-wide
//! or ring neighbourhood). Positions and velocities are saturated to their
//! configured bounds after every update.
//!
//! ```no_run
//! use ndarray::Array1;
//! use particle_swarm::{FnEvaluator, ParticleSwarmOptimizer, SwarmConfig};
//!
//! let sphere = FnEvaluator::new(|x: &Array1<f64>| x.iter().map(|v| v * v).sum());
//! let mut pso = ParticleSwarmOptimizer::new(SwarmConfig::default(), &sphere).unwrap();
//! let result = pso.processing();
//! println!("best {} at {:?}", result.best_fitness, result.best_variables);
//! ```

pub mod common;
pub mod particle;
pub mod swarm;

/// Re-export common types
pub use common::*;
pub use particle::Particle;
pub use swarm::{ParticleSwarmOptimizer, SwarmConfig, SwarmError, SwarmResult, Topology};
