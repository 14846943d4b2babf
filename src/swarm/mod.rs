//! Particle swarm optimizer
//!
//! Owns a fixed swarm of particles and runs the two-pass update loop:
//! every particle moves first, then every personal best is refreshed.
//! The loop stops when the iteration budget is spent or a particle hits
//! the desired fitness exactly.

pub mod config;
pub mod topology;

pub use config::{SwarmConfig, SwarmError, SwarmResult, Topology};

use crate::common::{FitnessEvaluator, OptimizationResult};
use crate::particle::Particle;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

pub struct ParticleSwarmOptimizer<'a, E: FitnessEvaluator + ?Sized, R: Rng = StdRng> {
    config: SwarmConfig,
    swarm: Vec<Particle<'a, E>>,
    rng: R,
}

impl<'a, E: FitnessEvaluator + ?Sized> ParticleSwarmOptimizer<'a, E, StdRng> {
    /// Build and initialize a swarm driven by an entropy-seeded generator.
    pub fn new(config: SwarmConfig, evaluator: &'a E) -> SwarmResult<Self> {
        Self::with_rng(config, evaluator, StdRng::from_entropy())
    }

    /// Scalar form of [`ParticleSwarmOptimizer::new`] using the default topology.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parameters(
        dimension: usize,
        swarm_size: usize,
        neighbors: usize,
        max_iterations: usize,
        velocity_min: f64,
        velocity_max: f64,
        fitness_desired: f64,
        position_min: f64,
        position_max: f64,
        individual_coefficient: f64,
        collective_coefficient: f64,
        inertia_coefficient: f64,
        evaluator: &'a E,
    ) -> SwarmResult<Self> {
        Self::from_parameters_with_rng(
            dimension,
            swarm_size,
            neighbors,
            max_iterations,
            velocity_min,
            velocity_max,
            fitness_desired,
            position_min,
            position_max,
            individual_coefficient,
            collective_coefficient,
            inertia_coefficient,
            evaluator,
            StdRng::from_entropy(),
        )
    }
}

impl<'a, E: FitnessEvaluator + ?Sized, R: Rng> ParticleSwarmOptimizer<'a, E, R> {
    /// Build and initialize a swarm drawing all randomness from `rng`.
    pub fn with_rng(config: SwarmConfig, evaluator: &'a E, rng: R) -> SwarmResult<Self> {
        if let Err(e) = config.validate() {
            warn!("Rejected swarm configuration: {}", e);
            return Err(e);
        }

        let swarm = (0..config.swarm_size)
            .map(|_| Particle::new(config.dimension, evaluator))
            .collect();

        let mut optimizer = Self { config, swarm, rng };
        optimizer.initialize_swarm();

        info!(
            "PSO swarm initialized: {} particles in {} dimensions, topology {:?}",
            optimizer.config.swarm_size, optimizer.config.dimension, optimizer.config.topology
        );
        Ok(optimizer)
    }

    /// Scalar form of [`ParticleSwarmOptimizer::with_rng`] using the default topology.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parameters_with_rng(
        dimension: usize,
        swarm_size: usize,
        neighbors: usize,
        max_iterations: usize,
        velocity_min: f64,
        velocity_max: f64,
        fitness_desired: f64,
        position_min: f64,
        position_max: f64,
        individual_coefficient: f64,
        collective_coefficient: f64,
        inertia_coefficient: f64,
        evaluator: &'a E,
        rng: R,
    ) -> SwarmResult<Self> {
        let config = SwarmConfig {
            dimension,
            swarm_size,
            neighbors,
            max_iterations,
            velocity_min,
            velocity_max,
            fitness_desired,
            position_min,
            position_max,
            individual_coefficient,
            collective_coefficient,
            inertia_coefficient,
            topology: Topology::default(),
        };
        Self::with_rng(config, evaluator, rng)
    }

    fn initialize_swarm(&mut self) {
        let config = &self.config;
        for particle in self.swarm.iter_mut() {
            for d in 0..config.dimension {
                let position =
                    rand_between(&mut self.rng, config.position_min, config.position_max);
                particle.set_position(d, position);
                particle.set_best_position(d, position);
                particle.set_velocity(
                    d,
                    rand_between(&mut self.rng, config.velocity_min, config.velocity_max),
                );
            }
        }
    }

    /// Run the search from the current swarm state.
    pub fn processing(&mut self) -> OptimizationResult {
        let max_iterations = self.config.max_iterations;
        let mut history = Vec::with_capacity(max_iterations);
        let mut iteration = 0;
        let mut solution_found = false;

        while iteration < max_iterations && !solution_found {
            let (global_best, best_fitness) = topology::best_particle(&self.swarm);
            history.push(best_fitness);

            if iteration % 10 == 0 {
                debug!(
                    "PSO iteration {}/{}: best fitness {}",
                    iteration, max_iterations, best_fitness
                );
            }

            // Personal bests do not move until every particle has moved.
            for i in 0..self.swarm.len() {
                let reference = match self.config.topology {
                    Topology::GlobalSnapshot => global_best,
                    Topology::GlobalPerParticle => topology::best_particle(&self.swarm).0,
                    Topology::Ring => self.best_neighbor(i).unwrap_or(i),
                };
                let social_target = self.swarm[reference].best_positions().clone();
                self.move_particle(i, &social_target);
            }

            for particle in self.swarm.iter_mut() {
                if particle.update_best() == self.config.fitness_desired {
                    solution_found = true;
                }
            }

            iteration += 1;
        }

        let (best_idx, best_fitness) = topology::best_particle(&self.swarm);
        info!(
            "PSO finished after {} iterations: best fitness {}, target {} {}",
            iteration,
            best_fitness,
            self.config.fitness_desired,
            if solution_found { "reached" } else { "not reached" }
        );

        OptimizationResult {
            best_variables: self.swarm[best_idx].best_positions().clone(),
            best_fitness,
            history,
            iterations: iteration,
            solution_found,
        }
    }

    fn move_particle(&mut self, index: usize, social_target: &Array1<f64>) {
        let config = &self.config;
        let particle = &mut self.swarm[index];

        for d in 0..particle.dimension() {
            let r1: f64 = self.rng.gen();
            let r2: f64 = self.rng.gen();

            let position = particle.position(d);
            let cognitive =
                config.individual_coefficient * r1 * (particle.best_position(d) - position);
            let social = config.collective_coefficient * r2 * (social_target[d] - position);

            let velocity = config.bounded_velocity(
                config.inertia_coefficient * particle.velocity(d) + cognitive + social,
            );
            particle.set_velocity(d, velocity);
            particle.set_position(d, config.bounded_position(position + velocity));
        }
    }

    /// Particle with the lowest best fitness; ties go to the lowest index.
    pub fn best_particle(&self) -> &Particle<'a, E> {
        &self.swarm[topology::best_particle(&self.swarm).0]
    }

    /// Best ring neighbour of the particle at `index`, see [`topology::best_neighbor`].
    pub fn best_neighbor(&self, index: usize) -> Option<usize> {
        topology::best_neighbor(&self.swarm, index, self.config.neighbors)
    }

    pub fn particles(&self) -> &[Particle<'a, E>] {
        &self.swarm
    }

    pub fn particle(&self, index: usize) -> &Particle<'a, E> {
        &self.swarm[index]
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }
}

/// Uniform draw in `[min, max)`
fn rand_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.gen::<f64>()
}
