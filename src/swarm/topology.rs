//! Reference-best lookups over a swarm slice

use crate::common::FitnessEvaluator;
use crate::particle::Particle;

/// Index and best fitness of the particle with the lowest best fitness.
/// Ties go to the lowest index. Panics on an empty swarm.
pub fn best_particle<E: FitnessEvaluator + ?Sized>(swarm: &[Particle<'_, E>]) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_fitness = swarm[0].best_fitness();
    for (i, particle) in swarm.iter().enumerate().skip(1) {
        let fitness = particle.best_fitness();
        if fitness < best_fitness {
            best_idx = i;
            best_fitness = fitness;
        }
    }
    (best_idx, best_fitness)
}

/// Best ring neighbour of `index`. The window runs from `neighbors / 2`
/// places to the left up to, but not including, `neighbors / 2` places to
/// the right, wrapping around the swarm. The particle itself is skipped.
/// Ties go to the first neighbour scanned, starting from the far left.
///
/// The half-width is capped so the window never spans more than the swarm.
pub fn best_neighbor<E: FitnessEvaluator + ?Sized>(
    swarm: &[Particle<'_, E>],
    index: usize,
    neighbors: usize,
) -> Option<usize> {
    let n = swarm.len() as i64;
    let step = (neighbors / 2).min((swarm.len() + 1) / 2) as i64;
    let mut best: Option<(usize, f64)> = None;

    for offset in -step..step {
        let j = (index as i64 + offset).rem_euclid(n) as usize;
        if j == index {
            continue;
        }
        let fitness = swarm[j].best_fitness();
        if best.map_or(true, |(_, best_fitness)| fitness < best_fitness) {
            best = Some((j, fitness));
        }
    }

    best.map(|(j, _)| j)
}
