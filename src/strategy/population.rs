//! Bookkeeping shared by every strategy: scored candidates, best/worst
//! lookup with earliest-index tie-breaking, and stable ranking.

use crate::model::{self, Objective, WORST_FITNESS};
use crate::space::{Bounds, Candidate};
use rand::Rng;
use std::cmp::Ordering;

/// A candidate together with its guarded fitness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored {
    pub candidate: Candidate,
    pub fitness: f64,
}

impl Scored {
    /// Evaluates `candidate`, mapping non-finite output to [`WORST_FITNESS`].
    pub fn evaluate<O: Objective + ?Sized>(objective: &O, candidate: Candidate) -> Self {
        Self {
            fitness: model::fitness(objective, &candidate),
            candidate,
        }
    }

    /// Strictly fitter than `other`. Ties are not improvements.
    #[inline]
    pub fn beats(&self, other: &Scored) -> bool {
        self.fitness > other.fitness
    }

    /// Whether this fitness came from a finite objective value.
    pub fn is_valid(&self) -> bool {
        self.fitness > WORST_FITNESS
    }
}

/// Samples and evaluates `size` fresh candidates.
pub fn random_population<O, R>(bounds: &Bounds, objective: &O, size: usize, rng: &mut R) -> Vec<Scored>
where
    O: Objective + ?Sized,
    R: Rng,
{
    (0..size)
        .map(|_| Scored::evaluate(objective, bounds.sample(rng)))
        .collect()
}

/// Replaces `incumbent` with `challenger` if the challenger is strictly fitter.
///
/// Returns `true` on replacement.
#[inline]
pub fn improve(incumbent: &mut Scored, challenger: &Scored) -> bool {
    if challenger.beats(incumbent) {
        *incumbent = *challenger;
        true
    } else {
        false
    }
}

/// Index of the fittest member. The earliest index wins ties.
pub fn best_index(members: &[Scored]) -> Option<usize> {
    let mut iter = members.iter().enumerate();
    let (mut best, mut best_fit) = iter.next().map(|(i, s)| (i, s.fitness))?;
    for (i, s) in iter {
        if s.fitness > best_fit {
            best = i;
            best_fit = s.fitness;
        }
    }
    Some(best)
}

/// Index of the least fit member. The earliest index wins ties.
pub fn worst_index(members: &[Scored]) -> Option<usize> {
    let mut iter = members.iter().enumerate();
    let (mut worst, mut worst_fit) = iter.next().map(|(i, s)| (i, s.fitness))?;
    for (i, s) in iter {
        if s.fitness < worst_fit {
            worst = i;
            worst_fit = s.fitness;
        }
    }
    Some(worst)
}

/// Sorts fittest-first. Stable, so equal fitness keeps insertion order.
pub fn rank_descending(members: &mut [Scored]) {
    members.sort_by(|a, b| descending(a.fitness, b.fitness));
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
