use crate::constraint::distance::{DistanceConstraint, SpringFamily};
use crate::particle::Particle;

#[derive(Clone, Debug, Default)]
pub struct ConstraintGroup {
	constraints: Vec<DistanceConstraint>,
}

impl ConstraintGroup {
	pub fn add_constraint(&mut self, constraint: DistanceConstraint) -> usize {
		self.constraints.push(constraint);
		self.constraints.len() - 1
	}

	pub fn len(&self) -> usize {
		self.constraints.len()
	}

	pub fn is_empty(&self) -> bool {
		self.constraints.is_empty()
	}

	pub fn count(&self, family: SpringFamily) -> usize {
		self.constraints
			.iter()
			.filter(|c| c.family() == family)
			.count()
	}

	pub fn iter(&self) -> impl Iterator<Item = &DistanceConstraint> {
		self.constraints.iter()
	}

	// sequential on purpose, every spring sees the previous corrections
	pub fn solve_constraints(
		&self,
		particles: &mut [Particle],
		held: Option<usize>,
	) {
		for constraint in self.constraints.iter() {
			constraint.step(particles, held);
		}
	}

	pub fn relax(
		&self,
		particles: &mut [Particle],
		held: Option<usize>,
		iteration: usize,
	) {
		for _ in 0..iteration {
			self.solve_constraints(particles, held);
		}
	}
}
