use crate::constraint::distance::{DistanceConstraint, SpringFamily};
use crate::constraint_group::ConstraintGroup;
use crate::layout;
use crate::outline;
use crate::particle::Particle;
use crate::V2;
use protocol::pr_model::Outline;

pub const SPOKE_STIFFNESS: f32 = 0.3;
pub const CROSS_STIFFNESS: f32 = 0.2;
pub const CROSS_STEP: usize = 4;

/// Ring of particles around a center particle, held together by springs.
///
/// Particles `0..ring_len` are the ring in outline order, the center is
/// the last particle.
#[derive(Clone, Debug, Default)]
pub struct PhysicalModel {
	pub particles: Vec<Particle>,
	pub constraints: ConstraintGroup,
	ring_len: usize,
}

impl PhysicalModel {
	pub fn new_ring(center: V2, radius: f32, count: usize, stiffness: f32) -> Self {
		let particles: Vec<Particle> = layout::ring(center, radius, count)
			.into_iter()
			.enumerate()
			.map(|(id, pos)| Particle::new(id, pos))
			.collect();
		let center_id = count;
		let mut constraints = ConstraintGroup::default();
		for idx in 0..count {
			let next = (idx + 1) % count;
			if next != idx {
				let dc = DistanceConstraint::new(&particles, idx, next)
					.with_stiffness(stiffness)
					.with_family(SpringFamily::Edge);
				constraints.add_constraint(dc);
			}
		}
		for idx in 0..count {
			let dc = DistanceConstraint::new(&particles, idx, center_id)
				.with_stiffness(stiffness * SPOKE_STIFFNESS)
				.with_family(SpringFamily::Spoke);
			constraints.add_constraint(dc);
		}
		for idx in 0..count {
			let ahead = (idx + CROSS_STEP) % count;
			if ahead != idx {
				let dc = DistanceConstraint::new(&particles, idx, ahead)
					.with_stiffness(stiffness * CROSS_STIFFNESS)
					.with_family(SpringFamily::Cross);
				constraints.add_constraint(dc);
			}
		}
		Self {
			particles,
			constraints,
			ring_len: count,
		}
	}

	pub fn with_pinned_center(mut self) -> Self {
		let id = self.center_id();
		self.particles[id].pinned = true;
		self
	}

	pub fn center_id(&self) -> usize {
		self.ring_len
	}

	pub fn ring(&self) -> &[Particle] {
		&self.particles[..self.ring_len]
	}

	pub fn ring_positions(&self) -> Vec<V2> {
		self.ring().iter().map(|p| p.get_pos()).collect()
	}

	/// Verlet step for every free particle. The dragged particle is put
	/// on the pointer with no velocity instead.
	pub fn integrate(&mut self, damping: f32, gravity: f32, drag: Option<(usize, V2)>) {
		for p in self.particles.iter_mut() {
			match drag {
				Some((id, pos)) if id == p.get_id() => p.reset_pos(pos),
				_ => p.update(damping, gravity),
			}
		}
	}

	pub fn relax(&mut self, iteration: usize, held: Option<usize>) {
		self.constraints.relax(&mut self.particles, held, iteration);
	}

	pub fn step(
		&mut self,
		damping: f32,
		gravity: f32,
		iteration: usize,
		drag: Option<(usize, V2)>,
	) {
		let drag = drag.filter(|(id, _)| *id < self.particles.len());
		self.integrate(damping, gravity, drag);
		self.relax(iteration, drag.map(|(id, _)| id));
	}

	/// Closest ring particle within `max_dist`, the center is never picked.
	pub fn nearest_ring(&self, pos: V2, max_dist: f32) -> Option<usize> {
		let mut min_dist = f32::INFINITY;
		let mut min_id = None;
		for p in self.ring() {
			let dist = (p.get_pos() - pos).magnitude();
			if dist < min_dist {
				min_dist = dist;
				min_id = Some(p.get_id());
			}
		}
		min_id.filter(|_| min_dist < max_dist)
	}

	pub fn outline(&self) -> Outline {
		outline::smooth_outline(&self.ring_positions())
	}
}
