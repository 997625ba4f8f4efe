use crate::constraint::MIN_DISTANCE;
use crate::particle::Particle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpringFamily {
	// neighbours on the ring
	Edge,
	// ring point to center
	Spoke,
	// ring point to the one a few places ahead
	Cross,
}

/// Spring between two particles of the same arena, by index.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint {
	ps: [usize; 2],
	l0: f32,
	stiffness: f32,
	family: SpringFamily,
}

impl DistanceConstraint {
	pub fn new(particles: &[Particle], p1: usize, p2: usize) -> Self {
		let l0 = (particles[p1].get_pos() - particles[p2].get_pos()).magnitude();
		Self::new_with_l0(p1, p2, l0)
	}

	pub fn new_with_l0(p1: usize, p2: usize, l0: f32) -> Self {
		Self {
			ps: [p1, p2],
			l0,
			stiffness: 1.0,
			family: SpringFamily::Edge,
		}
	}

	pub fn with_stiffness(mut self, k: f32) -> Self {
		debug_assert!(k > 0. && k <= 1., "stiffness {} out of (0, 1]", k);
		self.stiffness = k;
		self
	}

	pub fn with_family(mut self, family: SpringFamily) -> Self {
		self.family = family;
		self
	}

	pub fn particles(&self) -> [usize; 2] {
		self.ps
	}

	pub fn get_l0(&self) -> f32 {
		self.l0
	}

	pub fn get_stiffness(&self) -> f32 {
		self.stiffness
	}

	pub fn family(&self) -> SpringFamily {
		self.family
	}

	pub fn length(&self, particles: &[Particle]) -> f32 {
		(particles[self.ps[1]].get_pos() - particles[self.ps[0]].get_pos())
			.magnitude()
	}

	/// One relaxation of this spring. `held` (the dragged particle) and
	/// pinned particles are not moved.
	pub fn step(&self, particles: &mut [Particle], held: Option<usize>) {
		let [i1, i2] = self.ps;
		let dp = particles[i2].get_pos() - particles[i1].get_pos();
		let l = dp.magnitude();
		if l < MIN_DISTANCE {
			return;
		}
		let correct = dp * ((self.l0 - l) / l * self.stiffness * 0.5);
		if !particles[i1].pinned && held != Some(i1) {
			particles[i1].add_pos(-correct);
		}
		if !particles[i2].pinned && held != Some(i2) {
			particles[i2].add_pos(correct);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::V2;

	fn pair(d: f32) -> Vec<Particle> {
		vec![
			Particle::new(0, V2::new(0., 0.)),
			Particle::new(1, V2::new(d, 0.)),
		]
	}

	#[test]
	fn test_rest_length_captured() {
		let ps = pair(3.);
		let dc = DistanceConstraint::new(&ps, 0, 1);
		assert!((dc.get_l0() - 3.).abs() < 1e-6);
	}

	#[test]
	fn test_relax_converges() {
		for k in [0.05f32, 0.2, 0.5, 1.0] {
			for d0 in [1f32, 25.] {
				let mut ps = pair(d0);
				let dc = DistanceConstraint::new_with_l0(0, 1, 10.).with_stiffness(k);
				let mut last = (dc.length(&ps) - 10.).abs();
				for _ in 0..500 {
					dc.step(&mut ps, None);
					let err = (dc.length(&ps) - 10.).abs();
					assert!(err.is_finite());
					assert!(err <= last + 1e-4);
					last = err;
				}
				assert!(last < 1e-3, "k {} d0 {} err {}", k, d0, last);
			}
		}
	}

	#[test]
	fn test_full_stiffness_is_exact() {
		let mut ps = pair(4.);
		let dc = DistanceConstraint::new_with_l0(0, 1, 10.);
		dc.step(&mut ps, None);
		assert!((ps[0].get_pos() - V2::new(-3., 0.)).magnitude() < 1e-5);
		assert!((ps[1].get_pos() - V2::new(7., 0.)).magnitude() < 1e-5);
	}

	#[test]
	fn test_held_and_pinned_do_not_move() {
		let mut ps = pair(4.);
		let dc = DistanceConstraint::new_with_l0(0, 1, 10.);
		dc.step(&mut ps, Some(0));
		assert_eq!(ps[0].get_pos(), V2::new(0., 0.));
		assert!((ps[1].get_pos() - V2::new(7., 0.)).magnitude() < 1e-5);

		let mut ps = pair(4.);
		ps[1].pinned = true;
		dc.step(&mut ps, None);
		assert_eq!(ps[1].get_pos(), V2::new(4., 0.));
	}

	#[test]
	fn test_degenerate_is_skipped() {
		let mut ps = pair(0.0001);
		let dc = DistanceConstraint::new_with_l0(0, 1, 10.);
		dc.step(&mut ps, None);
		assert_eq!(ps[0].get_pos(), V2::new(0., 0.));
		assert_eq!(ps[1].get_pos(), V2::new(0.0001, 0.));
	}
}
