use crate::V2;
use protocol::color::Color;
use protocol::pr_model::{DotStyle, PrDot};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repulsion {
	// pull all the way onto the influence circle each tick
	Hard,
	// pull scaled by (1 - d / r) * softness
	Soft(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallParams {
	pub mouse_radius: f32,
	pub friction: f32,
	// negative: pulls toward the rest position
	pub spring_factor: f32,
	pub repulsion: Repulsion,
}

impl Default for BallParams {
	fn default() -> Self {
		Self {
			mouse_radius: 30.0,
			friction: 0.7,
			spring_factor: -0.01,
			repulsion: Repulsion::Hard,
		}
	}
}

/// A point that springs back to where it was created.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
	pub pos: V2,
	orig: V2,
	pub vel: V2,
	pub radius: f32,
	pub color: Color,
}

impl Ball {
	pub const DEFAULT_COLOR: Color = Color::rgb(0xff, 0x66, 0x00);

	pub fn new(pos: V2) -> Self {
		Self {
			pos,
			orig: pos,
			vel: V2::zeros(),
			radius: 2.0,
			color: Self::DEFAULT_COLOR,
		}
	}

	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}

	pub fn with_color(mut self, color: Color) -> Self {
		self.color = color;
		self
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_orig(&self) -> V2 {
		self.orig
	}

	pub fn set_pos(&mut self, pos: V2) {
		self.pos = pos;
	}

	/// Velocity change caused by a pointer at `pointer`.
	pub fn repulsion(&self, pointer: V2, params: &BallParams) -> V2 {
		let dp = self.pos - pointer;
		let dist = dp.magnitude();
		let r = params.mouse_radius;
		if dist >= r {
			return V2::zeros();
		}
		let (dir, pull) = match params.repulsion {
			Repulsion::Hard => {
				// atan2(0, 0) == 0, so a centered pointer pushes along +x
				let dir = if dist > 0. {
					dp / dist
				} else {
					V2::new(1., 0.)
				};
				(dir, 1.0)
			}
			Repulsion::Soft(softness) => {
				if dist == 0. {
					return V2::zeros();
				}
				(dp / dist, (1. - dist / r) * softness)
			}
		};
		let target = pointer + dir * r;
		(target - self.pos) * pull
	}

	pub fn spring(&self, params: &BallParams) -> V2 {
		(self.pos - self.orig) * params.spring_factor
	}

	pub fn update(&mut self, pointer: Option<V2>, params: &BallParams) {
		if let Some(pointer) = pointer {
			self.vel += self.repulsion(pointer, params);
		}
		self.vel += self.spring(params);
		self.vel *= params.friction;
		self.pos += self.vel;
	}

	pub fn render(&self) -> PrDot {
		PrDot {
			pos: self.pos.into(),
			radius: self.radius,
			color: self.color,
			style: DotStyle::Ball,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_spring_return_monotonic() {
		let params = BallParams::default();
		let mut ball = Ball::new(V2::zeros());
		ball.set_pos(V2::new(10., 0.));
		let mut last = ball.get_pos().magnitude();
		let mut ticks = 0;
		while last >= 0.01 {
			ball.update(None, &params);
			let dist = (ball.get_pos() - ball.get_orig()).magnitude();
			assert!(dist < last, "tick {}: {} !< {}", ticks, dist, last);
			last = dist;
			ticks += 1;
			assert!(ticks < 2000, "did not settle");
		}
		eprintln!("settled after {} ticks", ticks);
	}

	#[test]
	fn test_rest_is_fixed() {
		let params = BallParams::default();
		let mut ball = Ball::new(V2::new(5., 5.));
		for _ in 0..10 {
			ball.update(Some(V2::new(6., 5.)), &params);
		}
		assert_eq!(ball.get_orig(), V2::new(5., 5.));
		assert!(ball.get_pos() != ball.get_orig());
	}

	#[test]
	fn test_hard_repulsion() {
		let params = BallParams::default();
		let ball = Ball::new(V2::new(10., 0.));
		let dv = ball.repulsion(V2::zeros(), &params);
		assert!((dv - V2::new(20., 0.)).magnitude() < 1e-5);
		let far = Ball::new(V2::new(31., 0.));
		assert_eq!(far.repulsion(V2::zeros(), &params), V2::zeros());
		let centered = Ball::new(V2::new(3., 4.));
		let dv = centered.repulsion(V2::new(3., 4.), &params);
		assert!((dv - V2::new(30., 0.)).magnitude() < 1e-5);
	}

	#[test]
	fn test_soft_repulsion_falloff() {
		let params = BallParams {
			mouse_radius: 60.,
			repulsion: Repulsion::Soft(0.6),
			..Default::default()
		};
		let pointer = V2::new(100., 100.);
		let dir = V2::new(0.6, 0.8);
		let near = Ball::new(pointer + dir * 10.);
		let far = Ball::new(pointer + dir * 40.);
		let dv_near = near.repulsion(pointer, &params).magnitude();
		let dv_far = far.repulsion(pointer, &params).magnitude();
		assert!(dv_near > dv_far);
		assert!(dv_far > 0.);
		let edge = Ball::new(pointer + dir * 60.);
		assert_eq!(edge.repulsion(pointer, &params), V2::zeros());
		let on_top = Ball::new(pointer);
		assert_eq!(on_top.repulsion(pointer, &params), V2::zeros());
	}
}
