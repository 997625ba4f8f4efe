use crate::V2;
use protocol::color::Color;
use protocol::pr_model::{DotStyle, PrDot};

/// Verlet point, velocity is implied by `pos - ppos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub id: usize,
	pub pos: V2,
	pub ppos: V2,
	pub pinned: bool,
	pub radius: f32,
	pub color: Color,
}

impl Particle {
	pub fn new(id: usize, pos: V2) -> Self {
		Self {
			id,
			pos,
			ppos: pos,
			pinned: false,
			radius: 4.0,
			color: Color::WHITE,
		}
	}

	pub fn pinned(mut self) -> Self {
		self.pinned = true;
		self
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn velocity(&self) -> V2 {
		self.pos - self.ppos
	}

	pub fn add_pos(&mut self, dp: V2) {
		self.pos += dp
	}

	// zero implied velocity
	pub fn reset_pos(&mut self, p: V2) {
		self.pos = p;
		self.ppos = p;
	}

	pub fn update(&mut self, damping: f32, gravity: f32) {
		if self.pinned {
			return;
		}
		let ppos = self.pos;
		let dp = (self.pos - self.ppos) * damping;
		self.pos += dp;
		self.pos[1] += gravity;
		self.ppos = ppos;
	}

	pub fn render(&self, color: Color) -> PrDot {
		PrDot {
			pos: self.pos.into(),
			radius: self.radius,
			color,
			style: DotStyle::Solid,
		}
	}
}
