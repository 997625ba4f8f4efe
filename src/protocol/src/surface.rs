use crate::color::Color;
use crate::pr_model::{Outline, PrStroke};

/// Drawing capability the simulation renders into once per tick.
pub trait Surface {
	fn size(&self) -> [u32; 2];

	fn clear(&mut self);

	fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Color);

	fn fill_outline(&mut self, outline: &Outline, color: Color);

	fn stroke_outline(&mut self, outline: &Outline, stroke: PrStroke);

	fn stroke_polygon(&mut self, points: &[[f32; 2]], stroke: PrStroke);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear,
	FillCircle([f32; 2], f32, Color),
	FillOutline(Outline, Color),
	StrokeOutline(Outline, PrStroke),
	StrokePolygon(Vec<[f32; 2]>, PrStroke),
}

/// Surface that only records what was drawn.
#[derive(Default)]
pub struct CallLog {
	pub size: [u32; 2],
	pub calls: Vec<DrawCall>,
}

impl CallLog {
	pub fn new(size: [u32; 2]) -> Self {
		Self {
			size,
			calls: Vec::new(),
		}
	}

	pub fn take(&mut self) -> Vec<DrawCall> {
		std::mem::take(&mut self.calls)
	}
}

impl Surface for CallLog {
	fn size(&self) -> [u32; 2] {
		self.size
	}

	fn clear(&mut self) {
		self.calls.push(DrawCall::Clear);
	}

	fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Color) {
		self.calls.push(DrawCall::FillCircle(center, radius, color));
	}

	fn fill_outline(&mut self, outline: &Outline, color: Color) {
		self.calls.push(DrawCall::FillOutline(outline.clone(), color));
	}

	fn stroke_outline(&mut self, outline: &Outline, stroke: PrStroke) {
		self.calls.push(DrawCall::StrokeOutline(outline.clone(), stroke));
	}

	fn stroke_polygon(&mut self, points: &[[f32; 2]], stroke: PrStroke) {
		self.calls.push(DrawCall::StrokePolygon(points.to_vec(), stroke));
	}
}
