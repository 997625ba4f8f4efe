// pr_model: Physical model for rendering

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
	pub ctrl: [f32; 2],
	pub end: [f32; 2],
}

/// Closed path made of quadratic segments, starting at `start`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
	pub start: [f32; 2],
	pub segments: Vec<QuadSegment>,
}

impl Outline {
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn end(&self) -> [f32; 2] {
		self.segments.last().map_or(self.start, |s| s.end)
	}

	pub fn controls(&self) -> impl Iterator<Item = [f32; 2]> + '_ {
		self.segments.iter().map(|s| s.ctrl)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DotStyle {
	// translucent disc with a small solid center
	Ball,
	Solid,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrDot {
	pub pos: [f32; 2],
	pub radius: f32,
	pub color: Color,
	pub style: DotStyle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrStroke {
	pub width: f32,
	pub color: Color,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrShape {
	pub outline: Outline,
	pub fill: Color,
	pub border: Option<PrStroke>,
	// straight closed polygon through the points, for debugging
	pub polygon: Option<(Vec<[f32; 2]>, PrStroke)>,
}

/// Everything needed to draw one frame, in drawing order:
/// pointer indicator, shape, then dots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub pointer: Option<PrDot>,
	pub shape: PrShape,
	pub dots: Vec<PrDot>,
}
