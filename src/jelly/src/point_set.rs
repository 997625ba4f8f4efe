use crate::ball::{Ball, BallParams};
use crate::layout;
use crate::outline;
use crate::V2;
use protocol::color::Color;
use protocol::pr_model::{DotStyle, Outline, PrDot, PrModel, PrShape, PrStroke};

/// Drawing options for a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
	pub fill: Color,
	pub border: Option<PrStroke>,
	pub pointer_radius: f32,
	pub pointer_color: Color,
	// color of the straight polygon overlay
	pub line_color: Color,
	pub show_points: bool,
	pub show_polygon: bool,
}

/// Ordered balls, the order is the outline order.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
	balls: Vec<Ball>,
}

impl PointSet {
	pub fn from_positions(positions: Vec<V2>) -> Self {
		Self {
			balls: positions.into_iter().map(Ball::new).collect(),
		}
	}

	pub fn circle(center: V2, radius: f32, count: usize) -> Self {
		Self::from_positions(layout::circle(center, radius, count))
	}

	pub fn ghost(center: V2, width: f32, height: f32, count: usize) -> Self {
		Self::from_positions(layout::ghost(center, width, height, count))
	}

	pub fn with_radius(mut self, radius: f32) -> Self {
		self.balls.iter_mut().for_each(|b| b.radius = radius);
		self
	}

	pub fn with_color(mut self, color: Color) -> Self {
		self.balls.iter_mut().for_each(|b| b.color = color);
		self
	}

	pub fn len(&self) -> usize {
		self.balls.len()
	}

	pub fn is_empty(&self) -> bool {
		self.balls.is_empty()
	}

	pub fn balls(&self) -> &[Ball] {
		&self.balls
	}

	pub fn balls_mut(&mut self) -> &mut [Ball] {
		&mut self.balls
	}

	pub fn positions(&self) -> Vec<V2> {
		self.balls.iter().map(|b| b.get_pos()).collect()
	}

	#[cfg(not(debug_assertions))]
	pub fn update(&mut self, pointer: Option<V2>, params: &BallParams) {
		use rayon::prelude::*;
		self.balls
			.par_iter_mut()
			.for_each(|ball| ball.update(pointer, params));
	}

	#[cfg(debug_assertions)]
	pub fn update(&mut self, pointer: Option<V2>, params: &BallParams) {
		self.balls
			.iter_mut()
			.for_each(|ball| ball.update(pointer, params));
	}

	pub fn outline(&self) -> Outline {
		outline::smooth_outline(&self.positions())
	}

	pub fn polygon(&self) -> Vec<[f32; 2]> {
		outline::polygon(&self.positions())
	}

	pub fn render_dots(&self) -> Vec<PrDot> {
		self.balls.iter().map(|b| b.render()).collect()
	}

	/// Pointer indicator, smoothed fill and the enabled overlays.
	pub fn pr_model(&self, pointer: V2, style: &ShapeStyle) -> PrModel {
		let polygon = style.show_polygon.then(|| {
			let stroke = PrStroke {
				width: 1.,
				color: style.line_color,
			};
			(self.polygon(), stroke)
		});
		PrModel {
			pointer: Some(PrDot {
				pos: pointer.into(),
				radius: style.pointer_radius,
				color: style.pointer_color,
				style: DotStyle::Ball,
			}),
			shape: PrShape {
				outline: self.outline(),
				fill: style.fill,
				border: style.border,
				polygon,
			},
			dots: if style.show_points {
				self.render_dots()
			} else {
				Vec::new()
			},
		}
	}
}
