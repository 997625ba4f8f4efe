use crate::ball::{BallParams, Repulsion};
use crate::point_set::{PointSet, ShapeStyle};
use crate::pointer::PointerState;
use crate::scene::Scene;
use crate::V2;
use protocol::color::Color;
use protocol::pr_model::{PrModel, PrStroke};

#[derive(Clone, Debug)]
pub struct GhostConfig {
	pub size: [u32; 2],
	pub width: f32,
	pub height: f32,
	pub points: usize,
	pub ball: BallParams,
	pub ball_color: Color,
	pub fill: Color,
	pub border: Option<PrStroke>,
	pub pointer_radius: f32,
	pub pointer_color: Color,
	pub show_points: bool,
	pub show_polygon: bool,
}

impl Default for GhostConfig {
	fn default() -> Self {
		let fill = Color::rgb(0x8b, 0x5c, 0xf6);
		Self {
			size: [600, 600],
			width: 180.,
			height: 240.,
			points: 60,
			ball: BallParams {
				mouse_radius: 60.,
				friction: 0.8,
				spring_factor: -0.02,
				repulsion: Repulsion::Soft(0.6),
			},
			ball_color: Color::rgb(0xff, 0x66, 0x00),
			fill: fill.half_transparent(),
			border: Some(PrStroke {
				width: 2.,
				color: fill,
			}),
			pointer_radius: 30.,
			pointer_color: Color::rgb(0xff, 0x6b, 0x9d),
			show_points: false,
			show_polygon: false,
		}
	}
}

impl GhostConfig {
	pub fn style(&self) -> ShapeStyle {
		ShapeStyle {
			fill: self.fill,
			border: self.border,
			pointer_radius: self.pointer_radius,
			pointer_color: self.pointer_color,
			line_color: self.ball_color,
			show_points: self.show_points,
			show_polygon: self.show_polygon,
		}
	}

	pub fn with_points(mut self, points: usize) -> Self {
		self.points = points;
		self
	}

	pub fn with_size(mut self, size: [u32; 2]) -> Self {
		self.size = size;
		self
	}

	pub fn with_show_points(mut self, on: bool) -> Self {
		self.show_points = on;
		self
	}

	pub fn with_show_polygon(mut self, on: bool) -> Self {
		self.show_polygon = on;
		self
	}

	pub fn center(&self) -> V2 {
		V2::new(self.size[0] as f32 / 2., self.size[1] as f32 / 2.)
	}
}

/// Ghost silhouette with a soft, distance weighted pointer push.
/// Rebuilt from scratch whenever the surface is resized.
pub struct GhostScene {
	config: GhostConfig,
	points: PointSet,
}

impl GhostScene {
	pub fn new(config: GhostConfig) -> Self {
		let points = Self::layout(&config);
		log::info!(
			"ghost: {} points ({} requested)",
			points.len(),
			config.points
		);
		Self { config, points }
	}

	fn layout(config: &GhostConfig) -> PointSet {
		PointSet::ghost(config.center(), config.width, config.height, config.points)
			.with_color(config.ball_color)
	}

	pub fn points(&self) -> &PointSet {
		&self.points
	}
}

impl Scene for GhostScene {
	fn name(&self) -> &'static str {
		"ghost"
	}

	fn size(&self) -> [u32; 2] {
		self.config.size
	}

	fn step(&mut self, pointer: &PointerState) {
		self.points.update(Some(pointer.pos), &self.config.ball);
	}

	fn pr_model(&self, pointer: &PointerState) -> PrModel {
		self.points.pr_model(pointer.pos, &self.config.style())
	}

	fn resize(&mut self, size: [u32; 2]) {
		self.config.size = size;
		self.points = Self::layout(&self.config);
		log::info!("ghost: relayout for {}x{}", size[0], size[1]);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_resize_rebuilds() {
		let mut scene = GhostScene::new(GhostConfig::default());
		let n = scene.points().len();
		let pointer = PointerState::at(V2::new(210., 380.));
		for _ in 0..5 {
			scene.step(&pointer);
		}
		scene.resize([800, 400]);
		assert_eq!(scene.size(), [800, 400]);
		assert_eq!(scene.points().len(), n);
		let expected = PointSet::ghost(V2::new(400., 200.), 180., 240., 60);
		assert_eq!(scene.points().positions(), expected.positions());
		for b in scene.points().balls() {
			assert_eq!(b.vel, V2::zeros());
		}
	}

	#[test]
	fn test_soft_push() {
		let mut scene = GhostScene::new(GhostConfig::default());
		let rest = scene.points().positions();
		let pointer = PointerState::at(rest[0] + V2::new(20., 0.));
		scene.step(&pointer);
		let moved = scene.points().positions();
		assert!(moved[0][0] < rest[0][0]);
	}

	#[test]
	fn test_border() {
		let scene = GhostScene::new(GhostConfig::default());
		let model = scene.pr_model(&PointerState::default());
		assert!(model.shape.border.is_some());
		assert_eq!(model.shape.outline.segments.len(), 39 + 21);
	}
}
