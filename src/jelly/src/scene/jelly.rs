use crate::ball::BallParams;
use crate::point_set::{PointSet, ShapeStyle};
use crate::pointer::PointerState;
use crate::scene::Scene;
use crate::V2;
use protocol::color::Color;
use protocol::pr_model::{PrModel, PrStroke};

#[derive(Clone, Debug)]
pub struct JellyConfig {
	pub size: [u32; 2],
	pub center: V2,
	pub radius: f32,
	pub points: usize,
	pub ball: BallParams,
	pub ball_radius: f32,
	pub ball_color: Color,
	pub fill: Color,
	pub border: Option<PrStroke>,
	pub pointer_radius: f32,
	pub pointer_color: Color,
	pub show_points: bool,
	pub show_polygon: bool,
}

impl Default for JellyConfig {
	fn default() -> Self {
		Self {
			size: [600, 600],
			center: V2::new(300., 300.),
			radius: 100.,
			points: 10,
			ball: BallParams::default(),
			ball_radius: 2.,
			ball_color: Color::rgb(0xff, 0x66, 0x00),
			fill: Color::rgb(0x10, 0xb9, 0x81).half_transparent(),
			border: None,
			pointer_radius: 30.,
			pointer_color: Color::rgb(0xff, 0x6b, 0x9d),
			show_points: false,
			show_polygon: false,
		}
	}
}

impl JellyConfig {
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

	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}

	pub fn with_size(mut self, size: [u32; 2]) -> Self {
		self.size = size;
		self.center = V2::new(size[0] as f32 / 2., size[1] as f32 / 2.);
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
}

/// Circle of balls that the pointer pushes around.
pub struct JellyScene {
	config: JellyConfig,
	points: PointSet,
}

impl JellyScene {
	pub fn new(config: JellyConfig) -> Self {
		let points = PointSet::circle(config.center, config.radius, config.points)
			.with_radius(config.ball_radius)
			.with_color(config.ball_color);
		log::info!("jelly: {} points", points.len());
		Self { config, points }
	}

	pub fn points(&self) -> &PointSet {
		&self.points
	}

	pub fn config(&self) -> &JellyConfig {
		&self.config
	}
}

impl Scene for JellyScene {
	fn name(&self) -> &'static str {
		"jelly"
	}

	fn size(&self) -> [u32; 2] {
		self.config.size
	}

	fn initial_pointer(&self) -> V2 {
		self.config.center
	}

	fn step(&mut self, pointer: &PointerState) {
		self.points.update(Some(pointer.pos), &self.config.ball);
	}

	fn pr_model(&self, pointer: &PointerState) -> PrModel {
		self.points.pr_model(pointer.pos, &self.config.style())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_scene() {
		let scene = JellyScene::new(JellyConfig::default());
		assert_eq!(scene.points().len(), 10);
		let pointer = PointerState::at(scene.initial_pointer());
		let model = scene.pr_model(&pointer);
		assert_eq!(model.shape.outline.segments.len(), 10);
		assert_eq!(model.pointer.map(|p| p.pos), Some([300., 300.]));
		assert!(model.dots.is_empty());
		assert!(model.shape.polygon.is_none());
	}

	#[test]
	fn test_centered_pointer_leaves_shape_alone() {
		let mut scene = JellyScene::new(JellyConfig::default());
		let before = scene.points().positions();
		let pointer = PointerState::at(scene.initial_pointer());
		for _ in 0..10 {
			scene.step(&pointer);
		}
		assert_eq!(scene.points().positions(), before);
	}

	#[test]
	fn test_pointer_dents_then_recovers() {
		let mut scene = JellyScene::new(JellyConfig::default());
		let rest = scene.points().positions();
		// just inside the rightmost point
		let pointer = PointerState::at(V2::new(390., 300.));
		scene.step(&pointer);
		assert!(scene.points().positions()[0][0] > rest[0][0]);
		let away = PointerState::at(V2::new(0., 0.));
		for _ in 0..1000 {
			scene.step(&away);
		}
		assert!((scene.points().positions()[0] - rest[0]).magnitude() < 0.01);
	}

	#[test]
	fn test_debug_overlays() {
		let config = JellyConfig::default()
			.with_show_points(true)
			.with_show_polygon(true);
		let scene = JellyScene::new(config);
		let model = scene.pr_model(&PointerState::default());
		assert_eq!(model.dots.len(), 10);
		assert_eq!(model.shape.polygon.map(|(p, _)| p.len()), Some(10));
	}
}
