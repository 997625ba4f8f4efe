use crate::physical_model::PhysicalModel;
use crate::pointer::PointerState;
use crate::scene::Scene;
use crate::V2;
use protocol::color::Color;
use protocol::pr_model::{PrDot, PrModel, PrShape, PrStroke};

#[derive(Clone, Debug)]
pub struct MeshConfig {
	pub size: [u32; 2],
	pub center: V2,
	pub radius: f32,
	pub points: usize,
	pub damping: f32,
	pub gravity: f32,
	pub iteration: usize,
	pub stiffness: f32,
	pub pick_radius: f32,
	pub pin_center: bool,
	pub fill: Color,
	pub border: Option<PrStroke>,
	pub dot_color: Color,
	pub drag_color: Color,
}

impl Default for MeshConfig {
	fn default() -> Self {
		let fill = Color::rgb(0x3b, 0x82, 0xf6);
		Self {
			size: [600, 600],
			center: V2::new(300., 300.),
			radius: 100.,
			points: 16,
			damping: 0.98,
			gravity: 0.15,
			iteration: 10,
			stiffness: 1.0,
			pick_radius: 40.,
			pin_center: true,
			fill: fill.half_transparent(),
			border: Some(PrStroke {
				width: 2.,
				color: fill,
			}),
			dot_color: Color::WHITE,
			drag_color: Color::rgb(0xff, 0x6b, 0x9d),
		}
	}
}

impl MeshConfig {
	pub fn with_points(mut self, points: usize) -> Self {
		self.points = points;
		self
	}

	pub fn with_size(mut self, size: [u32; 2]) -> Self {
		self.size = size;
		self.center = V2::new(size[0] as f32 / 2., size[1] as f32 / 2.);
		self
	}

	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}

	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_iteration(mut self, iteration: usize) -> Self {
		self.iteration = iteration;
		self
	}

	pub fn with_stiffness(mut self, stiffness: f32) -> Self {
		self.stiffness = stiffness;
		self
	}

	pub fn with_pin_center(mut self, on: bool) -> Self {
		self.pin_center = on;
		self
	}
}

/// Ring mesh with verlet integration and spring relaxation; ring points
/// can be dragged.
pub struct MeshScene {
	config: MeshConfig,
	model: PhysicalModel,
}

impl MeshScene {
	pub fn new(config: MeshConfig) -> Self {
		let mut model = PhysicalModel::new_ring(
			config.center,
			config.radius,
			config.points,
			config.stiffness,
		);
		if config.pin_center {
			model = model.with_pinned_center();
		}
		log::info!(
			"mesh: {} particles, {} springs",
			model.particles.len(),
			model.constraints.len()
		);
		Self { config, model }
	}

	pub fn model(&self) -> &PhysicalModel {
		&self.model
	}
}

impl Scene for MeshScene {
	fn name(&self) -> &'static str {
		"mesh"
	}

	fn size(&self) -> [u32; 2] {
		self.config.size
	}

	fn step(&mut self, pointer: &PointerState) {
		self.model.step(
			self.config.damping,
			self.config.gravity,
			self.config.iteration,
			pointer.drag(),
		);
	}

	fn pr_model(&self, pointer: &PointerState) -> PrModel {
		let dots = match pointer.dragged {
			None => Vec::new(),
			Some(dragged) => self
				.model
				.ring()
				.iter()
				.map(|p| {
					let color = if p.get_id() == dragged {
						self.config.drag_color
					} else {
						self.config.dot_color
					};
					p.render(color)
				})
				.collect::<Vec<PrDot>>(),
		};
		PrModel {
			pointer: None,
			shape: PrShape {
				outline: self.model.outline(),
				fill: self.config.fill,
				border: self.config.border,
				polygon: None,
			},
			dots,
		}
	}

	fn pick(&self, pos: V2) -> Option<usize> {
		self.model.nearest_ring(pos, self.config.pick_radius)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_drag_pins_to_pointer() {
		let mut scene = MeshScene::new(MeshConfig::default());
		let grab = V2::new(398., 301.);
		let id = scene.pick(grab);
		assert_eq!(id, Some(0));
		let mut pointer = PointerState {
			pos: grab,
			dragged: id,
		};
		for frame in 0..40 {
			pointer.pos += V2::new(3., -1.);
			scene.step(&pointer);
			assert_eq!(
				scene.model().particles[0].get_pos(),
				pointer.pos,
				"frame {}",
				frame
			);
		}
		pointer.dragged = None;
		let released = scene.model().particles[0].get_pos();
		scene.step(&pointer);
		// springs pull it back once released
		assert!(scene.model().particles[0].get_pos()[0] < released[0]);
	}

	#[test]
	fn test_dots_only_while_dragging() {
		let scene = MeshScene::new(MeshConfig::default());
		let idle = scene.pr_model(&PointerState::default());
		assert!(idle.dots.is_empty());
		assert!(idle.pointer.is_none());
		let dragging = PointerState {
			pos: V2::new(400., 300.),
			dragged: Some(3),
		};
		let model = scene.pr_model(&dragging);
		assert_eq!(model.dots.len(), 16);
		let highlighted: Vec<usize> = model
			.dots
			.iter()
			.enumerate()
			.filter(|(_, d)| d.color == MeshConfig::default().drag_color)
			.map(|(i, _)| i)
			.collect();
		assert_eq!(highlighted, vec![3]);
	}

	#[test]
	fn test_pick_misses() {
		let scene = MeshScene::new(MeshConfig::default());
		assert_eq!(scene.pick(V2::new(300., 300.)), None);
		assert_eq!(scene.pick(V2::new(0., 0.)), None);
	}

	#[test]
	fn test_free_center_scene() {
		let config = MeshConfig::default()
			.with_pin_center(false)
			.with_gravity(0.3)
			.with_iteration(5)
			.with_stiffness(0.5)
			.with_radius(80.);
		let mut scene = MeshScene::new(config);
		let c = scene.model().center_id();
		assert!(!scene.model().particles[c].pinned);
		let ring0 = scene.model().particles[0].get_pos();
		assert!((ring0 - V2::new(380., 300.)).magnitude() < 1e-3);
		for spring in scene.model().constraints.iter() {
			assert!(spring.get_stiffness() <= 0.5);
		}

		// dragging still pins the point while the rest falls
		let mut pointer = PointerState {
			pos: ring0,
			dragged: scene.pick(ring0),
		};
		for _ in 0..30 {
			pointer.pos += V2::new(1., 0.);
			scene.step(&pointer);
			assert_eq!(scene.model().particles[0].get_pos(), pointer.pos);
		}
		pointer.dragged = None;
		let before = scene.model().particles[c].get_pos();
		for _ in 0..30 {
			scene.step(&pointer);
		}
		assert!(scene.model().particles[c].get_pos()[1] > before[1]);
	}
}
