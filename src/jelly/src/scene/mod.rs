pub mod ghost;
pub mod jelly;
pub mod mesh;

use crate::pointer::PointerState;
use crate::V2;
use protocol::pr_model::PrModel;

pub use ghost::{GhostConfig, GhostScene};
pub use jelly::{JellyConfig, JellyScene};
pub use mesh::{MeshConfig, MeshScene};

/// One interactive shape. `step` is the whole simulation tick and does
/// not depend on any scheduling.
pub trait Scene {
	fn name(&self) -> &'static str;

	fn size(&self) -> [u32; 2];

	/// Where the pointer starts before any event arrives.
	fn initial_pointer(&self) -> V2 {
		let [w, h] = self.size();
		V2::new(w as f32 / 2., h as f32 / 2.)
	}

	fn step(&mut self, pointer: &PointerState);

	fn pr_model(&self, pointer: &PointerState) -> PrModel;

	/// Point to drag when the pointer goes down at `pos`.
	fn pick(&self, _pos: V2) -> Option<usize> {
		None
	}

	fn resize(&mut self, size: [u32; 2]) {
		log::debug!("{}: ignore resize to {:?}", self.name(), size);
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
	Jelly,
	Ghost,
	Mesh,
}

impl SceneKind {
	pub fn build(self) -> Box<dyn Scene> {
		match self {
			SceneKind::Jelly => Box::new(JellyScene::new(JellyConfig::default())),
			SceneKind::Ghost => Box::new(GhostScene::new(GhostConfig::default())),
			SceneKind::Mesh => Box::new(MeshScene::new(MeshConfig::default())),
		}
	}
}
