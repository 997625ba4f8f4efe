use std::f32::consts::TAU;

use crate::cli::SceneArg;
use jelly::V2;
use protocol::user_event::UserEvent;
use protocol::view::View;

/// Pointer input for a recording, positions in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Script {
	// circle the center while swinging in and out across the shape edge
	Hover {
		center: V2,
		radius: f32,
		swing: f32,
		period: f32,
	},
	// grab a ring point, pull it away, let go
	Drag {
		grab: V2,
		pull: V2,
		press_at: u64,
		release_at: u64,
	},
}

impl Script {
	/// `radius` is the shape radius of jelly and mesh, 100 if unset.
	pub fn for_scene(scene: SceneArg, size: [u32; 2], radius: Option<f32>) -> Self {
		let center = V2::new(size[0] as f32 / 2., size[1] as f32 / 2.);
		let radius = radius.unwrap_or(100.);
		match scene {
			SceneArg::Jelly => Self::Hover {
				center,
				radius,
				swing: radius * 0.2,
				period: 240.,
			},
			SceneArg::Ghost => Self::Hover {
				center,
				radius: 110.,
				swing: 30.,
				period: 240.,
			},
			SceneArg::Mesh => Self::Drag {
				grab: center + V2::new(radius, 0.),
				pull: V2::new(80., -60.),
				press_at: 10,
				release_at: 70,
			},
		}
	}

	pub fn events(&self, frame: u64, view: &View) -> Vec<UserEvent> {
		let device = |p: V2| -> [f32; 2] { view.w2s(p).into() };
		match *self {
			Self::Hover {
				center,
				radius,
				swing,
				period,
			} => {
				let angle = frame as f32 * TAU / period;
				let r = radius + swing * (angle * 3.).sin();
				let pos = center + V2::new(angle.cos(), angle.sin()) * r;
				vec![UserEvent::PointerMove(device(pos))]
			}
			Self::Drag {
				grab,
				pull,
				press_at,
				release_at,
			} => {
				if frame < press_at {
					vec![UserEvent::PointerMove(device(grab))]
				} else if frame == press_at {
					vec![UserEvent::PointerDown(device(grab))]
				} else if frame < release_at {
					let t = (frame - press_at) as f32 / (release_at - press_at) as f32;
					vec![UserEvent::PointerMove(device(grab + pull * t))]
				} else if frame == release_at {
					vec![UserEvent::PointerUp]
				} else {
					vec![]
				}
			}
		}
	}
}
