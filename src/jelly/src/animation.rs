use crate::controller_message::ControllerMessage;
use crate::pointer::{PointerAdapter, PointerState};
use crate::render;
use crate::scene::Scene;
use protocol::pr_model::PrModel;
use protocol::surface::Surface;
use protocol::user_event::UserEvent;
use protocol::view::View;

/// Returned by `Animation::start`, needed to stop that run again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopHandle(u64);

/// Drives a scene: pointer events in, one step and one redraw per tick.
pub struct Animation {
	scene: Box<dyn Scene>,
	pointer: PointerAdapter,
	generation: u64,
	handle: Option<LoopHandle>,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
	frame: u64,
}

impl Animation {
	pub fn new(scene: Box<dyn Scene>) -> Self {
		let view = View::new(scene.size());
		let pointer = PointerAdapter::new(view, scene.initial_pointer());
		Self {
			scene,
			pointer,
			generation: 0,
			handle: None,
			forward_frames: -1,
			frame: 0,
		}
	}

	pub fn with_view(mut self, view: View) -> Self {
		let initial = self.pointer.state().pos;
		self.pointer = PointerAdapter::new(view, initial);
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 0;
		self
	}

	pub fn scene(&self) -> &dyn Scene {
		self.scene.as_ref()
	}

	pub fn pointer(&self) -> &PointerState {
		self.pointer.state()
	}

	pub fn view(&self) -> &View {
		self.pointer.view()
	}

	pub fn frame_count(&self) -> u64 {
		self.frame
	}

	pub fn is_running(&self) -> bool {
		self.handle.is_some()
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	/// Starts ticking. A second start replaces the previous handle.
	pub fn start(&mut self) -> LoopHandle {
		if let Some(old) = self.handle {
			log::warn!("{}: restart, dropping {:?}", self.scene.name(), old);
		}
		self.generation += 1;
		let handle = LoopHandle(self.generation);
		self.handle = Some(handle);
		log::info!("{}: start {:?}", self.scene.name(), handle);
		handle
	}

	/// Stops the run `handle` belongs to. Stale handles are ignored.
	pub fn stop(&mut self, handle: LoopHandle) -> bool {
		if self.handle != Some(handle) {
			log::warn!("{}: stale stop {:?}", self.scene.name(), handle);
			return false;
		}
		self.handle = None;
		log::info!("{}: stop after {} frames", self.scene.name(), self.frame);
		true
	}

	pub fn handle_event(&mut self, event: UserEvent) {
		self.pointer.handle(event, self.scene.as_mut());
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::User(event) => self.handle_event(event),
		}
	}

	/// One simulation step, independent of any scheduling.
	pub fn step(&mut self) {
		let pointer = *self.pointer.state();
		self.scene.step(&pointer);
		self.frame += 1;
	}

	pub fn pr_model(&self) -> PrModel {
		self.scene.pr_model(self.pointer.state())
	}

	/// The per refresh callback. Returns false once stopped, so the host
	/// does not schedule another tick.
	pub fn tick(&mut self, surface: Option<&mut dyn Surface>) -> bool {
		if self.handle.is_none() {
			return false;
		}
		if self.forward_frames != 0 {
			if self.forward_frames > 0 {
				self.forward_frames -= 1;
			}
			self.step();
		}
		match surface {
			Some(surface) => render::render(&self.pr_model(), surface),
			None => log::debug!("frame {}: no surface, skip draw", self.frame),
		}
		true
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::scene::{JellyConfig, JellyScene, MeshConfig, MeshScene, SceneKind};
	use crate::V2;
	use protocol::surface::{CallLog, DrawCall};

	#[test]
	fn test_tick_needs_start() {
		let mut anim = Animation::new(SceneKind::Jelly.build());
		let mut log = CallLog::new([600, 600]);
		assert!(!anim.tick(Some(&mut log)));
		assert!(log.calls.is_empty());
		let handle = anim.start();
		assert!(anim.tick(Some(&mut log)));
		assert_eq!(log.calls[0], DrawCall::Clear);
		assert!(anim.stop(handle));
		assert!(!anim.tick(Some(&mut log)));
		assert_eq!(anim.frame_count(), 1);
	}

	#[test]
	fn test_stale_handle() {
		let mut anim = Animation::new(SceneKind::Ghost.build());
		let first = anim.start();
		let second = anim.start();
		assert_ne!(first, second);
		assert!(!anim.stop(first));
		assert!(anim.is_running());
		assert!(anim.stop(second));
		assert!(!anim.is_running());
	}

	#[test]
	fn test_missing_surface_still_steps() {
		let mut anim = Animation::new(SceneKind::Mesh.build());
		anim.start();
		for _ in 0..3 {
			assert!(anim.tick(None));
		}
		assert_eq!(anim.frame_count(), 3);
	}

	#[test]
	fn test_pause_and_frame_forward() {
		let mut anim = Animation::new(SceneKind::Jelly.build()).with_paused();
		anim.start();
		let mut log = CallLog::new([600, 600]);
		anim.tick(Some(&mut log));
		assert_eq!(anim.frame_count(), 0);
		// still drawn while paused
		assert!(!log.calls.is_empty());
		anim.handle_message(ControllerMessage::FrameForward);
		anim.tick(None);
		anim.tick(None);
		assert_eq!(anim.frame_count(), 1);
		anim.handle_message(ControllerMessage::TogglePause);
		anim.tick(None);
		anim.tick(None);
		assert_eq!(anim.frame_count(), 3);
		anim.handle_message(ControllerMessage::TogglePause);
		assert!(anim.is_paused());
	}

	#[test]
	fn test_pointer_offset() {
		let scene = JellyScene::new(JellyConfig::default());
		let view = View::new([600, 600]).with_origin([100., 50.]);
		let mut anim = Animation::new(Box::new(scene)).with_view(view);
		anim.handle_event(UserEvent::PointerMove([490., 350.]));
		assert_eq!(anim.pointer().pos, V2::new(390., 300.));
	}

	#[test]
	fn test_drag_through_events() {
		let mut anim = Animation::new(Box::new(MeshScene::new(MeshConfig::default())));
		anim.start();
		anim.handle_event(UserEvent::PointerDown([395., 300.]));
		assert_eq!(anim.pointer().dragged, Some(0));
		anim.handle_event(UserEvent::PointerMove([450., 320.]));
		let mut log = CallLog::new([600, 600]);
		anim.tick(Some(&mut log));
		let model = anim.pr_model();
		assert_eq!(model.dots.len(), 16);
		assert_eq!(model.shape.outline.segments[0].ctrl, [450., 320.]);
		anim.handle_event(UserEvent::PointerUp);
		assert_eq!(anim.pointer().dragged, None);
		// a miss starts no drag
		anim.handle_event(UserEvent::PointerDown([5., 5.]));
		assert_eq!(anim.pointer().dragged, None);
	}

	#[test]
	fn test_press_outside_surface() {
		// surface ends just left of ring point 0 at scene (400, 300)
		let view = View::new([390, 600]).with_origin([100., 50.]);
		let mut anim = Animation::new(SceneKind::Mesh.build()).with_view(view);
		anim.handle_event(UserEvent::PointerDown([495., 350.]));
		assert_eq!(anim.pointer().dragged, None);
		assert_eq!(anim.pointer().pos, V2::new(395., 300.));
		anim.handle_event(UserEvent::PointerDown([488., 350.]));
		assert_eq!(anim.pointer().dragged, Some(0));
	}

	#[test]
	fn test_resize_drops_drag() {
		let mut anim = Animation::new(SceneKind::Mesh.build());
		anim.handle_event(UserEvent::PointerDown([400., 300.]));
		assert!(anim.pointer().dragged.is_some());
		anim.handle_event(UserEvent::Resize([800, 800]));
		assert_eq!(anim.pointer().dragged, None);
		assert!(anim.view().contains(V2::new(790., 790.)));
	}
}
