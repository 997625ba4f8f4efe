use crate::scene::Scene;
use crate::V2;
use protocol::user_event::UserEvent;
use protocol::view::View;

/// Pointer position in scene coordinates plus the dragged point, if any.
///
/// Written only by `PointerAdapter`, read once per tick by the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
	pub pos: V2,
	pub dragged: Option<usize>,
}

impl PointerState {
	pub fn at(pos: V2) -> Self {
		Self { pos, dragged: None }
	}

	pub fn drag(&self) -> Option<(usize, V2)> {
		self.dragged.map(|id| (id, self.pos))
	}
}

impl Default for PointerState {
	fn default() -> Self {
		Self::at(V2::zeros())
	}
}

pub struct PointerAdapter {
	view: View,
	state: PointerState,
}

impl PointerAdapter {
	pub fn new(view: View, initial: V2) -> Self {
		Self {
			view,
			state: PointerState::at(initial),
		}
	}

	pub fn state(&self) -> &PointerState {
		&self.state
	}

	pub fn view(&self) -> &View {
		&self.view
	}

	pub fn on_move(&mut self, raw: V2) {
		self.state.pos = self.view.s2w(raw);
	}

	pub fn on_press(&mut self, raw: V2, scene: &dyn Scene) -> Option<usize> {
		self.on_move(raw);
		if !self.view.contains(raw) {
			log::debug!("press outside the surface at {:?}", raw);
			return None;
		}
		self.state.dragged = scene.pick(self.state.pos);
		if let Some(id) = self.state.dragged {
			log::debug!("drag start: point {}", id);
		}
		self.state.dragged
	}

	pub fn on_release(&mut self) {
		if let Some(id) = self.state.dragged.take() {
			log::debug!("drag end: point {}", id);
		}
	}

	pub fn handle(&mut self, event: UserEvent, scene: &mut dyn Scene) {
		match event {
			UserEvent::PointerMove(raw) => self.on_move(raw.into()),
			UserEvent::PointerDown(raw) => {
				self.on_press(raw.into(), scene);
			}
			UserEvent::PointerUp => self.on_release(),
			UserEvent::Resize(size) => {
				self.view.resize(size);
				// indices of the old layout mean nothing now
				self.state.dragged = None;
				scene.resize(size);
			}
		}
	}
}
