use crate::V2;

/// Maps device coordinates onto the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
	// surface top-left in device coordinates
	origin: V2,
	size: V2,
}

impl Default for View {
	fn default() -> Self {
		Self {
			origin: V2::new(0., 0.),
			size: V2::new(600., 600.),
		}
	}
}

impl View {
	pub fn new(size: [u32; 2]) -> Self {
		Self::default().with_size(size)
	}

	pub fn with_origin(mut self, origin: [f32; 2]) -> Self {
		self.origin = origin.into();
		self
	}

	pub fn with_size(mut self, size: [u32; 2]) -> Self {
		self.resize(size);
		self
	}

	pub fn resize(&mut self, new_size: [u32; 2]) {
		self.size[0] = new_size[0] as f32;
		self.size[1] = new_size[1] as f32;
	}

	// screen to world
	pub fn s2w(&self, pos: V2) -> V2 {
		pos - self.origin
	}

	pub fn w2s(&self, pos: V2) -> V2 {
		pos + self.origin
	}

	pub fn contains(&self, pos: V2) -> bool {
		let p = self.s2w(pos);
		p[0] >= 0. && p[1] >= 0. && p[0] <= self.size[0] && p[1] <= self.size[1]
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_s2w_subtracts_origin() {
		let view = View::new([600, 600]).with_origin([40., 25.]);
		let p = view.s2w(V2::new(340., 325.));
		assert!((p - V2::new(300., 300.)).magnitude() < 1e-6);
		let back = view.w2s(p);
		assert!((back - V2::new(340., 325.)).magnitude() < 1e-6);
	}

	#[test]
	fn test_contains() {
		let mut view = View::new([100, 50]).with_origin([10., 10.]);
		assert!(view.contains(V2::new(10., 10.)));
		assert!(view.contains(V2::new(110., 60.)));
		assert!(!view.contains(V2::new(5., 20.)));
		assert!(!view.contains(V2::new(50., 61.)));
		view.resize([50, 100]);
		assert!(view.contains(V2::new(50., 100.)));
		assert!(!view.contains(V2::new(70., 20.)));
	}
}
