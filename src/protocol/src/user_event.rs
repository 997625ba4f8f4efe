/// Host events, positions in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserEvent {
	PointerMove([f32; 2]),
	PointerDown([f32; 2]),
	PointerUp,
	Resize([u32; 2]),
}
