use protocol::color::Color;

pub const BALL: Color = Color::rgb(0xff, 0x66, 0x00);
pub const POINTER: Color = Color::rgb(0xff, 0x6b, 0x9d);
pub const EMERALD: Color = Color::rgb(0x10, 0xb9, 0x81);
pub const VIOLET: Color = Color::rgb(0x8b, 0x5c, 0xf6);
pub const BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);
pub const BACKGROUND: Color = Color::rgb(0xfc, 0xe7, 0xf3);

/// Looks a color up by name, or parses it as hex.
pub fn by_name(name: &str) -> Option<Color> {
	let color = match name.to_ascii_lowercase().as_str() {
		"ball" | "orange" => BALL,
		"pointer" | "pink" => POINTER,
		"emerald" | "green" => EMERALD,
		"violet" | "purple" => VIOLET,
		"blue" => BLUE,
		"background" => BACKGROUND,
		"white" => Color::WHITE,
		"black" => Color::BLACK,
		_ => return Color::from_hex(name),
	};
	Some(color)
}
