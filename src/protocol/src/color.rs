/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Default for Color {
	fn default() -> Self {
		Self::BLACK
	}
}

impl Color {
	pub const BLACK: Self = Self([0, 0, 0, 255]);
	pub const WHITE: Self = Self([255, 255, 255, 255]);
	pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self([r, g, b, 255])
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self([r, g, b, a])
	}

	/// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
	pub fn from_hex(hex: &str) -> Option<Self> {
		let hex = hex.strip_prefix('#').unwrap_or(hex);
		if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
			return None;
		}
		let mut rgba = [255u8; 4];
		for (idx, c) in rgba.iter_mut().enumerate().take(hex.len() / 2) {
			*c = u8::from_str_radix(&hex[idx * 2..idx * 2 + 2], 16).ok()?;
		}
		Some(Self(rgba))
	}

	pub const fn with_alpha(self, a: u8) -> Self {
		let [r, g, b, _] = self.0;
		Self([r, g, b, a])
	}

	// same as appending "80" to a 6 digit hex color
	pub const fn half_transparent(self) -> Self {
		self.with_alpha(0x80)
	}

	pub fn alpha(&self) -> f32 {
		self.0[3] as f32 / 255.
	}
}
