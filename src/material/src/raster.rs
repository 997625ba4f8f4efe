//! Software `Surface` backed by a tiny-skia pixmap.

use std::path::Path;

use image::{Rgba, RgbaImage};
use kurbo::{BezPath, PathEl, Point};
use protocol::color::Color;
use protocol::pr_model::{Outline, PrStroke};
use protocol::surface::Surface;
use tiny_skia::{FillRule, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

pub struct ImageSurface {
	pixmap: Pixmap,
	background: Color,
}

impl ImageSurface {
	/// `None` for a zero sized surface.
	pub fn new(size: [u32; 2]) -> Option<Self> {
		Some(Self {
			pixmap: Pixmap::new(size[0], size[1])?,
			background: Color::TRANSPARENT,
		})
	}

	pub fn with_background(mut self, background: Color) -> Self {
		self.background = background;
		self.clear();
		self
	}

	/// Straight alpha color at `(x, y)`.
	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		let c = self.pixmap.pixel(x, y)?.demultiply();
		Some(Color([c.red(), c.green(), c.blue(), c.alpha()]))
	}

	pub fn to_image(&self) -> RgbaImage {
		RgbaImage::from_fn(self.pixmap.width(), self.pixmap.height(), |x, y| {
			Rgba(self.pixel(x, y).unwrap_or(Color::TRANSPARENT).0)
		})
	}

	pub fn save(&self, path: &Path) -> image::ImageResult<()> {
		self.to_image().save(path)
	}

	fn fill_path(&mut self, path: &tiny_skia::Path, color: Color) {
		self.pixmap.fill_path(
			path,
			&paint(color),
			FillRule::Winding,
			Transform::identity(),
			None,
		);
	}

	fn stroke_path(&mut self, path: &tiny_skia::Path, stroke: PrStroke) {
		let style = Stroke {
			width: stroke.width,
			line_join: LineJoin::Round,
			..Stroke::default()
		};
		self.pixmap.stroke_path(
			path,
			&paint(stroke.color),
			&style,
			Transform::identity(),
			None,
		);
	}
}

fn paint(color: Color) -> Paint<'static> {
	let [r, g, b, a] = color.0;
	let mut paint = Paint::default();
	paint.set_color_rgba8(r, g, b, a);
	paint.anti_alias = true;
	paint
}

fn point(p: [f32; 2]) -> Point {
	Point::new(p[0] as f64, p[1] as f64)
}

pub fn outline_path(outline: &Outline) -> BezPath {
	let mut path = BezPath::new();
	if outline.is_empty() {
		return path;
	}
	path.move_to(point(outline.start));
	for segment in outline.segments.iter() {
		path.quad_to(point(segment.ctrl), point(segment.end));
	}
	path.close_path();
	path
}

pub fn polygon_path(points: &[[f32; 2]]) -> BezPath {
	let mut path = BezPath::new();
	let Some((first, rest)) = points.split_first() else {
		return path;
	};
	path.move_to(point(*first));
	for &p in rest {
		path.line_to(point(p));
	}
	path.close_path();
	path
}

/// `None` when the path has nothing to draw.
fn skia_path(bez_path: &BezPath) -> Option<tiny_skia::Path> {
	let mut pb = PathBuilder::new();
	for element in bez_path.elements() {
		match *element {
			PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
			PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
			PathEl::QuadTo(c, p) => {
				pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32)
			}
			PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
				c1.x as f32,
				c1.y as f32,
				c2.x as f32,
				c2.y as f32,
				p.x as f32,
				p.y as f32,
			),
			PathEl::ClosePath => pb.close(),
		}
	}
	pb.finish()
}

impl Surface for ImageSurface {
	fn size(&self) -> [u32; 2] {
		[self.pixmap.width(), self.pixmap.height()]
	}

	fn clear(&mut self) {
		let [r, g, b, a] = self.background.0;
		self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
	}

	fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Color) {
		match PathBuilder::from_circle(center[0], center[1], radius) {
			Some(path) => self.fill_path(&path, color),
			None => log::debug!("fill_circle: bad radius {}", radius),
		}
	}

	fn fill_outline(&mut self, outline: &Outline, color: Color) {
		if let Some(path) = skia_path(&outline_path(outline)) {
			self.fill_path(&path, color);
		}
	}

	fn stroke_outline(&mut self, outline: &Outline, stroke: PrStroke) {
		if let Some(path) = skia_path(&outline_path(outline)) {
			self.stroke_path(&path, stroke);
		}
	}

	fn stroke_polygon(&mut self, points: &[[f32; 2]], stroke: PrStroke) {
		match skia_path(&polygon_path(points)) {
			Some(path) => self.stroke_path(&path, stroke),
			None => log::debug!("stroke_polygon: {} points", points.len()),
		}
	}
}
