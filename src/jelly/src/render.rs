use protocol::pr_model::{DotStyle, PrDot, PrModel};
use protocol::surface::Surface;

// inner dot of a ball, relative to its radius
const CORE_RATIO: f32 = 0.15;

pub fn draw_dot(surface: &mut dyn Surface, dot: &PrDot) {
	match dot.style {
		DotStyle::Ball => {
			surface.fill_circle(dot.pos, dot.radius, dot.color.half_transparent());
			surface.fill_circle(dot.pos, dot.radius * CORE_RATIO, dot.color);
		}
		DotStyle::Solid => surface.fill_circle(dot.pos, dot.radius, dot.color),
	}
}

/// Clears the surface and draws one frame.
pub fn render(pr_model: &PrModel, surface: &mut dyn Surface) {
	surface.clear();
	if let Some(pointer) = pr_model.pointer.as_ref() {
		draw_dot(surface, pointer);
	}
	let shape = &pr_model.shape;
	if !shape.outline.is_empty() {
		surface.fill_outline(&shape.outline, shape.fill);
		if let Some(border) = shape.border {
			surface.stroke_outline(&shape.outline, border);
		}
	}
	if let Some((points, stroke)) = shape.polygon.as_ref() {
		surface.stroke_polygon(points, *stroke);
	}
	for dot in pr_model.dots.iter() {
		draw_dot(surface, dot);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use protocol::color::Color;
	use protocol::surface::{CallLog, DrawCall};

	#[test]
	fn test_draw_order() {
		let dot = PrDot {
			pos: [1., 2.],
			radius: 10.,
			color: Color::rgb(255, 0, 0),
			style: DotStyle::Ball,
		};
		let mut model = PrModel {
			pointer: Some(dot),
			..Default::default()
		};
		model.shape.outline = crate::outline::smooth_outline(&[
			crate::V2::new(0., 0.),
			crate::V2::new(5., 0.),
			crate::V2::new(5., 5.),
		]);
		let mut log = CallLog::new([10, 10]);
		render(&model, &mut log);
		let calls = log.take();
		assert_eq!(calls.len(), 4);
		assert_eq!(calls[0], DrawCall::Clear);
		assert_eq!(
			calls[1],
			DrawCall::FillCircle([1., 2.], 10., Color::rgba(255, 0, 0, 0x80))
		);
		assert!(matches!(calls[2], DrawCall::FillCircle(_, r, _) if (r - 1.5).abs() < 1e-6));
		assert!(matches!(calls[3], DrawCall::FillOutline(_, _)));
	}

	#[test]
	fn test_empty_outline_not_filled() {
		let mut log = CallLog::new([10, 10]);
		render(&PrModel::default(), &mut log);
		assert_eq!(log.take(), vec![DrawCall::Clear]);
	}
}
