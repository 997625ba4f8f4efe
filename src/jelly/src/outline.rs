use crate::V2;
use protocol::pr_model::{Outline, QuadSegment};

pub fn mid(a: V2, b: V2) -> V2 {
	(a + b) * 0.5
}

/// Smooth closed outline through a cyclic point sequence.
///
/// Every point is the control point of one quadratic segment that ends at
/// the midpoint to the next point, so the curve passes through the
/// midpoints and only near the points themselves. The path starts at the
/// midpoint of the last and first point, which is also where it ends.
pub fn smooth_outline(points: &[V2]) -> Outline {
	let n = points.len();
	if n == 0 {
		return Outline::default();
	}
	let segments = (0..n)
		.map(|i| {
			let p0 = points[i];
			let p1 = points[(i + 1) % n];
			QuadSegment {
				ctrl: p0.into(),
				end: mid(p0, p1).into(),
			}
		})
		.collect();
	Outline {
		start: mid(points[n - 1], points[0]).into(),
		segments,
	}
}

/// Straight closed polygon, the closing edge is implied.
pub fn polygon(points: &[V2]) -> Vec<[f32; 2]> {
	points.iter().map(|&p| p.into()).collect()
}
