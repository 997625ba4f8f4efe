//! Initial point layouts. All of them return positions in outline order.

use std::f32::consts::PI;

use crate::V2;

pub const DENSE_LEFT: usize = 35;
pub const DENSE_HEAD: usize = 70;
pub const DENSE_RIGHT: usize = 35;
pub const DENSE_BODY: usize = DENSE_LEFT + DENSE_HEAD + DENSE_RIGHT;
pub const LOBES: usize = 3;
pub const DENSE_LOBE: usize = 20;
// 200 samples in total
pub const DENSE_SAMPLES: usize = DENSE_BODY + LOBES * DENSE_LOBE;

pub const BODY_PERCENT: usize = 65;
pub const MIN_PER_LOBE: usize = 2;

/// `count` points evenly spaced by angle, starting at angle 0.
pub fn circle(center: V2, radius: f32, count: usize) -> Vec<V2> {
	debug_assert!(count > 0, "empty circle layout");
	(0..count)
		.map(|i| {
			let angle = i as f32 * 2. * PI / count as f32;
			center + V2::new(angle.cos(), angle.sin()) * radius
		})
		.collect()
}

/// Lobe profile, zero at both ends and 1 in the middle.
pub fn lobe(t: f32) -> f32 {
	1. - (2. * t - 1.).powi(2)
}

/// (body points, points per lobe) for a requested total.
///
/// Every lobe gets at least `MIN_PER_LOBE` points, so the total can be
/// larger than `count` when `count` is small.
pub fn ghost_counts(count: usize) -> (usize, usize) {
	let body = count * BODY_PERCENT / 100;
	let per_lobe = (count * (100 - BODY_PERCENT) / (100 * LOBES)).max(MIN_PER_LOBE);
	(body, per_lobe)
}

/// Densely sampled ghost silhouette.
pub struct GhostCurve {
	// left side (upwards), head arc, right side (downwards)
	pub body: Vec<V2>,
	// right to left along the bottom
	pub lobes: Vec<Vec<V2>>,
}

impl GhostCurve {
	pub fn new(center: V2, width: f32, height: f32) -> Self {
		let x0 = center[0] - width / 2.;
		let x1 = center[0] + width / 2.;
		let top = center[1] - height / 2.;
		let depth = height * 0.1;
		let bottom = center[1] + height / 2. - depth;
		let rx = width / 2.;
		let ry = rx.min(height / 2.);
		let head_y = top + ry;

		let mut body = Vec::with_capacity(DENSE_BODY);
		for i in 0..DENSE_LEFT {
			let t = i as f32 / DENSE_LEFT as f32;
			body.push(V2::new(x0, bottom + (head_y - bottom) * t));
		}
		for i in 0..DENSE_HEAD {
			let t = i as f32 / DENSE_HEAD as f32;
			let theta = PI + PI * t;
			body.push(V2::new(
				center[0] + rx * theta.cos(),
				head_y + ry * theta.sin(),
			));
		}
		for i in 0..DENSE_RIGHT {
			let t = i as f32 / DENSE_RIGHT as f32;
			body.push(V2::new(x1, head_y + (bottom - head_y) * t));
		}

		let lobe_w = width / LOBES as f32;
		let lobes = (0..LOBES)
			.map(|k| {
				let start = x1 - lobe_w * k as f32;
				(0..DENSE_LOBE)
					.map(|i| {
						let t = i as f32 / DENSE_LOBE as f32;
						V2::new(start - lobe_w * t, bottom + depth * lobe(t))
					})
					.collect()
			})
			.collect();
		Self { body, lobes }
	}

	pub fn len(&self) -> usize {
		self.body.len() + self.lobes.iter().map(|l| l.len()).sum::<usize>()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Picks `count` body points and `per_lobe` points per lobe,
	/// evenly by sample index.
	pub fn subsample(&self, count: usize) -> Vec<V2> {
		let (body, per_lobe) = ghost_counts(count);
		let mut result = Vec::with_capacity(body + per_lobe * LOBES);
		result.extend(pick(&self.body, body));
		for l in self.lobes.iter() {
			result.extend(pick(l, per_lobe));
		}
		result
	}
}

fn pick(samples: &[V2], n: usize) -> impl Iterator<Item = V2> + '_ {
	(0..n).map(move |i| samples[i * samples.len() / n])
}

/// Ghost silhouette: sides, a half-ellipse head and three lobes at the
/// bottom.
pub fn ghost(center: V2, width: f32, height: f32, count: usize) -> Vec<V2> {
	debug_assert!(count > 0, "empty ghost layout");
	GhostCurve::new(center, width, height).subsample(count)
}

/// Ring of `count` points followed by the center point.
pub fn ring(center: V2, radius: f32, count: usize) -> Vec<V2> {
	let mut result = circle(center, radius, count);
	result.push(center);
	result
}
