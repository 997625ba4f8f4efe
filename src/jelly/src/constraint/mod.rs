pub mod distance;

// below this length a spring has no usable direction
pub const MIN_DISTANCE: f32 = 0.001;
