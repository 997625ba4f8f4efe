pub mod color;
pub mod pr_model;
pub mod surface;
pub mod user_event;
pub mod view;

pub type V2 = nalgebra::Vector2<f32>;
