pub mod animation;
pub mod ball;
pub mod constraint;
pub mod constraint_group;
pub mod controller_message;
pub mod layout;
pub mod outline;
pub mod particle;
pub mod physical_model;
pub mod point_set;
pub mod pointer;
pub mod render;
pub mod scene;
pub mod time_manager;

pub use protocol::V2;
