//! Command line arguments for the recorder

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SceneArg {
	/// circle of points pushed away by the pointer
	Jelly,
	/// ghost silhouette with a soft push, rebuilt on resize
	Ghost,
	/// spring mesh, a ring point gets dragged around
	Mesh,
}

/// Runs a scene on a scripted pointer and renders every frame
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
	#[arg(long, value_enum, default_value_t = SceneArg::Jelly)]
	pub scene: SceneArg,

	/// number of frames to simulate
	#[arg(long, default_value_t = 240)]
	pub frames: u64,

	/// directory for png frames, nothing is written without it
	#[arg(long)]
	pub out: Option<PathBuf>,

	/// write every n-th frame
	#[arg(long, default_value_t = 1)]
	pub every: u64,

	/// surface size, defaults to the scene's own
	#[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
	pub size: Option<Vec<u32>>,

	/// number of points in the shape
	#[arg(long)]
	pub points: Option<usize>,

	/// circle or ring radius (jelly, mesh)
	#[arg(long)]
	pub radius: Option<f32>,

	/// downward pull per frame (mesh)
	#[arg(long)]
	pub gravity: Option<f32>,

	/// relaxation passes per frame (mesh)
	#[arg(long)]
	pub iterations: Option<usize>,

	/// edge spring stiffness in (0, 1] (mesh)
	#[arg(long)]
	pub stiffness: Option<f32>,

	/// let the mesh center fall with the ring (mesh)
	#[arg(long, default_value_t = false)]
	pub free_center: bool,

	/// surface top-left in device coordinates
	#[arg(long, num_args = 2, value_names = ["X", "Y"], default_values_t = [0., 0.])]
	pub origin: Vec<f32>,

	/// swap width and height at this frame
	#[arg(long)]
	pub resize_at: Option<u64>,

	/// pace frames at 60 fps instead of as fast as possible
	#[arg(long, default_value_t = false)]
	pub realtime: bool,

	/// draw every simulated point
	#[arg(long, default_value_t = false)]
	pub show_points: bool,

	/// stroke the straight polygon through the points
	#[arg(long, default_value_t = false)]
	pub show_polygon: bool,

	/// palette name or hex color
	#[arg(long, default_value = "background")]
	pub background: String,
}
