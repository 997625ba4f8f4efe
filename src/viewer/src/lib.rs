pub mod cli;
pub mod logger;
pub mod script;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use cli::{CliArgs, SceneArg};
use jelly::animation::Animation;
use jelly::scene::{
	GhostConfig,
	GhostScene,
	JellyConfig,
	JellyScene,
	MeshConfig,
	MeshScene,
	Scene,
};
use jelly::time_manager::{TimeManager, TimeModel};
use jelly::V2;
use material::palette;
use material::raster::ImageSurface;
use protocol::color::Color;
use protocol::pr_model::PrModel;
use protocol::surface::Surface;
use protocol::user_event::UserEvent;
use protocol::view::View;
use script::Script;

pub struct Summary {
	pub frames: u64,
	pub written: Vec<PathBuf>,
	pub last_model: PrModel,
	pub last_size: [u32; 2],
}

fn size_arg(args: &CliArgs) -> Result<Option<[u32; 2]>> {
	match args.size.as_deref() {
		None => Ok(None),
		Some(&[w, h]) if w > 0 && h > 0 => Ok(Some([w, h])),
		Some(other) => bail!("bad surface size {:?}", other),
	}
}

pub fn build_scene(args: &CliArgs) -> Result<Box<dyn Scene>> {
	let size = size_arg(args)?;
	let scene: Box<dyn Scene> = match args.scene {
		SceneArg::Jelly => {
			let mut config = JellyConfig::default()
				.with_show_points(args.show_points)
				.with_show_polygon(args.show_polygon);
			if let Some(size) = size {
				config = config.with_size(size);
			}
			if let Some(points) = args.points {
				config = config.with_points(points);
			}
			if let Some(radius) = args.radius {
				config = config.with_radius(radius);
			}
			Box::new(JellyScene::new(config))
		}
		SceneArg::Ghost => {
			let mut config = GhostConfig::default()
				.with_show_points(args.show_points)
				.with_show_polygon(args.show_polygon);
			if let Some(size) = size {
				config = config.with_size(size);
			}
			if let Some(points) = args.points {
				config = config.with_points(points);
			}
			Box::new(GhostScene::new(config))
		}
		SceneArg::Mesh => {
			let mut config = MeshConfig::default().with_pin_center(!args.free_center);
			if let Some(size) = size {
				config = config.with_size(size);
			}
			if let Some(points) = args.points {
				config = config.with_points(points);
			}
			if let Some(radius) = args.radius {
				config = config.with_radius(radius);
			}
			if let Some(gravity) = args.gravity {
				config = config.with_gravity(gravity);
			}
			if let Some(iterations) = args.iterations {
				config = config.with_iteration(iterations);
			}
			if let Some(stiffness) = args.stiffness {
				if !(stiffness > 0. && stiffness <= 1.) {
					bail!("--stiffness {} is outside (0, 1]", stiffness);
				}
				config = config.with_stiffness(stiffness);
			}
			Box::new(MeshScene::new(config))
		}
	};
	Ok(scene)
}

fn new_surface(size: [u32; 2], background: Color) -> Result<ImageSurface> {
	let surface = ImageSurface::new(size)
		.ok_or_else(|| anyhow!("cannot allocate a {}x{} surface", size[0], size[1]))?;
	Ok(surface.with_background(background))
}

pub fn run(args: &CliArgs) -> Result<Summary> {
	if args.frames == 0 {
		bail!("nothing to record, --frames is 0");
	}
	if args.every == 0 {
		bail!("--every must be at least 1");
	}
	if args.points == Some(0) {
		bail!("--points must be at least 1");
	}
	let background = palette::by_name(&args.background)
		.ok_or_else(|| anyhow!("unknown color {:?}", args.background))?;
	let origin = match args.origin.as_slice() {
		&[x, y] => V2::new(x, y),
		other => bail!("bad origin {:?}", other),
	};

	let scene = build_scene(args)?;
	let mut size = scene.size();
	let view = View::new(size).with_origin(origin.into());
	let mut anim = Animation::new(scene).with_view(view);
	let mut script = Script::for_scene(args.scene, size, args.radius);
	let mut surface = new_surface(size, background)?;
	let model = if args.realtime {
		TimeModel::RtFrameLock
	} else {
		TimeModel::VideoRender
	};
	let mut tm = TimeManager::default().with_model(model);

	if let Some(dir) = args.out.as_ref() {
		std::fs::create_dir_all(dir)
			.with_context(|| format!("creating {}", dir.display()))?;
	}

	let handle = anim.start();
	let mut written = vec![];
	for frame in 0..args.frames {
		if args.resize_at == Some(frame) {
			size = [size[1], size[0]];
			log::info!("frame {}: resize to {}x{}", frame, size[0], size[1]);
			anim.handle_event(UserEvent::Resize(size));
			surface = new_surface(size, background)?;
			script = Script::for_scene(args.scene, size, args.radius);
		}
		let events = script.events(frame, anim.view());
		for event in events {
			anim.handle_event(event);
		}
		let target: &mut dyn Surface = &mut surface;
		if !anim.tick(Some(target)) {
			break;
		}
		if let Some(dir) = args.out.as_ref() {
			if frame % args.every == 0 {
				let path = dir.join(format!("frame_{:05}.png", frame));
				surface
					.save(&path)
					.with_context(|| format!("writing {}", path.display()))?;
				log::debug!("wrote {}", path.display());
				written.push(path);
			}
		}
		tm.take_time();
	}
	let last_model = anim.pr_model();
	let frames = anim.frame_count();
	anim.stop(handle);
	log::info!("{}: {} frames, {} written", args.scene_name(), frames, written.len());
	Ok(Summary {
		frames,
		written,
		last_model,
		last_size: size,
	})
}

impl CliArgs {
	fn scene_name(&self) -> &'static str {
		match self.scene {
			SceneArg::Jelly => "jelly",
			SceneArg::Ghost => "ghost",
			SceneArg::Mesh => "mesh",
		}
	}
}
