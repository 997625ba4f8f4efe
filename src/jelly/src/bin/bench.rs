use jelly::animation::Animation;
use jelly::scene::SceneKind;
use jelly::time_manager::{TimeManager, TimeModel};
use protocol::user_event::UserEvent;

fn main() {
	let rframes = 10_000;
	for kind in [SceneKind::Jelly, SceneKind::Ghost, SceneKind::Mesh] {
		let mut anim = Animation::new(kind.build());
		let mut tm = TimeManager::default().with_model(TimeModel::VideoRender);
		let handle = anim.start();
		anim.handle_event(UserEvent::PointerDown([400., 300.]));
		let mut load = 0.;
		tm.take_time();
		for frame in 0..rframes {
			let t = frame as f32 * 0.05;
			anim.handle_event(UserEvent::PointerMove([
				300. + 110. * t.cos(),
				300. + 110. * t.sin(),
			]));
			anim.tick(None);
			load += tm.load();
			tm.take_time();
		}
		anim.stop(handle);
		eprintln!("{:?}: {:.3}%", kind, load / rframes as f32 * 100.);
	}
}
