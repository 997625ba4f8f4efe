use std::time::{Duration, Instant};

pub enum TimeModel {
	// no waiting, every frame takes exactly pft
	VideoRender,
	RtFrameLock,
}

/// Paces frames the way a display refresh would.
pub struct TimeManager {
	pft: f32,
	model: TimeModel,
	start_time: Instant,
}

impl Default for TimeManager {
	fn default() -> Self {
		Self {
			pft: 1. / 60.,
			model: TimeModel::RtFrameLock,
			start_time: Instant::now(),
		}
	}
}

impl TimeManager {
	pub fn with_model(mut self, model: TimeModel) -> Self {
		self.model = model;
		self
	}

	pub fn with_pft(mut self, pft: f32) -> Self {
		self.pft = pft;
		self
	}

	/// Waits for the rest of the frame if needed and returns the frame
	/// time.
	pub fn take_time(&mut self) -> f32 {
		let passed = self.start_time.elapsed();
		let frame = Duration::from_secs_f32(self.pft);
		if let TimeModel::RtFrameLock = self.model {
			if passed < frame {
				std::thread::sleep(frame - passed);
			}
		}
		self.start_time = Instant::now();
		self.pft
	}

	/// Fraction of the frame budget spent since the last `take_time`.
	pub fn load(&self) -> f32 {
		self.start_time.elapsed().as_secs_f32() / self.pft
	}
}
