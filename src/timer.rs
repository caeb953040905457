use std::time::Instant;

/// Measures elapsed wall-clock seconds from a resettable reference point.
pub struct Timer {
	last: Instant,
}

impl Timer {
	pub fn new() -> Self {
		Timer { last: Instant::now() }
	}

	/// Moves the reference point to now.
	pub fn reset(&mut self) {
		self.last = Instant::now();
	}

	pub fn elapsed_seconds(&self) -> f64 {
		self.last.elapsed().as_secs_f64()
	}

	pub fn elapsed_seconds_and_reset(&mut self) -> f64 {
		let elapsed = self.elapsed_seconds();
		self.reset();
		elapsed
	}
}

impl Default for Timer {
	fn default() -> Self {
		Timer::new()
	}
}

#[cfg(test)]
mod tests {
	use std::thread;
	use std::time::Duration;

	use super::*;

	#[test]
	fn elapsed_time_grows() {
		let timer = Timer::new();
		thread::sleep(Duration::from_millis(10));
		let elapsed = timer.elapsed_seconds();
		assert!(elapsed >= 0.01);
	}

	#[test]
	fn reset_moves_the_reference_point() {
		let mut timer = Timer::new();
		thread::sleep(Duration::from_millis(10));
		let before = timer.elapsed_seconds_and_reset();
		let after = timer.elapsed_seconds();
		assert!(before >= 0.01);
		assert!(after < before);
	}
}
