//! The classic first SDL/GL program: open a window and clear it to red,
//! green and blue for two seconds each.

use std::thread;
use std::time::{Duration, Instant};

use vesta::{gl, sdl2::event::Event, window::WindowEngine, Context};

const COLORS: [(f32, f32, f32); 3] = [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
	simple_logger::SimpleLogger::new().init()?;

	let context = Context::create()?;
	let window = WindowEngine::new(&context, "vesta_colors", 512, 512)?;
	let mut event_pump = context.event_pump()?;

	for &(red, green, blue) in COLORS.iter() {
		unsafe {
			gl::ClearColor(red, green, blue, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);
		}
		window.present();

		// Keep the window responsive while the color is on screen.
		let shown = Instant::now();
		while shown.elapsed() < Duration::from_secs(2) {
			for event in event_pump.poll_iter() {
				if let Event::Quit { .. } = event {
					return Ok(());
				}
			}
			thread::sleep(Duration::from_millis(16));
		}
	}

	Ok(())
}
