use sdl2::video::{GLContext, SwapInterval, Window, WindowBuildError};
use thiserror::Error;

use crate::Context;

/// An SDL window with a current OpenGL context. Creating one loads the GL
/// symbols, so every other GL call in the crate requires a live
/// `WindowEngine` first.
pub struct WindowEngine {
	window: Window,
	// The context dies with the window.
	_gl_context: GLContext,
}

impl WindowEngine {
	pub fn new(
		context: &Context,
		title: &str,
		width: u32,
		height: u32,
	) -> Result<Self, WindowCreateError> {
		let window = context
			.video
			.window(title, width, height)
			.opengl()
			.position_centered()
			.build()?;

		let gl_context = window.gl_create_context().map_err(WindowCreateError::GlContext)?;
		window
			.gl_make_current(&gl_context)
			.map_err(WindowCreateError::GlContext)?;
		gl::load_with(|name| context.video.gl_get_proc_address(name) as *const _);

		// Sync buffer swaps with the monitor's vertical refresh.
		if let Err(err) = context.video.gl_set_swap_interval(SwapInterval::VSync) {
			log::warn!("Failed to enable vsync: {}", err);
		}

		Ok(WindowEngine {
			window,
			_gl_context: gl_context,
		})
	}

	/// Swaps the back buffer to the front.
	pub fn present(&self) {
		self.window.gl_swap_window();
	}

	pub fn size(&self) -> (u32, u32) {
		self.window.size()
	}

	pub fn window(&self) -> &Window {
		&self.window
	}
}

#[derive(Debug, Error)]
pub enum WindowCreateError {
	#[error(transparent)]
	Build(#[from] WindowBuildError),
	#[error("failed to create OpenGL context: {0}")]
	GlContext(String),
}
