use thiserror::Error;

use sdl2::{EventPump, Sdl, VideoSubsystem};

pub use gl;
pub use sdl2;

pub mod camera;
pub mod math;
pub mod render;
pub mod shader;
pub mod stack;
pub mod timer;
pub mod transform;
pub mod window;

/// The SDL library handle plus its video subsystem, with the GL attributes
/// every window in the crate shares already applied.
pub struct Context {
	pub(crate) sdl: Sdl,
	pub(crate) video: VideoSubsystem,
}

impl Context {
	pub fn create() -> Result<Self, ContextCreateError> {
		let sdl = sdl2::init().map_err(ContextCreateError::Init)?;
		let video = sdl.video().map_err(ContextCreateError::Video)?;

		// Request an OpenGL 4.3 context with double buffering and a 24 bit
		// depth buffer.
		let gl_attr = video.gl_attr();
		gl_attr.set_context_version(4, 3);
		gl_attr.set_double_buffer(true);
		gl_attr.set_depth_size(24);

		Ok(Self { sdl, video })
	}

	pub fn event_pump(&self) -> Result<EventPump, ContextCreateError> {
		self.sdl.event_pump().map_err(ContextCreateError::EventPump)
	}
}

#[derive(Debug, Error)]
pub enum ContextCreateError {
	#[error("failed to initialize SDL: {0}")]
	Init(String),
	#[error("failed to initialize the SDL video subsystem: {0}")]
	Video(String),
	#[error("failed to obtain the SDL event pump: {0}")]
	EventPump(String),
}
