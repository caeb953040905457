use std::ffi::CStr;

use bitflags::bitflags;

use crate::camera::Camera;
use crate::math::{Frustum, Matrix33, Matrix44, Scalar, Vector3};
use crate::stack::MatrixStack;
use crate::transform::GeometryTransform;

bitflags! {
	pub struct ClearFlags: u32 {
		const COLOR = gl::COLOR_BUFFER_BIT;
		const DEPTH = gl::DEPTH_BUFFER_BIT;
		const STENCIL = gl::STENCIL_BUFFER_BIT;
	}
}

const FIELD_OF_VIEW: Scalar = 35.0;
const NEAR_PLANE: Scalar = 1.0;
const FAR_PLANE: Scalar = 1000.0;

/// Radians per second the demo scene spins at.
const SPIN_RATE: Scalar = 0.8;

/// Owns the per-frame transform state: the model-view and projection
/// stacks, the pipeline combining them, the view frustum and the camera.
///
/// Requires a current GL context; construct it after the window.
pub struct RenderEngine {
	model_view: MatrixStack,
	projection: MatrixStack,
	transform: GeometryTransform,
	frustum: Frustum,
	camera: Camera,
	angle: Scalar,
}

impl RenderEngine {
	pub fn new() -> Self {
		init_gl();

		RenderEngine {
			model_view: MatrixStack::default(),
			projection: MatrixStack::default(),
			transform: GeometryTransform::new(),
			frustum: Frustum::new(),
			camera: Camera::new(),
			angle: 0.0,
		}
	}

	/// Matches the viewport and the projection to a new window size.
	pub fn resize_scene(&mut self, width: u32, height: u32) {
		unsafe { gl::Viewport(0, 0, width as i32, height as i32) };

		self.frustum.set_perspective(
			FIELD_OF_VIEW,
			width as Scalar / height as Scalar,
			NEAR_PLANE,
			FAR_PLANE,
		);
		self.projection.load_matrix(self.frustum.projection_matrix());
	}

	/// Clears the buffers and rebuilds the model-view stack for this
	/// frame: the camera's view matrix plus a slow spin about the Y axis.
	pub fn draw_scene(&mut self, elapsed: Scalar) {
		self.clear(ClearFlags::COLOR | ClearFlags::DEPTH);

		self.angle += elapsed * SPIN_RATE;
		self.model_view.load_camera_matrix(&self.camera);
		self.model_view.rotate(self.angle, Vector3::new(0.0, 1.0, 0.0));
	}

	pub fn clear(&self, flags: ClearFlags) {
		unsafe { gl::Clear(flags.bits()) };
	}

	pub fn set_clear_color(&self, red: Scalar, green: Scalar, blue: Scalar, alpha: Scalar) {
		unsafe { gl::ClearColor(red, green, blue, alpha) };
	}

	pub fn model_view_projection_matrix(&mut self) -> &Matrix44 {
		self.transform
			.model_view_projection_matrix(&self.model_view, &self.projection)
	}

	pub fn normal_matrix(&mut self, normalize: bool) -> &Matrix33 {
		self.transform.normal_matrix(&self.model_view, normalize)
	}

	pub fn model_view(&self) -> &MatrixStack {
		&self.model_view
	}

	pub fn model_view_mut(&mut self) -> &mut MatrixStack {
		&mut self.model_view
	}

	pub fn projection(&self) -> &MatrixStack {
		&self.projection
	}

	pub fn frustum(&self) -> &Frustum {
		&self.frustum
	}

	pub fn camera(&self) -> &Camera {
		&self.camera
	}

	pub fn camera_mut(&mut self) -> &mut Camera {
		&mut self.camera
	}
}

fn init_gl() {
	let version = unsafe { gl::GetString(gl::VERSION) };
	if !version.is_null() {
		let version = unsafe { CStr::from_ptr(version as *const _) };
		log::info!("OpenGL version: {}", version.to_string_lossy());
	}

	unsafe {
		gl::ClearColor(0.0, 0.0, 0.0, 1.0);
		gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT);
		gl::Enable(gl::DEPTH_TEST);
		gl::Enable(gl::CULL_FACE);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clear_flags_map_to_the_gl_bits() {
		assert_eq!(ClearFlags::COLOR.bits(), gl::COLOR_BUFFER_BIT);
		assert_eq!(ClearFlags::DEPTH.bits(), gl::DEPTH_BUFFER_BIT);
		assert_eq!(
			(ClearFlags::COLOR | ClearFlags::DEPTH | ClearFlags::STENCIL).bits(),
			gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT
		);
	}
}
