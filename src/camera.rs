use crate::math::{Matrix44, Vector3};

/// A virtual camera described by its position and an orthonormal
/// forward/up pair. The view matrix is rebuilt on every call, nothing is
/// cached here.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
	position: Vector3,
	forward: Vector3,
	up: Vector3,
}

impl Camera {
	/// A camera at the origin looking down the negative Z axis.
	pub fn new() -> Self {
		Camera {
			position: Vector3::new(0.0, 0.0, 0.0),
			forward: Vector3::new(0.0, 0.0, -1.0),
			up: Vector3::new(0.0, 1.0, 0.0),
		}
	}

	pub fn set_position(&mut self, position: Vector3) {
		self.position = position;
	}

	pub fn position(&self) -> Vector3 {
		self.position
	}

	pub fn set_forward(&mut self, forward: Vector3) {
		self.forward = forward;
	}

	pub fn forward(&self) -> Vector3 {
		self.forward
	}

	pub fn set_up(&mut self, up: Vector3) {
		self.up = up;
	}

	pub fn up(&self) -> Vector3 {
		self.up
	}

	/// The view matrix without translation.
	///
	/// The rows are the camera basis vectors; for an orthonormal basis the
	/// transpose is the inverse, which is what a view matrix is.
	pub fn camera_matrix_rotation_only(&self) -> Matrix44 {
		// Z vector is reversed
		let z = -self.forward;

		// X vector = Y cross Z
		let x = self.up.cross(&z);

		let mut m = Matrix44::zero();
		m[0] = x[0];
		m[4] = x[1];
		m[8] = x[2];
		m[1] = self.up[0];
		m[5] = self.up[1];
		m[9] = self.up[2];
		m[2] = z[0];
		m[6] = z[1];
		m[10] = z[2];
		m[15] = 1.0;
		m
	}

	/// The full view matrix, rotation followed by translation to the
	/// negated camera position.
	pub fn camera_matrix(&self) -> Matrix44 {
		self.camera_matrix_rotation_only() * Matrix44::translation(-self.position)
	}
}

impl Default for Camera {
	fn default() -> Self {
		Camera::new()
	}
}

#[cfg(test)]
mod tests {
	use nalgebra_glm as glm;

	use super::*;
	use crate::math::{Scalar, Vector4};

	const EPSILON: Scalar = 1e-5;

	#[test]
	fn default_camera_has_identity_rotation() {
		let camera = Camera::new();
		let m = camera.camera_matrix_rotation_only();
		assert_eq!(m, Matrix44::identity());
	}

	#[test]
	fn view_matrix_moves_the_world_towards_the_camera() {
		let mut camera = Camera::new();
		camera.set_position(Vector3::new(0.0, 0.0, 5.0));
		let m = camera.camera_matrix();
		let origin = m * Vector4::new(0.0, 0.0, 0.0, 1.0);
		assert_eq!(origin, Vector4::new(0.0, 0.0, -5.0, 1.0));
	}

	#[test]
	fn view_matrix_matches_look_at_reference() {
		let mut camera = Camera::new();
		camera.set_position(Vector3::new(1.0, 2.0, 3.0));
		camera.set_forward(Vector3::new(0.0, 0.0, -1.0));
		camera.set_up(Vector3::new(0.0, 1.0, 0.0));

		let reference: glm::Mat4 = glm::look_at(
			&glm::vec3(1.0, 2.0, 3.0),
			&glm::vec3(1.0, 2.0, 2.0),
			&glm::vec3(0.0, 1.0, 0.0),
		);
		for (i, (a, b)) in camera
			.camera_matrix()
			.data()
			.iter()
			.zip(reference.as_slice().iter())
			.enumerate()
		{
			assert!((a - b).abs() < EPSILON, "element {} differs: {} != {}", i, a, b);
		}
	}

	#[test]
	fn sideways_camera_swaps_axes() {
		let mut camera = Camera::new();
		camera.set_forward(Vector3::new(-1.0, 0.0, 0.0));
		let m = camera.camera_matrix();
		// A point down the view direction lands on the camera space -Z axis.
		let p = m * Vector4::new(-4.0, 0.0, 0.0, 1.0);
		assert!((p[0] - 0.0).abs() < EPSILON);
		assert!((p[2] - -4.0).abs() < EPSILON);
	}
}
