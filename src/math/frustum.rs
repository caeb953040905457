use std::f32::consts::PI;

use crate::math::{Matrix44, Scalar, Vector4};

/// A projection volume. Whichever of `set_orthographic` and
/// `set_perspective` was called last decides the projection matrix.
///
/// The eight corner points of the volume are kept alongside the matrix,
/// ordered near upper-left, lower-left, upper-right, lower-right, then the
/// same for the far plane. Nothing in the crate consumes them yet; they are
/// the starting point for frustum culling.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
	projection: Matrix44,
	corners: [Vector4; 8],
}

impl Frustum {
	/// Starts out orthographic over the unit cube.
	pub fn new() -> Self {
		let mut frustum = Frustum {
			projection: Matrix44::identity(),
			corners: [Vector4::default(); 8],
		};
		frustum.set_orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
		frustum
	}

	pub fn projection_matrix(&self) -> &Matrix44 {
		&self.projection
	}

	pub fn corners(&self) -> &[Vector4; 8] {
		&self.corners
	}

	pub fn set_orthographic(
		&mut self,
		x_min: Scalar,
		x_max: Scalar,
		y_min: Scalar,
		y_max: Scalar,
		z_min: Scalar,
		z_max: Scalar,
	) {
		self.projection = Matrix44::orthographic(x_min, x_max, y_min, y_max, z_min, z_max);

		self.corners = [
			Vector4::new(x_min, y_max, z_min, 1.0),
			Vector4::new(x_min, y_min, z_min, 1.0),
			Vector4::new(x_max, y_max, z_min, 1.0),
			Vector4::new(x_max, y_min, z_min, 1.0),
			Vector4::new(x_min, y_max, z_max, 1.0),
			Vector4::new(x_min, y_min, z_max, 1.0),
			Vector4::new(x_max, y_max, z_max, 1.0),
			Vector4::new(x_max, y_min, z_max, 1.0),
		];
	}

	/// Classic GL perspective projection. `fov` is the vertical field of
	/// view in degrees.
	pub fn set_perspective(&mut self, fov: Scalar, aspect: Scalar, near: Scalar, far: Scalar) {
		// Near clipping plane extents
		let y_max = near * (fov * PI / 360.0).tan();
		let y_min = -y_max;
		let x_min = y_min * aspect;
		let x_max = -x_min;

		let mut projection = Matrix44::identity();
		projection[0] = (2.0 * near) / (x_max - x_min);
		projection[5] = (2.0 * near) / (y_max - y_min);
		projection[8] = (x_max + x_min) / (x_max - x_min);
		projection[9] = (y_max + y_min) / (y_max - y_min);
		projection[10] = -((far + near) / (far - near));
		projection[11] = -1.0;
		projection[14] = -((2.0 * far * near) / (far - near));
		projection[15] = 0.0;
		self.projection = projection;

		// Far clipping plane extents
		let y_far_max = far * (fov * PI / 360.0).tan();
		let y_far_min = -y_far_max;
		let x_far_min = y_far_min * aspect;
		let x_far_max = -x_far_min;

		self.corners = [
			Vector4::new(x_min, y_max, -near, 1.0),
			Vector4::new(x_min, y_min, -near, 1.0),
			Vector4::new(x_max, y_max, -near, 1.0),
			Vector4::new(x_max, y_min, -near, 1.0),
			Vector4::new(x_far_min, y_far_max, -far, 1.0),
			Vector4::new(x_far_min, y_far_min, -far, 1.0),
			Vector4::new(x_far_max, y_far_max, -far, 1.0),
			Vector4::new(x_far_max, y_far_min, -far, 1.0),
		];
	}
}

impl Default for Frustum {
	fn default() -> Self {
		Frustum::new()
	}
}

#[cfg(test)]
mod tests {
	use nalgebra_glm as glm;

	use super::*;

	const EPSILON: Scalar = 1e-5;

	#[test]
	fn unit_orthographic_projection() {
		let mut frustum = Frustum::new();
		frustum.set_orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
		let m = frustum.projection_matrix();
		assert_eq!(m.value(0, 0), 1.0);
		assert_eq!(m.value(1, 1), 1.0);
		assert_eq!(m.value(2, 2), -1.0);
		assert_eq!(m.value(3, 3), 1.0);
		for row in 0..3 {
			assert_eq!(m.value(row, 3), 0.0, "translation term {} is not zero", row);
		}
	}

	#[test]
	fn default_is_unit_orthographic() {
		let frustum = Frustum::default();
		let mut explicit = Frustum::new();
		explicit.set_orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
		assert_eq!(frustum.projection_matrix(), explicit.projection_matrix());
	}

	#[test]
	fn perspective_matches_reference() {
		let mut frustum = Frustum::new();
		frustum.set_perspective(35.0, 4.0 / 3.0, 1.0, 1000.0);
		let reference: glm::Mat4 = glm::perspective(4.0 / 3.0, (35.0 as Scalar).to_radians(), 1.0, 1000.0);
		for (i, (a, b)) in frustum
			.projection_matrix()
			.data()
			.iter()
			.zip(reference.as_slice().iter())
			.enumerate()
		{
			assert!((a - b).abs() < EPSILON, "element {} differs: {} != {}", i, a, b);
		}
	}

	#[test]
	fn perspective_corners_sit_on_the_clip_planes() {
		let mut frustum = Frustum::new();
		frustum.set_perspective(90.0, 1.0, 1.0, 10.0);
		let corners = frustum.corners();
		for corner in &corners[..4] {
			assert!((corner[2] - -1.0).abs() < EPSILON);
		}
		for corner in &corners[4..] {
			assert!((corner[2] - -10.0).abs() < EPSILON);
		}
		// A 90 degree frustum is as wide as it is deep.
		assert!((corners[0][1] - 1.0).abs() < EPSILON);
		assert!((corners[4][1] - 10.0).abs() < EPSILON);
	}

	#[test]
	fn orthographic_corners_span_the_box() {
		let mut frustum = Frustum::new();
		frustum.set_orthographic(-2.0, 2.0, -1.0, 1.0, 0.0, 8.0);
		let corners = frustum.corners();
		assert_eq!(corners[0], Vector4::new(-2.0, 1.0, 0.0, 1.0));
		assert_eq!(corners[7], Vector4::new(2.0, -1.0, 8.0, 1.0));
	}
}
