use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::math::{Scalar, Vector3, Vector4};

/// A 4x4 column-major matrix, element `[col * 4 + row]`, the layout GL
/// expects for uniform upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix44 {
	matrix: [Scalar; 16],
}

impl Matrix44 {
	pub const fn identity() -> Self {
		Matrix44 {
			matrix: [
				1.0, 0.0, 0.0, 0.0, //
				0.0, 1.0, 0.0, 0.0, //
				0.0, 0.0, 1.0, 0.0, //
				0.0, 0.0, 0.0, 1.0,
			],
		}
	}

	pub const fn zero() -> Self {
		Matrix44 { matrix: [0.0; 16] }
	}

	/// Identity with the translation column set to `translation`.
	pub fn translation(translation: Vector3) -> Self {
		let mut m = Matrix44::identity();
		m.matrix[12] = translation[0];
		m.matrix[13] = translation[1];
		m.matrix[14] = translation[2];
		m
	}

	/// Diagonal scale matrix. The homogeneous diagonal element is 1.
	pub fn scaling(scale: Vector3) -> Self {
		let mut m = Matrix44::zero();
		m.matrix[0] = scale[0];
		m.matrix[5] = scale[1];
		m.matrix[10] = scale[2];
		m.matrix[15] = 1.0;
		m
	}

	/// Axis-angle rotation matrix. The angle is in radians, the axis does
	/// not need to be unit length. A zero axis yields the identity.
	pub fn rotation(angle: Scalar, axis: Vector3) -> Self {
		let mag = axis.length();
		if mag == 0.0 {
			return Matrix44::identity();
		}

		let x = axis[0] / mag;
		let y = axis[1] / mag;
		let z = axis[2] / mag;

		let s = angle.sin();
		let c = angle.cos();
		let one_c = 1.0 - c;

		let xx = x * x;
		let yy = y * y;
		let zz = z * z;
		let xy = x * y;
		let yz = y * z;
		let zx = z * x;
		let xs = x * s;
		let ys = y * s;
		let zs = z * s;

		Matrix44 {
			matrix: [
				one_c * xx + c,
				one_c * xy + zs,
				one_c * zx - ys,
				0.0,
				one_c * xy - zs,
				one_c * yy + c,
				one_c * yz + xs,
				0.0,
				one_c * zx + ys,
				one_c * yz - xs,
				one_c * zz + c,
				0.0,
				0.0,
				0.0,
				0.0,
				1.0,
			],
		}
	}

	/// GL-style orthographic projection onto the given box.
	pub fn orthographic(
		x_min: Scalar,
		x_max: Scalar,
		y_min: Scalar,
		y_max: Scalar,
		z_min: Scalar,
		z_max: Scalar,
	) -> Self {
		let mut m = Matrix44::identity();
		m.matrix[0] = 2.0 / (x_max - x_min);
		m.matrix[5] = 2.0 / (y_max - y_min);
		m.matrix[10] = -2.0 / (z_max - z_min);
		m.matrix[12] = -((x_max + x_min) / (x_max - x_min));
		m.matrix[13] = -((y_max + y_min) / (y_max - y_min));
		m.matrix[14] = -((z_max + z_min) / (z_max - z_min));
		m
	}

	pub fn load_identity(&mut self) {
		*self = Matrix44::identity();
	}

	pub fn load_zero(&mut self) {
		*self = Matrix44::zero();
	}

	pub fn value(&self, row: usize, col: usize) -> Scalar {
		self.matrix[col * 4 + row]
	}

	/// Copies the upper-left 3x3 block into a new matrix.
	pub fn extract_rotation(&self) -> Matrix33 {
		let m = &self.matrix;
		Matrix33 {
			matrix: [
				m[0], m[1], m[2], //
				m[4], m[5], m[6], //
				m[8], m[9], m[10],
			],
		}
	}

	/// The raw column-major data, ready for uniform upload.
	pub fn data(&self) -> &[Scalar; 16] {
		&self.matrix
	}
}

impl Mul for Matrix44 {
	type Output = Matrix44;

	fn mul(self, right: Matrix44) -> Matrix44 {
		let a = &self.matrix;
		let b = &right.matrix;
		let mut result = [0.0; 16];
		for row in 0..4 {
			for col in 0..4 {
				let mut sum = 0.0;
				for k in 0..4 {
					sum += a[k * 4 + row] * b[col * 4 + k];
				}
				result[col * 4 + row] = sum;
			}
		}
		Matrix44 { matrix: result }
	}
}

impl MulAssign for Matrix44 {
	fn mul_assign(&mut self, right: Matrix44) {
		*self = *self * right;
	}
}

impl Mul<Vector4> for Matrix44 {
	type Output = Vector4;

	fn mul(self, vec: Vector4) -> Vector4 {
		let m = &self.matrix;
		let mut result = Vector4::default();
		for row in 0..4 {
			result[row] = m[row] * vec[0] + m[4 + row] * vec[1] + m[8 + row] * vec[2] + m[12 + row] * vec[3];
		}
		result
	}
}

impl Index<usize> for Matrix44 {
	type Output = Scalar;

	fn index(&self, index: usize) -> &Scalar {
		&self.matrix[index]
	}
}

impl IndexMut<usize> for Matrix44 {
	fn index_mut(&mut self, index: usize) -> &mut Scalar {
		&mut self.matrix[index]
	}
}

/// A 3x3 column-major matrix, used for the normal matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix33 {
	matrix: [Scalar; 9],
}

impl Matrix33 {
	pub const fn identity() -> Self {
		Matrix33 {
			matrix: [
				1.0, 0.0, 0.0, //
				0.0, 1.0, 0.0, //
				0.0, 0.0, 1.0,
			],
		}
	}

	pub const fn zero() -> Self {
		Matrix33 { matrix: [0.0; 9] }
	}

	pub fn load_identity(&mut self) {
		*self = Matrix33::identity();
	}

	pub fn load_zero(&mut self) {
		*self = Matrix33::zero();
	}

	pub fn value(&self, row: usize, col: usize) -> Scalar {
		self.matrix[col * 3 + row]
	}

	/// Normalizes each column vector in place.
	pub fn normalize(&mut self) {
		for col in 0..3 {
			let mut vec = Vector3::new(
				self.matrix[col * 3],
				self.matrix[col * 3 + 1],
				self.matrix[col * 3 + 2],
			);
			vec.normalize();
			self.matrix[col * 3] = vec[0];
			self.matrix[col * 3 + 1] = vec[1];
			self.matrix[col * 3 + 2] = vec[2];
		}
	}

	/// The raw column-major data, ready for uniform upload.
	pub fn data(&self) -> &[Scalar; 9] {
		&self.matrix
	}
}

impl Mul for Matrix33 {
	type Output = Matrix33;

	fn mul(self, right: Matrix33) -> Matrix33 {
		let a = &self.matrix;
		let b = &right.matrix;
		let mut result = [0.0; 9];
		for row in 0..3 {
			for col in 0..3 {
				let mut sum = 0.0;
				for k in 0..3 {
					sum += a[k * 3 + row] * b[col * 3 + k];
				}
				result[col * 3 + row] = sum;
			}
		}
		Matrix33 { matrix: result }
	}
}

impl MulAssign for Matrix33 {
	fn mul_assign(&mut self, right: Matrix33) {
		*self = *self * right;
	}
}

impl Index<usize> for Matrix33 {
	type Output = Scalar;

	fn index(&self, index: usize) -> &Scalar {
		&self.matrix[index]
	}
}

impl IndexMut<usize> for Matrix33 {
	fn index_mut(&mut self, index: usize) -> &mut Scalar {
		&mut self.matrix[index]
	}
}
