use std::ops::MulAssign;

use crate::camera::Camera;
use crate::math::{Matrix44, Scalar, Vector3};

pub const DEFAULT_STACK_DEPTH: usize = 256;

/// A bounded stack of transform matrices in the style of the legacy GL
/// matrix stacks. The stack is never empty; the last entry is the current
/// matrix.
///
/// Overflowing the fixed capacity is fatal. Popping the last entry is
/// reported and ignored, so the stack stays in a usable state.
pub struct MatrixStack {
	stack: Vec<Matrix44>,
	depth: usize,
	generation: u64,
}

impl MatrixStack {
	/// A stack holding at most `depth` matrices, starting with a single
	/// identity. A zero `depth` is reported and replaced by the default.
	pub fn new(depth: usize) -> Self {
		let depth = if depth == 0 {
			log::error!(
				"matrix stack depth cannot be 0, falling back to {}",
				DEFAULT_STACK_DEPTH
			);
			DEFAULT_STACK_DEPTH
		} else {
			depth
		};

		let mut stack = Vec::with_capacity(depth);
		stack.push(Matrix44::identity());
		MatrixStack {
			stack,
			depth,
			generation: 0,
		}
	}

	/// Duplicates the current matrix so later edits can be undone with
	/// `pop`. Panics once the capacity is exhausted; the backing storage is
	/// fixed and there is nowhere left to write.
	pub fn push(&mut self) {
		if self.stack.len() == self.depth {
			log::error!(
				"matrix stack (depth {}) full, cannot push anything anymore",
				self.depth
			);
			panic!("matrix stack overflow");
		}

		let top = *self.matrix();
		self.stack.push(top);
		self.generation += 1;
	}

	/// Discards the current matrix, restoring the one below it. Popping the
	/// last entry is reported and leaves the stack unchanged.
	pub fn pop(&mut self) {
		if self.stack.len() == 1 {
			log::error!("matrix stack empty, cannot pop from it anymore");
			return;
		}

		self.stack.pop();
		self.generation += 1;
	}

	pub fn load_identity(&mut self) {
		self.top_mut().load_identity();
	}

	pub fn load_matrix(&mut self, matrix: &Matrix44) {
		*self.top_mut() = *matrix;
	}

	pub fn load_camera_matrix(&mut self, camera: &Camera) {
		self.load_matrix(&camera.camera_matrix());
	}

	/// Right-multiplies the current matrix by a scale.
	pub fn scale(&mut self, scale: Vector3) {
		self.apply(Matrix44::scaling(scale));
	}

	/// Right-multiplies the current matrix by a translation.
	pub fn translate(&mut self, translation: Vector3) {
		self.apply(Matrix44::translation(translation));
	}

	/// Right-multiplies the current matrix by an axis-angle rotation.
	pub fn rotate(&mut self, angle: Scalar, axis: Vector3) {
		self.apply(Matrix44::rotation(angle, axis));
	}

	/// The current matrix.
	pub fn matrix(&self) -> &Matrix44 {
		&self.stack[self.stack.len() - 1]
	}

	/// The fixed capacity.
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Bumped on every mutation; lets derived-matrix caches detect change.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	fn apply(&mut self, matrix: Matrix44) {
		let top = self.top_mut();
		*top = *top * matrix;
	}

	fn top_mut(&mut self) -> &mut Matrix44 {
		self.generation += 1;
		let top = self.stack.len() - 1;
		&mut self.stack[top]
	}
}

impl MulAssign<Matrix44> for MatrixStack {
	fn mul_assign(&mut self, matrix: Matrix44) {
		self.apply(matrix);
	}
}

impl Default for MatrixStack {
	fn default() -> Self {
		MatrixStack::new(DEFAULT_STACK_DEPTH)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::Scalar;

	const EPSILON: Scalar = 1e-5;

	#[test]
	fn starts_with_identity() {
		let stack = MatrixStack::default();
		assert_eq!(*stack.matrix(), Matrix44::identity());
		assert_eq!(stack.depth(), DEFAULT_STACK_DEPTH);
	}

	#[test]
	fn pop_restores_the_pre_push_matrix_exactly() {
		let mut stack = MatrixStack::new(8);
		stack.translate(Vector3::new(1.0, 2.0, 3.0));
		stack.rotate(0.4, Vector3::new(0.0, 1.0, 0.0));
		let saved = *stack.matrix();

		stack.push();
		stack.scale(Vector3::new(2.0, 2.0, 2.0));
		stack.rotate(1.0, Vector3::new(1.0, 0.0, 0.0));
		assert_ne!(*stack.matrix(), saved);

		stack.pop();
		assert_eq!(*stack.matrix(), saved);
	}

	#[test]
	fn translations_compose_additively() {
		let v1 = Vector3::new(1.0, -2.0, 0.5);
		let v2 = Vector3::new(3.0, 4.0, -1.5);

		let mut split = MatrixStack::default();
		split.translate(v1);
		split.translate(v2);

		let mut joined = MatrixStack::default();
		joined.translate(v1 + v2);

		for (a, b) in split.matrix().data().iter().zip(joined.matrix().data().iter()) {
			assert!((a - b).abs() < EPSILON);
		}
	}

	#[test]
	#[should_panic(expected = "matrix stack overflow")]
	fn pushing_past_capacity_is_fatal() {
		let mut stack = MatrixStack::new(2);
		stack.push();
		stack.push();
	}

	#[test]
	fn popping_the_last_entry_is_ignored() {
		let mut stack = MatrixStack::new(4);
		stack.translate(Vector3::new(1.0, 0.0, 0.0));
		let before = *stack.matrix();
		stack.pop();
		assert_eq!(*stack.matrix(), before);
	}

	#[test]
	fn zero_depth_falls_back_to_the_default() {
		let stack = MatrixStack::new(0);
		assert_eq!(stack.depth(), DEFAULT_STACK_DEPTH);
	}

	#[test]
	fn load_camera_matrix_takes_the_view_matrix() {
		let mut camera = Camera::new();
		camera.set_position(Vector3::new(0.0, 1.0, 5.0));

		let mut stack = MatrixStack::default();
		stack.load_camera_matrix(&camera);
		assert_eq!(*stack.matrix(), camera.camera_matrix());
	}

	#[test]
	fn mul_assign_composes_on_the_top() {
		let mut stack = MatrixStack::default();
		stack.translate(Vector3::new(1.0, 0.0, 0.0));
		let expected = *stack.matrix() * Matrix44::scaling(Vector3::new(2.0, 2.0, 2.0));
		stack *= Matrix44::scaling(Vector3::new(2.0, 2.0, 2.0));
		assert_eq!(*stack.matrix(), expected);
	}

	#[test]
	fn every_mutation_moves_the_generation() {
		let mut stack = MatrixStack::default();
		let mut last = stack.generation();
		stack.push();
		assert_ne!(stack.generation(), last);
		last = stack.generation();
		stack.rotate(0.3, Vector3::new(0.0, 0.0, 1.0));
		assert_ne!(stack.generation(), last);
		last = stack.generation();
		stack.pop();
		assert_ne!(stack.generation(), last);
	}
}
