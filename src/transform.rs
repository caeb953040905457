use crate::math::{Matrix33, Matrix44};
use crate::stack::MatrixStack;

/// Combines a model-view stack and a projection stack into the derived
/// matrices a shader wants: the model-view-projection matrix and the
/// normal matrix.
///
/// The stacks are borrowed per call rather than stored. Each derived
/// matrix is cached against the stack generations it was computed from, so
/// repeated lookups between stack edits cost nothing and the two caches
/// invalidate independently.
#[derive(Debug)]
pub struct GeometryTransform {
	model_view_projection: Matrix44,
	model_view_projection_key: Option<(usize, u64, usize, u64)>,
	normal_matrix: Matrix33,
	normal_matrix_key: Option<(usize, u64, bool)>,
}

impl GeometryTransform {
	pub fn new() -> Self {
		GeometryTransform {
			model_view_projection: Matrix44::identity(),
			model_view_projection_key: None,
			normal_matrix: Matrix33::identity(),
			normal_matrix_key: None,
		}
	}

	/// The projection matrix times the model-view matrix, recomputed only
	/// when one of the stacks has changed since the last call.
	pub fn model_view_projection_matrix(
		&mut self,
		model_view: &MatrixStack,
		projection: &MatrixStack,
	) -> &Matrix44 {
		let key = (
			model_view as *const MatrixStack as usize,
			model_view.generation(),
			projection as *const MatrixStack as usize,
			projection.generation(),
		);
		if self.model_view_projection_key != Some(key) {
			self.model_view_projection = *projection.matrix() * *model_view.matrix();
			self.model_view_projection_key = Some(key);
		}
		&self.model_view_projection
	}

	/// The upper-left 3x3 block of the model-view matrix. With `normalize`
	/// set, every column is rescaled to unit length, which keeps
	/// transformed normals unit length under non-uniform scale.
	pub fn normal_matrix(&mut self, model_view: &MatrixStack, normalize: bool) -> &Matrix33 {
		let key = (
			model_view as *const MatrixStack as usize,
			model_view.generation(),
			normalize,
		);
		if self.normal_matrix_key != Some(key) {
			let mut normal = model_view.matrix().extract_rotation();
			if normalize {
				normal.normalize();
			}
			self.normal_matrix = normal;
			self.normal_matrix_key = Some(key);
		}
		&self.normal_matrix
	}
}

impl Default for GeometryTransform {
	fn default() -> Self {
		GeometryTransform::new()
	}
}
