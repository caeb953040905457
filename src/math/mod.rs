pub mod frustum;
pub mod matrix;
pub mod vector;

pub use self::frustum::Frustum;
pub use self::matrix::{Matrix33, Matrix44};
pub use self::vector::{Vector3, Vector4};

pub type Scalar = f32;
