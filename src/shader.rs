use std::ffi::CString;
use std::fs;
use std::path::Path;
use std::ptr;

use gl::types::{GLchar, GLenum, GLint, GLuint};
use thiserror::Error;

use crate::math::{Matrix33, Matrix44, Scalar};

/// Vertex attribute slots, bound by name before the program is linked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum Attribute {
	Vertex = 0,
	Color = 1,
	Normal = 2,
	Texture = 3,
}

/// A compiled and linked GL shader program.
pub struct Shader {
	program: GLuint,
}

impl Shader {
	pub fn from_files<P: AsRef<Path>>(
		vertex: P,
		fragment: P,
		attributes: &[(Attribute, &str)],
	) -> Result<Self, ShaderError> {
		let vertex_source = fs::read_to_string(vertex)?;
		let fragment_source = fs::read_to_string(fragment)?;
		Shader::from_sources(&vertex_source, &fragment_source, attributes)
	}

	pub fn from_sources(
		vertex_source: &str,
		fragment_source: &str,
		attributes: &[(Attribute, &str)],
	) -> Result<Self, ShaderError> {
		let vertex = compile(gl::VERTEX_SHADER, vertex_source)?;
		let fragment = match compile(gl::FRAGMENT_SHADER, fragment_source) {
			Ok(fragment) => fragment,
			Err(err) => {
				unsafe { gl::DeleteShader(vertex) };
				return Err(err);
			}
		};

		let program = unsafe { gl::CreateProgram() };
		unsafe {
			gl::AttachShader(program, vertex);
			gl::AttachShader(program, fragment);
		}

		for (slot, name) in attributes {
			let name = CString::new(*name)?;
			unsafe { gl::BindAttribLocation(program, *slot as u32, name.as_ptr()) };
		}

		unsafe { gl::LinkProgram(program) };

		// The program owns the stages once linked.
		unsafe {
			gl::DeleteShader(vertex);
			gl::DeleteShader(fragment);
		}

		let mut status = 0;
		unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut status) };
		if status == 0 {
			let info_log = program_info_log(program);
			unsafe { gl::DeleteProgram(program) };
			return Err(ShaderError::Link(info_log));
		}

		Ok(Shader { program })
	}

	pub fn bind(&self) {
		unsafe { gl::UseProgram(self.program) };
	}

	pub fn program(&self) -> GLuint {
		self.program
	}

	pub fn set_uniform_1f(&self, name: &str, x: Scalar) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::Uniform1f(location, x) };
		}
	}

	pub fn set_uniform_2f(&self, name: &str, x: Scalar, y: Scalar) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::Uniform2f(location, x, y) };
		}
	}

	pub fn set_uniform_3f(&self, name: &str, x: Scalar, y: Scalar, z: Scalar) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::Uniform3f(location, x, y, z) };
		}
	}

	pub fn set_uniform_4f(&self, name: &str, x: Scalar, y: Scalar, z: Scalar, w: Scalar) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::Uniform4f(location, x, y, z, w) };
		}
	}

	pub fn set_uniform_1i(&self, name: &str, x: i32) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::Uniform1i(location, x) };
		}
	}

	pub fn set_uniform_2i(&self, name: &str, x: i32, y: i32) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::Uniform2i(location, x, y) };
		}
	}

	pub fn set_uniform_3i(&self, name: &str, x: i32, y: i32, z: i32) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::Uniform3i(location, x, y, z) };
		}
	}

	pub fn set_uniform_4i(&self, name: &str, x: i32, y: i32, z: i32, w: i32) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::Uniform4i(location, x, y, z, w) };
		}
	}

	/// Uploads the matrix column-major, as stored.
	pub fn set_uniform_matrix44(&self, name: &str, matrix: &Matrix44) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, matrix.data().as_ptr()) };
		}
	}

	pub fn set_uniform_matrix33(&self, name: &str, matrix: &Matrix33) {
		if let Some(location) = self.uniform_location(name) {
			unsafe { gl::UniformMatrix3fv(location, 1, gl::FALSE, matrix.data().as_ptr()) };
		}
	}

	fn uniform_location(&self, name: &str) -> Option<GLint> {
		let c_name = match CString::new(name) {
			Ok(c_name) => c_name,
			Err(_) => {
				log::warn!("uniform name {:?} contains a nul byte", name);
				return None;
			}
		};
		let location = unsafe { gl::GetUniformLocation(self.program, c_name.as_ptr()) };
		if location < 0 {
			log::warn!("uniform {:?} not found in program {}", name, self.program);
			return None;
		}
		Some(location)
	}
}

impl Drop for Shader {
	fn drop(&mut self) {
		unsafe { gl::DeleteProgram(self.program) };
	}
}

#[derive(Debug, Error)]
pub enum ShaderError {
	#[error(transparent)]
	Io(#[from] std::io::Error),
	#[error("shader source or attribute name contains a nul byte")]
	Nul(#[from] std::ffi::NulError),
	#[error("failed to compile {stage} shader: {info_log}")]
	Compile { stage: &'static str, info_log: String },
	#[error("failed to link shader program: {0}")]
	Link(String),
}

fn compile(kind: GLenum, source: &str) -> Result<GLuint, ShaderError> {
	let shader = unsafe { gl::CreateShader(kind) };
	let source = CString::new(source)?;

	unsafe {
		gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
		gl::CompileShader(shader);
	}

	let mut status = 0;
	unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status) };
	if status == 0 {
		let info_log = shader_info_log(shader);
		unsafe { gl::DeleteShader(shader) };
		let stage = if kind == gl::VERTEX_SHADER { "vertex" } else { "fragment" };
		return Err(ShaderError::Compile { stage, info_log });
	}

	Ok(shader)
}

fn shader_info_log(shader: GLuint) -> String {
	let mut length = 0;
	unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut length) };
	let mut buffer = vec![0u8; length.max(0) as usize];
	let mut written = 0;
	unsafe {
		gl::GetShaderInfoLog(shader, length, &mut written, buffer.as_mut_ptr() as *mut GLchar);
	}
	buffer.truncate(written.max(0) as usize);
	String::from_utf8_lossy(&buffer).into_owned()
}

fn program_info_log(program: GLuint) -> String {
	let mut length = 0;
	unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut length) };
	let mut buffer = vec![0u8; length.max(0) as usize];
	let mut written = 0;
	unsafe {
		gl::GetProgramInfoLog(program, length, &mut written, buffer.as_mut_ptr() as *mut GLchar);
	}
	buffer.truncate(written.max(0) as usize);
	String::from_utf8_lossy(&buffer).into_owned()
}
