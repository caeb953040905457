//! Drives the whole transform pipeline: a perspective frustum, a camera
//! pulled back from the origin, a spinning model-view stack, and a shader
//! receiving the combined matrices every frame.

use vesta::{
	math::{Scalar, Vector3},
	render::RenderEngine,
	sdl2::event::{Event, WindowEvent},
	sdl2::keyboard::Keycode,
	shader::{Attribute, Shader},
	timer::Timer,
	window::WindowEngine,
	Context,
};

const VERTEX_SHADER: &str = "
#version 330

uniform mat4 mvpMatrix;
uniform mat3 normalMatrix;

in vec4 vVertex;
in vec3 vNormal;

smooth out vec3 vVaryingNormal;

void main() {
	vVaryingNormal = normalMatrix * vNormal;
	gl_Position = mvpMatrix * vVertex;
}
";

const FRAGMENT_SHADER: &str = "
#version 330

smooth in vec3 vVaryingNormal;

out vec4 fragColor;

void main() {
	fragColor = vec4(normalize(vVaryingNormal) * 0.5 + 0.5, 1.0);
}
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
	simple_logger::SimpleLogger::new().init()?;

	let context = Context::create()?;
	let window = WindowEngine::new(&context, "vesta_pipeline", 512, 512)?;
	let mut event_pump = context.event_pump()?;

	let mut engine = RenderEngine::new();
	let (width, height) = window.size();
	engine.resize_scene(width, height);
	engine.camera_mut().set_position(Vector3::new(0.0, 0.0, 5.0));

	let shader = Shader::from_sources(
		VERTEX_SHADER,
		FRAGMENT_SHADER,
		&[(Attribute::Vertex, "vVertex"), (Attribute::Normal, "vNormal")],
	)?;
	shader.bind();

	let mut timer = Timer::new();
	'running: loop {
		for event in event_pump.poll_iter() {
			match event {
				Event::Quit { .. }
				| Event::KeyDown {
					keycode: Some(Keycode::Escape),
					..
				} => break 'running,
				Event::Window {
					win_event: WindowEvent::SizeChanged(width, height),
					..
				} => engine.resize_scene(width as u32, height as u32),
				_ => {}
			}
		}

		let elapsed = timer.elapsed_seconds_and_reset() as Scalar;
		engine.draw_scene(elapsed);

		let mvp = *engine.model_view_projection_matrix();
		shader.set_uniform_matrix44("mvpMatrix", &mvp);
		let normal = *engine.normal_matrix(true);
		shader.set_uniform_matrix33("normalMatrix", &normal);

		window.present();
	}

	Ok(())
}
