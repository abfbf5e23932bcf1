use crate::constants::*;
use crate::error::ViewerError;
use crate::session::FrameParams;
use crate::texture::ImageTexture;
use crate::view;
use glam::{Mat4, Vec2};
use glow::HasContext;
use std::sync::Arc;

const IMAGE_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;
layout (location = 1) in vec2 aUV;

uniform mat4 uProjection;
uniform vec2 uPan;
uniform float uZoom;

out vec2 vUV;

void main() {
    vec2 pos = aPos * uZoom + uPan;
    gl_Position = uProjection * vec4(pos, 0.0, 1.0);
    vUV = aUV;
}
"#;

const IMAGE_FRAGMENT_SHADER: &str = r#"#version 330 core
in vec2 vUV;
out vec4 FragColor;

uniform sampler2D uTexture;

void main() {
    FragColor = texture(uTexture, vUV);
}
"#;

const COLOR_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 uProjection;

void main() {
    gl_Position = uProjection * vec4(aPos, 0.0, 1.0);
}
"#;

const COLOR_FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

uniform vec4 uColor;

void main() {
    FragColor = uColor;
}
"#;

struct ImageProgram {
    program: glow::Program,
    projection_loc: Option<glow::UniformLocation>,
    pan_loc: Option<glow::UniformLocation>,
    zoom_loc: Option<glow::UniformLocation>,
    texture_loc: Option<glow::UniformLocation>,
}

struct ColorProgram {
    program: glow::Program,
    projection_loc: Option<glow::UniformLocation>,
    color_loc: Option<glow::UniformLocation>,
}

pub struct Renderer {
    gl: Arc<glow::Context>,
    image_program: ImageProgram,
    color_program: ColorProgram,
    // Image quad in image pixels, shared by the main view and the minimap
    quad_vao: glow::VertexArray,
    quad_vbo: glow::Buffer,
    quad_ebo: glow::Buffer,
    // Streamed four-corner outlines and fills
    shape_vao: glow::VertexArray,
    shape_vbo: glow::Buffer,
}

impl Renderer {
    pub fn new(gl: Arc<glow::Context>, texture: &ImageTexture) -> Result<Self, ViewerError> {
        unsafe {
            let program = link_program(&gl, IMAGE_VERTEX_SHADER, IMAGE_FRAGMENT_SHADER)?;
            let image_program = ImageProgram {
                program,
                projection_loc: gl.get_uniform_location(program, "uProjection"),
                pan_loc: gl.get_uniform_location(program, "uPan"),
                zoom_loc: gl.get_uniform_location(program, "uZoom"),
                texture_loc: gl.get_uniform_location(program, "uTexture"),
            };

            let program = link_program(&gl, COLOR_VERTEX_SHADER, COLOR_FRAGMENT_SHADER)?;
            let color_program = ColorProgram {
                program,
                projection_loc: gl.get_uniform_location(program, "uProjection"),
                color_loc: gl.get_uniform_location(program, "uColor"),
            };

            let (w, h) = (texture.extent.width as f32, texture.extent.height as f32);
            // Position (2 floats) + UV (2 floats)
            let vertices: [f32; 16] = [
                0.0, 0.0, 0.0, 0.0, // bottom-left
                w, 0.0, 1.0, 0.0, // bottom-right
                w, h, 1.0, 1.0, // top-right
                0.0, h, 0.0, 1.0, // top-left
            ];
            let indices: [u32; 6] = [0, 1, 2, 2, 3, 0];

            let quad_vao = gl
                .create_vertex_array()
                .map_err(|e| ViewerError::init("Failed to create quad VAO", e))?;
            gl.bind_vertex_array(Some(quad_vao));

            let quad_vbo = gl
                .create_buffer()
                .map_err(|e| ViewerError::init("Failed to create quad VBO", e))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(quad_vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&vertices),
                glow::STATIC_DRAW,
            );

            let quad_ebo = gl
                .create_buffer()
                .map_err(|e| ViewerError::init("Failed to create quad EBO", e))?;
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(quad_ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&indices),
                glow::STATIC_DRAW,
            );

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, 16, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, 16, 8);
            gl.bind_vertex_array(None);

            let shape_vao = gl
                .create_vertex_array()
                .map_err(|e| ViewerError::init("Failed to create shape VAO", e))?;
            gl.bind_vertex_array(Some(shape_vao));

            let shape_vbo = gl
                .create_buffer()
                .map_err(|e| ViewerError::init("Failed to create shape VBO", e))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(shape_vbo));
            gl.buffer_data_size(glow::ARRAY_BUFFER, (4 * 2 * std::mem::size_of::<f32>()) as i32, glow::DYNAMIC_DRAW);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, 8, 0);
            gl.bind_vertex_array(None);

            let [r, g, b, a] = CLEAR_COLOR;
            gl.clear_color(r, g, b, a);

            // Indicator and border are translucent
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            Ok(Self {
                gl,
                image_program,
                color_program,
                quad_vao,
                quad_vbo,
                quad_ebo,
                shape_vao,
                shape_vbo,
            })
        }
    }

    pub fn render(&self, frame: &FrameParams, texture: &ImageTexture) {
        puffin::profile_function!();

        let (vw, vh) = (frame.viewport.width as i32, frame.viewport.height as i32);
        let full = frame.viewport.projection();
        unsafe {
            self.gl.viewport(0, 0, vw, vh);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        {
            puffin::profile_scope!("render_main");
            self.draw_image(texture, &full, frame.pan, frame.zoom);
        }

        {
            puffin::profile_scope!("render_minimap");
            let m = frame.minimap;
            let local = view::projection(m.width as f32, m.height as f32);
            unsafe {
                self.gl.viewport(m.x, m.y, m.width, m.height);
            }
            self.draw_image(texture, &local, frame.minimap_pan, frame.minimap_zoom);
            self.draw_shape(&local, &frame.indicator, MINIMAP_INDICATOR_COLOR, glow::TRIANGLE_FAN);

            unsafe {
                self.gl.viewport(0, 0, vw, vh);
            }
            self.draw_shape(&full, &frame.border, MINIMAP_BORDER_COLOR, glow::LINE_LOOP);
        }
    }

    fn draw_image(&self, texture: &ImageTexture, projection: &Mat4, pan: Vec2, zoom: f32) {
        let p = &self.image_program;
        unsafe {
            self.gl.use_program(Some(p.program));
            self.gl.uniform_matrix_4_f32_slice(p.projection_loc.as_ref(), false, &projection.to_cols_array());
            self.gl.uniform_2_f32(p.pan_loc.as_ref(), pan.x, pan.y);
            self.gl.uniform_1_f32(p.zoom_loc.as_ref(), zoom);
            texture.bind(0);
            self.gl.uniform_1_i32(p.texture_loc.as_ref(), 0);

            self.gl.bind_vertex_array(Some(self.quad_vao));
            self.gl.draw_elements(glow::TRIANGLES, 6, glow::UNSIGNED_INT, 0);
            self.gl.bind_vertex_array(None);
        }
    }

    fn draw_shape(&self, projection: &Mat4, corners: &[Vec2; 4], color: [f32; 4], mode: u32) {
        let p = &self.color_program;
        let vertices: Vec<f32> = corners.iter().flat_map(|c| [c.x, c.y]).collect();
        unsafe {
            self.gl.use_program(Some(p.program));
            self.gl.uniform_matrix_4_f32_slice(p.projection_loc.as_ref(), false, &projection.to_cols_array());
            self.gl.uniform_4_f32(p.color_loc.as_ref(), color[0], color[1], color[2], color[3]);

            self.gl.bind_vertex_array(Some(self.shape_vao));
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.shape_vbo));
            self.gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, bytemuck::cast_slice(&vertices));
            self.gl.draw_arrays(mode, 0, 4);
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.image_program.program);
            self.gl.delete_program(self.color_program.program);
            self.gl.delete_vertex_array(self.quad_vao);
            self.gl.delete_buffer(self.quad_vbo);
            self.gl.delete_buffer(self.quad_ebo);
            self.gl.delete_vertex_array(self.shape_vao);
            self.gl.delete_buffer(self.shape_vbo);
        }
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::Shader, ViewerError> {
    let shader = gl
        .create_shader(kind)
        .map_err(|e| ViewerError::init("Failed to create shader", e))?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(ViewerError::Compile { stage, log });
    }
    Ok(shader)
}

unsafe fn link_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, ViewerError> {
    let vertex = compile_shader(gl, glow::VERTEX_SHADER, "vertex shader compile", vertex_src)?;
    let fragment = compile_shader(gl, glow::FRAGMENT_SHADER, "fragment shader compile", fragment_src)?;

    let program = gl
        .create_program()
        .map_err(|e| ViewerError::init("Failed to create program", e))?;
    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if !gl.get_program_link_status(program) {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        return Err(ViewerError::Compile { stage: "program link", log });
    }
    Ok(program)
}
