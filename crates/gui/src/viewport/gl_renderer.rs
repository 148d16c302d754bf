use glow::HasContext;

use super::camera::OrbitCamera;
use super::mesh::{self, MeshData};
use crate::build::PartInstance;
use crate::state::settings::GroundSettings;

// ── Render parameters ────────────────────────────────────────

/// Parameters for rendering the viewport
pub struct RenderParams {
    /// Viewport rectangle [x, y, width, height] in pixels
    pub viewport: [f32; 4],
    /// Show the ground plane
    pub ground_visible: bool,
    /// Ground color RGB
    pub ground_color: [u8; 3],
    /// Ground opacity (0.0 - 1.0)
    pub ground_opacity: f32,
    /// Draw triangles as wireframe
    pub wireframe: bool,
    /// Background color RGB
    pub bg_color: [u8; 3],
}

// ── GPU mesh handles ─────────────────────────────────────────

struct GpuMesh {
    vao: glow::VertexArray,
    _vbo: glow::Buffer,
    ibo: glow::Buffer,
    index_count: i32,
}

// ── Main GL renderer ─────────────────────────────────────────

pub struct GlRenderer {
    program: glow::Program,
    /// One GPU mesh per part, in group part order
    part_meshes: Vec<GpuMesh>,
    ground: Option<GpuMesh>,
    /// Cached ground size to detect changes
    cached_ground_size: Option<f32>,
    /// Version counter to detect group rebuilds
    last_group_version: u64,
}

impl GlRenderer {
    pub fn new(gl: &glow::Context) -> Self {
        let program = compile_program(gl, MESH_VERT, MESH_FRAG);

        Self {
            program,
            part_meshes: Vec::new(),
            ground: None,
            cached_ground_size: None,
            last_group_version: 0,
        }
    }

    /// Upload the ground quad, rebuilding it when the size changes
    pub fn sync_ground(&mut self, gl: &glow::Context, settings: &GroundSettings) {
        if self.cached_ground_size == Some(settings.size) {
            return;
        }
        if let Some(old) = self.ground.take() {
            delete_mesh(gl, &old);
        }
        self.ground = Some(upload_mesh(gl, &mesh::plane(settings.size)));
        self.cached_ground_size = Some(settings.size);
    }

    /// Upload part meshes to the GPU. Version-gated: the buffers are only
    /// re-uploaded when the group has been rebuilt, so in-place appearance
    /// updates cost nothing here.
    pub fn sync_group(&mut self, gl: &glow::Context, meshes: &[MeshData], version: u64) {
        if version == self.last_group_version && !self.part_meshes.is_empty() {
            return;
        }
        self.last_group_version = version;

        for old in self.part_meshes.drain(..) {
            delete_mesh(gl, &old);
        }
        for data in meshes {
            self.part_meshes.push(upload_mesh(gl, data));
        }
    }

    /// Render the scene
    pub fn paint(
        &self,
        gl: &glow::Context,
        camera: &OrbitCamera,
        instances: &[PartInstance],
        params: &RenderParams,
    ) {
        let aspect = params.viewport[2] / params.viewport[3];
        let vp = camera.view_projection(aspect);
        let eye = camera.eye_position();

        unsafe {
            gl.viewport(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.scissor(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.enable(glow::SCISSOR_TEST);

            // Clear viewport area with configured background color
            gl.clear_color(
                params.bg_color[0] as f32 / 255.0,
                params.bg_color[1] as f32 / 255.0,
                params.bg_color[2] as f32 / 255.0,
                1.0,
            );
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);

            gl.use_program(Some(self.program));
            set_uniform_mat4(gl, self.program, "u_vp", &vp);
            set_uniform_vec3(gl, self.program, "u_eye", &eye);

            if params.wireframe {
                gl.polygon_mode(glow::FRONT_AND_BACK, glow::LINE);
            }

            // Parts: opaque, specular
            set_uniform_f32(gl, self.program, "u_opacity", 1.0);
            set_uniform_f32(gl, self.program, "u_specular", 1.0);
            for (gpu, instance) in self.part_meshes.iter().zip(instances) {
                set_uniform_mat4(gl, self.program, "u_model", &instance.model);
                let normal = instance.model.inverse().transpose();
                set_uniform_mat4(gl, self.program, "u_normal", &normal);
                set_uniform_vec3(
                    gl,
                    self.program,
                    "u_color",
                    &glam::Vec3::from_array(instance.color),
                );
                draw_mesh(gl, gpu);
            }

            if params.wireframe {
                gl.polygon_mode(glow::FRONT_AND_BACK, glow::FILL);
            }

            // Ground: translucent, matte, drawn after the parts so blending
            // sees their depth
            if params.ground_visible {
                if let Some(ref ground) = self.ground {
                    gl.enable(glow::BLEND);
                    gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
                    set_uniform_mat4(gl, self.program, "u_model", &glam::Mat4::IDENTITY);
                    set_uniform_mat4(gl, self.program, "u_normal", &glam::Mat4::IDENTITY);
                    set_uniform_vec3(
                        gl,
                        self.program,
                        "u_color",
                        &glam::Vec3::new(
                            params.ground_color[0] as f32 / 255.0,
                            params.ground_color[1] as f32 / 255.0,
                            params.ground_color[2] as f32 / 255.0,
                        ),
                    );
                    set_uniform_f32(gl, self.program, "u_opacity", params.ground_opacity);
                    set_uniform_f32(gl, self.program, "u_specular", 0.0);
                    draw_mesh(gl, ground);
                    gl.disable(glow::BLEND);
                }
            }

            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::SCISSOR_TEST);
            gl.use_program(None);
        }
    }

    #[allow(dead_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
        if let Some(ref ground) = self.ground {
            delete_mesh(gl, ground);
        }
        for gpu in &self.part_meshes {
            delete_mesh(gl, gpu);
        }
    }
}

// ── GPU upload ───────────────────────────────────────────────

fn upload_mesh(gl: &glow::Context, data: &MeshData) -> GpuMesh {
    unsafe {
        let vao = gl.create_vertex_array().unwrap();
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer().unwrap();
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck_cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        let stride = 6 * 4; // 6 floats * 4 bytes
        // position: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        // normal: location 1
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, 3 * 4);

        let ibo = gl.create_buffer().unwrap();
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck_cast_slice(&data.indices),
            glow::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);

        GpuMesh {
            vao,
            _vbo: vbo,
            ibo,
            index_count: data.indices.len() as i32,
        }
    }
}

fn delete_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    unsafe {
        gl.delete_vertex_array(mesh.vao);
        gl.delete_buffer(mesh._vbo);
        gl.delete_buffer(mesh.ibo);
    }
}

// ── Draw calls ───────────────────────────────────────────────

unsafe fn draw_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    gl.bind_vertex_array(Some(mesh.vao));
    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.ibo));
    gl.draw_elements(glow::TRIANGLES, mesh.index_count, glow::UNSIGNED_INT, 0);
    gl.bind_vertex_array(None);
}

// ── Shader compilation ───────────────────────────────────────

fn compile_program(gl: &glow::Context, vert_src: &str, frag_src: &str) -> glow::Program {
    unsafe {
        let program = gl.create_program().unwrap();

        let vert = gl.create_shader(glow::VERTEX_SHADER).unwrap();
        gl.shader_source(vert, vert_src);
        gl.compile_shader(vert);
        if !gl.get_shader_compile_status(vert) {
            let log = gl.get_shader_info_log(vert);
            tracing::error!("Vertex shader error: {log}");
        }

        let frag = gl.create_shader(glow::FRAGMENT_SHADER).unwrap();
        gl.shader_source(frag, frag_src);
        gl.compile_shader(frag);
        if !gl.get_shader_compile_status(frag) {
            let log = gl.get_shader_info_log(frag);
            tracing::error!("Fragment shader error: {log}");
        }

        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            tracing::error!("Program link error: {log}");
        }

        gl.delete_shader(vert);
        gl.delete_shader(frag);

        program
    }
}

// ── Uniform setters ──────────────────────────────────────────

fn set_uniform_mat4(gl: &glow::Context, program: glow::Program, name: &str, mat: &glam::Mat4) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_matrix_4_f32_slice(loc.as_ref(), false, &mat.to_cols_array());
    }
}

fn set_uniform_vec3(gl: &glow::Context, program: glow::Program, name: &str, v: &glam::Vec3) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_3_f32(loc.as_ref(), v.x, v.y, v.z);
    }
}

fn set_uniform_f32(gl: &glow::Context, program: glow::Program, name: &str, value: f32) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_1_f32(loc.as_ref(), value);
    }
}

// ── Byte cast helper ─────────────────────────────────────────

fn bytemuck_cast_slice<T: Copy>(slice: &[T]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            slice.as_ptr() as *const u8,
            std::mem::size_of_val(slice),
        )
    }
}

// ── Shaders ──────────────────────────────────────────────────

const MESH_VERT: &str = r#"#version 330 core
uniform mat4 u_vp;
uniform mat4 u_model;
uniform mat4 u_normal;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;

out vec3 v_world_pos;
out vec3 v_normal;

void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    gl_Position = u_vp * world;
    v_world_pos = world.xyz;
    v_normal = mat3(u_normal) * a_normal;
}
"#;

// Fixed light rig: soft ambient, a sun from (20, 20, 10) and a cool fill
// point light behind the object.
const MESH_FRAG: &str = r#"#version 330 core
uniform vec3 u_color;
uniform vec3 u_eye;
uniform float u_opacity;
uniform float u_specular;

in vec3 v_world_pos;
in vec3 v_normal;

out vec4 frag_color;

const vec3 AMBIENT = vec3(0.251) * 0.6;
const vec3 SUN_DIR = normalize(vec3(20.0, 20.0, 10.0));
const float SUN_INTENSITY = 0.8;
const vec3 FILL_POS = vec3(-15.0, 15.0, -15.0);
const float FILL_INTENSITY = 0.4;
const float SHININESS = 30.0;

void main() {
    vec3 n = normalize(v_normal);
    vec3 view_dir = normalize(u_eye - v_world_pos);

    vec3 light = AMBIENT;

    float sun_diff = max(dot(n, SUN_DIR), 0.0);
    light += vec3(sun_diff * SUN_INTENSITY);

    vec3 fill_dir = normalize(FILL_POS - v_world_pos);
    float fill_diff = max(dot(n, fill_dir), 0.0);
    light += vec3(fill_diff * FILL_INTENSITY);

    vec3 color = u_color * light;

    vec3 half_dir = normalize(SUN_DIR + view_dir);
    float spec = pow(max(dot(n, half_dir), 0.0), SHININESS);
    color += vec3(spec * SUN_INTENSITY * 0.5) * u_specular;

    frag_color = vec4(color, u_opacity);
}
"#;
