use cgmath::Point3;
use wgpu::util::DeviceExt;
use crate::game::culling::{visible_faces, CullPolicy, Face, FaceMask};
use crate::game::material::Material;
use crate::game::world::World;
use crate::rendering::texture_atlas::TextureAtlas;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// The unit cube centered on the origin, 36 vertices, laid out face by face
/// in `Face::ALL` order so `Face::vertex_range` indexes into it. Every face
/// winds counter-clockwise seen from outside, corners ordered bottom-left,
/// bottom-right, top-right, bottom-left, top-right, top-left.
#[rustfmt::skip]
pub const UNIT_CUBE: [[f32; 3]; 36] = [
    // Left (-X)
    [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5],
    [-0.5, -0.5, -0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
    // Right (+X)
    [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5],
    [ 0.5, -0.5,  0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5],
    // Bottom (-Y)
    [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5],
    [-0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5],
    // Top (+Y)
    [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5],
    [-0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
    // Front (-Z)
    [ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5],
    [ 0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5],
    // Back (+Z)
    [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5],
    [-0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5],
];

pub struct WorldMesh {
    pub vertices: Vec<Vertex>,
}

impl WorldMesh {
    pub fn new() -> Self {
        Self { vertices: Vec::new(), }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn face_count(&self) -> u32 {
        self.vertex_count() / Face::VERTICES_PER_FACE
    }
}

pub struct WorldMesher {
    texture_atlas: TextureAtlas,
    cull_policy: CullPolicy,
}

impl WorldMesher {
    pub fn new(texture_atlas: TextureAtlas, cull_policy: CullPolicy) -> Self {
        Self {
            texture_atlas,
            cull_policy,
        }
    }

    /// Static cells contribute their visible faces, placed and display
    /// blocks are drawn whole.
    pub fn generate_mesh(&self, world: &World) -> WorldMesh {
        let mut mesh = WorldMesh::new();
        let grid = world.grid();

        for cell in grid.occupied_cells() {
            let faces = visible_faces(grid, cell, self.cull_policy);
            if faces.is_empty() {
                continue;
            }

            self.add_cube(&mut mesh, cell.center(), faces, Material::for_layer(cell.y));
        }

        for block in world.blocks().iter().chain(world.display_blocks()) {
            self.add_cube(&mut mesh, block.position, FaceMask::ALL, block.material);
        }

        mesh
    }

    fn add_cube(&self, mesh: &mut WorldMesh, center: Point3<f32>, faces: FaceMask, material: Material) {
        let uvs = self.texture_atlas.get_uvs(material);

        for face in faces.faces() {
            let normal: [f32; 3] = face.normal().into();
            let range = face.vertex_range();
            let corners = &UNIT_CUBE[range.start as usize..range.end as usize];

            for (corner, uv) in corners.iter().zip(uvs.iter()) {
                mesh.vertices.push(Vertex {
                    position: [
                        center.x + corner[0],
                        center.y + corner[1],
                        center.z + corner[2],
                    ],
                    tex_coords: *uv,
                    normal,
                });
            }
        }
    }
}

pub struct WorldMeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl WorldMeshBuffer {
    pub fn from_mesh(device: &wgpu::Device, mesh: &WorldMesh) -> Option<Self> {
        if mesh.is_empty() {
            return None;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("World Vertex Buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Some(Self {
            vertex_buffer,
            vertex_count: mesh.vertex_count(),
        })
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
