use super::helpers::{self, PipelineSpec};
use super::ObjectUniforms;
use crate::core::WireframeMesh;
use wgpu;
use wgpu::util::DeviceExt;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

pub(crate) struct WireframeResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_wireframe_resources(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
    mesh: &WireframeMesh,
) -> WireframeResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("wireframe_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::WIREFRAME_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("wireframe_pl"),
        bind_group_layouts: &[bgl],
        push_constant_ranges: &[],
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        &pl,
        PipelineSpec {
            label: "wireframe_pipeline",
            shader: &shader,
            vs_entry: "vs_wire",
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::LineList,
            blend: wgpu::BlendState::ALPHA_BLENDING,
        },
        color_format,
        sample_count,
    );

    let packed: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.to_array()).collect();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("wireframe_vertices"),
        contents: bytemuck::cast_slice(&packed),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("wireframe_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let (uniform_buffer, bind_group) = helpers::create_uniform_binding(
        device,
        bgl,
        "wireframe_uniforms",
        std::mem::size_of::<ObjectUniforms>() as u64,
    );

    WireframeResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        uniform_buffer,
        bind_group,
    }
}
