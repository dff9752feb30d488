use super::helpers::{self, PipelineSpec};
use super::ObjectUniforms;
use glam::Vec3;
use wgpu;
use wgpu::util::DeviceExt;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

// src * alpha + dst; alpha accumulates the same way.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub(crate) struct PointsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
    positions: &[Vec3],
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[bgl],
        push_constant_ranges: &[],
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        &pl,
        PipelineSpec {
            label: "points_pipeline",
            shader: &shader,
            vs_entry: "vs_points",
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            blend: ADDITIVE,
        },
        color_format,
        sample_count,
    );

    let packed: Vec<[f32; 3]> = positions.iter().map(|p| p.to_array()).collect();
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("points_instances"),
        contents: bytemuck::cast_slice(&packed),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let (uniform_buffer, bind_group) = helpers::create_uniform_binding(
        device,
        bgl,
        "points_uniforms",
        std::mem::size_of::<ObjectUniforms>() as u64,
    );

    PointsResources {
        pipeline,
        instance_buffer,
        instance_count: positions.len() as u32,
        uniform_buffer,
        bind_group,
    }
}
