use crate::constants::{CLEAR_COLOR, MSAA_SAMPLE_COUNT};
use crate::core::{
    clamp_extent, fit_extent, hex_to_linear_rgba, uv_sphere_wireframe, BackdropScene,
    BACKDROP_COLOR_HEX, PARTICLE_OPACITY, SPHERE_OPACITY,
};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod points;
mod targets;
mod wireframe;
use points::{create_points_resources, PointsResources};
use targets::RenderTargets;
use wireframe::{create_wireframe_resources, WireframeResources};

/// Per-object uniform block shared by both shaders.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

impl ObjectUniforms {
    fn new(view: Mat4, proj: Mat4, model: Mat4, color: [f32; 4], params: [f32; 4]) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color,
            params,
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    points: PointsResources,
    wireframe: WireframeResources,
    particle_color: [f32; 4],
    sphere_color: [f32; 4],
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &BackdropScene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: composite with the page using premultiplied alpha when offered.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let max_dim = device.limits().max_texture_dimension_2d;
        let (width, height) = clamp_extent((width, height), max_dim);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height, format, MSAA_SAMPLE_COUNT);
        let bgl = helpers::object_bind_group_layout(&device);
        let mesh = uv_sphere_wireframe(
            scene.sphere.radius,
            scene.config.sphere_width_segments,
            scene.config.sphere_height_segments,
        );
        let wireframe =
            create_wireframe_resources(&device, &bgl, format, MSAA_SAMPLE_COUNT, &mesh);
        let points = create_points_resources(
            &device,
            &bgl,
            format,
            MSAA_SAMPLE_COUNT,
            scene.field.positions(),
        );
        log::info!(
            "[gpu] ready {}x{} format={:?} particles={} sphere_edges={}",
            width,
            height,
            format,
            points.instance_count,
            mesh.edge_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            points,
            wireframe,
            particle_color: hex_to_linear_rgba(BACKDROP_COLOR_HEX, PARTICLE_OPACITY),
            sphere_color: hex_to_linear_rgba(BACKDROP_COLOR_HEX, SPHERE_OPACITY),
            width,
            height,
        })
    }

    /// Reconfigure the surface for a new drawing-buffer size. Returns false
    /// when the size is unchanged.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) -> bool {
        let max_dim = self.device.limits().max_texture_dimension_2d;
        let Some((width, height)) = fit_extent((width, height), (self.width, self.height), max_dim)
        else {
            return false;
        };
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, width, height);
        true
    }

    pub fn render(&mut self, scene: &BackdropScene) -> anyhow::Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!("acquire frame: {:?}", e)),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let cam_view = scene.camera.view_matrix();
        let cam_proj = scene.camera.projection_matrix();
        let sphere_u = ObjectUniforms::new(
            cam_view,
            cam_proj,
            scene.sphere.transform.matrix(),
            self.sphere_color,
            [0.0; 4],
        );
        let points_u = ObjectUniforms::new(
            cam_view,
            cam_proj,
            scene.field.transform.matrix(),
            self.particle_color,
            [scene.particle_quad_size(), 0.0, 0.0, 0.0],
        );
        self.queue
            .write_buffer(&self.wireframe.uniform_buffer, 0, bytemuck::bytes_of(&sphere_u));
        self.queue
            .write_buffer(&self.points.uniform_buffer, 0, bytemuck::bytes_of(&points_u));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("backdrop_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("backdrop_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.wireframe.pipeline);
            rpass.set_bind_group(0, &self.wireframe.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.wireframe.vertex_buffer.slice(..));
            rpass.set_index_buffer(
                self.wireframe.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            rpass.draw_indexed(0..self.wireframe.index_count, 0, 0..1);

            if self.points.instance_count > 0 {
                rpass.set_pipeline(&self.points.pipeline);
                rpass.set_bind_group(0, &self.points.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.points.instance_buffer.slice(..));
                rpass.draw(0..6, 0..self.points.instance_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
