use super::helpers;
use wgpu;

/// Multisampled color target resolved into the swapchain each frame.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) =
            helpers::create_color_texture(device, "msaa_color", width, height, format, sample_count);
        Self {
            msaa_tex,
            msaa_view,
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.msaa_tex, self.msaa_view) = helpers::create_color_texture(
            device,
            "msaa_color",
            width,
            height,
            self.format,
            self.sample_count,
        );
    }
}
