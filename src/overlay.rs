use crate::brightness::Brightness;
use anyhow::{anyhow, Result};
use winit::{dpi::PhysicalSize, window::Window};

/// Full-window surface cleared to the current gray level.
pub struct Overlay {
    pub surface: wgpu::Surface,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub sc_desc: wgpu::SwapChainDescriptor,
    pub swap_chain: wgpu::SwapChain,
    pub inner_size: PhysicalSize<u32>,
    pub brightness: Brightness,
    minimized: bool,
}

impl Overlay {
    pub async fn new(window: &Window, brightness: Brightness) -> Result<Self> {
        let inner_size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::BackendBit::PRIMARY);

        let surface = unsafe { instance.create_surface(window) };
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or_else(|| anyhow!("failed to retrieve a device (wgpu::Adapter)."))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    features: wgpu::Features::empty(),
                    limits: wgpu::Limits::default(),
                    label: None,
                },
                None, // Trace path
            )
            .await?;

        let render_format = adapter
            .get_swap_chain_preferred_format(&surface)
            .ok_or_else(|| anyhow!("failed to get a texture format."))?;

        let sc_desc = wgpu::SwapChainDescriptor {
            usage: wgpu::TextureUsage::RENDER_ATTACHMENT,
            format: render_format,
            width: inner_size.width,
            height: inner_size.height,
            present_mode: wgpu::PresentMode::Fifo,
        };
        let swap_chain = device.create_swap_chain(&surface, &sc_desc);

        Ok(Self {
            surface,
            device,
            queue,
            sc_desc,
            swap_chain,
            inner_size,
            brightness,
            minimized: inner_size.width == 0 || inner_size.height == 0,
        })
    }

    pub fn render(&mut self) -> Result<(), wgpu::SwapChainError> {
        if self.minimized {
            return Ok(());
        }

        let frame = self.swap_chain.get_current_frame()?.output;
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Overlay Encoder"),
            });

        {
            let _render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.brightness.color()),
                        store: true,
                    },
                }],
                depth_stencil_attachment: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));

        Ok(())
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        // Window minimized
        if new_size.width == 0 || new_size.height == 0 {
            self.minimized = true;
            return;
        } else if self.minimized {
            self.minimized = false;
        }

        self.inner_size = new_size;
        self.sc_desc.width = new_size.width;
        self.sc_desc.height = new_size.height;
        self.swap_chain = self.device.create_swap_chain(&self.surface, &self.sc_desc);
    }

    pub fn recreate_swap_chain(&mut self) {
        self.resize(self.inner_size);
    }
}
