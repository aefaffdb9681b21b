//! wgpu surface, pipeline and the per-tick uniform feed.

use evening_core::{PhysicsConstants, ShineParams};
use wgpu::util::DeviceExt;

/// Uniform block consumed by the bounce kernel. The physics scalars are
/// filled once at startup; time and resolution are refreshed every tick.
/// Field order and padding mirror `Uniforms` in ball.wgsl.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    ball_radius: f32,
    gravity: f32,
    upwards_acceleration: f32,
    starting_height: f32,
    first_cycle_duration: f32,
    velocity_after_first_cycle: f32,
    second_cycle_duration: f32,
    position_after_second_cycle: f32,
    third_cycle_duration: f32,
    velocity_after_third_cycle: f32,
    fourth_cycle_duration: f32,
    cycle_duration: f32,
    shine_offset: f32,
    max_dist_from_shine: f32,
    time: f32,
    _pad: f32,
    resolution: [f32; 2],
    _pad2: [f32; 2],
}

impl Uniforms {
    fn new(physics: &PhysicsConstants, shine: &ShineParams) -> Self {
        Self {
            ball_radius: physics.radius as f32,
            gravity: physics.gravity as f32,
            upwards_acceleration: physics.upwards_acceleration as f32,
            starting_height: physics.starting_height as f32,
            first_cycle_duration: physics.first_cycle_duration as f32,
            velocity_after_first_cycle: physics.velocity_after_first_cycle as f32,
            second_cycle_duration: physics.second_cycle_duration as f32,
            position_after_second_cycle: physics.position_after_second_cycle as f32,
            third_cycle_duration: physics.third_cycle_duration as f32,
            velocity_after_third_cycle: physics.velocity_after_third_cycle as f32,
            fourth_cycle_duration: physics.fourth_cycle_duration as f32,
            cycle_duration: physics.cycle_duration as f32,
            shine_offset: shine.offset as f32,
            max_dist_from_shine: shine.max_dist as f32,
            time: 0.0,
            _pad: 0.0,
            resolution: [1.0, 1.0],
            _pad2: [0.0, 0.0],
        }
    }
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniforms: Uniforms,
}

impl<'w> GpuState<'w> {
    pub async fn new(
        window: &'w winit::window::Window,
        physics: &PhysicsConstants,
        shine: &ShineParams,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no compatible GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ball"),
            source: wgpu::ShaderSource::Wgsl(evening_core::BALL_WGSL.into()),
        });

        let uniforms = Uniforms::new(physics, shine);
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        // full-screen quad, two triangles in clip space
        let quad_vertices: [f32; 12] = [
            -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, //
            -1.0, -1.0, 1.0, -1.0, 1.0, 1.0,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        }];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            bind_group,
            uniforms,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Render one tick: elapsed seconds since the epoch plus the current
    /// surface size go into the uniform block, then the quad is drawn.
    pub fn render(&mut self, elapsed_secs: f32) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // viewport size is resampled every tick, no resize bookkeeping
        self.uniforms.time = elapsed_secs;
        self.uniforms.resolution = [self.config.width as f32, self.config.height as f32];
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.draw(0..6, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
