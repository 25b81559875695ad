//! wgpu render pipeline for the hero sphere.
//!
//! One pipeline per material kind: the textured shader samples
//! `sphereTexture` through bind group 1, the gradient shader has no
//! texture binding.

use hero_scene::{MaterialKind, TextureHandle};

use crate::gpu::DEPTH_FORMAT;
use crate::texture::{self, GpuTexture};

use super::mesh::SphereMesh;
use super::types::{SphereUniforms, SphereVertex};

/// Texture binding state for the textured shader.
struct TextureBinding {
    layout: wgpu::BindGroupLayout,
    bind_group: Option<wgpu::BindGroup>,
    bound: Option<TextureHandle>,
}

/// Manages the wgpu pipeline, buffers, and bind groups for sphere rendering.
pub struct SpherePipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    texture: Option<TextureBinding>,
}

impl SpherePipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        kind: MaterialKind,
        mesh: &SphereMesh,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let source = match kind {
            MaterialKind::GradientSphere => include_str!("../shaders/sphere_gradient.wgsl"),
            _ => include_str!("../shaders/sphere_textured.wgsl"),
        };
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere vertex buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere index buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sphere uniforms"),
            size: std::mem::size_of::<SphereUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sphere uniform layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<SphereUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sphere uniform bind group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let texture = (kind != MaterialKind::GradientSphere).then(|| TextureBinding {
            layout: texture::texture_bind_group_layout(device, "sphere texture layout"),
            bind_group: None,
            bound: None,
        });

        let mut layouts = vec![&uniform_layout];
        if let Some(tex) = &texture {
            layouts.push(&tex.layout);
        }
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere pipeline layout"),
            bind_group_layouts: &layouts,
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SphereVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // Displacement can fold triangles over; draw both faces.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            uniform_buffer,
            uniform_bind_group,
            texture,
        }
    }

    /// Upload sphere uniforms (MVP, time, light).
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &SphereUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Point the texture binding at `gpu_texture`. Rebuilds the bind group
    /// only when `handle` changed.
    pub fn bind_texture(
        &mut self,
        device: &wgpu::Device,
        sampler: &wgpu::Sampler,
        handle: TextureHandle,
        gpu_texture: &GpuTexture,
    ) {
        let Some(binding) = self.texture.as_mut() else {
            return;
        };
        if binding.bound == Some(handle) && binding.bind_group.is_some() {
            return;
        }
        binding.bind_group = Some(texture::create_texture_bind_group(
            device,
            &binding.layout,
            gpu_texture,
            sampler,
            "sphere texture bind group",
        ));
        binding.bound = Some(handle);
        tracing::debug!(handle = handle.0, "Sphere texture bound");
    }

    /// Record draw commands into an open render pass.
    ///
    /// The textured kind draws nothing until a texture is bound.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        let texture_group = match &self.texture {
            Some(binding) => match &binding.bind_group {
                Some(group) => Some(group),
                None => return,
            },
            None => None,
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        if let Some(group) = texture_group {
            pass.set_bind_group(1, group, &[]);
        }
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
