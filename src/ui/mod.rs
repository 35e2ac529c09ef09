pub mod frame_stats;
pub mod panels;

use winit::event::WindowEvent;
use winit::window::Window;
use crate::game::camera::Camera;
use crate::game::material::Material;
use panels::camera_info::CameraInfoPanel;
use panels::material_hints::MaterialHintsPanel;
pub use frame_stats::FrameStats;

/// What the overlay shows this frame.
pub struct OverlayInfo<'a> {
    pub camera: &'a Camera,
    pub fovy: f32,
    pub gravity: bool,
    pub placed_blocks: usize,
    pub selected: Material,
    pub stats: &'a FrameStats,
    pub crosshair: bool,
}

/// egui text overlay drawn on top of the world.
pub struct Overlay {
    context: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Overlay {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, window: &Window) -> Self {
        let context = egui::Context::default();
        context.set_visuals(egui::Visuals::dark());

        let state = egui_winit::State::new(
            context.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self {
            context,
            state,
            renderer,
        }
    }

    /// Returns true when egui wants the event for itself.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
        size_in_pixels: [u32; 2],
        info: OverlayInfo<'_>,
    ) {
        let raw_input = self.state.take_egui_input(window);
        let output = self.context.run(raw_input, |ctx| Self::draw(ctx, &info));
        self.state.handle_platform_output(window, output.platform_output);

        for (id, delta) in &output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }

        let pixels_per_point = window.scale_factor() as f32;
        let paint_jobs = self.context.tessellate(output.shapes, pixels_per_point);
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point,
        };

        self.renderer.update_buffers(device, queue, encoder, &paint_jobs, &screen);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.renderer.render(&mut render_pass.forget_lifetime(), &paint_jobs, &screen);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    fn draw(ctx: &egui::Context, info: &OverlayInfo<'_>) {
        egui::Window::new("stats")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .show(ctx, |ui| {
                ui.colored_label(
                    egui::Color32::WHITE,
                    format!("{:.0} FPS / {:.2} ms", info.stats.fps(), info.stats.frame_ms())
                );
                CameraInfoPanel::show(ui, info.camera, info.fovy, info.gravity, info.placed_blocks);
            });

        egui::Window::new("materials")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
            .show(ctx, |ui| MaterialHintsPanel::show(ui, info.selected));

        if info.crosshair {
            let center = ctx.screen_rect().center();
            let stroke = egui::Stroke::new(2.0, egui::Color32::WHITE);
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("crosshair"),
            ));

            painter.line_segment([center - egui::vec2(8.0, 0.0), center + egui::vec2(8.0, 0.0)], stroke);
            painter.line_segment([center - egui::vec2(0.0, 8.0), center + egui::vec2(0.0, 8.0)], stroke);
        }
    }
}
