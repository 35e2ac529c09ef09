pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod rendering;
pub mod ui;

use std::sync::Arc;
use std::time::Instant;
use winit::{event::DeviceEvent, event::MouseButton, keyboard::KeyCode, window::Window};
use winit::window::CursorGrabMode;
use config::EditorConfig;
use game::camera::Camera;
use game::player::Player;
use game::world::World;
use game::{cast_ray, EditController};
use input::camera_controller::CameraController;
use input::edit_bindings::EditBindings;
use rendering::projection::Projection;
use rendering::WorldRenderer;
use ui::{FrameStats, Overlay, OverlayInfo};

const WINDOW_TITLE: &str = "Voxel Editor";

pub struct State {
    // GPU Resources
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,

    // Game State
    world: World,
    edit: EditController,
    player: Player,
    camera: Camera,

    // Input state
    camera_controller: CameraController,
    edit_bindings: EditBindings,
    cursor_grabbed: bool,
    cursor_position: (f32, f32),

    // Rendering state
    projection: Projection,
    world_renderer: WorldRenderer,
    overlay: Overlay,

    // Timing
    start: Instant,
    last_render_time: Instant,
    frame_stats: FrameStats,
    is_surface_configured: bool,
}

impl State {
    pub async fn new(window: Arc<Window>, config: EditorConfig) -> anyhow::Result<Self> {
        /*
            GPU Setup
        */
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
           backends: wgpu::Backends::PRIMARY,
           ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }).await?;

        log::info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter.request_device(&wgpu::DeviceDescriptor {
            label: None,
            required_features: wgpu::Features::empty(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        }).await?;

        let surface_caps = surface.get_capabilities(&adapter);

        let surface_format = surface_caps.formats.iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        /*
            Setup Game State
        */
        let camera = Camera::new(
            (15.0, 12.0, 35.0).into(),
            -std::f32::consts::FRAC_PI_2,
            0.0,
        );

        let projection = Projection::new(surface_config.width, surface_config.height, config.fovy);
        let camera_controller = CameraController::new(
            config.move_speed,
            config.sprint_speed,
            config.mouse_sensitivity,
        );

        let world = World::new(config.grid_extent);
        let edit = EditController::new(&config);
        let player = Player::new(config.gravity);

        /*
            Renderers
        */
        let world_renderer = WorldRenderer::new(
            &device,
            &queue,
            &surface_config,
            config.cull_policy,
            projection.get_view_projection_matrix(&camera),
        );
        let overlay = Overlay::new(&device, surface_config.format, &window);

        Self::set_cursor_grabbed(&window, true);
        window.set_title(WINDOW_TITLE);

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            is_surface_configured: false,
            window,
            world,
            edit,
            player,
            camera,
            camera_controller,
            edit_bindings: EditBindings::new(),
            cursor_grabbed: true,
            cursor_position: (0.0, 0.0),
            projection,
            world_renderer,
            overlay,
            start: Instant::now(),
            last_render_time: Instant::now(),
            frame_stats: FrameStats::new(),
        })
    }

    fn set_cursor_grabbed(window: &Window, grabbed: bool) {
        if grabbed {
            // Hide cursor
            window.set_cursor_visible(false);

            // Capture/lock cursor
            window.set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
                .unwrap_or_else(|e| log::warn!("Failed to grab cursor: {}", e));
        } else {
            // Show cursor
            window.set_cursor_visible(true);

            // Release cursor
            window.set_cursor_grab(CursorGrabMode::None)
                .unwrap_or_else(|e| log::warn!("Failed to release cursor: {}", e));
        }
    }

    /*
        Window Events
    */
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
            self.projection.resize(width, height);
            self.is_surface_configured = true;
        }

        self.world_renderer.recreate_depth_texture(&self.device, &self.surface_config);
    }

    fn handle_key(&mut self, code: KeyCode, is_pressed: bool) {
        if !is_pressed {
            self.camera_controller.handle_key(code, false);
            return;
        }

        if code == KeyCode::Escape {
            self.cursor_grabbed = !self.cursor_grabbed;
            Self::set_cursor_grabbed(&self.window, self.cursor_grabbed);
        } else if code == KeyCode::KeyG {
            self.player.toggle_gravity();
        } else if let Some(material) = EditBindings::material_for_key(code) {
            self.edit.select_material(material);
        } else {
            self.camera_controller.handle_key(code, true);
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, is_pressed: bool) {
        self.edit_bindings.handle_mouse_button(button, is_pressed);
    }

    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_position = (x as f32, y as f32);
    }

    fn handle_scroll(&mut self, lines: f32) {
        self.projection.zoom(lines);
    }

    fn handle_focus_lost(&mut self) {
        self.edit_bindings.release_all();
    }

    pub fn device_input(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.cursor_grabbed {
                self.camera_controller.handle_mouse(delta.0, delta.1, &mut self.camera);
            }
        }
    }

    /*
        Game Loop
    */
    fn update(&mut self) {
        // Calculate delta time
        let now = Instant::now();
        let dt = now.duration_since(self.last_render_time).as_secs_f32().min(0.1);
        self.last_render_time = now;

        if self.frame_stats.tick(dt) {
            self.window.set_title(&self.frame_stats.title(WINDOW_TITLE));
        }

        self.camera_controller.update_camera(&mut self.camera, dt);
        self.player.update(&mut self.camera.position, self.world.blocks(), dt);

        self.apply_edits();

        let view_projection = self.projection.get_view_projection_matrix(&self.camera);
        self.world_renderer.update_camera(&self.queue, view_projection);

        // Remesh if an edit touched the world
        self.world_renderer.update(&mut self.world, &self.device);
    }

    fn apply_edits(&mut self) {
        let viewport = (self.surface_config.width, self.surface_config.height);

        // A grabbed cursor aims through the crosshair.
        let cursor = if self.cursor_grabbed {
            (viewport.0 as f32 * 0.5, viewport.1 as f32 * 0.5)
        } else {
            self.cursor_position
        };

        let Some(ray) = cast_ray(
            cursor,
            viewport,
            self.projection.get_projection_matrix(),
            self.camera.get_view_matrix(),
            self.camera.position,
        ) else {
            return;
        };

        let now = self.start.elapsed().as_secs_f64();
        for action in self.edit_bindings.held_actions() {
            if let Some(outcome) = self.edit.apply(action, &mut self.world, &ray, now) {
                log::debug!("{:?}", outcome);
            }
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.window.request_redraw();

        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        self.world_renderer.render(&view, &mut encoder);

        self.overlay.render(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            &self.window,
            [self.surface_config.width, self.surface_config.height],
            OverlayInfo {
                camera: &self.camera,
                fovy: self.projection.fovy,
                gravity: self.player.gravity_enabled,
                placed_blocks: self.world.blocks().len(),
                selected: self.edit.selected_material(),
                stats: &self.frame_stats,
                crosshair: self.cursor_grabbed,
            },
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
