use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::Window;
use crate::config::EditorConfig;
use crate::State;

// Pixels of touchpad scroll per wheel line.
const PIXELS_PER_LINE: f32 = 20.0;

pub struct App {
    pub state: Option<State>,
    config: EditorConfig,
}

impl App {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: None,
            config,
        }
    }
}

impl ApplicationHandler<State> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Voxel Editor")
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(State::new(window, self.config.clone())) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                log::error!("Unable to initialize renderer: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: State) {
        self.state = Some(event);
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent
    ) {
        if let Some(state) = self.state.as_mut() {
            state.device_input(&event);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        // Let the overlay see everything, but only a released cursor can
        // hand input over to it.
        let consumed = state.overlay.handle_window_event(&state.window, &event);
        let overlay_owns_input = consumed && !state.cursor_grabbed;

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::Focused(false) => state.handle_focus_lost(),
            WindowEvent::RedrawRequested => {
                state.update();
                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: key_state,
                    repeat: false,
                    ..
                },
                ..
            } => state.handle_key(code, key_state.is_pressed()),
            WindowEvent::CursorMoved { position, .. } => {
                state.handle_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } if !overlay_owns_input => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
                };
                state.handle_scroll(lines);
            }
            WindowEvent::MouseInput {
                button,
                state: mouse_state,
                ..
            } => {
                // Releases always go through so a button never sticks.
                if !overlay_owns_input || !mouse_state.is_pressed() {
                    state.handle_mouse_button(button, mouse_state.is_pressed());
                }
            }
            _ => {}
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let config = EditorConfig::default();
    log::info!("Starting with {:?}", config);

    let event_loop = EventLoop::with_user_event().build()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
