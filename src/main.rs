use std::collections::HashSet;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{BUFFER_HEIGHT, BUFFER_WIDTH, TEST_LAYOUT};
use crate::grid::Grid;
use crate::renderer::{Intents, Renderer};
use crate::scaler::{ScaleMap, blit_nearest, build_scale_map};

mod caster;
mod config;
mod framebuffer;
mod grid;
mod math;
mod renderer;
mod scaler;
mod shade;

struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    renderer: Renderer,
    scale_map: ScaleMap,

    keys_down: HashSet<KeyCode>,

    frame_counter: u32,
    last_fps_log: Instant,
}

impl App {
    fn new(renderer: Renderer) -> Self {
        Self {
            window: None,
            surface: None,
            renderer,
            scale_map: ScaleMap::empty(),
            keys_down: HashSet::new(),
            frame_counter: 0,
            last_fps_log: Instant::now(),
        }
    }

    /// Snapshot the arrow keys into this frame's movement intents.
    fn sample_intents(&self) -> Intents {
        Intents {
            turn_left: self.keys_down.contains(&KeyCode::ArrowLeft),
            turn_right: self.keys_down.contains(&KeyCode::ArrowRight),
            move_forward: self.keys_down.contains(&KeyCode::ArrowUp),
            move_backward: self.keys_down.contains(&KeyCode::ArrowDown),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title("Gridcaster")
            .with_inner_size(LogicalSize::new(800.0, 800.0));

        let window = Rc::new(event_loop.create_window(attributes).expect("create window"));

        let context = softbuffer::Context::new(window.clone()).expect("softbuffer context");
        let surface =
            softbuffer::Surface::new(&context, window.clone()).expect("softbuffer surface");

        let size = window.inner_size();
        self.scale_map = build_scale_map(
            size.width as usize,
            size.height as usize,
            BUFFER_WIDTH,
            BUFFER_HEIGHT,
        );

        self.surface = Some(surface);
        self.window = Some(window);
        self.window.as_ref().unwrap().request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested; stopping");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                if let PhysicalKey::Code(code) = physical_key {
                    match state {
                        ElementState::Pressed => {
                            self.keys_down.insert(code);
                        }
                        ElementState::Released => {
                            self.keys_down.remove(&code);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let intents = self.sample_intents();
                self.renderer.apply_intents(intents);
                self.renderer.render_frame();

                let (window, surface) = match (&self.window, &mut self.surface) {
                    (Some(w), Some(s)) if w.id() == id => (w, s),
                    _ => return,
                };

                let size = window.inner_size();
                let (dw, dh) = (size.width as usize, size.height as usize);
                if dw == 0 || dh == 0 {
                    return; // Minimized window, skip drawing
                }

                surface
                    .resize(
                        NonZeroU32::new(dw as u32).unwrap(),
                        NonZeroU32::new(dh as u32).unwrap(),
                    )
                    .unwrap();

                let mut buf = surface.buffer_mut().expect("buffer_mut");
                let fb = self.renderer.framebuffer();
                blit_nearest(&mut buf, dw, fb.as_slice(), fb.width(), &self.scale_map);

                buf.present().unwrap();

                self.frame_counter += 1;
                let now = Instant::now();
                let elapsed = now.duration_since(self.last_fps_log).as_secs_f32();
                if elapsed >= 1.0 {
                    log::debug!("fps: {:.1}", self.frame_counter as f32 / elapsed);
                    self.frame_counter = 0;
                    self.last_fps_log = now;
                }

                self.window.as_ref().unwrap().request_redraw();
            }

            WindowEvent::Resized(new_size) => {
                self.scale_map = build_scale_map(
                    new_size.width as usize,
                    new_size.height as usize,
                    BUFFER_WIDTH,
                    BUFFER_HEIGHT,
                );
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let grid = Grid::new(TEST_LAYOUT).context("load test map")?;
    let renderer = Renderer::new(grid);

    let event_loop = EventLoop::new().context("create event loop")?;
    // Continuous redraws drive the frame loop; Poll keeps them coming even
    // with no OS events pending.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(renderer);
    event_loop
        .run_app(&mut app)
        .context("run event loop")?;
    Ok(())
}
