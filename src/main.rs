//! Spike Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use spike_hop::Settings;
    use spike_hop::renderer::{RenderState, RendererError};
    use spike_hop::sim::{self, GameState};

    /// Key code for space, the only key the game reacts to
    const KEY_CODE_JUMP: u32 = 32;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        settings: Settings,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        last_fps_log: f64,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            Self {
                state: GameState::new(),
                render_state: None,
                settings,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_fps_log: 0.0,
            }
        }

        /// Advance the simulation and refresh the FPS estimate
        fn update(&mut self, dt: f32, time: f64) {
            sim::update(&mut self.state, dt);

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            if self.settings.show_fps && time - self.last_fps_log >= 1000.0 {
                self.last_fps_log = time;
                log::debug!("fps: {}", self.fps);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state, &self.settings) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Create a render state on the given backend set.
    async fn try_backend(
        backends: wgpu::Backends,
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState, RendererError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height).await
    }

    /// WebGPU first, WebGL on failure.
    async fn create_render_state(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState, RendererError> {
        match try_backend(wgpu::Backends::BROWSER_WEBGPU, canvas, width, height).await {
            Ok(render_state) => Ok(render_state),
            Err(err) => {
                log::warn!("WebGPU not available ({err}), trying WebGL...");
                try_backend(wgpu::Backends::GL, canvas, width, height).await
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Spike Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(settings)));

        // Graphics context with fallback; on total failure the loop still
        // runs the simulation and render stays a no-op.
        match create_render_state(&canvas, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(err) => log::error!("No usable graphics context: {err}"),
        }

        setup_input_handler(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Spike Hop running!");
    }

    fn setup_input_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.key_code() != KEY_CODE_JUMP {
                return;
            }
            event.prevent_default();
            if game.borrow_mut().state.player.jump() {
                log::debug!("jump");
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // First frame has no previous timestamp; run a zero-length update
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use spike_hop::sim::{self, GameState};

    env_logger::init();
    log::info!("Spike Hop (native) starting...");
    log::info!("Headless simulation smoke run; the browser build is the playable target");

    let mut state = GameState::new();
    let dt = 1.0 / 60.0;
    for frame in 0..600 {
        // Hop every couple of seconds like a cautious player would
        if frame % 120 == 110 {
            state.player.jump();
        }
        sim::update(&mut state, dt);
    }

    log::info!(
        "Simulated 10s: {} live spikes, {} collisions, player at y={:.2}",
        state.spikes.len(),
        state.collisions,
        state.player.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
