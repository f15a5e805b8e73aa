//! Block Breaker entry point
//!
//! Browser builds draw on a canvas and run from `requestAnimationFrame`.
//! Native builds run a headless autopilot session and log the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use block_breaker::renderer::{Color, DrawSurface, Font, Rect, TextAlign};
    use block_breaker::{FrameScheduler, Game, GameConfig, HostError, Key, KeyEvent};

    /// Canvas 2D context as a drawing surface
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl DrawSurface for CanvasSurface {
        fn clear(&mut self, region: Rect) {
            self.ctx.clear_rect(
                region.origin.x as f64,
                region.origin.y as f64,
                region.size.x as f64,
                region.size.y as f64,
            );
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill_rect(
                rect.origin.x as f64,
                rect.origin.y as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ctx.begin_path();
            if self
                .ctx
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
                .is_ok()
            {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.fill();
            }
        }

        fn draw_text(&mut self, text: &str, pos: Vec2, font: Font, color: Color, align: TextAlign) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.set_font(&font.to_css());
            match align {
                TextAlign::Start => {
                    self.ctx.set_text_align("start");
                    self.ctx.set_text_baseline("alphabetic");
                }
                TextAlign::Center => {
                    self.ctx.set_text_align("center");
                    self.ctx.set_text_baseline("middle");
                }
            }
            if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                log::warn!("fill_text failed: {:?}", e);
            }
        }
    }

    /// Everything the animation-frame and keyboard closures share
    struct Host {
        game: Game,
        surface: CanvasSurface,
    }

    /// Schedules the next frame via `requestAnimationFrame`
    struct AnimationFrameScheduler {
        host: Rc<RefCell<Host>>,
    }

    impl FrameScheduler for AnimationFrameScheduler {
        fn request_next_frame(&mut self) {
            request_animation_frame(self.host.clone());
        }
    }

    pub fn run() -> Result<(), HostError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Block Breaker starting...");

        let window = web_sys::window()
            .ok_or_else(|| HostError::SchedulerUnavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| HostError::SurfaceUnavailable("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or_else(|| HostError::SurfaceUnavailable("no #game element".into()))?
            .dyn_into()
            .map_err(|_| HostError::SurfaceUnavailable("#game is not a canvas".into()))?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or_else(|| HostError::SurfaceUnavailable("2d context unavailable".into()))?
            .dyn_into()
            .map_err(|_| HostError::SurfaceUnavailable("unexpected context type".into()))?;

        let config =
            GameConfig::default().with_playfield(canvas.width() as f32, canvas.height() as f32);
        let game = Game::new(config)?;

        let host = Rc::new(RefCell::new(Host {
            game,
            surface: CanvasSurface { ctx },
        }));

        setup_input_handlers(&window, host.clone());

        // Start game loop
        request_animation_frame(host);

        log::info!("Block Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, host: Rc<RefCell<Host>>) {
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_dom_key(&event.key());
                host.borrow_mut().game.handle_key(KeyEvent::Pressed(key));
            });
            if let Err(e) = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to register keydown listener: {:?}", e);
            }
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_dom_key(&event.key());
                host.borrow_mut().game.handle_key(KeyEvent::Released(key));
            });
            if let Err(e) = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to register keyup listener: {:?}", e);
            }
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed; game loop stopped: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        let mut scheduler = AnimationFrameScheduler { host: host.clone() };
        let mut guard = host.borrow_mut();
        let Host { game, surface } = &mut *guard;
        game.frame(surface, &mut scheduler);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), block_breaker::HostError> {
    use block_breaker::renderer::RecordingSurface;
    use block_breaker::sim::TickOutcome;
    use block_breaker::{
        FrameScheduler, Game, GameConfig, InputState, Key, KeyEvent, autopilot_input,
    };

    /// Stops the headless loop after a fixed number of frames
    struct FrameBudget {
        remaining: u32,
    }

    impl FrameScheduler for FrameBudget {
        fn request_next_frame(&mut self) {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    /// Ten minutes at 60 frames per second
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Block Breaker (native) starting...");
    log::info!("Native mode runs headless on autopilot - build for wasm32 to play");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from_file(path)?,
        None => GameConfig::default(),
    };
    let mut game = Game::new(config)?;
    let mut surface = RecordingSurface::new();
    let mut budget = FrameBudget {
        remaining: MAX_FRAMES,
    };

    game.handle_key(KeyEvent::Pressed(Key::Other));
    game.handle_key(KeyEvent::Released(Key::Other));

    while budget.remaining > 0 {
        let steer = autopilot_input(&game.state);
        game.input = InputState {
            left: steer.left,
            right: steer.right,
        };
        match game.frame(&mut surface, &mut budget) {
            TickOutcome::Cleared | TickOutcome::GameOver => break,
            TickOutcome::Frozen(_) | TickOutcome::Running { .. } => {}
        }
    }

    log::info!(
        "Finished after {} frames: {:?}, score {}/{}",
        game.frames,
        game.phase(),
        game.state.score,
        game.state.block_count()
    );
    if let Ok(json) = serde_json::to_string(&game.state) {
        log::debug!("Final state: {}", json);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
