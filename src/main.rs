//! Canvas Pong entry point
//!
//! On the web: paints into the `#pong` canvas on a fixed interval timer.
//! On native: runs a headless game against a scripted player.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use canvas_pong::input::PointerTarget;
    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::{Session, Settings};

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Write back so the key exists for hand editing
        let settings = Settings::load();
        settings.save();

        let mut surface = CanvasSurface::new(canvas.clone(), ctx);
        let mut session = Session::for_surface(&surface, settings);

        setup_input_handlers(&canvas, session.pointer());

        // Start game loop
        let interval = session.settings.tick_interval_ms();
        let closure = Closure::<dyn FnMut()>::new(move || {
            session.frame(&mut surface);
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval,
        ) {
            log::error!("Failed to start frame timer: {:?}", e);
            return;
        }
        closure.forget();

        log::info!("Canvas Pong running ({} ms per tick)", interval);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, pointer: PointerTarget) {
        // Mouse move - pointer y relative to the canvas top edge
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            pointer.set(event.client_y() as f32 - rect.top() as f32);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use canvas_pong::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use canvas_pong::input::Autopilot;
    use canvas_pong::renderer::MeshSurface;
    use canvas_pong::{Session, Settings, Theme};

    /// Simulated display refresh for the headless loop
    const DISPLAY_DT: f32 = 1.0 / 60.0;

    #[derive(Parser)]
    #[command(name = "canvas-pong", about = "Headless Canvas Pong against a scripted player")]
    struct Cli {
        /// Display frames to run (60 per simulated second)
        #[arg(long, default_value_t = 3000)]
        frames: u32,

        /// Seed for the scripted player
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Settings JSON file
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Color theme override (classic, high-contrast)
        #[arg(long)]
        theme: Option<String>,
    }

    pub fn run() {
        env_logger::init();
        let cli = Cli::parse();

        log::info!("Canvas Pong (native) starting...");

        let mut settings = cli
            .settings
            .as_deref()
            .map(Settings::load_from)
            .unwrap_or_default();
        if let Some(name) = &cli.theme {
            match Theme::from_str(name) {
                Some(theme) => settings.theme = theme,
                None => log::warn!(
                    "Unknown theme '{}', keeping {}",
                    name,
                    settings.theme.as_str()
                ),
            }
        }

        let mut surface = MeshSurface::new(FIELD_WIDTH, FIELD_HEIGHT);
        let mut session = Session::for_surface(&surface, settings);
        let pointer = session.pointer();
        let mut pilot = Autopilot::new(cli.seed, session.state.user.center_y());

        let mut ticks: u64 = 0;
        for _ in 0..cli.frames {
            pointer.set(pilot.aim(&session.state));
            ticks += session.advance(&mut surface, DISPLAY_DT) as u64;
        }

        log::info!(
            "Finished {} ticks: user {} - computer {}",
            ticks,
            session.state.user.score,
            session.state.com.score
        );
        log::info!(
            "Last frame: {} vertices ({} bytes), {} text runs",
            surface.vertices.len(),
            surface.vertex_bytes().len(),
            surface.text.len()
        );

        match serde_json::to_string_pretty(&session.state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize final state: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}
