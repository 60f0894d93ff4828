//! Penguin Chase entry point
//!
//! On wasm32 the game mounts onto the page's `#arena` canvas. Natively it runs
//! a headless autopilot session as a smoke test.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;

    use penguin_chase::GameConfig;
    use penguin_chase::platform::{EventListeners, GameMount, mount};
    use web_sys::PageTransitionEvent;

    const CANVAS_ID: &str = "arena";

    thread_local! {
        /// The running game, if any
        static ACTIVE: RefCell<Option<GameMount>> = const { RefCell::new(None) };
        /// Page lifecycle hooks; live as long as the page
        static LIFECYCLE: RefCell<EventListeners> = RefCell::new(EventListeners::new());
    }

    async fn start_game() {
        let config = GameConfig::load();
        match mount(CANVAS_ID, config).await {
            Some(game) => {
                // Replace (and unmount) any game still around
                let previous = ACTIVE.with(|active| active.borrow_mut().replace(game));
                drop(previous);
            }
            None => log::warn!("Game not started"),
        }
    }

    fn stop_game() {
        let game = ACTIVE.with(|active| active.borrow_mut().take());
        if let Some(game) = game {
            log::info!("Stopping game with score {}", game.score());
        }
    }

    fn setup_lifecycle() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let target: &web_sys::EventTarget = window.as_ref();

        LIFECYCLE.with(|lifecycle| {
            let mut lifecycle = lifecycle.borrow_mut();
            lifecycle.add(target, "pagehide", true, |_event: PageTransitionEvent| {
                stop_game();
            });
            // Restored from the back/forward cache: start a fresh session
            lifecycle.add(target, "pageshow", true, |event: PageTransitionEvent| {
                if event.persisted() {
                    wasm_bindgen_futures::spawn_local(start_game());
                }
            });
        });
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Penguin Chase starting...");

        // Hide loading indicator
        if let Some(loading) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("loading"))
        {
            let _ = loading.set_attribute("class", "hidden");
        }

        setup_lifecycle();
        start_game().await;
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use penguin_chase::GameConfig;
    use penguin_chase::sim::{GameEvent, Session};

    env_logger::init();
    log::info!("Penguin Chase (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` to play");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from_path(std::path::Path::new(&path)),
        None => GameConfig::default(),
    };

    let mut session = Session::new(0xC0FFEE, config);
    session.handle_resize(1000.0, 800.0);
    session.start();
    session.set_autopilot(true);

    // One minute of 60 Hz frames
    let frame_ms = 1000.0 / 60.0;
    let mut caught = 0;
    for _ in 0..60 * 60 {
        for event in session.advance(frame_ms) {
            if let GameEvent::Collision { score, at } = event {
                caught += 1;
                log::info!("Pig caught at ({:.1}, {:.1}), score {}", at.x, at.y, score);
            }
        }
    }

    let score = session.state.score();
    session.teardown();
    println!("Autopilot caught the pig {} times (score {})", caught, score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
