//! Depth Runner native harness
//!
//! The cart itself runs inside the console. Natively we drive the same
//! `Game` through a headless host with a scripted gamepad, which is handy for
//! checking tuning files and watching the log.

#[cfg(not(target_arch = "wasm32"))]
use depth_runner::{Buttons, Game, Tuning};

/// One minute at 60 fps
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u32 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Depth Runner (native) starting...");
    log::info!("Native mode runs a scripted headless demo - load the cart in the console to play");

    let tuning = match std::env::args().nth(1) {
        None => Tuning::default(),
        Some(path) => match read_tuning(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::error!("Could not load tuning from {path}: {e}");
                return std::process::ExitCode::FAILURE;
            }
        },
    };

    run_demo(tuning);
    std::process::ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The console enters through the exported `start`/`update`
}

#[cfg(not(target_arch = "wasm32"))]
fn read_tuning(path: &str) -> Result<Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(Tuning::from_json(&json)?)
}

/// Start, weave left and right with the odd jump, pause once
#[cfg(not(target_arch = "wasm32"))]
fn demo_input(frame: u32) -> Buttons {
    match frame {
        0 => Buttons::BUTTON_1,
        600 => Buttons::BUTTON_2,
        660 => Buttons::BUTTON_1,
        _ => {
            let mut buttons = match frame % 240 {
                0..=59 => Buttons::LEFT,
                120..=179 => Buttons::RIGHT,
                _ => Buttons::empty(),
            };
            if frame % 90 == 45 {
                buttons |= Buttons::UP;
            }
            buttons
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(tuning: Tuning) {
    use depth_runner::platform::Headless;

    let mut game = Game::on_start(tuning);
    let mut host = Headless::new();
    let mut collisions = 0u32;
    let mut spawned = 0u32;
    let mut best_score = 0u32;

    for frame in 0..DEMO_FRAMES {
        host.clear_calls();
        host.set_gamepad(demo_input(frame));
        let events = game.on_update(&mut host);

        if events.hit.is_some() {
            collisions += 1;
        }
        if events.spawned.is_some() {
            spawned += 1;
        }
        best_score = best_score.max(game.world.score.value);
    }

    log::info!(
        "Demo finished after {} frames: {} obstacles spawned, {} collisions, best score {}",
        game.frame(),
        spawned,
        collisions,
        best_score
    );
    log::info!("Last frame issued {} draw calls", host.calls().len());

    match serde_json::to_string(&game.world) {
        Ok(json) => log::debug!("Final world: {json}"),
        Err(e) => log::warn!("Could not serialize world: {e}"),
    }
}
