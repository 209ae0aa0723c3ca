//! Asteroid Drift headless driver
//!
//! Runs the scene for a few seconds of game time with a scripted touch
//! sequence, drawing into a recording canvas, and logs how the round went.
//! Pass a tuning JSON file as the first argument to override the defaults.

use asteroid_drift::platform::{TouchEvent, TouchPhase};
use asteroid_drift::renderer::RecordingCanvas;
use asteroid_drift::ui::ControlKind;
use asteroid_drift::{Atlas, GameScene, Scene, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;

/// Which control to hold during a frame window
const SCRIPT: &[(u32, u32, ControlKind)] = &[
    (30, 60, ControlKind::RotateLeft),
    (60, 180, ControlKind::Fire),
    (180, 220, ControlKind::Thrust),
    (220, 300, ControlKind::RotateRight),
    (300, 480, ControlKind::Fire),
];

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    match Tuning::from_file(&path) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::warn!("Could not load tuning from {path}: {e}; using defaults");
            Tuning::default()
        }
    }
}

fn held_at(frame: u32) -> Option<ControlKind> {
    SCRIPT
        .iter()
        .find(|(start, end, _)| (*start..*end).contains(&frame))
        .map(|(_, _, kind)| *kind)
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Asteroid Drift (headless) starting...");

    let mut scene = GameScene::new(Atlas::builtin(), load_tuning());
    scene.resume();

    let mut canvas = RecordingCanvas::new();
    let mut holding: Option<ControlKind> = None;

    for frame in 0..FRAMES {
        let wanted = held_at(frame);
        if wanted != holding {
            let event = match wanted.and_then(|kind| {
                scene
                    .controls()
                    .and_then(|panel| panel.get(kind))
                    .map(|c| c.entity().position())
            }) {
                Some(at) => TouchEvent::started(at.x, at.y),
                None => TouchEvent::ended(0.0, 0.0),
            };
            log::debug!("Frame {frame}: {:?} {:?}", event.phase, wanted);
            scene.handle(&event);
            holding = if event.phase == TouchPhase::Ended { None } else { wanted };
        }

        scene.update(FRAME_DT);
        scene.render(&mut canvas);
        canvas.take();
    }

    match scene.world() {
        Some(world) => log::info!(
            "After {FRAMES} frames: scene {:?}, gameplay {:?}, {} obstacles left, {} shots in flight",
            scene.state(),
            scene.gameplay(),
            world.alive_obstacles(),
            world.projectiles().visible_count()
        ),
        None => log::error!(
            "Scene never ran: {}",
            scene
                .load_error()
                .map(ToString::to_string)
                .unwrap_or_else(|| "unknown".to_string())
        ),
    }
}
