//! Paddle Control entry point
//!
//! Headless run: loads the config, sequences the paddle assets, then replays
//! a seeded input script through the controller and reports the final pose.
//!
//! Usage: `paddle-control [config.json] [seed]`

use std::process::ExitCode;

use paddle_control::assets::{AssetPipeline, AssetStage, FsAssetSource};
use paddle_control::control::SurfaceOrigin;
use paddle_control::demo::PointerScript;
use paddle_control::scene::SceneLayout;
use paddle_control::sink::{LogSink, TransformSink, UniformSink};
use paddle_control::{ControlConfig, PaddleController};

/// Gestures replayed by the demo script
const DEMO_GESTURES: usize = 40;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Paddle Control (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match ControlConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid config {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => ControlConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345u64);

    let mut controller = match PaddleController::new(&config) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("Cannot start paddle control: {e}");
            return ExitCode::FAILURE;
        }
    };

    let layout = SceneLayout::new(controller.bounds().config());
    log::info!(
        "Table {}x{}, camera at {}, paddle spawn {}",
        layout.table.size.x,
        layout.table.size.z,
        layout.camera.eye,
        layout.paddle_spawn
    );

    // Without a paddle entity the controller still runs, it just has nowhere to apply
    let mut pipeline = AssetPipeline::new(config.assets.clone());
    match pipeline.run(&mut FsAssetSource::new()) {
        AssetStage::Ready(asset) => {
            log::info!("Paddle mesh {:?} ready", asset.mesh);
            controller.attach_sink(Box::new(LogSink::default()));
        }
        AssetStage::Failed { stage, reason } => {
            log::warn!("Paddle {stage:?} unavailable ({reason}); running headless");
        }
        other => log::warn!("Asset pipeline stopped at {other:?}"),
    }

    let events = PointerScript::new(seed, config.bounds.game_width, config.bounds.game_height)
        .generate(DEMO_GESTURES);
    log::info!("Replaying {} events (seed {seed})", events.len());

    let origin = SurfaceOrigin::default();
    for event in events {
        controller.handle_event(event, origin);
        controller.on_tick();
    }

    let transform = controller.transform();
    let mut uniform = UniformSink::new(layout.paddle_scale);
    uniform.apply(&transform);
    let bytes = uniform.take_dirty_bytes().map_or(0, <[u8]>::len);

    println!("position:    {}", transform.position);
    println!("orientation: {}", transform.orientation);
    println!("pitch:       {:.3} rad", controller.state().pitch);
    println!("mode:        {:?}", controller.state().mode);
    println!("uniform:     {bytes} bytes");

    ExitCode::SUCCESS
}
