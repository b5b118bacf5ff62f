//! Cat Cannon entry point
//!
//! The native build has no window: it plays a scripted headless session,
//! recording draw calls and saving the best score to disk.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::f32::consts::PI;

    use cat_cannon::audio::LogAudio;
    use cat_cannon::persistence::JsonFileStore;
    use cat_cannon::platform::{FrameClock, init_logging};
    use cat_cannon::renderer::CommandBuffer;
    use cat_cannon::{Session, Settings};

    /// Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const RUN_SECONDS: u32 = 60;

    init_logging();
    log::info!("Cat Cannon (native, headless) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "cat-cannon-settings.json".to_string());
    let settings = Settings::load(&settings_path);
    let store = JsonFileStore::open(&settings.store_path);

    let mut session = Session::new(&settings, LogAudio, store);
    let mut surface = CommandBuffer::new();
    let mut clock = FrameClock::new(0.0, settings.max_frame_dt);

    session.start();
    for frame in 1..=(RUN_SECONDS * 60) {
        let now = frame as f64 * FRAME_MS;

        // Scripted player: fire around 30° up, dive whenever high in the air
        let world = session.world();
        let fire = !world.launched && world.cannon.aim <= -PI / 6.0;
        let dive = world.launched && world.land_available() && world.cat.pos.y < 0.0;
        if fire {
            session.launch_cat();
        } else if dive {
            session.land();
        }

        session.update(clock.delta(now));
        session.render(&mut surface);

        if frame % 300 == 0 {
            let hud = session.hud();
            log::info!(
                "t={}s score={} best={} obstacles={} sprites={}",
                frame / 60,
                hud.score,
                hud.best_score,
                session.world().obstacles.len(),
                surface.calls.len()
            );
        }
    }
    session.stop();

    log::info!(
        "Finished: best score {} saved to {}",
        session.hud().best_score,
        session.store().path().display()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser entry point is `cat_cannon::web::wasm_main`
}
