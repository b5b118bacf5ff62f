//! Game session
//!
//! Owns the single `World` and the capabilities injected by the host (audio
//! sink, scalar store). The host drives two per-frame callbacks, `update`
//! and `render`, and forwards input through `launch_cat`, `land` and
//! `press_action`. Input is latched and applied at the start of the next
//! `update`.

use crate::audio::{AudioManager, AudioSink};
use crate::best_score;
use crate::persistence::ScalarStore;
use crate::renderer::{DrawSurface, render_world};
use crate::settings::Settings;
use crate::sim::{GameEvent, TickInput, World, tick};

/// What the HUD shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub best_score: u64,
    /// Seconds left before an idle restart, once the warning shows
    pub idle_countdown: Option<u32>,
    /// Rounded seconds of land cooldown, while it runs
    pub land_cooldown: Option<u32>,
    pub land_available: bool,
}

pub struct Session<A, S> {
    world: World,
    input: TickInput,
    audio: AudioManager<A>,
    store: S,
}

impl<A: AudioSink, S: ScalarStore> Session<A, S> {
    pub fn new(settings: &Settings, audio_sink: A, store: S) -> Self {
        let best = best_score::load(&store);
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Session created with seed: {}", seed);

        let world = World::new(settings.viewport(), best, seed).with_prune(settings.prune_config());

        let mut audio = AudioManager::new(audio_sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);

        Self {
            world,
            input: TickInput::default(),
            audio,
            store,
        }
    }

    pub fn start(&mut self) {
        self.world.start();
        self.audio.start_music();
        self.dispatch_events();
    }

    pub fn stop(&mut self) {
        self.world.stop();
        self.dispatch_events();
    }

    pub fn restart(&mut self) {
        self.world.restart();
        self.dispatch_events();
    }

    pub fn is_running(&self) -> bool {
        self.world.is_running()
    }

    /// Fire the cannon (click/tap on the play field)
    pub fn launch_cat(&mut self) {
        self.input.launch = true;
    }

    /// Landing dive (land button)
    pub fn land(&mut self) {
        self.input.land = true;
    }

    /// Space/Enter: land once launched, otherwise launch
    pub fn press_action(&mut self) {
        if self.world.launched || self.input.launch {
            self.land();
        } else {
            self.launch_cat();
        }
    }

    /// Update callback; a no-op while stopped. Input latched while stopped
    /// is dropped.
    pub fn update(&mut self, dt: f32) {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.world, &input, dt);
        self.dispatch_events();
    }

    /// Render callback
    pub fn render<D: DrawSurface + ?Sized>(&self, surface: &mut D) {
        render_world(&self.world, surface);
    }

    pub fn hud(&self) -> Hud {
        let cooldown = self.world.land_cooldown;
        Hud {
            score: self.world.score,
            best_score: self.world.best_score,
            idle_countdown: self.world.idle_countdown(),
            land_cooldown: (cooldown > 0.0).then(|| cooldown.round() as u32),
            land_available: self.world.land_available(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Carry out the side effects the world queued
    fn dispatch_events(&mut self) {
        for event in self.world.drain_events() {
            match event {
                GameEvent::Sound(effect) => self.audio.play(effect),
                GameEvent::BestScore(score) => best_score::save(&mut self.store, score),
                GameEvent::Restarted => log::info!("Idle restart"),
            }
        }
    }
}
