//! Scene orchestration
//!
//! [`GameScene`] owns everything a round needs (world, control panel, shot
//! timer) and is driven by the host through the [`Scene`] callbacks: one
//! `update` and one `render` per frame, plus touch events in between.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::assets::Atlas;
use crate::error::LoadError;
use crate::platform::{FrameClock, Timer, TouchEvent, TouchPhase};
use crate::renderer::{Canvas, Color};
use crate::sim::{GameplayState, Outcome, SceneState, World};
use crate::tuning::Tuning;
use crate::ui::ControlPanel;

/// Host-facing lifecycle
pub trait Scene {
    /// Virtual resolution the scene draws in
    fn view_size(&self) -> (u32, u32);

    /// Reset to the loading state. Returns false if the scene is unusable.
    fn initialize(&mut self) -> bool;

    /// App went to the background
    fn suspend(&mut self);

    /// App came to the foreground
    fn resume(&mut self);

    fn handle(&mut self, event: &TouchEvent);

    fn update(&mut self, dt: f32);

    fn render(&mut self, canvas: &mut dyn Canvas);
}

/// Everything rebuilt on each restart
#[derive(Debug, Clone)]
struct Round {
    world: World,
    panel: ControlPanel,
}

pub struct GameScene<T: Timer = FrameClock> {
    tuning: Tuning,
    atlas: Atlas,
    state: SceneState,
    gameplay: GameplayState,
    suspended: bool,
    timer: T,
    rng: Pcg32,
    round: Option<Round>,
    load_error: Option<LoadError>,
}

impl GameScene<FrameClock> {
    /// Scene timed by frame deltas
    pub fn new(atlas: Atlas, tuning: Tuning) -> Self {
        Self::with_timer(atlas, tuning, FrameClock::new())
    }
}

impl<T: Timer> GameScene<T> {
    pub fn with_timer(atlas: Atlas, tuning: Tuning, timer: T) -> Self {
        let seed = tuning.seed.unwrap_or_else(rand::random);
        log::info!("Scene seed: {seed}");
        let mut scene = Self {
            tuning,
            atlas,
            state: SceneState::Loading,
            gameplay: GameplayState::NotStarted,
            suspended: true,
            timer,
            rng: Pcg32::seed_from_u64(seed),
            round: None,
            load_error: None,
        };
        scene.initialize();
        scene
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn gameplay(&self) -> GameplayState {
        self.gameplay
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Why preparation failed, once the scene is in the error state
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    pub fn world(&self) -> Option<&World> {
        self.round.as_ref().map(|r| &r.world)
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        self.round.as_mut().map(|r| &mut r.world)
    }

    pub fn controls(&self) -> Option<&ControlPanel> {
        self.round.as_ref().map(|r| &r.panel)
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Build a fresh round and enter the running state
    fn prepare(&mut self) -> Result<(), LoadError> {
        let world = World::prepare(&self.atlas, &self.tuning, &mut self.rng)?;
        let panel = ControlPanel::new(&self.atlas, &self.tuning)?;
        self.round = Some(Round { world, panel });
        self.timer.reset();
        self.state = SceneState::Running;
        Ok(())
    }

    /// One-time preparation after `initialize`
    fn load(&mut self) {
        match self.prepare() {
            Ok(()) => {
                self.gameplay = if self.tuning.auto_start {
                    GameplayState::Playing
                } else {
                    GameplayState::NotStarted
                };
                log::info!("Scene running ({:?})", self.gameplay);
            }
            Err(e) => self.fail(e),
        }
    }

    fn start_playing(&mut self) {
        match self.prepare() {
            Ok(()) => {
                self.gameplay = GameplayState::Playing;
                log::info!("Round started");
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: LoadError) {
        log::error!("Scene preparation failed: {error}");
        self.state = SceneState::Error;
        self.round = None;
        self.load_error = Some(error);
    }

    fn run_simulation(&mut self, dt: f32) {
        if !self.gameplay.is_active() {
            return;
        }
        let Some(round) = self.round.as_mut() else {
            return;
        };

        self.timer.advance(dt);
        round
            .panel
            .apply_held(self.gameplay, &mut round.world, &mut self.timer);

        if let Some(outcome) = round.world.step(dt) {
            self.gameplay = self.gameplay.finish(outcome);
            log::info!("Round over: {outcome:?}");
        }
    }

    fn render_scene(&self, canvas: &mut dyn Canvas) {
        let extent = self.tuning.extent();
        let background = match self.gameplay {
            GameplayState::Ended(Outcome::Lose) => Color::DEFEAT,
            GameplayState::Ended(Outcome::Win) => Color::VICTORY,
            _ => Color::BLACK,
        };
        canvas.set_color(background);
        canvas.fill_rectangle(Vec2::ZERO, extent, None);

        if matches!(self.gameplay, GameplayState::Ended(_)) {
            return;
        }
        let Some(round) = self.round.as_ref() else {
            return;
        };

        round.world.ship().render(canvas);
        round.panel.render(canvas);
        for rock in round.world.obstacles() {
            rock.render(canvas);
        }
        for shot in round.world.projectiles() {
            shot.render(canvas);
        }
    }
}

impl<T: Timer> Scene for GameScene<T> {
    fn view_size(&self) -> (u32, u32) {
        (self.tuning.view_width, self.tuning.view_height)
    }

    fn initialize(&mut self) -> bool {
        self.suspended = true;
        if self.state == SceneState::Error {
            return false;
        }
        self.state = SceneState::Loading;
        self.gameplay = GameplayState::NotStarted;
        self.round = None;
        true
    }

    fn suspend(&mut self) {
        self.suspended = true;
    }

    fn resume(&mut self) {
        self.suspended = false;
    }

    fn handle(&mut self, event: &TouchEvent) {
        if self.suspended || self.state != SceneState::Running {
            return;
        }

        if self.gameplay.awaits_restart() {
            if event.phase == TouchPhase::Started {
                self.start_playing();
            }
            return;
        }

        let Some(round) = self.round.as_mut() else {
            return;
        };
        match event.phase {
            TouchPhase::Started | TouchPhase::Moved => {
                round
                    .panel
                    .evaluate(event.position, &mut self.gameplay, &mut round.world);
            }
            TouchPhase::Ended => round.panel.release(&mut self.gameplay, &mut round.world),
        }
    }

    fn update(&mut self, dt: f32) {
        if self.suspended {
            return;
        }
        match self.state {
            SceneState::Loading => self.load(),
            SceneState::Running => self.run_simulation(dt),
            SceneState::Error => {}
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        if self.suspended {
            return;
        }
        canvas.clear();
        match self.state {
            SceneState::Loading => canvas.reset_transform(),
            SceneState::Running => self.render_scene(canvas),
            SceneState::Error => {}
        }
    }
}
