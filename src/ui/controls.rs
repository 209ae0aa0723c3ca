//! On-screen touch controls
//!
//! Five buttons evaluated as one batch per touch event: rotate left, rotate
//! right, thrust, fire and pause. Rotation and pause act when a touch is
//! evaluated; thrust and fire act once per frame for as long as they are held.

use std::rc::Rc;

use glam::Vec2;

use crate::assets::{Atlas, Slice, names};
use crate::consts::{CONTROL_COUNT, RELEASED_TOUCH};
use crate::error::LoadError;
use crate::platform::Timer;
use crate::renderer::Canvas;
use crate::sim::{Entity, EntityKind, GameplayState, World};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
    Pause,
}

impl ControlKind {
    /// Evaluation order
    pub const ALL: [ControlKind; CONTROL_COUNT] = [
        ControlKind::RotateLeft,
        ControlKind::RotateRight,
        ControlKind::Thrust,
        ControlKind::Fire,
        ControlKind::Pause,
    ];

    /// (pressed, idle) slice names
    fn slice_names(self) -> (&'static str, &'static str) {
        match self {
            ControlKind::RotateLeft => (names::LEFT_PRESSED, names::LEFT_IDLE),
            ControlKind::RotateRight => (names::RIGHT_PRESSED, names::RIGHT_IDLE),
            ControlKind::Thrust => (names::THRUST_PRESSED, names::THRUST_IDLE),
            ControlKind::Fire => (names::FIRE_PRESSED, names::FIRE_IDLE),
            ControlKind::Pause => (names::PAUSE_PRESSED, names::PAUSE_IDLE),
        }
    }

    /// Anchor within a view of the given size
    fn anchor(self, extent: Vec2) -> Vec2 {
        match self {
            ControlKind::RotateLeft => Vec2::new(150.0, 100.0),
            ControlKind::RotateRight => Vec2::new(300.0, 100.0),
            ControlKind::Thrust => Vec2::new(extent.x - 400.0, 100.0),
            ControlKind::Fire => Vec2::new(extent.x - 250.0, 200.0),
            ControlKind::Pause => Vec2::new(extent.x - 250.0, extent.y - 50.0),
        }
    }
}

/// One button and its two looks
#[derive(Debug, Clone)]
pub struct Control {
    kind: ControlKind,
    entity: Entity,
    pressed: bool,
    pressed_slice: Rc<Slice>,
    idle_slice: Rc<Slice>,
}

impl Control {
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
        let slice = if pressed {
            &self.pressed_slice
        } else {
            &self.idle_slice
        };
        self.entity.set_slice(Rc::clone(slice));
    }
}

#[derive(Debug, Clone)]
pub struct ControlPanel {
    controls: Vec<Control>,
    rotation_speed: f32,
}

impl ControlPanel {
    pub fn new(atlas: &Atlas, tuning: &Tuning) -> Result<Self, LoadError> {
        let extent = tuning.extent();
        let mut controls = Vec::with_capacity(ControlKind::ALL.len());

        for kind in ControlKind::ALL {
            let (pressed, idle) = kind.slice_names();
            let pressed_slice = atlas.slice(pressed)?;
            let idle_slice = atlas.slice(idle)?;

            let mut entity = Entity::new(EntityKind::Control, Rc::clone(&idle_slice));
            entity.set_position(kind.anchor(extent));
            entity.set_scale(tuning.control_scale);
            entity.set_angle(0.0);

            controls.push(Control {
                kind,
                entity,
                pressed: false,
                pressed_slice,
                idle_slice,
            });
        }

        Ok(Self {
            controls,
            rotation_speed: tuning.rotation_speed,
        })
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn get(&self, kind: ControlKind) -> Option<&Control> {
        self.controls.iter().find(|c| c.kind == kind)
    }

    pub fn is_pressed(&self, kind: ControlKind) -> bool {
        self.get(kind).is_some_and(Control::is_pressed)
    }

    /// Evaluate every control against one touch location.
    ///
    /// The held rotate control evaluated last sets the ship's turn rate;
    /// with none held (or gameplay inactive) the ship stops turning. Pause
    /// toggles once per press, in both playing and paused states.
    pub fn evaluate(&mut self, touch: Vec2, gameplay: &mut GameplayState, world: &mut World) {
        let mut turn = None;

        for control in &mut self.controls {
            let held = control.entity.contains(touch);
            let was_held = control.pressed;
            control.set_pressed(held);

            match control.kind {
                ControlKind::RotateLeft if held => turn = Some(-self.rotation_speed),
                ControlKind::RotateRight if held => turn = Some(self.rotation_speed),
                ControlKind::Pause if held && !was_held => {
                    let next = gameplay.toggle_pause();
                    if next != *gameplay {
                        log::info!("Gameplay {:?} -> {:?}", gameplay, next);
                        *gameplay = next;
                    }
                }
                _ => {}
            }
        }

        let turn = if gameplay.is_active() { turn } else { None };
        world.ship_mut().set_angular_speed(turn.unwrap_or(0.0));
    }

    /// Lift the finger: every control releases together
    pub fn release(&mut self, gameplay: &mut GameplayState, world: &mut World) {
        let (x, y) = RELEASED_TOUCH;
        self.evaluate(Vec2::new(x, y), gameplay, world);
    }

    /// Per-frame effects of held thrust and fire
    pub fn apply_held(&self, gameplay: GameplayState, world: &mut World, timer: &mut dyn Timer) {
        if !gameplay.is_active() {
            return;
        }
        if self.is_pressed(ControlKind::Thrust) {
            world.thrust();
        }
        if self.is_pressed(ControlKind::Fire) {
            world.shoot(gameplay, timer);
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        for control in &self.controls {
            control.entity.render(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameClock;
    use crate::renderer::RecordingCanvas;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Rig {
        panel: ControlPanel,
        gameplay: GameplayState,
        world: World,
    }

    fn rig() -> Rig {
        let atlas = Atlas::builtin();
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut world = World::prepare(&atlas, &tuning, &mut rng).unwrap();
        world.ship_mut().set_impulse(0.0);
        Rig {
            panel: ControlPanel::new(&atlas, &tuning).unwrap(),
            gameplay: GameplayState::Playing,
            world,
        }
    }

    impl Rig {
        fn touch(&mut self, kind: ControlKind) {
            let at = self.panel.get(kind).unwrap().entity().position();
            self.panel.evaluate(at, &mut self.gameplay, &mut self.world);
        }

        fn release(&mut self) {
            self.panel.release(&mut self.gameplay, &mut self.world);
        }
    }

    #[test]
    fn test_layout() {
        let rig = rig();
        let pos = |k| rig.panel.get(k).unwrap().entity().position();
        assert_eq!(pos(ControlKind::RotateLeft), Vec2::new(150.0, 100.0));
        assert_eq!(pos(ControlKind::RotateRight), Vec2::new(300.0, 100.0));
        assert_eq!(pos(ControlKind::Thrust), Vec2::new(880.0, 100.0));
        assert_eq!(pos(ControlKind::Fire), Vec2::new(1030.0, 200.0));
        assert_eq!(pos(ControlKind::Pause), Vec2::new(1030.0, 670.0));
        for control in rig.panel.controls() {
            assert_eq!(control.entity().scale(), 1.5);
            assert!(!control.is_pressed());
        }
    }

    #[test]
    fn test_rotate_left_and_right() {
        let mut rig = rig();
        rig.touch(ControlKind::RotateLeft);
        assert_eq!(rig.world.ship().angular_speed(), -3.0);
        rig.touch(ControlKind::RotateRight);
        assert_eq!(rig.world.ship().angular_speed(), 3.0);
        rig.release();
        assert_eq!(rig.world.ship().angular_speed(), 0.0);
    }

    #[test]
    fn test_touching_elsewhere_stops_turning() {
        let mut rig = rig();
        rig.touch(ControlKind::RotateRight);
        rig.touch(ControlKind::Thrust);
        assert_eq!(rig.world.ship().angular_speed(), 0.0);
    }

    #[test]
    fn test_pressed_look_swaps() {
        let mut rig = rig();
        rig.touch(ControlKind::Fire);
        let fire = rig.panel.get(ControlKind::Fire).unwrap();
        assert!(fire.is_pressed());
        assert_eq!(fire.entity().slice().name, names::FIRE_PRESSED);
        let left = rig.panel.get(ControlKind::RotateLeft).unwrap();
        assert_eq!(left.entity().slice().name, names::LEFT_IDLE);

        rig.release();
        let fire = rig.panel.get(ControlKind::Fire).unwrap();
        assert!(!fire.is_pressed());
        assert_eq!(fire.entity().slice().name, names::FIRE_IDLE);
    }

    #[test]
    fn test_release_drops_everything() {
        let mut rig = rig();
        rig.touch(ControlKind::Thrust);
        rig.release();
        assert!(ControlKind::ALL.iter().all(|k| !rig.panel.is_pressed(*k)));
    }

    #[test]
    fn test_thrust_every_frame_while_held() {
        let mut rig = rig();
        let mut clock = FrameClock::new();
        rig.touch(ControlKind::Thrust);
        rig.panel.apply_held(rig.gameplay, &mut rig.world, &mut clock);
        rig.panel.apply_held(rig.gameplay, &mut rig.world, &mut clock);
        assert_eq!(rig.world.ship().impulse(), 80.0);

        rig.release();
        rig.panel.apply_held(rig.gameplay, &mut rig.world, &mut clock);
        assert_eq!(rig.world.ship().impulse(), 80.0);
    }

    #[test]
    fn test_fire_held_respects_cooldown() {
        let mut rig = rig();
        let mut clock = FrameClock::new();
        clock.advance(1.0);
        rig.touch(ControlKind::Fire);

        rig.panel.apply_held(rig.gameplay, &mut rig.world, &mut clock);
        clock.advance(0.1);
        rig.panel.apply_held(rig.gameplay, &mut rig.world, &mut clock);
        assert_eq!(rig.world.projectiles().visible_count(), 1);

        clock.advance(0.3);
        rig.panel.apply_held(rig.gameplay, &mut rig.world, &mut clock);
        assert_eq!(rig.world.projectiles().visible_count(), 2);
    }

    #[test]
    fn test_pause_toggles_once_per_press() {
        let mut rig = rig();
        rig.touch(ControlKind::Pause);
        assert_eq!(rig.gameplay, GameplayState::Paused);
        // Finger still on the button
        rig.touch(ControlKind::Pause);
        assert_eq!(rig.gameplay, GameplayState::Paused);

        rig.release();
        rig.touch(ControlKind::Pause);
        assert_eq!(rig.gameplay, GameplayState::Playing);
    }

    #[test]
    fn test_paused_controls_are_inert() {
        let mut rig = rig();
        let mut clock = FrameClock::new();
        clock.advance(1.0);
        rig.gameplay = GameplayState::Paused;

        rig.touch(ControlKind::RotateLeft);
        assert_eq!(rig.world.ship().angular_speed(), 0.0);
        assert!(rig.panel.is_pressed(ControlKind::RotateLeft));

        rig.touch(ControlKind::Thrust);
        rig.panel.apply_held(rig.gameplay, &mut rig.world, &mut clock);
        assert_eq!(rig.world.ship().impulse(), 0.0);

        rig.touch(ControlKind::Fire);
        rig.panel.apply_held(rig.gameplay, &mut rig.world, &mut clock);
        assert_eq!(rig.world.projectiles().visible_count(), 0);
    }

    #[test]
    fn test_pause_ignored_outside_play() {
        let mut rig = rig();
        rig.gameplay = GameplayState::NotStarted;
        rig.touch(ControlKind::Pause);
        assert_eq!(rig.gameplay, GameplayState::NotStarted);
    }

    #[test]
    fn test_render_draws_every_control() {
        let rig = rig();
        let mut canvas = RecordingCanvas::new();
        rig.panel.render(&mut canvas);
        assert_eq!(
            canvas.textured_fills(),
            vec![
                names::LEFT_IDLE,
                names::RIGHT_IDLE,
                names::THRUST_IDLE,
                names::FIRE_IDLE,
                names::PAUSE_IDLE
            ]
        );
    }
}
