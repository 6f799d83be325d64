use crate::config::AnimationConfig;
use crate::tools::lerp;
use glam::Vec2;
use std::f64::consts::TAU;

/// Snapshot of everything a particle's animation drives on its renderable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleVisual {
    /// Rotation about the particle's spin axis, in radians
    pub rotation: f32,
    /// Used as both hue and saturation, 0..1
    pub hue_saturation: f32,
    pub lightness: f32,
    /// Out-of-plane displacement
    pub offset: f32,
}

impl ParticleVisual {
    pub fn resting(config: &AnimationConfig) -> Self {
        Self {
            rotation: 0.0,
            hue_saturation: 0.0,
            lightness: config.min_lightness,
            offset: 0.0,
        }
    }
}

/// Visual state `elapsed` seconds after a particle was awakened.
///
/// The spin interpolates up to `2π·period`, so a full animation makes
/// `period` complete turns.
pub fn visual_at(elapsed: f64, config: &AnimationConfig) -> ParticleVisual {
    let period = config.period;
    let half = period / 2.0;
    let min_l = config.min_lightness as f64;
    let max_l = config.max_lightness as f64;

    let rotation = lerp(0.0, TAU * period, elapsed / period);

    let (hue_saturation, lightness) = if elapsed < half {
        let p = elapsed / half;
        (lerp(0.0, 1.0, p), lerp(min_l, max_l, p))
    } else {
        let p = elapsed / half - 1.0;
        (lerp(1.0, 0.0, p), lerp(max_l, min_l, p))
    };

    ParticleVisual {
        rotation: rotation as f32,
        hue_saturation: hue_saturation as f32,
        lightness: lightness as f32,
        offset: hue_saturation as f32 * config.max_offset,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Dormant,
    Active,
}

/// Timed hover animation of a single grid particle.
#[derive(Debug, Clone)]
pub struct ParticleAnimation {
    position: Vec2,
    awaken_time: Option<f64>,
    visual: ParticleVisual,
    config: AnimationConfig,
}

impl ParticleAnimation {
    pub fn new(position: Vec2, config: AnimationConfig) -> Self {
        Self {
            position,
            awaken_time: None,
            visual: ParticleVisual::resting(&config),
            config,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn awaken_time(&self) -> Option<f64> {
        self.awaken_time
    }

    pub fn visual(&self) -> ParticleVisual {
        self.visual
    }

    pub fn state(&self) -> AnimationState {
        if self.awaken_time.is_some() {
            AnimationState::Active
        } else {
            AnimationState::Dormant
        }
    }

    pub fn is_active(&self) -> bool {
        self.awaken_time.is_some()
    }

    /// Applies from the next `update`, including to a running animation.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    /// Starts the animation at `time`. Does nothing while already running,
    /// so an animation always plays a full period from its first trigger.
    /// Returns whether the particle was woken by this call.
    pub fn awake(&mut self, time: f64) -> bool {
        if self.awaken_time.is_some() {
            return false;
        }
        self.awaken_time = Some(time);
        true
    }

    /// Advances the animation to `time`. Returns whether the visual changed.
    ///
    /// Once a full period has elapsed the particle goes dormant again; that
    /// last frame is rendered at exactly `period`, which puts it back in its
    /// resting color and position.
    pub fn update(&mut self, time: f64) -> bool {
        let Some(awaken_time) = self.awaken_time else {
            return false;
        };

        let mut elapsed = time - awaken_time;
        if elapsed >= self.config.period {
            self.awaken_time = None;
            elapsed = self.config.period;
        }

        self.visual = visual_at(elapsed, &self.config);
        true
    }
}
