use crate::animation::{ParticleAnimation, ParticleVisual};
use crate::config::{AnimationConfig, FieldConfig};
use crate::grid::grid_points;
use glam::Vec2;
use std::collections::HashMap;
use std::hash::Hash;

/// One particle whose visual changed during [`ParticleField::update_all`].
#[derive(Debug, Clone, Copy)]
pub struct ParticleUpdate<K> {
    pub index: usize,
    pub handle: Option<K>,
    pub position: Vec2,
    pub visual: ParticleVisual,
}

/// Owns every particle of the grid and maps renderable handles to them.
///
/// `K` is whatever the renderer uses to identify the object a pick ray hit.
/// The mapping is a plain lookup table, renderables never own their particle.
#[derive(Debug, Clone)]
pub struct ParticleField<K> {
    particles: Vec<ParticleAnimation>,
    handles: Vec<Option<K>>,
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash> ParticleField<K> {
    pub fn new(positions: impl IntoIterator<Item = Vec2>, config: AnimationConfig) -> Self {
        let particles: Vec<_> = positions
            .into_iter()
            .map(|position| ParticleAnimation::new(position, config))
            .collect();
        let handles = vec![None; particles.len()];
        Self {
            particles,
            handles,
            index: HashMap::new(),
        }
    }

    /// One dormant particle per grid cell.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(grid_points(&config.grid), config.animation)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[ParticleAnimation] {
        &self.particles
    }

    pub fn get(&self, index: usize) -> Option<&ParticleAnimation> {
        self.particles.get(index)
    }

    /// Associates a renderable with the particle at `index`, replacing any
    /// handle it had before. Returns false if there is no such particle.
    pub fn bind(&mut self, handle: K, index: usize) -> bool {
        let Some(slot) = self.handles.get_mut(index) else {
            return false;
        };
        if let Some(old) = slot.replace(handle) {
            self.index.remove(&old);
        }
        if let Some(previous) = self.index.insert(handle, index) {
            if previous != index {
                self.handles[previous] = None;
            }
        }
        true
    }

    pub fn index_of(&self, handle: &K) -> Option<usize> {
        self.index.get(handle).copied()
    }

    pub fn handle_of(&self, index: usize) -> Option<K> {
        self.handles.get(index).copied().flatten()
    }

    /// Awakens the particle owning the nearest hit. `hits` must be ordered
    /// nearest first; handles that belong to no particle are skipped.
    /// Returns the index of the particle that was woken, if one was.
    pub fn awake_first_hit(&mut self, hits: impl IntoIterator<Item = K>, time: f64) -> Option<usize> {
        let index = hits
            .into_iter()
            .find_map(|handle| self.index.get(&handle).copied())?;
        self.particles[index].awake(time).then_some(index)
    }

    /// Advances every particle to `time`, reporting each one whose visual changed.
    pub fn update_all(&mut self, time: f64, mut on_change: impl FnMut(ParticleUpdate<K>)) {
        let entries = self.particles.iter_mut().zip(&self.handles).enumerate();
        for (index, (particle, handle)) in entries {
            if particle.update(time) {
                on_change(ParticleUpdate {
                    index,
                    handle: *handle,
                    position: particle.position(),
                    visual: particle.visual(),
                });
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_active()).count()
    }

    pub fn set_animation_config(&mut self, config: AnimationConfig) {
        for particle in &mut self.particles {
            particle.set_config(config);
        }
    }
}
