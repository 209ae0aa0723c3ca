//! Fixed-capacity entity pools
//!
//! Slots are created once per round and recycled by toggling visibility;
//! nothing is allocated or freed while playing.

use std::rc::Rc;

use super::entity::{Entity, EntityKind};
use crate::assets::Slice;

#[derive(Debug, Clone, Default)]
pub struct EntityPool {
    slots: Vec<Entity>,
}

impl EntityPool {
    /// `capacity` hidden entities sharing one slice
    pub fn hidden(kind: EntityKind, slice: &Rc<Slice>, capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| {
                let mut entity = Entity::new(kind, Rc::clone(slice));
                entity.hide();
                entity
            })
            .collect();
        Self { slots }
    }

    pub fn from_entities(slots: Vec<Entity>) -> Self {
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|e| e.is_visible()).count()
    }

    /// Oldest hidden slot in pool order
    pub fn first_hidden_mut(&mut self) -> Option<&mut Entity> {
        self.slots.iter_mut().find(|e| !e.is_visible())
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entity> {
        self.slots.iter_mut()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter().filter(|e| e.is_visible())
    }
}

impl<'a> IntoIterator for &'a EntityPool {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut EntityPool {
    type Item = &'a mut Entity;
    type IntoIter = std::slice::IterMut<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
