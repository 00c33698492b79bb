use crate::physics::math::Vector;
use std::collections::VecDeque;

pub const DEFAULT_ORBIT_HISTORY_CAPACITY: usize = 1000;

/// Bounded record of a body's recent positions, oldest first
///
/// Once `capacity` positions are stored, each new position evicts the oldest.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitHistory {
    points: VecDeque<Vector>,
    capacity: usize,
}

impl Default for OrbitHistory {
    fn default() -> Self {
        Self::new(DEFAULT_ORBIT_HISTORY_CAPACITY)
    }
}

impl OrbitHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, position: Vector) {
        if self.capacity == 0 {
            return;
        }

        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }

        self.points.push_back(position);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the bound, dropping the oldest points if the history is now too long
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.points.len() > capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn oldest(&self) -> Option<Vector> {
        self.points.front().copied()
    }

    pub fn newest(&self) -> Option<Vector> {
        self.points.back().copied()
    }

    /// Iterates from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vector> + ExactSizeIterator {
        self.points.iter()
    }

    /// Contiguous copy of the trail, oldest to newest, for line-strip rendering
    pub fn to_vec(&self) -> Vec<Vector> {
        self.points.iter().copied().collect()
    }
}
