//! Transitively closed memo of pairwise ordering decisions.
//!
//! Every fact recorded during one sorting pass is immediately closed over everything already
//! known, so a later query can never observe both `a < b` and `b < a`.

use rustc_hash::FxBuildHasher;
use sirenia_graph::{NodeId, PortId};
use std::cmp::Ordering;
use std::hash::Hash;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Arena handle usable as a [`RelationCache`] key.
pub trait Handle: Copy + Eq + Hash {
    fn index(self) -> usize;
}

impl Handle for NodeId {
    fn index(self) -> usize {
        NodeId::index(self)
    }
}

impl Handle for PortId {
    fn index(self) -> usize {
        PortId::index(self)
    }
}

#[derive(Debug, Clone)]
struct Relations<K> {
    /// Handles known to sort after this one.
    above: HashSet<K>,
    /// Handles known to sort before this one.
    below: HashSet<K>,
}

impl<K> Default for Relations<K> {
    fn default() -> Self {
        Self {
            above: HashSet::default(),
            below: HashSet::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelationCache<K: Handle> {
    slots: Vec<Relations<K>>,
}

impl<K: Handle> Default for RelationCache<K> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<K: Handle> RelationCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordering of `a` relative to `b`, if it is already known.
    pub fn query(&self, a: K, b: K) -> Option<Ordering> {
        let slot = self.slots.get(a.index())?;
        if slot.below.contains(&b) {
            Some(Ordering::Greater)
        } else if slot.above.contains(&b) {
            Some(Ordering::Less)
        } else {
            None
        }
    }

    /// Records that `greater` sorts after `smaller`, together with every consequence of that
    /// fact: everything at or below `smaller` now sorts before everything at or above `greater`.
    pub fn record(&mut self, greater: K, smaller: K) {
        debug_assert!(greater != smaller, "a handle cannot sort after itself");
        debug_assert_ne!(
            self.query(greater, smaller),
            Some(Ordering::Less),
            "contradicting an already recorded ordering"
        );

        let mut lows: Vec<K> = vec![smaller];
        let mut highs: Vec<K> = vec![greater];
        if let Some(slot) = self.slots.get(smaller.index()) {
            lows.extend(slot.below.iter().copied());
        }
        if let Some(slot) = self.slots.get(greater.index()) {
            highs.extend(slot.above.iter().copied());
        }

        for &high in &highs {
            self.slot_mut(high).below.extend(lows.iter().copied());
        }
        for &low in &lows {
            self.slot_mut(low).above.extend(highs.iter().copied());
        }
    }

    /// Records `ordering` as the relation of `a` to `b`. `Equal` records nothing.
    pub fn record_ordering(&mut self, a: K, b: K, ordering: Ordering) {
        match ordering {
            Ordering::Greater => self.record(a, b),
            Ordering::Less => self.record(b, a),
            Ordering::Equal => {}
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// `true` if no fact has been recorded since construction or the last [`clear`](Self::clear).
    pub fn is_empty(&self) -> bool {
        self.slots
            .iter()
            .all(|s| s.above.is_empty() && s.below.is_empty())
    }

    fn slot_mut(&mut self, k: K) -> &mut Relations<K> {
        let ix = k.index();
        if ix >= self.slots.len() {
            self.slots.resize_with(ix + 1, Relations::default);
        }
        &mut self.slots[ix]
    }
}
