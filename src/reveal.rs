//! Staggered scroll reveal
//!
//! The browser reports visibility changes in batches. Every target that is
//! intersecting gets revealed after `index × stagger` ms, where `index` is its
//! position in that batch. Reveal is one-way: nothing here ever hides a target.

use crate::settings::RevealSettings;

/// Something that can be revealed once
pub trait RevealTarget {
    fn is_revealed(&self) -> bool;
    /// Switch to the revealed state (must be idempotent)
    fn reveal(&self);
}

/// One visibility-change notification
#[derive(Debug, Clone)]
pub struct Notice<T> {
    pub target: T,
    pub intersecting: bool,
}

/// A reveal to perform after `delay_ms`
#[derive(Debug, Clone)]
pub struct Reveal<T> {
    pub target: T,
    pub delay_ms: u32,
}

impl<T: RevealTarget> Reveal<T> {
    /// Apply the reveal (called once the delay has elapsed)
    pub fn fire(&self) {
        if !self.target.is_revealed() {
            self.target.reveal();
        }
    }
}

/// Turns notification batches into timed reveals
#[derive(Debug, Clone)]
pub struct RevealQueue {
    stagger_ms: u32,
}

impl RevealQueue {
    pub fn new(settings: &RevealSettings) -> Self {
        Self {
            stagger_ms: settings.stagger_ms,
        }
    }

    /// Plan the reveals for one batch.
    ///
    /// Non-intersecting entries still take up an index, so the stagger follows
    /// batch order, not the number of reveals.
    pub fn plan<T: RevealTarget>(
        &self,
        batch: impl IntoIterator<Item = Notice<T>>,
    ) -> Vec<Reveal<T>> {
        batch
            .into_iter()
            .enumerate()
            .filter(|(_, notice)| notice.intersecting && !notice.target.is_revealed())
            .map(|(index, notice)| Reveal {
                target: notice.target,
                delay_ms: (index as u32).saturating_mul(self.stagger_ms),
            })
            .collect()
    }
}

impl Default for RevealQueue {
    fn default() -> Self {
        Self::new(&RevealSettings::default())
    }
}
