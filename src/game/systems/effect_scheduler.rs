//! Effect scheduler - one-shot visual effects that fire after a delay.
//!
//! Everything runs on the tick thread: effects are queued during a tick and
//! drained by the scene at the start of a later one.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::game::types::{FlashId, TargetId};

/// A deferred change to apply to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredEffect {
    /// Put out a muzzle flash.
    RemoveMuzzleFlash(FlashId),
    /// Return a hit target to full scale if `pulse` is still its latest.
    RestoreTargetScale { id: TargetId, pulse: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: f64,
    seq: u64,
    effect: DeferredEffect,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .total_cmp(&other.due)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-heap of effects keyed by due time, then insertion order.
#[derive(Debug, Default)]
pub struct EffectScheduler {
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl EffectScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `effect` to run `delay` seconds after `now`.
    pub fn schedule_after(&mut self, now: f64, delay: f32, effect: DeferredEffect) {
        let due = now + f64::from(delay.max(0.0));
        self.queue.push(Reverse(Scheduled {
            due,
            seq: self.next_seq,
            effect,
        }));
        self.next_seq += 1;
    }

    /// Remove and return every effect due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<DeferredEffect> {
        let mut due = Vec::new();
        while let Some(Reverse(next)) = self.queue.peek() {
            if next.due > now {
                break;
            }
            if let Some(Reverse(entry)) = self.queue.pop() {
                due.push(entry.effect);
            }
        }
        due
    }

    /// Due time of the next pending effect.
    pub fn next_due(&self) -> Option<f64> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
