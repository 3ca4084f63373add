//! Named sampling-domain overrides.
//!
//! A [`GlobalParameter`] names a sampling domain (for example the integer
//! frequency range of a wave). An enclosing random construction can narrow
//! that domain for everything sampled inside its scope by pushing a value
//! on the [`OverrideStack`] of the active
//! [`RandomContext`](crate::context::RandomContext). Nested scopes shadow
//! outer ones; leaving a scope restores whatever was active before.

use serde::{Deserialize, Serialize};

use crate::context::RandomContext;
use crate::rng::DeterministicRng;

/// Half-open stepped integer range `start, start + step, ... < stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntRange {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl IntRange {
    pub const fn new(start: i64, stop: i64, step: i64) -> Self {
        Self { start, stop, step }
    }

    /// Whether `value` is one of the values this range can produce.
    pub fn contains(&self, value: i64) -> bool {
        self.step > 0
            && value >= self.start
            && value < self.stop
            && (value - self.start) % self.step == 0
    }

    /// All members in ascending order.
    pub fn values(&self) -> Vec<i64> {
        if self.step <= 0 {
            return Vec::new();
        }
        (self.start..self.stop).step_by(self.step as usize).collect()
    }

    /// Draws one member uniformly.
    pub fn sample(&self, rng: &mut DeterministicRng) -> i64 {
        rng.randrange(self.start, self.stop, self.step)
    }
}

/// A named slot whose domain can be overridden for a dynamic scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalParameter {
    name: &'static str,
}

impl GlobalParameter {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the innermost active override, else `fallback`.
    pub fn get(&self, ctx: &RandomContext, fallback: IntRange) -> IntRange {
        ctx.overrides().current(self.name).unwrap_or(fallback)
    }
}

/// Stack of active overrides, innermost last.
#[derive(Debug, Clone, Default)]
pub struct OverrideStack {
    frames: Vec<(&'static str, IntRange)>,
}

impl OverrideStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost override for `name`, if any.
    pub fn current(&self, name: &str) -> Option<IntRange> {
        self.frames
            .iter()
            .rev()
            .find(|(frame, _)| *frame == name)
            .map(|(_, value)| *value)
    }

    /// Number of active scopes.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: IntRange) {
        self.frames.push((name, value));
    }

    /// Closes the innermost scope.
    ///
    /// # Panics
    /// Panics when the stack is empty or the innermost scope belongs to a
    /// different slot; both mean scopes were not closed in nesting order.
    pub(crate) fn pop(&mut self, name: &'static str) {
        match self.frames.pop() {
            Some((top, _)) if top == name => {}
            Some((top, _)) => panic!(
                "override scope mismatch: closing '{}' but innermost scope is '{}'",
                name, top
            ),
            None => panic!("override stack underflow while closing '{}'", name),
        }
    }
}
