//! Random construction context.
//!
//! Every randomized construction call tree threads one [`RandomContext`]
//! by `&mut`. It owns the rng and the override stack, so two curves built
//! on different threads never observe each other's overrides.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::overrides::{GlobalParameter, IntRange, OverrideStack};
use crate::rng::DeterministicRng;

/// Rng plus the overrides active for the current construction.
#[derive(Debug, Clone)]
pub struct RandomContext {
    rng: DeterministicRng,
    overrides: OverrideStack,
}

impl RandomContext {
    /// Creates a context with a fresh rng seeded from `seed`.
    pub fn new(seed: u32) -> Self {
        Self::from_rng(DeterministicRng::new(seed))
    }

    pub fn from_rng(rng: DeterministicRng) -> Self {
        Self {
            rng,
            overrides: OverrideStack::new(),
        }
    }

    pub fn rng(&mut self) -> &mut DeterministicRng {
        &mut self.rng
    }

    pub fn overrides(&self) -> &OverrideStack {
        &self.overrides
    }

    /// Activates `value` for `param` until the returned guard is dropped.
    ///
    /// The guard dereferences to this context, so nested construction runs
    /// through it. Dropping it (normal exit, `?` early return or unwinding)
    /// restores the previous override.
    pub fn with_override(&mut self, param: &GlobalParameter, value: IntRange) -> ScopeGuard<'_> {
        trace!(slot = param.name(), ?value, "push override");
        self.overrides.push(param.name(), value);
        ScopeGuard {
            ctx: self,
            name: param.name(),
        }
    }

    /// Runs `body` with `value` active for `param`.
    pub fn scoped<R>(
        &mut self,
        param: &GlobalParameter,
        value: IntRange,
        body: impl FnOnce(&mut RandomContext) -> R,
    ) -> R {
        let mut guard = self.with_override(param, value);
        body(&mut guard)
    }
}

/// Keeps one override active; pops it on drop.
pub struct ScopeGuard<'a> {
    ctx: &'a mut RandomContext,
    name: &'static str,
}

impl Deref for ScopeGuard<'_> {
    type Target = RandomContext;

    fn deref(&self) -> &RandomContext {
        self.ctx
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut RandomContext {
        self.ctx
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        trace!(slot = self.name, "pop override");
        self.ctx.overrides.pop(self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    const FREQ: GlobalParameter = GlobalParameter::new("freq");
    const ANY: IntRange = IntRange::new(1, 7, 1);
    const ODD: IntRange = IntRange::new(1, 7, 2);
    const EVEN: IntRange = IntRange::new(2, 7, 2);

    #[test]
    fn test_guard_restores_on_drop() {
        let mut ctx = RandomContext::new(1);
        {
            let guard = ctx.with_override(&FREQ, ODD);
            assert_eq!(FREQ.get(&guard, ANY), ODD);
        }
        assert_eq!(FREQ.get(&ctx, ANY), ANY);
        assert!(ctx.overrides().is_empty());
    }

    #[test]
    fn test_nested_scopes_restore_outer() {
        let mut ctx = RandomContext::new(1);
        let mut outer = ctx.with_override(&FREQ, ODD);
        {
            let inner = outer.with_override(&FREQ, EVEN);
            assert_eq!(FREQ.get(&inner, ANY), EVEN);
        }
        assert_eq!(FREQ.get(&outer, ANY), ODD);
        drop(outer);
        assert_eq!(ctx.overrides().depth(), 0);
    }

    #[test]
    fn test_scoped_restores_after_early_error() {
        let mut ctx = RandomContext::new(1);
        let result: Result<(), String> = ctx.scoped(&FREQ, EVEN, |inner| {
            assert_eq!(FREQ.get(inner, ANY), EVEN);
            let bail: Result<(), String> = Err("bail".to_string());
            bail?;
            Ok(())
        });
        assert!(result.is_err());
        assert!(ctx.overrides().is_empty());
    }

    #[test]
    fn test_scoped_restores_after_panic() {
        let mut ctx = RandomContext::new(1);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            ctx.scoped(&FREQ, ODD, |_| panic!("boom"));
        }));
        assert!(outcome.is_err());
        assert!(ctx.overrides().is_empty());
    }

    #[test]
    fn test_sampling_reads_active_override() {
        let mut ctx = RandomContext::new(5);
        let drawn: Vec<i64> = ctx.scoped(&FREQ, EVEN, |inner| {
            (0..50)
                .map(|_| {
                    let domain = FREQ.get(inner, ANY);
                    domain.sample(inner.rng())
                })
                .collect()
        });
        assert!(drawn.iter().all(|f| EVEN.contains(*f)));
    }
}
