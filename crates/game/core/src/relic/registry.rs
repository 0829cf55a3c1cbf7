//! Relic hook trait and the registry the engine queries at trigger points.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use super::{RelicContext, RelicError, RelicRequests, RelicTrigger};

/// Externally defined relic behavior.
///
/// Hooks are read-only configuration: `on_trigger` takes `&self` and may only
/// record requests on the context. Hooks run in priority order (lower values
/// first), ties broken by the player's relic order.
pub trait RelicHook: Send + Sync {
    fn id(&self) -> &str;

    /// Display name. Defaults to the id.
    fn name(&self) -> &str {
        self.id()
    }

    fn priority(&self) -> i32 {
        0
    }

    /// Whether this hook wants to see `trigger` at all.
    fn responds_to(&self, trigger: RelicTrigger) -> bool;

    fn on_trigger(&self, ctx: &mut RelicContext) -> Result<(), RelicError>;
}

/// Maps relic ids to their hooks.
#[derive(Clone, Default)]
pub struct RelicRegistry {
    hooks: HashMap<String, Arc<dyn RelicHook>>,
}

impl core::fmt::Debug for RelicRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut ids: Vec<_> = self.hooks.keys().collect();
        ids.sort_unstable();
        f.debug_struct("RelicRegistry").field("hooks", &ids).finish()
    }
}

impl RelicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook under its own id, replacing any previous one.
    pub fn register(&mut self, hook: Arc<dyn RelicHook>) {
        self.hooks.insert(hook.id().to_string(), hook);
    }

    pub fn with(mut self, hook: Arc<dyn RelicHook>) -> Self {
        self.register(hook);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn RelicHook>> {
        self.hooks.get(id)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Runs every owned hook that responds to the context's trigger and sums
    /// their requests.
    ///
    /// A hook that returns an error or panics is isolated: its requests are
    /// discarded and the remaining hooks still run.
    pub fn collect(
        &self,
        owned: &[String],
        make_context: impl Fn() -> RelicContext,
    ) -> RelicRequests {
        let probe = make_context();
        let trigger = probe.trigger();

        let mut hooks: Vec<&Arc<dyn RelicHook>> = owned
            .iter()
            .filter_map(|id| {
                let hook = self.hooks.get(id);
                if hook.is_none() {
                    tracing::debug!(
                        target: "combat::relics",
                        relic = %id,
                        "owned relic has no registered hook"
                    );
                }
                hook
            })
            .filter(|hook| hook.responds_to(trigger))
            .collect();
        hooks.sort_by_key(|hook| hook.priority());

        let mut total = RelicRequests::default();
        for hook in hooks {
            let mut ctx = make_context();
            let result = catch_unwind(AssertUnwindSafe(|| hook.on_trigger(&mut ctx)));
            match result {
                Ok(Ok(())) => {
                    tracing::debug!(
                        target: "combat::relics",
                        relic = hook.id(),
                        trigger = %trigger,
                        "relic hook fired"
                    );
                    total.merge(ctx.into_requests());
                }
                Ok(Err(error)) => {
                    tracing::error!(
                        target: "combat::relics",
                        relic = hook.id(),
                        trigger = %trigger,
                        %error,
                        "relic hook failed; requests discarded"
                    );
                }
                Err(_) => {
                    tracing::error!(
                        target: "combat::relics",
                        relic = hook.id(),
                        trigger = %trigger,
                        "relic hook panicked; requests discarded"
                    );
                }
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        id: &'static str,
        block: u32,
    }

    impl RelicHook for Fixed {
        fn id(&self) -> &str {
            self.id
        }

        fn responds_to(&self, trigger: RelicTrigger) -> bool {
            trigger == RelicTrigger::OnCombatStart
        }

        fn on_trigger(&self, ctx: &mut RelicContext) -> Result<(), RelicError> {
            ctx.gain_block(self.block);
            Ok(())
        }
    }

    struct Faulty;

    impl RelicHook for Faulty {
        fn id(&self) -> &str {
            "faulty"
        }

        fn responds_to(&self, _trigger: RelicTrigger) -> bool {
            true
        }

        fn on_trigger(&self, ctx: &mut RelicContext) -> Result<(), RelicError> {
            ctx.gain_block(100);
            Err(RelicError::Failed("broken".to_string()))
        }
    }

    struct Panicky;

    impl RelicHook for Panicky {
        fn id(&self) -> &str {
            "panicky"
        }

        fn responds_to(&self, _trigger: RelicTrigger) -> bool {
            true
        }

        fn on_trigger(&self, ctx: &mut RelicContext) -> Result<(), RelicError> {
            ctx.gain_energy(5);
            panic!("hook bug");
        }
    }

    fn registry() -> RelicRegistry {
        RelicRegistry::new()
            .with(Arc::new(Fixed { id: "a", block: 4 }))
            .with(Arc::new(Fixed { id: "b", block: 6 }))
            .with(Arc::new(Faulty))
            .with(Arc::new(Panicky))
    }

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn start() -> RelicContext {
        RelicContext::new(RelicTrigger::OnCombatStart, 1, 80, 80, 0)
    }

    #[test]
    fn requests_are_summed() {
        let total = registry().collect(&owned(&["a", "b"]), start);
        assert_eq!(total.block, 10);
    }

    #[test]
    fn failing_hooks_are_isolated() {
        let total = registry().collect(&owned(&["faulty", "a", "panicky", "b"]), start);
        assert_eq!(total.block, 10);
        assert_eq!(total.energy, 0);
    }

    #[test]
    fn unowned_and_unregistered_relics_are_ignored() {
        let total = registry().collect(&owned(&["missing"]), start);
        assert!(total.is_empty());
        let turn_start = || RelicContext::new(RelicTrigger::OnTurnStart, 2, 80, 80, 0);
        assert!(registry().collect(&owned(&["a"]), turn_start).is_empty());
    }
}
