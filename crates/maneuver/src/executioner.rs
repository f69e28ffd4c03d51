//! Per-frame behavior runner.
//!
//! The agent registers its top-level maneuvers and plans while it inspects the
//! frame, then calls [`BehaviorExecutioner::execute`] once. Each item runs
//! exactly once in registration order, independently of the others, and the
//! queue is always empty afterwards.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

use crate::{Behavior, BehaviorFailure, ExecutionError, Outcome};

/// Summary of one executed frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub executed: usize,
    pub acted: usize,
    pub failures: Vec<BehaviorFailure>,
}

impl FrameReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts recorded failures into an error, keeping the report otherwise.
    pub fn into_result(mut self) -> Result<Self, ExecutionError> {
        match ExecutionError::from_failures(std::mem::take(&mut self.failures)) {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// Transient queue of behaviors registered during the current frame.
pub struct BehaviorExecutioner<C> {
    queue: Vec<Box<dyn Behavior<C>>>,
    isolate_failures: bool,
}

impl<C> BehaviorExecutioner<C> {
    /// Executioner that isolates panicking items.
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            isolate_failures: true,
        }
    }

    /// When disabled, the first panicking item is re-raised after the queue
    /// has been cleared. Remaining items of that frame do not run.
    pub fn with_isolation(mut self, isolate_failures: bool) -> Self {
        self.isolate_failures = isolate_failures;
        self
    }

    pub fn register<B>(&mut self, behavior: B)
    where
        B: Behavior<C> + 'static,
    {
        self.queue.push(Box::new(behavior));
    }

    pub fn register_boxed(&mut self, behavior: Box<dyn Behavior<C>>) {
        self.queue.push(behavior);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Runs every registered item once, in registration order, then discards them.
    pub fn execute(&mut self, ctx: &mut C) -> FrameReport {
        let queue = std::mem::take(&mut self.queue);
        let mut report = FrameReport {
            executed: queue.len(),
            ..FrameReport::default()
        };

        for (index, behavior) in queue.iter().enumerate() {
            let result = run_isolated(index, behavior.name(), self.isolate_failures, || {
                behavior.execute(ctx)
            });
            match result {
                Ok(Outcome::Acted) => report.acted += 1,
                Ok(Outcome::Declined) => {}
                Err(failure) => report.failures.push(failure),
            }
        }

        debug!(
            executed = report.executed,
            acted = report.acted,
            failed = report.failures.len(),
            "frame behaviors executed"
        );
        report
    }
}

impl<C> Default for BehaviorExecutioner<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `work` on behalf of the item at `index`, turning a panic into a
/// [`BehaviorFailure`].
///
/// With `isolate` off the panic propagates unchanged.
pub fn run_isolated<R>(
    index: usize,
    behavior: &'static str,
    isolate: bool,
    work: impl FnOnce() -> R,
) -> Result<R, BehaviorFailure> {
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(value) => Ok(value),
        Err(payload) if !isolate => panic::resume_unwind(payload),
        Err(payload) => {
            let failure = BehaviorFailure {
                index,
                behavior,
                message: panic_message(payload.as_ref()),
            };
            error!(
                index = failure.index,
                behavior = failure.behavior,
                message = %failure.message,
                "behavior panicked; continuing with remaining items"
            );
            Err(failure)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContext {
        runs: Vec<u32>,
    }

    struct Record {
        id: u32,
        outcome: Outcome,
    }

    impl Behavior<TestContext> for Record {
        fn execute(&self, ctx: &mut TestContext) -> Outcome {
            ctx.runs.push(self.id);
            self.outcome
        }
    }

    struct Explode;

    impl Behavior<TestContext> for Explode {
        fn execute(&self, _ctx: &mut TestContext) -> Outcome {
            panic!("invalid command kind");
        }

        fn name(&self) -> &'static str {
            "Explode"
        }
    }

    #[test]
    fn queue_is_drained_regardless_of_outcomes() {
        for count in [0u32, 1, 5, 40] {
            let mut executioner = BehaviorExecutioner::new();
            for id in 0..count {
                let outcome = if id % 2 == 0 {
                    Outcome::Acted
                } else {
                    Outcome::Declined
                };
                executioner.register(Record { id, outcome });
            }

            let mut ctx = TestContext::default();
            let report = executioner.execute(&mut ctx);

            assert!(executioner.is_empty());
            assert_eq!(report.executed, count as usize);
            assert_eq!(report.acted, count.div_ceil(2) as usize);
            assert_eq!(ctx.runs, (0..count).collect::<Vec<_>>());
        }
    }

    #[test]
    fn items_run_independently_of_earlier_outcomes() {
        let mut executioner = BehaviorExecutioner::new();
        executioner.register(Record {
            id: 1,
            outcome: Outcome::Acted,
        });
        executioner.register(Record {
            id: 2,
            outcome: Outcome::Acted,
        });

        let mut ctx = TestContext::default();
        executioner.execute(&mut ctx);
        assert_eq!(ctx.runs, vec![1, 2]);
    }

    #[test]
    fn panicking_item_is_isolated_and_reported() {
        let mut executioner = BehaviorExecutioner::new();
        executioner.register(Record {
            id: 1,
            outcome: Outcome::Declined,
        });
        executioner.register(Explode);
        executioner.register(Record {
            id: 3,
            outcome: Outcome::Acted,
        });

        let mut ctx = TestContext::default();
        let report = executioner.execute(&mut ctx);

        assert!(executioner.is_empty());
        assert_eq!(ctx.runs, vec![1, 3]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.failures[0].behavior, "Explode");
        assert_eq!(report.failures[0].message, "invalid command kind");

        let err = report.into_result().expect_err("failure must surface");
        assert_eq!(err.failures().len(), 1);
    }

    #[test]
    fn run_isolated_reports_panics_as_failures() {
        let ok = run_isolated(0, "Record", true, || 7);
        assert_eq!(ok, Ok(7));

        let failure = run_isolated(4, "Opening", true, || -> u32 { panic!("no producer") })
            .expect_err("panic becomes a failure");
        assert_eq!(failure.index, 4);
        assert_eq!(failure.behavior, "Opening");
        assert_eq!(failure.message, "no producer");
    }

    #[test]
    fn disabled_isolation_still_clears_queue() {
        let mut executioner = BehaviorExecutioner::new().with_isolation(false);
        executioner.register(Explode);
        executioner.register(Record {
            id: 2,
            outcome: Outcome::Acted,
        });

        let mut ctx = TestContext::default();
        let result = panic::catch_unwind(AssertUnwindSafe(|| executioner.execute(&mut ctx)));

        assert!(result.is_err());
        assert!(executioner.is_empty());
        assert!(ctx.runs.is_empty());
    }
}
