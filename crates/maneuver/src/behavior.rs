//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the fundamental abstraction for
//! every atomic action and composite. The trait is generic over a context type
//! `C` through which behaviors read the frame and issue commands.

use crate::Outcome;

/// A decision unit that can be executed against a context.
///
/// Implementations are immutable value objects: all parameters are fixed at
/// construction, and the only side effects of [`Behavior::execute`] are the
/// commands issued through `ctx` on the `Acted` path.
pub trait Behavior<C>: Send + Sync {
    /// Execute this behavior against the given context.
    ///
    /// # Returns
    ///
    /// - `Outcome::Acted` if at least one command was issued
    /// - `Outcome::Declined` if preconditions did not hold
    fn execute(&self, ctx: &mut C) -> Outcome;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn execute(&self, ctx: &mut C) -> Outcome {
        (**self).execute(ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
