//! Composite behaviors.
//!
//! Both composites evaluate their children as a priority-ordered fallback
//! chain: the first child that acts ends the evaluation. [`Maneuver`] groups
//! unit-level tactics, [`MacroPlan`] groups economy-level actions; they differ
//! only in intent and in the name they report in diagnostics.

use tracing::trace;

use crate::{Behavior, Outcome};

/// Runs `children` in order until one acts.
///
/// This is analogous to a short-circuited logical OR (||) operation.
fn first_acted<C>(children: &[Box<dyn Behavior<C>>], ctx: &mut C) -> Outcome {
    for (idx, child) in children.iter().enumerate() {
        if child.execute(ctx).is_acted() {
            trace!(index = idx, behavior = child.name(), "fallback chain resolved");
            return Outcome::Acted;
        }
    }
    Outcome::Declined
}

/// Ordered fallback chain of tactical behaviors.
///
/// # Semantics
///
/// - Children run strictly in insertion order
/// - If a child returns `Acted`, the maneuver **stops immediately** and returns `Acted`
/// - If a child returns `Declined`, the maneuver **continues** to the next child
/// - An empty maneuver, or one where every child declines, returns `Declined`
pub struct Maneuver<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Maneuver<C> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Creates a maneuver from already boxed children, preserving their order.
    pub fn from_children(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }

    /// Appends a behavior with the lowest priority so far.
    pub fn add<B>(&mut self, behavior: B) -> &mut Self
    where
        B: Behavior<C> + 'static,
    {
        self.children.push(Box::new(behavior));
        self
    }

    /// Consuming variant of [`Maneuver::add`] for chained construction.
    pub fn with<B>(mut self, behavior: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        self.children.push(Box::new(behavior));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Default for Maneuver<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for Maneuver<C> {
    fn execute(&self, ctx: &mut C) -> Outcome {
        first_acted(&self.children, ctx)
    }

    fn name(&self) -> &'static str {
        "Maneuver"
    }
}

/// Ordered fallback chain of macro-level behaviors.
///
/// Same semantics as [`Maneuver`]: production, expansion, tech and upgrade
/// actions listed by priority, first one able to act wins.
pub struct MacroPlan<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> MacroPlan<C> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn from_children(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }

    pub fn add<B>(&mut self, behavior: B) -> &mut Self
    where
        B: Behavior<C> + 'static,
    {
        self.children.push(Box::new(behavior));
        self
    }

    pub fn with<B>(mut self, behavior: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        self.children.push(Box::new(behavior));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Default for MacroPlan<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for MacroPlan<C> {
    fn execute(&self, ctx: &mut C) -> Outcome {
        first_acted(&self.children, ctx)
    }

    fn name(&self) -> &'static str {
        "MacroPlan"
    }
}
