//! Builder utilities for ergonomic composition.
//!
//! Instead of writing `Box::new(Maneuver::from_children(vec![...]))` you can
//! use `maneuver(vec![...])` and `boxed(behavior)`.

use crate::{Behavior, MacroPlan, Maneuver};

/// Boxes a behavior for use in a children list.
#[inline]
pub fn boxed<C, B>(behavior: B) -> Box<dyn Behavior<C>>
where
    B: Behavior<C> + 'static,
{
    Box::new(behavior)
}

/// Creates a boxed maneuver from ordered children.
///
/// Shorthand for `Box::new(Maneuver::from_children(children))`.
#[inline]
pub fn maneuver<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Maneuver::from_children(children))
}

/// Creates a boxed macro plan from ordered children.
///
/// Shorthand for `Box::new(MacroPlan::from_children(children))`.
#[inline]
pub fn macro_plan<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(MacroPlan::from_children(children))
}
