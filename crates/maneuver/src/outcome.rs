//! Outcome returned by behaviors.

/// The result of executing a behavior for one frame.
///
/// There is no "running" state: a behavior that cannot act yet simply
/// declines and is evaluated again, with fresh inputs, next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The behavior issued at least one command.
    Acted,

    /// The behavior's preconditions did not hold; nothing was issued.
    Declined,
}

impl Outcome {
    /// Returns `true` if this outcome is `Acted`.
    #[inline]
    pub fn is_acted(self) -> bool {
        matches!(self, Outcome::Acted)
    }

    /// Returns `true` if this outcome is `Declined`.
    #[inline]
    pub fn is_declined(self) -> bool {
        matches!(self, Outcome::Declined)
    }

    /// `Acted` if either outcome acted.
    #[inline]
    pub fn or(self, other: Outcome) -> Self {
        if self.is_acted() || other.is_acted() {
            Outcome::Acted
        } else {
            Outcome::Declined
        }
    }

    /// Short-circuiting fallback: `next` runs only if this outcome declined.
    #[inline]
    pub fn or_else<F>(self, next: F) -> Self
    where
        F: FnOnce() -> Outcome,
    {
        match self {
            Outcome::Acted => Outcome::Acted,
            Outcome::Declined => next(),
        }
    }
}

impl From<bool> for Outcome {
    fn from(acted: bool) -> Self {
        if acted {
            Outcome::Acted
        } else {
            Outcome::Declined
        }
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> Self {
        outcome.is_acted()
    }
}
