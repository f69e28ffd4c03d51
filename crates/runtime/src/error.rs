//! Error types surfaced by the runtime API.
//!
//! Behaviors never return errors: a behavior that cannot act declines. These
//! errors cover wiring mistakes and failures that must reach the host.
use thiserror::Error;

use game_content::BuildParseError;
use maneuver::ExecutionError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{name} service must be configured before building")]
    MissingService { name: &'static str },

    #[error("opening `{0}` is not in the opening book")]
    UnknownOpening(String),

    #[error(transparent)]
    BuildOrder(#[from] BuildParseError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}
