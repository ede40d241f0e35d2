//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WashboardError`] via `#[from]` or an explicit boxing helper. Nothing in
//! this taxonomy is fatal to the process: not-found and capability errors are
//! surfaced as user feedback, persistence errors fall back to seed data.

/// Top-level error enum shared by every crate in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum WashboardError {
    /// A domain invariant failed at construction time.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A targeted operation named a hall or machine that does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The notification collaborator is unavailable or was denied.
    #[error("notification capability unavailable")]
    Capability(#[from] CapabilityError),

    /// The persistence collaborator failed; callers fall back to seed data.
    #[error("persistence unavailable")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl WashboardError {
    /// Wrap an arbitrary storage-layer error as a persistence failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Box::new(err))
    }
}

/// Construction-time invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A hall or machine was built with an empty display name.
    #[error("name must not be empty")]
    EmptyName,
    /// A hall or machine was built with an empty identifier.
    #[error("id must not be empty")]
    EmptyId,
    /// A configuration value did not match any known variant.
    #[error("unknown value for {field}: {value}")]
    UnknownValue {
        /// Which setting was malformed.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id `{id}` not found")]
pub struct NotFoundError {
    /// Human-readable entity kind (`"Hall"`, `"Machine"`, …).
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

/// The host environment cannot deliver notifications. A host without any
/// notification facility is configured as denying, so denial covers both.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// The user (or configuration) denied notification authorization.
    #[error("notification authorization denied")]
    Denied,
}
