/// Convenience result type used across framepack.
pub type PackResult<T> = Result<T, PackError>;

/// Top-level error taxonomy used by the planning and atlas APIs.
#[derive(thiserror::Error, Debug)]
pub enum PackError {
    /// The animation descriptor has a zero dimension, zero frames, or an unusable frame rate.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// Search options that would not terminate or are otherwise unusable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// No candidate layout fits within the atlas bounds.
    #[error("no admissible layout: {0}")]
    NoAdmissibleLayout(String),

    /// The stochastic search settled on a layout that fails the validity predicate.
    #[error("degenerate layout: {columns}x{rows} is not admissible")]
    DegenerateLayout {
        /// Column count of the rejected layout.
        columns: u32,
        /// Row count of the rejected layout.
        rows: u32,
    },

    /// Frame discovery failed before any descriptor could be built.
    #[error("discovery error: {0}")]
    Discovery(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PackError {
    /// Build a [`PackError::InvalidDescriptor`] value.
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    /// Build a [`PackError::InvalidOptions`] value.
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }

    /// Build a [`PackError::NoAdmissibleLayout`] value.
    pub fn no_admissible_layout(msg: impl Into<String>) -> Self {
        Self::NoAdmissibleLayout(msg.into())
    }

    /// Build a [`PackError::Discovery`] value.
    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
