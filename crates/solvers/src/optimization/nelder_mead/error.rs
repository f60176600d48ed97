use std::error::Error as StdError;

/// Errors that can occur during a Nelder–Mead search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The seed point has no coordinates.
    #[error("dimension must be at least 1")]
    InvalidDimension,

    /// The seed point does not have the requested number of coordinates.
    #[error("seed has {actual} coordinates but the dimension is {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The objective returned an error.
    #[error("objective error: {0}")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    /// The objective returned NaN or an infinity while the finiteness check
    /// was enabled.
    #[error("objective returned non-finite value {value} at {x:?}")]
    NonFinite { x: Vec<f64>, value: f64 },
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
