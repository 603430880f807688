use thiserror::Error;

/// Errors signalled for input outside the domain of the geometry
/// functions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid hex size {0}: must be finite and greater than zero")]
    InvalidSize(f64),

    #[error("non-finite pixel coordinates ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("invalid hex coordinates {0:?}: expected \"q,r\"")]
    ParseCoord(String),
}

pub type Result<T> = std::result::Result<T, Error>;
