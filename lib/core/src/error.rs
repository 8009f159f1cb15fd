use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vectors for calculating distance must have equal length: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Zero vector detected")]
    ZeroVector,

    #[error("Unknown distance metric: {0}")]
    UnknownMetric(String),
}

impl Error {
    /// Fails with [`Error::LengthMismatch`] unless both slices have the same length
    #[inline]
    pub fn check_lengths(x: &[f64], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_lengths() {
        assert!(Error::check_lengths(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
        assert_eq!(
            Error::check_lengths(&[1.0], &[1.0, 2.0]),
            Err(Error::LengthMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_unknown_metric_names_token() {
        let err = Error::UnknownMetric("minkowski".to_string());
        assert_eq!(err.to_string(), "Unknown distance metric: minkowski");
    }
}
