//! Dissimilarity metrics over real-valued vectors
//!
//! Every metric is available as a free function (`euclidean(x, y)`) and as a unit
//! struct implementing [`DistanceMetric`] (`Euclidean`). All of them reject inputs
//! of different lengths with [`Error::LengthMismatch`] before accumulating anything,
//! and all of them are symmetric. Smaller results mean more similar vectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A pairwise dissimilarity function
///
/// Implementations are stateless and can be shared freely across threads.
pub trait DistanceMetric: Send + Sync {
    /// Token under which the metric is registered
    fn name(&self) -> &'static str;

    /// Dissimilarity between `x` and `y`
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64>;
}

/// Presence/absence dissimilarity: a dimension is present when its value is positive.
///
/// Dimensions absent from both vectors are ignored. Fails with
/// [`Error::ZeroVector`] when no dimension is present in either vector.
pub fn binary(x: &[f64], y: &[f64]) -> Result<f64> {
    Error::check_lengths(x, y)?;

    let mut numerator = 0usize;
    let mut denominator = 0usize;
    for (&a, &b) in x.iter().zip(y) {
        let (in_a, in_b) = (a > 0.0, b > 0.0);
        if in_a && in_b {
            numerator += 1;
        }
        if in_a || in_b {
            denominator += 1;
        }
    }

    if denominator == 0 {
        return Err(Error::ZeroVector);
    }
    Ok(1.0 - numerator as f64 / denominator as f64)
}

/// Sum of `|x_i - y_i| / (|x_i| + |y_i|)`, skipping dimensions where both are zero
pub fn canberra(x: &[f64], y: &[f64]) -> Result<f64> {
    Error::check_lengths(x, y)?;

    let mut dist = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        if a != 0.0 || b != 0.0 {
            dist += (a - b).abs() / (a.abs() + b.abs());
        }
    }
    Ok(dist)
}

/// Weighted Jaccard dissimilarity: `1 - Σ min(x_i, y_i) / Σ max(x_i, y_i)`.
///
/// Dimensions where both values are zero are skipped. Fails with
/// [`Error::ZeroVector`] when the summed maxima are zero.
pub fn jaccard(x: &[f64], y: &[f64]) -> Result<f64> {
    Error::check_lengths(x, y)?;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        if a != 0.0 || b != 0.0 {
            numerator += a.min(b);
            denominator += a.max(b);
        }
    }

    if denominator == 0.0 {
        return Err(Error::ZeroVector);
    }
    Ok(1.0 - numerator / denominator)
}

/// Sum of absolute differences (L1)
pub fn manhattan(x: &[f64], y: &[f64]) -> Result<f64> {
    Error::check_lengths(x, y)?;
    Ok(x.iter().zip(y).map(|(a, b)| (a - b).abs()).sum())
}

/// Largest absolute difference over all dimensions (Chebyshev)
pub fn maximum(x: &[f64], y: &[f64]) -> Result<f64> {
    Error::check_lengths(x, y)?;

    let mut dist = 0.0;
    for (a, b) in x.iter().zip(y) {
        let diff = (a - b).abs();
        if diff > dist {
            dist = diff;
        }
    }
    Ok(dist)
}

/// Square root of the summed squared differences (L2)
pub fn euclidean(x: &[f64], y: &[f64]) -> Result<f64> {
    Error::check_lengths(x, y)?;

    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| {
            let diff = a - b;
            diff * diff
        })
        .sum();
    Ok(sum.sqrt())
}

/// `1 - cos θ` between the two vectors.
///
/// Fails with [`Error::ZeroVector`] when either vector has zero norm, since the
/// angle is undefined.
pub fn cosine(x: &[f64], y: &[f64]) -> Result<f64> {
    Error::check_lengths(x, y)?;

    let mut ab = 0.0;
    let mut a2 = 0.0;
    let mut b2 = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        ab += a * b;
        a2 += a * a;
        b2 += b * b;
    }

    let denominator = a2.sqrt() * b2.sqrt();
    if denominator == 0.0 {
        return Err(Error::ZeroVector);
    }
    Ok(1.0 - ab / denominator)
}

macro_rules! metric_impl {
    ($(#[$doc:meta])* $ty:ident, $name:literal, $func:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty;

        impl DistanceMetric for $ty {
            #[inline]
            fn name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
                $func(x, y)
            }
        }
    };
}

metric_impl!(
    /// See [`binary`]
    Binary, "binary", binary
);
metric_impl!(
    /// See [`canberra`]
    Canberra, "canberra", canberra
);
metric_impl!(
    /// See [`jaccard`]
    Jaccard, "jaccard", jaccard
);
metric_impl!(
    /// See [`manhattan`]
    Manhattan, "manhattan", manhattan
);
metric_impl!(
    /// See [`maximum`]
    Maximum, "maximum", maximum
);
metric_impl!(
    /// See [`euclidean`]
    Euclidean, "euclidean", euclidean
);
metric_impl!(
    /// See [`cosine`]
    Cosine, "cosine", cosine
);

/// The closed set of built-in metrics, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Binary,
    Canberra,
    Jaccard,
    Manhattan,
    Maximum,
    #[default]
    Euclidean,
    Cosine,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Binary,
        Metric::Canberra,
        Metric::Jaccard,
        Metric::Manhattan,
        Metric::Maximum,
        Metric::Euclidean,
        Metric::Cosine,
    ];

    pub fn as_str(self) -> &'static str {
        self.implementation().name()
    }

    /// The stateless implementation backing this metric
    pub fn implementation(self) -> &'static dyn DistanceMetric {
        match self {
            Metric::Binary => &Binary,
            Metric::Canberra => &Canberra,
            Metric::Jaccard => &Jaccard,
            Metric::Manhattan => &Manhattan,
            Metric::Maximum => &Maximum,
            Metric::Euclidean => &Euclidean,
            Metric::Cosine => &Cosine,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownMetric(s.to_string()))
    }
}
