//! Pairwise distance matrix
//!
//! Stores the strict upper triangle of an `n x n` dissimilarity matrix in
//! condensed, row-major form: `(0,1), (0,2), ..., (0,n-1), (1,2), ...`.
//! Pairs are evaluated in parallel on the rayon pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{DistanceMetric, Error, Result, Vector};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    n: usize,
    condensed: Vec<f64>,
}

/// Unchecked wire form of [`DistanceMatrix`]
#[derive(Deserialize)]
struct RawMatrix {
    n: usize,
    condensed: Vec<f64>,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = String;

    fn try_from(raw: RawMatrix) -> std::result::Result<Self, Self::Error> {
        let expected = raw
            .n
            .checked_mul(raw.n.saturating_sub(1))
            .map(|p| p / 2)
            .ok_or_else(|| format!("matrix size {} overflows", raw.n))?;
        if raw.condensed.len() != expected {
            return Err(format!(
                "condensed matrix for {} items needs {} entries, got {}",
                raw.n,
                expected,
                raw.condensed.len()
            ));
        }
        Ok(Self {
            n: raw.n,
            condensed: raw.condensed,
        })
    }
}

impl DistanceMatrix {
    /// Compute all pairwise dissimilarities between `vectors` under `metric`.
    ///
    /// Every vector must share the dimension of the first one. If any pair cannot
    /// be compared, the error of the first failing pair in condensed order is
    /// returned.
    pub fn compute(vectors: &[Vector], metric: &dyn DistanceMetric) -> Result<Self> {
        let n = vectors.len();
        if let Some(first) = vectors.first() {
            if let Some(bad) = vectors.iter().find(|v| v.dim() != first.dim()) {
                return Err(Error::LengthMismatch {
                    left: first.dim(),
                    right: bad.dim(),
                });
            }
        }

        tracing::debug!(
            items = n,
            pairs = n * n.saturating_sub(1) / 2,
            metric = metric.name(),
            "computing pairwise distance matrix"
        );

        // collected in order first so the reported error does not depend on scheduling
        let results: Vec<Result<f64>> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| metric.compute(&vectors[i], &vectors[j]))
            .collect();
        let condensed = results.into_iter().collect::<Result<Vec<f64>>>()?;

        Ok(Self { n, condensed })
    }

    /// Number of items (rows) in the matrix
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Dissimilarity between items `i` and `j`, `None` when either is out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n || j >= self.n {
            return None;
        }
        if i == j {
            return Some(0.0);
        }
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        self.condensed.get(self.index(i, j)).copied()
    }

    /// The condensed upper triangle
    #[inline]
    pub fn condensed(&self) -> &[f64] {
        &self.condensed
    }

    /// Expand into a full symmetric matrix with a zero diagonal
    pub fn to_square(&self) -> Vec<Vec<f64>> {
        let mut square = vec![vec![0.0; self.n]; self.n];
        for i in 0..self.n {
            for j in i + 1..self.n {
                let d = self.condensed[self.index(i, j)];
                square[i][j] = d;
                square[j][i] = d;
            }
        }
        square
    }

    // requires i < j < n
    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.n - i * (i + 1) / 2 + (j - i - 1)
    }
}
