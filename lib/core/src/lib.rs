//! # hclust Core
//!
//! Dissimilarity measures for agglomerative hierarchical clustering.
//!
//! This crate provides the comparison primitive the merge engine is built on:
//!
//! - [`DistanceMetric`] - The pairwise dissimilarity capability
//! - [`Binary`], [`Canberra`], [`Jaccard`], [`Manhattan`], [`Maximum`],
//!   [`Euclidean`], [`Cosine`] - The built-in metrics
//! - [`MetricRegistry`] - Name-based dispatch over the built-in metrics
//! - [`DistanceMatrix`] - Parallel pairwise distance matrix
//!
//! ## Example
//!
//! ```rust
//! use hclust_core::{distance_by_name, DistanceMetric, Error, Euclidean};
//!
//! let x = [0.0, 0.0];
//! let y = [3.0, 4.0];
//!
//! assert_eq!(Euclidean.compute(&x, &y).unwrap(), 5.0);
//! assert_eq!(distance_by_name("euclidean", &x, &y).unwrap(), 5.0);
//!
//! // Unknown names are rejected rather than guessed
//! assert!(matches!(
//!     distance_by_name("minkowski", &x, &y),
//!     Err(Error::UnknownMetric(_))
//! ));
//! ```

pub mod error;
pub mod matrix;
pub mod metric;
pub mod registry;
pub mod vector;

pub use error::{Error, Result};
pub use matrix::DistanceMatrix;
pub use metric::{
    binary, canberra, cosine, euclidean, jaccard, manhattan, maximum, Binary, Canberra, Cosine,
    DistanceMetric, Euclidean, Jaccard, Manhattan, Maximum, Metric,
};
pub use registry::{distance_by_name, MetricRegistry};
pub use vector::Vector;
