//! # hclust
//!
//! Dissimilarity measures and pipeline wiring for agglomerative hierarchical
//! clustering.
//!
//! ## Quick Start
//!
//! ### As a Command
//!
//! ```bash
//! hclust --input vectors.json --metric cosine
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use hclust::prelude::*;
//!
//! let x = Vector::new(vec![1.0, 2.0, 3.0]);
//! let y = Vector::new(vec![4.0, 6.0, 8.0]);
//!
//! // Pick a metric by name
//! let d = distance("manhattan", &x, &y).unwrap();
//! assert_eq!(d, 12.0);
//!
//! // Or use it directly
//! assert_eq!(Manhattan.compute(&x, &y).unwrap(), d);
//! ```
//!
//! ## Crate Structure
//!
//! - `hclust-core` - Vectors, metrics, the metric registry and distance matrices
//! - `hclust-pipeline` - Contracts for the clustering stages and the [`Toolkit`]
//!   that binds them together

// Re-export core types
pub use hclust_core::{
    distance_by_name, distance_by_name as distance, Binary, Canberra, Cosine, DistanceMatrix,
    DistanceMetric, Error, Euclidean, Jaccard, Manhattan, Maximum, Metric, MetricRegistry,
    Result, Vector,
};

// Re-export pipeline
pub use hclust_pipeline::{
    Clusterer, Dendrogram, LeafOptimizer, NodeHeights, PipelineConfig, PipelineError,
    PipelineResult, Sorter, Stage, SubCluster, Toolkit, ToolkitBuilder, TreeBuilder, TreeLayout,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        distance, Binary, Canberra, Clusterer, Cosine, Dendrogram, DistanceMatrix,
        DistanceMetric, Error, Euclidean, Jaccard, LeafOptimizer, Manhattan, Maximum, Metric,
        MetricRegistry, NodeHeights, PipelineConfig, PipelineError, Result, Sorter, SubCluster,
        Toolkit, TreeBuilder, TreeLayout, Vector,
    };
}

/// The metrics as plain functions
pub mod metrics {
    pub use hclust_core::metric::{
        binary, canberra, cosine, euclidean, jaccard, manhattan, maximum,
    };
}
