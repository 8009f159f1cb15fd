//! # hclust Pipeline
//!
//! Contracts for the stages of an agglomerative hierarchical clustering run and
//! the [`Toolkit`] that binds them to the metric dispatcher.
//!
//! The stages themselves (merge engine, dendrogram heights, leaf ordering,
//! sorting and tree output) are supplied by the embedding application.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Metric    │────>│  Clusterer  │────>│ Dendrogram  │
//! │  Registry   │     │ (+ linkage) │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!       ┌──────────────┬─────────────────┬───────┘
//!       v              v                 v
//! ┌───────────┐  ┌───────────┐   ┌─────────────┐
//! │  Heights  │  │ Optimizer │──>│ Sorter/Tree │
//! └───────────┘  └───────────┘   └─────────────┘
//! ```

pub mod collaborator;
pub mod config;
pub mod error;
pub mod toolkit;
pub mod types;

pub use collaborator::{Clusterer, LeafOptimizer, NodeHeights, Sorter, TreeBuilder};
pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult, Stage};
pub use toolkit::{Toolkit, ToolkitBuilder};
pub use types::{Dendrogram, SubCluster, TreeLayout};
