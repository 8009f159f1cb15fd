//! Contracts for the stages that consume the distance subsystem
//!
//! The merge algorithm, linkage rules, leaf-ordering heuristic and tree grammar
//! live in the implementations; this crate only fixes the signatures they are
//! bound through.

use hclust_core::{DistanceMatrix, DistanceMetric, Vector};

use crate::{Dendrogram, PipelineResult, TreeLayout};

/// Agglomerative merge engine: the cluster entry point
pub trait Clusterer: Send + Sync {
    /// Cluster `vectors`, comparing items with `metric` and merging clusters
    /// according to the named `linkage` rule
    fn cluster(
        &self,
        vectors: &[Vector],
        metric: &dyn DistanceMetric,
        linkage: &str,
    ) -> PipelineResult<Dendrogram>;
}

/// Dendrogram height function
pub trait NodeHeights: Send + Sync {
    /// Height of every node, aggregated from child branch lengths
    fn node_heights(&self, dendrogram: &Dendrogram) -> Vec<f64>;
}

/// Leaf-order optimizer
pub trait LeafOptimizer: Send + Sync {
    fn optimize(
        &self,
        dendrogram: &Dendrogram,
        distances: &DistanceMatrix,
    ) -> PipelineResult<Dendrogram>;
}

/// Output sorter
pub trait Sorter: Send + Sync {
    fn sort(&self, dendrogram: Dendrogram) -> Dendrogram;
}

/// Tree builder producing bracket-notation output
pub trait TreeBuilder: Send + Sync {
    fn create(&self, dendrogram: &Dendrogram, names: &[String]) -> PipelineResult<TreeLayout>;
}
