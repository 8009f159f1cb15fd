//! Data exchanged between the clustering stages

use serde::{Deserialize, Serialize};

/// One merge event: the node it created, the distance at which the merge
/// happened, and the names of the leaves under that node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCluster {
    pub node: usize,
    pub distance: f64,
    pub leaves: Vec<String>,
}

impl SubCluster {
    pub fn new(node: usize, distance: f64, leaves: Vec<String>) -> Self {
        Self {
            node,
            distance,
            leaves,
        }
    }
}

/// Merge events in the order they happened
pub type Dendrogram = Vec<SubCluster>;

/// A tree in bracket (Newick) notation together with its leaf order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeLayout {
    pub newick: String,
    pub order: Vec<String>,
}
