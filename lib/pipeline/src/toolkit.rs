//! Composition object binding the metric dispatcher to the clustering stages
//!
//! A [`Toolkit`] is assembled once with [`ToolkitBuilder`] and handed to whatever
//! orchestrates clustering. Every method forwards to the bound collaborator
//! without transforming its inputs or outputs.

use hclust_core::{DistanceMatrix, DistanceMetric, MetricRegistry, Vector};
use tracing::debug;

use crate::{
    Clusterer, Dendrogram, LeafOptimizer, NodeHeights, PipelineConfig, PipelineError,
    PipelineResult, Sorter, Stage, TreeBuilder, TreeLayout,
};

pub struct Toolkit {
    registry: &'static MetricRegistry,
    config: PipelineConfig,
    clusterer: Box<dyn Clusterer>,
    heights: Box<dyn NodeHeights>,
    optimizer: Box<dyn LeafOptimizer>,
    sorter: Box<dyn Sorter>,
    tree_builder: Box<dyn TreeBuilder>,
}

impl Toolkit {
    pub fn builder() -> ToolkitBuilder {
        ToolkitBuilder::new()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn registry(&self) -> &'static MetricRegistry {
        self.registry
    }

    /// Dissimilarity between `x` and `y` under the metric registered as `name`
    #[inline]
    pub fn distance(&self, name: &str, x: &[f64], y: &[f64]) -> hclust_core::Result<f64> {
        self.registry.distance(name, x, y)
    }

    /// The configured metric
    pub fn metric(&self) -> hclust_core::Result<&dyn DistanceMetric> {
        self.registry.get(self.config.metric.as_str())
    }

    /// Pairwise distances between `vectors` under the configured metric
    pub fn distance_matrix(&self, vectors: &[Vector]) -> hclust_core::Result<DistanceMatrix> {
        DistanceMatrix::compute(vectors, self.metric()?)
    }

    pub fn cluster(&self, vectors: &[Vector]) -> PipelineResult<Dendrogram> {
        let metric = self.metric()?;
        debug!(
            items = vectors.len(),
            metric = metric.name(),
            linkage = %self.config.linkage,
            "clustering"
        );
        self.clusterer.cluster(vectors, metric, &self.config.linkage)
    }

    pub fn node_heights(&self, dendrogram: &Dendrogram) -> Vec<f64> {
        self.heights.node_heights(dendrogram)
    }

    pub fn optimize(
        &self,
        dendrogram: &Dendrogram,
        distances: &DistanceMatrix,
    ) -> PipelineResult<Dendrogram> {
        self.optimizer.optimize(dendrogram, distances)
    }

    pub fn sort(&self, dendrogram: Dendrogram) -> Dendrogram {
        self.sorter.sort(dendrogram)
    }

    pub fn tree(&self, dendrogram: &Dendrogram, names: &[String]) -> PipelineResult<TreeLayout> {
        self.tree_builder.create(dendrogram, names)
    }
}

impl std::fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolkit")
            .field("registry", self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Toolkit`]; every stage must be bound before [`build`](Self::build)
pub struct ToolkitBuilder {
    registry: &'static MetricRegistry,
    config: PipelineConfig,
    clusterer: Option<Box<dyn Clusterer>>,
    heights: Option<Box<dyn NodeHeights>>,
    optimizer: Option<Box<dyn LeafOptimizer>>,
    sorter: Option<Box<dyn Sorter>>,
    tree_builder: Option<Box<dyn TreeBuilder>>,
}

impl ToolkitBuilder {
    pub fn new() -> Self {
        Self {
            registry: MetricRegistry::global(),
            config: PipelineConfig::default(),
            clusterer: None,
            heights: None,
            optimizer: None,
            sorter: None,
            tree_builder: None,
        }
    }

    pub fn registry(mut self, registry: &'static MetricRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clusterer(mut self, clusterer: impl Clusterer + 'static) -> Self {
        self.clusterer = Some(Box::new(clusterer));
        self
    }

    pub fn node_heights(mut self, heights: impl NodeHeights + 'static) -> Self {
        self.heights = Some(Box::new(heights));
        self
    }

    pub fn optimizer(mut self, optimizer: impl LeafOptimizer + 'static) -> Self {
        self.optimizer = Some(Box::new(optimizer));
        self
    }

    pub fn sorter(mut self, sorter: impl Sorter + 'static) -> Self {
        self.sorter = Some(Box::new(sorter));
        self
    }

    pub fn tree_builder(mut self, tree_builder: impl TreeBuilder + 'static) -> Self {
        self.tree_builder = Some(Box::new(tree_builder));
        self
    }

    pub fn build(self) -> PipelineResult<Toolkit> {
        let toolkit = Toolkit {
            registry: self.registry,
            config: self.config,
            clusterer: self
                .clusterer
                .ok_or(PipelineError::MissingCollaborator(Stage::Cluster))?,
            heights: self
                .heights
                .ok_or(PipelineError::MissingCollaborator(Stage::NodeHeights))?,
            optimizer: self
                .optimizer
                .ok_or(PipelineError::MissingCollaborator(Stage::Optimize))?,
            sorter: self
                .sorter
                .ok_or(PipelineError::MissingCollaborator(Stage::Sort))?,
            tree_builder: self
                .tree_builder
                .ok_or(PipelineError::MissingCollaborator(Stage::Tree))?,
        };
        debug!(
            metric = %toolkit.config.metric,
            linkage = %toolkit.config.linkage,
            "toolkit assembled"
        );
        Ok(toolkit)
    }
}

impl Default for ToolkitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SubCluster;
    use hclust_core::{Error, Metric};

    /// Records the metric and linkage it was called with as a single merge
    struct EchoClusterer;

    impl Clusterer for EchoClusterer {
        fn cluster(
            &self,
            vectors: &[Vector],
            metric: &dyn DistanceMetric,
            linkage: &str,
        ) -> PipelineResult<Dendrogram> {
            if vectors.len() < 2 {
                return Err(PipelineError::collaborator(Stage::Cluster, "need two items"));
            }
            let distance = metric.compute(&vectors[0], &vectors[1])?;
            Ok(vec![SubCluster::new(
                vectors.len(),
                distance,
                vec![metric.name().to_string(), linkage.to_string()],
            )])
        }
    }

    struct DistanceHeights;

    impl NodeHeights for DistanceHeights {
        fn node_heights(&self, dendrogram: &Dendrogram) -> Vec<f64> {
            dendrogram.iter().map(|s| s.distance * 2.0).collect()
        }
    }

    struct FirstPairOptimizer;

    impl LeafOptimizer for FirstPairOptimizer {
        fn optimize(
            &self,
            dendrogram: &Dendrogram,
            distances: &DistanceMatrix,
        ) -> PipelineResult<Dendrogram> {
            let d = distances
                .get(0, 1)
                .ok_or_else(|| PipelineError::collaborator(Stage::Optimize, "too few items"))?;
            Ok(dendrogram
                .iter()
                .cloned()
                .map(|mut s| {
                    s.distance = d;
                    s
                })
                .collect())
        }
    }

    struct ReverseSorter;

    impl Sorter for ReverseSorter {
        fn sort(&self, mut dendrogram: Dendrogram) -> Dendrogram {
            dendrogram.reverse();
            dendrogram
        }
    }

    struct JoinTree;

    impl TreeBuilder for JoinTree {
        fn create(&self, _dendrogram: &Dendrogram, names: &[String]) -> PipelineResult<TreeLayout> {
            Ok(TreeLayout {
                newick: format!("({});", names.join(",")),
                order: names.to_vec(),
            })
        }
    }

    fn full_builder() -> ToolkitBuilder {
        Toolkit::builder()
            .clusterer(EchoClusterer)
            .node_heights(DistanceHeights)
            .optimizer(FirstPairOptimizer)
            .sorter(ReverseSorter)
            .tree_builder(JoinTree)
    }

    fn vectors() -> Vec<Vector> {
        vec![Vector::new(vec![0.0, 0.0]), Vector::new(vec![3.0, 4.0])]
    }

    #[test]
    fn test_missing_collaborator() {
        let err = Toolkit::builder()
            .clusterer(EchoClusterer)
            .build()
            .unwrap_err();
        assert_eq!(err, PipelineError::MissingCollaborator(Stage::NodeHeights));

        let err = ToolkitBuilder::default().build().unwrap_err();
        assert_eq!(err, PipelineError::MissingCollaborator(Stage::Cluster));
    }

    #[test]
    fn test_cluster_uses_configured_metric() {
        let toolkit = full_builder()
            .config(PipelineConfig {
                metric: Metric::Manhattan,
                linkage: "complete".to_string(),
            })
            .build()
            .unwrap();

        let dendrogram = toolkit.cluster(&vectors()).unwrap();
        assert_eq!(dendrogram.len(), 1);
        assert_eq!(dendrogram[0].distance, 7.0);
        assert_eq!(dendrogram[0].leaves, vec!["manhattan", "complete"]);
    }

    #[test]
    fn test_cluster_propagates_errors() {
        let toolkit = full_builder()
            .config(PipelineConfig {
                metric: Metric::Cosine,
                ..PipelineConfig::default()
            })
            .build()
            .unwrap();
        assert_eq!(
            toolkit.cluster(&vectors()),
            Err(PipelineError::Distance(Error::ZeroVector))
        );
        assert!(matches!(
            toolkit.cluster(&vectors()[..1]),
            Err(PipelineError::Collaborator { stage: Stage::Cluster, .. })
        ));
    }

    #[test]
    fn test_stages_forward() {
        let toolkit = full_builder().build().unwrap();
        let dendrogram = toolkit.cluster(&vectors()).unwrap();
        assert_eq!(dendrogram[0].distance, 5.0);

        assert_eq!(toolkit.node_heights(&dendrogram), vec![10.0]);

        let matrix = toolkit.distance_matrix(&vectors()).unwrap();
        let optimized = toolkit.optimize(&dendrogram, &matrix).unwrap();
        assert_eq!(optimized[0].distance, 5.0);

        let mut two = dendrogram.clone();
        two.push(SubCluster::new(9, 1.0, Vec::new()));
        let sorted = toolkit.sort(two);
        assert_eq!(sorted[0].node, 9);

        let names = vec!["a".to_string(), "b".to_string()];
        let layout = toolkit.tree(&dendrogram, &names).unwrap();
        assert_eq!(layout.newick, "(a,b);");
        assert_eq!(layout.order, names);
    }

    #[test]
    fn test_distance_forwards_to_registry() {
        let toolkit = full_builder().build().unwrap();
        let x = [1.0, 2.0];
        let y = [2.0, 0.0];
        assert_eq!(
            toolkit.distance("canberra", &x, &y),
            hclust_core::canberra(&x, &y)
        );
        assert_eq!(
            toolkit.distance("minkowski", &x, &y),
            Err(Error::UnknownMetric("minkowski".to_string()))
        );
        assert!(std::ptr::eq(toolkit.registry(), MetricRegistry::global()));
    }
}
