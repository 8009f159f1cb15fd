use hclust_core::Metric;
use serde::{Deserialize, Serialize};

/// Configuration for a clustering run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Metric used to compare items
    pub metric: Metric,
    /// Linkage rule name, interpreted by the bound [`Clusterer`](crate::Clusterer)
    pub linkage: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Euclidean,
            linkage: "average".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.metric, Metric::Euclidean);
        assert_eq!(config.linkage, "average");
    }

    #[test]
    fn test_partial_json() {
        let config: PipelineConfig = serde_json::from_str(r#"{"metric": "jaccard"}"#).unwrap();
        assert_eq!(config.metric, Metric::Jaccard);
        assert_eq!(config.linkage, "average");

        let err = serde_json::from_str::<PipelineConfig>(r#"{"metric": "minkowski"}"#);
        assert!(err.is_err());
    }
}
