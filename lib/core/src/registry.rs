//! Name-based metric dispatch
//!
//! The registry maps each metric token (`"euclidean"`, `"cosine"`, ...) to its
//! implementation. The mapping is fixed once built: there is no registration API,
//! so lookups never need a lock and the set of valid names cannot change while the
//! process runs.

use ahash::AHashMap;
use std::sync::OnceLock;

use crate::{DistanceMetric, Error, Metric, Result};

/// Immutable mapping from metric name to implementation
pub struct MetricRegistry {
    metrics: AHashMap<&'static str, &'static dyn DistanceMetric>,
}

/// Process-wide registry (initialized on first use)
static GLOBAL_REGISTRY: OnceLock<MetricRegistry> = OnceLock::new();

impl MetricRegistry {
    /// Build a registry holding every built-in metric
    pub fn builtin() -> Self {
        let metrics: AHashMap<&'static str, &'static dyn DistanceMetric> = Metric::ALL
            .into_iter()
            .map(Metric::implementation)
            .map(|metric| (metric.name(), metric))
            .collect();

        tracing::debug!(count = metrics.len(), "metric registry initialized");
        Self { metrics }
    }

    /// Get the process-wide registry
    pub fn global() -> &'static MetricRegistry {
        GLOBAL_REGISTRY.get_or_init(Self::builtin)
    }

    /// Resolve a metric by name
    pub fn get(&self, name: &str) -> Result<&dyn DistanceMetric> {
        self.metrics
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownMetric(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// Registered metric names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.metrics.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Compute the dissimilarity between `x` and `y` with the metric registered as `name`.
    ///
    /// The metric's result, including any error, is returned unchanged.
    #[inline]
    pub fn distance(&self, name: &str, x: &[f64], y: &[f64]) -> Result<f64> {
        self.get(name)?.compute(x, y)
    }
}

impl std::fmt::Debug for MetricRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricRegistry")
            .field("metrics", &self.names())
            .finish()
    }
}

/// Compute a dissimilarity using the process-wide registry
#[inline]
pub fn distance_by_name(name: &str, x: &[f64], y: &[f64]) -> Result<f64> {
    MetricRegistry::global().distance(name, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::euclidean;

    #[test]
    fn test_builtin_names() {
        let registry = MetricRegistry::builtin();
        assert_eq!(registry.len(), 7);
        assert_eq!(
            registry.names(),
            vec![
                "binary",
                "canberra",
                "cosine",
                "euclidean",
                "jaccard",
                "manhattan",
                "maximum",
            ]
        );
        for metric in Metric::ALL {
            assert!(registry.contains(metric.as_str()));
            assert_eq!(registry.get(metric.as_str()).unwrap().name(), metric.as_str());
        }
    }

    #[test]
    fn test_registry_matches_metric_enum() {
        let registry = MetricRegistry::builtin();
        let x = [1.0, 0.0, 2.5, -1.0];
        let y = [0.5, 3.0, 0.0, -2.0];
        for metric in Metric::ALL {
            let resolved = registry.get(metric.as_str()).unwrap();
            assert_eq!(resolved.compute(&x, &y), metric.implementation().compute(&x, &y));
            assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
        }
        assert_eq!(registry.len(), Metric::ALL.len());
    }

    #[test]
    fn test_unknown_metric() {
        let registry = MetricRegistry::builtin();
        assert_eq!(
            registry.distance("minkowski", &[1.0], &[2.0]),
            Err(Error::UnknownMetric("minkowski".to_string()))
        );
        // lookup is exact
        assert!(registry.get("Euclidean").is_err());
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_forwards_result_unchanged() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 0.5, -1.0];
        assert_eq!(distance_by_name("euclidean", &x, &y), euclidean(&x, &y));
        assert_eq!(
            distance_by_name("cosine", &[0.0, 0.0], &[1.0, 1.0]),
            Err(Error::ZeroVector)
        );
        assert_eq!(
            distance_by_name("manhattan", &[1.0], &[1.0, 2.0]),
            Err(Error::LengthMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_global_is_shared() {
        let a = MetricRegistry::global() as *const MetricRegistry;
        let b = MetricRegistry::global() as *const MetricRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_concurrent_lookups() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let x = [i as f64, 0.0];
                    distance_by_name("manhattan", &x, &[0.0, 0.0]).unwrap()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), i as f64);
        }
    }
}
