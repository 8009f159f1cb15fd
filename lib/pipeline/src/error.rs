use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// The collaborating stages of a clustering run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Cluster,
    NodeHeights,
    Optimize,
    Sort,
    Tree,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Cluster => "cluster",
            Stage::NodeHeights => "node_heights",
            Stage::Optimize => "optimize",
            Stage::Sort => "sort",
            Stage::Tree => "tree",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error(transparent)]
    Distance(#[from] hclust_core::Error),

    #[error("No implementation bound for stage: {0}")]
    MissingCollaborator(Stage),

    #[error("Stage '{stage}' failed: {message}")]
    Collaborator { stage: Stage, message: String },
}

impl PipelineError {
    pub fn collaborator(stage: Stage, message: impl Into<String>) -> Self {
        Self::Collaborator {
            stage,
            message: message.into(),
        }
    }
}
