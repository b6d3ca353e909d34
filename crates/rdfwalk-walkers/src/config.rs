//! Walker configuration.
//!
//! Everything is validated when the value is built (programmatically or via
//! serde), so a constructed walker can never hit a configuration error while
//! traversing.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("walks_per_graph must be positive when set")]
    ZeroWalksPerGraph,
    #[error("wildcards must not be empty")]
    EmptyWildcards,
    #[error("wildcard cardinalities must be positive")]
    ZeroWildcard,
    #[error("wildcards are only used by the wildcard strategy")]
    UnexpectedWildcards,
    #[error("invalid walker config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-iteration cap on the number of walks kept for one root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WalksPerGraph {
    #[default]
    Unbounded,
    Capped(NonZeroUsize),
}

impl WalksPerGraph {
    pub fn capped(cap: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(cap)
            .map(Self::Capped)
            .ok_or(ConfigError::ZeroWalksPerGraph)
    }

    /// `None` means unbounded.
    pub fn from_option(cap: Option<usize>) -> Result<Self, ConfigError> {
        cap.map_or(Ok(Self::Unbounded), Self::capped)
    }

    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Capped(cap) => Some(cap.get()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RawWalkerConfig {
    depth: usize,
    #[serde(default)]
    walks_per_graph: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Traversal settings shared by every walking strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWalkerConfig", into = "RawWalkerConfig")]
pub struct WalkerConfig {
    depth: usize,
    walks_per_graph: WalksPerGraph,
    seed: Option<u64>,
}

impl TryFrom<RawWalkerConfig> for WalkerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawWalkerConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.depth, raw.walks_per_graph)?.with_seed_opt(raw.seed))
    }
}

impl From<WalkerConfig> for RawWalkerConfig {
    fn from(config: WalkerConfig) -> Self {
        Self {
            depth: config.depth,
            walks_per_graph: config.walks_per_graph.limit(),
            seed: config.seed,
        }
    }
}

impl WalkerConfig {
    /// `walks_per_graph = None` keeps every walk.
    pub fn new(depth: usize, walks_per_graph: Option<usize>) -> Result<Self, ConfigError> {
        Ok(Self {
            depth,
            walks_per_graph: WalksPerGraph::from_option(walks_per_graph)?,
            seed: None,
        })
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_seed_opt(Some(seed))
    }

    pub fn with_seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn walks_per_graph(&self) -> WalksPerGraph {
        self.walks_per_graph
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// A fresh random source: seeded if configured, OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Mask cardinalities for the wildcard strategy, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Wildcards(Vec<usize>);

impl Wildcards {
    pub fn new(cardinalities: Vec<usize>) -> Result<Self, ConfigError> {
        if cardinalities.is_empty() {
            return Err(ConfigError::EmptyWildcards);
        }
        if cardinalities.contains(&0) {
            return Err(ConfigError::ZeroWildcard);
        }
        Ok(Self(cardinalities))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Default for Wildcards {
    fn default() -> Self {
        Self(vec![1])
    }
}

impl TryFrom<Vec<usize>> for Wildcards {
    type Error = ConfigError;

    fn try_from(value: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Wildcards> for Vec<usize> {
    fn from(value: Wildcards) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Random,
    Wildcard,
}

/// A complete walk job as read from a JSON document:
///
/// ```json
/// {"depth": 4, "walks_per_graph": 100, "seed": 7,
///  "strategy": "wildcard", "wildcards": [1, 2]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkJobConfig {
    #[serde(flatten)]
    pub walker: WalkerConfig,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcards: Option<Wildcards>,
}

impl WalkJobConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let job: Self = serde_json::from_str(text)?;
        job.validate()?;
        Ok(job)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy == Strategy::Random && self.wildcards.is_some() {
            return Err(ConfigError::UnexpectedWildcards);
        }
        Ok(())
    }

    /// Wildcards for the wildcard strategy, defaulting to `[1]`.
    pub fn wildcards_or_default(&self) -> Wildcards {
        self.wildcards.clone().unwrap_or_default()
    }
}
