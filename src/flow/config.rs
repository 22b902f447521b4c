//! Flow instance generation options.

use crate::error::{EngineError, Result};

/// Upper bound on generated network size.
pub const MAX_FLOW_NODES: usize = 64;

/// Options for random flow network generation.
///
/// # Examples
///
/// ```
/// use u_puzzle::flow::FlowConfig;
///
/// let config = FlowConfig::default()
///     .with_num_nodes(12)
///     .with_edge_density(0.4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Number of junctions. Node 0 is the source, the last node the sink.
    pub num_nodes: usize,

    /// Probability that each forward pair `(u, v)`, `u < v`, gets an edge.
    pub edge_density: f64,

    /// Smallest edge capacity drawn.
    pub min_capacity: u64,

    /// Largest edge capacity drawn.
    pub max_capacity: u64,

    /// Use the fixed nine-junction road layout instead of a random topology.
    /// `num_nodes` and `edge_density` are ignored when set.
    pub traffic_preset: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            num_nodes: 9,
            edge_density: 0.35,
            min_capacity: 5,
            max_capacity: 15,
            traffic_preset: false,
            seed: None,
        }
    }
}

impl FlowConfig {
    pub fn with_num_nodes(mut self, n: usize) -> Self {
        self.num_nodes = n;
        self
    }

    pub fn with_edge_density(mut self, density: f64) -> Self {
        self.edge_density = density;
        self
    }

    pub fn with_capacity_range(mut self, min: u64, max: u64) -> Self {
        self.min_capacity = min;
        self.max_capacity = max;
        self
    }

    pub fn with_traffic_preset(mut self) -> Self {
        self.traffic_preset = true;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_FLOW_NODES).contains(&self.num_nodes) {
            return Err(EngineError::invalid_config(format!(
                "num_nodes must be in 2..={MAX_FLOW_NODES}, got {}",
                self.num_nodes
            )));
        }
        if !(0.0..=1.0).contains(&self.edge_density) {
            return Err(EngineError::invalid_config(format!(
                "edge_density must be in [0, 1], got {}",
                self.edge_density
            )));
        }
        if self.min_capacity > self.max_capacity {
            return Err(EngineError::invalid_config(
                "min_capacity must not exceed max_capacity",
            ));
        }
        Ok(())
    }
}
