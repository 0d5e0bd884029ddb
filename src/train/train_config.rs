use serde::{Serialize, Deserialize};

use crate::error::Result;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `learning_rate` — scale of every weight adjustment
/// - `example_limit` — stop after this many examples; required in practice
///                     when the example source never ends
/// - `log_every`     — log the squared error of every n-th example at info
///                     level; `None` disables progress logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    #[serde(default)]
    pub example_limit: Option<usize>,
    #[serde(default)]
    pub log_every: Option<usize>,
}

impl TrainConfig {
    /// Creates a config with no example limit and no progress logging.
    pub fn new(learning_rate: f64) -> Self {
        TrainConfig {
            learning_rate,
            example_limit: None,
            log_every: None,
        }
    }

    pub fn with_example_limit(mut self, limit: usize) -> Self {
        self.example_limit = Some(limit);
        self
    }

    pub fn with_log_every(mut self, every: usize) -> Self {
        self.log_every = Some(every);
        self
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
