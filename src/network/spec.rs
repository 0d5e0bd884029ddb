use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::network::Network;

/// Layer sizes of a network, storable as JSON before any training happens.
///
/// Only the architecture is described here; trained weights are not saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
}

impl NetworkSpec {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        NetworkSpec { input_size, hidden_size, output_size }
    }

    /// Builds a freshly initialised network with these dimensions.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        Network::build(self.input_size, self.hidden_size, self.output_size, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
