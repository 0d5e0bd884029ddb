use rand::Rng;

use crate::{
    error::{ensure_len, NetworkError, Result},
    layers::dense::propagate_layer,
    math::matrix::Matrix,
};

/// A three-layer tanh network: input, one hidden layer, output.
///
/// The two weight matrices are the trainable state. The layer vectors are
/// snapshots of the last forward pass and get replaced on every pass.
/// Operations never mutate a `Network`; they return a new one, so the same
/// base network can seed any number of independent training runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub input_layer: Vec<f64>,
    /// `input_layer.len()` × `hidden_layer.len()`
    pub input_hidden_weights: Matrix,
    pub hidden_layer: Vec<f64>,
    /// `hidden_layer.len()` × `output_layer.len()`
    pub hidden_output_weights: Matrix,
    pub output_layer: Vec<f64>,
}

impl Network {
    /// Assembles a network from explicit parts, checking that every layer
    /// length matches the adjoining weight dimension.
    pub fn from_parts(
        input_layer: Vec<f64>,
        input_hidden_weights: Matrix,
        hidden_layer: Vec<f64>,
        hidden_output_weights: Matrix,
        output_layer: Vec<f64>,
    ) -> Result<Network> {
        let network = Network {
            input_layer,
            input_hidden_weights,
            hidden_layer,
            hidden_output_weights,
            output_layer,
        };
        network.check_shapes()?;
        Ok(network)
    }

    /// Builds a network with zeroed layers and small random weights.
    ///
    /// Each weight matrix entry is drawn from `[0, 1 / (rows * cols))`, so
    /// larger matrices start with proportionally smaller weights.
    pub fn build<R: Rng + ?Sized>(
        num_in: usize,
        num_hidden: usize,
        num_out: usize,
        rng: &mut R,
    ) -> Result<Network> {
        if num_in == 0 || num_hidden == 0 || num_out == 0 {
            return Err(NetworkError::InvalidDimension { context: "Network::build" });
        }

        let input_hidden_weights = random_weights(num_in, num_hidden, rng);
        let hidden_output_weights = random_weights(num_hidden, num_out, rng);
        log::debug!("built {num_in}-{num_hidden}-{num_out} network");

        Ok(Network {
            input_layer: vec![0.0; num_in],
            input_hidden_weights,
            hidden_layer: vec![0.0; num_hidden],
            hidden_output_weights,
            output_layer: vec![0.0; num_out],
        })
    }

    /// Forward pass. Returns a network whose layers hold the activations for
    /// `input`; the weights are carried over unchanged.
    pub fn forward(&self, input: &[f64]) -> Result<Network> {
        let hidden_layer = propagate_layer(input, &self.input_hidden_weights)?;
        let output_layer = propagate_layer(&hidden_layer, &self.hidden_output_weights)?;

        Ok(Network {
            input_layer: input.to_vec(),
            input_hidden_weights: self.input_hidden_weights.clone(),
            hidden_layer,
            hidden_output_weights: self.hidden_output_weights.clone(),
            output_layer,
        })
    }

    /// The inference result of the last forward pass.
    pub fn output_layer(&self) -> &[f64] {
        &self.output_layer
    }

    /// Runs a forward pass and returns only the output activations.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.forward(input)?.output_layer)
    }

    /// `(inputs, hidden, outputs)` neuron counts.
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (
            self.input_hidden_weights.rows(),
            self.hidden_output_weights.rows(),
            self.hidden_output_weights.cols(),
        )
    }

    fn check_shapes(&self) -> Result<()> {
        let ih = &self.input_hidden_weights;
        let ho = &self.hidden_output_weights;
        ensure_len("Network: input layer vs input-hidden rows", ih.rows(), self.input_layer.len())?;
        ensure_len("Network: hidden layer vs input-hidden cols", ih.cols(), self.hidden_layer.len())?;
        ensure_len("Network: hidden layer vs hidden-output rows", ho.rows(), self.hidden_layer.len())?;
        ensure_len("Network: output layer vs hidden-output cols", ho.cols(), self.output_layer.len())?;
        Ok(())
    }
}

fn random_weights<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    Matrix::uniform(rows, cols, 1.0 / (rows * cols) as f64, rng)
}
