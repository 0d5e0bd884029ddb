use crate::{
    error::{ensure_len, Result},
    math::matrix::Matrix,
};

/// Plain per-example weight update: no momentum, no decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Returns `weights + lr * outer(neurons, deltas)`.
    ///
    /// `neurons` are the source-layer activations (one per row) and `deltas`
    /// the destination-layer error signals (one per column). The input
    /// matrix is left untouched.
    pub fn update_weights(&self, deltas: &[f64], neurons: &[f64], weights: &Matrix) -> Result<Matrix> {
        ensure_len("update_weights: neurons vs weight rows", weights.rows(), neurons.len())?;
        ensure_len("update_weights: deltas vs weight cols", weights.cols(), deltas.len())?;

        let lr = self.learning_rate;
        Ok(Matrix::from_fn(weights.rows(), weights.cols(), |i, j| {
            weights.get(i, j) + lr * deltas[j] * neurons[i]
        }))
    }
}

/// Free-function form of [`Sgd::update_weights`].
pub fn update_weights(deltas: &[f64], neurons: &[f64], weights: &Matrix, learning_rate: f64) -> Result<Matrix> {
    Sgd::new(learning_rate).update_weights(deltas, neurons, weights)
}
