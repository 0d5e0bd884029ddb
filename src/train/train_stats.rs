use serde::{Serialize, Deserialize};

/// Summary of a `train_loop` run.
///
/// Errors are Σ(target - output)² measured on each step's forward pass,
/// i.e. before that step's weight update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainStats {
    /// Number of examples actually consumed.
    pub examples_seen: usize,
    /// Mean squared error over all consumed examples; `0.0` when none were.
    pub mean_error: f64,
    /// Error of the final example.
    pub last_error: Option<f64>,
}
