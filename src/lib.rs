//! A single-hidden-layer feedforward network with tanh activations, trained
//! one example at a time by backpropagation.
//!
//! Every operation takes a [`Network`] by reference and returns a new one,
//! so a base network can be reused across independent training runs.

pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::{activate, d_activate};
pub use layers::dense::{hidden_deltas, propagate_layer};
pub use network::{Network, NetworkSpec};
pub use loss::squared_error::SquaredError;
pub use optim::sgd::{update_weights, Sgd};
pub use train::{train_all, train_limited, train_loop, train_step, Example, TrainConfig, TrainStats};
