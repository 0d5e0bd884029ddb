pub mod sgd;

pub use sgd::{update_weights, Sgd};
