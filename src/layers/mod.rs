pub mod dense;

pub use dense::{hidden_deltas, propagate_layer};
