pub mod activation;

pub use activation::{activate, activate_all, d_activate};
