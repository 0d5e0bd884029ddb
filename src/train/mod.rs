pub mod example;
pub mod trainer;
pub mod train_stats;
pub mod train_config;
pub mod loop_fn;

pub use example::Example;
pub use trainer::{train_all, train_limited, train_step};
pub use train_stats::TrainStats;
pub use train_config::TrainConfig;
pub use loop_fn::train_loop;
