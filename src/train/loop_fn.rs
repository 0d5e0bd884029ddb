use std::borrow::Borrow;

use crate::error::Result;
use crate::loss::squared_error::SquaredError;
use crate::network::network::Network;
use crate::train::example::Example;
use crate::train::train_config::TrainConfig;
use crate::train::train_stats::TrainStats;
use crate::train::trainer::train_step;

/// Trains on `examples` as configured by `config` and returns the final
/// network together with run statistics.
///
/// Examples are consumed strictly in order, one online update each. Passing
/// the same dataset several times (e.g. via `iter().cycle()` plus
/// `example_limit`) is how callers get multiple epochs.
///
/// # Errors
/// The first shape error aborts the run; nothing is skipped or retried.
pub fn train_loop<I>(
    network: &Network,
    examples: I,
    config: &TrainConfig,
) -> Result<(Network, TrainStats)>
where
    I: IntoIterator,
    I::Item: Borrow<Example>,
{
    let limit = config.example_limit.unwrap_or(usize::MAX);
    let mut current = network.clone();
    let mut stats = TrainStats::default();
    let mut total_error = 0.0;

    for example in examples.into_iter().take(limit) {
        let example = example.borrow();
        current = train_step(&current, &example.input, &example.target, config.learning_rate)?;

        // `current.output_layer` still holds this step's forward-pass output.
        let error = SquaredError::loss(&example.target, current.output_layer())?;
        total_error += error;
        stats.examples_seen += 1;
        stats.last_error = Some(error);

        if let Some(every) = config.log_every {
            if every > 0 && stats.examples_seen % every == 0 {
                log::info!("example {}: squared error = {:.6}", stats.examples_seen, error);
            }
        }
    }

    if stats.examples_seen > 0 {
        stats.mean_error = total_error / stats.examples_seen as f64;
    }
    log::debug!(
        "train_loop finished: {} examples, mean error {:.6}",
        stats.examples_seen,
        stats.mean_error
    );

    Ok((current, stats))
}
