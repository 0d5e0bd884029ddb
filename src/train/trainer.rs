use std::borrow::Borrow;

use crate::{
    error::Result,
    layers::dense::hidden_deltas,
    loss::squared_error::SquaredError,
    network::network::Network,
    optim::sgd::Sgd,
    train::example::Example,
};

/// One online backpropagation step on a single example.
///
/// The returned network carries the updated weights together with the layer
/// activations from this step's forward pass (computed with the old weights).
pub fn train_step(
    network: &Network,
    input: &[f64],
    target: &[f64],
    learning_rate: f64,
) -> Result<Network> {
    let activated = network.forward(input)?;

    let out_deltas = SquaredError::output_deltas(target, &activated.output_layer)?;
    let hid_deltas = hidden_deltas(
        &out_deltas,
        &activated.hidden_layer,
        &activated.hidden_output_weights,
    )?;

    let optimizer = Sgd::new(learning_rate);
    let hidden_output_weights = optimizer.update_weights(
        &out_deltas,
        &activated.hidden_layer,
        &activated.hidden_output_weights,
    )?;
    // The input-side update uses the step's original input, not a propagated value.
    let input_hidden_weights = optimizer.update_weights(
        &hid_deltas,
        input,
        &activated.input_hidden_weights,
    )?;

    log::trace!("train_step: output deltas {:?}", out_deltas);

    Ok(Network {
        input_layer: activated.input_layer,
        input_hidden_weights,
        hidden_layer: activated.hidden_layer,
        hidden_output_weights,
        output_layer: activated.output_layer,
    })
}

/// Folds `train_step` over `examples` in order, each step starting from the
/// previous step's network. An empty sequence returns a copy of `network`.
///
/// The sequence must be finite; use [`train_limited`] for generators.
/// Stops at the first malformed example and returns its error.
pub fn train_all<I>(network: &Network, examples: I, learning_rate: f64) -> Result<Network>
where
    I: IntoIterator,
    I::Item: Borrow<Example>,
{
    let mut current = network.clone();
    let mut seen = 0usize;

    for example in examples {
        let example = example.borrow();
        current = train_step(&current, &example.input, &example.target, learning_rate)?;
        seen += 1;
    }

    log::debug!("train_all: trained on {seen} examples");
    Ok(current)
}

/// Like [`train_all`], but consumes at most `limit` examples, so it is safe
/// to pass an endless example generator.
pub fn train_limited<I>(
    network: &Network,
    examples: I,
    limit: usize,
    learning_rate: f64,
) -> Result<Network>
where
    I: IntoIterator,
    I::Item: Borrow<Example>,
{
    train_all(network, examples.into_iter().take(limit), learning_rate)
}
