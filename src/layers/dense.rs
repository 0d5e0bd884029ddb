use crate::{
    activation::activation::{activate_all, d_activate},
    error::{ensure_len, Result},
    math::matrix::Matrix,
};

/// Computes one layer's activations from the previous layer.
///
/// `outputs[j] = tanh(Σ_i inputs[i] * weights[i][j])`, so `inputs` must have
/// one entry per weight row.
pub fn propagate_layer(inputs: &[f64], weights: &Matrix) -> Result<Vec<f64>> {
    ensure_len("propagate_layer: inputs vs weight rows", weights.rows(), inputs.len())?;

    let net: Vec<f64> = (0..weights.cols())
        .map(|j| {
            inputs.iter()
                .enumerate()
                .map(|(i, x)| x * weights.get(i, j))
                .sum::<f64>()
        })
        .collect();

    Ok(activate_all(&net))
}

/// Backpropagates output deltas to the hidden layer.
///
/// `deltas[j] = (1 - hidden[j]²) * Σ_k output_deltas[k] * weights[j][k]`.
/// The sum runs along row j of the hidden→output matrix, i.e. the same
/// orientation used by the forward pass. Changing the matrix layout requires
/// changing this index order too.
pub fn hidden_deltas(
    output_deltas: &[f64],
    hidden_layer: &[f64],
    hidden_output_weights: &Matrix,
) -> Result<Vec<f64>> {
    ensure_len("hidden_deltas: hidden layer vs weight rows", hidden_output_weights.rows(), hidden_layer.len())?;
    ensure_len("hidden_deltas: output deltas vs weight cols", hidden_output_weights.cols(), output_deltas.len())?;

    let deltas = hidden_layer.iter()
        .enumerate()
        .map(|(j, &h)| {
            let downstream: f64 = output_deltas.iter()
                .zip(hidden_output_weights.row(j).iter())
                .map(|(d, w)| d * w)
                .sum();
            d_activate(h) * downstream
        })
        .collect();

    Ok(deltas)
}
