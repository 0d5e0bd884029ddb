use crate::{
    activation::activation::d_activate,
    error::{ensure_len, Result},
};

/// Squared-error objective and the output-layer deltas it induces.
pub struct SquaredError;

impl SquaredError {
    /// Summed squared error: Σ(target - output)²
    pub fn loss(targets: &[f64], outputs: &[f64]) -> Result<f64> {
        ensure_len("SquaredError::loss: targets vs outputs", outputs.len(), targets.len())?;
        Ok(targets.iter().zip(outputs.iter())
            .map(|(t, o)| (t - o).powi(2))
            .sum())
    }

    /// Output-layer error signal: (1 - output²) * (target - output)
    pub fn output_deltas(targets: &[f64], outputs: &[f64]) -> Result<Vec<f64>> {
        ensure_len("SquaredError::output_deltas: targets vs outputs", outputs.len(), targets.len())?;
        Ok(targets.iter().zip(outputs.iter())
            .map(|(&t, &o)| d_activate(o) * (t - o))
            .collect())
    }
}
