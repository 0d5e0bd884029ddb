/// Hyperbolic tangent activation.
pub fn activate(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of tanh expressed through its output.
///
/// `y` must be the already-activated value `tanh(x)`, not the net input `x`:
/// d/dx tanh(x) = 1 - tanh(x)².
pub fn d_activate(y: f64) -> f64 {
    1.0 - y * y
}

/// Applies `activate` element-wise.
pub fn activate_all(xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| activate(x)).collect()
}
