use serde::{Serialize, Deserialize};

/// One supervised training pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Example {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Example { input, target }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Example {
    fn from((input, target): (Vec<f64>, Vec<f64>)) -> Self {
        Example { input, target }
    }
}
