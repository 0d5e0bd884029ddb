use rand::rngs::StdRng;
use rand::SeedableRng;
use tanhnet::{train_loop, Example, NetworkSpec, SquaredError, TrainConfig};

fn main() -> tanhnet::Result<()> {
    let spec = NetworkSpec::new(2, 4, 1);
    let network = spec.build(&mut StdRng::seed_from_u64(2024))?;

    let data = vec![
        Example::new(vec![1.0, 0.0], vec![1.0]),
        Example::new(vec![1.0, 1.0], vec![0.0]),
        Example::new(vec![0.0, 1.0], vec![1.0]),
        Example::new(vec![0.0, 0.0], vec![0.0]),
    ];

    let epochs = 5000;
    let config = TrainConfig::new(0.1)
        .with_example_limit(epochs * data.len())
        .with_log_every(1000 * data.len());

    let (trained, stats) = train_loop(&network, data.iter().cycle(), &config)?;
    println!("Trained on {} examples, mean error {:.6}", stats.examples_seen, stats.mean_error);

    for example in &data {
        let output = trained.predict(&example.input)?;
        let error = SquaredError::loss(&example.target, &output)?;
        println!("Input: {:?} -> Output: {:.4} (error {:.4})", example.input, output[0], error);
    }

    Ok(())
}
