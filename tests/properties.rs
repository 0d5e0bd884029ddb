use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tanhnet::{
    train_all, train_step, Example, Matrix, Network, NetworkError, SquaredError,
};

fn reference_network() -> Network {
    Network::from_parts(
        vec![0.0, 0.0],
        Matrix::from_data(vec![vec![0.12, 0.2, 0.13], vec![0.01, 0.02, 0.03]]).unwrap(),
        vec![0.0; 3],
        Matrix::from_data(vec![vec![0.15, 0.16], vec![0.02, 0.03], vec![0.01, 0.02]]).unwrap(),
        vec![0.0; 2],
    )
    .unwrap()
}

fn random_input(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

#[test]
fn forward_pass_reference_values() {
    let net = reference_network().forward(&[1.0, 0.0]).unwrap();

    let expected_hidden = [0.1194, 0.1974, 0.1293];
    for (got, want) in net.hidden_layer.iter().zip(expected_hidden.iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-3);
    }
    assert_abs_diff_eq!(net.output_layer()[0], 0.0231, epsilon = 1e-3);
    assert_abs_diff_eq!(net.output_layer()[1], 0.0276, epsilon = 1e-3);
}

#[test]
fn training_reduces_error() {
    let input = [1.0, 0.0];
    let target = [0.0, 1.0];
    let mut net = reference_network();
    let mut errors = Vec::new();

    for _ in 0..50 {
        net = train_step(&net, &input, &target, 0.5).unwrap();
        // The returned output layer is the forward pass of this iteration.
        errors.push(SquaredError::loss(&target, net.output_layer()).unwrap());
    }

    let first = errors[0];
    let last = *errors.last().unwrap();
    assert!(last < first, "error did not decrease: first {first}, last {last}");
    // Also check the weights after the final update.
    let after = SquaredError::loss(&target, &net.predict(&input).unwrap()).unwrap();
    assert!(after < first);
}

#[test]
fn train_step_is_deterministic() {
    let net = reference_network();
    let a = train_step(&net, &[0.3, -0.7], &[0.5, -0.5], 0.2).unwrap();
    let b = train_step(&net, &[0.3, -0.7], &[0.5, -0.5], 0.2).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shapes_are_preserved() {
    let mut rng = StdRng::seed_from_u64(11);
    for (a, b, c) in [(1, 1, 1), (2, 3, 2), (5, 8, 3), (7, 2, 4)] {
        let net = Network::build(a, b, c, &mut rng).unwrap();
        let input = random_input(&mut rng, a);
        let target = random_input(&mut rng, c);

        let forwarded = net.forward(&input).unwrap();
        let trained = train_step(&net, &input, &target, 0.1).unwrap();

        for out in [&forwarded, &trained] {
            assert_eq!(out.input_hidden_weights.shape(), (a, b));
            assert_eq!(out.hidden_output_weights.shape(), (b, c));
            assert_eq!(out.dimensions(), (a, b, c));
        }
    }
}

#[test]
fn activations_stay_in_open_unit_interval() {
    let mut rng = StdRng::seed_from_u64(5);
    let net = Network::build(4, 6, 3, &mut rng).unwrap();
    for _ in 0..20 {
        let input = random_input(&mut rng, 4);
        let out = net.forward(&input).unwrap();
        assert!(out.hidden_layer.iter().all(|&h| h > -1.0 && h < 1.0));
        assert!(out.output_layer.iter().all(|&o| o > -1.0 && o < 1.0));
    }
}

#[test]
fn forward_is_idempotent_on_fixed_weights() {
    let net = reference_network();
    let once = net.forward(&[0.4, 0.9]).unwrap();
    let twice = once.forward(&[0.4, 0.9]).unwrap();
    assert_eq!(once.hidden_layer, twice.hidden_layer);
    assert_eq!(once.output_layer, twice.output_layer);
}

#[test]
fn empty_dataset_leaves_weights_bit_identical() {
    let net = Network::build(3, 4, 2, &mut StdRng::seed_from_u64(8)).unwrap();
    let out = train_all(&net, std::iter::empty::<Example>(), 0.5).unwrap();
    assert_eq!(out.input_hidden_weights, net.input_hidden_weights);
    assert_eq!(out.hidden_output_weights, net.hidden_output_weights);
}

#[test]
fn initializer_respects_dimension_contract() {
    let mut rng = StdRng::seed_from_u64(99);
    for (a, b, c) in [(1, 1, 1), (2, 3, 1), (10, 20, 5)] {
        let net = Network::build(a, b, c, &mut rng).unwrap();
        let ih_bound = 1.0 / (a * b) as f64;
        let ho_bound = 1.0 / (b * c) as f64;

        assert_eq!(net.input_hidden_weights.shape(), (a, b));
        assert_eq!(net.hidden_output_weights.shape(), (b, c));
        assert!(net.input_hidden_weights.values().all(|w| (0.0..ih_bound).contains(&w)));
        assert!(net.hidden_output_weights.values().all(|w| (0.0..ho_bound).contains(&w)));
    }
}

#[test]
fn seeded_initializer_is_reproducible() {
    let a = Network::build(3, 3, 3, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = Network::build(3, 3, 3, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn base_network_can_seed_independent_runs() {
    let base = reference_network();
    let run_a = train_all(&base, &[Example::new(vec![1.0, 0.0], vec![0.0, 1.0])], 0.5).unwrap();
    let run_b = train_all(&base, &[Example::new(vec![0.0, 1.0], vec![1.0, 0.0])], 0.5).unwrap();

    assert_ne!(run_a.hidden_output_weights, run_b.hidden_output_weights);
    assert_eq!(base, reference_network());
}

#[test]
fn shape_errors_surface_to_caller() {
    let net = reference_network();
    assert!(matches!(
        train_step(&net, &[1.0], &[0.0, 1.0], 0.5),
        Err(NetworkError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        train_step(&net, &[1.0, 0.0], &[0.0, 1.0, 0.0], 0.5),
        Err(NetworkError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        Network::build(0, 2, 2, &mut StdRng::seed_from_u64(0)),
        Err(NetworkError::InvalidDimension { .. })
    ));
}
