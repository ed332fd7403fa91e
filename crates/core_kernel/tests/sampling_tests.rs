//! Distribution tests for weighted sampling

use core_kernel::{weighted_sample, FakeDataProvider, RandomFakeDataProvider, WeightedSampler};

const TRIALS: usize = 100_000;

fn frequencies(sampler: &WeightedSampler<u32>, seed: u64) -> Vec<f64> {
    let mut provider = RandomFakeDataProvider::seeded(seed);
    let mut counts = vec![0usize; sampler.values().len()];

    for _ in 0..TRIALS {
        let value = sampler.sample(&mut provider);
        let index = sampler
            .values()
            .iter()
            .position(|v| *v == value)
            .expect("sampled value comes from the table");
        counts[index] += 1;
    }

    counts.into_iter().map(|c| c as f64 / TRIALS as f64).collect()
}

#[test]
fn test_record_count_table_matches_weights() {
    let sampler = WeightedSampler::new(vec![1, 2, 3], &[0.35, 0.5, 0.15]).unwrap();
    let observed = frequencies(&sampler, 2024);

    // 0.01 is more than six standard errors at n = 100_000
    for (freq, expected) in observed.iter().zip([0.35, 0.5, 0.15]) {
        assert!(
            (freq - expected).abs() < 0.01,
            "observed {} expected {}",
            freq,
            expected
        );
    }
}

#[test]
fn test_unnormalised_weights_are_relative() {
    let sampler = WeightedSampler::new(vec![10, 20], &[3.0, 1.0]).unwrap();
    let observed = frequencies(&sampler, 99);

    assert!((observed[0] - 0.75).abs() < 0.01);
    assert!((observed[1] - 0.25).abs() < 0.01);
}

#[test]
fn test_tenure_table_never_reaches_unweighted_tail_in_practice() {
    let sampler =
        WeightedSampler::new(vec![1, 2, 3, 5, 8, 15, 30], &[0.1, 0.2, 0.35, 0.2, 0.125, 0.025])
            .unwrap();
    let observed = frequencies(&sampler, 7);

    assert!(observed[6] < 0.001);
    assert!((observed[2] - 0.35).abs() < 0.01);
}

#[test]
fn test_one_shot_helper() {
    let mut provider = RandomFakeDataProvider::seeded(1);
    let value = weighted_sample(&["only"], &[1.0], &mut provider).unwrap();
    assert_eq!(value, "only");

    assert!(weighted_sample::<&str, _>(&[], &[1.0], &mut provider).is_err());
    // the provider is still usable after a failed table
    assert!(provider.unit_interval() < 1.0);
}
