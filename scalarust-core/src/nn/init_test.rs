use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_default_is_unit_uniform() {
    assert_eq!(
        WeightInit::default(),
        WeightInit::Uniform {
            low: -1.0,
            high: 1.0
        }
    );
}

#[test]
fn test_uniform_samples_within_bounds() -> Result<(), ScalarustError> {
    let mut rng = StdRng::seed_from_u64(42);
    let samples = WeightInit::default().sample_n(500, &mut rng)?;
    assert_eq!(samples.len(), 500);
    assert!(samples.iter().all(|&w| (-1.0..=1.0).contains(&w)));
    // Not all the same value.
    assert!(samples.iter().any(|&w| w != samples[0]));
    Ok(())
}

#[test]
fn test_seeded_sampling_is_reproducible() -> Result<(), ScalarustError> {
    let init = WeightInit::Normal {
        mean: 0.0,
        std_dev: 0.5,
    };
    let first = init.sample_n(16, &mut StdRng::seed_from_u64(7))?;
    let second = init.sample_n(16, &mut StdRng::seed_from_u64(7))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_normal_sample_mean() -> Result<(), ScalarustError> {
    let mut rng = StdRng::seed_from_u64(3);
    let init = WeightInit::Normal {
        mean: 2.0,
        std_dev: 0.1,
    };
    let samples = init.sample_n(2000, &mut rng)?;
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    assert!((mean - 2.0).abs() < 0.02, "sample mean {}", mean);
    Ok(())
}

#[test]
fn test_degenerate_uniform_is_constant() -> Result<(), ScalarustError> {
    let init = WeightInit::Uniform {
        low: 0.25,
        high: 0.25,
    };
    let samples = init.sample_n(4, &mut StdRng::seed_from_u64(0))?;
    assert_eq!(samples, vec![0.25; 4]);
    Ok(())
}

#[test]
fn test_invalid_parameters() {
    let mut rng = StdRng::seed_from_u64(0);
    let reversed = WeightInit::Uniform {
        low: 1.0,
        high: -1.0,
    };
    assert!(matches!(
        reversed.sample_n(1, &mut rng),
        Err(ScalarustError::InvalidHyperparameter { ref name, .. }) if name == "high"
    ));
    let negative_std = WeightInit::Normal {
        mean: 0.0,
        std_dev: -1.0,
    };
    assert!(matches!(
        negative_std.validate(),
        Err(ScalarustError::InvalidHyperparameter { ref name, .. }) if name == "std_dev"
    ));
    let nan_low = WeightInit::Uniform {
        low: f32::NAN,
        high: 1.0,
    };
    assert!(nan_low.validate().is_err());
}
