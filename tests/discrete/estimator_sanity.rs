use approx::assert_abs_diff_eq;
use fastgenemi::MiEstimator;
use fastgenemi::estimators::approaches::discrete::discrete_utils::BinCounts;
use fastgenemi::estimators::approaches::{
    ChaoShenEntropy, DiscreteEntropy, DiscreteMutualInformation, EmpiricalMutualInformation,
    JointHistogram, MillerMadowEntropy, ShrinkEntropy,
};
use fastgenemi::estimators::{FromCounts, GlobalValue, JointEntropy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_joint(n: usize, bins_x: usize, bins_y: usize, seed: u64) -> JointHistogram {
    let mut rng = StdRng::seed_from_u64(seed);
    let x: Vec<usize> = (0..n).map(|_| rng.gen_range(0..bins_x)).collect();
    // y copies x half of the time
    let y: Vec<usize> = x
        .iter()
        .map(|&v| {
            if rng.gen_bool(0.5) {
                v % bins_y
            } else {
                rng.gen_range(0..bins_y)
            }
        })
        .collect();
    JointHistogram::from_indices(&x, &y, bins_x, bins_y).unwrap()
}

fn summed<E: FromCounts + GlobalValue + JointEntropy>(joint: &JointHistogram) -> f64 {
    E::from_counts(joint.row_marginal()).global_value()
        + E::from_counts(joint.col_marginal()).global_value()
        - E::joint_entropy(joint)
}

#[test]
fn entropy_summation_holds_for_every_wrapped_estimator() {
    let joint = random_joint(90, 4, 3, 8);
    assert_abs_diff_eq!(
        DiscreteMutualInformation::<DiscreteEntropy>::new(&joint).global_value(),
        summed::<DiscreteEntropy>(&joint),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        DiscreteMutualInformation::<MillerMadowEntropy>::new(&joint).global_value(),
        summed::<MillerMadowEntropy>(&joint),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        DiscreteMutualInformation::<ChaoShenEntropy>::new(&joint).global_value(),
        summed::<ChaoShenEntropy>(&joint),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        DiscreteMutualInformation::<ShrinkEntropy>::new(&joint).global_value(),
        summed::<ShrinkEntropy>(&joint),
        epsilon = 1e-12
    );
}

#[test]
fn direct_formula_matches_plug_in_entropies() {
    for seed in 0..5 {
        let joint = random_joint(150, 5, 4, seed);
        assert_abs_diff_eq!(
            EmpiricalMutualInformation::new(&joint).global_value(),
            summed::<DiscreteEntropy>(&joint).max(0.0),
            epsilon = 1e-12
        );
    }
}

#[test]
fn miller_madow_counts_only_occupied_cells() {
    let joint = random_joint(40, 6, 6, 12);
    let kx = joint.row_marginal().k as f64;
    let ky = joint.col_marginal().k as f64;
    let kxy = joint.occupied_cells() as f64;
    let n = joint.total() as f64;
    let ml = summed::<DiscreteEntropy>(&joint);
    let expected = (ml + (kx + ky - kxy - 1.0) / (2.0 * n)).max(0.0);
    assert_abs_diff_eq!(
        MiEstimator::MillerMadow.mutual_information(&joint),
        expected,
        epsilon = 1e-12
    );
}

#[test]
fn shrinkage_lambda_follows_james_stein_formula() {
    // counts 5, 3, 0, 2 over four bins, N = 10, target 1/4
    let counts = BinCounts::from_counts(vec![5, 3, 0, 2]);
    let u = [0.5, 0.3, 0.0, 0.2];
    let sum_sq: f64 = u.iter().map(|p| p * p).sum();
    let msp: f64 = u.iter().map(|p| (0.25 - p) * (0.25 - p)).sum();
    let expected = ((1.0 - sum_sq) / (9.0 * msp)).clamp(0.0, 1.0);
    let shrink = ShrinkEntropy::from_counts(counts);
    assert_abs_diff_eq!(shrink.lambda(), expected, epsilon = 1e-12);

    let p: Vec<f64> = u.iter().map(|p| expected * 0.25 + (1.0 - expected) * p).collect();
    let h: f64 = -p.iter().map(|p| p * p.ln()).sum::<f64>();
    assert_abs_diff_eq!(shrink.global_value(), h, epsilon = 1e-12);
}

#[test]
fn chao_shen_matches_hand_computation() {
    // counts 2, 1, 1 over N = 4: f1 = 2, C = 1/2
    let cs = ChaoShenEntropy::from_counts(BinCounts::from_counts(vec![2, 1, 1])).global_value();
    let mut expected = 0.0;
    for p in [0.5_f64, 0.25, 0.25] {
        let pa = 0.5 * p;
        let la = 1.0 - (1.0 - pa).powf(4.0);
        expected -= pa * pa.ln() / la;
    }
    assert_abs_diff_eq!(cs, expected, epsilon = 1e-12);
}

#[test]
fn estimator_entropy_dispatch() {
    let counts = BinCounts::from_counts(vec![4, 4, 0, 8]);
    assert_abs_diff_eq!(
        MiEstimator::Empirical.entropy(counts.clone()),
        DiscreteEntropy::from_counts(counts.clone()).global_value()
    );
    assert_abs_diff_eq!(
        MiEstimator::MillerMadow.entropy(counts.clone()),
        DiscreteEntropy::from_counts(counts.clone()).global_value() + 2.0 / 32.0,
        epsilon = 1e-12
    );
    assert!(MiEstimator::ChaoShen.entropy(counts.clone()).is_finite());
    assert!(MiEstimator::Shrinkage.entropy(counts) >= 0.0);
}
