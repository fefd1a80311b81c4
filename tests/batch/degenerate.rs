use approx::assert_abs_diff_eq;
use fastgenemi::{MiConfig, MiError, MiEstimator, SampleMatrix, mutual_information_matrix};
use ndarray::array;

fn samples_with_constant_row() -> SampleMatrix {
    SampleMatrix::new(array![
        [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        [3.0, 3.0, 3.0, 3.0, 3.0, 3.0],
        [6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
    ])
    .unwrap()
}

#[test]
fn constant_variable_falls_back_to_single_bin() {
    for estimator in MiEstimator::ALL {
        let config = MiConfig::builder()
            .bins(3)
            .estimator(estimator)
            .parallelism(2)
            .build()
            .unwrap();
        let mim = mutual_information_matrix(&samples_with_constant_row(), &config).unwrap();
        assert_abs_diff_eq!(mim.get(0, 1), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mim.get(1, 2), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mim.get(1, 1), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn strict_mode_reports_the_variable() {
    let config = MiConfig::builder()
        .bins(3)
        .strict_degenerate(true)
        .parallelism(1)
        .build()
        .unwrap();
    assert_eq!(
        mutual_information_matrix(&samples_with_constant_row(), &config).unwrap_err(),
        MiError::DegenerateInput { variable: 1 }
    );
}
