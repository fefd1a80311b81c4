use crate::test_helpers::generate_gaussian_matrix;
use approx::assert_abs_diff_eq;
use fastgenemi::{
    BinEdges, BinningStrategy, Discretization, MiConfig, MiError, SampleMatrix,
    mutual_information_matrix,
};
use ndarray::array;
use rstest::rstest;

#[rstest]
#[case(BinningStrategy::EqualWidth, 1)]
#[case(BinningStrategy::EqualWidth, 7)]
#[case(BinningStrategy::EqualFrequency, 4)]
#[case(BinningStrategy::EqualFrequency, 10)]
fn indices_stay_in_range_and_counts_sum_to_n(
    #[case] strategy: BinningStrategy,
    #[case] bins: usize,
) {
    let data = generate_gaussian_matrix(1, 333, 0.0, 2.0, 17);
    let d = Discretization::from_values(data.row(0), &strategy, bins).unwrap();
    assert!(d.bins() >= 1 && d.bins() <= bins);
    assert!(d.indices().iter().all(|&i| i < d.bins()));
    assert_eq!(d.counts().n, 333);
    assert_eq!(d.n_samples(), 333);
    assert!(!d.is_degenerate());
}

#[test]
fn equal_frequency_balances_counts() {
    let data = generate_gaussian_matrix(1, 400, 5.0, 1.0, 23);
    let d = Discretization::from_values(data.row(0), &BinningStrategy::EqualFrequency, 4).unwrap();
    assert_eq!(d.counts().counts, vec![100, 100, 100, 100]);
}

#[test]
fn equal_width_edges_are_evenly_spaced() {
    let edges = BinEdges::equal_width(array![-1.0, 0.0, 3.0].view(), 4).unwrap();
    assert_eq!(edges.bins(), 4);
    assert_eq!(edges.as_slice(), &[-1.0, 0.0, 1.0, 2.0, 3.0]);
    // 0.0 sits on the first interior edge and stays in bin 0
    assert_eq!(edges.bin_index(0.0), 0);
    assert_eq!(edges.bin_index(0.5), 1);
    assert_eq!(edges.bin_index(3.0), 3);
}

#[test]
fn supplied_edges_keep_their_own_bin_count() {
    let strategy = BinningStrategy::Edges(vec![0.0, 1.0, 2.0]);
    // the requested bin count is irrelevant for supplied edges
    let d =
        Discretization::from_values(array![0.0, 0.5, 1.0, 1.5, 2.0].view(), &strategy, 9).unwrap();
    assert_eq!(d.bins(), 2);
    assert_eq!(d.indices(), &[0, 0, 0, 1, 1]);
    assert_eq!(d.edges().map(|e| e.as_slice().to_vec()), Some(vec![0.0, 1.0, 2.0]));
}

#[test]
fn constant_values_under_supplied_edges_are_degenerate() {
    let strategy = BinningStrategy::Edges(vec![0.0, 1.0, 2.0]);
    let d = Discretization::from_values(array![1.5, 1.5, 1.5].view(), &strategy, 2).unwrap();
    assert!(d.is_degenerate());
    assert_eq!(d.bins(), 1);
    assert_eq!(d.indices(), &[0, 0, 0]);
    assert_eq!(d.counts().counts, vec![3]);
}

#[test]
fn zero_inflated_variable_is_informative() {
    // dropout zeros dominate the lower quantiles
    let x = array![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0, 9.0];
    let d = Discretization::from_values(x.view(), &BinningStrategy::EqualFrequency, 4).unwrap();
    assert!(!d.is_degenerate());
    assert_eq!(d.bins(), 2);
    assert_eq!(d.counts().counts, vec![8, 2]);

    let samples = SampleMatrix::from_rows(vec![x.to_vec(), x.to_vec()]).unwrap();
    let config = MiConfig::builder()
        .bins(4)
        .binning(BinningStrategy::EqualFrequency)
        .parallelism(1)
        .build()
        .unwrap();
    let mim = mutual_information_matrix(&samples, &config).unwrap();
    let h = -(0.8_f64 * 0.8_f64.ln() + 0.2 * 0.2_f64.ln());
    assert_abs_diff_eq!(mim.get(0, 0), h, epsilon = 1e-12);
    assert_abs_diff_eq!(mim.get(0, 1), h, epsilon = 1e-12);
}

#[test]
fn codes_are_compacted() {
    let d = Discretization::from_codes(array![5, 9, 5, 2, 9].view()).unwrap();
    assert_eq!(d.bins(), 3);
    assert_eq!(d.indices(), &[1, 2, 1, 0, 2]);
    assert!(d.edges().is_none());
    assert!(!d.is_degenerate());

    let constant = Discretization::from_codes(array![4, 4, 4].view()).unwrap();
    assert!(constant.is_degenerate());
    assert!(matches!(
        Discretization::from_codes(ndarray::Array1::<i32>::zeros(0).view()),
        Err(MiError::InvalidInput(_))
    ));
}

#[test]
fn zero_bins_is_rejected() {
    for strategy in [BinningStrategy::EqualWidth, BinningStrategy::EqualFrequency] {
        assert!(matches!(
            Discretization::from_values(array![1.0, 2.0].view(), &strategy, 0),
            Err(MiError::InvalidConfiguration(_))
        ));
    }
}
