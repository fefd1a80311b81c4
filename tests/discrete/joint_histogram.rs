use fastgenemi::estimators::approaches::{Discretization, JointHistogram};
use fastgenemi::{BinningStrategy, MiError};
use ndarray::{Array2, array};

#[test]
fn table_shape_follows_each_variable() {
    let x = Discretization::from_values(
        array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0].view(),
        &BinningStrategy::EqualWidth,
        3,
    )
    .unwrap();
    let y = Discretization::from_codes(array![1, 1, 2, 2, 1, 2].view()).unwrap();
    let joint = JointHistogram::from_bins(&x, &y).unwrap();
    assert_eq!(joint.shape(), (3, 2));
    let expected: Array2<usize> = array![[2, 0], [0, 2], [1, 1]];
    assert_eq!(joint.counts(), &expected);
    assert_eq!(joint.counts().sum(), joint.total());
    assert_eq!(joint.row_marginal().counts, x.counts().counts);
    assert_eq!(joint.col_marginal().counts, y.counts().counts);
}

#[test]
fn length_mismatch_is_reported_with_both_sizes() {
    let x = Discretization::from_codes(array![0, 1, 0].view()).unwrap();
    let y = Discretization::from_codes(array![0, 1, 0, 1, 1].view()).unwrap();
    assert_eq!(
        JointHistogram::from_bins(&x, &y).unwrap_err(),
        MiError::DimensionMismatch {
            expected: 3,
            found: 5
        }
    );
}
