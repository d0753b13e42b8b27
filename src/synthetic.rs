//! Small synthetic data sets for trying out validation procedures

use crate::procedures::IndexOrder;

/// Generate a simple binary classification data set.
///
/// Feature `col` of sample `row` has the value `col * n_samples + row`, so every value in the
/// data set is distinct and reveals where it came from. The first `n_samples / 2` labels are `1`,
/// the rest are `0`.
///
/// With `shuffle` the samples are permuted (reproducibly, given a `random_seed`). Features and
/// labels are permuted together, so each label stays with its feature row.
pub fn synthetic_classification(
    n_samples: usize,
    n_features: usize,
    shuffle: bool,
    random_seed: Option<u64>,
) -> (Vec<Vec<usize>>, Vec<u8>) {
    let half = n_samples / 2;

    IndexOrder::new(shuffle, random_seed)
        .order(n_samples)
        .into_iter()
        .map(|row| {
            let x: Vec<usize> = (0..n_features).map(|col| col * n_samples + row).collect();
            let y = if row < half { 1 } else { 0 };
            (x, y)
        })
        .unzip()
}

#[test]
fn layout() {
    let (x, y) = synthetic_classification(5, 2, false, None);
    assert_eq!(x, vec![vec![0, 5], vec![1, 6], vec![2, 7], vec![3, 8], vec![4, 9]]);
    assert_eq!(y, vec![1, 1, 0, 0, 0]);
}

#[test]
fn shuffled_rows_stay_labeled() {
    let (x, y) = synthetic_classification(20, 3, true, Some(5));
    assert_eq!((x.clone(), y.clone()), synthetic_classification(20, 3, true, Some(5)));

    for (row, label) in x.iter().zip(&y) {
        let source = row[0];
        assert_eq!(row, &vec![source, source + 20, source + 40]);
        assert_eq!(*label, if source < 10 { 1 } else { 0 });
    }

    let mut sources: Vec<_> = x.iter().map(|row| row[0]).collect();
    sources.sort();
    assert_eq!(sources, (0..20).collect::<Vec<_>>());
}
