use std::ops::Range;

use crate::error::{Error, Result};
use crate::procedures::Fold;

/// A labeled data set: one row of features and one label per sample.
///
/// The data set only borrows the caller's rows. Selecting a subset of positions clones the
/// selected rows into new vectors; the borrowed data is never reordered or modified.
#[derive(Debug)]
pub struct DataSet<'a, X, Y> {
    features: &'a [X],
    labels: &'a [Y],
}

// derived impls would require `X: Clone` and `Y: Clone`
impl<'a, X, Y> Clone for DataSet<'a, X, Y> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, X, Y> Copy for DataSet<'a, X, Y> {}

/// One train/test partition of a data set.
///
/// `train_x[i]` and `train_y[i]` always stem from the same source row, and so do
/// `test_x[i]` and `test_y[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<X, Y> {
    pub train_x: Vec<X>,
    pub test_x: Vec<X>,
    pub train_y: Vec<Y>,
    pub test_y: Vec<Y>,
}

impl<X, Y> Partition<X, Y> {
    /// return `(train_x, test_x, train_y, test_y)`
    pub fn into_tuple(self) -> (Vec<X>, Vec<X>, Vec<Y>, Vec<Y>) {
        (self.train_x, self.test_x, self.train_y, self.test_y)
    }
}

impl<'a, X, Y> DataSet<'a, X, Y> {
    /// Pair features with labels. Fails if the lengths differ or if there are no samples.
    pub fn coerce(features: &'a [X], labels: &'a [Y]) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(Error::ShapeMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }

        if features.is_empty() {
            return Err(Error::EmptyDataset);
        }

        Ok(DataSet { features, labels })
    }

    /// number of samples
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &'a [X] {
        self.features
    }

    pub fn labels(&self) -> &'a [Y] {
        self.labels
    }

    /// Contiguous sub-range of samples, without copying. Fails if the range does not lie within
    /// the data set.
    pub fn get_range(&self, range: Range<usize>) -> Result<DataSet<'a, X, Y>> {
        if range.start > range.end || range.end > self.len() {
            return Err(Error::PositionOutOfRange {
                position: range.start.max(range.end),
                n_samples: self.len(),
            });
        }
        Ok(self.slice(range))
    }

    /// contiguous sub-range of samples, without copying
    ///
    /// Panics if the range is out of bounds, like slice indexing does.
    pub fn slice(&self, range: Range<usize>) -> DataSet<'a, X, Y> {
        DataSet {
            features: &self.features[range.clone()],
            labels: &self.labels[range],
        }
    }
}

impl<'a, X: Clone, Y: Clone> DataSet<'a, X, Y> {
    /// Like `select`, but fails instead of panicking on a position outside the data set.
    pub fn get_rows(&self, positions: &[usize]) -> Result<(Vec<X>, Vec<Y>)> {
        if let Some(&position) = positions.iter().find(|&&i| i >= self.len()) {
            return Err(Error::PositionOutOfRange {
                position,
                n_samples: self.len(),
            });
        }
        Ok(self.select(positions))
    }

    /// Copy the rows at the given positions, in the given order.
    ///
    /// Positions may repeat. Panics if a position is out of bounds.
    pub fn select(&self, positions: &[usize]) -> (Vec<X>, Vec<Y>) {
        let x = positions.iter().map(|&i| self.features[i].clone()).collect();
        let y = positions.iter().map(|&i| self.labels[i].clone()).collect();
        (x, y)
    }

    /// materialize the rows of one fold
    pub fn partition(&self, fold: &Fold) -> Partition<X, Y> {
        let (train_x, train_y) = self.select(&fold.trainset);
        let (test_x, test_y) = self.select(&fold.testset);

        Partition {
            train_x,
            test_x,
            train_y,
            test_y,
        }
    }
}

#[test]
fn coerce_rejects_mismatched_lengths() {
    let x = vec![vec![1.0], vec![2.0], vec![3.0]];
    let y = vec![0, 1];

    match DataSet::coerce(&x, &y) {
        Err(Error::ShapeMismatch {
            features: 3,
            labels: 2,
        }) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn coerce_rejects_empty_input() {
    let x: Vec<Vec<f64>> = vec![];
    let y: Vec<u8> = vec![];
    assert!(matches!(DataSet::coerce(&x, &y), Err(Error::EmptyDataset)));
}

#[test]
fn select_keeps_rows_aligned() {
    let x = [[10, 11], [20, 21], [30, 31], [40, 41]];
    let y = ['a', 'b', 'c', 'd'];
    let data = DataSet::coerce(&x, &y).unwrap();

    let (sx, sy) = data.select(&[3, 0, 3]);
    assert_eq!(sx, vec![[40, 41], [10, 11], [40, 41]]);
    assert_eq!(sy, vec!['d', 'a', 'd']);

    let tail = data.slice(2..4);
    assert_eq!(tail.len(), 2);
    assert_eq!(tail.features(), &[[30, 31], [40, 41]]);
    assert_eq!(tail.labels(), &['c', 'd']);
}

#[test]
fn checked_access_reports_bad_positions() {
    let x = [[1], [2], [3]];
    let y = [true, false, true];
    let data = DataSet::coerce(&x, &y).unwrap();

    let (rx, ry) = data.get_rows(&[2, 0]).unwrap();
    assert_eq!(rx, vec![[3], [1]]);
    assert_eq!(ry, vec![true, true]);
    assert!(matches!(
        data.get_rows(&[0, 3, 7]),
        Err(Error::PositionOutOfRange {
            position: 3,
            n_samples: 3
        })
    ));

    assert_eq!(data.get_range(1..3).unwrap().labels(), &[false, true]);
    assert!(data.get_range(3..3).unwrap().is_empty());
    assert!(matches!(
        data.get_range(2..5),
        Err(Error::PositionOutOfRange {
            position: 5,
            n_samples: 3
        })
    ));
}

#[test]
fn partition_uses_fold_positions() {
    let x = vec![vec![0], vec![1], vec![2], vec![3]];
    let y = vec![0.0, 0.1, 0.2, 0.3];
    let data = DataSet::coerce(&x, &y).unwrap();

    let fold = Fold {
        trainset: vec![0, 3],
        testset: vec![1, 2],
    };

    let (train_x, test_x, train_y, test_y) = data.partition(&fold).into_tuple();
    assert_eq!(train_x, vec![vec![0], vec![3]]);
    assert_eq!(test_x, vec![vec![1], vec![2]]);
    assert_eq!(train_y, vec![0.0, 0.3]);
    assert_eq!(test_y, vec![0.1, 0.2]);
}
