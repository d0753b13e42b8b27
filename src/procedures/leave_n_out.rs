use std::fmt;

use crate::error::{Error, Result};

use super::{Folds, Procedure};

/// Leave-n-out cross validation.
///
/// Each fold tests a contiguous block of `n` samples and trains on the rest. The blocks walk
/// the data set in its original order; the last block is shorter when `n` does not divide the
/// number of samples. With `n = 1` this is leave-one-out cross validation.
///
/// Every fold copies nearly the whole data set, so enumerating all folds costs O(N²/n).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveNOut {
    n: usize,
}

impl LeaveNOut {
    pub fn new(n: usize) -> Self {
        LeaveNOut { n }
    }

    /// number of samples left out per fold
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Default for LeaveNOut {
    fn default() -> Self {
        LeaveNOut::new(1)
    }
}

impl fmt::Display for LeaveNOut {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LeaveNOut(n={})", self.n)
    }
}

impl Procedure for LeaveNOut {
    fn folds(&self, n_samples: usize) -> Result<Folds> {
        if n_samples == 0 {
            return Err(Error::EmptyDataset);
        }

        if self.n < 1 {
            return Err(Error::InvalidFoldCount {
                folds: self.n,
                n_samples,
            });
        }

        let n_folds = self.n_splits(n_samples);
        debug!("{}: {} folds over {} samples", self, n_folds, n_samples);

        Ok(Folds::new((0..n_samples).collect(), self.n, n_folds))
    }

    fn n_splits(&self, n_samples: usize) -> usize {
        if self.n == 0 || n_samples == 0 {
            return 0;
        }
        (n_samples - 1) / self.n + 1
    }
}

#[test]
fn leave_one_out() {
    let folds: Vec<_> = LeaveNOut::default().folds(3).unwrap().collect();

    assert_eq!(folds.len(), 3);
    assert_eq!(folds[0].testset, vec![0]);
    assert_eq!(folds[0].trainset, vec![1, 2]);
    assert_eq!(folds[1].testset, vec![1]);
    assert_eq!(folds[1].trainset, vec![0, 2]);
    assert_eq!(folds[2].testset, vec![2]);
    assert_eq!(folds[2].trainset, vec![0, 1]);
}

#[test]
fn short_last_block() {
    let cv = LeaveNOut::new(3);
    assert_eq!(cv.n_splits(7), 3);

    let sizes: Vec<_> = cv.folds(7).unwrap().map(|f| f.testset.len()).collect();
    assert_eq!(sizes, vec![3, 3, 1]);

    let last = cv.folds(7).unwrap().last().unwrap();
    assert_eq!(last.testset, vec![6]);
    assert_eq!(last.trainset, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn block_larger_than_data_set() {
    let folds: Vec<_> = LeaveNOut::new(5).folds(3).unwrap().collect();
    assert_eq!(folds.len(), 1);
    assert_eq!(folds[0].testset, vec![0, 1, 2]);
    assert!(folds[0].trainset.is_empty());
}

#[test]
fn huge_block_is_one_fold() {
    let cv = LeaveNOut::new(usize::MAX);
    assert_eq!(cv.n_splits(10), 1);
    assert_eq!(cv.n_splits(usize::MAX), 1);

    let folds: Vec<_> = cv.folds(10).unwrap().collect();
    assert_eq!(folds.len(), 1);
    assert_eq!(folds[0].testset, (0..10).collect::<Vec<_>>());
    assert!(folds[0].trainset.is_empty());
}

#[test]
fn rejects_zero_block() {
    let cv = LeaveNOut::new(0);
    assert_eq!(cv.n_splits(10), 0);
    assert!(matches!(
        cv.folds(10),
        Err(Error::InvalidFoldCount {
            folds: 0,
            n_samples: 10
        })
    ));
    assert!(matches!(LeaveNOut::new(1).folds(0), Err(Error::EmptyDataset)));
}

#[test]
fn display() {
    assert_eq!(LeaveNOut::new(2).to_string(), "LeaveNOut(n=2)");
}
