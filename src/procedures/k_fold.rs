use std::fmt;

use crate::error::{Error, Result};

use super::{Folds, IndexOrder, Procedure};

/// K-fold cross validation.
///
/// The (optionally shuffled) sample positions are cut into `k` contiguous segments of
/// `N / k` positions each; the last segment also takes the remainder. Every segment is tested
/// exactly once while the others form the training set.
///
/// Shuffling permutes a copy of the positions, never the data. The permutation is drawn anew
/// for every call to `folds` or `split`; with a seed all calls draw the same permutation.
///
/// ```
/// use foldwise::{KFold, Procedure};
///
/// let x = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
/// let y = vec![0, 1, 0, 1];
///
/// let cv = KFold::new(2).with_shuffle(true).with_random_seed(42);
/// for part in cv.split(&x, &y).unwrap() {
///     assert_eq!(part.test_x.len(), 2);
///     assert_eq!(part.train_y.len(), 2);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KFold {
    k: usize,
    index_order: IndexOrder,
}

impl KFold {
    /// `k` folds over the data in its original order
    pub fn new(k: usize) -> Self {
        KFold {
            k,
            index_order: IndexOrder::identity(),
        }
    }

    /// shuffle sample positions before cutting them into folds
    pub fn with_shuffle(self, shuffle: bool) -> Self {
        KFold {
            index_order: IndexOrder::new(shuffle, self.index_order.seed()),
            ..self
        }
    }

    /// Make shuffling reproducible. Has no effect unless shuffling is enabled.
    pub fn with_random_seed(self, seed: u64) -> Self {
        KFold {
            index_order: IndexOrder::new(self.index_order.is_shuffled(), Some(seed)),
            ..self
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn shuffle(&self) -> bool {
        self.index_order.is_shuffled()
    }

    pub fn random_seed(&self) -> Option<u64> {
        self.index_order.seed()
    }
}

impl Default for KFold {
    fn default() -> Self {
        KFold::new(5)
    }
}

impl fmt::Display for KFold {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "KFold(k={}, shuffle={}, random_seed={:?})",
            self.k,
            self.shuffle(),
            self.random_seed()
        )
    }
}

impl Procedure for KFold {
    fn folds(&self, n_samples: usize) -> Result<Folds> {
        if n_samples == 0 {
            return Err(Error::EmptyDataset);
        }

        if self.k < 1 || self.k > n_samples {
            return Err(Error::InvalidFoldCount {
                folds: self.k,
                n_samples,
            });
        }

        let stride = n_samples / self.k;
        debug!(
            "{}: {} folds of {} samples over {} samples ({} in the last fold)",
            self,
            self.k,
            stride,
            n_samples,
            n_samples - (self.k - 1) * stride
        );

        Ok(Folds::new(self.index_order.order(n_samples), stride, self.k))
    }

    fn n_splits(&self, _n_samples: usize) -> usize {
        self.k
    }
}

#[test]
fn remainder_goes_to_last_fold() {
    let cv = KFold::new(3);
    let sizes: Vec<_> = cv.folds(10).unwrap().map(|f| f.testset.len()).collect();
    assert_eq!(sizes, vec![3, 3, 4]);

    let last = cv.folds(10).unwrap().last().unwrap();
    assert_eq!(last.testset, vec![6, 7, 8, 9]);
    assert_eq!(last.trainset, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn one_sample_per_fold() {
    let folds: Vec<_> = KFold::new(4).folds(4).unwrap().collect();
    assert_eq!(folds.len(), 4);
    for (i, fold) in folds.iter().enumerate() {
        assert_eq!(fold.testset, vec![i]);
        assert_eq!(fold.trainset.len(), 3);
    }
}

#[test]
fn rejects_invalid_k() {
    assert!(matches!(
        KFold::new(0).folds(10),
        Err(Error::InvalidFoldCount {
            folds: 0,
            n_samples: 10
        })
    ));
    assert!(matches!(
        KFold::new(11).folds(10),
        Err(Error::InvalidFoldCount {
            folds: 11,
            n_samples: 10
        })
    ));
    assert!(matches!(KFold::default().folds(0), Err(Error::EmptyDataset)));
}

#[test]
fn n_splits_is_k() {
    assert_eq!(KFold::new(7).n_splits(100), 7);
    assert_eq!(KFold::default().n_splits(0), 5);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let cv = KFold::new(4).with_shuffle(true).with_random_seed(2021);
    let again = KFold::new(4).with_random_seed(2021).with_shuffle(true);
    assert_eq!(cv, again);

    let a: Vec<_> = cv.folds(23).unwrap().collect();
    let b: Vec<_> = cv.folds(23).unwrap().collect();
    let c: Vec<_> = again.folds(23).unwrap().collect();
    assert_eq!(a, b);
    assert_eq!(a, c);

    let unshuffled: Vec<_> = KFold::new(4).folds(23).unwrap().collect();
    assert_ne!(a, unshuffled);
}

#[test]
fn seed_without_shuffle_keeps_order() {
    let cv = KFold::new(2).with_random_seed(1);
    assert!(!cv.shuffle());
    assert_eq!(cv.folds(4).unwrap().order(), &[0, 1, 2, 3]);
}

#[test]
fn display() {
    assert_eq!(
        KFold::default().to_string(),
        "KFold(k=5, shuffle=false, random_seed=None)"
    );
    assert_eq!(
        KFold::new(3).with_shuffle(true).with_random_seed(9).to_string(),
        "KFold(k=3, shuffle=true, random_seed=Some(9))"
    );
}
