//! Resampling of labeled data sets for model validation.
//!
//! A validation `Procedure` cuts a data set of `N` samples into a sequence of train/test
//! folds. Two procedures are provided:
//!
//! - `LeaveNOut` tests contiguous blocks of `n` samples, walking the data set in order.
//! - `KFold` cuts the (optionally shuffled) samples into `k` segments and tests each once.
//!
//! `Procedure::split` pairs features with labels and lazily yields one `Partition` per fold:
//!
//! ```
//! use foldwise::prelude::*;
//! use foldwise::LeaveNOut;
//!
//! let x = vec![[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]];
//! let y = vec!['a', 'b', 'c'];
//!
//! let cv = LeaveNOut::new(1);
//! assert_eq!(cv.n_splits(x.len()), 3);
//!
//! for (i, part) in cv.split(&x, &y).unwrap().enumerate() {
//!     assert_eq!(part.test_y, vec![y[i]]);
//!     assert_eq!(part.train_x.len(), 2);
//! }
//! ```

extern crate rand;
extern crate rand_chacha;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate log;

mod config;
mod dataset;
mod error;
mod procedures;
pub mod synthetic;

pub mod prelude {
    pub use super::procedures::Procedure;
}

pub use config::ProcedureConfig;
pub use dataset::{DataSet, Partition};
pub use error::{Error, Result};
pub use procedures::{index_order, Fold, Folds, IndexOrder, KFold, LeaveNOut, Procedure, Split};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::prelude::*;
    use super::synthetic::synthetic_classification;
    use super::{Error, KFold, LeaveNOut};

    fn ten_rows() -> (Vec<Vec<i32>>, Vec<i32>) {
        let x = (0..10).map(|i| vec![i]).collect();
        let y = vec![0, 1, 0, 1, 0, 1, 0, 1, 0, 1];
        (x, y)
    }

    #[test]
    fn kfold_in_order() {
        let (x, y) = ten_rows();
        let parts: Vec<_> = KFold::new(5).split(&x, &y).unwrap().collect();

        assert_eq!(parts.len(), 5);
        for part in &parts {
            assert_eq!(part.test_x.len(), 2);
            assert_eq!(part.train_x.len(), 8);
        }

        assert_eq!(parts[0].test_x, vec![vec![0], vec![1]]);
        assert_eq!(parts[0].test_y, vec![0, 1]);
        assert_eq!(parts[0].train_x, (2..10).map(|i| vec![i]).collect::<Vec<_>>());
        assert_eq!(parts[0].train_y, vec![0, 1, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn leave_two_out() {
        let (x, y) = ten_rows();
        let parts: Vec<_> = LeaveNOut::new(2).split(&x, &y).unwrap().collect();
        assert_eq!(parts.len(), 5);

        let mut tested = vec![];
        for part in &parts {
            assert_eq!(part.test_x.len(), 2);
            assert_eq!(part.test_y.len(), 2);
            assert_eq!(part.train_x.len(), 8);
            assert_eq!(part.train_y.len(), 8);
            tested.extend(part.test_x.iter().map(|row| row[0]));
        }
        assert_eq!(tested, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn too_many_folds() {
        let (x, y) = ten_rows();
        assert!(matches!(
            KFold::new(11).split(&x, &y),
            Err(Error::InvalidFoldCount {
                folds: 11,
                n_samples: 10
            })
        ));
    }

    #[test]
    fn empty_data_set() {
        let x: Vec<Vec<f64>> = vec![];
        let y: Vec<f64> = vec![];
        assert!(matches!(KFold::default().split(&x, &y), Err(Error::EmptyDataset)));
        assert!(matches!(LeaveNOut::default().split(&x, &y), Err(Error::EmptyDataset)));
    }

    #[test]
    fn shape_mismatch_fails_before_folding() {
        let (x, _) = ten_rows();
        let y = vec![0; 9];
        assert!(matches!(
            KFold::new(3).split(&x, &y),
            Err(Error::ShapeMismatch {
                features: 10,
                labels: 9
            })
        ));
        assert!(matches!(
            LeaveNOut::new(0).split(&x, &y),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn remainder_sizes() {
        let (x, y) = ten_rows();
        let sizes: Vec<_> = KFold::new(3)
            .split(&x, &y)
            .unwrap()
            .map(|part| part.test_x.len())
            .collect();
        assert_eq!(sizes, vec![3, 3, 4]);
    }

    /// every sample is tested exactly once, and train and test never overlap
    fn assert_kfold_partitions(cv: &KFold, n_samples: usize) {
        let (x, y) = synthetic_classification(n_samples, 2, false, None);
        let split = cv.split(&x, &y).unwrap();
        assert_eq!(split.len(), cv.n_splits(n_samples));

        let mut tested = HashSet::new();
        for part in split {
            assert_eq!(part.train_x.len() + part.test_x.len(), n_samples);

            let train: HashSet<_> = part.train_x.iter().map(|row| row[0]).collect();
            for row in &part.test_x {
                assert!(!train.contains(&row[0]));
                assert!(tested.insert(row[0]), "sample {} tested twice", row[0]);
            }
        }
        assert_eq!(tested, (0..n_samples).collect::<HashSet<_>>());
    }

    #[test]
    fn kfold_coverage_and_disjointness() {
        for &(k, n) in &[(1, 1), (2, 3), (3, 10), (5, 10), (4, 17), (7, 7), (6, 50)] {
            assert_kfold_partitions(&KFold::new(k), n);
            assert_kfold_partitions(&KFold::new(k).with_shuffle(true), n);
            assert_kfold_partitions(&KFold::new(k).with_shuffle(true).with_random_seed(99), n);
        }
    }

    #[test]
    fn features_and_labels_stay_aligned() {
        // the label of every sample is derived from its feature row
        let (x, _) = synthetic_classification(23, 2, true, Some(11));
        let y: Vec<_> = x.iter().map(|row| row[1] * 3).collect();

        let check = |train_x: &[Vec<usize>], train_y: &[usize]| {
            assert_eq!(train_x.len(), train_y.len());
            for (row, label) in train_x.iter().zip(train_y) {
                assert_eq!(row[1] * 3, *label);
            }
        };

        for part in KFold::new(4).with_shuffle(true).split(&x, &y).unwrap() {
            check(&part.train_x, &part.train_y);
            check(&part.test_x, &part.test_y);
        }

        for part in LeaveNOut::new(3).split(&x, &y).unwrap() {
            check(&part.train_x, &part.train_y);
            check(&part.test_x, &part.test_y);
        }
    }

    #[test]
    fn seeded_splits_repeat() {
        let (x, y) = synthetic_classification(31, 1, false, None);

        let first: Vec<_> = KFold::new(6)
            .with_shuffle(true)
            .with_random_seed(1234)
            .split(&x, &y)
            .unwrap()
            .collect();
        let second: Vec<_> = KFold::new(6)
            .with_shuffle(true)
            .with_random_seed(1234)
            .split(&x, &y)
            .unwrap()
            .collect();

        assert_eq!(first, second);

        let tests: Vec<_> = KFold::new(5)
            .with_shuffle(true)
            .with_random_seed(42)
            .split(&x[..10], &y[..10])
            .unwrap()
            .map(|part| part.test_x.iter().map(|row| row[0]).collect::<Vec<_>>())
            .collect();
        assert_eq!(tests, vec![vec![4, 7], vec![9, 5], vec![6, 1], vec![0, 2], vec![3, 8]]);
    }

    #[test]
    fn splits_are_restartable() {
        let (x, y) = ten_rows();
        let cv = LeaveNOut::new(3);

        let mut split = cv.split(&x, &y).unwrap();
        let first = split.next().unwrap();
        drop(split);

        let again: Vec<_> = cv.split(&x, &y).unwrap().collect();
        assert_eq!(again.len(), 4);
        assert_eq!(again[0], first);
        assert_eq!(again[3].test_x, vec![vec![9]]);

        // source data is untouched
        assert_eq!(x, ten_rows().0);
    }
}
