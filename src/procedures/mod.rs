//! Validation procedures

mod index_order;
mod k_fold;
mod leave_n_out;

pub use self::index_order::{index_order, IndexOrder};
pub use self::k_fold::KFold;
pub use self::leave_n_out::LeaveNOut;

use crate::dataset::{DataSet, Partition};
use crate::error::Result;

/// Validation procedures support iteration over cross-validation folds
pub trait Procedure {
    /// Plan the folds for a data set of `n_samples` rows.
    ///
    /// All validation happens here; once a `Folds` iterator exists every fold it yields is
    /// well formed.
    fn folds(&self, n_samples: usize) -> Result<Folds>;

    /// number of folds `folds` will produce, computed without building them
    fn n_splits(&self, n_samples: usize) -> usize;

    /// Lazily split features `x` and labels `y` into train/test partitions.
    ///
    /// Each call starts a fresh enumeration, so calling `split` twice on the same data yields
    /// the same partitions (unless the procedure shuffles without a seed).
    fn split<'a, X, Y>(&self, x: &'a [X], y: &'a [Y]) -> Result<Split<'a, X, Y>>
    where
        Self: Sized,
        X: Clone,
        Y: Clone,
    {
        let data = DataSet::coerce(x, y)?;
        let folds = self.folds(data.len())?;
        Ok(Split { data, folds })
    }
}

impl<P: Procedure + ?Sized> Procedure for Box<P> {
    fn folds(&self, n_samples: usize) -> Result<Folds> {
        (**self).folds(n_samples)
    }

    fn n_splits(&self, n_samples: usize) -> usize {
        (**self).n_splits(n_samples)
    }
}

/// A single cross-validation fold, consisting of a training set and a testing set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fold {
    pub trainset: Vec<usize>,
    pub testset: Vec<usize>,
}

/// Iterator over the folds of one enumeration.
///
/// Fold `i` tests the positions `order[i * stride..end]`, where `end` is the end of `order`
/// for the last fold and `i * stride + stride` otherwise. The training set holds the remaining
/// positions of `order`, in order.
#[derive(Debug, Clone)]
pub struct Folds {
    order: Vec<usize>,
    stride: usize,
    n_folds: usize,
    cursor: usize,
}

impl Folds {
    pub(crate) fn new(order: Vec<usize>, stride: usize, n_folds: usize) -> Self {
        debug_assert!(stride >= 1);
        debug_assert!(n_folds.saturating_sub(1) * stride < order.len());
        Folds {
            order,
            stride,
            n_folds,
            cursor: 0,
        }
    }

    /// the index order the folds are cut from
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    fn test_range(&self, i: usize) -> (usize, usize) {
        let start = i * self.stride;
        if i + 1 == self.n_folds {
            (start, self.order.len())
        } else {
            (start, start + self.stride)
        }
    }
}

impl Iterator for Folds {
    type Item = Fold;

    fn next(&mut self) -> Option<Fold> {
        if self.cursor >= self.n_folds {
            return None;
        }

        let (start, end) = self.test_range(self.cursor);
        trace!("fold {}/{}: testing positions {}..{}", self.cursor + 1, self.n_folds, start, end);
        self.cursor += 1;

        let trainset = self.order[..start]
            .iter()
            .chain(&self.order[end..])
            .cloned()
            .collect();
        let testset = self.order[start..end].to_vec();

        Some(Fold { trainset, testset })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.n_folds - self.cursor;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Folds {}

/// Iterator over the train/test partitions of a data set, see `Procedure::split`.
#[derive(Debug)]
pub struct Split<'a, X, Y> {
    data: DataSet<'a, X, Y>,
    folds: Folds,
}

impl<'a, X: Clone, Y: Clone> Iterator for Split<'a, X, Y> {
    type Item = Partition<X, Y>;

    fn next(&mut self) -> Option<Partition<X, Y>> {
        let data = self.data;
        self.folds.next().map(|fold| data.partition(&fold))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.folds.size_hint()
    }
}

impl<'a, X: Clone, Y: Clone> ExactSizeIterator for Split<'a, X, Y> {}

#[test]
fn folds_cover_order_and_absorb_remainder() {
    let folds: Vec<_> = Folds::new(vec![4, 2, 0, 1, 3, 6, 5], 2, 3).collect();

    assert_eq!(
        folds,
        vec![
            Fold {
                trainset: vec![0, 1, 3, 6, 5],
                testset: vec![4, 2],
            },
            Fold {
                trainset: vec![4, 2, 3, 6, 5],
                testset: vec![0, 1],
            },
            Fold {
                trainset: vec![4, 2, 0, 1],
                testset: vec![3, 6, 5],
            },
        ]
    );
}

#[test]
fn folds_report_remaining_length() {
    let mut folds = Folds::new((0..10).collect(), 3, 3);
    assert_eq!(folds.len(), 3);
    folds.next();
    assert_eq!(folds.len(), 2);
    folds.next();
    folds.next();
    assert_eq!(folds.len(), 0);
    assert_eq!(folds.next(), None);
}

#[test]
fn boxed_procedures_split() {
    let procedure: Box<dyn Procedure> = Box::new(KFold::new(2));
    let x = [1, 2, 3, 4];
    let y = [1, 0, 1, 0];

    assert_eq!(procedure.n_splits(4), 2);
    let tests: Vec<_> = procedure.split(&x, &y).unwrap().map(|p| p.test_x).collect();
    assert_eq!(tests, vec![vec![1, 2], vec![3, 4]]);
}
