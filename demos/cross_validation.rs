extern crate foldwise;
extern crate log;
extern crate simple_logger;

use foldwise::prelude::*;
use foldwise::synthetic::synthetic_classification;
use foldwise::{KFold, ProcedureConfig};

fn main() {
    simple_logger::init_with_level(log::Level::Debug).unwrap();

    // ten samples with a single feature
    let (x, y) = synthetic_classification(10, 1, false, None);

    let cv = KFold::new(5);
    println!("{}", cv);
    println!("{}", ProcedureConfig::from(&cv).to_json().unwrap());

    for (i, part) in cv.split(&x, &y).unwrap().enumerate() {
        println!("Fold {}:", i + 1);
        println!("Train:\tX:{:?}, y:{:?}", part.train_x, part.train_y);
        println!("Test:\tX:{:?}, y:{:?}", part.test_x, part.test_y);
    }

    // the same again, shuffled reproducibly
    let cv = KFold::new(3).with_shuffle(true).with_random_seed(42);
    println!("{} ({} splits)", cv, cv.n_splits(x.len()));

    for (i, part) in cv.split(&x, &y).unwrap().enumerate() {
        println!("Fold {}: test X:{:?}, y:{:?}", i + 1, part.test_x, part.test_y);
    }
}
