//! Serializable descriptions of validation procedures

use crate::error::Result;
use crate::procedures::{KFold, LeaveNOut, Procedure};

/// Configuration of a validation procedure, as read from JSON:
///
/// ```json
/// {"type": "k_fold", "k": 10, "shuffle": true, "random_seed": 42}
/// {"type": "leave_n_out", "n": 2}
/// ```
///
/// Omitted fields take the same defaults as the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProcedureConfig {
    LeaveNOut {
        #[serde(default = "default_n")]
        n: usize,
    },
    KFold {
        #[serde(default = "default_k")]
        k: usize,

        #[serde(default)]
        shuffle: bool,

        #[serde(default)]
        random_seed: Option<u64>,
    },
}

fn default_n() -> usize {
    1
}

fn default_k() -> usize {
    5
}

impl ProcedureConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// construct the configured procedure
    pub fn build(&self) -> Box<dyn Procedure> {
        match *self {
            ProcedureConfig::LeaveNOut { n } => Box::new(LeaveNOut::new(n)),
            ProcedureConfig::KFold {
                k,
                shuffle,
                random_seed,
            } => {
                let cv = KFold::new(k).with_shuffle(shuffle);
                match random_seed {
                    Some(seed) => Box::new(cv.with_random_seed(seed)),
                    None => Box::new(cv),
                }
            }
        }
    }
}

impl From<&LeaveNOut> for ProcedureConfig {
    fn from(cv: &LeaveNOut) -> Self {
        ProcedureConfig::LeaveNOut { n: cv.n() }
    }
}

impl From<&KFold> for ProcedureConfig {
    fn from(cv: &KFold) -> Self {
        ProcedureConfig::KFold {
            k: cv.k(),
            shuffle: cv.shuffle(),
            random_seed: cv.random_seed(),
        }
    }
}

#[test]
fn defaults_match_constructors() {
    let cfg = ProcedureConfig::from_json(r#"{"type": "k_fold"}"#).unwrap();
    assert_eq!(cfg, ProcedureConfig::from(&KFold::default()));

    let cfg = ProcedureConfig::from_json(r#"{"type": "leave_n_out"}"#).unwrap();
    assert_eq!(cfg, ProcedureConfig::from(&LeaveNOut::default()));
}

#[test]
fn built_procedure_follows_config() {
    let cfg =
        ProcedureConfig::from_json(r#"{"type": "k_fold", "k": 3, "shuffle": true, "random_seed": 7}"#)
            .unwrap();
    let cv = KFold::new(3).with_shuffle(true).with_random_seed(7);

    let built: Vec<_> = cfg.build().folds(20).unwrap().collect();
    let direct: Vec<_> = cv.folds(20).unwrap().collect();
    assert_eq!(built, direct);
    assert_eq!(cfg.build().n_splits(20), 3);

    let cfg = ProcedureConfig::LeaveNOut { n: 4 };
    assert_eq!(cfg.build().n_splits(10), 3);
}

#[test]
fn written_config_reads_back() {
    let cfg = ProcedureConfig::from(&KFold::new(8).with_random_seed(3));
    let json = cfg.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "k_fold");
    assert_eq!(value["k"], 8);
    assert_eq!(value["shuffle"], false);
    assert_eq!(value["random_seed"], 3);

    assert_eq!(ProcedureConfig::from_json(&json).unwrap(), cfg);
}

#[test]
fn unknown_procedure_is_an_error() {
    assert!(ProcedureConfig::from_json(r#"{"type": "bootstrap"}"#).is_err());
}
