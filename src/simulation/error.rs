//----------------------------------------
// simulation errors
//----------------------------------------
use crate::error::PowercomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountSimErr {
    #[error("group means should be positive; got {0}")]
    BadGroupMean(f64),
    #[error("approximate sd should be positive; got {0}")]
    BadApproxSd(f64),
    #[error("per-group sample size should be at least 2; got {0}")]
    BadGroupSize(usize),
    #[error("number of simulation reps should be at least 1; got {0}")]
    BadRepCount(usize),
    #[error("alpha should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("samples should contain at least 2 observations; got {0}")]
    ShortSample(usize),
}

impl Into<PowercomputeErr> for CountSimErr {
    fn into(self) -> PowercomputeErr {
        PowercomputeErr::CountSim(self)
    }
}
