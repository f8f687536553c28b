//----------------------------------------
// sample size errors
//----------------------------------------
use crate::error::PowercomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleSizeErr {
    #[error("alpha should be in (0, 1); got {0}")]
    BadAlpha(f64),
    #[error("target power should be in (0, 1); got {0}")]
    BadTargetPower(f64),
    #[error("mean difference should be positive; got {0}")]
    BadMeanDiff(f64),
    #[error("standard deviation should be positive; got {0}")]
    BadSd(f64),
    #[error("proportion should be in (0, 1); got {0}")]
    BadProportion(f64),
    #[error("margin of error should be positive; got {0}")]
    BadMarginOfError(f64),
    #[error("per-group sample size should be greater than 1; got {0}")]
    BadGroupSize(f64),
}

impl Into<PowercomputeErr> for SampleSizeErr {
    fn into(self) -> PowercomputeErr {
        PowercomputeErr::SampleSize(self)
    }
}
