//----------------------------------------
// multiplicity errors
//----------------------------------------
use crate::error::PowercomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultiplicityErr {
    #[error("alpha should be in [0, 1]; got {0}")]
    BadAlpha(f64),
    #[error("number of tests should be at least 1; got {0}")]
    BadTestCount(usize),
    #[error("p-values should be in [0, 1]; got {0}")]
    BadPValue(f64),
}

impl Into<PowercomputeErr> for MultiplicityErr {
    fn into(self) -> PowercomputeErr {
        PowercomputeErr::Multiplicity(self)
    }
}
