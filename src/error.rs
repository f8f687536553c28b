//----------------------------------------
// Crate error type
//----------------------------------------
use crate::multiplicity::error::MultiplicityErr;
use crate::sample_size::error::SampleSizeErr;
use crate::simulation::error::CountSimErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowercomputeErr {
    #[error("while computing sample size: {0}")]
    SampleSize(SampleSizeErr),
    #[error("while assessing multiple testing risk: {0}")]
    Multiplicity(MultiplicityErr),
    #[error("while simulating count power: {0}")]
    CountSim(CountSimErr),
    #[error("while root finding: {0}")]
    RootFind(RootFindErr),
}

#[derive(Error, Debug)]
pub enum RootFindErr {
    #[error("function value at lower bound should be below target")]
    BadLowerBound,
    #[error("failed to bracket target after {0} doublings of the search window")]
    FailedToBracket(usize),
}

impl Into<PowercomputeErr> for RootFindErr {
    fn into(self) -> PowercomputeErr {
        PowercomputeErr::RootFind(self)
    }
}
