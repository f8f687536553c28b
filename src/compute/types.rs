//----------------------------------------
// compute mod types
//----------------------------------------

pub use crate::sample_size::types::MeansSampleSize;
pub use crate::simulation::types::{PowerSimSettings, WelchTTest};
