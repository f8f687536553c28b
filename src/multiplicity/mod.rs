//----------------------------------------
// multiplicity mod
//----------------------------------------
pub mod benjamini_hochberg;
pub mod error;
pub mod familywise;
