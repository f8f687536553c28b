//----------------------------------------
// simulation mod
//----------------------------------------
pub mod count_sim;
pub mod error;
pub mod types;
pub mod welch;
