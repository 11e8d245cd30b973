//! City-wide risk figures derived from the heat index.
//!
//! Maps the current heat-index tier to a fixed city risk percentage, an
//! estimate of the vulnerable population exposed, and the number of cooling
//! centers the city keeps open at that demand level. Policy-simulated extra
//! centers are added on top 1:1, uncapped.

mod calculations;
mod constants;
mod types;

#[cfg(test)]
mod tests;

pub use calculations::*;
pub use constants::*;
pub use types::*;
