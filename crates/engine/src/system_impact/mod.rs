//! Downstream civic-infrastructure strain.
//!
//! Translates the city risk percentage into hospital load, emergency-call
//! volume, and cooling-grid demand. Heatwave severity and risk momentum are
//! threaded in as explicit parameters rather than read from shared state, so
//! the dependency on the earlier pipeline stages is visible in the function
//! signature. Policy-simulated cooling centers mitigate hospital load (2% per
//! center, capped at 40%) while adding a little grid demand of their own.

mod calculations;
mod constants;
mod types;


pub use calculations::*;
pub use constants::*;
pub use types::*;
