//! Caller-owned user preference toggles.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Preference toggles owned by the caller (profile screen, policy-simulator
/// slider). Writing this resource triggers a full snapshot recompute.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Whether the user belongs to a heat-vulnerable group; weights the
    /// predictive risk scores.
    pub vulnerable: bool,
    /// Additional cooling centers simulated by the policy slider. Added 1:1
    /// to the active-center count and mitigating hospital load.
    pub policy_center_count: u32,
}
