//! Export configuration.

use serde::{Deserialize, Serialize};

/// Knobs for one export pass. Keep this minimal; expand without breaking
/// the API.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Playhead position treated as the animation's time origin. Rest-pose
    /// snapshots are sampled with the cursor parked here.
    pub rest_frame: f32,
}
