//! Composer configuration

use serde::{Deserialize, Serialize};

/// What to do when a composite slot is supplied twice in one composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotOverwrite {
    /// The later instance replaces the earlier one (default)
    #[default]
    LastWins,

    /// Fail with [`CompositionError::SlotOverwritten`](crate::CompositionError::SlotOverwritten)
    Reject,
}

/// Composer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Policy for a composite slot filled more than once
    pub slot_overwrite: SlotOverwrite,
}

impl ComposerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With slot overwrite policy
    #[inline]
    #[must_use]
    pub fn with_slot_overwrite(mut self, policy: SlotOverwrite) -> Self {
        self.slot_overwrite = policy;
        self
    }
}
