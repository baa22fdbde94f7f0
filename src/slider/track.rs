use crate::errors::{PanelError, Result};
use serde::{Deserialize, Serialize};

/// Lengths below this are treated as "not laid out yet".
pub const DEFAULT_MIN_USABLE_LENGTH: f32 = 10.0;
/// Length used until the hosting layout reports a usable one.
pub const DEFAULT_FALLBACK_LENGTH: f32 = 300.0;

/// How a slider treats track lengths reported by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackPolicy {
    pub min_usable_length: f32,
    pub fallback_length: f32,
}

impl Default for TrackPolicy {
    fn default() -> Self {
        Self {
            min_usable_length: DEFAULT_MIN_USABLE_LENGTH,
            fallback_length: DEFAULT_FALLBACK_LENGTH,
        }
    }
}

impl TrackPolicy {
    pub fn validate(&self) -> Result<()> {
        if !self.min_usable_length.is_finite() {
            return Err(PanelError::NonFiniteParameter {
                name: "min_usable_length",
                value: self.min_usable_length,
            });
        }
        if !self.fallback_length.is_finite() {
            return Err(PanelError::NonFiniteParameter {
                name: "fallback_length",
                value: self.fallback_length,
            });
        }
        if self.fallback_length <= 0.0 || self.fallback_length < self.min_usable_length {
            return Err(PanelError::InvalidTrackFallback {
                fallback: self.fallback_length,
                threshold: self.min_usable_length,
            });
        }
        Ok(())
    }
}

/// Current usable drag distance along a slider's primary axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLength {
    policy: TrackPolicy,
    length: f32,
    substituted: bool,
}

impl TrackLength {
    /// Starts on the fallback until the first layout pass.
    pub fn new(policy: TrackPolicy) -> Self {
        Self {
            policy,
            length: policy.fallback_length,
            substituted: true,
        }
    }

    pub fn get(&self) -> f32 {
        self.length
    }

    /// True while the stored length is the fallback rather than a reported one.
    pub fn is_fallback(&self) -> bool {
        self.substituted
    }

    pub fn policy(&self) -> TrackPolicy {
        self.policy
    }

    /// Stores a reported length, substituting the fallback for unusable ones.
    /// Returns true when the effective length changed.
    pub fn set(&mut self, reported: f32) -> bool {
        let usable = reported.is_finite() && reported >= self.policy.min_usable_length;
        let (length, substituted) = if usable {
            (reported, false)
        } else {
            if !self.substituted {
                tracing::debug!(
                    reported,
                    fallback = self.policy.fallback_length,
                    "track length below usable threshold, using fallback"
                );
            }
            (self.policy.fallback_length, true)
        };

        let changed = length != self.length;
        self.length = length;
        self.substituted = substituted;
        changed
    }
}
