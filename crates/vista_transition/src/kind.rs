//! Selecting a transition variant from configuration

use crate::cut::CutTransition;
use crate::effect::TransitionEffect;
use crate::fade::{FadeTransition, DEFAULT_FADE_DURATION};
use crate::wipe::{WipeEdge, WipeTransition};
use serde::{Deserialize, Serialize};

/// Available transition variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Cross-fade
    Fade,
    /// Edge wipe
    Wipe,
    /// Instant cut
    Cut,
}

impl Default for TransitionKind {
    fn default() -> Self {
        Self::Fade
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fade => write!(f, "fade"),
            Self::Wipe => write!(f, "wipe"),
            Self::Cut => write!(f, "cut"),
        }
    }
}

impl std::str::FromStr for TransitionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fade" | "crossfade" | "dissolve" => Ok(Self::Fade),
            "wipe" => Ok(Self::Wipe),
            "cut" | "instant" | "none" => Ok(Self::Cut),
            _ => Err(format!("Unknown transition: {}", s)),
        }
    }
}

/// Transition configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Variant to build
    pub kind: TransitionKind,
    /// Run length in seconds
    pub duration: f32,
    /// Edge for wipes
    pub wipe_edge: WipeEdge,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            kind: TransitionKind::Fade,
            duration: DEFAULT_FADE_DURATION,
            wipe_edge: WipeEdge::Left,
        }
    }
}

impl TransitionSettings {
    /// Build the configured effect
    pub fn build(&self) -> Box<dyn TransitionEffect> {
        let mut effect: Box<dyn TransitionEffect> = match self.kind {
            TransitionKind::Fade => Box::new(FadeTransition::new()),
            TransitionKind::Wipe => Box::new(WipeTransition::new(self.wipe_edge, self.duration)),
            TransitionKind::Cut => Box::new(CutTransition::new()),
        };
        effect.set_duration(self.duration);
        effect
    }
}
