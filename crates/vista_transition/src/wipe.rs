//! Edge wipe between the two layers

use crate::blend::{BlendCore, BlendMode};
use crate::effect::{CompletionCallback, TransitionEffect};
use crate::layer::LayerStack;
use serde::{Deserialize, Serialize};
use vista_core::ImageHandle;

/// Screen edge the incoming image is revealed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WipeEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Default for WipeEdge {
    fn default() -> Self {
        Self::Left
    }
}

impl WipeEdge {
    /// Visible rectangle of the incoming layer as `[x, y, width, height]`
    /// fractions of the screen, for a given reveal fraction
    pub fn visible_rect(self, reveal: f32) -> [f32; 4] {
        let r = reveal.clamp(0.0, 1.0);
        match self {
            Self::Left => [0.0, 0.0, r, 1.0],
            Self::Right => [1.0 - r, 0.0, r, 1.0],
            Self::Top => [0.0, 0.0, 1.0, r],
            Self::Bottom => [0.0, 1.0 - r, 1.0, r],
        }
    }
}

/// Reveals the incoming layer from one edge.
///
/// Uses the same layer pair and run lifecycle as the fade. The incoming layer
/// is opaque for the whole run and its `reveal` fraction grows from 0 to 1.
#[derive(Debug)]
pub struct WipeTransition {
    core: BlendCore,
    edge: WipeEdge,
}

impl WipeTransition {
    /// Create a wipe from `edge`
    pub fn new(edge: WipeEdge, seconds: f32) -> Self {
        Self {
            core: BlendCore::new(BlendMode::Reveal, seconds),
            edge,
        }
    }

    /// Edge the reveal starts from
    pub fn edge(&self) -> WipeEdge {
        self.edge
    }

    /// Change the reveal edge (takes effect immediately)
    pub fn set_edge(&mut self, edge: WipeEdge) {
        self.edge = edge;
    }

    /// Visible rectangle of the front layer
    pub fn front_rect(&self) -> [f32; 4] {
        self.edge.visible_rect(self.core.layers().front().reveal)
    }
}

impl TransitionEffect for WipeTransition {
    fn name(&self) -> &'static str {
        "wipe"
    }

    fn set_target(&mut self, image: Option<ImageHandle>) {
        self.core.set_target(image);
    }

    fn set_duration(&mut self, seconds: f32) {
        self.core.set_duration(seconds);
    }

    fn duration(&self) -> f32 {
        self.core.timeline().duration()
    }

    fn display_immediately(&mut self, image: Option<ImageHandle>) {
        self.core.display_immediately(image);
    }

    fn begin(&mut self, on_complete: Option<CompletionCallback>) {
        self.core.begin(on_complete);
    }

    fn update(&mut self, delta_seconds: f32) {
        self.core.update(delta_seconds);
    }

    fn cancel(&mut self) {
        self.core.cancel();
    }

    fn is_running(&self) -> bool {
        self.core.is_running()
    }

    fn layers(&self) -> &LayerStack {
        self.core.layers()
    }
}
