//! Cross-fade between the two layers

use crate::blend::{BlendCore, BlendMode};
use crate::effect::{CompletionCallback, TransitionEffect};
use crate::layer::LayerStack;
use vista_core::ImageHandle;

/// Default fade length in seconds
pub const DEFAULT_FADE_DURATION: f32 = 1.0;

/// Fades the incoming layer in over the outgoing one.
///
/// The incoming layer is raised above the outgoing layer when a run begins and
/// its alpha goes linearly from 0 to 1 over the duration, sampled once per
/// [`update`](TransitionEffect::update). The outgoing layer stays opaque
/// underneath until the run completes, then drops to alpha 0.
#[derive(Debug)]
pub struct FadeTransition {
    core: BlendCore,
}

impl FadeTransition {
    /// Create a fade with the default duration
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_FADE_DURATION)
    }

    /// Create a fade with the given duration
    pub fn with_duration(seconds: f32) -> Self {
        Self {
            core: BlendCore::new(BlendMode::Alpha, seconds),
        }
    }

    /// Seconds accumulated by the in-flight run
    pub fn elapsed(&self) -> f32 {
        self.core.timeline().elapsed()
    }

    /// Number of runs that completed
    pub fn completed_runs(&self) -> u64 {
        self.core.timeline().completed_runs()
    }
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionEffect for FadeTransition {
    fn name(&self) -> &'static str {
        "fade"
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
