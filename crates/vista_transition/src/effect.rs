//! The transition capability consumed by navigation

use crate::layer::LayerStack;
use vista_core::ImageHandle;

/// Invoked at most once, when a transition run completes
pub type CompletionCallback = Box<dyn FnOnce()>;

/// A visual hand-off between the currently shown image and a new one.
///
/// Implementations own a front/back layer pair and run at most one
/// transition at a time. Time only advances through [`update`], which the
/// owner calls once per scheduling tick.
///
/// Contract shared by every implementation:
/// - `begin` while a run is in flight cancels that run; its callback is
///   dropped and never invoked
/// - the callback of a run that completes is invoked exactly once, from
///   inside the `begin` or `update` call that completed it
/// - with a duration of zero, `begin` completes before it returns
/// - dropping the effect mid-run cancels the run without invoking its callback
///
/// [`update`]: TransitionEffect::update
pub trait TransitionEffect {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Assign the image the next (or current) run will reveal
    fn set_target(&mut self, image: Option<ImageHandle>);

    /// Set run length in seconds; negative values clamp to zero
    fn set_duration(&mut self, seconds: f32);

    /// Current run length in seconds
    fn duration(&self) -> f32;

    /// Show `image` at once, without a run. Used for the first view of a session.
    fn display_immediately(&mut self, image: Option<ImageHandle>);

    /// Start a run towards the current target
    fn begin(&mut self, on_complete: Option<CompletionCallback>);

    /// Advance the in-flight run by one scheduling tick
    fn update(&mut self, delta_seconds: f32);

    /// Abort the in-flight run without invoking its callback
    fn cancel(&mut self);

    /// Check if a run is in flight
    fn is_running(&self) -> bool;

    /// Read-only view of the layer pair, for renderers
    fn layers(&self) -> &LayerStack;
}
