//! Instant cut

use crate::effect::{CompletionCallback, TransitionEffect};
use crate::layer::LayerStack;
use vista_core::ImageHandle;

/// Swaps the layers with no animation.
///
/// A run completes inside [`begin`](TransitionEffect::begin) whatever the
/// configured duration, so this effect is never observed running.
#[derive(Debug, Default)]
pub struct CutTransition {
    layers: LayerStack,
    /// Kept only so `duration()` round-trips configuration
    duration: f32,
}

impl CutTransition {
    /// Create a cut
    pub fn new() -> Self {
        Self::default()
    }

    fn settle(&mut self, target: usize) {
        let outgoing = 1 - target;
        let layer = self.layers.layer_mut(target);
        layer.alpha = 1.0;
        layer.reveal = 1.0;
        self.layers.layer_mut(outgoing).alpha = 0.0;
        self.layers.raise(target);
    }
}

impl TransitionEffect for CutTransition {
    fn name(&self) -> &'static str {
        "cut"
    }

    fn set_target(&mut self, image: Option<ImageHandle>) {
        let back = self.layers.back_index();
        self.layers.layer_mut(back).image = image;
    }

    fn set_duration(&mut self, seconds: f32) {
        self.duration = if seconds.is_nan() { 0.0 } else { seconds.max(0.0) };
    }

    fn duration(&self) -> f32 {
        self.duration
    }

    fn display_immediately(&mut self, image: Option<ImageHandle>) {
        self.set_target(image);
        let back = self.layers.back_index();
        self.settle(back);
    }

    fn begin(&mut self, on_complete: Option<CompletionCallback>) {
        let back = self.layers.back_index();
        self.settle(back);
        if let Some(callback) = on_complete {
            callback();
        }
    }

    fn update(&mut self, _delta_seconds: f32) {}

    fn cancel(&mut self) {}

    fn is_running(&self) -> bool {
        false
    }

    fn layers(&self) -> &LayerStack {
        &self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_cut_completes_in_begin() {
        let mut cut = CutTransition::new();
        cut.set_duration(5.0);
        cut.display_immediately(Some(ImageHandle::new("a")));
        cut.set_target(Some(ImageHandle::new("b")));

        let fired = Rc::new(Cell::new(false));
        let fired_clone = fired.clone();
        cut.begin(Some(Box::new(move || fired_clone.set(true))));

        assert!(fired.get());
        assert!(cut.layers().is_settled());
        assert_eq!(cut.layers().visible_image(), Some(&ImageHandle::new("b")));
        assert_eq!(cut.layers().back().image, Some(ImageHandle::new("a")));
        assert_eq!(cut.duration(), 5.0);
    }
}
