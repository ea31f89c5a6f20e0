//! Shared state machine for timed double-buffered transitions

use crate::effect::CompletionCallback;
use crate::layer::{LayerIndex, LayerStack};
use crate::timeline::Timeline;
use vista_core::ImageHandle;

/// What a run animates on the incoming layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlendMode {
    /// Alpha goes 0 -> 1
    Alpha,
    /// Alpha is 1 from the start, reveal goes 0 -> 1
    Reveal,
}

/// Layer pair plus timeline, shared by fade and wipe
#[derive(Debug)]
pub(crate) struct BlendCore {
    layers: LayerStack,
    timeline: Timeline,
    mode: BlendMode,
}

impl BlendCore {
    pub(crate) fn new(mode: BlendMode, duration: f32) -> Self {
        Self {
            layers: LayerStack::new(),
            timeline: Timeline::new(duration),
            mode,
        }
    }

    pub(crate) fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub(crate) fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub(crate) fn set_duration(&mut self, seconds: f32) {
        self.timeline.set_duration(seconds);
    }

    /// The layer a run reveals: the back layer at rest, the raised layer mid-run
    fn incoming_index(&self) -> LayerIndex {
        if self.timeline.is_running() {
            self.layers.front_index()
        } else {
            self.layers.back_index()
        }
    }

    pub(crate) fn set_target(&mut self, image: Option<ImageHandle>) {
        let running = self.timeline.is_running();
        let incoming = self.incoming_index();
        let layer = self.layers.layer_mut(incoming);
        layer.image = image;
        // Mid-run retargets keep the current progress; the outgoing layer is untouched
        if !running {
            self.reset_incoming(incoming);
        }
    }

    pub(crate) fn display_immediately(&mut self, image: Option<ImageHandle>) {
        if self.timeline.cancel() {
            log::debug!("Immediate display interrupted a running transition");
        }

        let target = self.layers.back_index();
        let outgoing = 1 - target;

        let layer = self.layers.layer_mut(target);
        layer.image = image;
        layer.alpha = 1.0;
        layer.reveal = 1.0;
        self.layers.layer_mut(outgoing).alpha = 0.0;
        self.layers.raise(target);
    }

    pub(crate) fn begin(&mut self, on_complete: Option<CompletionCallback>) {
        let incoming = self.incoming_index();
        let outgoing = 1 - incoming;

        if self.timeline.start(on_complete) {
            log::debug!("Transition restarted before completion");
        }

        self.reset_incoming(incoming);
        let out = self.layers.layer_mut(outgoing);
        out.alpha = 1.0;
        out.reveal = 1.0;
        self.layers.raise(incoming);

        if self.timeline.duration() <= 0.0 {
            self.complete();
        }
    }

    pub(crate) fn update(&mut self, delta_seconds: f32) {
        let Some(progress) = self.timeline.advance(delta_seconds) else {
            return;
        };

        let incoming = self.layers.front_index();
        let layer = self.layers.layer_mut(incoming);
        match self.mode {
            BlendMode::Alpha => layer.alpha = progress,
            BlendMode::Reveal => layer.reveal = progress,
        }

        if self.timeline.is_elapsed() {
            self.complete();
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.timeline.cancel();
    }

    pub(crate) fn is_running(&self) -> bool {
        self.timeline.is_running()
    }

    fn reset_incoming(&mut self, incoming: LayerIndex) {
        let layer = self.layers.layer_mut(incoming);
        match self.mode {
            BlendMode::Alpha => {
                layer.alpha = 0.0;
                layer.reveal = 1.0;
            }
            BlendMode::Reveal => {
                layer.alpha = if self.timeline.is_running() { 1.0 } else { 0.0 };
                layer.reveal = 0.0;
            }
        }
    }

    /// Snap to the settled state, then hand the callback back to its owner
    fn complete(&mut self) {
        let incoming = self.layers.front_index();
        let outgoing = 1 - incoming;

        let layer = self.layers.layer_mut(incoming);
        layer.alpha = 1.0;
        layer.reveal = 1.0;
        self.layers.layer_mut(outgoing).alpha = 0.0;

        if let Some(callback) = self.timeline.finish() {
            callback();
        }
    }
}

impl Drop for BlendCore {
    fn drop(&mut self) {
        if self.timeline.cancel() {
            log::debug!("Transition dropped mid-run");
        }
    }
}
