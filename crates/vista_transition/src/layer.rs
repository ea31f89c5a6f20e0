//! Two-slot layer buffer
//!
//! The stack always holds exactly two layers. The one with the higher z-order
//! is the *front*; the other is the *back*. When no transition is running the
//! front layer is fully opaque and the back layer fully transparent, and the
//! back layer keeps the previously shown image.

use vista_core::ImageHandle;

/// Z-order of the front layer
pub const TOP_Z: u8 = 1;
/// Z-order of the back layer
pub const BOTTOM_Z: u8 = 0;

/// One slot of the double buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Image shown by this layer (`None` renders nothing)
    pub image: Option<ImageHandle>,
    /// Opacity in `0.0..=1.0`
    pub alpha: f32,
    /// Revealed fraction in `0.0..=1.0`, used by edge wipes
    pub reveal: f32,
    /// Draw order, higher is on top
    pub z_order: u8,
}

impl Layer {
    fn new(alpha: f32, z_order: u8) -> Self {
        Self {
            image: None,
            alpha,
            reveal: 1.0,
            z_order,
        }
    }
}

/// Index of a layer inside a [`LayerStack`]
pub type LayerIndex = usize;

/// Front/back layer pair
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    layers: [Layer; 2],
}

impl LayerStack {
    /// Create a stack with an empty, opaque front layer and a transparent back layer
    pub fn new() -> Self {
        Self {
            layers: [Layer::new(1.0, TOP_Z), Layer::new(0.0, BOTTOM_Z)],
        }
    }

    /// Both layers in slot order
    pub fn layers(&self) -> &[Layer; 2] {
        &self.layers
    }

    /// Get a layer by index
    pub fn layer(&self, index: LayerIndex) -> &Layer {
        &self.layers[index & 1]
    }

    /// Get a mutable layer by index
    pub fn layer_mut(&mut self, index: LayerIndex) -> &mut Layer {
        &mut self.layers[index & 1]
    }

    /// Index of the layer drawn on top
    pub fn front_index(&self) -> LayerIndex {
        if self.layers[0].z_order >= self.layers[1].z_order {
            0
        } else {
            1
        }
    }

    /// Index of the layer drawn underneath
    pub fn back_index(&self) -> LayerIndex {
        1 - self.front_index()
    }

    /// Layer drawn on top
    pub fn front(&self) -> &Layer {
        self.layer(self.front_index())
    }

    /// Layer drawn underneath
    pub fn back(&self) -> &Layer {
        self.layer(self.back_index())
    }

    /// Put `index` on top and the other layer underneath
    pub fn raise(&mut self, index: LayerIndex) {
        let index = index & 1;
        self.layers[index].z_order = TOP_Z;
        self.layers[1 - index].z_order = BOTTOM_Z;
    }

    /// Image currently visible once the stack is at rest
    pub fn visible_image(&self) -> Option<&ImageHandle> {
        self.front().image.as_ref()
    }

    /// Check the at-rest invariant: opaque, fully revealed front over a
    /// transparent back
    pub fn is_settled(&self) -> bool {
        let front = self.front();
        let back = self.back();
        front.z_order > back.z_order
            && front.alpha == 1.0
            && front.reveal == 1.0
            && back.alpha == 0.0
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_settled() {
        let stack = LayerStack::new();
        assert!(stack.is_settled());
        assert_eq!(stack.front_index(), 0);
        assert_eq!(stack.back_index(), 1);
        assert!(stack.visible_image().is_none());
    }

    #[test]
    fn test_raise_swaps_order() {
        let mut stack = LayerStack::new();
        stack.raise(1);
        assert_eq!(stack.front_index(), 1);
        assert_eq!(stack.back().z_order, BOTTOM_Z);

        // Raising the front again changes nothing
        stack.raise(1);
        assert_eq!(stack.front_index(), 1);
    }

    #[test]
    fn test_settled_requires_transparent_back() {
        let mut stack = LayerStack::new();
        let back = stack.back_index();
        stack.layer_mut(back).alpha = 1.0;
        assert!(!stack.is_settled());
    }
}
