// ABOUTME: Host compositor abstraction.
// ABOUTME: The minimal surface a rendering framework supplies for stacks and frames.

use egrid_core::{Alignment, Axis, Size};

/// Composition primitives supplied by the host rendering framework.
///
/// The arranger builds its entire output through these three operations.
/// `Node` is whatever renderable handle the host works with; the arranger
/// never looks inside one.
pub trait Compositor {
    type Node;

    /// Arrange `children` sequentially along `axis`, separated by `spacing`
    /// and placed on the cross axis by `alignment`.
    fn stack(
        &mut self,
        axis: Axis,
        spacing: f32,
        alignment: Alignment,
        children: Vec<Self::Node>,
    ) -> Self::Node;

    /// Bound `child` to at most `max` in both dimensions.
    fn max_frame(&mut self, child: Self::Node, max: Size) -> Self::Node;

    /// Pin `child`'s container to exactly `size`.
    fn fixed_frame(&mut self, child: Self::Node, size: Size) -> Self::Node;
}
