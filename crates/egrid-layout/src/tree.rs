// ABOUTME: Reference layout tree for composed grids.
// ABOUTME: Materializes compositor output and resolves absolute cell rectangles.

use std::marker::PhantomData;

use egrid_core::{Alignment, Axis, Rect, Size};

use crate::compositor::Compositor;

/// A composed layout node.
///
/// The output of [`TreeCompositor`]: a plain tree that hosts without a
/// retained view hierarchy can walk, and that tests assert against.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<L> {
    /// An opaque child element.
    Leaf(L),
    /// Children laid out sequentially along an axis.
    Stack {
        axis: Axis,
        spacing: f32,
        alignment: Alignment,
        children: Vec<Element<L>>,
    },
    /// Bounds the child to at most `max` in both dimensions.
    MaxFrame { max: Size, child: Box<Element<L>> },
    /// Pins the child's container to exactly `size`.
    FixedFrame { size: Size, child: Box<Element<L>> },
}

/// Compositor producing [`Element`] trees.
#[derive(Debug)]
pub struct TreeCompositor<L> {
    _marker: PhantomData<L>,
}

impl<L> TreeCompositor<L> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<L> Default for TreeCompositor<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Compositor for TreeCompositor<L> {
    type Node = Element<L>;

    fn stack(
        &mut self,
        axis: Axis,
        spacing: f32,
        alignment: Alignment,
        children: Vec<Element<L>>,
    ) -> Element<L> {
        Element::Stack {
            axis,
            spacing,
            alignment,
            children,
        }
    }

    fn max_frame(&mut self, child: Element<L>, max: Size) -> Element<L> {
        Element::MaxFrame {
            max,
            child: Box::new(child),
        }
    }

    fn fixed_frame(&mut self, child: Element<L>, size: Size) -> Element<L> {
        Element::FixedFrame {
            size,
            child: Box::new(child),
        }
    }
}

/// Measure the size `node` occupies when offered `available` space.
///
/// Opaque leaves fill what they are offered; frames cap or replace the
/// offer; stacks sum children along the main axis and take the cross-axis
/// maximum. An empty stack measures zero.
fn measure<L>(node: &Element<L>, available: Size) -> Size {
    match node {
        Element::Leaf(_) => available,
        Element::MaxFrame { max, .. } => available.min(*max),
        Element::FixedFrame { size, .. } => *size,
        Element::Stack {
            axis,
            spacing,
            children,
            ..
        } => {
            let mut main = 0.0;
            let mut cross: f32 = 0.0;
            for child in children {
                let size = measure(child, available);
                match axis {
                    Axis::Horizontal => {
                        main += size.width;
                        cross = cross.max(size.height);
                    }
                    Axis::Vertical => {
                        main += size.height;
                        cross = cross.max(size.width);
                    }
                }
            }
            if !children.is_empty() {
                main += spacing * (children.len() - 1) as f32;
            }
            match axis {
                Axis::Horizontal => Size::new(main, cross),
                Axis::Vertical => Size::new(cross, main),
            }
        }
    }
}

fn place<'a, L>(node: &'a Element<L>, frame: Rect, out: &mut Vec<(Rect, &'a L)>) {
    match node {
        Element::Leaf(value) => out.push((frame, value)),
        // measure() already capped the frame handed to a max frame
        Element::MaxFrame { child, .. } => place(child, frame, out),
        Element::FixedFrame { size, child } => {
            let inner = measure(child, *size);
            let inner_frame = Rect::new(
                frame.x + (size.width - inner.width) * 0.5,
                frame.y + (size.height - inner.height) * 0.5,
                inner.width,
                inner.height,
            );
            place(child, inner_frame, out);
        }
        Element::Stack {
            axis,
            spacing,
            alignment,
            children,
        } => {
            let mut cursor = match axis {
                Axis::Horizontal => frame.x,
                Axis::Vertical => frame.y,
            };
            for child in children {
                let size = measure(child, frame.size());
                let rect = match axis {
                    Axis::Horizontal => {
                        let y = frame.y + (frame.height - size.height) * alignment.factor();
                        let rect = Rect::new(cursor, y, size.width, size.height);
                        cursor += size.width + spacing;
                        rect
                    }
                    Axis::Vertical => {
                        let x = frame.x + (frame.width - size.width) * alignment.factor();
                        let rect = Rect::new(x, cursor, size.width, size.height);
                        cursor += size.height + spacing;
                        rect
                    }
                };
                place(child, rect, out);
            }
        }
    }
}

/// Resolve the absolute rectangle of every leaf under `root`.
///
/// `container` is the space offered to the root node. Leaves come back in
/// composition order together with their payloads.
pub fn resolve<L>(root: &Element<L>, container: Size) -> Vec<(Rect, &L)> {
    let size = measure(root, container);
    let mut out = Vec::new();
    place(root, Rect::new(0.0, 0.0, size.width, size.height), &mut out);
    out
}
