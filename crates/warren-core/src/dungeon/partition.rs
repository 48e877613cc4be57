//! Recursive binary space partitioning of the dungeon bounds.
//!
//! A FIFO worklist of rectangles is split until every piece is too small
//! to divide further. Sibling rectangles share a one-tile boundary strip
//! (the first child is one tile larger along the split axis), which is
//! what later lets the connectivity builder detect wall-sharing
//! neighbours by plain rectangle intersection.

use std::collections::VecDeque;

use crate::geom::Rect;
use crate::rng::GenRng;

/// Split axis, chosen to bias toward squarer rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitAxis {
    Horizontal,
    Vertical,
}

/// Partition `bounds` into non-overlapping rooms (modulo the shared
/// one-tile boundary strips).
///
/// Each attempt draws a fresh minimum size from `[min_room.0, min_room.1)`;
/// a rectangle is final once both halves of it would fall below that
/// minimum. Every split strictly shrinks the cut axis, so the worklist
/// always drains.
pub fn partition(bounds: Rect, min_room: (i32, i32), rng: &mut GenRng) -> Vec<Rect> {
    let mut pending = VecDeque::new();
    pending.push_back(bounds);
    let mut done = Vec::new();

    while let Some(rect) = pending.pop_front() {
        let min = rng.range(min_room.0, min_room.1);

        if rect.width / 2 < min && rect.height / 2 < min {
            done.push(rect);
            continue;
        }

        let axis = if rect.height >= rect.width {
            SplitAxis::Horizontal
        } else {
            SplitAxis::Vertical
        };

        match axis {
            SplitAxis::Horizontal => {
                let cut = rng.range(min, rect.height - min);
                pending.push_back(Rect::new(rect.x, rect.y, rect.width, cut + 1));
                pending.push_back(Rect::new(rect.x, rect.y + cut, rect.width, rect.height - cut));
            }
            SplitAxis::Vertical => {
                let cut = rng.range(min, rect.width - min);
                pending.push_back(Rect::new(rect.x, rect.y, cut + 1, rect.height));
                pending.push_back(Rect::new(rect.x + cut, rect.y, rect.width - cut, rect.height));
            }
        }
    }

    done
}
