//! Four-edge overflow state

use brink_platform::{ScrollElement, ScrollMetrics};
use smallvec::SmallVec;
use tracing::debug;

use crate::direction::Direction;

/// Which edges of a scroll container currently hide content
///
/// `up` means content exists above the viewport (the container can scroll
/// up); the other fields follow the same pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OverflowState {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

/// Per-direction changes between two states, in report order
pub type OverflowChanges = SmallVec<[(Direction, bool); 4]>;

impl OverflowState {
    /// Derive the state from one read of an element's geometry
    pub fn compute(metrics: &ScrollMetrics) -> Self {
        Self {
            up: metrics.scroll_top > 0.0,
            right: metrics.scroll_left < metrics.scroll_width - metrics.client_width,
            down: metrics.scroll_top < metrics.scroll_height - metrics.client_height,
            left: metrics.scroll_left > 0.0,
        }
    }

    /// Measure an element
    ///
    /// An element that can't be measured reports no overflow on any edge.
    pub fn measure<E: ScrollElement + ?Sized>(element: &E) -> Self {
        match element.scroll_metrics() {
            Ok(metrics) => Self::compute(&metrics),
            Err(err) => {
                debug!(%err, "scroll metrics unavailable, reporting no overflow");
                Self::default()
            }
        }
    }

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// Every direction with its value, in report order
    pub fn iter(self) -> impl Iterator<Item = (Direction, bool)> {
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, self.get(direction)))
    }

    /// Directions whose value differs in `next`, paired with the new value
    pub fn changes(&self, next: &OverflowState) -> OverflowChanges {
        next.iter()
            .filter(|&(direction, overflowing)| self.get(direction) != overflowing)
            .collect()
    }

    /// Directions that currently overflow
    pub fn overflowing(self) -> impl Iterator<Item = Direction> {
        self.iter()
            .filter_map(|(direction, overflowing)| overflowing.then_some(direction))
    }

    pub fn any(&self) -> bool {
        self.up || self.right || self.down || self.left
    }
}
