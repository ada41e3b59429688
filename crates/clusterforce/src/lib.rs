#![forbid(unsafe_code)]

//! Headless cluster-aware force-directed layout.
//!
//! `clusterforce` post-processes 2-D embeddings that already carry a cluster label: every point
//! is pulled toward its own cluster's centroid while all points repel each other, which spreads
//! clusters apart for display. The simulation runs a fixed number of damped, speed-capped steps
//! and is deterministic for identical inputs.

pub mod algo;
pub mod error;
pub mod points;

pub use algo::LayoutOptions;
pub use algo::force::{Simulation, layout_in_place};
pub use error::{Error, Result};
pub use points::{Placeable, Point, Position, Velocity};

/// Headless layout entry point.
pub fn layout<T: Placeable>(points: &[T], opts: &LayoutOptions) -> Result<Vec<Position>> {
    algo::force::layout(points, opts)
}
