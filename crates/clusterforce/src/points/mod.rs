use crate::error::{Error, Result};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub(crate) fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub(crate) fn from_vector(v: &Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Per-point velocity carried between simulation steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub fn speed(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub(crate) fn from_vector(v: &Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A laid-out item: a 2-D position plus the cluster it belongs to.
///
/// The serde shape matches the records emitted by the embedding pipeline
/// (`{"embedding": {"x": .., "y": ..}, "clusterId": ..}`); `position` is accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point<C> {
    #[serde(alias = "embedding")]
    pub position: Position,
    pub cluster_id: C,
}

impl<C> Point<C> {
    pub fn new(x: f64, y: f64, cluster_id: C) -> Self {
        Self {
            position: Position { x, y },
            cluster_id,
        }
    }
}

/// Records the layout engine can read positions and cluster labels from, and write final
/// positions back into.
///
/// Cluster labels are opaque; only equality is used to group points.
pub trait Placeable {
    type ClusterId: std::hash::Hash + Eq;

    fn position(&self) -> Position;
    fn set_position(&mut self, position: Position);
    fn cluster_id(&self) -> &Self::ClusterId;
}

impl<C: std::hash::Hash + Eq> Placeable for Point<C> {
    type ClusterId = C;

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn cluster_id(&self) -> &C {
        &self.cluster_id
    }
}

/// Rejects inputs the simulation cannot start from: an empty set, or NaN/Infinity coordinates.
pub(crate) fn validate<T: Placeable>(points: &[T]) -> Result<()> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }
    for (index, p) in points.iter().enumerate() {
        let pos = p.position();
        if !pos.is_finite() {
            return Err(Error::NonFinitePosition {
                index,
                x: pos.x,
                y: pos.y,
            });
        }
    }
    Ok(())
}
