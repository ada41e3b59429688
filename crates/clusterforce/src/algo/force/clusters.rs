use crate::points::Placeable;
use indexmap::IndexMap;
use nalgebra::Vector2;
use rustc_hash::FxBuildHasher;

/// Cluster membership resolved once per run. Groups are kept in first-seen order, members in
/// input order, so centroid sums always accumulate in the same order.
#[derive(Debug, Clone)]
pub(crate) struct ClusterIndex {
    groups: Vec<Vec<usize>>,
}

impl ClusterIndex {
    pub(crate) fn from_points<T: Placeable>(points: &[T]) -> Self {
        let mut by_id: IndexMap<&T::ClusterId, Vec<usize>, FxBuildHasher> = IndexMap::default();
        for (idx, p) in points.iter().enumerate() {
            by_id.entry(p.cluster_id()).or_default().push(idx);
        }
        Self {
            groups: by_id.into_values().collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }
}

/// Mean of the member positions. Each term is divided before summing so members near
/// `f64::MAX` cannot overflow the accumulator.
pub(crate) fn centroid(members: &[usize], positions: &[Vector2<f64>]) -> Vector2<f64> {
    let n = members.len() as f64;
    let mut mean = Vector2::zeros();
    for &idx in members {
        mean += positions[idx] / n;
    }
    mean
}

#[cfg(test)]
mod tests {
    use super::{ClusterIndex, centroid};
    use crate::points::Point;
    use nalgebra::Vector2;

    #[test]
    fn groups_follow_first_seen_order_for_sparse_labels() {
        let points = vec![
            Point::new(0.0, 0.0, 42),
            Point::new(1.0, 0.0, -7),
            Point::new(2.0, 0.0, 42),
            Point::new(3.0, 0.0, 1000),
            Point::new(4.0, 0.0, -7),
        ];
        let index = ClusterIndex::from_points(&points);
        assert_eq!(index.len(), 3);
        assert_eq!(index.groups(), &[vec![0, 2], vec![1, 4], vec![3]]);
    }

    #[test]
    fn string_labels_group_by_equality() {
        let points = vec![
            Point::new(0.0, 0.0, "news".to_string()),
            Point::new(0.0, 0.0, "events".to_string()),
            Point::new(0.0, 0.0, "news".to_string()),
        ];
        let index = ClusterIndex::from_points(&points);
        assert_eq!(index.groups(), &[vec![0, 2], vec![1]]);
    }

    #[test]
    fn centroid_is_member_mean() {
        let positions = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(100.0, 100.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(5.0, 9.0),
        ];
        let c = centroid(&[0, 2, 3], &positions);
        assert!((c.x - 5.0).abs() < 1e-12);
        assert!((c.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_of_extreme_members_is_finite() {
        let positions = vec![
            Vector2::new(f64::MAX, -f64::MAX),
            Vector2::new(f64::MAX, -f64::MAX),
            Vector2::new(0.0, 0.0),
        ];
        assert_eq!(
            centroid(&[0, 1], &positions),
            Vector2::new(f64::MAX, -f64::MAX)
        );
        let c = centroid(&[0, 2], &positions);
        assert!(c.x.is_finite() && c.y.is_finite());
        assert_eq!(c.x, f64::MAX / 2.0);
    }
}
