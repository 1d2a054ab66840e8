use nalgebra as na;

use crate::error::Error;

/// Validated, immutable set of permitted travel directions.
///
/// Components are restricted to {-1, 0, 1}: the set names coarse headings
/// (axes and diagonals), not calibrated velocities. Only the sign of the
/// dot product against a displacement is ever inspected, so the vectors
/// need no normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionSet {
    vectors: Vec<na::Vector2<i32>>,
}

impl DirectionSet {
    pub fn new<I>(vectors: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let vectors: Vec<_> = vectors
            .into_iter()
            .map(|(x, y)| na::Vector2::new(x, y))
            .collect();

        if vectors.is_empty() {
            return Err(Error::EmptyDirectionSet);
        }

        for v in &vectors {
            if v.x.abs() > 1 || v.y.abs() > 1 {
                return Err(Error::InvalidDirectionComponent(v.x, v.y));
            }
        }

        Ok(Self { vectors })
    }

    /// Traffic approaching the camera: down and both down-diagonals.
    pub fn incoming() -> Self {
        Self {
            vectors: vec![
                na::Vector2::new(0, 1),
                na::Vector2::new(1, 1),
                na::Vector2::new(-1, 1),
            ],
        }
    }

    /// Traffic receding from the camera: up and both up-diagonals.
    pub fn outgoing() -> Self {
        Self {
            vectors: vec![
                na::Vector2::new(0, -1),
                na::Vector2::new(1, -1),
                na::Vector2::new(-1, -1),
            ],
        }
    }

    /// Single-axis set, y only. Subsumes the old incoming/outgoing
    /// heuristic that compared previous and current center y.
    pub fn downward() -> Self {
        Self {
            vectors: vec![na::Vector2::new(0, 1)],
        }
    }

    /// Single-axis counterpart of [`DirectionSet::downward`].
    pub fn upward() -> Self {
        Self {
            vectors: vec![na::Vector2::new(0, -1)],
        }
    }

    /// Whether the movement has a non-negative component of alignment with
    /// at least one permitted direction. Movement exactly perpendicular to
    /// every permitted direction (zero dot product) conforms.
    #[inline]
    pub fn conforms(&self, movement: na::Vector2<i32>) -> bool {
        self.vectors.iter().any(|e| movement.dot(e) >= 0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &na::Vector2<i32>> {
        self.vectors.iter()
    }
}
