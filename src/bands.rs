//! K-path segments for phonon dispersion diagrams.

use crate::parameters::ParameterError;
use crate::ranges::vector3_from;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One start → end leg of a k-path, both endpoints in reduced coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandSegment {
    /// Starting wave vector of the leg
    pub start: Vector3<f64>,
    /// Final wave vector of the leg
    pub end: Vector3<f64>,
}

impl BandSegment {
    /// A segment between two reduced-coordinate points.
    pub fn new(start: Vector3<f64>, end: Vector3<f64>) -> Self {
        Self { start, end }
    }

    /// Build a segment from raw endpoint slices, rejecting endpoints that are
    /// not three components long.
    pub fn from_points(start: &[f64], end: &[f64]) -> Result<Self, ParameterError> {
        Ok(Self {
            start: vector3_from("band_ranges", start)?,
            end: vector3_from("band_ranges", end)?,
        })
    }
}

/// Default k-path: a single leg from Gamma to (0.5, 0, 0.5).
pub(crate) fn default_band_ranges() -> Vec<BandSegment> {
    vec![BandSegment::new(
        Vector3::zeros(),
        Vector3::new(0.5, 0.0, 0.5),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_one_gamma_segment() {
        let path = default_band_ranges();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].start, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(path[0].end, Vector3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn from_points_checks_endpoint_dimensions() {
        let segment = BandSegment::from_points(&[0.0, 0.0, 0.0], &[0.5, 0.5, 0.5]).unwrap();
        assert_eq!(segment, BandSegment::new(Vector3::zeros(), Vector3::new(0.5, 0.5, 0.5)));

        assert_eq!(
            BandSegment::from_points(&[0.0, 0.0], &[0.5, 0.5, 0.5]),
            Err(ParameterError::InvalidDimension {
                field: "band_ranges",
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            BandSegment::from_points(&[0.0, 0.0, 0.0], &[]),
            Err(ParameterError::InvalidDimension {
                field: "band_ranges",
                expected: 3,
                found: 0
            })
        );
    }

    #[test]
    fn segments_round_trip_through_serde() {
        let segment = BandSegment::new(Vector3::new(0.5, 0.0, 0.0), Vector3::new(0.5, 0.5, 0.0));
        let json = serde_json::to_string(&segment).unwrap();
        let restored: BandSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(segment, restored);
    }
}
