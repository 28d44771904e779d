//! Linearly spaced sampling grids and raw-slice vector validation.

use crate::parameters::ParameterError;
use nalgebra::Vector3;

/// `num` evenly spaced values over `[start, stop]`, both endpoints included.
///
/// With `num == 1` only `start` is returned; `num == 0` gives an empty grid.
/// The final element is pinned to `stop` exactly rather than accumulated from
/// the step, so endpoint comparisons stay exact.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut grid: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            grid[num - 1] = stop;
            grid
        }
    }
}

/// [`linspace`] truncated to integers, for grids of model orders.
pub fn linspace_usize(start: f64, stop: f64, num: usize) -> Vec<usize> {
    linspace(start, stop, num)
        .into_iter()
        .map(|v| v as usize)
        .collect()
}

/// Build a reduced wave vector from a raw slice, rejecting anything but three
/// components with [`ParameterError::InvalidDimension`].
pub fn q_vector_from(components: &[f64]) -> Result<Vector3<f64>, ParameterError> {
    vector3_from("reduced_q_vector", components)
}

pub(crate) fn vector3_from(
    field: &'static str,
    components: &[f64],
) -> Result<Vector3<f64>, ParameterError> {
    match components {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(ParameterError::InvalidDimension {
            field,
            expected: 3,
            found: components.len(),
        }),
    }
}

/// Default grid of candidate MEM model orders: 100 integers spaced 40 → 2000.
pub(crate) fn default_mem_scan_range() -> Vec<usize> {
    linspace_usize(40.0, 2000.0, 100)
}

/// Default frequency sampling grid: 500 frequencies spaced 0 → 40 THz.
pub(crate) fn default_frequency_range() -> Vec<f64> {
    linspace(0.0, 40.0, 500)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_endpoints_are_exact() {
        let grid = linspace(0.0, 40.0, 500);
        assert_eq!(grid.len(), 500);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[499], 40.0);
    }

    #[test]
    fn linspace_is_evenly_spaced() {
        let grid = linspace(0.0, 1.0, 5);
        assert_eq!(grid.len(), 5);
        for (i, v) in grid.iter().enumerate() {
            assert_relative_eq!(*v, 0.25 * i as f64, max_relative = 1e-12);
        }
    }

    #[test]
    fn linspace_degenerate_lengths() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(3.0, 7.0, 2), vec![3.0, 7.0]);
    }

    #[test]
    fn default_frequency_grid_is_strictly_increasing() {
        let grid = default_frequency_range();
        assert_eq!(grid.len(), 500);
        assert_eq!(grid[0], 0.0);
        assert_eq!(*grid.last().unwrap(), 40.0);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn default_scan_grid_shape() {
        let grid = default_mem_scan_range();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 40);
        assert_eq!(*grid.last().unwrap(), 2000);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_usize_truncates_toward_zero() {
        // 0, 0.75, 1.5, 2.25, 3 truncate to 0, 0, 1, 2, 3
        assert_eq!(linspace_usize(0.0, 3.0, 5), vec![0, 0, 1, 2, 3]);
    }

    #[test]
    fn q_vector_needs_three_components() {
        let q = q_vector_from(&[0.5, 0.0, 0.5]).unwrap();
        assert_eq!(q, Vector3::new(0.5, 0.0, 0.5));

        assert_eq!(
            q_vector_from(&[0.5, 0.0]),
            Err(ParameterError::InvalidDimension {
                field: "reduced_q_vector",
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            q_vector_from(&[0.0; 4]),
            Err(ParameterError::InvalidDimension {
                field: "reduced_q_vector",
                expected: 3,
                found: 4
            })
        );
    }
}
