//! The [`ParameterSet`] settings record and its validation error type.

use crate::bands::{default_band_ranges, BandSegment};
use crate::ranges::{default_frequency_range, default_mem_scan_range};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Error type for parameter validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Legacy integer selector outside the enumerated variants
    InvalidEnumValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected selector value
        value: u8,
    },
    /// A sampling grid was set to a zero-length sequence
    EmptyRange {
        /// Name of the offending field
        field: &'static str,
    },
    /// A raw vector input has the wrong number of components
    InvalidDimension {
        /// Name of the offending field
        field: &'static str,
        /// Required component count
        expected: usize,
        /// Component count actually supplied
        found: usize,
    },
    /// A count field was set to zero
    NotPositive {
        /// Name of the offending field
        field: &'static str,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::InvalidEnumValue { field, value } => {
                write!(f, "{field}: no variant with selector {value}")
            }
            ParameterError::EmptyRange { field } => {
                write!(f, "{field}: sampling grid must not be empty")
            }
            ParameterError::InvalidDimension {
                field,
                expected,
                found,
            } => {
                write!(f, "{field}: expected {expected} components, found {found}")
            }
            ParameterError::NotPositive { field } => {
                write!(f, "{field}: must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Numeric integration rule used when accumulating correlation functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IntegrationMethod {
    /// Trapezoid rule
    Trapezoid,
    /// Rectangle (midpoint) rule
    #[default]
    Rectangles,
}

impl IntegrationMethod {
    /// Legacy integer selector for this variant (0: trapezoid, 1: rectangles).
    pub fn index(self) -> u8 {
        self.into()
    }
}

impl TryFrom<u8> for IntegrationMethod {
    type Error = ParameterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(IntegrationMethod::Trapezoid),
            1 => Ok(IntegrationMethod::Rectangles),
            _ => Err(ParameterError::InvalidEnumValue {
                field: "integration_method",
                value,
            }),
        }
    }
}

impl From<IntegrationMethod> for u8 {
    fn from(method: IntegrationMethod) -> Self {
        match method {
            IntegrationMethod::Trapezoid => 0,
            IntegrationMethod::Rectangles => 1,
        }
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationMethod::Trapezoid => write!(f, "trapezoid"),
            IntegrationMethod::Rectangles => write!(f, "rectangles"),
        }
    }
}

/// Estimation algorithm used to compute power spectra.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PowerSpectraAlgorithm {
    /// Direct correlation functions, parallelized over atoms
    CorrelationParallel,
    /// Maximum Entropy Method fit, parallelized over atoms
    #[default]
    MaximumEntropyParallel,
}

impl PowerSpectraAlgorithm {
    /// Legacy integer selector for this variant (0: correlation, 1: MEM).
    pub fn index(self) -> u8 {
        self.into()
    }
}

impl TryFrom<u8> for PowerSpectraAlgorithm {
    type Error = ParameterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PowerSpectraAlgorithm::CorrelationParallel),
            1 => Ok(PowerSpectraAlgorithm::MaximumEntropyParallel),
            _ => Err(ParameterError::InvalidEnumValue {
                field: "power_spectra_algorithm",
                value,
            }),
        }
    }
}

impl From<PowerSpectraAlgorithm> for u8 {
    fn from(algorithm: PowerSpectraAlgorithm) -> Self {
        match algorithm {
            PowerSpectraAlgorithm::CorrelationParallel => 0,
            PowerSpectraAlgorithm::MaximumEntropyParallel => 1,
        }
    }
}

impl fmt::Display for PowerSpectraAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerSpectraAlgorithm::CorrelationParallel => write!(f, "correlation-parallel"),
            PowerSpectraAlgorithm::MaximumEntropyParallel => {
                write!(f, "maximum-entropy-parallel")
            }
        }
    }
}

/// Settings shared by the stages of a phonon analysis pipeline.
///
/// Every field starts from a documented default (see [`ParameterSet::default`])
/// and can be overwritten one at a time. Fields with invariants — non-empty
/// sampling grids, positive counts — are set through fallible setters that
/// validate eagerly; the rest are plain overwrites. The struct is a value type:
/// clone it to hand an independent snapshot to a concurrent pipeline stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    silent: bool,
    reduced_q_vector: Vector3<f64>,
    number_of_coefficients_mem: usize,
    mem_scan_range: Vec<usize>,
    correlation_function_step: usize,
    integration_method: IntegrationMethod,
    power_spectra_algorithm: PowerSpectraAlgorithm,
    frequency_range: Vec<f64>,
    use_nac: bool,
    band_ranges: Vec<BandSegment>,
    number_of_bins_histogram: usize,
}

impl Default for ParameterSet {
    /// All documented defaults:
    ///
    /// * `silent`: false
    /// * `reduced_q_vector`: (0, 0, 0)
    /// * `number_of_coefficients_mem`: 1000
    /// * `mem_scan_range`: 100 integer orders spaced 40 → 2000
    /// * `correlation_function_step`: 10
    /// * `integration_method`: rectangles
    /// * `power_spectra_algorithm`: maximum-entropy-parallel
    /// * `frequency_range`: 500 frequencies spaced 0 → 40
    /// * `use_nac`: false
    /// * `band_ranges`: one segment (0, 0, 0) → (0.5, 0, 0.5)
    /// * `number_of_bins_histogram`: 50
    fn default() -> Self {
        Self {
            silent: false,
            reduced_q_vector: Vector3::zeros(),
            number_of_coefficients_mem: 1000,
            mem_scan_range: default_mem_scan_range(),
            correlation_function_step: 10,
            integration_method: IntegrationMethod::default(),
            power_spectra_algorithm: PowerSpectraAlgorithm::default(),
            frequency_range: default_frequency_range(),
            use_nac: false,
            band_ranges: default_band_ranges(),
            number_of_bins_histogram: 50,
        }
    }
}

impl ParameterSet {
    /// Whether downstream engines should suppress diagnostic output.
    pub fn silent(&self) -> bool {
        self.silent
    }

    /// Overwrite the diagnostic-suppression flag.
    pub fn set_silent(&mut self, silent: bool) {
        self.silent = silent;
    }

    /// Wave vector in reduced coordinates selecting the mode to project on.
    pub fn reduced_q_vector(&self) -> Vector3<f64> {
        self.reduced_q_vector
    }

    /// Overwrite the reduced wave vector.
    pub fn set_reduced_q_vector(&mut self, q_vector: Vector3<f64>) {
        self.reduced_q_vector = q_vector;
    }

    /// Order of the Maximum Entropy Method model.
    pub fn number_of_coefficients_mem(&self) -> usize {
        self.number_of_coefficients_mem
    }

    /// Overwrite the MEM model order. Rejects zero.
    pub fn set_number_of_coefficients_mem(&mut self, count: usize) -> Result<(), ParameterError> {
        ensure_positive("number_of_coefficients_mem", count)?;
        self.number_of_coefficients_mem = count;
        Ok(())
    }

    /// Candidate MEM model orders to scan when searching for a stable fit.
    pub fn mem_scan_range(&self) -> &[usize] {
        &self.mem_scan_range
    }

    /// Overwrite the MEM scan grid. Rejects an empty grid.
    pub fn set_mem_scan_range(&mut self, orders: Vec<usize>) -> Result<(), ParameterError> {
        ensure_non_empty("mem_scan_range", &orders)?;
        self.mem_scan_range = orders;
        Ok(())
    }

    /// Sampling stride applied when accumulating correlation functions.
    pub fn correlation_function_step(&self) -> usize {
        self.correlation_function_step
    }

    /// Overwrite the correlation sampling stride. Rejects zero.
    pub fn set_correlation_function_step(&mut self, step: usize) -> Result<(), ParameterError> {
        ensure_positive("correlation_function_step", step)?;
        self.correlation_function_step = step;
        Ok(())
    }

    /// Numeric integration rule for correlation functions.
    pub fn integration_method(&self) -> IntegrationMethod {
        self.integration_method
    }

    /// Overwrite the integration rule.
    pub fn set_integration_method(&mut self, method: IntegrationMethod) {
        self.integration_method = method;
    }

    /// Estimation algorithm used for power spectra.
    pub fn power_spectra_algorithm(&self) -> PowerSpectraAlgorithm {
        self.power_spectra_algorithm
    }

    /// Overwrite the power spectra algorithm.
    pub fn set_power_spectra_algorithm(&mut self, algorithm: PowerSpectraAlgorithm) {
        self.power_spectra_algorithm = algorithm;
    }

    /// Frequency sampling grid for spectra, in THz.
    pub fn frequency_range(&self) -> &[f64] {
        &self.frequency_range
    }

    /// Overwrite the frequency grid. Rejects an empty grid.
    pub fn set_frequency_range(&mut self, frequencies: Vec<f64>) -> Result<(), ParameterError> {
        ensure_non_empty("frequency_range", &frequencies)?;
        self.frequency_range = frequencies;
        Ok(())
    }

    /// Whether the non-analytical correction term is applied near Gamma.
    pub fn use_nac(&self) -> bool {
        self.use_nac
    }

    /// Overwrite the non-analytical correction flag.
    pub fn set_use_nac(&mut self, use_nac: bool) {
        self.use_nac = use_nac;
    }

    /// K-path segments sampled for the dispersion diagram.
    pub fn band_ranges(&self) -> &[BandSegment] {
        &self.band_ranges
    }

    /// Overwrite the k-path.
    pub fn set_band_ranges(&mut self, segments: Vec<BandSegment>) {
        self.band_ranges = segments;
    }

    /// Number of bins used when histogramming mode quantities.
    pub fn number_of_bins_histogram(&self) -> usize {
        self.number_of_bins_histogram
    }

    /// Overwrite the histogram resolution. Rejects zero.
    pub fn set_number_of_bins_histogram(&mut self, bins: usize) -> Result<(), ParameterError> {
        ensure_positive("number_of_bins_histogram", bins)?;
        self.number_of_bins_histogram = bins;
        Ok(())
    }

    /// Re-check every invariant on an existing instance.
    ///
    /// Deserialization writes fields directly and so bypasses the setters; call
    /// this on a freshly loaded instance before handing it to a pipeline.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ensure_positive("number_of_coefficients_mem", self.number_of_coefficients_mem)?;
        ensure_positive("correlation_function_step", self.correlation_function_step)?;
        ensure_positive("number_of_bins_histogram", self.number_of_bins_histogram)?;
        ensure_non_empty("mem_scan_range", &self.mem_scan_range)?;
        ensure_non_empty("frequency_range", &self.frequency_range)?;
        debug!(
            "validated parameter set: {} scan orders, {} frequencies, {} k-path segments",
            self.mem_scan_range.len(),
            self.frequency_range.len(),
            self.band_ranges.len()
        );
        Ok(())
    }
}

fn ensure_positive(field: &'static str, value: usize) -> Result<(), ParameterError> {
    if value == 0 {
        warn!("rejected {field}: must be a positive integer");
        return Err(ParameterError::NotPositive { field });
    }
    Ok(())
}

fn ensure_non_empty<T>(field: &'static str, values: &[T]) -> Result<(), ParameterError> {
    if values.is_empty() {
        warn!("rejected {field}: sampling grid must not be empty");
        return Err(ParameterError::EmptyRange { field });
    }
    Ok(())
}
