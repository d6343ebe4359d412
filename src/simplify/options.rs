//! Simplification options.

use crate::error::{Result, SimplifyError};
use serde::{Deserialize, Serialize};

const DEFAULT_MAX_VERTICES: usize = 200;
const DEFAULT_MIN_VERTICES: usize = 30;
const DEFAULT_MAX_ERROR: f64 = 0.05;

/// Target state for [`Simplifier::simplify_to`](super::Simplifier::simplify_to).
///
/// An absent bound is not enforced. `max_vertices` always wins: it is
/// reached even when that means going below `min_vertices` or above
/// `max_error`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StopConditions {
    /// Hard ceiling on the vertex count.
    pub max_vertices: Option<usize>,
    /// Soft floor on the vertex count.
    pub min_vertices: Option<usize>,
    /// Largest tolerated change in area, relative to the original area.
    pub max_error: Option<f64>,
}

impl StopConditions {
    /// Conditions with no bounds set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex ceiling.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = Some(max_vertices);
        self
    }

    /// Sets the vertex floor.
    pub fn with_min_vertices(mut self, min_vertices: usize) -> Self {
        self.min_vertices = Some(min_vertices);
        self
    }

    /// Sets the relative area error budget.
    pub fn with_max_error(mut self, max_error: f64) -> Self {
        self.max_error = Some(max_error);
        self
    }

    /// Checks `max_vertices >= 3` and `0 <= max_error <= 1`.
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_vertices {
            if max < 3 {
                return Err(SimplifyError::InvalidArgument(
                    "max vertices must be at least 3".into(),
                ));
            }
        }
        if let Some(err) = self.max_error {
            if !(0.0..=1.0).contains(&err) {
                return Err(SimplifyError::InvalidArgument(
                    "max error must be between 0 and 1".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Options for [`simplify_polygon`](super::simplify_polygon).
///
/// Deserializes from camelCase keys; missing keys take their defaults.
///
/// # Example
///
/// ```
/// use polyreduce::SimplifyOptions;
///
/// let options: SimplifyOptions = serde_json::from_str(r#"{"maxVertices": 50}"#).unwrap();
/// assert_eq!(options.max_vertices, 50);
/// assert_eq!(options.min_vertices, 30);
/// assert!(!options.fix_intersections);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyOptions {
    /// Result will not have more vertices than this. Must be at least 3.
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
    /// Result will not have fewer vertices than this, unless above
    /// `max_vertices`.
    #[serde(default = "default_min_vertices")]
    pub min_vertices: usize,
    /// Fraction of the original area the result may differ by, unless
    /// reaching `max_vertices` forces more. In `[0, 1]`.
    #[serde(default = "default_max_error")]
    pub max_error: f64,
    /// Rewind, skip and repair so the result does not self-intersect.
    #[serde(default)]
    pub fix_intersections: bool,
}

fn default_max_vertices() -> usize {
    DEFAULT_MAX_VERTICES
}

fn default_min_vertices() -> usize {
    DEFAULT_MIN_VERTICES
}

fn default_max_error() -> f64 {
    DEFAULT_MAX_ERROR
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            min_vertices: DEFAULT_MIN_VERTICES,
            max_error: DEFAULT_MAX_ERROR,
            fix_intersections: false,
        }
    }
}

impl SimplifyOptions {
    /// Options with the default bounds and no repair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`max_vertices`](Self::max_vertices).
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Sets [`min_vertices`](Self::min_vertices).
    pub fn with_min_vertices(mut self, min_vertices: usize) -> Self {
        self.min_vertices = min_vertices;
        self
    }

    /// Sets [`max_error`](Self::max_error).
    pub fn with_max_error(mut self, max_error: f64) -> Self {
        self.max_error = max_error;
        self
    }

    /// Sets [`fix_intersections`](Self::fix_intersections).
    pub fn with_fix_intersections(mut self, fix: bool) -> Self {
        self.fix_intersections = fix;
        self
    }

    /// Checks the bounds as [`StopConditions::validate`] does.
    pub fn validate(&self) -> Result<()> {
        self.stop_conditions().validate()
    }

    /// All three bounds, always present.
    pub fn stop_conditions(&self) -> StopConditions {
        StopConditions {
            max_vertices: Some(self.max_vertices),
            min_vertices: Some(self.min_vertices),
            max_error: Some(self.max_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SimplifyOptions::default();
        assert_eq!(options.max_vertices, 200);
        assert_eq!(options.min_vertices, 30);
        assert_eq!(options.max_error, 0.05);
        assert!(!options.fix_intersections);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = SimplifyOptions::new()
            .with_max_vertices(10)
            .with_min_vertices(4)
            .with_max_error(0.5)
            .with_fix_intersections(true);
        assert_eq!(
            options.stop_conditions(),
            StopConditions::new()
                .with_max_vertices(10)
                .with_min_vertices(4)
                .with_max_error(0.5)
        );
        assert!(options.fix_intersections);
    }

    #[test]
    fn test_validate_max_vertices() {
        let options = SimplifyOptions::new().with_max_vertices(2);
        assert!(matches!(
            options.validate(),
            Err(SimplifyError::InvalidArgument(_))
        ));
        assert!(SimplifyOptions::new().with_max_vertices(3).validate().is_ok());
    }

    #[test]
    fn test_validate_max_error() {
        assert!(SimplifyOptions::new().with_max_error(-0.1).validate().is_err());
        assert!(SimplifyOptions::new().with_max_error(1.5).validate().is_err());
        assert!(SimplifyOptions::new().with_max_error(f64::NAN).validate().is_err());
        assert!(SimplifyOptions::new().with_max_error(0.0).validate().is_ok());
        assert!(SimplifyOptions::new().with_max_error(1.0).validate().is_ok());
    }

    #[test]
    fn test_empty_conditions_are_valid() {
        assert!(StopConditions::new().validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: SimplifyOptions = serde_json::from_str(
            r#"{"maxVertices": 12, "minVertices": 5, "maxError": 0.2, "fixIntersections": true}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            SimplifyOptions::new()
                .with_max_vertices(12)
                .with_min_vertices(5)
                .with_max_error(0.2)
                .with_fix_intersections(true)
        );
    }

    #[test]
    fn test_deserialize_empty_object() {
        let options: SimplifyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SimplifyOptions::default());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&SimplifyOptions::default()).unwrap();
        assert_eq!(
            json,
            r#"{"maxVertices":200,"minVertices":30,"maxError":0.05,"fixIntersections":false}"#
        );
    }
}
