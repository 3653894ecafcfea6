//! Tessellation options for a cabinet build, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::CabinetError;

/// Density settings for curved parts. They never change dimensions.
///
/// ```toml
/// round_segments = 24
/// sphere_rings = 12
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildOptions {
    /// Sides of cylinders and round trim.
    pub round_segments: usize,
    /// Longitudinal segments of UV spheres.
    pub sphere_segments: usize,
    /// Latitudinal rings of UV spheres.
    pub sphere_rings: usize,
    /// Segments around a torus ring.
    pub torus_major_segments: usize,
    /// Segments around a torus tube.
    pub torus_minor_segments: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            round_segments: 32,
            sphere_segments: 32,
            sphere_rings: 16,
            torus_major_segments: 48,
            torus_minor_segments: 12,
        }
    }
}

impl BuildOptions {
    /// Parse options from TOML; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CabinetError> {
        let options: Self =
            toml::from_str(content).map_err(|e| CabinetError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CabinetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject densities too low to form a closed shape.
    pub fn validate(&self) -> Result<(), CabinetError> {
        let checks = [
            ("round_segments", self.round_segments),
            ("sphere_segments", self.sphere_segments),
            ("sphere_rings", self.sphere_rings),
            ("torus_major_segments", self.torus_major_segments),
            ("torus_minor_segments", self.torus_minor_segments),
        ];
        match checks.iter().find(|(_, v)| *v < 3) {
            Some((key, v)) => Err(CabinetError::Config(format!(
                "{key} = {v}, at least 3 required"
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BuildOptions::default();
        assert_eq!(options.round_segments, 32);
        assert_eq!(options.sphere_segments, 32);
        assert_eq!(options.sphere_rings, 16);
        assert_eq!(options.torus_major_segments, 48);
        assert_eq!(options.torus_minor_segments, 12);
        options.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options = BuildOptions::from_toml_str("round_segments = 12\n").unwrap();
        assert_eq!(options.round_segments, 12);
        assert_eq!(options.sphere_rings, 16);
        assert_eq!(BuildOptions::from_toml_str("").unwrap(), BuildOptions::default());
    }

    #[test]
    fn test_rejects_low_density() {
        let err = BuildOptions::from_toml_str("sphere_rings = 2").unwrap_err();
        assert!(matches!(err, CabinetError::Config(msg) if msg.contains("sphere_rings")));
    }

    #[test]
    fn test_rejects_unknown_and_malformed_keys() {
        assert!(matches!(
            BuildOptions::from_toml_str("round_segmnets = 8"),
            Err(CabinetError::Config(_))
        ));
        assert!(matches!(
            BuildOptions::from_toml_str("round_segments = \"many\""),
            Err(CabinetError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BuildOptions::load("/nonexistent/cabforge.toml").unwrap_err();
        assert!(matches!(err, CabinetError::Io(_)));
    }
}
