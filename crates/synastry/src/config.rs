//! Tunable parameters for a synastry analysis.
//!
//! Defaults reproduce the standard catalog; a TOML file can override orbs and
//! the other knobs:
//!
//! ```toml
//! ascendant_orb = 8.0
//! motion_step_days = 0.5
//!
//! [orb_settings]
//! conjunction = 8.0
//! quincunx = 2.0
//! ```

use crate::aspects::types::{AspectDefinition, AspectKind, ASPECT_CATALOG};
use crate::error::SynastryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Upper bound on key findings in one result.
pub const MAX_KEY_FINDINGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynastrySettings {
    /// Orb overrides per aspect id ("conjunction", "semi_sextile", ...)
    pub orb_settings: HashMap<String, f64>,
    /// Distance from the first chart's ascendant that counts as a contact
    pub ascendant_orb: f64,
    /// Extrapolation window for applying/separating, in days
    pub motion_step_days: f64,
    /// Key findings taken from the strongest aspects
    pub aspect_findings: usize,
    /// Key findings taken from angular house placements
    pub house_findings: usize,
}

impl Default for SynastrySettings {
    fn default() -> Self {
        Self {
            orb_settings: HashMap::new(),
            ascendant_orb: 10.0,
            motion_step_days: 1.0,
            aspect_findings: 3,
            house_findings: 2,
        }
    }
}

impl SynastrySettings {
    pub fn from_toml_str(text: &str) -> Result<Self, SynastryError> {
        let settings: SynastrySettings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SynastryError> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded synastry settings from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), SynastryError> {
        for (id, orb) in &self.orb_settings {
            if !ASPECT_CATALOG.iter().any(|d| d.kind.id() == id) {
                return Err(SynastryError::InvalidSettings(format!(
                    "unknown aspect in orb_settings: {}",
                    id
                )));
            }
            if !orb.is_finite() || *orb <= 0.0 || *orb > 180.0 {
                return Err(SynastryError::InvalidSettings(format!(
                    "orb for {} must be in (0, 180], got {}",
                    id, orb
                )));
            }
        }
        if !self.ascendant_orb.is_finite() || self.ascendant_orb < 0.0 || self.ascendant_orb > 180.0 {
            return Err(SynastryError::InvalidSettings(format!(
                "ascendant_orb must be in [0, 180], got {}",
                self.ascendant_orb
            )));
        }
        if !self.motion_step_days.is_finite() || self.motion_step_days <= 0.0 {
            return Err(SynastryError::InvalidSettings(format!(
                "motion_step_days must be positive, got {}",
                self.motion_step_days
            )));
        }
        if self.aspect_findings + self.house_findings > MAX_KEY_FINDINGS {
            return Err(SynastryError::InvalidSettings(format!(
                "at most {} key findings are allowed, got {} + {}",
                MAX_KEY_FINDINGS, self.aspect_findings, self.house_findings
            )));
        }
        Ok(())
    }

    /// Catalog entry for `kind` with any configured orb applied.
    pub fn definition(&self, kind: AspectKind) -> AspectDefinition {
        let mut definition = kind.definition();
        if let Some(orb) = self.orb_settings.get(kind.id()) {
            definition.max_orb = *orb;
        }
        definition
    }

    /// Full catalog with overrides applied, in catalog order.
    pub fn definitions(&self) -> Vec<AspectDefinition> {
        ASPECT_CATALOG.iter().map(|d| self.definition(d.kind)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalog() {
        let settings = SynastrySettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.definition(AspectKind::Trine).max_orb, 8.0);
        assert_eq!(settings.definitions().len(), 7);
    }

    #[test]
    fn test_orb_override_from_toml() {
        let settings = SynastrySettings::from_toml_str(
            r#"
            motion_step_days = 0.5

            [orb_settings]
            conjunction = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(settings.definition(AspectKind::Conjunction).max_orb, 8.0);
        assert_eq!(settings.definition(AspectKind::Opposition).max_orb, 10.0);
        assert_eq!(settings.motion_step_days, 0.5);
        assert_eq!(settings.ascendant_orb, 10.0);
    }

    #[test]
    fn test_unknown_aspect_rejected() {
        let err = SynastrySettings::from_toml_str("[orb_settings]\nbiquintile = 2.0\n").unwrap_err();
        assert!(matches!(err, SynastryError::InvalidSettings(_)));
    }

    #[test]
    fn test_too_many_findings_rejected() {
        let err = SynastrySettings::from_toml_str("aspect_findings = 4\nhouse_findings = 2\n").unwrap_err();
        assert!(matches!(err, SynastryError::InvalidSettings(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = SynastrySettings::from_toml_str("ascendant_orb = \"wide\"").unwrap_err();
        assert!(matches!(err, SynastryError::SettingsParse(_)));
    }
}
