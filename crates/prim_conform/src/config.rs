//! Harness configuration.
//!
//! Layered as: defaults, an optional JSON file, then `PRIM_CONFORM_*`
//! environment variables. Command-line flags are applied last by the caller.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{ConformError, ConformResult};

/// Absolute tolerance for approximate float expectations.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

#[derive(Clone, Debug)]
pub struct ConformConfig {
    pub tolerance: f64,
    pub fail_fast: bool,
    /// Only cases whose name or operation matches run.
    pub only: Option<Regex>,
    /// Cases whose name contains any of these are skipped.
    pub skip: Vec<String>,
}

impl Default for ConformConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            fail_fast: false,
            only: None,
            skip: Vec::new(),
        }
    }
}

/// On-disk form of [`ConformConfig`]; every field is optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub tolerance: Option<f64>,
    pub fail_fast: Option<bool>,
    pub only: Option<String>,
    #[serde(default)]
    pub skip: Vec<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> ConformResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConformError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConformError::Json {
            origin: path.display().to_string(),
            source,
        })
    }
}

impl ConformConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> ConformResult<Self> {
        self.tolerance = check_tolerance(tolerance).map_err(ConformError::Config)?;
        Ok(self)
    }

    pub fn with_only(mut self, pattern: &str) -> ConformResult<Self> {
        self.only = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn with_skip(mut self, skip: impl IntoIterator<Item = String>) -> Self {
        self.skip.extend(skip.into_iter().filter(|s| !s.is_empty()));
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn apply_file(self, file: &ConfigFile) -> ConformResult<Self> {
        let mut cfg = self.with_skip(file.skip.iter().cloned());
        if let Some(t) = file.tolerance {
            cfg = cfg.with_tolerance(t)?;
        }
        if let Some(f) = file.fail_fast {
            cfg = cfg.with_fail_fast(f);
        }
        if let Some(p) = &file.only {
            cfg = cfg.with_only(p)?;
        }
        Ok(cfg)
    }

    pub fn apply_env(self) -> ConformResult<Self> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`apply_env`](Self::apply_env) with an injectable lookup.
    pub fn apply_vars(self, var: impl Fn(&str) -> Option<String>) -> ConformResult<Self> {
        let mut cfg = self;
        if let Some(p) = var("PRIM_CONFORM_ONLY").filter(|p| !p.is_empty()) {
            cfg = cfg.with_only(&p)?;
        }
        if let Some(s) = var("PRIM_CONFORM_SKIP") {
            cfg = cfg.with_skip(parse_csv_list(&s));
        }
        if let Some(t) = var("PRIM_CONFORM_TOLERANCE") {
            let t = t.trim().parse::<f64>().map_err(|e| {
                ConformError::Config(format!("PRIM_CONFORM_TOLERANCE={t:?}: {e}"))
            })?;
            cfg = cfg.with_tolerance(t)?;
        }
        if let Some(f) = var("PRIM_CONFORM_FAIL_FAST").as_deref().and_then(parse_bool) {
            cfg = cfg.with_fail_fast(f);
        }
        Ok(cfg)
    }

    pub(crate) fn skips(&self, name: &str) -> Option<&str> {
        self.skip
            .iter()
            .find(|s| name.contains(s.as_str()))
            .map(String::as_str)
    }

    pub(crate) fn selects(&self, name: &str, op: &str) -> bool {
        self.only
            .as_ref()
            .is_none_or(|re| re.is_match(name) || re.is_match(op))
    }
}

/// Tolerances must be finite and non-negative.
pub(crate) fn check_tolerance(tolerance: f64) -> Result<f64, String> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(format!(
            "tolerance must be a non-negative finite number, got {tolerance}"
        ))
    }
}

fn parse_csv_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "0" | "false" => Some(false),
        "1" | "true" => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let cfg = ConformConfig::default();
        assert_eq!(cfg.tolerance, 1e-4);
        assert!(!cfg.fail_fast);
        assert!(cfg.selects("anything", "Arithmetic.add"));
        assert!(cfg.skips("anything").is_none());
    }

    #[test]
    fn env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PRIM_CONFORM_ONLY", "^String\\."),
            ("PRIM_CONFORM_SKIP", "emoji, ,surrogate"),
            ("PRIM_CONFORM_TOLERANCE", "0.5"),
            ("PRIM_CONFORM_FAIL_FAST", "1"),
        ]
        .into_iter()
        .collect();
        let cfg = ConformConfig::default()
            .apply_vars(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(cfg.tolerance, 0.5);
        assert!(cfg.fail_fast);
        assert_eq!(cfg.skip, vec!["emoji", "surrogate"]);
        assert!(cfg.selects("split basic", "String.split"));
        assert!(!cfg.selects("add basic", "Arithmetic.add"));
        assert_eq!(cfg.skips("length of emoji"), Some("emoji"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ConformConfig::default().with_tolerance(-1.0).is_err());
        assert!(ConformConfig::default().with_tolerance(f64::NAN).is_err());
        assert!(ConformConfig::default().with_only("(").is_err());
        let bad = ConformConfig::default()
            .apply_vars(|k| (k == "PRIM_CONFORM_TOLERANCE").then(|| "lots".to_string()));
        assert!(matches!(bad, Err(ConformError::Config(_))));
    }

    #[test]
    fn file_layer() {
        let file: ConfigFile =
            serde_json::from_str(r#"{"tolerance": 0.01, "skip": ["slow"], "only": "add"}"#)
                .unwrap();
        let cfg = ConformConfig::default().apply_file(&file).unwrap();
        assert_eq!(cfg.tolerance, 0.01);
        assert_eq!(cfg.skip, vec!["slow"]);
        assert!(cfg.selects("x", "Arithmetic.add"));
        assert!(serde_json::from_str::<ConfigFile>(r#"{"bogus": 1}"#).is_err());
    }
}
