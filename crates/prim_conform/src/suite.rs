use std::path::{Path, PathBuf};

use prim_core::Registry;
use tracing::debug;

use crate::errors::{ConformError, ConformResult};
use crate::{Case, SuiteSpec};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Suite {
    pub name: String,
    pub description: Option<String>,
    pub cases: Vec<Case>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn push(&mut self, case: Case) {
        self.cases.push(case);
    }

    pub fn extend(&mut self, cases: impl IntoIterator<Item = Case>) {
        self.cases.extend(cases);
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn from_json_str(text: &str, origin: &str, registry: &Registry) -> ConformResult<Self> {
        let raw: SuiteSpec = serde_json::from_str(text).map_err(|source| ConformError::Json {
            origin: origin.to_string(),
            source,
        })?;
        raw.decode(registry)
    }

    pub fn to_json_string(&self) -> ConformResult<String> {
        serde_json::to_string_pretty(&SuiteSpec::encode(self)).map_err(|source| {
            ConformError::Json {
                origin: format!("suite {}", self.name),
                source,
            }
        })
    }

    pub fn load(path: &Path, registry: &Registry) -> ConformResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConformError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let suite = Self::from_json_str(&text, &path.display().to_string(), registry)?;
        debug!(path = %path.display(), cases = suite.len(), "loaded suite");
        Ok(suite)
    }

    /// Loads `path` as a single suite, or every `*.json` file directly under
    /// it (sorted by path) when it is a directory.
    pub fn load_path(path: &Path, registry: &Registry) -> ConformResult<Vec<Self>> {
        if !path.is_dir() {
            return Ok(vec![Self::load(path, registry)?]);
        }
        let io_err = |source| ConformError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(path).map_err(io_err)? {
            let p = entry.map_err(io_err)?.path();
            if p.is_file() && p.extension().is_some_and(|e| e == "json") {
                files.push(p);
            }
        }
        files.sort();
        files.iter().map(|p| Self::load(p, registry)).collect()
    }
}
