use std::path::Path;
use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::bail;
use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_BORDER_WIDTH: i32 = 2;
pub const DEFAULT_RESIZE_DELTA: f64 = 0.02;
pub const DEFAULT_WORKSPACE_COUNT: usize = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WorkspaceConfig {
    /// Name
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum WorkspacesConfig {
    /// A number of unnamed workspaces
    Count(usize),
    /// One workspace per entry
    Named(Vec<WorkspaceConfig>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StaticConfig {
    /// Width of the window borders in pixels (default: 2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<i32>,
    /// Proportion of the workspace added or removed by one resize (default: 0.02)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_delta: Option<f64>,
    /// Workspaces to create on startup (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspaces: Option<WorkspacesConfig>,
    /// Log level, or any directive understood by `RUST_LOG` (default: info)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl StaticConfig {
    /// `$CONFIG_DIR/pwm/pwm.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pwm").join("pwm.json"))
    }

    /// Parse a configuration file, picking the format from its extension
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|extension| extension.to_str()) {
            Some("yaml" | "yml") => Self::read_raw_yaml(&content),
            _ => Self::read_raw(&content),
        }
    }

    pub fn read_raw(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn read_raw_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Read `path` if given, otherwise the default location if it exists,
    /// otherwise fall back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::read(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.border_width() < 0 {
            bail!("border_width must not be negative");
        }

        let resize_delta = self.resize_delta();
        if !(resize_delta > 0.0 && resize_delta <= 0.5) {
            bail!("resize_delta must be greater than 0 and at most 0.5, got {resize_delta}");
        }

        if self.workspace_names().is_empty() {
            bail!("at least one workspace must be configured");
        }

        Ok(())
    }

    pub fn border_width(&self) -> i32 {
        self.border_width.unwrap_or(DEFAULT_BORDER_WIDTH)
    }

    pub fn resize_delta(&self) -> f64 {
        self.resize_delta.unwrap_or(DEFAULT_RESIZE_DELTA)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// One entry per workspace to create, `None` for unnamed ones
    pub fn workspace_names(&self) -> Vec<Option<String>> {
        match &self.workspaces {
            None => vec![None; DEFAULT_WORKSPACE_COUNT],
            Some(WorkspacesConfig::Count(count)) => vec![None; *count],
            Some(WorkspacesConfig::Named(workspaces)) => workspaces
                .iter()
                .map(|workspace| Some(workspace.name.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();

        assert_eq!(config.border_width(), 2);
        assert!((config.resize_delta() - 0.02).abs() < f64::EPSILON);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.workspace_names().len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_read_json() {
        let raw = r#"{
            "border_width": 4,
            "workspaces": [{ "name": "web" }, { "name": "code" }]
        }"#;

        let config = StaticConfig::read_raw(raw).unwrap();

        assert_eq!(config.border_width(), 4);
        assert_eq!(
            config.workspace_names(),
            vec![Some("web".to_string()), Some("code".to_string())]
        );
    }

    #[test]
    fn test_read_yaml() {
        let raw = "resize_delta: 0.05\nworkspaces: 3\nlog_level: debug\n";

        let config = StaticConfig::read_raw_yaml(raw).unwrap();

        assert!((config.resize_delta() - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.workspace_names(), vec![None, None, None]);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_read_picks_format_from_extension() {
        let dir = std::env::temp_dir().join(format!("pwm-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pwm.yaml");
        std::fs::write(&path, "border_width: 1\n").unwrap();

        let config = StaticConfig::load(Some(&path)).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(config.border_width(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = StaticConfig {
            resize_delta: Some(0.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StaticConfig {
            border_width: Some(-1),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StaticConfig {
            workspaces: Some(WorkspacesConfig::Count(0)),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let config = StaticConfig {
            border_width: Some(3),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"border_width":3}"#
        );
    }
}
