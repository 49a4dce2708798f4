use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Declares which variables a deployment needs and where to load them from.
///
/// ```toml
/// env_file = ".env"
/// required = ["PORT", "HOST"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub env_file: Option<PathBuf>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Manifest {
    /// Reads the manifest at `path`, or at the default location when `path` is
    /// `None`. Only the default location is allowed to be absent.
    pub fn load(path: Option<&Path>) -> Result<Option<Self>> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => return Self::load_default(dirs::home_dir()),
        };

        Self::from_file(&config_path).map(Some)
    }

    fn load_default(home: Option<PathBuf>) -> Result<Option<Self>> {
        let Some(default_path) = home.map(Self::get_config_path) else {
            debug!("no home directory, skipping default manifest");
            return Ok(None);
        };
        if !default_path.exists() {
            debug!(path = %default_path.display(), "no manifest at default location");
            return Ok(None);
        }

        Self::from_file(&default_path).map(Some)
    }

    pub fn from_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).context(format!(
            "Failed to read manifest at: {}",
            config_path.display()
        ))?;
        let mut manifest = Self::parse(&content).context(format!(
            "Failed to parse manifest: {}",
            config_path.display()
        ))?;
        manifest.base_dir = config_path.parent().map(Path::to_path_buf);

        debug!(
            path = %config_path.display(),
            required = manifest.required.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `env_file` resolved against the manifest's own directory.
    pub fn env_file_path(&self) -> Option<PathBuf> {
        let env_file = self.env_file.as_ref()?;
        match &self.base_dir {
            Some(base) if env_file.is_relative() => Some(base.join(env_file)),
            _ => Some(env_file.clone()),
        }
    }

    fn get_config_path(home: PathBuf) -> PathBuf {
        home.join(".config").join("envcheck").join("config.toml")
    }
}
