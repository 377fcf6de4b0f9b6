use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

const APP_NAME: &str = "acks";
const USER_CONFIG_FILE_NAME: &str = "config.toml";
const LOCAL_CONFIG_FILE_NAME: &str = "acks.toml";

/// Dashboard configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// URL prefix every admin route is mounted under
    pub base_path: String,
    /// Default JSON snapshot of the data store
    pub snapshot: Option<PathBuf>,
    /// Rows per list page
    pub page_size: usize,
    /// error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: acks_admin::routes::DEFAULT_BASE_PATH.to_string(),
            snapshot: None,
            page_size: 50,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(config_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
            .merge(Env::prefixed("ACKS_").ignore(&["config"]))
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, snapshot: Option<PathBuf>, base_path: Option<String>) {
        if let Some(snapshot) = snapshot {
            self.snapshot = Some(snapshot);
        }
        if let Some(base_path) = base_path {
            self.base_path = base_path;
        }
    }

    pub fn log_level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("Invalid log_level '{}'", self.log_level))
    }

    pub fn snapshot_path(&self) -> Result<&Path> {
        self.snapshot.as_deref().ok_or_else(|| {
            anyhow!(
                "No snapshot configured. Set via --snapshot, ACKS_SNAPSHOT env var, or config file"
            )
        })
    }
}

/// Config file locations in merge order, later files win. An explicit path
/// replaces the search entirely.
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let user_dirs = [
        ProjectDirs::from("", "", APP_NAME).map(|d| d.config_dir().to_path_buf()),
        xdg_config_home().map(|dir| dir.join(APP_NAME)),
    ];
    let mut paths: Vec<PathBuf> = user_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .collect();
    // On Linux both user locations usually resolve to the same file
    paths.dedup();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_CONFIG_FILE_NAME));
    }
    paths
}

fn xdg_config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().join(".config")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial]
    fn defaults_without_files_or_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.base_path, "/admin");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.log_level().unwrap(), Level::WARN);
        assert!(config.snapshot_path().is_err());
    }

    #[test]
    #[serial]
    fn file_then_env_then_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acks.toml");
        fs::write(
            &path,
            "base_path = \"/dash\"\npage_size = 10\nsnapshot = \"file.json\"\n",
        )
        .unwrap();

        std::env::set_var("ACKS_PAGE_SIZE", "25");
        let loaded = Config::load(Some(&path));
        std::env::remove_var("ACKS_PAGE_SIZE");
        let mut config = loaded.unwrap();

        assert_eq!(config.base_path, "/dash");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.snapshot_path().unwrap(), Path::new("file.json"));

        config.merge_with_cli(Some(PathBuf::from("cli.json")), None);
        assert_eq!(config.snapshot_path().unwrap(), Path::new("cli.json"));
        assert_eq!(config.base_path, "/dash");
    }

    #[test]
    #[serial]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/acks.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    #[serial]
    fn search_ends_with_local_file_unless_explicit() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        let paths = config_paths(None);
        std::env::remove_var("XDG_CONFIG_HOME");

        assert!(paths.contains(&dir.path().join("acks").join("config.toml")));
        assert_eq!(paths.last().unwrap().file_name().unwrap(), "acks.toml");

        let explicit = Path::new("/etc/acks.toml");
        assert_eq!(config_paths(Some(explicit)), vec![explicit.to_path_buf()]);
    }

    #[test]
    fn invalid_log_level() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(config.log_level().is_err());
    }
}
