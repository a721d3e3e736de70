use crate::api::LarderApi;
use crate::config::LarderConfig;
use crate::error::{LarderError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the data directory when `--data-dir` is not given.
pub const HOME_ENV: &str = "LARDER_HOME";

pub struct LarderContext {
    pub api: LarderApi<FileStore>,
    pub config: LarderConfig,
}

/// Picks the data directory: an explicit path, then `$LARDER_HOME`, then the
/// platform data directory.
pub fn choose_data_dir(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()))
        .or(platform)
}

pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let from_env = env::var_os(HOME_ENV).map(PathBuf::from);
    let platform = ProjectDirs::from("com", "larder", "larder").map(|d| d.data_dir().to_path_buf());

    choose_data_dir(explicit, from_env, platform).ok_or_else(|| {
        LarderError::Api(format!(
            "Could not determine a data directory. Set ${} or pass --data-dir.",
            HOME_ENV
        ))
    })
}

pub fn initialize(explicit_data_dir: Option<PathBuf>) -> Result<LarderContext> {
    let data_dir = resolve_data_dir(explicit_data_dir)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = LarderConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "config is unreadable, using defaults");
        LarderConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let api = LarderApi::new(store, data_dir);

    Ok(LarderContext { api, config })
}
