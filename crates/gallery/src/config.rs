use arcdial::picker::{SelectionList, SelectionMode};
use arcdial::registry::ScreenLabel;
use arcdial::{Angle, ArcConfig, ArcConfigError, ArcDirection};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderSettings {
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub direction: ArcDirection,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            start_degrees: arcdial::arc::DEFAULT_START_DEGREES,
            end_degrees: arcdial::arc::DEFAULT_END_DEGREES,
            direction: ArcDirection::Clockwise,
            min: 1.0,
            max: 100.0,
            step: 0.0,
            initial: 26.0,
        }
    }
}

impl SliderSettings {
    pub fn arc_config(&self) -> Result<ArcConfig, ArcConfigError> {
        ArcConfig::new(
            Angle::from_degrees(self.start_degrees),
            Angle::from_degrees(self.end_degrees),
            self.direction,
            self.min..=self.max,
            self.step,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerSettings {
    pub item_prefix: String,
    pub item_count: u32,
    pub mode: SelectionMode,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            item_prefix: "Avocado".to_string(),
            item_count: 5,
            mode: SelectionMode::Single,
        }
    }
}

impl PickerSettings {
    pub fn selection_list(&self) -> SelectionList {
        SelectionList::numbered(&self.item_prefix, self.item_count, self.mode)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub initial_screen: Option<ScreenLabel>,
    #[serde(default)]
    pub slider: SliderSettings,
    #[serde(default)]
    pub picker: PickerSettings,
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        self.slider.arc_config()?;
        Ok(self)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid slider settings: {0}")]
    Slider(#[from] ArcConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "arcdial", "gallery").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn from_builder(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    let s = builder
        .add_source(
            config::Environment::with_prefix("GALLERY")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    s.try_deserialize::<Config>()?.validate()
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    from_builder(
        config::Config::builder().add_source(config::File::from(config_path).required(false)),
    )
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(|p| p.to_path_buf()) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
