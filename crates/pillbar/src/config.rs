use derive_more::{Deref, From, Into};
use directories::ProjectDirs;
use glide::{Axis, GradientSpec, IndicatorFill};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgba;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// A `#rrggbb` / `#rrggbbaa` color value.
#[derive(
    Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay, Deref, From, Into,
)]
pub struct ColorSpec(Srgba<f64>);

#[derive(Error, Debug)]
#[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
pub struct ColorParseError(String);

impl FromStr for ColorSpec {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let byte = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|b| b as f64 / 255.0)
                .ok_or_else(|| ColorParseError(s.to_string()))
        };
        let (r, g, b) = (byte(0..2)?, byte(2..4)?, byte(4..6)?);
        let a = match hex.len() {
            6 => 1.0,
            8 => byte(6..8)?,
            _ => return Err(ColorParseError(s.to_string())),
        };
        Ok(Self(Srgba::new(r, g, b, a)))
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_components();
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            to_byte(r),
            to_byte(g),
            to_byte(b),
            to_byte(a)
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AxisSpec {
    #[strum(serialize = "Horizontal", serialize = "h", serialize = "x")]
    Horizontal,
    #[strum(serialize = "Vertical", serialize = "v", serialize = "y")]
    Vertical,
}

impl From<AxisSpec> for Axis {
    fn from(axis: AxisSpec) -> Self {
        match axis {
            AxisSpec::Horizontal => Axis::Horizontal,
            AxisSpec::Vertical => Axis::Vertical,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[strum(serialize = "Solid", serialize = "flat")]
    Solid,
    #[strum(serialize = "Gradient", serialize = "dynamic")]
    Gradient,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuSection {
    pub item_spacing: f64,
    pub indicator_side_padding: f64,
    pub fills_all_items_in_bounds: bool,
    pub fills_items_equally: bool,
    pub haptic_feedback: bool,
    pub vibrant_label_color: bool,
    pub label_color: ColorSpec,
    pub label_size: f64,
    pub elasticity: f64,
}

impl Default for MenuSection {
    fn default() -> Self {
        Self {
            item_spacing: 20.0,
            indicator_side_padding: 12.0,
            fills_all_items_in_bounds: false,
            fills_items_equally: false,
            haptic_feedback: true,
            vibrant_label_color: false,
            label_color: ColorSpec(Srgba::new(1.0, 1.0, 1.0, 1.0)),
            label_size: 15.0,
            elasticity: 15.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FillSection {
    pub mode: FillMode,
    pub color: ColorSpec,
    pub axis: AxisSpec,
    pub ramp: Vec<ColorSpec>,
}

impl Default for FillSection {
    fn default() -> Self {
        Self {
            mode: FillMode::Solid,
            color: ColorSpec(Srgba::new(0.0, 0.5, 1.0, 1.0)),
            axis: AxisSpec::Horizontal,
            ramp: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub items: Vec<String>,
    pub menu: MenuSection,
    pub fill: FillSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items: ["Overview", "Graphs", "Alerts", "Settings"]
                .map(String::from)
                .to_vec(),
            menu: MenuSection::default(),
            fill: FillSection::default(),
        }
    }
}

impl AppConfig {
    /// The control-level config this app config describes.
    pub fn control_config(&self) -> glide::Config {
        let indicator_fill = match self.fill.mode {
            FillMode::Solid => IndicatorFill::Solid(*self.fill.color),
            FillMode::Gradient => IndicatorFill::Gradient(GradientSpec {
                axis: self.fill.axis.into(),
                ramp: self.fill.ramp.iter().map(|c| **c).collect(),
            }),
        };
        glide::Config {
            item_spacing: self.menu.item_spacing,
            indicator_side_padding: self.menu.indicator_side_padding,
            fills_all_items_in_bounds: self.menu.fills_all_items_in_bounds,
            fills_items_equally: self.menu.fills_items_equally,
            generates_feedback: self.menu.haptic_feedback,
            indicator_fill,
            vibrant_label_color: self.menu.vibrant_label_color,
            label_color: *self.menu.label_color,
            elasticity: self.menu.elasticity,
            ..glide::Config::default()
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("dev", "pillbar", "pillbar").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("PILLBAR"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup() -> AppConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            AppConfig::default()
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
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
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
            log::error!("Failed to create watcher: {}", e);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_deserialization() {
        let color: ColorSpec = serde_json::from_str("\"#0080ff\"").unwrap();
        let (r, g, b, a) = color.into_components();
        assert_eq!((r * 255.0).round(), 0.0);
        assert_eq!((g * 255.0).round(), 128.0);
        assert_eq!((b * 255.0).round(), 255.0);
        assert_eq!(a, 1.0);

        let translucent: ColorSpec = serde_json::from_str("\"#ffffff80\"").unwrap();
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-9);

        assert!(serde_json::from_str::<ColorSpec>("\"#12345\"").is_err());
        assert!(serde_json::from_str::<ColorSpec>("\"blue\"").is_err());
    }

    #[test]
    fn test_color_display_round_trip() {
        let color = ColorSpec(Srgba::new(1.0, 0.5, 0.0, 1.0));
        let text = color.to_string();
        let parsed: ColorSpec = text.parse().unwrap();
        assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn test_axis_deserialization() {
        let cases = vec![
            ("\"horizontal\"", AxisSpec::Horizontal),
            ("\"Horizontal\"", AxisSpec::Horizontal),
            ("\"h\"", AxisSpec::Horizontal),
            ("\"x\"", AxisSpec::Horizontal),
            ("\"vertical\"", AxisSpec::Vertical),
            ("\"V\"", AxisSpec::Vertical),
            ("\"y\"", AxisSpec::Vertical),
        ];

        for (json, expected) in cases {
            let deserialized: AxisSpec = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_fill_mode_aliases() {
        let solid: FillMode = serde_json::from_str("\"flat\"").unwrap();
        assert_eq!(solid, FillMode::Solid);
        let gradient: FillMode = serde_json::from_str("\"DYNAMIC\"").unwrap();
        assert_eq!(gradient, FillMode::Gradient);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.items.len(), 4);
        assert_eq!(config.menu.item_spacing, 20.0);
        assert_eq!(config.fill.mode, FillMode::Solid);
    }

    #[test]
    fn test_control_config_mapping() {
        let mut config = AppConfig::default();
        config.fill.mode = FillMode::Gradient;
        config.fill.ramp = vec![
            "#ff0000".parse().unwrap(),
            "#0000ff".parse().unwrap(),
        ];

        let control = config.control_config();
        match control.indicator_fill {
            IndicatorFill::Gradient(spec) => {
                assert_eq!(spec.axis, Axis::Horizontal);
                assert_eq!(spec.ramp.len(), 2);
            }
            other => panic!("expected gradient fill, got {other:?}"),
        }
    }
}
