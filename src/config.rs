use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::gesture::SwipeCommitPolicy;
use crate::page::{Page, PageSequence};
use crate::transition::{MotionTimings, TransitionSettings};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub gesture: GestureConfig,
    pub motion: MotionConfig,
    pub popover: PopoverConfig,
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    pub minimum_swipe_threshold: f32,
    pub commit_fraction: f32,
    pub cancelled_gestures_commit: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        let policy = SwipeCommitPolicy::default();
        Self {
            minimum_swipe_threshold: policy.minimum_swipe_threshold,
            commit_fraction: policy.commit_fraction,
            cancelled_gestures_commit: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MotionConfig {
    pub commit_duration_ms: u64,
    pub cancel_duration_ms: u64,
    pub select_duration_ms: u64,
    pub reduce_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let timings = MotionTimings::default();
        Self {
            commit_duration_ms: timings.commit.as_millis() as u64,
            cancel_duration_ms: timings.cancel.as_millis() as u64,
            select_duration_ms: timings.select.as_millis() as u64,
            reduce_motion: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PopoverConfig {
    /// Content width in points.
    pub width: f32,
    pub pages: Vec<String>,
    pub start_page: String,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            width: 260.0,
            pages: Page::ALL.iter().map(|page| page.id().to_string()).collect(),
            start_page: Page::Dock.id().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

const MIN_COMMIT_FRACTION: f32 = 0.05;
const MAX_COMMIT_FRACTION: f32 = 1.0;

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        let config = parsed.sanitized();
        config.page_sequence()?;
        config.start_page()?;
        Ok(config)
    }

    pub(crate) fn sanitized(mut self) -> Self {
        let defaults = GestureConfig::default();
        if !self.gesture.minimum_swipe_threshold.is_finite()
            || self.gesture.minimum_swipe_threshold < 0.0
        {
            self.gesture.minimum_swipe_threshold = defaults.minimum_swipe_threshold;
        }
        if self.gesture.commit_fraction.is_finite() {
            self.gesture.commit_fraction = self
                .gesture
                .commit_fraction
                .clamp(MIN_COMMIT_FRACTION, MAX_COMMIT_FRACTION);
        } else {
            self.gesture.commit_fraction = defaults.commit_fraction;
        }
        if !self.popover.width.is_finite() || self.popover.width <= 0.0 {
            self.popover.width = PopoverConfig::default().width;
        }
        self
    }

    pub fn page_sequence(&self) -> AppResult<PageSequence> {
        let pages = self
            .popover
            .pages
            .iter()
            .map(|id| Page::parse(id))
            .collect::<AppResult<Vec<_>>>()?;
        PageSequence::new(pages)
    }

    pub fn start_page(&self) -> AppResult<Page> {
        Page::parse(&self.popover.start_page)
    }

    pub fn transition_settings(&self) -> TransitionSettings {
        TransitionSettings {
            policy: SwipeCommitPolicy::new(
                self.gesture.minimum_swipe_threshold,
                self.gesture.commit_fraction,
            ),
            timings: MotionTimings {
                commit: Duration::from_millis(self.motion.commit_duration_ms),
                cancel: Duration::from_millis(self.motion.cancel_duration_ms),
                select: Duration::from_millis(self.motion.select_duration_ms),
            },
            cancelled_gestures_commit: self.gesture.cancelled_gestures_commit,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("PAGER_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("pager").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("pager")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("pager").join("config.toml"));
    }
    None
}
