use crate::core::grid::{CanvasSize, GridStyle};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::formatting::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, is_valid_format};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    #[serde(default = "default_block_margin")]
    pub block_margin: f64,
    #[serde(default = "default_text_columns_per_hour")]
    pub text_columns_per_hour: usize,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_export_format")]
    pub default_export_format: ExportFormat,
    #[serde(default = "default_true")]
    pub show_markers: bool,
    #[serde(default = "default_true")]
    pub color_output: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: char,
}

fn default_canvas_width() -> u32 {
    1000
}
fn default_canvas_height() -> u32 {
    320
}
fn default_block_margin() -> f64 {
    4.0
}
fn default_text_columns_per_hour() -> usize {
    2
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}
fn default_export_format() -> ExportFormat {
    ExportFormat::Pdf
}
fn default_true() -> bool {
    true
}
fn default_separator_char() -> char {
    '-'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            block_margin: default_block_margin(),
            text_columns_per_hour: default_text_columns_per_hour(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            default_export_format: default_export_format(),
            show_markers: true,
            color_output: true,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("eldlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".eldlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eldlog.conf")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(AppError::Config(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }

        let row_height = self.canvas_height as f64 / 4.0;
        if !self.block_margin.is_finite()
            || self.block_margin < 0.0
            || 2.0 * self.block_margin >= row_height
        {
            return Err(AppError::Config(format!(
                "block_margin {} does not fit a {}px status row",
                self.block_margin, row_height
            )));
        }

        if self.text_columns_per_hour == 0 {
            return Err(AppError::Config(
                "text_columns_per_hour must be at least 1".to_string(),
            ));
        }

        for (name, fmt) in [("date_format", &self.date_format), ("time_format", &self.time_format)] {
            if !is_valid_format(fmt) {
                return Err(AppError::Config(format!("invalid {name} '{fmt}'")));
            }
        }

        Ok(())
    }

    pub fn canvas(&self) -> CanvasSize {
        CanvasSize::new(self.canvas_width, self.canvas_height)
    }

    pub fn grid_style(&self) -> GridStyle {
        GridStyle {
            block_margin: self.block_margin,
            show_markers: self.show_markers,
            ..GridStyle::default()
        }
    }

    /// Write the default configuration file. Returns the path written.
    pub fn init_all(custom_path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = custom_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&Config::default())?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
