// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;

use log::LevelFilter;
use serde_derive::*;

use std::path::{Path, PathBuf};

/// On-disk TOML configuration. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    general: General,
    #[serde(default)]
    chart: Chart,
}

impl ConfigFile {
    pub fn general(&self) -> &General {
        &self.general
    }

    pub fn general_mut(&mut self) -> &mut General {
        &mut self.general
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

fn default_logging() -> LevelFilter {
    LevelFilter::Info
}

fn default_series_size() -> (u32, u32) {
    (1000, 600)
}

fn default_summary_size() -> (u32, u32) {
    (800, 500)
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    source: Option<PathBuf>,
    #[serde(default = "default_output")]
    output: PathBuf,
    #[serde(default = "default_logging")]
    logging: LevelFilter,
}

impl Default for General {
    fn default() -> Self {
        Self {
            source: None,
            output: default_output(),
            logging: default_logging(),
        }
    }
}

impl General {
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn set_source(&mut self, source: Option<PathBuf>) {
        self.source = source;
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn set_output(&mut self, output: PathBuf) {
        self.output = output;
    }

    pub fn logging(&self) -> LevelFilter {
        self.logging
    }

    pub fn set_logging(&mut self, level: LevelFilter) {
        self.logging = level;
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chart {
    #[serde(default = "default_series_size")]
    series_size: (u32, u32),
    #[serde(default = "default_summary_size")]
    summary_size: (u32, u32),
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            series_size: default_series_size(),
            summary_size: default_summary_size(),
        }
    }
}

impl Chart {
    pub fn series_size(&self) -> (u32, u32) {
        self.series_size
    }

    pub fn summary_size(&self) -> (u32, u32) {
        self.summary_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config() {
        let config_str = include_str!("../configs/perf-report.toml");
        let config = ConfigFile::from_toml(config_str).unwrap();
        assert_eq!(
            config.general().source(),
            Some(Path::new("PerformanceLog.csv"))
        );
        assert_eq!(config.general().output(), Path::new("./output"));
        assert_eq!(config.general().logging(), LevelFilter::Info);
        assert_eq!(config.chart().series_size(), (1000, 600));
        assert_eq!(config.chart().summary_size(), (800, 500));
    }

    #[test]
    fn defaults() {
        let config = ConfigFile::from_toml("").unwrap();
        assert_eq!(config.general().source(), None);
        assert_eq!(config.general().output(), Path::new("."));
        assert_eq!(config.chart().series_size(), (1000, 600));
    }

    #[test]
    fn partial_sections() {
        let config = ConfigFile::from_toml(
            "[general]\nlogging = \"debug\"\n[chart]\nsummary_size = [640, 480]\n",
        )
        .unwrap();
        assert_eq!(config.general().logging(), LevelFilter::Debug);
        assert_eq!(config.chart().series_size(), (1000, 600));
        assert_eq!(config.chart().summary_size(), (640, 480));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ConfigFile::from_toml("[general]\nthreads = 4\n").is_err());
        assert!(ConfigFile::from_toml("[workload]\nrate = 1\n").is_err());
    }

    #[test]
    fn missing_file() {
        let err = ConfigFile::load_from_file(Path::new("/nonexistent/perf-report.toml"))
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }
}
