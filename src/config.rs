// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ConfigFile, Error};

use log::LevelFilter;

use std::path::{Path, PathBuf};

/// Everything a pipeline run needs: where to read the performance log from
/// and where to write charts to.
#[derive(Clone, Debug)]
pub struct Config {
    source_path: PathBuf,
    output_dir: PathBuf,
    logging: LevelFilter,
    series_size: (u32, u32),
    summary_size: (u32, u32),
}

impl Config {
    pub fn new(source_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let defaults = ConfigFile::default();
        Self {
            source_path: source_path.into(),
            output_dir: output_dir.into(),
            logging: defaults.general().logging(),
            series_size: defaults.chart().series_size(),
            summary_size: defaults.chart().summary_size(),
        }
    }

    /// Resolve a configuration file. Fails if it does not name a source.
    pub fn from_file(file: &ConfigFile) -> Result<Self, Error> {
        let source_path = file
            .general()
            .source()
            .ok_or_else(|| Error::Config("no source file given".to_string()))?;
        Ok(Self {
            source_path: source_path.to_path_buf(),
            output_dir: file.general().output().to_path_buf(),
            logging: file.general().logging(),
            series_size: file.chart().series_size(),
            summary_size: file.chart().summary_size(),
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn logging(&self) -> LevelFilter {
        self.logging
    }

    pub fn set_logging(&mut self, level: LevelFilter) {
        self.logging = level;
    }

    /// time series chart size in pixels
    pub fn series_size(&self) -> (u32, u32) {
        self.series_size
    }

    /// summary chart size in pixels
    pub fn summary_size(&self) -> (u32, u32) {
        self.summary_size
    }

    pub fn print(&self) {
        info!("-----");
        info!("Config:");
        info!("Config: Source: {}", self.source_path.display());
        info!("Config: Output: {}", self.output_dir.display());
        debug!(
            "Config: Series: {}x{} Summary: {}x{}",
            self.series_size.0, self.series_size.1, self.summary_size.0, self.summary_size.1
        );
        info!("-----");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn explicit() {
        let config = Config::new("log.csv", "out");
        assert_eq!(config.source_path(), Path::new("log.csv"));
        assert_eq!(config.output_dir(), Path::new("out"));
        assert_eq!(config.logging(), LevelFilter::Info);
        assert_eq!(config.series_size(), (1000, 600));
        assert_eq!(config.summary_size(), (800, 500));
    }

    #[test]
    fn from_file() {
        let file = ConfigFile::from_toml(
            "[general]\nsource = \"a.csv\"\noutput = \"charts\"\n[chart]\nseries_size = [1920, 1080]\n",
        )
        .unwrap();
        let config = Config::from_file(&file).unwrap();
        assert_eq!(config.source_path(), Path::new("a.csv"));
        assert_eq!(config.output_dir(), Path::new("charts"));
        assert_eq!(config.series_size(), (1920, 1080));
    }

    #[test]
    fn source_is_required() {
        let err = Config::from_file(&ConfigFile::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
