// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chart rendering for sample sequences and summaries.

mod series;
mod summary;

use crate::{Config, Error, Metric, Summary};

use plotters::style::RGBColor;

use std::path::{Path, PathBuf};

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const SERIES_COLOUR: RGBColor = hexcolour!(0x0000FF);

// min, max, avg
const BAR_COLOURS: [RGBColor; 3] = [
    hexcolour!(0x0000FF),
    hexcolour!(0x008000),
    hexcolour!(0xFFA500),
];

const FONT: &str = "sans-serif";

/// The kind of chart artifact written for a metric.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Artifact {
    Series,
    Summary,
}

impl Artifact {
    pub fn file_name(self, metric: Metric) -> String {
        match self {
            Self::Series => format!("{}.png", metric.file_stem()),
            Self::Summary => format!("{}_summary.png", metric.file_stem()),
        }
    }

    pub fn path(self, output_dir: &Path, metric: Metric) -> PathBuf {
        output_dir.join(self.file_name(metric))
    }
}

/// Draws chart artifacts. Each call produces exactly one file.
pub trait Renderer {
    fn render_series(&mut self, metric: Metric, samples: &[f64], path: &Path)
        -> Result<(), Error>;

    fn render_summary(
        &mut self,
        metric: Metric,
        summary: &Summary,
        path: &Path,
    ) -> Result<(), Error>;
}

/// Renders PNG charts with the bitmap backend.
#[derive(Clone, Debug)]
pub struct ChartRenderer {
    series_size: (u32, u32),
    summary_size: (u32, u32),
}

impl ChartRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            series_size: config.series_size(),
            summary_size: config.summary_size(),
        }
    }
}

impl Renderer for ChartRenderer {
    fn render_series(
        &mut self,
        metric: Metric,
        samples: &[f64],
        path: &Path,
    ) -> Result<(), Error> {
        debug!("rendering {} samples of {} to {}", samples.len(), metric, path.display());
        series::draw(path, self.series_size, metric, samples).map_err(|e| Error::render(path, e))
    }

    fn render_summary(
        &mut self,
        metric: Metric,
        summary: &Summary,
        path: &Path,
    ) -> Result<(), Error> {
        debug!("rendering summary of {} to {}", metric, path.display());
        summary::draw(path, self.summary_size, metric, summary)
            .map_err(|e| Error::render(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn artifact_names() {
        assert_eq!(
            Artifact::Series.file_name(Metric::GpuTemperature),
            "gpu_temperature.png"
        );
        assert_eq!(
            Artifact::Summary.file_name(Metric::MemoryUsage),
            "memory_usage_summary.png"
        );
        assert_eq!(
            Artifact::Summary.path(Path::new("out"), Metric::Framerate),
            PathBuf::from("out/framerate_summary.png")
        );
    }

    #[test]
    fn colours() {
        assert_eq!(BAR_COLOURS[1], RGBColor(0, 128, 0));
        assert_eq!(BAR_COLOURS[2], RGBColor(255, 165, 0));
    }

    #[test]
    fn missing_output_directory() {
        let config = Config::new("log.csv", "/nonexistent/perf-report");
        let mut renderer = ChartRenderer::new(&config);
        let path = Artifact::Series.path(config.output_dir(), Metric::RamUsage);
        let err = renderer
            .render_series(Metric::RamUsage, &[4000.0, 4200.0, 3900.0], &path)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderFailure);
    }
}
