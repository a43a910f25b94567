// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::stats::summarize;
use crate::{Artifact, Config, Error, Metric, Renderer, Reporter, Summaries, Table};

use strum::IntoEnumIterator;

use std::io::Write;
use std::path::PathBuf;

/// Render one line chart per required metric. Returns the written artifacts in
/// metric order. Stops at the first artifact that fails to render.
pub fn plot_timeseries<R: Renderer, W: Write>(
    config: &Config,
    renderer: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<Vec<PathBuf>, Error> {
    info!("plotting time series from {}", config.source_path().display());
    let table = Table::load(config.source_path())?;

    let mut written = Vec::new();
    for metric in Metric::iter() {
        let path = Artifact::Series.path(config.output_dir(), metric);
        renderer.render_series(metric, table.samples(metric), &path)?;
        reporter.artifact(Artifact::Series, &path);
        written.push(path);
    }
    reporter.complete();

    Ok(written)
}

/// Summarize every required metric and render one bar chart per retained
/// metric. Printing the summaries is left to the caller.
pub fn analyze<R: Renderer, W: Write>(
    config: &Config,
    renderer: &mut R,
    reporter: &mut Reporter<W>,
) -> Result<Summaries, Error> {
    info!("summarizing {}", config.source_path().display());
    let table = Table::load(config.source_path())?;
    let summaries = summarize(&table);

    for (metric, summary) in &summaries {
        let path = Artifact::Summary.path(config.output_dir(), *metric);
        renderer.render_summary(*metric, summary, &path)?;
        reporter.artifact(Artifact::Summary, &path);
    }

    Ok(summaries)
}
