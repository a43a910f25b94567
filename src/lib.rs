// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Charts and summary statistics for performance logs.
//!
//! A performance log is a comma separated table with one row per sample and
//! (at least) the columns named by [`Metric`]. Two pipelines are provided:
//! [`plot_timeseries`] draws every metric against the sample index, and
//! [`analyze`] reduces every metric to a [`Summary`] and charts it.

#[macro_use]
extern crate log;

mod config;
mod config_file;
mod error;
mod logger;
mod metric;
mod options;
mod pipeline;
mod render;
mod report;
mod stats;
mod table;

pub use crate::config::Config;
pub use crate::config_file::{Chart, ConfigFile, General};
pub use crate::error::{Error, ErrorKind};
pub use crate::logger::SimpleLogger;
pub use crate::metric::{Metric, Rule};
pub use crate::options::{Command, Options};
pub use crate::pipeline::{analyze, plot_timeseries};
pub use crate::render::{Artifact, ChartRenderer, Renderer};
pub use crate::report::Reporter;
pub use crate::stats::{summarize, Summaries, Summary};
pub use crate::table::Table;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
