// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Config, ConfigFile, Error, NAME, VERSION};

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::LevelFilter;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Which pipeline to run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// one line chart per metric
    Timeseries,
    /// min/max/avg per metric, `json` selects JSON output for the results
    Stats { json: bool },
}

/// Parsed command line with the resolved configuration.
#[derive(Clone, Debug)]
pub struct Options {
    command: Command,
    config: Config,
}

impl Options {
    /// parse the process arguments
    pub fn from_args() -> Result<Self, Error> {
        Self::from_iter(std::env::args_os())
    }

    /// Parse the given arguments. The first item is the program name. Invalid
    /// arguments and `--help` exit the process the way clap does.
    pub fn from_iter<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from(args);

        let mut file = if let Some(path) = matches.value_of("config") {
            ConfigFile::load_from_file(Path::new(path))?
        } else {
            ConfigFile::default()
        };

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => file.general_mut().set_logging(LevelFilter::Debug),
            _ => file.general_mut().set_logging(LevelFilter::Trace),
        }

        let (command, sub) = match matches.subcommand() {
            ("timeseries", Some(sub)) => (Command::Timeseries, sub),
            ("stats", Some(sub)) => (
                Command::Stats {
                    json: sub.is_present("json"),
                },
                sub,
            ),
            _ => return Err(Error::Config("no command given".to_string())),
        };
        apply_overrides(&mut file, sub);

        let config = Config::from_file(&file)?;

        Ok(Self { command, config })
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn apply_overrides(file: &mut ConfigFile, matches: &ArgMatches) {
    if let Some(source) = matches.value_of("source") {
        file.general_mut().set_source(Some(PathBuf::from(source)));
    }
    if let Some(output) = matches.value_of("output") {
        file.general_mut().set_output(PathBuf::from(output));
    }
}

fn io_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name("source")
            .long("source")
            .short("s")
            .value_name("FILE")
            .help("Comma separated performance log")
            .takes_value(true),
        Arg::with_name("output")
            .long("output")
            .short("o")
            .value_name("DIR")
            .help("Existing directory to write charts into")
            .takes_value(true),
    ]
}

fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .about("Charts and summary statistics for performance logs")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
        .subcommand(
            SubCommand::with_name("timeseries")
                .about("Plot every metric against sample index")
                .args(&io_args()),
        )
        .subcommand(
            SubCommand::with_name("stats")
                .about("Chart and print min, max and average of every metric")
                .args(&io_args())
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Print the summaries as JSON"),
                ),
        )
}
