// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

use perf_report::*;

fn main() {
    let mut reporter = Reporter::new(std::io::stdout());

    let options = match Options::from_args() {
        Ok(options) => options,
        Err(e) => {
            reporter.failure(&e);
            std::process::exit(e.kind().exit_code());
        }
    };
    let config = options.config();

    if let Err(e) = SimpleLogger::init(config.logging()) {
        eprintln!("failed to initialize logger: {}", e);
    }

    info!("{} {} initializing...", NAME, VERSION);
    config.print();

    let mut renderer = ChartRenderer::new(config);

    let result = match options.command() {
        Command::Timeseries => plot_timeseries(config, &mut renderer, &mut reporter).map(|_| ()),
        Command::Stats { json } => {
            analyze(config, &mut renderer, &mut reporter).map(|summaries| {
                if json {
                    reporter.summaries_json(&summaries);
                } else {
                    reporter.summaries(&summaries);
                }
            })
        }
    };

    if let Err(e) = result {
        debug!("run failed: {:?}", e.kind());
        reporter.failure(&e);
        std::process::exit(e.kind().exit_code());
    }
}
