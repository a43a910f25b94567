// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Artifact, Error, Summaries};

use std::io::Write;
use std::path::Path;

/// Human readable progress and results. Write failures on the sink are
/// ignored, the same way a closed stdout would be.
pub struct Reporter<W: Write> {
    output: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// One line per artifact written.
    pub fn artifact(&mut self, artifact: Artifact, path: &Path) {
        let kind = match artifact {
            Artifact::Series => "Graph",
            Artifact::Summary => "Chart",
        };
        let _ = writeln!(self.output, "{} saved: {}", kind, path.display());
    }

    pub fn complete(&mut self) {
        let _ = writeln!(self.output, "All graphs have been successfully generated.");
    }

    pub fn summaries(&mut self, summaries: &Summaries) {
        for (metric, summary) in summaries {
            let _ = writeln!(
                self.output,
                "{} -> Min: {}, Max: {}, Avg: {:.2}",
                metric, summary.min, summary.max, summary.avg
            );
        }
    }

    /// Summaries as a JSON object keyed by metric name.
    pub fn summaries_json(&mut self, summaries: &Summaries) {
        match serde_json::to_string_pretty(summaries) {
            Ok(json) => {
                let _ = writeln!(self.output, "{}", json);
            }
            Err(e) => {
                error!("failed to encode summaries: {}", e);
            }
        }
    }

    pub fn failure(&mut self, error: &Error) {
        let _ = writeln!(self.output, "An error occurred: {}", error);
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}
