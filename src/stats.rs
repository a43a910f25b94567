// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Metric, Rule, Table};

use serde_derive::Serialize;
use strum::IntoEnumIterator;

use std::collections::BTreeMap;

/// Summary statistics for one metric.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Summaries keyed by metric. Iteration follows the required metric order.
pub type Summaries = BTreeMap<Metric, Summary>;

impl Summary {
    /// Summarize a sample sequence under the given rule. Returns `None` when
    /// the rule excludes the sequence or there is nothing to summarize.
    pub fn from_samples(samples: &[f64], rule: Rule) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let sum: f64 = samples.iter().sum();
        if rule.exclude_zero_column && sum == 0.0 {
            return None;
        }

        let max = samples.iter().copied().fold(f64::MIN, f64::max);
        let min = if rule.min_excludes_zero {
            samples
                .iter()
                .copied()
                .filter(|v| *v > 0.0)
                .fold(None, |min: Option<f64>, v| {
                    Some(min.map_or(v, |m| m.min(v)))
                })
                .unwrap_or(0.0)
        } else {
            samples.iter().copied().fold(f64::MAX, f64::min)
        };
        let avg = sum / samples.len() as f64;

        Some(Self { min, max, avg })
    }

    /// The bars of a summary chart, in display order.
    pub fn bars(&self) -> [(&'static str, f64); 3] {
        [("min", self.min), ("max", self.max), ("avg", self.avg)]
    }
}

/// Compute summaries for every required metric that is not excluded by its
/// rule.
pub fn summarize(table: &Table) -> Summaries {
    let mut summaries = Summaries::new();
    for metric in Metric::iter() {
        match Summary::from_samples(table.samples(metric), metric.rule()) {
            Some(summary) => {
                summaries.insert(metric, summary);
            }
            None => {
                debug!("excluding {}: no non-zero samples", metric);
            }
        }
    }
    summaries
}
