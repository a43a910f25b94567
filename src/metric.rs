// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Serialize, Serializer};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// The required metrics. Declaration order is the order in which metrics are
/// validated, aggregated, rendered and reported.
#[derive(
    Clone,
    Copy,
    Debug,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub enum Metric {
    #[strum(serialize = "GPU temperature")]
    GpuTemperature,
    #[strum(serialize = "Memory usage")]
    MemoryUsage,
    #[strum(serialize = "Power percent")]
    PowerPercent,
    #[strum(serialize = "RAM usage")]
    RamUsage,
    #[strum(serialize = "Framerate")]
    Framerate,
}

/// Aggregation policy for a single metric.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rule {
    /// drop the metric entirely when its samples sum to zero
    pub exclude_zero_column: bool,
    /// take the minimum over strictly positive samples only
    pub min_excludes_zero: bool,
}

const DEFAULT_RULE: Rule = Rule {
    exclude_zero_column: true,
    min_excludes_zero: false,
};

// zero framerate samples come from loading screens and pauses
const FRAMERATE_RULE: Rule = Rule {
    exclude_zero_column: true,
    min_excludes_zero: true,
};

impl Metric {
    /// Column name in the source table.
    pub fn column(self) -> &'static str {
        self.into()
    }

    /// Axis and legend label, including the unit.
    pub fn label(self) -> &'static str {
        match self {
            Self::GpuTemperature => "GPU Temperature (°C)",
            Self::MemoryUsage => "Memory Usage (MB)",
            Self::PowerPercent => "Power Usage (%)",
            Self::RamUsage => "RAM Usage (MB)",
            Self::Framerate => "Framerate (FPS)",
        }
    }

    pub fn rule(self) -> Rule {
        match self {
            Self::Framerate => FRAMERATE_RULE,
            _ => DEFAULT_RULE,
        }
    }

    /// File name stem for artifacts, eg: `gpu_temperature`
    pub fn file_stem(self) -> String {
        self.column().replace(' ', "_").to_lowercase()
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn required_order() {
        let columns: Vec<&str> = Metric::iter().map(Metric::column).collect();
        assert_eq!(
            columns,
            vec![
                "GPU temperature",
                "Memory usage",
                "Power percent",
                "RAM usage",
                "Framerate"
            ]
        );
    }

    #[test]
    fn file_stems() {
        assert_eq!(Metric::GpuTemperature.file_stem(), "gpu_temperature");
        assert_eq!(Metric::RamUsage.file_stem(), "ram_usage");
        assert_eq!(Metric::Framerate.file_stem(), "framerate");
    }

    #[test]
    fn parse_column() {
        assert_eq!(Metric::from_str("Power percent"), Ok(Metric::PowerPercent));
        assert!(Metric::from_str("power percent").is_err());
    }

    #[test]
    fn only_framerate_excludes_zero_minimum() {
        for metric in Metric::iter() {
            let rule = metric.rule();
            assert!(rule.exclude_zero_column);
            assert_eq!(rule.min_excludes_zero, metric == Metric::Framerate);
        }
    }
}
