// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{FONT, SERIES_COLOUR};
use crate::Metric;

use plotters::prelude::*;

use std::error::Error;
use std::path::Path;

pub(super) fn draw(
    path: &Path,
    size: (u32, u32),
    metric: Metric,
    samples: &[f64],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (min, max) = value_range(samples);
    let last = samples.len().saturating_sub(1).max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} Over Time", metric.label()), (FONT, 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(0.0..last, min..max)?;

    chart
        .configure_mesh()
        .x_desc("Sample Index")
        .y_desc(metric.label())
        .draw()?;

    let series = samples
        .iter()
        .enumerate()
        .map(|(idx, value)| (idx as f64, *value));
    chart
        .draw_series(LineSeries::new(series, SERIES_COLOUR.stroke_width(2)))?
        .label(metric.label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &SERIES_COLOUR));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Y axis bounds with a little headroom. A flat series gets a unit band.
fn value_range(samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 1.0);
    }
    let min = samples.iter().copied().fold(f64::MAX, f64::min);
    let max = samples.iter().copied().fold(f64::MIN, f64::max);
    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    (min - span * 0.05, max + span * 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_series() {
        assert_eq!(value_range(&[60.0, 60.0]), (59.0, 61.0));
        assert_eq!(value_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn padded_range() {
        let (min, max) = value_range(&[0.0, 50.0, 100.0]);
        assert!((min + 5.0).abs() < 1e-9);
        assert!((max - 105.0).abs() < 1e-9);
    }
}
