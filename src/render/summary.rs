// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{BAR_COLOURS, FONT};
use crate::{Metric, Summary};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use std::error::Error;
use std::path::Path;

pub(super) fn draw(
    path: &Path,
    size: (u32, u32),
    metric: Metric,
    summary: &Summary,
) -> Result<(), Box<dyn Error>> {
    let bars = summary.bars();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (min, max) = bar_range(&bars);

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} Summary", metric), (FONT, 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d((0..bars.len()).into_segmented(), min..max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Metrics")
        .y_desc("Values")
        .x_label_formatter(&|value: &SegmentValue<usize>| bar_name(&bars, value))
        .draw()?;

    let offset = (max - min) * 0.01;
    let annotation = (FONT, 18)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (idx, (_, value)) in bars.iter().enumerate() {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(idx), 0.0),
                (SegmentValue::Exact(idx + 1), *value),
            ],
            BAR_COLOURS[idx].filled(),
        );
        bar.set_margin(0, 0, 20, 20);
        chart.draw_series(std::iter::once(bar))?;

        chart.draw_series(std::iter::once(Text::new(
            format!("{:.2}", value),
            (SegmentValue::CenterOf(idx), (*value).max(0.0) + offset),
            annotation.clone(),
        )))?;
    }

    root.present()?;

    Ok(())
}

fn bar_name(bars: &[(&'static str, f64)], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::Exact(idx) | SegmentValue::CenterOf(idx) => bars
            .get(*idx)
            .map(|(name, _)| name.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

/// Value axis bounds. Always includes zero and leaves room above the tallest
/// bar for its annotation.
fn bar_range(bars: &[(&'static str, f64)]) -> (f64, f64) {
    let low = bars.iter().map(|(_, v)| *v).fold(0.0, f64::min);
    let high = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let span = if high - low > 0.0 { high - low } else { 1.0 };
    let low = if low < 0.0 { low - span * 0.05 } else { low };
    (low, high + span * 0.15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_names() {
        let bars = [("min", 1.0), ("max", 3.0), ("avg", 2.0)];
        assert_eq!(bar_name(&bars, &SegmentValue::CenterOf(0)), "min");
        assert_eq!(bar_name(&bars, &SegmentValue::Exact(2)), "avg");
        assert_eq!(bar_name(&bars, &SegmentValue::Exact(3)), "");
        assert_eq!(bar_name(&bars, &SegmentValue::Last), "");
    }

    #[test]
    fn range_includes_zero() {
        let (low, high) = bar_range(&[("min", 30.0), ("max", 60.0), ("avg", 22.5)]);
        assert_eq!(low, 0.0);
        assert!((high - 69.0).abs() < 1e-9);
    }

    #[test]
    fn range_with_negative_bars() {
        let (low, high) = bar_range(&[("min", -10.0), ("max", 10.0), ("avg", 0.0)]);
        assert!((low + 11.0).abs() < 1e-9);
        assert!((high - 13.0).abs() < 1e-9);
    }
}
