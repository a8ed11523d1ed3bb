use std::path::Path;

use anyhow::{Result, anyhow, bail};
use plotters::prelude::*;
use plotters::series::{DashedLineSeries, LineSeries};

use crate::series::BurndownSeries;

const GREY: RGBColor = RGBColor(128, 128, 128);

/// Draw the open-count line against the dashed ideal line and write an SVG.
/// All numeric truth lives in the series; this is presentation only.
pub fn render_svg(series: &BurndownSeries, sprint: i64, path: &Path) -> Result<()> {
  if series.days.is_empty() {
    bail!("cannot chart an empty window");
  }

  let max_open = series.open_counts.iter().copied().max().unwrap_or(0);
  let y_top = (series.total_issues.max(max_open) as f64).max(1.0) * 1.05;
  let x_max = (series.days.len() - 1).max(1) as i32;

  let root = SVGBackend::new(path, (1200, 600)).into_drawing_area();
  root.fill(&WHITE).map_err(|e| anyhow!("filling chart background: {e}"))?;

  let mut chart = ChartBuilder::on(&root)
    .caption(format!("Sprint {} Burndown Chart", sprint), ("sans-serif", 28))
    .margin(12)
    .x_label_area_size(72)
    .y_label_area_size(48)
    .build_cartesian_2d(0..x_max, 0f64..y_top)
    .map_err(|e| anyhow!("laying out chart: {e}"))?;

  let days = &series.days;
  chart
    .configure_mesh()
    .x_labels(days.len().min(14))
    .x_label_formatter(&|idx: &i32| days.get(*idx as usize).map(|d| d.to_string()).unwrap_or_default())
    .x_desc("Date")
    .y_desc("Open tasks")
    .draw()
    .map_err(|e| anyhow!("drawing chart mesh: {e}"))?;

  chart
    .draw_series(LineSeries::new(
      series.open_counts.iter().enumerate().map(|(i, &c)| (i as i32, c as f64)),
      &BLUE,
    ))
    .map_err(|e| anyhow!("drawing open-count series: {e}"))?
    .label("Tasks open")
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

  chart
    .draw_series(DashedLineSeries::new(
      series.ideal_counts.iter().enumerate().map(|(i, &c)| (i as i32, c)),
      8,
      6,
      ShapeStyle::from(&GREY),
    ))
    .map_err(|e| anyhow!("drawing ideal series: {e}"))?
    .label("Ideal burndown")
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREY));

  chart
    .configure_series_labels()
    .border_style(&BLACK)
    .background_style(&WHITE.mix(0.8))
    .draw()
    .map_err(|e| anyhow!("drawing chart legend: {e}"))?;

  root.present().map_err(|e| anyhow!("writing chart to {}: {e}", path.display()))
}
