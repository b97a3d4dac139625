use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;

use crate::eval::EvaluationResult;

// ---------------------------------------------------------------------------
// Bar chart (PNG)
// ---------------------------------------------------------------------------

const WIDTH: u32 = 900;
const HEIGHT: u32 = 600;

/// Render the per-group accuracies as a vertical bar chart.
pub fn render_bar_chart(result: &EvaluationResult, out: &Path) -> Result<()> {
    // plotters' error types are backend-specific; collapse them here.
    draw(result, out).map_err(|e| anyhow!("rendering chart to {}: {e}", out.display()))
}

fn draw(result: &EvaluationResult, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(out, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let groups = &result.groups;
    let n = groups.len().max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} - {}", result.dataset, result.metric),
            ("sans-serif", 30),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..100f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => groups
                .get(*i)
                .map(|g| g.group.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_desc("Simulated accuracy (%)")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .margin(30)
            .data(groups.iter().enumerate().map(|(i, g)| (i, g.accuracy))),
    )?;

    root.present()?;
    Ok(())
}
