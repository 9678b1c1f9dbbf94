//! This module renders the savings projection and cost comparison charts for a run.

use anyhow::Result;
use plotters::prelude::*;
use sunplan_core::timeseries::ProjectionRow;
use sunplan_schemas::result::CostComparison;

/// Generates and saves every chart for a calculation run.
pub fn generate_all_plots(output_dir: &str, rows: &[ProjectionRow], costs: &CostComparison) -> Result<()> {
    println!("[Plotting] Generating charts...");

    if rows.is_empty() {
        println!("[Plotting] Warning: No projection data to plot.");
        return Ok(());
    }

    plot_cumulative_savings(output_dir, rows)?;
    plot_cost_comparison(output_dir, costs)?;

    println!("[Plotting] Charts have been saved to '{}'.", output_dir);
    Ok(())
}

/// Line chart of cumulative self-install savings with the break-even line marked.
fn plot_cumulative_savings(output_dir: &str, rows: &[ProjectionRow]) -> Result<()> {
    let path = format!("{}/1_cumulative_savings.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_year = rows.last().map_or(1, |r| r.year);
    let min_savings = rows.iter().map(|r| r.cumulative_savings).fold(0.0, f64::min);
    let max_savings = rows.iter().map(|r| r.cumulative_savings).fold(0.0, f64::max);
    let padding = (max_savings - min_savings).max(1.0) * 0.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cumulative Savings (Self-Install)", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(0u32..max_year, (min_savings - padding)..(max_savings + padding))?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Cumulative savings (USD)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.year, r.cumulative_savings)),
            GREEN.stroke_width(3),
        ))?
        .label("Cumulative savings")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));

    chart
        .draw_series(DashedLineSeries::new(
            [(0u32, 0.0), (max_year, 0.0)],
            5,
            5,
            (&BLACK).into(),
        ))?
        .label("Break-even")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Grouped bars of subtotal, tax credit and net cost for both installation routes.
fn plot_cost_comparison(output_dir: &str, costs: &CostComparison) -> Result<()> {
    let path = format!("{}/2_cost_comparison.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let routes = [("Self-install", &costs.self_install, BLUE), ("Professional", &costs.professional, RED)];
    let max_cost = routes
        .iter()
        .map(|(_, b, _)| b.subtotal_before_credit)
        .fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Installed Cost Comparison", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..9f64, 0f64..max_cost * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(3)
        .x_label_formatter(&|x| match x.round() as i32 {
            1 => "Subtotal".to_string(),
            4 => "Tax credit".to_string(),
            7 => "Net cost".to_string(),
            _ => String::new(),
        })
        .y_desc("USD")
        .draw()?;

    for (i, (name, breakdown, color)) in routes.iter().enumerate() {
        let offset = i as f64;
        let values = [
            breakdown.subtotal_before_credit,
            breakdown.tax_credit,
            breakdown.net_cost,
        ];
        let color = *color;
        chart
            .draw_series(values.iter().enumerate().map(|(group, value)| {
                let x0 = group as f64 * 3.0 + 0.5 + offset;
                Rectangle::new([(x0, 0.0), (x0 + 0.9, *value)], color.filled())
            }))?
            .label(*name)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
