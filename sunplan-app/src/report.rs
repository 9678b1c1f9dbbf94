use anyhow::{Context, Result};
use std::{fs, path::Path};
use sunplan_core::timeseries::{self, ProjectionRow, ProjectionWriter};
use sunplan_schemas::result::{CalculationResult, CostBreakdown};

/// Writes `result.json` and `projection.csv` into the run directory and returns the rows
/// read back from the CSV, which is what the charts are drawn from.
pub fn write_outputs(
    output_dir: &Path,
    result: &CalculationResult,
    rows: &[ProjectionRow],
) -> Result<Vec<ProjectionRow>> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(output_dir.join("result.json"), json).context("Failed to write result.json")?;

    let csv_path = output_dir.join("projection.csv");
    let mut writer = ProjectionWriter::create(&csv_path)?;
    writer.write_rows(rows)?;
    drop(writer);

    let read_back = timeseries::read_projection(&csv_path)?;
    Ok(read_back)
}

fn money(value: f64) -> String {
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && whole != 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn optional(value: Option<f64>, suffix: &str) -> String {
    value.map_or("n/a".to_string(), |v| format!("{}{}", v, suffix))
}

fn print_breakdown(title: &str, breakdown: &CostBreakdown) {
    println!("\n{}:", title);
    println!("  - Equipment:                {:>12}", money(breakdown.equipment));
    if let Some(design) = breakdown.design {
        println!("  - Design:                   {:>12}", money(design));
    }
    if let Some(permit) = breakdown.permit {
        println!("  - Permit:                   {:>12}", money(permit));
    }
    if breakdown.battery_cost > 0.0 {
        println!("  - Battery:                  {:>12}", money(breakdown.battery_cost));
    }
    println!("  - Subtotal before credit:   {:>12}", money(breakdown.subtotal_before_credit));
    println!("  - Federal tax credit:       {:>12}", money(-breakdown.tax_credit));
    println!("  --------------------------------------");
    println!("  - Net cost:                 {:>12}", money(breakdown.net_cost));
}

pub fn print_summary_report(label: &str, result: &CalculationResult) {
    let system = &result.system;
    let applied = &result.assumptions;

    println!("\n\n--- [Solar Sizing Report: {}] ---", label);
    println!("========================================");
    println!("Site:");
    println!(
        "  - Location: {}{} | {} sun hours/day ({:?})",
        applied.location_code,
        if applied.location_matched { "" } else { " (default profile)" },
        applied.sun_hours_per_day,
        applied.quality_tier
    );
    println!("  - Utility rate: ${:.3}/kWh", applied.utility_rate);
    println!(
        "  - Shading factor: {:.2} | Orientation factor: {:.2}",
        applied.shading_factor, applied.orientation_factor
    );

    println!("\nSystem:");
    println!("  - Annual usage baseline: {:.0} kWh", result.baseline_annual_kwh);
    println!("  - System size: {:.1} kW ({} panels)", system.size_kw, system.panel_count);
    println!(
        "  - Roof area required: {:.0} sq ft{}",
        system.required_roof_area_sq_ft,
        if system.roof_adequate { "" } else { "  ** exceeds available roof space **" }
    );
    println!(
        "  - Annual production: {:.0} kWh ({}% offset)",
        result.production.annual_kwh, result.production.actual_offset_percent
    );
    println!("----------------------------------------");

    print_breakdown("Self-Install Cost", &result.costs.self_install);
    print_breakdown("Professional Install Cost", &result.costs.professional);
    println!(
        "\n  Self-install saves {} ({})",
        money(result.costs.savings_vs_professional),
        optional(result.costs.savings_percent, "%")
    );

    let financial = &result.financial;
    println!("\nFinancials:");
    println!("  - First-year bill savings:  {:>12}", money(financial.annual_electricity_savings));
    println!("  - Payback period:           {:>12}", optional(financial.payback_years, " yrs"));
    println!(
        "  - {}-year savings:          {:>12}",
        applied.constants.lifespan_years,
        money(financial.lifetime_savings)
    );
    println!("  - Return on investment:     {:>12}", optional(financial.roi_percent, "%"));
    if let Some(year) = financial.break_even_year {
        println!("  - Break-even in year {}", year);
    }

    let env = &result.environmental;
    println!("\nEnvironmental Impact:");
    println!("  - CO2 avoided: {:.1} tons/yr, {:.0} tons lifetime", env.annual_co2_tons, env.lifetime_co2_tons);
    println!("  - Equivalent to {:.0} trees or {:.0} miles not driven", env.trees_equivalent, env.miles_equivalent);

    println!("========================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_money_with_grouping() {
        assert_eq!(money(6_895.0), "$6,895");
        assert_eq!(money(1_234_567.4), "$1,234,567");
        assert_eq!(money(-2_955.0), "-$2,955");
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(999.0), "$999");
    }

    #[test]
    fn formats_missing_values() {
        assert_eq!(optional(None, "%"), "n/a");
        assert_eq!(optional(Some(4.5), " yrs"), "4.5 yrs");
    }
}
