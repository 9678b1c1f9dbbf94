/// Annualises household usage. Metered kWh wins over a dollar bill when both are given;
/// a bill is converted with `utility_rate`, which the caller guarantees is positive.
/// With neither figure the baseline is zero.
pub fn baseline_annual_kwh(
    monthly_kwh: Option<f64>,
    monthly_bill_dollars: Option<f64>,
    utility_rate: f64,
) -> f64 {
    match (monthly_kwh, monthly_bill_dollars) {
        (Some(kwh), _) => kwh * 12.0,
        (None, Some(bill)) => (bill / utility_rate) * 12.0,
        (None, None) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn metered_usage_is_multiplied_out() {
        assert_eq!(baseline_annual_kwh(Some(900.0), None, 0.14), 10_800.0);
    }

    #[test]
    fn metered_usage_takes_precedence_over_bill() {
        assert_eq!(baseline_annual_kwh(Some(500.0), Some(1_000.0), 0.10), 6_000.0);
    }

    #[test]
    fn bill_is_converted_at_the_utility_rate() {
        assert_relative_eq!(baseline_annual_kwh(None, Some(126.0), 0.14), 10_800.0, max_relative = 1e-12);
    }

    #[test]
    fn no_usage_gives_zero_baseline() {
        assert_eq!(baseline_annual_kwh(None, None, 0.14), 0.0);
    }
}
