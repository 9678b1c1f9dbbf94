use sunplan_schemas::input::{RoofOrientation, ShadingLevel};

/// Multiplicative production dampers, each in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentFactors {
    pub shading_factor: f64,
    pub orientation_factor: f64,
}

impl AdjustmentFactors {
    pub fn new(shading: ShadingLevel, orientation: RoofOrientation) -> Self {
        Self {
            shading_factor: shading_factor(shading),
            orientation_factor: orientation_factor(orientation),
        }
    }

    pub fn combined(&self) -> f64 {
        self.shading_factor * self.orientation_factor
    }
}

pub fn shading_factor(level: ShadingLevel) -> f64 {
    match level {
        ShadingLevel::None => 1.00,
        ShadingLevel::Minimal => 0.95,
        ShadingLevel::Moderate => 0.85,
        ShadingLevel::Heavy => 0.70,
        ShadingLevel::Unknown => 1.00,
    }
}

pub fn orientation_factor(orientation: RoofOrientation) -> f64 {
    match orientation {
        RoofOrientation::South => 1.00,
        RoofOrientation::Southwest | RoofOrientation::Southeast => 0.95,
        RoofOrientation::East | RoofOrientation::West => 0.85,
        RoofOrientation::Mixed => 0.90,
        RoofOrientation::North => 0.60,
        RoofOrientation::NotSure | RoofOrientation::Unknown => 1.00,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ShadingLevel::None, 1.00)]
    #[case(ShadingLevel::Minimal, 0.95)]
    #[case(ShadingLevel::Moderate, 0.85)]
    #[case(ShadingLevel::Heavy, 0.70)]
    #[case(ShadingLevel::Unknown, 1.00)]
    fn shading(#[case] level: ShadingLevel, #[case] expected: f64) {
        assert_eq!(shading_factor(level), expected);
    }

    #[rstest]
    #[case(RoofOrientation::South, 1.00)]
    #[case(RoofOrientation::Southwest, 0.95)]
    #[case(RoofOrientation::Southeast, 0.95)]
    #[case(RoofOrientation::East, 0.85)]
    #[case(RoofOrientation::West, 0.85)]
    #[case(RoofOrientation::Mixed, 0.90)]
    #[case(RoofOrientation::North, 0.60)]
    #[case(RoofOrientation::NotSure, 1.00)]
    fn orientation(#[case] o: RoofOrientation, #[case] expected: f64) {
        assert_eq!(orientation_factor(o), expected);
    }

    #[test]
    fn south_is_the_maximum() {
        let south = orientation_factor(RoofOrientation::South);
        assert_eq!(south, 1.0);
        for other in RoofOrientation::ALL {
            assert!(south >= orientation_factor(other), "{other:?}");
        }
    }

    #[test]
    fn all_factors_are_in_unit_interval() {
        for orientation in RoofOrientation::ALL {
            let f = orientation_factor(orientation);
            assert!(f > 0.0 && f <= 1.0);
        }
        for level in [
            ShadingLevel::None,
            ShadingLevel::Minimal,
            ShadingLevel::Moderate,
            ShadingLevel::Heavy,
            ShadingLevel::Unknown,
        ] {
            let f = shading_factor(level);
            assert!(f > 0.0 && f <= 1.0);
        }
    }
}
