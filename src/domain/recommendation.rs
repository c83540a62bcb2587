use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TruckCategory {
    /// Dry van, no refrigeration.
    Standard,
    /// Reefer.
    TemperatureControlled,
}

impl TruckCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TruckCategory::Standard => "Dry Truck",
            TruckCategory::TemperatureControlled => "Reefer Truck",
        }
    }

    pub fn rationale(&self, band: ComfortBand) -> String {
        match self {
            TruckCategory::Standard => {
                format!("{:.0}°F - {:.0}°F", band.min, band.max)
            }
            TruckCategory::TemperatureControlled => {
                format!("Outside {:.0}°F - {:.0}°F", band.min, band.max)
            }
        }
    }
}

/// Inclusive temperature range (°F) that is safe without refrigeration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ComfortBand {
    pub min: f64,
    pub max: f64,
}

impl ComfortBand {
    pub const DEFAULT: ComfortBand = ComfortBand {
        min: 40.0,
        max: 60.0,
    };

    pub fn contains(&self, temperature: f64) -> bool {
        (self.min..=self.max).contains(&temperature)
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl Default for ComfortBand {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub category: TruckCategory,
    pub band: ComfortBand,
}

impl RecommendationResult {
    pub fn summary(&self) -> String {
        format!(
            "{} ({})",
            self.category.label(),
            self.category.rationale(self.band)
        )
    }
}

pub fn recommend(average: f64) -> TruckCategory {
    recommend_in(ComfortBand::DEFAULT, average)
}

pub fn recommend_in(band: ComfortBand, average: f64) -> TruckCategory {
    if band.contains(average) {
        TruckCategory::Standard
    } else {
        TruckCategory::TemperatureControlled
    }
}

pub fn recommendation_for(average: f64) -> RecommendationResult {
    RecommendationResult {
        category: recommend(average),
        band: ComfortBand::DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_is_closed_on_both_ends() {
        assert_eq!(recommend(40.0), TruckCategory::Standard);
        assert_eq!(recommend(60.0), TruckCategory::Standard);
        assert_eq!(recommend(50.0), TruckCategory::Standard);
    }

    #[test]
    fn outside_band_needs_reefer() {
        for temperature in [-10.0, 25.0, 39.99, 60.01, 95.0] {
            assert_eq!(
                recommend(temperature),
                TruckCategory::TemperatureControlled,
                "{temperature}°F"
            );
        }
    }

    #[test]
    fn recommend_is_pure() {
        assert_eq!(recommend(52.3), recommend(52.3));
        assert_eq!(recommend(12.0), recommend(12.0));
    }

    #[test]
    fn midpoint_of_default_band() {
        assert_eq!(ComfortBand::DEFAULT.midpoint(), 50.0);
    }

    #[test]
    fn summary_reads_like_a_label() {
        assert_eq!(recommendation_for(45.0).summary(), "Dry Truck (40°F - 60°F)");
        assert_eq!(
            recommendation_for(75.0).summary(),
            "Reefer Truck (Outside 40°F - 60°F)"
        );
    }
}
