//! Cost comparison between reefer and dry equipment, plus the session ledger.

use serde::Serialize;
use time::Date;

use super::recommendation::TruckCategory;

/// Reefer equipment is assumed to cost 40% more than a dry van.
pub const CONTROLLED_PREMIUM: f64 = 1.40;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CostComparison {
    pub controlled_cost: f64,
    pub standard_cost: f64,
    pub savings: f64,
    pub savings_percent: f64,
}

pub fn compute_savings(base_cost: f64, category: TruckCategory) -> CostComparison {
    let controlled_cost = base_cost * CONTROLLED_PREMIUM;
    let standard_cost = base_cost;

    let (savings, savings_percent) = match category {
        TruckCategory::Standard => {
            let savings = controlled_cost - standard_cost;
            let percent = if controlled_cost == 0.0 {
                0.0
            } else {
                savings / controlled_cost * 100.0
            };
            (savings, percent)
        }
        TruckCategory::TemperatureControlled => (0.0, 0.0),
    };

    CostComparison {
        controlled_cost,
        standard_cost,
        savings,
        savings_percent,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SavingsRecord {
    pub destination: String,
    pub savings: f64,
    pub date: Date,
}

/// Running savings for one session. Owned by the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SavingsLedger {
    records: Vec<SavingsRecord>,
}

impl SavingsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the savings when a dry truck was recommended. Reefer
    /// shipments realise nothing and are not recorded.
    pub fn record(
        &mut self,
        destination: &str,
        date: Date,
        category: TruckCategory,
        costs: &CostComparison,
    ) -> Option<&SavingsRecord> {
        if category != TruckCategory::Standard {
            return None;
        }

        self.records.push(SavingsRecord {
            destination: destination.to_string(),
            savings: costs.savings,
            date,
        });
        tracing::info!(
            destination,
            savings = costs.savings,
            total = self.total(),
            "recorded savings"
        );
        self.records.last()
    }

    pub fn total(&self) -> f64 {
        self.records.iter().map(|record| record.savings).sum()
    }

    pub fn records(&self) -> &[SavingsRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn reset(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn dry_truck_saves_forty_percent_of_base() {
        for cost in [1.0, 250.0, 1000.0, 2735.5] {
            let costs = compute_savings(cost, TruckCategory::Standard);
            assert!(approx(costs.savings, 0.40 * cost), "cost {cost}");
            assert!(approx(costs.controlled_cost, 1.40 * cost));
            assert_eq!(costs.standard_cost, cost);
            assert!(approx(costs.savings_percent, 0.40 / 1.40 * 100.0));
        }
    }

    #[test]
    fn reefer_saves_nothing() {
        let costs = compute_savings(1000.0, TruckCategory::TemperatureControlled);
        assert_eq!(costs.savings, 0.0);
        assert_eq!(costs.savings_percent, 0.0);
        assert!(approx(costs.controlled_cost, 1400.0));
    }

    #[test]
    fn zero_cost_does_not_produce_nan() {
        let costs = compute_savings(0.0, TruckCategory::Standard);
        assert_eq!(costs.savings, 0.0);
        assert_eq!(costs.savings_percent, 0.0);
    }

    #[test]
    fn compute_savings_is_pure() {
        assert_eq!(
            compute_savings(812.0, TruckCategory::Standard),
            compute_savings(812.0, TruckCategory::Standard)
        );
    }

    #[test]
    fn ledger_only_records_dry_trucks() {
        let mut ledger = SavingsLedger::new();
        let day = date!(2026 - 10 - 20);

        let dry = compute_savings(1000.0, TruckCategory::Standard);
        let reefer = compute_savings(500.0, TruckCategory::TemperatureControlled);

        assert!(ledger
            .record("Albany, New York", day, TruckCategory::Standard, &dry)
            .is_some());
        assert!(ledger
            .record("Miami, Florida", day, TruckCategory::TemperatureControlled, &reefer)
            .is_none());
        ledger.record("Hartford, Connecticut", day, TruckCategory::Standard, &dry);

        assert_eq!(ledger.records().len(), 2);
        assert!(approx(ledger.total(), 800.0));

        ledger.reset();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);
    }
}
