use uuid::Uuid;

use super::{
    planner::RoutePlan,
    savings::{SavingsLedger, SavingsRecord},
};

/// Planning state for one user. Every front end owns its own instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    id: Uuid,
    ledger: SavingsLedger,
    history: Vec<RoutePlan>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            ledger: SavingsLedger::new(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ledger(&self) -> &SavingsLedger {
        &self.ledger
    }

    pub fn history(&self) -> &[RoutePlan] {
        &self.history
    }

    pub fn latest(&self) -> Option<&RoutePlan> {
        self.history.last()
    }

    /// Keeps the plan and books its savings when a dry truck was chosen.
    pub fn record_plan(&mut self, plan: RoutePlan) -> Option<SavingsRecord> {
        let booked = match (plan.recommendation, plan.costs.as_ref()) {
            (Some(recommendation), Some(costs)) => self
                .ledger
                .record(&plan.destination, plan.date, recommendation.category, costs)
                .cloned(),
            _ => None,
        };
        tracing::debug!(session = %self.id, destination = %plan.destination, booked = booked.is_some(), "plan recorded");
        self.history.push(plan);
        booked
    }

    /// Starts over with a fresh id, an empty ledger and no history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
