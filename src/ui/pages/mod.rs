pub mod planner;
pub mod savings;

pub use planner::PlannerPage;
pub use savings::SavingsPage;
