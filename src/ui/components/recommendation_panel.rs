use dioxus::prelude::*;

use crate::domain::{RecommendationResult, TruckCategory};
use crate::ui::theme;

#[component]
pub fn RecommendationPanel(recommendation: RecommendationResult, average: f64) -> Element {
    let headline = recommendation.category.label();
    let rationale = recommendation.category.rationale(recommendation.band);
    let detail = match recommendation.category {
        TruckCategory::Standard => "Route stays inside the comfort band; no refrigeration needed.",
        TruckCategory::TemperatureControlled => "Route leaves the comfort band; keep the load refrigerated.",
    };
    let average = format!("{average:.2}°F");

    rsx! {
        div { class: "{theme::PANEL} {theme::category_class(recommendation.category)}",
            div { class: "row",
                span { class: theme::LABEL, "Recommendation" }
                span { class: theme::LABEL, "{rationale}" }
            }
            p { class: "kpi-value", "{headline}" }
            p { class: theme::MUTED, "Route average {average}. {detail}" }
        }
    }
}
