use dioxus::prelude::*;

use crate::domain::Session;
use crate::ui::components::{
    kpi_card::KpiCard,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;
use crate::util::format::format_currency;

#[derive(Clone, Debug, PartialEq)]
struct HistoryRow {
    destination: String,
    date: String,
    outcome: String,
    savings: String,
}

fn history_rows(session: &Session) -> Vec<HistoryRow> {
    session
        .history()
        .iter()
        .map(|plan| HistoryRow {
            destination: plan.destination.clone(),
            date: if plan.current_conditions {
                format!("{} (current)", plan.date)
            } else {
                plan.date.to_string()
            },
            outcome: plan
                .recommendation
                .map(|result| result.category.label().to_string())
                .unwrap_or_else(|| "No data".to_string()),
            savings: plan
                .costs
                .map(|costs| format_currency(costs.savings))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

#[component]
pub fn SavingsPage() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (session_id, total, booked, rows) = session.with(|s| {
        (
            s.id().to_string(),
            s.ledger().total(),
            s.ledger().records().len(),
            history_rows(s),
        )
    });
    let planned = rows.len();

    rsx! {
        div { class: "stack",
            section { class: "row",
                div {
                    h2 { "Session savings" }
                    p { class: theme::MUTED, "Session {session_id}" }
                }
                button {
                    class: theme::BTN_SECONDARY,
                    disabled: planned == 0,
                    onclick: move |_| {
                        session.with_mut(|s| s.reset());
                        push_toast(toasts, ToastKind::Info, "Started a new session.");
                    },
                    "Reset"
                }
            }

            div { class: "kpi-grid",
                KpiCard {
                    title: "Total savings".to_string(),
                    value: format_currency(total),
                    description: Some("Dry trucks booked instead of reefers".to_string()),
                }
                KpiCard { title: "Routes planned".to_string(), value: planned.to_string() }
                KpiCard { title: "Dry trucks".to_string(), value: booked.to_string() }
            }

            div { class: theme::PANEL,
                if rows.is_empty() {
                    p { class: theme::MUTED, "No routes planned yet." }
                } else {
                    table { class: "temperature-table",
                        thead {
                            tr {
                                th { "Destination" }
                                th { "Date" }
                                th { "Truck" }
                                th { "Savings" }
                            }
                        }
                        tbody {
                            for (idx, row) in rows.into_iter().enumerate() {
                                tr { key: "{idx}",
                                    td { "{row.destination}" }
                                    td { "{row.date}" }
                                    td { "{row.outcome}" }
                                    td { "{row.savings}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
