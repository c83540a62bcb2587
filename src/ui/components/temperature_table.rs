use dioxus::prelude::*;

use crate::domain::{RouteTemperatureResult, StateReading, StateTemperature};

#[component]
pub fn TemperatureTable(temperatures: RouteTemperatureResult) -> Element {
    let rows: Vec<TemperatureRow> = temperatures.entries.iter().map(TemperatureRow::from).collect();
    let skipped = temperatures.skipped.join(", ");

    if rows.is_empty() {
        return rsx! {
            p { class: "muted", "No states on this route have coordinates." }
        };
    }

    rsx! {
        table { class: "temperature-table",
            thead {
                tr {
                    th { "State" }
                    th { "Min °F" }
                    th { "Max °F" }
                    th { "Avg °F" }
                    th { "" }
                }
            }
            tbody {
                for (idx, row) in rows.into_iter().enumerate() {
                    tr { key: "{idx}", class: row.class,
                        td { "{row.state}" }
                        td { "{row.min}" }
                        td { "{row.max}" }
                        td { "{row.average}" }
                        td { class: "muted", "{row.note.clone().unwrap_or_default()}" }
                    }
                }
            }
            if !skipped.is_empty() {
                tfoot {
                    tr {
                        td { colspan: "5", class: "muted",
                            "Not on the map: {skipped}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct TemperatureRow {
    state: String,
    min: String,
    max: String,
    average: String,
    note: Option<String>,
    class: &'static str,
}

impl From<&StateTemperature> for TemperatureRow {
    fn from(entry: &StateTemperature) -> Self {
        match &entry.reading {
            StateReading::Measured(summary) => TemperatureRow {
                state: entry.state.clone(),
                min: format!("{:.2}", summary.min),
                max: format!("{:.2}", summary.max),
                average: format!("{:.2}", summary.average),
                note: None,
                class: "",
            },
            StateReading::Failed(reason) => TemperatureRow {
                state: entry.state.clone(),
                min: "n/a".to_string(),
                max: "n/a".to_string(),
                average: "n/a".to_string(),
                note: Some(reason.to_string()),
                class: "row-failed",
            },
        }
    }
}
