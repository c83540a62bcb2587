//! Route planner: pick a destination and a day, get a truck recommendation.

use dioxus::prelude::*;
use time::{macros::format_description, Date};

use crate::app::Workspace;
use crate::domain::{ForecastWindow, RoutePlan, RouteRecord, Session};
use crate::infra::openweather::build_planner;
use crate::ui::components::{
    kpi_card::KpiCard,
    recommendation_panel::RecommendationPanel,
    temperature_table::TemperatureTable,
    toast::{push_toast, ToastKind, ToastMessage},
};
use crate::ui::theme;
use crate::util::format::format_currency;

fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

#[component]
pub fn PlannerPage() -> Element {
    let workspace = use_context::<Signal<Workspace>>();
    let mut session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<String>);
    let mut date_choice = use_signal(|| None::<Date>);
    let mut use_current = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut latest = use_signal(|| None::<RoutePlan>);

    let (routes, config, blocked) = workspace.with(|w| {
        (
            w.routes.clone(),
            w.config.clone(),
            w.blocking_error.is_some(),
        )
    });

    let window = ForecastWindow::starting_today(config.forecast_horizon_days);
    let dates = window.available_dates();
    let target_date = date_choice()
        .filter(|date| window.contains(*date))
        .unwrap_or(window.today());

    let search = query();
    let matches: Vec<RouteRecord> = routes
        .iter()
        .filter(|route| route.matches(&search))
        .cloned()
        .collect();
    let chosen: Option<RouteRecord> = selected()
        .and_then(|destination| routes.iter().find(|route| route.destination == destination).cloned());
    let chosen_states = chosen
        .as_ref()
        .map(|route| route.states.join(" → "))
        .unwrap_or_default();

    let can_calculate = !blocked && !busy() && chosen.is_some();

    let calculate = move |_: MouseEvent| {
        let Some(route) = chosen.clone() else {
            push_toast(toasts, ToastKind::Warning, "Pick a destination first.");
            return;
        };
        let config = config.clone();
        let target = if use_current() { None } else { Some(target_date) };
        busy.set(true);

        spawn(async move {
            match build_planner(&config) {
                Ok(planner) => {
                    let plan = planner.plan(&route, target).await;
                    for warning in &plan.warnings {
                        push_toast(toasts, ToastKind::Warning, warning.clone());
                    }
                    let booked = session.with_mut(|s| s.record_plan(plan.clone()));
                    if let Some(record) = booked {
                        push_toast(
                            toasts,
                            ToastKind::Success,
                            format!(
                                "Dry truck to {} saves {}.",
                                record.destination,
                                format_currency(record.savings)
                            ),
                        );
                    }
                    latest.set(Some(plan));
                }
                Err(err) => {
                    tracing::error!(%err, "planner unavailable");
                    push_toast(toasts, ToastKind::Error, format!("Weather lookups unavailable: {err}"));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "stack",
            section { class: theme::PANEL,
                h2 { "Plan a shipment" }
                p { class: theme::MUTED, "Forecast temperatures along the route decide between a dry and a reefer truck." }

                div { class: "form-grid",
                    label { class: theme::LABEL, "Destination" }
                    div { class: "stack-tight",
                        input {
                            class: theme::INPUT,
                            placeholder: "Search destinations",
                            value: "{search}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                        select {
                            class: theme::INPUT,
                            value: selected().unwrap_or_default(),
                            onchange: move |evt| {
                                let value = evt.value();
                                selected.set((!value.is_empty()).then_some(value));
                            },
                            option { value: "", "Select a destination ({matches.len()} shown)" }
                            for route in matches.iter() {
                                option { key: "{route.destination}", value: "{route.destination}", "{route.destination}" }
                            }
                        }
                        if !chosen_states.is_empty() {
                            p { class: theme::MUTED, "{chosen_states}" }
                        }
                    }

                    label { class: theme::LABEL, "Delivery date" }
                    div { class: "row",
                        select {
                            class: theme::INPUT,
                            disabled: use_current(),
                            value: "{target_date}",
                            onchange: move |evt| date_choice.set(parse_date(&evt.value())),
                            for date in dates.iter() {
                                option { key: "{date}", value: "{date}", "{date}" }
                            }
                        }
                        label { class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: use_current(),
                                onchange: move |evt| use_current.set(evt.checked()),
                            }
                            span { "Current conditions" }
                        }
                    }
                }

                button {
                    class: theme::BTN_PRIMARY,
                    disabled: !can_calculate,
                    onclick: calculate,
                    if busy() { "Checking the route…" } else { "Calculate" }
                }
            }

            if let Some(plan) = latest() {
                PlanView { plan }
            }
        }
    }
}

#[component]
fn PlanView(plan: RoutePlan) -> Element {
    let when = if plan.current_conditions {
        "current conditions".to_string()
    } else {
        plan.date.to_string()
    };
    let average = plan
        .average_temperature
        .map(|value| format!("{value:.2}°F"))
        .unwrap_or_else(|| "n/a".to_string());
    let measured = format!(
        "{} of {} states measured",
        plan.temperatures.measured_count(),
        plan.temperatures.entries.len()
    );
    let better = plan.better_date().map(|candidate| {
        format!(
            "Consider {} instead: {:.2}°F, {}.",
            candidate.date,
            candidate.average_temperature,
            candidate.category.label()
        )
    });
    let options: Vec<(String, String, &'static str, &'static str)> = plan
        .date_options
        .iter()
        .map(|option| {
            (
                option.date.to_string(),
                format!("{:.2}°F", option.average_temperature),
                option.category.label(),
                if plan.optimal.as_ref() == Some(option) {
                    "optimal"
                } else {
                    ""
                },
            )
        })
        .collect();

    rsx! {
        section { class: "stack",
            h2 { "{plan.origin} → {plan.destination}" }
            p { class: theme::MUTED, "{when}" }

            div { class: "kpi-grid",
                KpiCard { title: "Route average".to_string(), value: average, description: Some(measured) }
                if let Some(costs) = plan.costs {
                    KpiCard {
                        title: "Reefer cost".to_string(),
                        value: format_currency(costs.controlled_cost),
                    }
                    KpiCard {
                        title: "Dry cost".to_string(),
                        value: format_currency(costs.standard_cost),
                    }
                    KpiCard {
                        title: "Savings".to_string(),
                        value: format_currency(costs.savings),
                        description: Some(format!("{:.2}% of the reefer cost", costs.savings_percent)),
                    }
                }
            }

            if let (Some(recommendation), Some(value)) = (plan.recommendation, plan.average_temperature) {
                RecommendationPanel { recommendation, average: value }
            }

            div { class: theme::PANEL,
                h3 { class: theme::LABEL, "Temperatures along the route" }
                TemperatureTable { temperatures: plan.temperatures.clone() }
            }

            if !options.is_empty() {
                div { class: theme::PANEL,
                    h3 { class: theme::LABEL, "Following days" }
                    ul { class: "date-options",
                        for (date, temperature, label, class) in options {
                            li { key: "{date}", class,
                                span { "{date}" }
                                span { "{temperature}" }
                                span { "{label}" }
                            }
                        }
                    }
                    if let Some(hint) = better {
                        p { class: "hint", "{hint}" }
                    }
                }
            }

            if !plan.warnings.is_empty() {
                div { class: "{theme::PANEL} warnings",
                    h3 { class: theme::LABEL, "Warnings" }
                    ul {
                        for warning in plan.warnings.iter() {
                            li { "{warning}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn date_options_parse_from_select_values() {
        assert_eq!(parse_date("2026-10-20"), Some(date!(2026 - 10 - 20)));
        assert_eq!(parse_date(""), None);
    }
}
