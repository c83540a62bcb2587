//! Command-line front end.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use time::{macros::format_description, Date};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{find_route, ForecastWindow, RoutePlan, RouteRecord, Session, StateReading};
use crate::infra::openweather::build_planner;
use crate::util::{format::format_currency, routes::load_routes, version::APP_NAME};

#[derive(Debug, Parser)]
#[command(name = "route-temp-planner", version, about = "Dry or reefer? Checks forecast temperatures along outbound routes.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List destinations served from the origin.
    Destinations {
        /// Only show destinations containing this text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Recommend a truck for one or more destinations.
    Plan {
        #[arg(required = true)]
        destinations: Vec<String>,
        /// Delivery date (YYYY-MM-DD). Defaults to today.
        #[arg(long, value_parser = parse_date, conflicts_with = "current")]
        date: Option<Date>,
        /// Use current conditions instead of a forecast day.
        #[arg(long)]
        current: bool,
        /// Print the result bundle as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the dates the forecast can answer for.
    Dates,
}

#[derive(Serialize)]
struct PlanReport<'a> {
    session: Uuid,
    plans: &'a [RoutePlan],
    total_savings: f64,
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command {
        Command::Destinations { search } => {
            let routes = load_routes(&config).context("loading route dataset")?;
            print!("{}", render_destinations(&routes, search.as_deref()));
        }
        Command::Dates => {
            let window = ForecastWindow::starting_today(config.forecast_horizon_days);
            for date in window.available_dates() {
                println!("{}", format_date(date));
            }
        }
        Command::Plan {
            destinations,
            date,
            current,
            json,
        } => {
            let today = ForecastWindow::starting_today(config.forecast_horizon_days).today();
            let target = if current {
                None
            } else {
                Some(date.unwrap_or(today))
            };
            plan(&config, &destinations, target, json).await?;
        }
    }
    Ok(())
}

async fn plan(
    config: &Config,
    queries: &[String],
    target: Option<Date>,
    json: bool,
) -> anyhow::Result<()> {
    let routes = load_routes(config).context("loading route dataset")?;
    let selected = resolve_destinations(&routes, queries)?;

    let planner = build_planner(config).context("weather lookups are unavailable")?;

    let mut session = Session::new();
    let span = tracing::info_span!("session", id = %session.id());
    async {
        for route in selected {
            let plan = planner.plan(route, target).await;
            session.record_plan(plan);
        }
    }
    .instrument(span)
    .await;

    if json {
        let report = PlanReport {
            session: session.id(),
            plans: session.history(),
            total_savings: session.ledger().total(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{APP_NAME}");
        for plan in session.history() {
            println!();
            print!("{}", render_plan(plan));
        }
        println!();
        println!(
            "Session savings: {} across {} dry-truck shipment(s)",
            format_currency(session.ledger().total()),
            session.ledger().records().len()
        );
    }
    Ok(())
}

/// Resolves every query before any network traffic so a typo fails fast.
fn resolve_destinations<'a>(
    routes: &'a [RouteRecord],
    queries: &[String],
) -> anyhow::Result<Vec<&'a RouteRecord>> {
    queries
        .iter()
        .map(|query| {
            find_route(routes, query).ok_or_else(|| anyhow!("unknown destination: {query}"))
        })
        .collect()
}

fn parse_date(raw: &str) -> Result<Date, String> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

fn render_destinations(routes: &[RouteRecord], search: Option<&str>) -> String {
    let mut out = String::new();
    for route in routes
        .iter()
        .filter(|route| search.map_or(true, |query| route.matches(query)))
    {
        out.push_str(&format!(
            "{:<32} {:>12}  {} state(s)\n",
            route.destination,
            format_currency(route.base_cost),
            route.states.len()
        ));
    }
    if out.is_empty() {
        out.push_str("No destinations match.\n");
    }
    out
}

fn render_plan(plan: &RoutePlan) -> String {
    let mut out = String::new();
    let when = if plan.current_conditions {
        "current conditions".to_string()
    } else {
        format_date(plan.date)
    };
    out.push_str(&format!("{} -> {} ({when})\n", plan.origin, plan.destination));

    out.push_str(&format!("  {:<20} {:>8} {:>8} {:>8}\n", "State", "Min", "Max", "Avg"));
    for entry in &plan.temperatures.entries {
        match &entry.reading {
            StateReading::Measured(summary) => out.push_str(&format!(
                "  {:<20} {:>8.2} {:>8.2} {:>8.2}\n",
                entry.state, summary.min, summary.max, summary.average
            )),
            StateReading::Failed(reason) => {
                out.push_str(&format!("  {:<20} {:>8}  {reason}\n", entry.state, "n/a"))
            }
        }
    }

    match (plan.average_temperature, plan.recommendation, plan.costs) {
        (Some(average), Some(recommendation), Some(costs)) => {
            out.push_str(&format!("  Average: {average:.2}°F\n"));
            out.push_str(&format!("  Recommendation: {}\n", recommendation.summary()));
            out.push_str(&format!(
                "  Reefer {} | Dry {} | Savings {} ({:.2}%)\n",
                format_currency(costs.controlled_cost),
                format_currency(costs.standard_cost),
                format_currency(costs.savings),
                costs.savings_percent
            ));
        }
        _ => out.push_str("  Recommendation unavailable\n"),
    }

    if !plan.date_options.is_empty() {
        out.push_str("  Following days:\n");
        for option in &plan.date_options {
            let marker = if plan.optimal.as_ref() == Some(option) { " *" } else { "" };
            out.push_str(&format!(
                "    {} {:>7.2}°F {}{marker}\n",
                format_date(option.date),
                option.average_temperature,
                option.category.label()
            ));
        }
    }
    if let Some(better) = plan.better_date() {
        out.push_str(&format!(
            "  Consider shipping on {} ({:.2}°F)\n",
            format_date(better.date),
            better.average_temperature
        ));
    }

    for warning in &plan.warnings {
        out.push_str(&format!("  ! {warning}\n"));
    }
    out
}

pub fn validate_args(cli: &Cli) -> anyhow::Result<()> {
    if let Command::Plan { destinations, .. } = &cli.command {
        if destinations.iter().all(|query| query.trim().is_empty()) {
            bail!("at least one destination is required");
        }
    }
    Ok(())
}
