pub mod kpi_card;
pub mod recommendation_panel;
pub mod temperature_table;
pub mod toast;
