mod bar_chart;
mod date_range_picker;
mod header;
mod kpi_card;
mod plotly;
mod sales_chart;
mod state_summary;
mod user_menu;
mod view;

pub use view::Dashboard;
