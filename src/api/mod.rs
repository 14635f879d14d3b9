mod chart_config;
mod engine;
mod frame_builder;
mod json_contract;
mod panel_layout;
mod render_style;
mod tooltip;
mod validation;

pub use chart_config::RiskChartConfig;
pub use engine::RiskChart;
pub use frame_builder::build_panel_frame;
pub use json_contract::{CHART_ROWS_JSON_SCHEMA_V1, ChartRowsJsonContractV1};
pub use panel_layout::{PanelLayout, format_value};
pub use render_style::RiskChartStyle;
pub use tooltip::{ChartTooltip, HoverPoint, TooltipEntry};
