pub mod bar_layout;
pub mod chart_rows;
pub mod scenario;
pub mod types;
pub mod value_scale;

pub use bar_layout::{BarRect, GroupedBarGeometry, category_index_at, project_grouped_bars};
pub use chart_rows::{
    ChartData, ChartRow, MAX_CHART_ROWS, MAX_LABEL_CHARS, chart_data, has_result,
    placeholder_rows, result_to_chart_rows,
};
pub use scenario::{ScenarioResult, ScenarioResultSector};
pub use types::{PlotArea, Viewport};
pub use value_scale::ValueScale;
