mod frame;
mod null_renderer;
mod primitives;

pub use frame::{CanvasLayerKind, LayerPrimitives, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectCorners, RectPrimitive, TextHAlign, TextPrimitive,
    TextWeight,
};

use crate::error::RiskChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart data and hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RiskChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
