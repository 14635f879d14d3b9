use crate::core::Viewport;
use crate::error::{RiskChartError, RiskChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Z-ordered canvas layers, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Cursor,
    Series,
    Axis,
    Tooltip,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [CanvasLayerKind; 6] = [
        CanvasLayerKind::Background,
        CanvasLayerKind::Grid,
        CanvasLayerKind::Cursor,
        CanvasLayerKind::Series,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Tooltip,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw layers in `CanvasLayerKind::CANONICAL_ORDER`; inside a layer
/// rects come first, then lines, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> &LayerPrimitives {
        let index = Self::layer_index(kind);
        &self.layers[index]
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut LayerPrimitives {
        let index = Self::layer_index(kind);
        &mut self.layers[index]
    }

    fn layer_index(kind: CanvasLayerKind) -> usize {
        CanvasLayerKind::CANONICAL_ORDER
            .iter()
            .position(|candidate| *candidate == kind)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    pub fn validate(&self) -> RiskChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(RiskChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for line in &layer.lines {
                line.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
