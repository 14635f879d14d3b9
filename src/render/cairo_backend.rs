use cairo::{Context, Format, ImageSurface};
use pango::{FontDescription, Weight};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use crate::error::{RiskChartError, RiskChartResult};
use crate::render::{
    Color, LineStrokeStyle, RectCorners, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextWeight,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo offscreen renderer.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> RiskChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(RiskChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(0.02, 0.02, 0.02),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> RiskChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: &Path) -> RiskChartResult<()> {
        let mut file = File::create(path).map_err(|err| {
            RiskChartError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            RiskChartError::InvalidData(format!("failed to write png `{}`: {err}", path.display()))
        })
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RiskChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for layer in &frame.layers {
            for rect in &layer.rects {
                append_rect_path(context, *rect);
                apply_color(context, rect.fill_color);
                if rect.border_width > 0.0 {
                    context
                        .fill_preserve()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    apply_color(context, rect.border_color);
                    context.set_line_width(rect.border_width);
                    context.stroke().map_err(|err| {
                        map_backend_error("failed to stroke rectangle border", err)
                    })?;
                } else {
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                }
                stats.rects_drawn += 1;
            }

            for line in &layer.lines {
                apply_color(context, line.color);
                context.set_line_width(line.stroke_width);
                match line.stroke_style {
                    LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
                    LineStrokeStyle::Dashed { dash_px, gap_px } => {
                        context.set_dash(&[dash_px, gap_px], 0.0);
                    }
                }
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                stats.lines_drawn += 1;
            }
            context.set_dash(&[], 0.0);

            for text in &layer.texts {
                let layout = pangocairo::functions::create_layout(context);
                let mut font_description =
                    FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
                if text.weight == TextWeight::SemiBold {
                    font_description.set_weight(Weight::Semibold);
                }
                layout.set_font_description(Some(&font_description));
                layout.set_text(&text.text);

                let (text_width, _text_height) = layout.pixel_size();
                let x = match text.h_align {
                    TextHAlign::Left => text.x,
                    TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                    TextHAlign::Right => text.x - f64::from(text_width),
                };

                apply_color(context, text.color);
                context.move_to(x, text.y);
                pangocairo::functions::show_layout(context, &layout);
                stats.texts_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RiskChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)?;
        drop(context);
        self.surface.flush();
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 || rect.width <= 0.0 || rect.height <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let bottom_radius = match rect.rounded_corners {
        RectCorners::All => radius,
        RectCorners::Top => 0.0,
    };
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    if bottom_radius > 0.0 {
        context.arc(right - bottom_radius, bottom - bottom_radius, bottom_radius, 0.0, FRAC_PI_2);
        context.arc(left + bottom_radius, bottom - bottom_radius, bottom_radius, FRAC_PI_2, PI);
    } else {
        context.line_to(right, bottom);
        context.line_to(left, bottom);
    }
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> RiskChartError {
    RiskChartError::InvalidData(format!("{prefix}: {err}"))
}
