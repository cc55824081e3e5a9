//! SVG rendering backend.

use crate::plotting::style::{FillStyle, LineStyle};
use crate::plotting::surface::Shape;

/// SVG rendering backend.
#[derive(Debug)]
pub struct SvgBackend {
    /// Viewport width
    pub width: f64,
    /// Viewport height
    pub height: f64,
    /// SVG content accumulated during rendering
    content: Vec<String>,
}

impl SvgBackend {
    /// Create a new SVG backend with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
        }
    }

    /// Draw a shape, tagging the outermost element with `class`.
    pub fn draw_shape(&mut self, class: Option<&str>, shape: &Shape) {
        let svg = shape_to_svg(class, shape);
        self.content.push(svg);
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" class="ev-svg" width="100%" viewBox="0 0 {} {}">
  {}
</svg>"#,
            self.width,
            self.height,
            self.content.join("\n  ")
        )
    }

}

fn class_attr(class: Option<&str>) -> String {
    class
        .map(|c| format!(" class=\"{}\"", c))
        .unwrap_or_default()
}

fn line_svg(class: Option<&str>, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) -> String {
    format!(
        "<line{} x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
        class_attr(class),
        x1,
        y1,
        x2,
        y2,
        style.to_svg_style()
    )
}

fn path_svg(class: Option<&str>, d: &str, style: &LineStyle) -> String {
    format!("<path{} d=\"{}\" {}/>", class_attr(class), d, style.to_svg_style())
}

fn circle_svg(class: Option<&str>, cx: f64, cy: f64, r: f64, style: &FillStyle) -> String {
    format!(
        "<circle{} cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" {}/>",
        class_attr(class),
        cx,
        cy,
        r,
        style.to_svg_style()
    )
}

/// Serialize one shape (and its children) to SVG markup.
pub fn shape_to_svg(class: Option<&str>, shape: &Shape) -> String {
    match shape {
        Shape::Path { d, style } => path_svg(class, d, style),
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            style,
        } => line_svg(class, *x1, *y1, *x2, *y2, style),
        Shape::Circle { cx, cy, r, fill } => circle_svg(class, *cx, *cy, *r, fill),
        Shape::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => format!(
            "<rect{} x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            class_attr(class),
            x,
            y,
            width,
            height,
            fill.to_svg_style()
        ),
        Shape::Text(text) => text.to_svg(class),
        Shape::Group {
            translate,
            children,
        } => {
            let inner: String = children.iter().map(|c| shape_to_svg(None, c)).collect();
            format!(
                "<g{} transform=\"translate({:.2},{:.2})\">{}</g>",
                class_attr(class),
                translate.0,
                translate.1,
                inner
            )
        }
    }
}
