// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of resolved arcs for `pielayout_demo`.

use kurbo::{Rect, Shape};
use peniko::Color;
use pielayout::ArcDescriptor;

/// Path flattening tolerance, in drawing-area units.
const TOLERANCE: f64 = 0.1;
const LABEL_FONT_SIZE: f64 = 11.0;

/// Renders `arcs` into a standalone SVG document.
///
/// The view box is the drawing area, grown to include any arc that overflows it (for
/// example a highlighted arc with extra radius).
pub(crate) fn render_svg(arcs: &[ArcDescriptor], area: Rect) -> String {
    let paths: Vec<_> = arcs.iter().map(|arc| arc.path(TOLERANCE)).collect();
    let view_box = paths
        .iter()
        .filter(|p| !p.elements().is_empty())
        .map(Shape::bounding_box)
        .fold(area, |acc, b| acc.union(b));

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');

    for (arc, path) in arcs.iter().zip(&paths) {
        if arc.padded_span() <= 0.0 {
            continue;
        }
        out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
        write_paint_attr(&mut out, "fill", arc.color);
        out.push_str(&format!(r#" data-index="{}""#, arc.index));
        if arc.corner_radius > 0.0 {
            out.push_str(&format!(r#" data-corner-radius="{}""#, arc.corner_radius));
        }
        out.push_str("/>\n");
    }

    for arc in arcs {
        let Some(text) = &arc.arc_label else {
            continue;
        };
        let anchor = arc.label_anchor();
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{LABEL_FONT_SIZE}" dominant-baseline="middle" text-anchor="middle""#,
            anchor.x, anchor.y
        ));
        write_paint_attr(&mut out, "fill", Color::WHITE);
        out.push('>');
        out.push_str(&escape_xml(text));
        out.push_str("</text>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use pielayout::{ArcLabel, Interaction, LayoutParams, Palette, PieSeries, ValueItem};

    use super::*;

    fn area() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn one_path_per_visible_arc() {
        let series = PieSeries::new("pie").with_data([
            ValueItem::new(0, 1.0).with_color(css::TOMATO),
            ValueItem::new(1, 0.0),
            ValueItem::new(2, 1.0),
        ]);
        let arcs = series.resolve(area(), &Interaction::new(), &Palette::default());
        let svg = render_svg(&arcs, area());
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(r##"fill="#ff6347""##), "{svg}");
        assert!(svg.contains(r#"data-index="2""#), "{svg}");
        assert!(!svg.contains(r#"data-index="1""#), "{svg}");
    }

    #[test]
    fn labels_are_escaped() {
        let series = PieSeries::new("pie")
            .with_data([ValueItem::new(0, 1.0).with_label("a<b & c")])
            .with_params(LayoutParams::default().with_arc_label(ArcLabel::Label, 0.0));
        let arcs = series.resolve(area(), &Interaction::new(), &Palette::default());
        let svg = render_svg(&arcs, area());
        assert!(svg.contains(">a&lt;b &amp; c</text>"), "{svg}");
    }

    #[test]
    fn view_box_grows_to_fit_overflowing_arcs() {
        let series = PieSeries::new("pie")
            .with_data([ValueItem::new(0, 1.0)])
            .with_params(LayoutParams::default().with_outer_radius(80.0));
        let arcs = series.resolve(area(), &Interaction::new(), &Palette::default());
        let svg = render_svg(&arcs, area());
        assert!(!svg.contains(r#"viewBox="0 0 100 100""#), "{svg}");
    }
}
