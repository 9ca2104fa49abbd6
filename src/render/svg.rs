//! Writer für SVG-Dokumente aus einer RenderScene.

use crate::core::NodeKind;
use crate::routing::path::fmt;
use crate::shared::{NodeView, RenderScene};
use anyhow::{ensure, Result};
use glam::Vec2;
use quick_xml::escape::escape;

/// Rand um den Inhalt in der viewBox.
const VIEWBOX_MARGIN: f32 = 20.0;
/// Schriftgröße der Node-Labels.
const LABEL_FONT_SIZE: f32 = 12.0;

/// Schreibt die Szene als eigenständiges SVG-Dokument.
///
/// Zeichenreihenfolge: Verbindungen und Pfeile, dann Nodes mit Griffen,
/// zuletzt die Vorschau-Linie.
pub fn write_svg(scene: &RenderScene) -> Result<String> {
    let options = &scene.options;
    ensure!(
        options.line_width.is_finite() && options.line_width > 0.0,
        "Ungültige Linienstärke: {}",
        options.line_width
    );

    let (min, max) = scene
        .bounds()
        .map(|(min, max)| (min - Vec2::splat(VIEWBOX_MARGIN), max + Vec2::splat(VIEWBOX_MARGIN)))
        .unwrap_or((Vec2::ZERO, Vec2::splat(100.0)));
    let size = max - min;

    let stroke = css_color(options.stroke_color);
    let width = fmt(options.line_width);

    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
        fmt(min.x),
        fmt(min.y),
        fmt(size.x),
        fmt(size.y),
        fmt(size.x),
        fmt(size.y)
    ));

    output.push_str(&format!(
        "    <g id=\"connections\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{width}\">\n"
    ));
    for connection in &scene.connections {
        output.push_str(&format!(
            "        <path data-connection=\"{}\" d=\"{}\"/>\n",
            connection.id,
            connection.shape.path.to_svg_data()
        ));
        output.push_str(&format!(
            "        <path data-arrow=\"{}\" d=\"{}\"/>\n",
            connection.id,
            connection.shape.arrow.to_svg_data()
        ));
    }
    output.push_str("    </g>\n");

    output.push_str("    <g id=\"nodes\">\n");
    for node in &scene.nodes {
        write_node(&mut output, node, scene);
    }
    output.push_str("    </g>\n");

    if let Some((from, to)) = scene.preview_line {
        output.push_str(&format!(
            "    <line id=\"preview\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\" stroke-width=\"{width}\" stroke-dasharray=\"4 4\"/>\n",
            fmt(from.x),
            fmt(from.y),
            fmt(to.x),
            fmt(to.y),
        ));
    }

    output.push_str("</svg>\n");

    Ok(output)
}

fn write_node(output: &mut String, node: &NodeView, scene: &RenderScene) {
    let options = &scene.options;
    let rim = if node.hovered {
        options.hover_color
    } else if node.selected {
        options.selected_color
    } else {
        options.stroke_color
    };
    let rim = css_color(rim);
    let fill = css_color(options.node_fill_color);
    let width = fmt(options.line_width);
    let center = node.geometry.center();

    output.push_str(&format!("        <g data-node=\"{}\">\n", node.id));
    match node.kind {
        NodeKind::Start | NodeKind::End => {
            // Bounding-Box ist quadratisch, Radius = halbe kürzere Kante
            let radius = node.geometry.half_size().min_element();
            output.push_str(&format!(
                "            <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\" stroke=\"{rim}\" stroke-width=\"{width}\"/>\n",
                fmt(center.x),
                fmt(center.y),
                fmt(radius),
            ));
        }
        NodeKind::Process => {
            output.push_str(&format!(
                "            <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\" stroke=\"{rim}\" stroke-width=\"{width}\"/>\n",
                fmt(node.geometry.position.x),
                fmt(node.geometry.position.y),
                fmt(node.geometry.size.x),
                fmt(node.geometry.size.y),
            ));
        }
    }

    output.push_str(&format!(
        "            <text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>\n",
        fmt(center.x),
        fmt(center.y),
        fmt(LABEL_FONT_SIZE),
        escape(node.label.as_str())
    ));

    if let Some(handle) = node.connector_handle {
        output.push_str(&format!(
            "            <rect class=\"connector\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            fmt(handle.position.x),
            fmt(handle.position.y),
            fmt(handle.size.x),
            fmt(handle.size.y),
            css_color(options.stroke_color),
        ));
    }
    output.push_str("        </g>\n");
}

/// RGBA 0..1 → CSS `rgba(r, g, b, a)`.
fn css_color(color: [f32; 4]) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        fmt(color[3].clamp(0.0, 1.0))
    )
}
