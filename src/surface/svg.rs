use crate::foundation::core::{Color, Dimensions, Point};
use crate::surface::glow::glow_layers;
use std::fmt::Write as _;

/// Build the SVG document for one frame: a solid background, the two blur filters, and three
/// glow circles per point.
///
/// `points` and `colors` are zipped; extra entries on either side are ignored.
pub fn scene_svg(
    dims: Dimensions,
    background: [u8; 3],
    points: &[Point],
    colors: &[Color],
) -> String {
    let mut out = String::with_capacity(256 + points.len() * 320);
    let [br, bg, bb] = background;
    // Writing into a String is infallible.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = dims.width,
        h = dims.height
    );
    out.push_str(
        r#"<defs><filter id="blur" x="-100%" y="-100%" width="300%" height="300%"><feGaussianBlur stdDeviation="30"/></filter><filter id="coreBlur" x="-100%" y="-100%" width="300%" height="300%"><feGaussianBlur stdDeviation="15"/></filter></defs>"#,
    );
    out.push('\n');
    let _ = writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="rgb({br}, {bg}, {bb})"/>"#
    );

    out.push_str(r#"<g id="pointsGroup">"#);
    for (p, &color) in points.iter().zip(colors) {
        out.push_str("<g>");
        for layer in glow_layers(color) {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                p.x,
                p.y,
                layer.radius,
                layer.css_fill()
            );
            if let Some((id, _)) = layer.blur {
                let _ = write!(out, r#" filter="url(#{id})""#);
            }
            if layer.opacity < 1.0 {
                let _ = write!(out, r#" opacity="{}""#, layer.opacity);
            }
            out.push_str("/>");
        }
        out.push_str("</g>");
    }
    out.push_str("</g>\n</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/svg.rs"]
mod tests;
