use crate::foundation::core::Color;

/// Per-channel boost applied to the core highlight.
pub const CORE_BOOST: i32 = 50;

/// One circle drawn for a point.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowLayer {
    /// Circle radius.
    pub radius: f64,
    /// Fill opacity in `0..=1`.
    pub opacity: f64,
    /// Gaussian blur filter id and standard deviation, if blurred.
    pub blur: Option<(&'static str, f64)>,
    /// Fill color.
    pub fill: Color,
}

impl GlowLayer {
    /// CSS `rgb(r, g, b)` for the fill.
    pub fn css_fill(&self) -> String {
        css_rgb(self.fill)
    }
}

/// Outer glow, inner glow and core for a composited color, drawn in that order.
///
/// The glows use the composited channels as-is; only the core is clamped, after adding
/// [`CORE_BOOST`].
pub fn glow_layers(color: Color) -> [GlowLayer; 3] {
    [
        GlowLayer {
            radius: 60.0,
            opacity: 0.4,
            blur: Some(("blur", 30.0)),
            fill: color,
        },
        GlowLayer {
            radius: 40.0,
            opacity: 0.6,
            blur: Some(("coreBlur", 15.0)),
            fill: color,
        },
        GlowLayer {
            radius: 16.0,
            opacity: 1.0,
            blur: None,
            fill: core_highlight(color),
        },
    ]
}

/// `min(255, c + 50)` per channel.
pub fn core_highlight(color: Color) -> Color {
    let boost = |c: i32| c.saturating_add(CORE_BOOST).min(255);
    Color::new(boost(color.r), boost(color.g), boost(color.b))
}

/// CSS `rgb(r, g, b)` with raw channel values.
pub fn css_rgb(color: Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

#[cfg(test)]
#[path = "../../tests/unit/surface/glow.rs"]
mod tests;
