//! # Theme Configuration
//!
//! Centralized color configuration for the water-use visualization. All
//! visual styling goes through these constants so the chart, axes, and shell
//! stay consistent.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Chart mark colors (water, bars, labels)
    pub chart: ChartColors,
    /// Button colors
    pub interactive: InteractiveColors,
    /// Background and container colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
}

/// Colors for the trigger button
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Button background while armed
    pub active_background: Color32,
    /// Button background once the trigger has fired
    pub inactive_background: Color32,
}

/// Colors for the chart marks themselves
#[derive(Debug, Clone)]
pub struct ChartColors {
    /// Fill of the pour rectangles and the settled bars
    pub water_fill: Color32,
    /// Bar fill before the water reaches it
    pub bar_fill_empty: Color32,
    /// Bar outline once filled
    pub bar_outline: Color32,
    /// Axis lines and tick marks
    pub axis_line: Color32,
    /// Axis tick labels and captions
    pub axis_text: Color32,
    /// Numeric water-use labels above the bars
    pub value_text: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Window background
    pub window_background: Color32,
    /// Chart card background and border
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
}

/// Text colors for the shell around the chart
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Heading above the chart
    pub heading: Color32,
    /// Button label
    pub button_text: Color32,
}

/// The active theme
pub const CURRENT_THEME: Theme = Theme {
    chart: ChartColors {
        // CSS "lightblue", the reference animation's water color
        water_fill: Color32::from_rgb(173, 216, 230),
        bar_fill_empty: Color32::WHITE,
        bar_outline: Color32::BLACK,
        axis_line: Color32::from_rgb(60, 60, 60),
        axis_text: Color32::from_rgb(60, 60, 60),
        value_text: Color32::BLACK,
    },
    interactive: InteractiveColors {
        active_background: Color32::from_rgb(79, 109, 245),
        inactive_background: Color32::from_rgb(180, 185, 195),
    },
    layout: LayoutColors {
        window_background: Color32::from_rgb(245, 248, 250),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        card_border: Color32::from_rgb(220, 220, 220),
    },
    typography: TypographyColors {
        heading: Color32::from_rgb(70, 70, 70),
        button_text: Color32::WHITE,
    },
};

/// Interpolate between two colors channel-wise, alpha included.
///
/// Used by the transition scheduler for fill/stroke animation (white bars
/// turning light blue, transparent strokes turning black).
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const WATER_FILL: Color32 = CURRENT_THEME.chart.water_fill;
    pub const BAR_FILL_EMPTY: Color32 = CURRENT_THEME.chart.bar_fill_empty;
    pub const BAR_OUTLINE: Color32 = CURRENT_THEME.chart.bar_outline;
    pub const AXIS_LINE: Color32 = CURRENT_THEME.chart.axis_line;
    pub const AXIS_TEXT: Color32 = CURRENT_THEME.chart.axis_text;
    pub const VALUE_TEXT: Color32 = CURRENT_THEME.chart.value_text;

    pub const ACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.active_background;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;

    pub const WINDOW_BACKGROUND: Color32 = CURRENT_THEME.layout.window_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_SHADOW: Color32 = CURRENT_THEME.layout.card_shadow;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;

    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
}
