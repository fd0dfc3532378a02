use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;

pub mod bars;
pub mod histogram;
pub mod trend;

pub const FONT: &str = "sans-serif";
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

// seaborn "pastel"
pub const PASTEL: [RGBColor; 10] = [
    RGBColor(0xA1, 0xC9, 0xF4),
    RGBColor(0xFF, 0xB4, 0x82),
    RGBColor(0x8D, 0xE5, 0xA1),
    RGBColor(0xFF, 0x9F, 0x9B),
    RGBColor(0xD0, 0xBB, 0xFF),
    RGBColor(0xDE, 0xBB, 0x9B),
    RGBColor(0xFA, 0xB0, 0xE4),
    RGBColor(0xCF, 0xCF, 0xCF),
    RGBColor(0xFF, 0xFE, 0xA3),
    RGBColor(0xB9, 0xF2, 0xF0),
];

pub const OUTLINE: RGBColor = RGBColor(0x55, 0x55, 0x55);
pub const ACCENT: RGBColor = RGBColor(0x4C, 0x72, 0xB0);
pub const MUTED_TEXT: RGBColor = RGBColor(0x80, 0x80, 0x80);

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("plotting error: {0}")]
    Draw(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    PerformanceDistribution,
    CognitiveComparison,
    PersonalityTraits,
    PerformanceTrend,
    IqDistribution,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind; 5] {
        &[
            ChartKind::PerformanceDistribution,
            ChartKind::CognitiveComparison,
            ChartKind::PersonalityTraits,
            ChartKind::PerformanceTrend,
            ChartKind::IqDistribution,
        ]
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::PerformanceDistribution => "performance_distribution_combined.png",
            ChartKind::CognitiveComparison => "cognitive_ability_comparison.png",
            ChartKind::PersonalityTraits => "personality_trait_insights.png",
            ChartKind::PerformanceTrend => "performance_trend_over_time.png",
            ChartKind::IqDistribution => "group_iq_analysis.png",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::PerformanceDistribution => "Performance Distribution",
            ChartKind::CognitiveComparison => "Cognitive Ability Comparison",
            ChartKind::PersonalityTraits => "Personality Trait Insights",
            ChartKind::PerformanceTrend => "Performance Trend Over Time",
            ChartKind::IqDistribution => "Group IQ Analysis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStatus {
    Rendered,
    NoData,
    Skipped,
}

pub fn palette(idx: usize) -> RGBColor {
    PASTEL[idx % PASTEL.len()]
}

/// Replaces a panel with its title and the no-data notice.
pub fn draw_no_data<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
) -> Result<(), RenderError> {
    let (width, height) = area.dim_in_pixel();
    let center_x = (width / 2) as i32;
    let title_style = TextStyle::from((FONT, 18).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    area.draw(&Text::new(title.to_string(), (center_x, 8), title_style))?;
    let body_style = TextStyle::from((FONT, 16).into_font())
        .color(&MUTED_TEXT)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        NO_DATA_MESSAGE,
        (center_x, (height / 2) as i32),
        body_style,
    ))?;
    Ok(())
}

/// Label for a category axis laid out at integer positions.
pub fn category_label(names: &[String], position: f64) -> String {
    let idx = position.round();
    if (position - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

/// Horizontal extent of bar `slot` out of `slots` within category `index`.
pub fn bar_span(index: usize, slot: usize, slots: usize) -> (f64, f64) {
    const GROUP_WIDTH: f64 = 0.8;
    let slots = slots.max(1);
    let width = GROUP_WIDTH / slots as f64;
    let lo = index as f64 - GROUP_WIDTH / 2.0 + width * slot as f64;
    (lo, lo + width)
}

/// Upper bound of a count or score axis with headroom above the tallest bar.
pub fn value_axis_max(max_value: f64) -> f64 {
    if !max_value.is_finite() || max_value <= 0.0 {
        1.0
    } else {
        max_value * 1.1
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/mod.rs"]
mod tests;
