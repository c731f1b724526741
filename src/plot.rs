//! Three-panel summary figure: win probability pie, score distributions and
//! margin of victory.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use tracing::info;

use crate::config::SimConfig;
use crate::constants::{MARGIN_HISTOGRAM_BINS, SCORE_HISTOGRAM_BINS};
use crate::error::SimulationError;
use crate::histogram::DensityHistogram;
use crate::report::{format_count, SummaryStats};
use crate::simulation::SimulationResult;
use crate::team::TeamProfile;

const FIGURE_SIZE: (u32, u32) = (1800, 600);
const MARGIN_COLOR: RGBColor = RGBColor(0x88, 0x88, 0x88);
const MEAN_MARGIN_COLOR: RGBColor = RGBColor(0xFF, 0xA5, 0x00);

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Render the figure to a PNG at `path`.
pub fn render_figure(
    path: &Path,
    config: &SimConfig,
    result: &SimulationResult,
    stats: &SummaryStats,
) -> Result<(), SimulationError> {
    let color_a = team_color(&config.team_a)?;
    let color_b = team_color(&config.team_b)?;

    draw_figure(path, config, result, stats, color_a, color_b)
        .map_err(|e| SimulationError::Plot(e.to_string()))?;

    info!(path = %path.display(), "Saved simulation figure");
    Ok(())
}

fn team_color(team: &TeamProfile) -> Result<RGBColor, SimulationError> {
    let (r, g, b) = team.rgb()?;
    Ok(RGBColor(r, g, b))
}

fn draw_figure(
    path: &Path,
    config: &SimConfig,
    result: &SimulationResult,
    stats: &SummaryStats,
    color_a: RGBColor,
    color_b: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!(
        "{} - Monte Carlo Simulation ({} games)",
        config.title,
        format_count(stats.trials)
    );
    let body = root.titled(&caption, ("sans-serif", 26))?;
    let panels = body.split_evenly((1, 3));

    draw_win_pie(&panels[0], config, stats, color_a, color_b)?;
    draw_score_histograms(&panels[1], config, result, color_a, color_b)?;
    draw_margin_histogram(&panels[2], config, result, stats, color_a)?;

    root.present()?;
    Ok(())
}

fn draw_win_pie(
    area: &Panel<'_>,
    config: &SimConfig,
    stats: &SummaryStats,
    color_a: RGBColor,
    color_b: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let area = area.titled("Win Probability", ("sans-serif", 20))?;
    let (width, height) = area.dim_in_pixel();

    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.32;
    let sizes = [stats.win_pct_a, stats.win_pct_b];
    let colors = [color_a, color_b];
    let labels = [config.team_a.name.clone(), config.team_b.name.clone()];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", radius * 0.1).into_font().color(&WHITE));
    area.draw(&pie)?;
    Ok(())
}

fn draw_score_histograms(
    area: &Panel<'_>,
    config: &SimConfig,
    result: &SimulationResult,
    color_a: RGBColor,
    color_b: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let (Some(hist_a), Some(hist_b)) = (
        DensityHistogram::from_samples(&result.scores_a, SCORE_HISTOGRAM_BINS),
        DensityHistogram::from_samples(&result.scores_b, SCORE_HISTOGRAM_BINS),
    ) else {
        return Ok(());
    };

    let mut x_min = hist_a.start.min(hist_b.start);
    let mut x_max = hist_a.end().max(hist_b.end());
    if let Some(actual) = &config.actual {
        x_min = x_min.min(actual.score_a).min(actual.score_b);
        x_max = x_max.max(actual.score_a).max(actual.score_b);
    }
    let y_max = hist_a.max_density().max(hist_b.max_density()).max(1e-6) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption("Score Distribution", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Points Scored")
        .y_desc("Frequency")
        .draw()?;

    for (hist, team, color) in [
        (&hist_a, &config.team_a, color_a),
        (&hist_b, &config.team_b, color_b),
    ] {
        chart
            .draw_series(hist.bins().map(|(left, right, d)| {
                Rectangle::new([(left, 0.0), (right, d)], color.mix(0.6).filled())
            }))?
            .label(team.name.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.mix(0.6).filled())
            });
    }

    if let Some(actual) = &config.actual {
        for (score, team, color) in [
            (actual.score_a, &config.team_a, color_a),
            (actual.score_b, &config.team_b, color_b),
        ] {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(score, 0.0), (score, y_max)],
                    color.stroke_width(2),
                )))?
                .label(format!("Actual {} score ({})", team.abbreviation, score))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 12))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn draw_margin_histogram(
    area: &Panel<'_>,
    config: &SimConfig,
    result: &SimulationResult,
    stats: &SummaryStats,
    color_a: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let Some(hist) = DensityHistogram::from_samples(&result.margins, MARGIN_HISTOGRAM_BINS) else {
        return Ok(());
    };

    let actual_margin = config.actual.as_ref().map(|a| a.margin());
    let mut x_min = hist.start.min(0.0);
    let mut x_max = hist.end().max(0.0);
    if let Some(m) = actual_margin {
        x_min = x_min.min(m);
        x_max = x_max.max(m);
    }
    let y_max = hist.max_density().max(1e-6) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption("Margin of Victory", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(format!(
            "Score Margin (positive = {} wins)",
            config.team_a.abbreviation
        ))
        .y_desc("Frequency")
        .draw()?;

    chart.draw_series(hist.bins().map(|(left, right, d)| {
        Rectangle::new([(left, 0.0), (right, d)], MARGIN_COLOR.mix(0.7).filled())
    }))?;

    let mut markers = vec![(0.0, "Even game".to_string(), BLACK)];
    if let Some(m) = actual_margin {
        markers.push((
            m,
            format!("Actual margin ({:+} {})", m, config.team_a.abbreviation),
            color_a,
        ));
    }
    markers.push((
        stats.mean_margin,
        format!("Avg margin ({:.1})", stats.mean_margin),
        MEAN_MARGIN_COLOR,
    ));

    for (x, label, color) in markers {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, 0.0), (x, y_max)],
                color.stroke_width(2),
            )))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 12))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}
