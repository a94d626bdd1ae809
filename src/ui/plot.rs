use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::color::{reds, ColorMap};
use crate::data::aggregate::{GenreCount, KindShare, TrendPoint};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render every chart of the dashboard from the current snapshot.
pub fn dashboard_charts(ui: &mut Ui, state: &AppState) {
    let snapshot = &state.snapshot;

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].label(RichText::new("Content Distribution: Movies vs TV Shows").heading());
        kind_donut(&mut cols[0], &snapshot.kinds, &state.colors);

        cols[1].label(RichText::new(format!("Top {} Genres", state.config.top_n)).heading());
        genre_bars(&mut cols[1], &snapshot.top_genres);
    });

    ui.add_space(8.0);
    ui.label(RichText::new("Content Growth Over Time").heading());
    let kinds: Vec<&str> = snapshot.kinds.iter().map(|s| s.kind.as_str()).collect();
    release_trend(ui, &snapshot.trend, &kinds, &state.colors);

    ui.add_space(8.0);
    ui.label(RichText::new("Titles Added per Year").heading());
    added_bars(ui, &snapshot.added_by_year);
}

// ---------------------------------------------------------------------------
// Donut: share of each content type
// ---------------------------------------------------------------------------

/// Inner radius as a fraction of the outer one.
const DONUT_HOLE: f32 = 0.4;
const DONUT_SEGMENTS: f32 = 128.0;

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + egui::vec2(angle.cos(), angle.sin()) * radius
}

fn kind_donut(ui: &mut Ui, shares: &[KindShare], colors: &ColorMap) {
    let size = egui::vec2(ui.available_width(), CHART_HEIGHT - 30.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let outer = rect.width().min(rect.height()) * 0.45;
    let inner = outer * DONUT_HOLE;

    if shares.is_empty() {
        painter.circle_stroke(center, outer, Stroke::new(1.0, Color32::LIGHT_GRAY));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "No titles in view",
            FontId::proportional(14.0),
            Color32::GRAY,
        );
        return;
    }

    let mut start = -FRAC_PI_2;
    for share in shares {
        let sweep = share.fraction as f32 * TAU;
        let color = colors.color_for(&share.kind);

        // Each slice is a fan of convex quads between the two radii.
        let steps = ((sweep / TAU) * DONUT_SEGMENTS).ceil().max(1.0) as usize;
        for i in 0..steps {
            let a0 = start + sweep * i as f32 / steps as f32;
            let a1 = start + sweep * (i + 1) as f32 / steps as f32;
            let quad = vec![
                polar(center, inner, a0),
                polar(center, outer, a0),
                polar(center, outer, a1),
                polar(center, inner, a1),
            ];
            painter.add(Shape::convex_polygon(quad, color, Stroke::new(0.5, color)));
        }

        if share.fraction >= 0.03 {
            painter.text(
                polar(center, (inner + outer) / 2.0, start + sweep / 2.0),
                Align2::CENTER_CENTER,
                format!("{:.1}%", share.fraction * 100.0),
                FontId::proportional(13.0),
                Color32::WHITE,
            );
        }
        start += sweep;
    }

    ui.horizontal(|ui: &mut Ui| {
        for share in shares {
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, colors.color_for(&share.kind));
            ui.label(format!("{} ({})", share.kind, share.count));
            ui.add_space(8.0);
        }
    });
}

// ---------------------------------------------------------------------------
// Horizontal bars: genre ranking
// ---------------------------------------------------------------------------

fn genre_bars(ui: &mut Ui, genres: &[GenreCount]) {
    let n = genres.len();
    let max = genres.iter().map(|g| g.count).max().unwrap_or(0).max(1);

    // Rank 1 sits at the top, so it gets the highest y.
    let bars: Vec<Bar> = genres
        .iter()
        .enumerate()
        .map(|(rank, g)| {
            Bar::new((n - 1 - rank) as f64, g.count as f64)
                .name(&g.genre)
                .fill(reds(g.count as f32 / max as f32))
                .width(0.7)
        })
        .collect();

    let labels: Vec<String> = genres.iter().rev().map(|g| g.genre.clone()).collect();

    Plot::new("top_genres")
        .height(CHART_HEIGHT)
        .x_axis_label("Count")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .y_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .y_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Titles"));
        });
}

// ---------------------------------------------------------------------------
// Lines: titles per release year, one series per type
// ---------------------------------------------------------------------------

fn release_trend(ui: &mut Ui, trend: &[TrendPoint], kinds: &[&str], colors: &ColorMap) {
    Plot::new("release_trend")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("release_year")
        .y_axis_label("count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for &kind in kinds {
                let mut points: Vec<[f64; 2]> = trend
                    .iter()
                    .filter(|p| p.kind == kind)
                    .map(|p| [p.release_year as f64, p.count as f64])
                    .collect();
                points.sort_by(|a, b| a[0].total_cmp(&b[0]));

                let color = colors.color_for(kind);
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(kind)
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(kind)
                        .color(color)
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Vertical bars: titles per year added
// ---------------------------------------------------------------------------

fn added_bars(ui: &mut Ui, added: &[(i32, usize)]) {
    let bars: Vec<Bar> = added
        .iter()
        .map(|&(year, count)| Bar::new(year as f64, count as f64).name(year).width(0.8))
        .collect();

    Plot::new("added_by_year")
        .height(CHART_HEIGHT * 0.8)
        .x_axis_label("year_added")
        .y_axis_label("count")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(reds(0.75)).name("Titles added"));
        });
}
