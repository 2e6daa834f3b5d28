use eframe::egui::{self, Align2, Color32, ProgressBar, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};

use crate::analytics::metrics::MetricBundle;
use crate::analytics::series::{SeverityBar, StackedColumn};
use crate::color::{risk_badge_colors, severity_color, StatusPalette};
use crate::state::AppState;

use super::format::{disease_label, format_count, format_percent};
use super::table;

const CHART_HEIGHT: f32 = 280.0;
const WARNING_COLOR: Color32 = Color32::from_rgb(0xb7, 0x79, 0x1f);

// ---------------------------------------------------------------------------
// Dashboard page (central panel)
// ---------------------------------------------------------------------------

/// Render the analytics page.
pub fn dashboard_page(ui: &mut Ui, state: &AppState) {
    ui.heading("🌿 Plant Disease Analytics");

    if state.table.is_none() {
        let msg = state
            .status_message
            .as_deref()
            .unwrap_or("No dataset loaded.");
        ui.colored_label(Color32::RED, msg);
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add_space(6.0);
            ui.strong("📈 Key Metrics");
            metric_cards(ui, &state.summary.metrics);

            ui.separator();
            ui.columns(2, |cols| {
                cols[0].strong("🚨 Top Disease Alerts");
                disease_alerts(&mut cols[0], &state.charts.disease_alerts);
                cols[1].strong("🌍 Regional Hotspots");
                regional_hotspots(&mut cols[1], &state.charts.regional_hotspots);
            });

            ui.separator();
            ui.columns(2, |cols| {
                cols[0].strong("🌱 Crop Health Status");
                crop_health(&mut cols[0], &state.charts.crop_health, &state.status_palette);
                cols[1].strong("🔄 Health Status Ratio");
                status_ratio(&mut cols[1], state);
            });

            ui.separator();
            egui::CollapsingHeader::new("📋 View Filtered Data")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    table::filtered_table(ui, state);
                });
        });
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

fn metric_cards(ui: &mut Ui, metrics: &MetricBundle) {
    ui.columns(5, |cols| {
        metric_card(
            &mut cols[0],
            "Total Cases Analyzed",
            RichText::new(format_count(metrics.total_cases)),
            "Historical records",
        );
        metric_card(
            &mut cols[1],
            "Disease Prevalence",
            RichText::new(format_percent(metrics.disease_ratio)),
            "Affected plants",
        );
        metric_card(
            &mut cols[2],
            "Most Affected Crop",
            RichText::new(&metrics.most_affected_crop),
            "Highest infection rate",
        );
        metric_card(
            &mut cols[3],
            "Most Common Disease",
            RichText::new(disease_label(&metrics.most_common_disease)),
            "Frequent detection",
        );

        let (text, background) = risk_badge_colors(metrics.risk_level);
        metric_card(
            &mut cols[4],
            "Overall Risk Level",
            RichText::new(format!(" {} Risk ", metrics.risk_level))
                .color(text)
                .background_color(background),
            "Monitoring recommendation",
        );
    });
}

fn metric_card(ui: &mut Ui, title: &str, value: RichText, subtext: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(title).weak());
            ui.label(value.size(24.0).strong());
            ui.label(RichText::new(subtext).small().weak());
        });
    });
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn empty_warning(ui: &mut Ui, msg: &str) {
    ui.colored_label(WARNING_COLOR, format!("⚠ {msg}"));
}

/// Horizontal bars, largest at the top.
fn disease_alerts(ui: &mut Ui, bars: &[SeverityBar]) {
    if bars.is_empty() {
        empty_warning(ui, "No disease cases found for selected filters");
        return;
    }

    let n = bars.len();
    let chart = BarChart::new(
        bars.iter()
            .enumerate()
            .map(|(i, bar)| {
                Bar::new((n - i) as f64, bar.value as f64)
                    .name(disease_label(&bar.label))
                    .fill(severity_color(bar.severity))
            })
            .collect(),
    )
    .horizontal()
    .width(0.6)
    .name("Case Count");

    Plot::new("disease_alerts")
        .height(CHART_HEIGHT)
        .x_axis_label("Case Count")
        .show_y(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            for (i, bar) in bars.iter().enumerate() {
                let label = format!("{}  ({})", disease_label(&bar.label), bar.value);
                plot_ui.text(
                    Text::new(PlotPoint::new(bar.value as f64, (n - i) as f64), label)
                        .anchor(Align2::LEFT_CENTER),
                );
            }
        });
}

/// Vertical bars, one per region.
fn regional_hotspots(ui: &mut Ui, bars: &[SeverityBar]) {
    if bars.is_empty() {
        empty_warning(ui, "No regional data available");
        return;
    }

    let chart = BarChart::new(
        bars.iter()
            .enumerate()
            .map(|(i, bar)| {
                Bar::new(i as f64, bar.value as f64)
                    .name(&bar.label)
                    .fill(severity_color(bar.severity))
            })
            .collect(),
    )
    .width(0.6)
    .name("Disease Cases");

    Plot::new("regional_hotspots")
        .height(CHART_HEIGHT)
        .y_axis_label("Disease Cases")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            for (i, bar) in bars.iter().enumerate() {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(i as f64, bar.value as f64),
                        format!("{}\n{}", bar.value, bar.label),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

/// One stacked column per crop, one layer per status.
fn crop_health(ui: &mut Ui, columns: &[StackedColumn], palette: &StatusPalette) {
    let Some(first) = columns.first() else {
        empty_warning(ui, "No data available for selected filters");
        return;
    };

    let mut layers: Vec<BarChart> = Vec::new();
    for (layer, (status, _)) in first.segments.iter().enumerate() {
        let bars = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let count = column.segments.get(layer).map_or(0, |(_, c)| *c);
                Bar::new(i as f64, count as f64).name(&column.crop)
            })
            .collect();
        let chart = BarChart::new(bars)
            .name(status.to_string())
            .color(palette.color_for(status))
            .width(0.6);
        let below: Vec<&BarChart> = layers.iter().collect();
        let chart = chart.stack_on(&below);
        layers.push(chart);
    }

    Plot::new("crop_health")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("Count")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for chart in layers {
                plot_ui.bar_chart(chart);
            }
            for (i, column) in columns.iter().enumerate() {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(i as f64, column.total() as f64),
                        column.crop.as_str(),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

/// Share of each status as labelled bars.
fn status_ratio(ui: &mut Ui, state: &AppState) {
    let shares = &state.charts.status_ratio;
    if shares.is_empty() {
        empty_warning(ui, "No data available for selected filters");
        return;
    }

    ui.label(RichText::new("Health Status Distribution").weak());
    ui.add_space(4.0);
    for (status, fraction) in shares {
        ui.add(
            ProgressBar::new(*fraction as f32)
                .fill(state.status_palette.color_for(status))
                .text(format!("{status}: {}", format_percent(fraction * 100.0))),
        );
    }
}
