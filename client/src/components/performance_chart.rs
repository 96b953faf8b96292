//! Line chart comparing the two systems across the fixed metrics.

#[cfg(test)]
#[path = "performance_chart_test.rs"]
mod performance_chart_test;

use leptos::prelude::*;

use crate::state::analysis::{self, PERFORMANCE_METRICS, System};
use crate::util::chart::{ChartGeometry, ChartLayout};

const Y_TICK_INTERVALS: usize = 4;

fn coord(value: f64) -> String {
    format!("{value:.1}")
}

/// Tick label without a trailing `.0` for whole numbers.
pub(crate) fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[component]
pub fn PerformanceChart() -> impl IntoView {
    let geometry = ChartGeometry::new(ChartLayout::default(), PERFORMANCE_METRICS.len(), analysis::max_value());
    let layout = geometry.layout;
    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let baseline = layout.baseline();
    let plot_right = layout.width - layout.pad_right;

    let grid = geometry
        .y_ticks(Y_TICK_INTERVALS)
        .into_iter()
        .map(|tick| {
            let y = coord(geometry.y_at(tick));
            view! {
                <line
                    class="chart__grid"
                    x1=coord(layout.pad_left)
                    x2=coord(plot_right)
                    y1=y.clone()
                    y2=y.clone()
                    stroke-dasharray="3 3"
                />
                <text class="chart__tick" x=coord(layout.pad_left - 8.0) y=y text-anchor="end">
                    {format_tick(tick)}
                </text>
            }
        })
        .collect_view();

    let categories = PERFORMANCE_METRICS
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            view! {
                <text class="chart__category" x=coord(geometry.x_at(i)) y=coord(baseline + 20.0) text-anchor="middle">
                    {metric.name}
                </text>
            }
        })
        .collect_view();

    let lines = System::ALL
        .into_iter()
        .map(|system| {
            let points = geometry.points_attr(&analysis::series(system));
            let markers = PERFORMANCE_METRICS
                .iter()
                .enumerate()
                .map(|(i, metric)| {
                    let value = system.value(metric);
                    view! {
                        <circle
                            cx=coord(geometry.x_at(i))
                            cy=coord(geometry.y_at(value))
                            r="3"
                            fill=system.stroke()
                        >
                            <title>{format!("{} / {}: {}", metric.name, system.label(), format_tick(value))}</title>
                        </circle>
                    }
                })
                .collect_view();
            view! {
                <polyline class="chart__line" points=points fill="none" stroke=system.stroke() stroke-width="2"/>
                {markers}
            }
        })
        .collect_view();

    let legend = System::ALL
        .into_iter()
        .map(|system| {
            view! {
                <span class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background:{}", system.stroke())></span>
                    {system.label()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="card">
            <div class="card__content">
                <svg class="chart" viewBox=view_box role="img" aria-label="Traditional vs blockchain performance">
                    {grid}
                    <line
                        class="chart__axis"
                        x1=coord(layout.pad_left)
                        x2=coord(plot_right)
                        y1=coord(baseline)
                        y2=coord(baseline)
                    />
                    <line
                        class="chart__axis"
                        x1=coord(layout.pad_left)
                        x2=coord(layout.pad_left)
                        y1=coord(layout.pad_top)
                        y2=coord(baseline)
                    />
                    {categories}
                    {lines}
                </svg>
                <div class="chart__legend">{legend}</div>
            </div>
        </div>
    }
}
