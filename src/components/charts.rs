// Signup trend chart, drawn as inline SVG
use leptos::*;

use crate::types::SignupPoint;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 180.0;

/// Line chart of the daily signup series. One point per entry, in server
/// order; the vertical axis is scaled to the series maximum.
#[component]
pub fn SignupChart(series: Vec<SignupPoint>) -> impl IntoView {
    let counts: Vec<u64> = series.iter().map(|p| p.count).collect();
    let coords = chart_coords(&counts, CHART_WIDTH, CHART_HEIGHT);
    let line = polyline_points(&coords);

    view! {
        <div class="chart-legend">
            <span class="legend-dot"></span>
            "Signups"
        </div>
        <svg class="line-chart" viewBox="0 0 600 200" preserveAspectRatio="none">
            <line x1="0" y1="50" x2="600" y2="50" class="grid-line"/>
            <line x1="0" y1="100" x2="600" y2="100" class="grid-line"/>
            <line x1="0" y1="150" x2="600" y2="150" class="grid-line"/>
            <g transform="translate(0 10)">
                <polyline points=line fill="none" class="chart-line"/>
                {coords
                    .into_iter()
                    .map(|(x, y)| view! { <circle cx=x cy=y r="3" class="chart-dot"/> })
                    .collect_view()}
            </g>
        </svg>
        <div class="chart-x-labels">
            {series
                .into_iter()
                .map(|p| view! { <span>{p.label}</span> })
                .collect_view()}
        </div>
    }
}

/// Scale counts into chart space: x evenly spaced across `width` (a lone
/// point is centered), y inverted so larger counts sit higher.
fn chart_coords(counts: &[u64], width: f64, height: f64) -> Vec<(f64, f64)> {
    if counts.is_empty() {
        return Vec::new();
    }
    let max = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
    let step = if counts.len() > 1 {
        width / (counts.len() - 1) as f64
    } else {
        0.0
    };

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let x = if counts.len() == 1 {
                width / 2.0
            } else {
                step * i as f64
            };
            let y = height - (count as f64 / max) * height;
            (x, y)
        })
        .collect()
}

fn polyline_points(coords: &[(f64, f64)]) -> String {
    coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_coordinate_per_point() {
        let counts = [3, 7, 1, 9, 4];
        assert_eq!(chart_coords(&counts, 600.0, 180.0).len(), counts.len());
    }

    #[test]
    fn empty_series_renders_nothing() {
        assert!(chart_coords(&[], 600.0, 180.0).is_empty());
        assert_eq!(polyline_points(&[]), "");
    }

    #[test]
    fn extremes_span_the_chart() {
        let coords = chart_coords(&[0, 10], 600.0, 180.0);
        assert_eq!(coords, vec![(0.0, 180.0), (600.0, 0.0)]);
    }

    #[test]
    fn single_point_is_centered() {
        let coords = chart_coords(&[5], 600.0, 180.0);
        assert_eq!(coords, vec![(300.0, 0.0)]);
    }

    #[test]
    fn all_zero_series_stays_on_the_baseline() {
        let coords = chart_coords(&[0, 0, 0], 600.0, 180.0);
        assert!(coords.iter().all(|&(_, y)| y == 180.0));
    }

    #[test]
    fn polyline_joins_rounded_pairs() {
        let coords = vec![(0.0, 180.0), (600.0, 0.0)];
        assert_eq!(polyline_points(&coords), "0.0,180.0 600.0,0.0");
    }
}
