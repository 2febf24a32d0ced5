use plotters::prelude::*;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use crate::models::{RateSeries, SeriesSummary};
use crate::utils::ChartError;

/// Line colours, assigned to secondary currencies in request order
pub const PALETTE: [RGBColor; 3] = [
    RGBColor(0xe6, 0x00, 0x00),
    RGBColor(0x00, 0x00, 0x00),
    RGBColor(0xff, 0xa3, 0x1a),
];

pub fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

fn to_datetime(date: NaiveDate) -> DateTime<Utc> {
    DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(NaiveTime::default()), Utc)
}

/// Render every series as a line chart and return the `<svg>` markup
pub fn render_chart(data: &RateSeries, width: u32, height: u32) -> Result<String, ChartError> {
    let points: Vec<(NaiveDate, f64)> = data.series.iter().flat_map(|s| s.points()).collect();
    if points.is_empty() {
        return Err(ChartError::Render("No data points to plot".to_string()));
    }

    // Time range, widened around a single day so the axis is never empty
    let first_date = points.iter().map(|(d, _)| *d).min().unwrap_or_default();
    let last_date = points.iter().map(|(d, _)| *d).max().unwrap_or_default();
    let (mut x_min, mut x_max) = (to_datetime(first_date), to_datetime(last_date));
    if x_min == x_max {
        x_min = x_min - Duration::days(1);
        x_max = x_max + Duration::days(1);
    }

    // Value range with 10% padding
    let min_value = points.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max_value = points.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    if !min_value.is_finite() || !max_value.is_finite() {
        return Err(ChartError::Render(format!(
            "Value range {}..{} cannot be plotted", min_value, max_value
        )));
    }
    let value_range = (max_value - min_value).max(min_value.abs() * 0.01).max(1e-8);
    let padding = value_range * 0.1;
    let y_min = (min_value - padding).max(0.0);
    let y_max = max_value + padding;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

        chart
            .configure_mesh()
            .y_desc(data.base.as_str())
            .x_desc("Time")
            .x_labels(6)
            .x_label_formatter(&|d: &DateTime<Utc>| d.format("%Y-%m-%d").to_string())
            .y_label_formatter(&|v: &f64| format!("{:.4}", v))
            .draw()
            .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

        for (i, series) in data.series.iter().enumerate() {
            if series.is_empty() {
                continue;
            }
            let color = series_color(i);
            chart
                .draw_series(LineSeries::new(
                    series.points().map(|(d, v)| (to_datetime(d), v)),
                    color.stroke_width(2),
                ))
                .map_err(|e| ChartError::Render(format!("Failed to draw {} line: {}", series.currency, e)))?
                .label(series.currency.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| ChartError::Render(format!("Failed to draw legend: {}", e)))?;

        root.present()
            .map_err(|e| ChartError::Render(format!("Failed to render chart: {}", e)))?;
    }

    Ok(svg)
}

/// First/last/min/max and change for each non-empty series
pub fn summarize(data: &RateSeries) -> Vec<SeriesSummary> {
    data.series
        .iter()
        .filter_map(|s| {
            let first = *s.values.first()?;
            let last = *s.values.last()?;
            let min = s.values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = s.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Some(SeriesSummary {
                currency: s.currency.clone(),
                first,
                last,
                min,
                max,
                change_pct: (last - first) / first * 100.0,
            })
        })
        .collect()
}
