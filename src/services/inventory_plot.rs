use plotters::prelude::*;
use thiserror::Error;

use crate::domain::inventory::{InventoryForecast, ReorderMarker};

#[derive(Error, Debug)]
pub enum InventoryPlotError {
    #[error("inventory forecast is empty")]
    EmptyForecast,
    #[error("failed to render inventory chart: {0}")]
    Render(String),
}

/// Draws the forecast as a line chart with the reorder marker on top.
pub fn write_inventory_chart_png(
    output_path: &str,
    forecast: &InventoryForecast,
    marker: &ReorderMarker,
) -> Result<(), InventoryPlotError> {
    if forecast.is_empty() {
        return Err(InventoryPlotError::EmptyForecast);
    }
    render_chart_png(output_path, forecast, marker)
}

fn render_chart_png(
    output_path: &str,
    forecast: &InventoryForecast,
    marker: &ReorderMarker,
) -> Result<(), InventoryPlotError> {
    let (x_min, x_max) = x_range(forecast, marker);
    let max_inventory = forecast
        .points
        .iter()
        .map(|point| point.inventory)
        .fold(marker.inventory, f64::max);
    let y_max = (max_inventory * 1.1).max(1.0);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Inventory Forecast", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Days")
        .y_desc("Inventory")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|day| format!("{day:.0}"))
        .y_label_formatter(&|units| format!("{units:.0}"))
        .draw()
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            forecast.points.iter().map(|point| (point.day, point.inventory)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    chart
        .draw_series(std::iter::once(
            EmptyElement::at((marker.day, marker.inventory))
                + Circle::new((0, 0), 5, BLACK.filled())
                + Text::new("ROP", (7, -9), ("sans-serif", 18).into_font()),
        ))
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;
    Ok(())
}

// The axis starts at day 0 unless the marker sits before it.
fn x_range(forecast: &InventoryForecast, marker: &ReorderMarker) -> (f64, f64) {
    let last_day = forecast.last_day().unwrap_or(0.0);
    let x_min = marker.day.min(0.0);
    let x_max = last_day.max(marker.day);
    if x_max - x_min < f64::EPSILON {
        (x_min, x_min + 1.0)
    } else {
        (x_min, x_max)
    }
}
