//! PNG plot of the boundary-layer profiles.
//!
//! Curves are drawn in the usual boundary-layer orientation: profile value on the horizontal
//! axis ("x"), similarity coordinate on the vertical axis ("y").

use crate::BoundaryLayer::BlasiusShooting::BlasiusError;
use log::info;
use plotters::prelude::*;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub x_bounds: (f64, f64),
    pub y_bounds: (f64, f64),
    pub size: (u32, u32),
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            x_bounds: (0.0, 1.5),
            y_bounds: (0.0, 10.0),
            size: (1024, 768),
        }
    }
}

impl PlotSettings {
    fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x_bounds.0 && x <= self.x_bounds.1 && y >= self.y_bounds.0 && y <= self.y_bounds.1
    }
}

/// (value, coordinate) pairs of one profile that fall inside the plot window.
pub fn profile_series(values: &[f64], eta: &[f64], settings: &PlotSettings) -> Vec<(f64, f64)> {
    values
        .iter()
        .zip(eta.iter())
        .map(|(&v, &y)| (v, y))
        .filter(|&p| settings.contains(p))
        .collect()
}

/// Draws f, g=u and h against the grid coordinate and saves the image to `path`.
pub fn plot_profiles<P: AsRef<Path>>(
    path: P,
    eta: &[f64],
    f: &[f64],
    g: &[f64],
    h: &[f64],
    settings: &PlotSettings,
) -> Result<(), BlasiusError> {
    let path = path.as_ref();
    draw_profiles(path, eta, f, g, h, settings)
        .map_err(|e| BlasiusError::Plot(format!("{}: {}", path.display(), e)))?;
    info!("saved profile plot to {}", path.display());
    Ok(())
}

fn draw_profiles(
    path: &Path,
    eta: &[f64],
    f: &[f64],
    g: &[f64],
    h: &[f64],
    settings: &PlotSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, settings.size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x0, x1) = settings.x_bounds;
    let (y0, y1) = settings.y_bounds;
    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 14))
        .draw()?;

    for (values, label, color) in [(f, "f", BLUE), (g, "g=u", RED), (h, "h", GREEN)] {
        let series = profile_series(values, eta, settings);
        chart
            .draw_series(LineSeries::new(series, color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
