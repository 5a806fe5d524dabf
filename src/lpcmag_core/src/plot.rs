//! # Plot
//! Median light curves of every Oort group, before and after perihelion.
//!
//! Curves are drawn against `log10(r)` with the magnitude axis inverted so brighter is
//! up. The pre-perihelion panel runs from far to near, so the two panels meet at the
//! closest distance. Brightening slopes are annotated on each branch of the curves in
//! mag / log10(au).
//!
use itertools::Itertools;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::errors::{Error, LpcResult};
use crate::flux::{BrighteningModel, OortGroup, OrbitalArc};

/// Layout of the light curve comparison plot.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurvePlot {
    /// Closest heliocentric distance drawn, in au.
    pub r_min: f64,

    /// Furthest heliocentric distance drawn, in au.
    pub r_max: f64,

    /// Number of distances sampled for each curve.
    pub n_samples: usize,

    /// Width and height of the image in pixels.
    pub size: (u32, u32),

    /// Magnitude at the top of the plot.
    pub mag_bright: f64,

    /// Magnitude at the bottom of the plot.
    pub mag_faint: f64,
}

impl Default for LightCurvePlot {
    fn default() -> Self {
        Self {
            r_min: 1.0,
            r_max: 10.0,
            n_samples: 100,
            size: (1000, 500),
            mag_bright: 7.5,
            mag_faint: 25.0,
        }
    }
}

impl LightCurvePlot {
    fn validate(&self) -> LpcResult<()> {
        if !(self.r_min.is_finite() && self.r_min > 0.0 && self.r_max.is_finite()) {
            Err(Error::ValueError(format!(
                "Distance range must be finite and positive, found {} to {}",
                self.r_min, self.r_max
            )))?;
        }
        if self.r_max <= self.r_min {
            Err(Error::ValueError(format!(
                "r_max ({}) must be larger than r_min ({})",
                self.r_max, self.r_min
            )))?;
        }
        if self.n_samples < 2 {
            Err(Error::ValueError(
                "At least 2 samples are required to draw a curve".into(),
            ))?;
        }
        if !(self.mag_bright.is_finite() && self.mag_faint.is_finite())
            || self.mag_faint <= self.mag_bright
        {
            Err(Error::ValueError(format!(
                "mag_faint ({}) must be larger than mag_bright ({})",
                self.mag_faint, self.mag_bright
            )))?;
        }
        Ok(())
    }

    /// Heliocentric distances sampled evenly between `r_min` and `r_max`, inclusive.
    pub fn distances(&self) -> Vec<f64> {
        let step = (self.r_max - self.r_min) / (self.n_samples.max(2) - 1) as f64;
        (0..self.n_samples)
            .map(|idx| self.r_min + step * idx as f64)
            .collect()
    }
}

/// Line color of each Oort group.
pub fn group_color(group: OortGroup) -> RGBColor {
    match group {
        OortGroup::New => RGBColor(0x0C, 0x7B, 0xDC),
        OortGroup::Intermediate => RGBColor(0xFF, 0xC2, 0x0A),
        OortGroup::Old => RGBColor(0xFF, 0x57, 0x33),
    }
}

/// Points `(log10(r), mag)` of a single light curve.
pub fn curve(
    model: &BrighteningModel,
    arc: OrbitalArc,
    group: OortGroup,
    plot: &LightCurvePlot,
) -> LpcResult<Vec<(f64, f64)>> {
    plot.validate()?;
    let distances = plot.distances();
    let mags = model.total_mag(distances.as_slice(), arc, group)?;
    Ok(distances
        .iter()
        .map(|r| r.log10())
        .zip(mags)
        .collect_vec())
}

/// Distances where slopes are annotated, the middle of each branch in log space.
fn annotation_distances(
    model: &BrighteningModel,
    plot: &LightCurvePlot,
    arc: OrbitalArc,
) -> Vec<f64> {
    let log_min = plot.r_min.log10();
    let log_max = plot.r_max.log10();
    let log_t = model.transition_r().log10();
    let mids = match arc {
        OrbitalArc::Inbound if log_min < log_t && log_t < log_max => {
            vec![(log_min + log_t) / 2.0, (log_t + log_max) / 2.0]
        }
        _ => vec![(log_min + log_max) / 2.0],
    };
    mids.into_iter().map(|x| 10_f64.powf(x)).collect()
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    model: &BrighteningModel,
    plot: &LightCurvePlot,
    arc: OrbitalArc,
) -> LpcResult<()> {
    let (title, sign) = match arc {
        OrbitalArc::Inbound => ("Pre-Perihelion", -1.0),
        OrbitalArc::Outbound => ("Post-Perihelion", 1.0),
    };
    let log_min = plot.r_min.log10();
    let log_max = plot.r_max.log10();
    let x_range = match arc {
        OrbitalArc::Inbound => -log_max..-log_min,
        OrbitalArc::Outbound => log_min..log_max,
    };

    // Magnitudes are negated so brighter values are at the top.
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, -plot.mag_faint..-plot.mag_bright)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("r (au)")
        .y_desc("mag")
        .x_labels(6)
        .y_labels(8)
        .x_label_formatter(&|v| format!("{:.1}", 10_f64.powf(sign * *v)))
        .y_label_formatter(&|v| format!("{:.0}", -*v))
        .draw()?;

    for group in OortGroup::ALL {
        let color = group_color(group);
        let points = curve(model, arc, group, plot)?;
        let _ = chart
            .draw_series(LineSeries::new(
                points.into_iter().map(|(x, mag)| (sign * x, -mag)),
                color.stroke_width(2),
            ))?
            .label(group.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

        for r in annotation_distances(model, plot, arc) {
            let mag = model.total_mag(r, arc, group)?;
            let slope = model.slope_at(r, arc, group)?;
            let _ = chart.draw_series(std::iter::once(Text::new(
                format!("{:.1}", slope),
                (sign * r.log10(), -mag),
                ("sans-serif", 12).into_font(),
            )))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Render the pre and post-perihelion light curves of every Oort group as an SVG.
pub fn render_svg(model: &BrighteningModel, plot: &LightCurvePlot) -> LpcResult<String> {
    plot.validate()?;
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, plot.size).into_drawing_area();
        root.fill(&WHITE)?;
        let panels = root.split_evenly((1, 2));
        for (panel, arc) in panels.iter().zip(OrbitalArc::ALL) {
            draw_panel(panel, model, plot, arc)?;
        }
        root.present()?;
    }
    Ok(buffer)
}
