/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of launch-sim.
 *
 * launch-sim is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * launch-sim is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with launch-sim. If not, see <https://www.gnu.org/licenses/>.
 */

use std::path::{Path, PathBuf};
use plotters::prelude::*;
use launch_model::{FitResult, ReferenceDataset, TimeSeries};
use utils::numeric::round_up_to_nearest_multiple;

fn as_usize(x: &f64) -> String {
    format!("{}", *x as usize)
}

/// Simulated speed against time with the reference measurements scattered on top
pub fn plot_speed(path: &Path,
                  title: &str,
                  series: &TimeSeries,
                  reference: &ReferenceDataset) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let horizon = series.times().last().copied().unwrap_or(1.0);
    let top_speed = series.speeds_mph().iter()
        .chain(reference.points().iter().map(|p| &p.speed))
        .filter(|s| s.is_finite())
        .fold(0.0_f64, |acc, s| acc.max(*s));
    let y_axis_limit = round_up_to_nearest_multiple(top_speed.ceil() as i32, 20) as f64;

    let mut context = ChartBuilder::on(&root)
        .margin(15)
        .caption(format!("{} Time vs Velocity", title), ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .build_cartesian_2d(0f64..horizon, 0f64..y_axis_limit)?;

    context
        .configure_mesh()
        .x_labels(11)
        .x_label_formatter(&as_usize)
        .x_desc("Time (sec)")
        .y_labels(11)
        .y_label_formatter(&as_usize)
        .y_desc("Velocity (mph)")
        .draw()?;

    context
        .draw_series(LineSeries::new(series.points(), &BLUE))?
        .label("simulated")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    context
        .draw_series(reference.points().iter().map(|p| Circle::new((p.time, p.speed), 4, RED.filled())))?
        .label(reference.name())
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    context
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(path.to_path_buf())
}

/// Error for each tunable factor tried during a search
pub fn plot_search(path: &Path, evaluated: &[FitResult]) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = evaluated.iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), r| (lo.min(r.tunable_factor), hi.max(r.tunable_factor)));
    let (y_min, y_max) = evaluated.iter()
        .filter(|r| r.error.is_finite())
        .fold((f64::MAX, f64::MIN), |(lo, hi), r| (lo.min(r.error), hi.max(r.error)));
    if x_min > x_max || y_min > y_max {
        return Err("nothing to plot".into());
    }

    let mut context = ChartBuilder::on(&root)
        .margin(15)
        .caption("Tunable Factor vs RSME", ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .build_cartesian_2d(x_min..x_max.max(x_min + 0.01), y_min.floor()..y_max.ceil().max(y_min.floor() + 1.0))?;

    context
        .configure_mesh()
        .x_desc("Tunable Factor")
        .y_desc("RSME")
        .draw()?;
    context.draw_series(LineSeries::new(
        evaluated.iter().filter(|r| r.error.is_finite()).map(|r| (r.tunable_factor, r.error)), &BLUE))?;
    root.present()?;
    Ok(path.to_path_buf())
}
