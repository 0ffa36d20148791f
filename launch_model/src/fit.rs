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

use crate::error::Result;
use crate::reference::ReferenceDataset;
use crate::series::TimeSeries;

/// The error a single tunable factor produced
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    pub tunable_factor: f64,
    pub error: f64
}

/// One line of a simulated vs measured comparison
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonRow {
    pub time: f64,
    pub simulated: f64,
    pub reference: f64
}

impl ComparisonRow {
    pub fn difference(&self) -> f64 {
        self.simulated - self.reference
    }
}

/// Pairs each reference point with the simulated speed at the same time
pub fn compare(series: &TimeSeries, reference: &ReferenceDataset) -> Result<Vec<ComparisonRow>> {
    reference.points().iter().map(|point| {
        Ok(ComparisonRow {
            time: point.time,
            simulated: series.speed_at(point.time)?,
            reference: point.speed
        })
    }).collect()
}

/// Square root of the summed squared differences between the reference and the series.
///
/// Note this is not divided by the number of points, so it is not a true RMSE; values are
/// only comparable between runs against the same reference.
pub fn root_sum_squared_error(series: &TimeSeries, reference: &ReferenceDataset) -> Result<f64> {
    let mut total = 0.0;
    for point in reference.points() {
        let simulated = series.speed_at(point.time)?;
        total += (point.speed - simulated).powi(2);
    }
    Ok(total.sqrt())
}

#[cfg(test)]
mod tests {
    use crate::error::LaunchModelError;
    use crate::fit::{compare, root_sum_squared_error};
    use crate::force::TorqueRolloff;
    use crate::integrator::{integrate, IntegrationConfig};
    use crate::presets::Vehicle;
    use crate::reference::ReferenceDataset;
    use crate::series::index_for_time;

    #[test]
    fn p100d_calibrated_error() {
        let vehicle = Vehicle::ModelSP100D;
        let profile = vehicle.profile();
        let series = integrate(&profile, &vehicle.default_integration(), TorqueRolloff::Calibrated).unwrap();
        let error = root_sum_squared_error(&series, &vehicle.reference()).unwrap();
        assert!(error.is_finite() && error > 0.0);
        assert!((error - 40.64606327934613).abs() < 1e-6);

        let repeat = integrate(&profile, &vehicle.default_integration(), TorqueRolloff::Calibrated).unwrap();
        assert_eq!(root_sum_squared_error(&repeat, &vehicle.reference()).unwrap().to_bits(), error.to_bits());
    }

    #[test]
    fn roadster_error() {
        let vehicle = Vehicle::Roadster;
        let series = integrate(&vehicle.profile(), &vehicle.default_integration(), vehicle.default_rolloff()).unwrap();
        let error = root_sum_squared_error(&series, &vehicle.reference()).unwrap();
        assert!((error - 37.167136296620434).abs() < 1e-6);
    }

    #[test]
    fn perfect_match_has_no_error() {
        let vehicle = Vehicle::ModelSP100D;
        let series = integrate(&vehicle.profile(), &vehicle.default_integration(), TorqueRolloff::Calibrated).unwrap();
        let times = [0.0, 0.5, 3.25, 10.0, 19.99];
        let speeds: Vec<f64> = times.iter()
            .map(|t| series.speeds_mph()[index_for_time(*t, series.step())])
            .collect();
        let reference = ReferenceDataset::from_slices("self", &times, &speeds).unwrap();
        assert_eq!(root_sum_squared_error(&series, &reference), Ok(0.0));
    }

    #[test]
    fn error_is_sign_independent() {
        let vehicle = Vehicle::ModelSP100D;
        let series = integrate(&vehicle.profile(), &vehicle.default_integration(), TorqueRolloff::Calibrated).unwrap();
        let at_one = series.speed_at(1.0).unwrap();
        let at_two = series.speed_at(2.0).unwrap();
        let over = ReferenceDataset::from_slices("over", &[1.0, 2.0], &[at_one + 3.0, at_two + 4.0]).unwrap();
        let under = ReferenceDataset::from_slices("under", &[1.0, 2.0], &[at_one - 3.0, at_two - 4.0]).unwrap();
        let over_error = root_sum_squared_error(&series, &over).unwrap();
        let under_error = root_sum_squared_error(&series, &under).unwrap();
        assert!((over_error - 5.0).abs() < 1e-9);
        assert!((under_error - 5.0).abs() < 1e-9);
    }

    #[test]
    fn short_horizon_is_an_error() {
        let vehicle = Vehicle::ModelSP100D;
        let short = IntegrationConfig { horizon: 10.0, step: 0.01 };
        let series = integrate(&vehicle.profile(), &short, TorqueRolloff::Calibrated).unwrap();
        let result = root_sum_squared_error(&series, &vehicle.reference());
        assert!(matches!(result, Err(LaunchModelError::HorizonTooShort { index: 1166, len: 1001, .. })));
    }

    #[test]
    fn comparison_rows() {
        let vehicle = Vehicle::ModelSP100D;
        let series = integrate(&vehicle.profile(), &vehicle.default_integration(), TorqueRolloff::Calibrated).unwrap();
        let rows = compare(&series, &vehicle.reference()).unwrap();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].simulated, 0.0);
        assert_eq!(rows[0].difference(), 0.0);
        let summed: f64 = rows.iter().map(|r| r.difference().powi(2)).sum();
        let error = root_sum_squared_error(&series, &vehicle.reference()).unwrap();
        assert!((summed.sqrt() - error).abs() < 1e-9);
    }
}
