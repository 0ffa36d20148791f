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

use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::force::TorqueRolloff;
use crate::integrator::IntegrationConfig;
use crate::reference::ReferenceDataset;
use crate::vehicle::{SEA_LEVEL_AIR_DENSITY, STANDARD_GRAVITY, VehicleProfile};

pub const DEFAULT_TIME_STEP: f64 = 0.01;

const P100D_ZEPERFS_TIMES: [f64; 11] = [0.0, 0.26, 1.46, 2.26, 3.16, 4.06, 4.56, 7.46, 9.26, 11.66, 18.66];
const P100D_ZEPERFS_SPEEDS: [f64; 11] = [0.0, 5.9, 31.1, 49.7, 62.1, 74.6, 80.8, 99.4, 111.8, 124.3, 149.1];

const ROADSTER_ZEPERFS_TIMES: [f64; 8] = [0.0, 0.2, 2.6, 4.6, 6.7, 8.8, 15.9, 42.2];
const ROADSTER_ZEPERFS_SPEEDS: [f64; 8] = [0.0, 5.0, 60.0, 100.0, 130.0, 150.0, 200.0, 249.0];

/// The vehicles we have calibration data for
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vehicle {
    #[serde(rename = "model_s_p100d")]
    ModelSP100D,
    Roadster
}

impl Vehicle {
    pub const ALL: [Vehicle; 2] = [Vehicle::ModelSP100D, Vehicle::Roadster];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vehicle::ModelSP100D => "model_s_p100d",
            Vehicle::Roadster => "roadster"
        }
    }

    pub fn profile(&self) -> VehicleProfile {
        match self {
            Vehicle::ModelSP100D => VehicleProfile {
                name: "Tesla Model S P100D".to_string(),
                gravity: STANDARD_GRAVITY,
                air_density: SEA_LEVEL_AIR_DENSITY,
                mass: 2250.0,
                drag_coefficient: 0.24,
                tire_radius: 14.15,
                static_friction: 1.11,
                frontal_area: 2.1,
                gear_reduction: 9.325,
                max_motor_torque: 980.0,
                max_motor_power: 450.4,
                torque_regime_rpm: 4000.0,
                power_regime_rpm: 5750.0,
                max_motor_rpm: 16614.0,
                rated_top_speed: Some(150.0)
            },
            Vehicle::Roadster => VehicleProfile {
                name: "Tesla Roadster".to_string(),
                gravity: STANDARD_GRAVITY,
                air_density: SEA_LEVEL_AIR_DENSITY,
                mass: 2000.0,
                drag_coefficient: 0.36,
                tire_radius: 14.35,
                static_friction: 1.27,
                frontal_area: 2.072,
                gear_reduction: 9.325,
                max_motor_torque: 1072.0,
                max_motor_power: 1000.0,
                torque_regime_rpm: 8907.0,
                power_regime_rpm: 8907.0,
                max_motor_rpm: 27690.0,
                rated_top_speed: Some(250.0)
            }
        }
    }

    /// Measured times (s) and speeds (mph) from zeperfs
    pub fn reference(&self) -> ReferenceDataset {
        let (name, times, speeds): (&str, &[f64], &[f64]) = match self {
            Vehicle::ModelSP100D => ("zeperfs Model S P100D", &P100D_ZEPERFS_TIMES, &P100D_ZEPERFS_SPEEDS),
            Vehicle::Roadster => ("zeperfs Roadster", &ROADSTER_ZEPERFS_TIMES, &ROADSTER_ZEPERFS_SPEEDS)
        };
        ReferenceDataset::from_trusted(name, times, speeds)
    }

    pub fn default_integration(&self) -> IntegrationConfig {
        match self {
            Vehicle::ModelSP100D => IntegrationConfig { horizon: 20.0, step: DEFAULT_TIME_STEP },
            Vehicle::Roadster => IntegrationConfig { horizon: 50.0, step: DEFAULT_TIME_STEP }
        }
    }

    /// The rolloff each vehicle is validated with when no factor is requested
    pub fn default_rolloff(&self) -> TorqueRolloff {
        match self {
            Vehicle::ModelSP100D => TorqueRolloff::Calibrated,
            Vehicle::Roadster => TorqueRolloff::Tunable(1.55)
        }
    }
}

impl Display for Vehicle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::presets::Vehicle;

    #[test]
    fn reference_fits_default_horizon() {
        for vehicle in Vehicle::ALL {
            let reference = vehicle.reference();
            assert!(reference.latest_time() < vehicle.default_integration().horizon);
            assert_eq!(reference.points()[0].time, 0.0);
            assert_eq!(reference.points()[0].speed, 0.0);
        }
    }

    #[test]
    fn built_in_references_pass_validation() {
        use crate::reference::ReferenceDataset;
        for vehicle in Vehicle::ALL {
            let reference = vehicle.reference();
            let times: Vec<f64> = reference.points().iter().map(|p| p.time).collect();
            let speeds: Vec<f64> = reference.points().iter().map(|p| p.speed).collect();
            assert_eq!(ReferenceDataset::from_slices(reference.name(), &times, &speeds), Ok(reference.clone()));
        }
    }

    #[test]
    fn reference_sizes() {
        assert_eq!(Vehicle::ModelSP100D.reference().len(), 11);
        assert_eq!(Vehicle::Roadster.reference().len(), 8);
        assert_eq!(Vehicle::ModelSP100D.reference().latest_time(), 18.66);
    }

    #[test]
    fn serde_names() {
        #[derive(serde::Deserialize)]
        struct Wrapper { vehicle: Vehicle }
        let w: Wrapper = toml::from_str("vehicle = \"model_s_p100d\"").unwrap();
        assert_eq!(w.vehicle, Vehicle::ModelSP100D);
        let w: Wrapper = toml::from_str("vehicle = \"roadster\"").unwrap();
        assert_eq!(w.vehicle, Vehicle::Roadster);
    }
}
