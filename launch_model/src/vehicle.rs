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

use serde::{Deserialize, Serialize};
use utils::units::inches_to_meters;
use crate::error::{LaunchModelError, Result};

pub const STANDARD_GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.2041; // kg/m^3 at 20C

/// The physical constants describing a single vehicle.
///
/// A profile is built once per vehicle and then only ever borrowed; nothing in the
/// simulation mutates it, so the same profile can back any number of runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub name: String,
    /// m/s^2
    pub gravity: f64,
    /// kg/m^3
    pub air_density: f64,
    /// kg
    pub mass: f64,
    pub drag_coefficient: f64,
    /// inches
    pub tire_radius: f64,
    pub static_friction: f64,
    /// m^2
    pub frontal_area: f64,
    pub gear_reduction: f64,
    /// Nm
    pub max_motor_torque: f64,
    /// kW
    pub max_motor_power: f64,
    /// R1. Below this rpm the motor is torque limited
    pub torque_regime_rpm: f64,
    /// R2. Above this rpm the motor is power limited
    pub power_regime_rpm: f64,
    pub max_motor_rpm: f64,
    /// Manufacturer quoted top speed in mph. Only used for reporting
    #[serde(default)]
    pub rated_top_speed: Option<f64>
}

impl VehicleProfile {
    pub fn validate(&self) -> Result<()> {
        let positive_fields = [
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("mass", self.mass),
            ("drag_coefficient", self.drag_coefficient),
            ("tire_radius", self.tire_radius),
            ("static_friction", self.static_friction),
            ("frontal_area", self.frontal_area),
            ("gear_reduction", self.gear_reduction),
            ("max_motor_torque", self.max_motor_torque),
            ("max_motor_power", self.max_motor_power),
            ("torque_regime_rpm", self.torque_regime_rpm),
            ("power_regime_rpm", self.power_regime_rpm),
            ("max_motor_rpm", self.max_motor_rpm),
        ];
        for (field, value) in positive_fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(LaunchModelError::InvalidProfile(
                    field, format!("must be a positive number, got {}", value)));
            }
        }
        if self.torque_regime_rpm > self.power_regime_rpm {
            return Err(LaunchModelError::InvalidProfile(
                "torque_regime_rpm",
                format!("{} is above power_regime_rpm {}", self.torque_regime_rpm, self.power_regime_rpm)));
        }
        if self.power_regime_rpm > self.max_motor_rpm {
            return Err(LaunchModelError::InvalidProfile(
                "power_regime_rpm",
                format!("{} is above max_motor_rpm {}", self.power_regime_rpm, self.max_motor_rpm)));
        }
        if let Some(top_speed) = self.rated_top_speed {
            if !top_speed.is_finite() || top_speed <= 0.0 {
                return Err(LaunchModelError::InvalidProfile(
                    "rated_top_speed", format!("must be a positive number, got {}", top_speed)));
            }
        }
        Ok(())
    }

    pub fn tire_radius_m(&self) -> f64 {
        inches_to_meters(self.tire_radius)
    }

    /// The most force the tyres can put down before they break traction (N)
    pub fn traction_limit(&self) -> f64 {
        self.static_friction * self.mass * self.gravity
    }

    /// Road speed (m/s) at which the motor reaches `max_motor_rpm`
    pub fn speed_at_max_rpm(&self) -> f64 {
        (self.max_motor_rpm * 2.0 * std::f64::consts::PI * self.tire_radius_m()) /
            (60.0 * self.gear_reduction)
    }
}
