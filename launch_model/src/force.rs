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

use std::f64::consts::PI;
use crate::error::{LaunchModelError, Result};
use crate::vehicle::VehicleProfile;

/// Converts a torque (Nm) at a given rpm into power (kW) and back
const POWER_TORQUE_CONSTANT: f64 = 9549.3;

/// How the motor torque rolls off once it leaves the torque-limited regime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TorqueRolloff {
    /// Pure torque/power curve with no extra decay
    Calibrated,
    /// Torque is additionally scaled by `1 - (rpm - R1) / (factor * max_rpm)` above R1
    Tunable(f64)
}

impl TorqueRolloff {
    pub fn factor(&self) -> Option<f64> {
        match self {
            TorqueRolloff::Calibrated => None,
            TorqueRolloff::Tunable(factor) => Some(*factor)
        }
    }

    fn validate(&self) -> Result<()> {
        if let TorqueRolloff::Tunable(factor) = self {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(LaunchModelError::InvalidTunableFactor(*factor));
            }
        }
        Ok(())
    }
}

impl From<Option<f64>> for TorqueRolloff {
    fn from(factor: Option<f64>) -> Self {
        match factor {
            None => TorqueRolloff::Calibrated,
            Some(f) => TorqueRolloff::Tunable(f)
        }
    }
}

/// The decay applied to the motor torque above the torque regime.
///
/// Not clamped: a small factor combined with a high rpm gives a negative decay and
/// therefore a negative drive force.
pub fn tunable_decay(profile: &VehicleProfile, rpm: f64, factor: f64) -> f64 {
    1.0 - ((rpm - profile.torque_regime_rpm) / (factor * profile.max_motor_rpm))
}

/// Everything the model works out for a single speed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceBreakdown {
    pub rpm: f64,
    pub imparted_force: f64,
    pub forward_force: f64,
    pub drag: f64,
    pub acceleration: f64
}

pub struct ForceModel<'a> {
    profile: &'a VehicleProfile,
    rolloff: TorqueRolloff
}

impl<'a> ForceModel<'a> {
    pub fn new(profile: &'a VehicleProfile, rolloff: TorqueRolloff) -> Result<ForceModel<'a>> {
        profile.validate()?;
        rolloff.validate()?;
        Ok(ForceModel { profile, rolloff })
    }

    pub fn profile(&self) -> &VehicleProfile {
        self.profile
    }

    pub fn rolloff(&self) -> TorqueRolloff {
        self.rolloff
    }

    /// Motor rpm for a road speed in m/s
    pub fn motor_rpm(&self, speed: f64) -> f64 {
        (60.0 * self.profile.gear_reduction * speed) / (2.0 * PI * self.profile.tire_radius_m())
    }

    /// Force (N) the tyres push into the road at the given motor rpm, ignoring grip.
    ///
    /// The rpm is held within `[0, max_motor_rpm]`; past the rev limit the motor keeps
    /// delivering what it did at the limit.
    pub fn imparted_force(&self, rpm: f64) -> f64 {
        let p = self.profile;
        let rpm = rpm.clamp(0.0, p.max_motor_rpm);
        let radius = p.tire_radius_m();
        let r1 = p.torque_regime_rpm;
        let r2 = p.power_regime_rpm;

        if rpm <= r1 {
            return (p.gear_reduction * p.max_motor_torque) / radius;
        }

        match self.rolloff {
            TorqueRolloff::Calibrated => {
                if rpm < r2 {
                    let slope = (((POWER_TORQUE_CONSTANT * p.gear_reduction * p.max_motor_power) / r2)
                        - (p.gear_reduction * p.max_motor_torque)) / (r2 - r1);
                    let offset = (rpm - r1) / radius;
                    let base = (p.gear_reduction * p.max_motor_torque) / radius;
                    (slope * offset) + base
                } else {
                    ((POWER_TORQUE_CONSTANT * p.gear_reduction * p.max_motor_power) / rpm) * (1.0 / radius)
                }
            }
            TorqueRolloff::Tunable(factor) => {
                let decay = tunable_decay(p, rpm, factor);
                if rpm < r2 {
                    let slope = (((POWER_TORQUE_CONSTANT * p.max_motor_power) / r2) - p.max_motor_torque) / (r2 - r1);
                    (p.gear_reduction * decay * ((slope * (rpm - r1)) + p.max_motor_torque)) / radius
                } else {
                    (p.gear_reduction * decay * ((POWER_TORQUE_CONSTANT * p.max_motor_power) / rpm)) / radius
                }
            }
        }
    }

    /// Drive force once limited by static friction
    pub fn forward_force(&self, speed: f64) -> f64 {
        self.profile.traction_limit().min(self.imparted_force(self.motor_rpm(speed)))
    }

    /// Speed in m/s
    pub fn aerodynamic_drag(&self, speed: f64) -> f64 {
        let p = self.profile;
        0.5 * (p.air_density * p.drag_coefficient * p.frontal_area * speed.powi(2))
    }

    /// Net longitudinal acceleration in m/s^2
    pub fn acceleration(&self, speed: f64) -> f64 {
        (self.forward_force(speed) - self.aerodynamic_drag(speed)) / self.profile.mass
    }

    pub fn forces(&self, speed: f64) -> ForceBreakdown {
        let rpm = self.motor_rpm(speed);
        let imparted_force = self.imparted_force(rpm);
        let forward_force = self.profile.traction_limit().min(imparted_force);
        let drag = self.aerodynamic_drag(speed);
        ForceBreakdown {
            rpm,
            imparted_force,
            forward_force,
            drag,
            acceleration: (forward_force - drag) / self.profile.mass
        }
    }

    /// The speed (m/s) at which drag cancels out the drive force.
    ///
    /// Returns `None` when the car is still accelerating at the rev limit, in which case
    /// it is rpm limited rather than drag limited.
    pub fn terminal_speed(&self) -> Option<f64> {
        let mut low = 0.0;
        let mut high = self.profile.speed_at_max_rpm();
        if self.acceleration(high) > 0.0 {
            return None;
        }
        for _ in 0..200 {
            let mid = 0.5 * (low + high);
            if self.acceleration(mid) > 0.0 {
                low = mid;
            } else {
                high = mid;
            }
            if high - low < 1e-9 {
                break;
            }
        }
        Some(0.5 * (low + high))
    }
}
