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

use ndarray::Array1;
use tracing::{debug, warn};
use utils::numeric::steps_to_cover;
use utils::units::meters_per_second_to_mph;
use crate::error::{LaunchModelError, Result};
use crate::force::{ForceModel, TorqueRolloff};
use crate::series::{DivergenceKind, DivergenceWarning, TimeSeries};
use crate::vehicle::VehicleProfile;

/// How long to simulate and at what resolution, both in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationConfig {
    pub horizon: f64,
    pub step: f64
}

impl IntegrationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(LaunchModelError::InvalidIntegration(
                format!("horizon must be a positive number of seconds, got {}", self.horizon)));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(LaunchModelError::InvalidIntegration(
                format!("step must be a positive number of seconds, got {}", self.step)));
        }
        if self.step > self.horizon {
            return Err(LaunchModelError::InvalidIntegration(
                format!("step {} is longer than the horizon {}", self.step, self.horizon)));
        }
        Ok(())
    }

    pub fn step_count(&self) -> usize {
        steps_to_cover(self.horizon, self.step)
    }
}

/// Runs the car from standstill to the end of the horizon using forward Euler steps.
///
/// Always runs the full horizon. If the speed stops being finite, or the drive force turns
/// negative, the first such step is recorded on the returned series and logged; choosing a
/// horizon and factor that keep the run sensible is up to the caller.
pub fn integrate(profile: &VehicleProfile,
                 config: &IntegrationConfig,
                 rolloff: TorqueRolloff) -> Result<TimeSeries> {
    config.validate()?;
    let model = ForceModel::new(profile, rolloff)?;
    let steps = config.step_count();

    let mut time = Vec::with_capacity(steps + 1);
    let mut speed_mph = Vec::with_capacity(steps + 1);
    time.push(0.0);
    speed_mph.push(0.0);

    let mut divergence: Option<DivergenceWarning> = None;
    let mut speed = 0.0;
    for i in 0..steps {
        let forces = model.forces(speed);
        speed += forces.acceleration * config.step;
        let t = (i + 1) as f64 * config.step;
        time.push(t);
        speed_mph.push(meters_per_second_to_mph(speed));

        if divergence.is_none() {
            let kind = if !speed.is_finite() {
                Some(DivergenceKind::NonFinite)
            } else if forces.forward_force < 0.0 {
                Some(DivergenceKind::NegativeDriveForce)
            } else {
                None
            };
            if let Some(kind) = kind {
                let warning = DivergenceWarning { kind, index: i + 1, time: t };
                warn!("{} run with {:?} diverged. {}", profile.name, rolloff, warning);
                divergence = Some(warning);
            }
        }
    }
    debug!("Integrated {} over {}s in {} steps with {:?}", profile.name, config.horizon, steps, rolloff);

    Ok(TimeSeries::new(config.step, Array1::from_vec(time), Array1::from_vec(speed_mph), divergence))
}
