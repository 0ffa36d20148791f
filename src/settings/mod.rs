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

use std::fs;
use std::path::PathBuf;
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use launch_model::{IntegrationConfig, SearchRange, TorqueRolloff, Vehicle};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Run once with a fixed rolloff and compare against the reference
    Validate,
    /// Search for the tunable factor that best matches the reference
    Fit
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LaunchSettings {
    vehicle: Vehicle,
    mode: RunMode,
    horizon: Option<f64>,
    step: Option<f64>,
    tunable_factor: Option<f64>,
    search_start: f64,
    search_end: f64,
    search_step: f64,
    plot_dir: Option<String>
}

impl Default for LaunchSettings {
    fn default() -> Self {
        let range = SearchRange::default();
        LaunchSettings {
            vehicle: Vehicle::ModelSP100D,
            mode: RunMode::Validate,
            horizon: None,
            step: None,
            tunable_factor: None,
            search_start: range.start,
            search_end: range.end,
            search_step: range.step,
            plot_dir: None
        }
    }
}

impl LaunchSettings {
    const VEHICLE: &'static str = "vehicle";
    const MODE: &'static str = "mode";
    const SEARCH_START: &'static str = "search_start";
    const SEARCH_END: &'static str = "search_end";
    const SEARCH_STEP: &'static str = "search_step";
    const CONFIG_FILENAME: &'static str = "launch-sim-conf";
    const ENV_PREFIX: &'static str = "LAUNCH";

    pub fn load() -> Result<Self, ConfigError> {
        match Self::defaults()?
            .add_source(config::File::with_name(LaunchSettings::CONFIG_FILENAME).required(false))
            .add_source(config::Environment::with_prefix(LaunchSettings::ENV_PREFIX))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let ret: LaunchSettings = Self::defaults()?.build()?.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = LaunchSettings::default();
        Config::builder()
            .set_default(LaunchSettings::VEHICLE, defaults.vehicle.as_str())?
            .set_default(LaunchSettings::MODE, "validate")?
            .set_default(LaunchSettings::SEARCH_START, defaults.search_start)?
            .set_default(LaunchSettings::SEARCH_END, defaults.search_end)?
            .set_default(LaunchSettings::SEARCH_STEP, defaults.search_step)
    }

    pub fn vehicle(&self) -> Vehicle {
        self.vehicle
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// The vehicle's default run with any horizon/step overrides applied
    pub fn integration(&self) -> IntegrationConfig {
        let default = self.vehicle.default_integration();
        IntegrationConfig {
            horizon: self.horizon.unwrap_or(default.horizon),
            step: self.step.unwrap_or(default.step)
        }
    }

    pub fn rolloff(&self) -> TorqueRolloff {
        match self.tunable_factor {
            Some(factor) => TorqueRolloff::Tunable(factor),
            None => self.vehicle.default_rolloff()
        }
    }

    pub fn search_range(&self) -> SearchRange {
        SearchRange { start: self.search_start, end: self.search_end, step: self.search_step }
    }

    pub fn plot_dir(&self) -> Option<PathBuf> {
        self.plot_dir.as_ref().map(PathBuf::from)
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", LaunchSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}
