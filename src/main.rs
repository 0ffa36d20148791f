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

mod plot;
mod report;
mod settings;

use std::{env, fs};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_appender;
use tracing_subscriber;

use launch_model::{compare, find_optimal_factor, integrate, root_sum_squared_error, LaunchModelError, TorqueRolloff};
use crate::settings::{LaunchSettings, RunMode};

#[derive(thiserror::Error, Debug)]
enum LaunchError {
    #[error("failed to load settings. {0}")]
    Settings(#[from] config::ConfigError),
    #[error("simulation error. {0}")]
    Model(#[from] LaunchModelError)
}

fn init_logging() {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "launch_sim.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn plot_dir(settings: &LaunchSettings) -> Option<PathBuf> {
    let dir = settings.plot_dir()?;
    match fs::create_dir_all(&dir) {
        Ok(_) => Some(dir),
        Err(e) => {
            warn!("Can't create plot dir {}. {}", dir.display(), e.to_string());
            None
        }
    }
}

fn run(settings: &LaunchSettings) -> Result<(), LaunchError> {
    let vehicle = settings.vehicle();
    let profile = vehicle.profile();
    let reference = vehicle.reference();
    let config = settings.integration();
    info!("Running {:?} for {} over {}s at {}s steps", settings.mode(), vehicle, config.horizon, config.step);

    print!("{}", report::profile_summary(&profile));
    println!();

    let rolloff = match settings.mode() {
        RunMode::Validate => settings.rolloff(),
        RunMode::Fit => {
            let outcome = find_optimal_factor(&profile, &reference, &config, &settings.search_range())?;
            print!("{}", report::search_summary(&outcome));
            println!();
            if let Some(dir) = plot_dir(settings) {
                match plot::plot_search(&dir.join(format!("{}_factor_search.png", vehicle)), &outcome.evaluated) {
                    Ok(path) => info!("Wrote {}", path.display()),
                    Err(e) => warn!("Failed to plot factor search. {}", e.to_string())
                }
            }
            TorqueRolloff::Tunable(outcome.best.tunable_factor)
        }
    };

    let series = integrate(&profile, &config, rolloff)?;
    let error = root_sum_squared_error(&series, &reference)?;
    let rows = compare(&series, &reference)?;
    print!("{}", report::comparison_table(&rows));
    println!();
    print!("{}", report::run_summary(&profile, rolloff, &series, error));

    if let Some(dir) = plot_dir(settings) {
        match plot::plot_speed(&dir.join(format!("{}_speed.png", vehicle)), &profile.name, &series, &reference) {
            Ok(path) => info!("Wrote {}", path.display()),
            Err(e) => warn!("Failed to plot speed. {}", e.to_string())
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let result = LaunchSettings::load()
        .map_err(LaunchError::from)
        .and_then(|settings| run(&settings));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e.to_string());
            eprintln!("{}", e.to_string());
            ExitCode::FAILURE
        }
    }
}
