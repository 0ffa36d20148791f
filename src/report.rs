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

use itertools::Itertools;
use launch_model::{ComparisonRow, ForceModel, SearchOutcome, TimeSeries, TorqueRolloff, VehicleProfile};
use utils::numeric::round_float_to;
use utils::units::{kw_to_bhp, meters_per_second_to_mph};

/// One line per entry, each newline terminated
fn to_block<I: IntoIterator<Item=String>>(lines: I) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn profile_summary(profile: &VehicleProfile) -> String {
    to_block([
        profile.name.to_string(),
        format!("  mass {} kg, Cd {}, frontal area {} m^2", profile.mass, profile.drag_coefficient, profile.frontal_area),
        format!("  {} Nm up to {} rpm, {} kW ({} bhp) from {} rpm, limit {} rpm",
                profile.max_motor_torque,
                profile.torque_regime_rpm,
                profile.max_motor_power,
                round_float_to(kw_to_bhp(profile.max_motor_power), 0),
                profile.power_regime_rpm,
                profile.max_motor_rpm),
        format!("  gear reduction {}, tyre radius {} in, grip {}",
                profile.gear_reduction, profile.tire_radius, profile.static_friction)
    ])
}

pub fn comparison_table(rows: &[ComparisonRow]) -> String {
    let header = format!("{:>8}  {:>12}  {:>12}  {:>8}", "t (s)", "sim (mph)", "ref (mph)", "diff");
    to_block(std::iter::once(header).chain(rows.iter().map(|row| {
        format!("{:>8.2}  {:>12.3}  {:>12.1}  {:>8.3}",
                row.time, row.simulated, row.reference, row.difference())
    })))
}

pub fn run_summary(profile: &VehicleProfile, rolloff: TorqueRolloff, series: &TimeSeries, error: f64) -> String {
    let mode = match rolloff.factor() {
        Some(factor) => format!("tunable factor {}", round_float_to(factor, 4)),
        None => "calibrated".to_string()
    };
    let mut lines = vec![
        format!("Rolloff: {}", mode),
        format!("RSME: {}", error),
        format!("Speed after {}s: {:.1} mph",
                round_float_to(series.step() * (series.len() - 1) as f64, 2),
                series.final_speed_mph())
    ];

    if let Ok(model) = ForceModel::new(profile, rolloff) {
        let terminal = match model.terminal_speed() {
            Some(speed) => format!("{:.1} mph", meters_per_second_to_mph(speed)),
            None => "rpm limited".to_string()
        };
        lines.push(match profile.rated_top_speed {
            Some(rated) => format!("Top speed: {} (rated {} mph)", terminal, rated),
            None => format!("Top speed: {}", terminal)
        });
    }
    if let Some(warning) = series.divergence() {
        lines.push(format!("WARNING: run diverged, {}", warning));
    }
    to_block(lines)
}

pub fn search_summary(outcome: &SearchOutcome) -> String {
    let errors = outcome.evaluated.iter()
        .map(|r| format!("{}={:.3}", round_float_to(r.tunable_factor, 4), r.error))
        .join(", ");
    to_block([
        format!("This is the optimal tunable factor: {} (RSME {})",
                round_float_to(outcome.best.tunable_factor, 4), outcome.best.error),
        format!("Scanned {} factors: {}", outcome.evaluated.len(), errors)
    ])
}

#[cfg(test)]
mod tests {
    use launch_model::{compare, FitResult, integrate, SearchOutcome, TorqueRolloff, Vehicle};
    use crate::report::{comparison_table, profile_summary, run_summary, search_summary};

    #[test]
    fn tables_have_a_row_per_reference_point() {
        let vehicle = Vehicle::ModelSP100D;
        let series = integrate(&vehicle.profile(), &vehicle.default_integration(), TorqueRolloff::Calibrated).unwrap();
        let rows = compare(&series, &vehicle.reference()).unwrap();
        let table = comparison_table(&rows);
        assert_eq!(table.lines().count(), 12);
        assert!(table.lines().nth(11).unwrap().contains("149.1"));
        assert!(table.ends_with('\n'));
        assert!(comparison_table(&[]).starts_with("   t (s)"));
        assert_eq!(comparison_table(&[]).lines().count(), 1);
    }

    #[test]
    fn summaries() {
        let vehicle = Vehicle::Roadster;
        let profile = vehicle.profile();
        assert!(profile_summary(&profile).starts_with("Tesla Roadster"));
        assert!(profile_summary(&profile).contains("1341 bhp"));
        assert_eq!(profile_summary(&profile).lines().count(), 4);
        assert!(profile_summary(&profile).ends_with('\n'));

        let series = integrate(&profile, &vehicle.default_integration(), vehicle.default_rolloff()).unwrap();
        let summary = run_summary(&profile, vehicle.default_rolloff(), &series, 37.17);
        assert!(summary.contains("tunable factor 1.55"));
        assert!(summary.contains("Speed after 50s"));
        assert!(summary.contains("rated 250 mph"));
        assert!(!summary.contains("WARNING"));
        assert_eq!(summary.lines().count(), 4);
        assert!(summary.ends_with("mph)\n"));
    }

    #[test]
    fn search_summary_lists_candidates() {
        let outcome = SearchOutcome {
            best: FitResult { tunable_factor: 1.5500000000000003, error: 8.75 },
            evaluated: vec![FitResult { tunable_factor: 1.5, error: 9.0 },
                            FitResult { tunable_factor: 1.5500000000000003, error: 8.75 }]
        };
        let summary = search_summary(&outcome);
        assert!(summary.starts_with("This is the optimal tunable factor: 1.55 "));
        assert!(summary.contains("1.5=9.000, 1.55=8.750"));
        assert_eq!(summary.lines().count(), 2);
        assert!(summary.ends_with("1.55=8.750\n"));
    }
}
