//! Ballpit headless driver
//!
//! Loads settings (first argument, optional), builds the scenario and steps
//! the world for the configured number of frames, logging diagnostics.

use std::process::ExitCode;

use ballpit::{Settings, World};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let particles = match settings.scenario.build() {
        Ok(particles) => particles,
        Err(err) => {
            log::error!("Failed to build scenario: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut world = World::from_particles(particles);

    for _ in 0..settings.frames {
        match world.advance(&settings.step, settings.frame_dt, settings.max_frame_dt) {
            Ok(report) => {
                if report.frame % 60 == 0 {
                    let drift = world.energy_drift(report.total_energy).unwrap_or(0.0);
                    log::info!(
                        "Frame {}: energy {:.1} (drift {:.3}%), center of mass ({:.1}, {:.1}), {} collisions",
                        report.frame,
                        report.total_energy,
                        drift * 100.0,
                        world.center_of_mass().x,
                        world.center_of_mass().y,
                        report.collisions
                    );
                }
            }
            Err(err) => {
                log::error!("Step {} failed: {err}", world.frame());
                return ExitCode::FAILURE;
            }
        }
    }

    log::info!(
        "Done after {} frames, {} left-wall bounces",
        world.frame(),
        world.bounces()
    );
    ExitCode::SUCCESS
}
