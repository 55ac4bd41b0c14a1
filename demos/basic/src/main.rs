//! basic: one car, random trips, one status line per tick.
//!
//! Usage: `basic [CONFIG.json]`
//!
//! Without an argument the built-in defaults are used: floors 1–10, capacity
//! 5, 100 ticks, a new trip every 5 ticks, seed 42.  A config file may set any
//! subset of the `SimConfig` fields, e.g.
//!
//! ```json
//! { "max_floor": 20, "capacity": 8, "total_ticks": 500 }
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use lift_car::{Car, StepOutcome};
use lift_core::{Floor, RiderId, SimConfig, Tick};
use lift_sim::{SimBuilder, SimObserver, SimStats};

// ── Status logger ─────────────────────────────────────────────────────────────

/// Prints the car's state after every step and one line per rider event.
struct StatusLogger {
    lines: usize,
}

impl StatusLogger {
    fn new() -> Self {
        Self { lines: 0 }
    }

    fn log(&mut self, tick: Tick, msg: std::fmt::Arguments<'_>) {
        self.lines += 1;
        println!("{:>6}  {msg}", tick.to_string());
    }
}

impl SimObserver for StatusLogger {
    fn on_rider_spawned(&mut self, tick: Tick, rider: RiderId, origin: Floor, destination: Floor) {
        self.log(tick, format_args!("{rider}: new trip {origin} -> {destination}"));
    }

    fn on_car_step(&mut self, tick: Tick, car: &Car, outcome: StepOutcome) {
        let note = match outcome {
            StepOutcome::Held => "  (full, holding)",
            StepOutcome::Moved { reversed: true, .. } => "  (reversed)",
            _ => "",
        };
        self.log(
            tick,
            format_args!(
                "car {:<8} floor {:>3}  {:<4}  riders {}/{}{note}",
                car.status(),
                car.position(),
                car.direction(),
                car.occupancy(),
                car.capacity(),
            ),
        );
    }

    fn on_alight(&mut self, tick: Tick, rider: RiderId, floor: Floor) {
        self.log(tick, format_args!("{rider}: out at {floor}"));
    }

    fn on_board(&mut self, tick: Tick, rider: RiderId, floor: Floor) {
        self.log(tick, format_args!("{rider}: in at {floor}"));
    }

    fn on_board_missed(&mut self, tick: Tick, rider: RiderId, floor: Floor) {
        self.log(tick, format_args!("{rider}: car full at {floor}, calling again"));
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;

    println!("=== basic: rust_lift elevator ===");
    println!(
        "Floors: {}..={}  |  Capacity: {}  |  Ticks: {}  |  Trip every: {}  |  Seed: {}",
        config.min_floor,
        config.max_floor,
        config.capacity,
        config.total_ticks,
        config.spawn_interval_ticks,
        config.seed,
    );
    println!();

    let mut sim = SimBuilder::new(config).build()?;
    let mut logger = StatusLogger::new();

    let t0 = Instant::now();
    sim.run(&mut logger)?;
    let elapsed = t0.elapsed();

    let SimStats { spawned, skipped_trips, delivered, waiting, aboard, .. } = sim.stats;
    println!();
    println!("Simulation complete in {:.3} s ({} log lines)", elapsed.as_secs_f64(), logger.lines);
    println!("  trips spawned   : {spawned}");
    println!("  trips skipped   : {skipped_trips}");
    println!("  riders delivered: {delivered}");
    println!("  still waiting   : {waiting}");
    println!("  still aboard    : {aboard}");
    match sim.stats.mean_trip_ticks() {
        Some(mean) => println!("  mean trip       : {mean:.1} ticks"),
        None       => println!("  mean trip       : n/a"),
    }

    if !sim.riders.is_empty() {
        println!();
        println!("{:<14} {:<8} {:<8} {:<10}", "Rider", "From", "To", "Status");
        println!("{}", "-".repeat(42));
        for entry in &sim.riders {
            println!(
                "{:<14} {:<8} {:<8} {:<10}",
                entry.id.to_string(),
                entry.rider.origin(),
                entry.rider.destination(),
                format!("{:?}", entry.rider.status()),
            );
        }
    }

    Ok(())
}
