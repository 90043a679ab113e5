//! Quadratic Bowl Optimization
//!
//! Runs the generational GA with the default parameter form on a worker
//! thread and prints progress as events arrive on a channel.
//!
//! Set `RUST_LOG=quadratic_evo=debug` to see the optimizer's own events.

use std::sync::mpsc;
use std::thread;

use quadratic_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Quadratic Bowl Optimization ===\n");

    // Same values a user would see pre-filled in the parameter form
    let fields = TextFields::with_defaults();
    let ga = GenerationalGA::from_text_fields(&fields)?;
    println!("Configuration: {}", serde_json::to_string(ga.config())?);

    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        let mut rng = StdRng::seed_from_u64(42);
        ga.run(&mut rng, ChannelObserver::new(tx))
    });

    let mut best = BestSoFar::new();
    let mut last_report = None;
    for event in rx {
        match event {
            RunEvent::BestUpdated { chromosome, score } => {
                best.offer(&chromosome, score);
                println!("{best}");
            }
            RunEvent::Report(report) => last_report = Some(report),
        }
    }

    let result = worker
        .join()
        .map_err(|_| "optimizer thread panicked")?;

    if let Some(report) = last_report {
        println!("\nFinal generation ({}):", report.generation);
        println!("{report}");
    }

    println!("{}", result.summary());

    let distance = QuadraticBowl.distance_to_optimum(
        result.best_chromosome().ok_or("no generation was evaluated")?,
    );
    println!("\nDistance from optimum: {distance:.6}");

    Ok(())
}
