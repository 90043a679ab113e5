//! End-to-end tests for the generational optimizer

use std::sync::mpsc;
use std::thread;

use approx::assert_relative_eq;
use quadratic_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn default_run(seed: u64) -> (EvolutionResult, Recorder) {
    let ga = GenerationalGA::new(Configuration::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut recorder = Recorder::new();
    let result = ga.run(&mut rng, &mut recorder);
    (result, recorder)
}

#[test]
fn test_default_run_improves_on_initial_population() {
    let (result, recorder) = default_run(42);

    assert_eq!(result.generations, 100);
    assert_eq!(result.evaluations, 5000);
    assert_eq!(recorder.reports.len(), 100);
    assert!(recorder.reports.iter().all(|r| r.len() == 50));

    let initial_best = recorder.reports[0].min_score().unwrap();
    let best = result.best_chromosome().unwrap();
    assert!(result.best_score() < initial_best * 0.01);
    assert!(result.best_score() < 1.0);
    assert_relative_eq!(result.best_score(), evaluate(best));

    let bowl = QuadraticBowl;
    let initial_row = recorder.reports[0]
        .rows
        .iter()
        .min_by(|a, b| a.score.total_cmp(&b.score))
        .unwrap();
    assert!(
        bowl.distance_to_optimum(best)
            < bowl.distance_to_optimum(&Chromosome::new(initial_row.genes))
    );
}

#[test]
fn test_same_seed_same_run() {
    let (a, recorder_a) = default_run(7);
    let (b, recorder_b) = default_run(7);

    assert_eq!(recorder_a.reports, recorder_b.reports);
    assert_eq!(recorder_a.best_updates, recorder_b.best_updates);
    assert_eq!(a.best_chromosome(), b.best_chromosome());
    assert_eq!(a.best_history, b.best_history);
}

#[test]
fn test_different_seeds_differ() {
    let (_, a) = default_run(1);
    let (_, b) = default_run(2);
    assert_ne!(a.reports[0], b.reports[0]);
}

#[test]
fn test_rejected_configurations() {
    let inverted = ConfigurationBuilder::with_defaults()
        .gene_bounds(10.0, -10.0)
        .build();
    assert_eq!(
        inverted,
        Err(ConfigurationError::InvertedBounds {
            min: 10.0,
            max: -10.0
        })
    );

    let rate = ConfigurationBuilder::with_defaults()
        .mutation_rate(150.0)
        .build();
    assert_eq!(rate, Err(ConfigurationError::MutationRateOutOfRange(150.0)));

    let empty = ConfigurationBuilder::with_defaults().population_size(0).build();
    assert!(matches!(
        empty,
        Err(ConfigurationError::NotPositive {
            field: "population_size",
            value: 0
        })
    ));

    let tiny = ConfigurationBuilder::with_defaults()
        .population_size(3)
        .build()
        .unwrap();
    assert!(matches!(
        GenerationalGA::new(tiny),
        Err(ConfigurationError::SelectionPoolTooSmall { pool: 1, .. })
    ));
}

#[test]
fn test_text_fields_rejection_messages() {
    let fields = TextFields {
        gene_min: "10".to_string(),
        gene_max: "-10".to_string(),
        ..TextFields::with_defaults()
    };
    let err = GenerationalGA::from_text_fields(&fields).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid gene bounds: min (10) must be < max (-10)"
    );

    let fields = TextFields {
        population_size: "fifty".to_string(),
        ..TextFields::with_defaults()
    };
    assert!(matches!(
        GenerationalGA::from_text_fields(&fields),
        Err(ConfigurationError::NotNumeric { field: "population_size", .. })
    ));
}

#[test]
fn test_crossover_arithmetic() {
    let child = MeanCrossover::new().crossover(
        &Chromosome::new([0.0, 0.0, 0.0]),
        &Chromosome::new([2.0, 2.0, 2.0]),
    );
    assert_eq!(child, Chromosome::new([1.0, 1.0, 1.0]));

    let child = MeanCrossover::new().crossover(
        &Chromosome::new([4.0, -3.0, -0.5]),
        &Chromosome::new([-4.0, 3.0, 0.5]),
    );
    assert_eq!(child, Chromosome::zeros());
}

#[test]
fn test_objective_reference_points() {
    assert_eq!(evaluate(&Chromosome::new([4.0, -3.0, -0.5])), 0.0);
    assert_eq!(evaluate(&Chromosome::zeros()), 100.0);
    assert_eq!(evaluate(&Chromosome::new([5.0, -3.0, -0.5])), 3.0);
}

#[test]
fn test_single_generation_has_no_offspring_effect() {
    let config = ConfigurationBuilder::with_defaults()
        .generation_count(1)
        .build()
        .unwrap();
    let ga = GenerationalGA::new(config).unwrap();
    let mut recorder = Recorder::new();
    let result = ga.run(&mut StdRng::seed_from_u64(11), &mut recorder);

    assert_eq!(recorder.reports.len(), 1);
    assert_eq!(recorder.best_updates.len(), 1);
    assert_eq!(
        Some(result.best_score()),
        recorder.reports[0].min_score()
    );
}

#[test]
fn test_channel_observer_across_threads() {
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        let ga = GenerationalGA::new(Configuration::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        ga.run(&mut rng, ChannelObserver::new(tx))
    });

    let mut reports = 0;
    let mut last_best = f64::INFINITY;
    for event in rx {
        match event {
            RunEvent::Report(report) => {
                assert_eq!(report.generation, reports);
                reports += 1;
            }
            RunEvent::BestUpdated { score, .. } => {
                assert!(score < last_best);
                last_best = score;
            }
        }
    }

    let result = worker.join().unwrap();
    assert_eq!(reports, 100);
    assert_eq!(result.best_score(), last_best);
    assert_eq!(result.termination_reason, TerminationReason::GenerationLimit);
}

#[test]
fn test_dropped_receiver_cancels_run() {
    let (tx, rx) = mpsc::channel();
    drop(rx);
    let ga = GenerationalGA::new(Configuration::default()).unwrap();
    let result = ga.run(&mut StdRng::seed_from_u64(3), ChannelObserver::new(tx));

    assert_eq!(result.termination_reason, TerminationReason::Cancelled);
    assert_eq!(result.generations, 1);
}

#[test]
fn test_result_serializes() {
    let config = ConfigurationBuilder::with_defaults()
        .generation_count(3)
        .population_size(6)
        .build()
        .unwrap();
    let ga = GenerationalGA::new(config).unwrap();
    let result = ga.run(&mut StdRng::seed_from_u64(5), ());

    let json = result.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["generations"], 3);
    assert_eq!(parsed["final_report"]["rows"].as_array().unwrap().len(), 6);
    assert!(result.summary().contains("Maximum generations reached"));
}

#[test]
fn test_cancelled_result_reads_back() {
    let ga = GenerationalGA::new(Configuration::default()).unwrap();
    let mut recorder = Recorder::stopping_after(0);
    let result = ga.run(&mut StdRng::seed_from_u64(1), &mut recorder);
    assert_eq!(result.generations, 0);

    let back: EvolutionResult = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert!(back.best_chromosome().is_none());
    assert_eq!(back.best_score(), f64::INFINITY);
    assert_eq!(back.termination_reason, TerminationReason::Cancelled);
}

#[test]
fn test_overflowing_bounds_rejected_before_run() {
    let result = ConfigurationBuilder::with_defaults()
        .gene_bounds(-1e308, 1e308)
        .build();
    assert!(matches!(
        result,
        Err(ConfigurationError::NonFinite { field: "gene_range", .. })
    ));
}
