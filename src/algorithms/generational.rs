//! Generational Genetic Algorithm
//!
//! Each generation is evaluated, reported, truncated to its better half and
//! then replaced wholesale by children bred from that half. Nothing survives
//! from one generation to the next except the best-so-far record.
//!
//! A run is an explicit state machine:
//! `Uninitialized -> Running { generation } -> Done(reason)`.

use std::time::Instant;

use rand::Rng;

use crate::config::{Configuration, TextFields};
use crate::diagnostics::{BestSoFar, EvolutionResult, GenerationReport};
use crate::error::{ConfigResult, ConfigurationError};
use crate::genome::chromosome::Chromosome;
use crate::observer::GenerationObserver;
use crate::operators::crossover::MeanCrossover;
use crate::operators::mutation::UniformPerturbation;
use crate::operators::selection::{ParentPool, TruncationSelection};
use crate::population::population::Population;
use crate::termination::{MaxGenerations, TerminationReason};

/// Generational GA over three-gene chromosomes
///
/// Construction validates everything a run needs, so running never fails.
#[derive(Clone, Debug)]
pub struct GenerationalGA {
    config: Configuration,
    selection: TruncationSelection,
    crossover: MeanCrossover,
    mutation: UniformPerturbation,
    termination: MaxGenerations,
}

impl GenerationalGA {
    /// Create an optimizer for `config`
    ///
    /// Fails if truncation would leave fewer than two parents.
    pub fn new(config: Configuration) -> ConfigResult<Self> {
        let selection = TruncationSelection::new();
        let pool = selection.pool_size(config.population_size());
        if pool < ParentPool::<Chromosome>::MIN_SIZE {
            return Err(ConfigurationError::SelectionPoolTooSmall {
                pool,
                population_size: config.population_size(),
            });
        }

        Ok(Self {
            config,
            selection,
            crossover: MeanCrossover::new(),
            mutation: UniformPerturbation::from_rate(config.mutation_rate()),
            termination: MaxGenerations::new(config.generation_count()),
        })
    }

    /// Parse raw form input and build an optimizer from it
    pub fn from_text_fields(fields: &TextFields) -> ConfigResult<Self> {
        Self::new(fields.parse()?)
    }

    /// The configuration this optimizer runs with
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// A run that has not sampled its population yet
    pub fn prepare(&self) -> Run<'_> {
        Run {
            ga: self,
            state: RunState::Uninitialized,
            population: Population::from_chromosomes(Vec::new(), 0),
            best: BestSoFar::new(),
            best_history: Vec::new(),
            last_report: None,
            evaluations: 0,
            started: Instant::now(),
        }
    }

    /// A run with its generation-0 population sampled
    pub fn start<R: Rng + ?Sized>(&self, rng: &mut R) -> Run<'_> {
        let mut run = self.prepare();
        run.initialize(rng);
        run
    }

    /// Run every generation, or until `observer` asks to stop
    pub fn run<R, O>(&self, rng: &mut R, mut observer: O) -> EvolutionResult
    where
        R: Rng + ?Sized,
        O: GenerationObserver,
    {
        let mut run = self.start(rng);
        while let RunState::Running { .. } = run.state() {
            if observer.should_stop() {
                run.cancel();
                break;
            }
            run.step(rng, &mut observer);
        }
        run.finish()
    }

    /// Next generation bred from the survivors of `population`
    ///
    /// Returns `None` if truncation leaves fewer than two parents.
    fn breed<R: Rng + ?Sized>(&self, population: &Population, rng: &mut R) -> Option<Population> {
        let survivors: Vec<Chromosome> = self
            .selection
            .select(population)
            .into_iter()
            .map(|i| population.chromosomes()[i])
            .collect();
        let pool = ParentPool::new(survivors)?;

        let size = self.config.population_size();
        let mut offspring = Vec::with_capacity(size);
        while offspring.len() < size {
            let (parent1, parent2) = pool.pick(rng);
            let mut child = self.crossover.crossover(parent1, parent2);
            self.mutation.mutate(&mut child, rng);
            offspring.push(child);
        }

        Some(Population::from_chromosomes(
            offspring,
            population.generation() + 1,
        ))
    }
}

/// Where a run is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No population has been sampled yet
    Uninitialized,
    /// `generation` is the next generation to evaluate
    Running {
        /// Zero-based index of the pending generation
        generation: usize,
    },
    /// The run has ended
    Done(TerminationReason),
}

/// One in-progress run of a [`GenerationalGA`]
///
/// Drive it with [`step`](Run::step) for generation-by-generation control,
/// or use [`GenerationalGA::run`] to run to completion.
#[derive(Debug)]
pub struct Run<'a> {
    ga: &'a GenerationalGA,
    state: RunState,
    population: Population,
    best: BestSoFar,
    best_history: Vec<f64>,
    last_report: Option<GenerationReport>,
    evaluations: usize,
    started: Instant,
}

impl<'a> Run<'a> {
    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The population awaiting evaluation, or the last evaluated one once done
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Best-so-far record
    pub fn best(&self) -> &BestSoFar {
        &self.best
    }

    /// Number of generations evaluated so far
    pub fn completed_generations(&self) -> usize {
        self.best_history.len()
    }

    /// Advance by one transition and return the new state
    ///
    /// From `Uninitialized` this samples the initial population. From
    /// `Running` it evaluates, reports and replaces one generation. `Done`
    /// is terminal.
    pub fn step<R, O>(&mut self, rng: &mut R, observer: &mut O) -> RunState
    where
        R: Rng + ?Sized,
        O: GenerationObserver + ?Sized,
    {
        match self.state {
            RunState::Uninitialized => self.initialize(rng),
            RunState::Running { generation } => self.advance(generation, rng, observer),
            RunState::Done(_) => {}
        }
        self.state
    }

    /// End the run before its generation budget is spent
    pub fn cancel(&mut self) {
        if !matches!(self.state, RunState::Done(_)) {
            tracing::debug!(
                completed = self.completed_generations(),
                "run cancelled"
            );
            self.state = RunState::Done(TerminationReason::Cancelled);
        }
    }

    /// Consume the run and summarize it
    pub fn finish(self) -> EvolutionResult {
        let termination_reason = match self.state {
            RunState::Done(reason) => reason,
            _ => TerminationReason::Cancelled,
        };
        let generations = self.completed_generations();
        tracing::debug!(
            generations,
            best_score = self.best.score,
            reason = %termination_reason,
            "run finished"
        );

        EvolutionResult {
            best: self.best,
            generations,
            evaluations: self.evaluations,
            best_history: self.best_history,
            final_report: self.last_report,
            termination_reason,
            total_runtime_ms: self.started.elapsed().as_secs_f64() * 1000.0,
        }
    }

    fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.state != RunState::Uninitialized {
            return;
        }
        let config = self.ga.config;
        tracing::debug!(
            population_size = config.population_size(),
            generation_count = config.generation_count(),
            mutation_rate = config.mutation_rate(),
            gene_min = config.gene_min(),
            gene_max = config.gene_max(),
            "starting run"
        );
        self.population = Population::random(config.population_size(), &config.bounds(), rng);
        self.started = Instant::now();
        self.state = RunState::Running { generation: 0 };
    }

    fn advance<R, O>(&mut self, generation: usize, rng: &mut R, observer: &mut O)
    where
        R: Rng + ?Sized,
        O: GenerationObserver + ?Sized,
    {
        self.population.evaluate();
        self.evaluations += self.population.len();

        let generation_best = self.population.best().map(|(c, s)| (*c, s));
        if let Some((chromosome, score)) = generation_best {
            if self.best.offer(&chromosome, score) {
                tracing::debug!(generation, score, "best-so-far improved");
                observer.on_best_updated(&chromosome, score);
            }
        }

        let report = self.population.report();
        observer.on_generation_report(&report);
        self.last_report = Some(report);
        self.best_history.push(self.best.score);

        tracing::trace!(
            generation,
            generation_best = ?generation_best.map(|(_, s)| s),
            best_so_far = self.best.score,
            "generation evaluated"
        );

        let completed = generation + 1;
        if self.ga.termination.should_terminate(completed) {
            self.state = RunState::Done(self.ga.termination.reason());
            return;
        }

        match self.ga.breed(&self.population, rng) {
            Some(next) => {
                self.population = next;
                self.state = RunState::Running {
                    generation: completed,
                };
            }
            None => {
                tracing::warn!(generation, "too few survivors to breed");
                self.state = RunState::Done(TerminationReason::NoParents);
            }
        }
    }
}
