//! Run observers
//!
//! The optimizer never touches presentation state. Instead it invokes the
//! hooks of a [`GenerationObserver`] synchronously, once per generation.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::diagnostics::GenerationReport;
use crate::genome::chromosome::Chromosome;

/// Receives per-generation output from a run
pub trait GenerationObserver {
    /// Called once per generation with every evaluated chromosome
    fn on_generation_report(&mut self, report: &GenerationReport);

    /// Called when the best-so-far record improves
    fn on_best_updated(&mut self, chromosome: &Chromosome, score: f64);

    /// Checked between generations; returning `true` ends the run early
    fn should_stop(&self) -> bool {
        false
    }
}

impl GenerationObserver for () {
    fn on_generation_report(&mut self, _report: &GenerationReport) {}

    fn on_best_updated(&mut self, _chromosome: &Chromosome, _score: f64) {}
}

impl<O: GenerationObserver + ?Sized> GenerationObserver for &mut O {
    fn on_generation_report(&mut self, report: &GenerationReport) {
        (**self).on_generation_report(report);
    }

    fn on_best_updated(&mut self, chromosome: &Chromosome, score: f64) {
        (**self).on_best_updated(chromosome, score);
    }

    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}

/// Observer that keeps everything it is shown
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    /// Every generation report, in order
    pub reports: Vec<GenerationReport>,
    /// Every best-so-far update, in order
    pub best_updates: Vec<(Chromosome, f64)>,
    /// Stop once this many reports have been recorded
    pub stop_after: Option<usize>,
}

impl Recorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that asks to stop after `generations` reports
    pub fn stopping_after(generations: usize) -> Self {
        Self {
            stop_after: Some(generations),
            ..Self::default()
        }
    }

    /// The most recent report
    pub fn last_report(&self) -> Option<&GenerationReport> {
        self.reports.last()
    }
}

impl GenerationObserver for Recorder {
    fn on_generation_report(&mut self, report: &GenerationReport) {
        self.reports.push(report.clone());
    }

    fn on_best_updated(&mut self, chromosome: &Chromosome, score: f64) {
        self.best_updates.push((*chromosome, score));
    }

    fn should_stop(&self) -> bool {
        self.stop_after
            .is_some_and(|limit| self.reports.len() >= limit)
    }
}

/// Message sent by a [`ChannelObserver`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    /// A generation was evaluated
    Report(GenerationReport),
    /// The best-so-far record improved
    BestUpdated {
        /// New best chromosome
        chromosome: Chromosome,
        /// Its score
        score: f64,
    },
}

/// Observer that forwards events through a channel
///
/// Lets a run execute on a worker thread while a presentation layer drains the
/// receiving end. Once the receiver hangs up the run is asked to stop.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: Sender<RunEvent>,
    disconnected: bool,
}

impl ChannelObserver {
    /// Wrap the sending half of a channel
    pub fn new(sender: Sender<RunEvent>) -> Self {
        Self {
            sender,
            disconnected: false,
        }
    }

    fn send(&mut self, event: RunEvent) {
        if self.disconnected {
            return;
        }
        if self.sender.send(event).is_err() {
            tracing::debug!("run event receiver dropped");
            self.disconnected = true;
        }
    }
}

impl GenerationObserver for ChannelObserver {
    fn on_generation_report(&mut self, report: &GenerationReport) {
        self.send(RunEvent::Report(report.clone()));
    }

    fn on_best_updated(&mut self, chromosome: &Chromosome, score: f64) {
        self.send(RunEvent::BestUpdated {
            chromosome: *chromosome,
            score,
        });
    }

    fn should_stop(&self) -> bool {
        self.disconnected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn report(generation: usize) -> GenerationReport {
        GenerationReport::new(generation, Vec::new())
    }

    #[test]
    fn test_recorder_records_in_order() {
        let mut recorder = Recorder::new();
        recorder.on_generation_report(&report(0));
        recorder.on_best_updated(&Chromosome::zeros(), 100.0);
        recorder.on_generation_report(&report(1));

        assert_eq!(recorder.reports.len(), 2);
        assert_eq!(recorder.last_report().map(|r| r.generation), Some(1));
        assert_eq!(recorder.best_updates, vec![(Chromosome::zeros(), 100.0)]);
        assert!(!recorder.should_stop());
    }

    #[test]
    fn test_recorder_stopping_after() {
        let mut recorder = Recorder::stopping_after(2);
        recorder.on_generation_report(&report(0));
        assert!(!recorder.should_stop());
        recorder.on_generation_report(&report(1));
        assert!(recorder.should_stop());
    }

    #[test]
    fn test_channel_observer_forwards() {
        let (tx, rx) = mpsc::channel();
        let mut observer = ChannelObserver::new(tx);
        observer.on_best_updated(&Chromosome::filled(1.0), 5.0);
        observer.on_generation_report(&report(0));

        assert_eq!(
            rx.recv().unwrap(),
            RunEvent::BestUpdated {
                chromosome: Chromosome::filled(1.0),
                score: 5.0
            }
        );
        assert_eq!(rx.recv().unwrap(), RunEvent::Report(report(0)));
        assert!(!observer.should_stop());
    }

    #[test]
    fn test_channel_observer_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        let mut observer = ChannelObserver::new(tx);
        drop(rx);
        observer.on_generation_report(&report(0));
        assert!(observer.should_stop());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn feed<O: GenerationObserver>(mut observer: O) -> bool {
            observer.on_generation_report(&report(0));
            observer.should_stop()
        }

        let mut recorder = Recorder::stopping_after(1);
        assert!(feed(&mut recorder));
        assert_eq!(recorder.reports.len(), 1);
    }
}
