//! Metrics for corruption-simulation campaigns.
//!
//! Tracks how a batch of randomized corruption trials behaved against the
//! parity code: how many trials actually flipped bits, how many of those the
//! validator caught, and how many slipped through.
//!
//! # Design
//!
//! A plain struct with explicit updates per trial; no atomics, no hidden
//! state. For multi-threaded campaigns, keep per-thread metrics and merge.

use std::time::{Duration, Instant};

/// Counters for one simulation campaign.
#[derive(Debug, Clone)]
pub struct SimulationMetrics {
    // === Timing ===
    /// When the campaign started
    pub start_time: Instant,

    /// When the campaign ended (set on completion)
    pub end_time: Option<Instant>,

    // === Stream sizes ===
    /// Bits in the source bitstream (before parity)
    pub source_bits: u64,

    /// Bits in the protected bitstream (after parity)
    pub protected_bits: u64,

    // === Trials ===
    /// Total trials run
    pub trials_run: u64,

    /// Trials in which at least one bit flipped
    pub trials_corrupted: u64,

    /// Trials the validator flagged as corrupt
    pub trials_detected: u64,

    /// Corrupted trials the validator passed (undetected corruption)
    pub trials_missed: u64,

    /// Total bits flipped across all trials
    pub bits_flipped: u64,
}

impl SimulationMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            source_bits: 0,
            protected_bits: 0,
            trials_run: 0,
            trials_corrupted: 0,
            trials_detected: 0,
            trials_missed: 0,
            bits_flipped: 0,
        }
    }

    /// Record one trial's outcome.
    ///
    /// `flips` is the number of bit positions that differ from the original;
    /// `detected` is the validator's verdict on the corrupted stream.
    pub fn record_trial(&mut self, flips: u64, detected: bool) {
        self.trials_run += 1;
        self.bits_flipped += flips;

        if flips > 0 {
            self.trials_corrupted += 1;
            if detected {
                self.trials_detected += 1;
            } else {
                self.trials_missed += 1;
            }
        }
    }

    /// Mark the campaign as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Fraction of corrupted trials that were detected.
    ///
    /// Returns 0.0 if no trial corrupted anything.
    pub fn detection_rate(&self) -> f64 {
        if self.trials_corrupted == 0 {
            0.0
        } else {
            self.trials_detected as f64 / self.trials_corrupted as f64
        }
    }

    /// Fraction of corrupted trials that slipped past validation.
    pub fn miss_rate(&self) -> f64 {
        if self.trials_corrupted == 0 {
            0.0
        } else {
            self.trials_missed as f64 / self.trials_corrupted as f64
        }
    }

    /// Mean bits flipped per trial.
    pub fn mean_flips(&self) -> f64 {
        if self.trials_run == 0 {
            0.0
        } else {
            self.bits_flipped as f64 / self.trials_run as f64
        }
    }

    /// Coding overhead (protected bits / source bits).
    ///
    /// Approaches 11/7 as the source grows; padding inflates short streams.
    pub fn expansion_ratio(&self) -> f64 {
        if self.source_bits == 0 {
            0.0
        } else {
            self.protected_bits as f64 / self.source_bits as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Simulation Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Stream ===");
        println!("Source bits:    {}", self.source_bits);
        println!("Protected bits: {}", self.protected_bits);
        println!("Expansion: {:.3}x", self.expansion_ratio());
        println!();

        println!("=== Corruption Trials ===");
        println!("Trials run: {}", self.trials_run);
        println!("Trials with flips: {}", self.trials_corrupted);
        println!("Bits flipped: {} ({:.2} per trial)", self.bits_flipped, self.mean_flips());
        println!();

        println!("=== Detection ===");
        println!("Detected: {} ({:.2}%)", self.trials_detected, self.detection_rate() * 100.0);
        println!("Missed:   {} ({:.2}%)", self.trials_missed, self.miss_rate() * 100.0);
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             source_bits={}\n\
             protected_bits={}\n\
             expansion_ratio={:.4}\n\
             trials_run={}\n\
             trials_corrupted={}\n\
             trials_detected={}\n\
             trials_missed={}\n\
             bits_flipped={}\n\
             detection_rate={:.4}\n\
             miss_rate={:.4}\n",
            self.duration().as_millis(),
            self.source_bits,
            self.protected_bits,
            self.expansion_ratio(),
            self.trials_run,
            self.trials_corrupted,
            self.trials_detected,
            self.trials_missed,
            self.bits_flipped,
            self.detection_rate(),
            self.miss_rate(),
        )
    }
}

impl Default for SimulationMetrics {
    fn default() -> Self {
        Self::new()
    }
}
