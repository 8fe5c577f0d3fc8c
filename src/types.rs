use serde::{Deserialize, Serialize};

/// Pulse timing of one SS-SI-VASO cycle. A full cycle lasts `2 * tr`
/// seconds: the inversion fires at the cycle start, the first excitation at
/// `ti1` and the second at `tr + ti2`.
///
/// This is an immutable snapshot: a parameter source (sliders, a config
/// file, ...) hands a whole consistent value to the simulator per
/// recomputation instead of mutating shared scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceTiming {
    /// Unit: `s`. Repetition half-period; the cycle repeats every `2 * tr`.
    pub tr: f64,
    /// Unit: `s`. Delay of the first 90° excitation after the inversion.
    pub ti1: f64,
    /// Unit: `s`. Delay of the second 90° excitation after `tr`.
    pub ti2: f64,
}

/// The pulse whose recovery curve governs a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// After the 180° inversion at the start of the cycle.
    PostInversion,
    /// After the first 90° excitation at `ti1`.
    PostFirstExcitation,
    /// After the second 90° excitation at `tr + ti2`.
    PostSecondExcitation,
}

/// Whether the simulated magnetization keeps its history across cycles.
/// Tissue stays in the slab, so each new cycle starts from the value reached
/// at the end of the previous one. Blood is replaced by inflow every cycle
/// and always starts fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compartment {
    Tissue,
    Blood,
}

/// Used to fetch the times of a particular pulse, e.g. for drawing event
/// markers along a plotted curve.
#[derive(Debug, Clone, Copy)]
pub enum PulseEvent {
    Inversion,
    FirstExcitation,
    SecondExcitation,
}

/// The tissue and blood Mz curves of one simulation, aligned 1:1 with the
/// time grid they were sampled on.
#[derive(Debug, Clone)]
pub struct VasoSignals {
    pub tissue: Vec<f64>,
    pub blood: Vec<f64>,
}

impl VasoSignals {
    pub fn len(&self) -> usize {
        let len1 = self.tissue.len();
        let len2 = self.blood.len();
        assert!(len1 == len2);
        len1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
