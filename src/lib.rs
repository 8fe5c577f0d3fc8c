//! Simulates the longitudinal magnetization (Mz) produced by a SS-SI-VASO
//! (Slice-Selective Slab-Inversion Vascular Space Occupancy) sequence. The
//! API is designed to be as minimalistic as possible while providing all the
//! tools necessary to plot or analyze the signal: build a [`VasoSequence`]
//! from the pulse timing, then sample the tissue and blood Mz curves over an
//! arbitrary time grid. The phase bookkeeping is not exposed, which keeps
//! renderers and parameter sources independent of the model internals.
//!
//! The sequence repeats every `2 * Tr` seconds: a 180° inversion at the
//! start of the cycle, a first 90° excitation at `Ti1` and a second one at
//! `Tr + Ti2`. Tissue stays in the imaging slab and carries its
//! magnetization history across cycles; blood is replaced by fresh inflow
//! every cycle and is therefore modelled without memory.

mod relax;
mod sequence;
mod types;

pub use relax::longitudinal_recovery;
pub use sequence::{Error, VasoSequence};
pub use types::{Compartment, Phase, PulseEvent, SequenceTiming, VasoSignals};

/// Sample the tissue and blood Mz curves of a SS-SI-VASO sequence over
/// `time` in one call. Equivalent to [`VasoSequence::new`] followed by
/// [`VasoSequence::simulate`]; all parameters are validated before either
/// curve is computed.
pub fn simulate(
    time: &[f64],
    t1_tissue: f64,
    t1_blood: f64,
    timing: SequenceTiming,
) -> Result<VasoSignals, Error> {
    VasoSequence::new(timing)?.simulate(time, t1_tissue, t1_blood)
}
