use std::f64::consts::{FRAC_PI_2, PI};

use thiserror::Error;

use crate::relax::longitudinal_recovery;
use crate::types::{Compartment, Phase, PulseEvent, SequenceTiming, VasoSignals};

#[derive(Error, Debug)]
pub enum Error {
    #[error("T1 must be positive, got {0} s")]
    NonPositiveT1(f64),
    #[error("Tr must be positive, got {0} s")]
    NonPositiveTr(f64),
    #[error("Ti1 must be non-negative, got {0} s")]
    NegativeTi1(f64),
    #[error("Ti2 must be non-negative, got {0} s")]
    NegativeTi2(f64),
    #[error("first excitation at Ti1 = {ti1} s lies after the second at Ti2 + Tr = {limit} s")]
    ExcitationsOutOfOrder { ti1: f64, limit: f64 },
}

/// A SS-SI-VASO sequence with validated pulse timing. The type only provides
/// methods to query pulse events and to sample the Mz curves, so users stay
/// independent of how the phases are tracked internally.
pub struct VasoSequence {
    timing: SequenceTiming,
}

impl VasoSequence {
    /// Create a sequence from a timing snapshot. Fails fast on timings that
    /// would produce nonsensical phase windows, so a bad parameter can never
    /// silently propagate NaN or garbage into a sampled curve.
    pub fn new(timing: SequenceTiming) -> Result<Self, Error> {
        if timing.tr <= 0.0 {
            return Err(Error::NonPositiveTr(timing.tr));
        }
        if timing.ti1 < 0.0 {
            return Err(Error::NegativeTi1(timing.ti1));
        }
        if timing.ti2 < 0.0 {
            return Err(Error::NegativeTi2(timing.ti2));
        }
        // Ti1 past Ti2 + Tr would turn the nested phase windows inside out.
        if timing.ti1 > timing.ti2 + timing.tr {
            return Err(Error::ExcitationsOutOfOrder {
                ti1: timing.ti1,
                limit: timing.ti2 + timing.tr,
            });
        }

        Ok(Self { timing })
    }

    pub fn timing(&self) -> SequenceTiming {
        self.timing
    }

    /// Duration of one full cycle (`2 * Tr`). The pulse pattern repeats with
    /// this period.
    pub fn cycle(&self) -> f64 {
        2.0 * self.timing.tr
    }

    /// Which pulse governs the sample at absolute time `t`.
    ///
    /// All windows are right-open: a sample landing exactly on a pulse time
    /// belongs to the phase that pulse starts.
    pub fn phase_at(&self, t: f64) -> Phase {
        let u = t % self.cycle();

        // Widest window first, the narrower match overrides it.
        let mut phase = Phase::PostSecondExcitation;
        if u < self.timing.ti2 + self.timing.tr {
            phase = Phase::PostFirstExcitation;
        }
        if u < self.timing.ti1 {
            phase = Phase::PostInversion;
        }
        phase
    }

    /// Times at which the given pulse fires, within `[t_start, t_end)`,
    /// capped at `max_count` events. The sequence starts at `t = 0`; there
    /// are no events before that.
    pub fn events(&self, ev: PulseEvent, t_start: f64, t_end: f64, max_count: usize) -> Vec<f64> {
        let offset = match ev {
            PulseEvent::Inversion => 0.0,
            PulseEvent::FirstExcitation => self.timing.ti1,
            PulseEvent::SecondExcitation => self.timing.tr + self.timing.ti2,
        };

        let cycle = self.cycle();
        let mut k = ((t_start - offset) / cycle).ceil().max(0.0);
        let mut events = Vec::new();
        loop {
            let t = offset + k * cycle;
            if t >= t_end || events.len() >= max_count {
                break;
            }
            if t >= t_start {
                events.push(t);
            }
            k += 1.0;
        }
        events
    }

    /// Sample the Mz curve of one compartment over `time`, one output value
    /// per input sample. `time` must be non-negative and strictly
    /// increasing; an empty grid yields an empty signal. The run starts
    /// right after the inversion at `t = 0`, so the first sample always lies
    /// on the post-inversion recovery.
    pub fn signal(
        &self,
        time: &[f64],
        t1: f64,
        compartment: Compartment,
    ) -> Result<Vec<f64>, Error> {
        if t1 <= 0.0 {
            return Err(Error::NonPositiveT1(t1));
        }
        Ok(self.run(time, t1, compartment))
    }

    /// Sample both curves over the same grid: tissue with its own T1 and
    /// cross-cycle memory, blood with the reference T1 and none. Both T1
    /// values are checked before either run starts, so a bad parameter never
    /// produces one valid and one garbage curve.
    pub fn simulate(
        &self,
        time: &[f64],
        t1_tissue: f64,
        t1_blood: f64,
    ) -> Result<VasoSignals, Error> {
        if t1_tissue <= 0.0 {
            return Err(Error::NonPositiveT1(t1_tissue));
        }
        if t1_blood <= 0.0 {
            return Err(Error::NonPositiveT1(t1_blood));
        }

        Ok(VasoSignals {
            tissue: self.run(time, t1_tissue, Compartment::Tissue),
            blood: self.run(time, t1_blood, Compartment::Blood),
        })
    }

    // Sequential fold over the grid, carrying (previous phase, m0_init).
    fn run(&self, time: &[f64], t1: f64, compartment: Compartment) -> Vec<f64> {
        let SequenceTiming { tr, ti1, ti2 } = self.timing;
        let m0_equi = 1.0;
        // Magnetization entering the current post-inversion segment. Tissue
        // re-anchors it at every crossing into a new segment; for blood,
        // inflow refills the slab each cycle, so it never changes.
        let mut m0_init = 1.0;
        let mut prev_phase = None;

        let mut signal = Vec::with_capacity(time.len());
        for (i, &t) in time.iter().enumerate() {
            let u = t % self.cycle();
            let phase = self.phase_at(t);

            let mz = if i == 0 {
                // An inversion is assumed to have just fired at t = 0,
                // whatever the classifier says about the first sample.
                longitudinal_recovery(u, m0_equi, m0_init, PI, t1)
            } else {
                match phase {
                    Phase::PostInversion => {
                        if compartment == Compartment::Tissue && prev_phase != Some(phase) {
                            // Entering a new cycle: tissue restarts from the
                            // value it reached between the second excitation
                            // and this inversion.
                            m0_init =
                                longitudinal_recovery(tr - ti2, m0_equi, m0_init, FRAC_PI_2, t1);
                        }
                        longitudinal_recovery(u, m0_equi, m0_init, PI, t1)
                    }
                    Phase::PostFirstExcitation => {
                        longitudinal_recovery(u - ti1, m0_equi, m0_init, FRAC_PI_2, t1)
                    }
                    Phase::PostSecondExcitation => {
                        longitudinal_recovery(u - tr - ti2, m0_equi, m0_init, FRAC_PI_2, t1)
                    }
                }
            };

            signal.push(mz);
            // The carried state always uses the classified phase, even for
            // the forced first sample.
            prev_phase = Some(phase);
        }
        signal
    }
}
