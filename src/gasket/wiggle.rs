use std::f64::consts::TAU;

/// Amplitude of the placement perturbation, as a fraction of the local
/// tangent-circle spacing.
pub const WIGGLE_MAGNITUDE: f64 = 0.03;
/// Period of the vertical (bottom-child) channel, in time units.
pub const WIGGLE_PERIOD_Y: f64 = 2.0;
/// Period of the upper-right channel.
pub const WIGGLE_PERIOD_X1: f64 = 3.0;
/// Period of the upper-left channel.
pub const WIGGLE_PERIOD_X2: f64 = 5.0;

/// Per-frame placement offsets, one per child-placement channel.
///
/// Computed once per frame and held fixed for that frame's entire recursion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WiggleCoefficients {
    pub dy: f64,
    pub dx1: f64,
    pub dx2: f64,
}

/// Three independent sinusoidal perturbation channels over a shared time
/// parameter.
///
/// The default periods (2, 3, 5) are pairwise coprime, so the channels drift
/// out of phase instead of pulsing in sync; the pattern repeats exactly every
/// [`full_period`](Self::full_period) time units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WiggleModel {
    pub magnitude: f64,
    pub period_y: f64,
    pub period_x1: f64,
    pub period_x2: f64,
}

impl Default for WiggleModel {
    fn default() -> Self {
        Self {
            magnitude: WIGGLE_MAGNITUDE,
            period_y: WIGGLE_PERIOD_Y,
            period_x1: WIGGLE_PERIOD_X1,
            period_x2: WIGGLE_PERIOD_X2,
        }
    }
}

impl WiggleModel {
    /// Sample all three channels at `time`.
    ///
    /// Pure; each coefficient lies in `[-magnitude, +magnitude]` for any
    /// finite input.
    pub fn compute(&self, time: f64) -> WiggleCoefficients {
        WiggleCoefficients {
            dy: self.magnitude * (TAU * time / self.period_y).sin(),
            dx1: self.magnitude * (TAU * time / self.period_x1).sin(),
            dx2: self.magnitude * (TAU * time / self.period_x2).sin(),
        }
    }

    /// Time after which the sampled pattern repeats exactly (the product of
    /// the three periods; the least common multiple when they are pairwise
    /// coprime).
    pub fn full_period(&self) -> f64 {
        self.period_y * self.period_x1 * self.period_x2
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gasket/wiggle.rs"]
mod tests;
