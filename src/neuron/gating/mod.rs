//! Voltage dependent rate functions for the classical Hodgkin Huxley gates
//! along with the steady state fractions derived from them.
//!
//! All rates take the membrane potential in mV and shift it so that the
//! resting potential (-65 mV) sits at zero, matching the original
//! Hodgkin Huxley formulation.

/// Resting potential offset used to shift voltages into the classical convention (mV)
pub const V_REST_OFFSET: f64 = 65.;

/// Below this magnitude of `x`, [`exp_ratio`] returns the Taylor expansion
/// around the removable singularity instead of evaluating the quotient
pub const SINGULARITY_EPSILON: f64 = 1e-6;

/// Calculates `x / (exp(x / k) - 1)`, which is `0 / 0` at `x = 0`,
/// returns the limit `k - x / 2` within [`SINGULARITY_EPSILON`] of the singular point
pub fn exp_ratio(x: f64, k: f64) -> f64 {
    if x.abs() < SINGULARITY_EPSILON {
        k - x / 2.
    } else {
        x / (x / k).exp_m1()
    }
}

/// Opening (`alpha`) and closing (`beta`) rates of a gate at a given voltage (ms^-1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateRates {
    pub alpha: f64,
    pub beta: f64,
}

impl GateRates {
    /// Fraction of gates open at equilibrium, `alpha / (alpha + beta)`
    pub fn steady_state(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }
}

/// Rates of potassium activation (`n`)
pub fn k_activation_rates(voltage: f64) -> GateRates {
    let u = voltage + V_REST_OFFSET;

    GateRates {
        alpha: 0.01 * exp_ratio(10. - u, 10.),
        beta: 0.125 * (-u / 80.).exp(),
    }
}

/// Rates of sodium activation (`m`)
pub fn na_activation_rates(voltage: f64) -> GateRates {
    let u = voltage + V_REST_OFFSET;

    GateRates {
        alpha: 0.1 * exp_ratio(25. - u, 10.),
        beta: 4. * (-u / 18.).exp(),
    }
}

/// Rates of sodium inactivation (`h`)
pub fn na_inactivation_rates(voltage: f64) -> GateRates {
    let u = voltage + V_REST_OFFSET;

    GateRates {
        alpha: 0.07 * (-u / 20.).exp(),
        beta: 1. / (((30. - u) / 10.).exp() + 1.),
    }
}

/// Steady state fractions of the three Hodgkin Huxley gates at a given voltage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStates {
    /// Potassium activation
    pub n_infinity: f64,
    /// Sodium activation
    pub m_infinity: f64,
    /// Sodium inactivation
    pub h_infinity: f64,
}

/// Calculates the steady state of each gate at the given voltage
pub fn steady_states(voltage: f64) -> SteadyStates {
    SteadyStates {
        n_infinity: k_activation_rates(voltage).steady_state(),
        m_infinity: na_activation_rates(voltage).steady_state(),
        h_infinity: na_inactivation_rates(voltage).steady_state(),
    }
}
