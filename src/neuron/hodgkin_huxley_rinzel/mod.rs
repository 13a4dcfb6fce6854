//! An implementation of the Rinzel reduction of the Hodgkin Huxley neuron,
//! replacing the `n`, `m` and `h` gates with a single recovery variable `R`.
//!
//! ```text
//! C dV/dt = I_ext - I_K - I_Na - I_L
//! dR/dt = 3 (R_inf(V) - R) / tau_R(V)
//! I_K = g_K (R / S)^4 (V - E_K)
//! I_Na = g_Na m_inf(V)^3 (1 - R) (V - E_Na)
//! I_L = g_L (V - E_L)
//! R_inf = S / (1 + S^2) (n_inf + S (1 - h_inf))
//! tau_R = 1 + 5 exp(-(V + 65 - 10)^2 / 55^2)
//! ```
//!
//! Sodium activation is taken at its steady state, potassium activation and
//! sodium inactivation are lumped into `R` through the coupling scale `S`.

use ndarray::{Array1, ArrayView1, Zip};
use rayon::prelude::*;
use tracing::debug;
use crate::error::{ParameterError, StateError};
use super::gating::{steady_states, SteadyStates, V_REST_OFFSET};
use super::model_parameters_traits::NamedParameters;
use super::ode_model::{DefaultState, DefaultValue, NamedParameters, ODEModel};


/// Lower and upper bound of the recovery variable, independent of the
/// `(0, 0, 1)` triple in [`DEFAULT_STATES`] which is only kept as metadata
pub const RECOVERY_BOUNDS: (f64, f64) = (0., 1.);

/// Default value of each state variable, the recovery variable keeps its
/// original triple for provenance but only the first value is integrated
pub const DEFAULT_STATES: [DefaultState; 2] = [
    DefaultState { name: "V", value: DefaultValue::Scalar(-65.) },
    DefaultState { name: "R", value: DefaultValue::Triple(0., 0., 1.) },
];

/// Parameters of the Rinzel model, accessible by name through [`NamedParameters`]
/// using the labels `C`, `g_Na`, `g_K`, `g_L`, `E_Na`, `E_K`, `E_L` and `S`
#[derive(Debug, Clone, Copy, PartialEq, NamedParameters)]
pub struct RinzelParameters {
    /// Membrane capacitance (uF/cm^2)
    #[parameter(name = "C")]
    pub c_m: f64,
    /// Maximal sodium conductance (mS/cm^2)
    #[parameter(name = "g_Na")]
    pub g_na: f64,
    /// Maximal potassium conductance (mS/cm^2)
    #[parameter(name = "g_K")]
    pub g_k: f64,
    /// Leak conductance (mS/cm^2)
    #[parameter(name = "g_L")]
    pub g_l: f64,
    /// Sodium reversal potential (mV)
    #[parameter(name = "E_Na")]
    pub e_na: f64,
    /// Potassium reversal potential (mV)
    #[parameter(name = "E_K")]
    pub e_k: f64,
    /// Leak reversal potential (mV)
    #[parameter(name = "E_L")]
    pub e_l: f64,
    /// Scale coupling potassium activation to sodium inactivation
    #[parameter(name = "S")]
    pub s: f64,
}

impl Default for RinzelParameters {
    fn default() -> Self {
        RinzelParameters {
            c_m: 1.,
            g_na: 120.,
            g_k: 36.,
            g_l: 0.3,
            e_na: 50.,
            e_k: -77.,
            e_l: -54.387,
            s: 1.27135220916422,
        }
    }
}

impl RinzelParameters {
    /// Checks that the parameters describe a physical membrane, capacitance and
    /// conductances must be positive, `S` must be non-zero and every value finite
    pub fn validate(&self) -> Result<(), ParameterError> {
        for name in Self::parameter_names() {
            if let Some(value) = self.get_parameter(name) {
                if !value.is_finite() {
                    return Err(ParameterError::NonFiniteParameter(name.to_string()));
                }
            }
        }

        if self.c_m <= 0. {
            return Err(ParameterError::NonPositiveCapacitance);
        }

        for (name, conductance) in [("g_Na", self.g_na), ("g_K", self.g_k), ("g_L", self.g_l)] {
            if conductance <= 0. {
                return Err(ParameterError::NonPositiveConductance(name.to_string()));
            }
        }

        if self.s == 0. {
            return Err(ParameterError::ZeroCouplingScale);
        }

        Ok(())
    }

    /// Returns a copy of the parameters with the given named values replaced
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (name, value) in overrides {
            if !self.set_parameter(name, value) {
                return Err(ParameterError::UnknownParameter(name.to_string()));
            }

            debug!(parameter = name, value, "applied parameter override");
        }

        Ok(self)
    }
}

/// State of the Rinzel model, also used for its derivative
/// (`v` holds dV/dt and `r` holds dR/dt)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RinzelState {
    /// Membrane potential (mV)
    pub v: f64,
    /// Recovery variable
    pub r: f64,
}

impl RinzelState {
    pub fn new(v: f64, r: f64) -> Self {
        RinzelState { v, r }
    }

    /// Checks that the state is finite and the recovery variable lies within
    /// [`RECOVERY_BOUNDS`], the model itself never clamps `r`
    pub fn check_bounds(&self) -> Result<(), StateError> {
        if !self.v.is_finite() || !self.r.is_finite() {
            return Err(StateError::NonFiniteState);
        }

        let (lower, upper) = RECOVERY_BOUNDS;
        if self.r < lower || self.r > upper {
            return Err(StateError::RecoveryOutOfBounds(self.r));
        }

        Ok(())
    }
}

impl From<[f64; 2]> for RinzelState {
    fn from(state: [f64; 2]) -> Self {
        RinzelState { v: state[0], r: state[1] }
    }
}

impl From<RinzelState> for [f64; 2] {
    fn from(state: RinzelState) -> Self {
        [state.v, state.r]
    }
}

/// Relaxation time constant of the recovery variable (ms), lies within `[1, 6]`
/// and peaks at -55 mV
pub fn tau_r(voltage: f64) -> f64 {
    let u = voltage + V_REST_OFFSET;

    1. + 5. * (-(u - 10.).powi(2) / 55_f64.powi(2)).exp()
}

fn r_infinity_from_steady_states(states: &SteadyStates, s: f64) -> f64 {
    s / (1. + s.powi(2)) * (states.n_infinity + s * (1. - states.h_infinity))
}

/// Steady state of the recovery variable at the given voltage
pub fn r_infinity(voltage: f64, s: f64) -> f64 {
    r_infinity_from_steady_states(&steady_states(voltage), s)
}

/// Ionic currents through each channel (uA/cm^2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonicCurrents {
    pub i_k: f64,
    pub i_na: f64,
    pub i_l: f64,
}

fn ionic_currents_from_steady_states(
    params: &RinzelParameters,
    states: &SteadyStates,
    v: f64,
    r: f64,
) -> IonicCurrents {
    IonicCurrents {
        i_k: params.g_k * (r / params.s).powi(4) * (v - params.e_k),
        i_na: params.g_na * states.m_infinity.powi(3) * (1. - r) * (v - params.e_na),
        i_l: params.g_l * (v - params.e_l),
    }
}

/// Calculates the potassium, sodium and leak currents at the given state
pub fn ionic_currents(params: &RinzelParameters, state: &RinzelState) -> IonicCurrents {
    ionic_currents_from_steady_states(params, &steady_states(state.v), state.v, state.r)
}

/// Calculates `(dV/dt, dR/dt)` given a voltage `v`, recovery variable `r`
/// and external current `i_ext`, every other entry point evaluates through this
pub fn rinzel_derivative(params: &RinzelParameters, v: f64, r: f64, i_ext: f64) -> (f64, f64) {
    let states = steady_states(v);

    let r_inf = r_infinity_from_steady_states(&states, params.s);
    let dr = 3. * (r_inf - r) / tau_r(v);

    let currents = ionic_currents_from_steady_states(params, &states, v, r);
    let dv = (i_ext - currents.i_k - currents.i_na - currents.i_l) / params.c_m;

    (dv, dr)
}

/// Returns the common length inputs broadcast to, inputs of length one are
/// repeated while any other length must match
fn broadcast_length(lengths: &[usize]) -> Result<usize, StateError> {
    let mut n = 1;

    for &len in lengths {
        if len != 1 {
            if n != 1 && n != len {
                return Err(StateError::ShapeMismatch(n, len));
            }

            n = len;
        }
    }

    Ok(n)
}

type BroadcastInputs<'a> = (ArrayView1<'a, f64>, ArrayView1<'a, f64>, ArrayView1<'a, f64>);

/// Broadcasts voltages, recovery values and external currents to their common length
fn broadcast_inputs<'a>(
    v: &'a ArrayView1<'_, f64>,
    r: &'a ArrayView1<'_, f64>,
    i_ext: &'a ArrayView1<'_, f64>,
) -> Result<BroadcastInputs<'a>, StateError> {
    let n = broadcast_length(&[v.len(), r.len(), i_ext.len()])?;

    Ok((
        v.broadcast(n).ok_or(StateError::ShapeMismatch(n, v.len()))?,
        r.broadcast(n).ok_or(StateError::ShapeMismatch(n, r.len()))?,
        i_ext.broadcast(n).ok_or(StateError::ShapeMismatch(n, i_ext.len()))?,
    ))
}

/// The Rinzel reduced Hodgkin Huxley model
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HodgkinHuxleyRinzel {
    pub params: RinzelParameters,
}

impl HodgkinHuxleyRinzel {
    pub fn new(params: RinzelParameters) -> Self {
        HodgkinHuxleyRinzel { params }
    }

    /// Returns the model with its default parameters
    pub fn default_impl() -> Self {
        HodgkinHuxleyRinzel::default()
    }

    /// Calculates the derivative elementwise over arrays of voltages, recovery
    /// values and external currents, each input must either have the common
    /// length or a length of one, returns `(dV/dt, dR/dt)` arrays
    pub fn ode_array(
        &self,
        _t: f64,
        v: ArrayView1<f64>,
        r: ArrayView1<f64>,
        i_ext: ArrayView1<f64>,
    ) -> Result<(Array1<f64>, Array1<f64>), StateError> {
        let (v, r, i_ext) = broadcast_inputs(&v, &r, &i_ext)?;
        let n = v.len();

        let mut dv = Array1::<f64>::zeros(n);
        let mut dr = Array1::<f64>::zeros(n);

        Zip::from(&mut dv)
            .and(&mut dr)
            .and(v)
            .and(r)
            .and(i_ext)
            .for_each(|dv, dr, &v, &r, &i_ext| {
                (*dv, *dr) = rinzel_derivative(&self.params, v, r, i_ext);
            });

        Ok((dv, dr))
    }

    /// Same as [`HodgkinHuxleyRinzel::ode_array`] but evaluates elements in parallel
    pub fn par_ode_array(
        &self,
        _t: f64,
        v: ArrayView1<f64>,
        r: ArrayView1<f64>,
        i_ext: ArrayView1<f64>,
    ) -> Result<(Array1<f64>, Array1<f64>), StateError> {
        let (v, r, i_ext) = broadcast_inputs(&v, &r, &i_ext)?;
        let n = v.len();

        let mut dv = Array1::<f64>::zeros(n);
        let mut dr = Array1::<f64>::zeros(n);
        let params = self.params;

        Zip::from(&mut dv)
            .and(&mut dr)
            .and(v)
            .and(r)
            .and(i_ext)
            .par_for_each(|dv, dr, &v, &r, &i_ext| {
                (*dv, *dr) = rinzel_derivative(&params, v, r, i_ext);
            });

        Ok((dv, dr))
    }

    /// Calculates the derivative of each state in parallel under the same external current
    pub fn par_ode_states(&self, t: f64, states: &[RinzelState], i_ext: f64) -> Vec<RinzelState> {
        states.par_iter()
            .map(|state| self.ode(t, state, i_ext))
            .collect()
    }
}

impl ODEModel for HodgkinHuxleyRinzel {
    type Parameters = RinzelParameters;
    type State = RinzelState;

    /// Rinzel operates on a millisecond scale
    const TIME_SCALE: f64 = 1e3;

    fn default_states() -> Vec<DefaultState> {
        DEFAULT_STATES.to_vec()
    }

    fn initial_state() -> RinzelState {
        RinzelState {
            v: DEFAULT_STATES[0].value.initial(),
            r: DEFAULT_STATES[1].value.initial(),
        }
    }

    fn get_params(&self) -> &RinzelParameters {
        &self.params
    }

    fn ode(&self, _t: f64, states: &RinzelState, i_ext: f64) -> RinzelState {
        let (dv, dr) = rinzel_derivative(&self.params, states.v, states.r, i_ext);

        RinzelState { v: dv, r: dr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_length() {
        assert_eq!(broadcast_length(&[3, 1, 1]).ok(), Some(3));
        assert_eq!(broadcast_length(&[1, 1, 1]).ok(), Some(1));
        assert_eq!(broadcast_length(&[0, 1, 1]).ok(), Some(0));
        assert_eq!(broadcast_length(&[4, 4, 1]).ok(), Some(4));
        assert!(matches!(
            broadcast_length(&[3, 2, 1]),
            Err(StateError::ShapeMismatch(3, 2))
        ));
    }

    #[test]
    fn test_broadcast_inputs() -> Result<(), StateError> {
        let v = ndarray::aview1(&[-70., -60., -50.]);
        let r = ndarray::aview1(&[0.2]);
        let i_ext = ndarray::aview1(&[1., 2., 3.]);

        let (v_b, r_b, i_ext_b) = broadcast_inputs(&v, &r, &i_ext)?;

        assert_eq!(v_b, v);
        assert_eq!(r_b.to_vec(), vec![0.2; 3]);
        assert_eq!(i_ext_b, i_ext);

        let short = ndarray::aview1(&[0.1, 0.2]);
        assert!(matches!(
            broadcast_inputs(&v, &short, &i_ext),
            Err(StateError::ShapeMismatch(3, 2))
        ));

        Ok(())
    }

    #[test]
    fn test_recovery_bounds_ignore_default_triple() {
        assert_eq!(RECOVERY_BOUNDS, (0., 1.));
        assert_eq!(DEFAULT_STATES[1].value, DefaultValue::Triple(0., 0., 1.));

        // middle component of the triple is not used as the upper bound
        assert!(RinzelState::new(-65., 0.5).check_bounds().is_ok());
    }

    #[test]
    fn test_initial_state_uses_first_component() {
        let state = HodgkinHuxleyRinzel::initial_state();

        assert_eq!(state, RinzelState::new(-65., 0.));
    }
}
