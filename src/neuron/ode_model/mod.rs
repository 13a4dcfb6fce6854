//! Traits describing how a model exposes its derivative function and default
//! configuration to an external integrator.

/// Default value of a single state variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// A single initial value
    Scalar(f64),
    /// A triple kept for provenance, only its first component is used
    /// as the initial value of the integrated state
    Triple(f64, f64, f64),
}

impl DefaultValue {
    /// Returns the scalar initial value that is actually integrated
    pub fn initial(&self) -> f64 {
        match self {
            DefaultValue::Scalar(value) => *value,
            DefaultValue::Triple(first, _, _) => *first,
        }
    }
}

/// Named default of a state variable, ordered the same way as the model's state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultState {
    pub name: &'static str,
    pub value: DefaultValue,
}

/// Parameters addressable by name, usually implemented with
/// `#[derive(NamedParameters)]` from [`crate::neuron::model_parameters_traits`]
pub trait NamedParameters {
    /// Names of every parameter in declaration order
    fn parameter_names() -> &'static [&'static str];
    /// Returns the value of the given parameter if it exists
    fn get_parameter(&self, name: &str) -> Option<f64>;
    /// Sets the value of the given parameter, returns `false` if it does not exist
    fn set_parameter(&mut self, name: &str, value: f64) -> bool;
}

/// A model whose dynamics are given by an ordinary differential equation
/// `dx/dt = f(t, x, i_ext)` along with the defaults needed to run it
pub trait ODEModel {
    /// Parameters read by the derivative function
    type Parameters: NamedParameters + Clone + Default;
    /// State the derivative is taken with respect to
    type State;

    /// Multiplier converting the framework's clock (s) to the model's native time unit
    const TIME_SCALE: f64;

    /// Returns the default parameters of the model
    fn default_params() -> Self::Parameters {
        Self::Parameters::default()
    }

    /// Returns the default value of each state variable in state order
    fn default_states() -> Vec<DefaultState>;

    /// Returns the default initial state
    fn initial_state() -> Self::State;

    /// Returns the parameters of the model
    fn get_params(&self) -> &Self::Parameters;

    /// Calculates the derivative of the state at time `t` given an external current
    fn ode(&self, t: f64, states: &Self::State, i_ext: f64) -> Self::State;

    /// Calculates the derivative of the state without external input
    fn gradient(&self, t: f64, states: &Self::State) -> Self::State {
        self.ode(t, states, 0.)
    }
}

/// Converts a time on the framework's clock (s) into the model's time unit
pub fn to_model_time<M: ODEModel>(global_time: f64) -> f64 {
    global_time * M::TIME_SCALE
}

/// Converts a time in the model's time unit back to the framework's clock (s)
pub fn to_global_time<M: ODEModel>(model_time: f64) -> f64 {
    model_time / M::TIME_SCALE
}
