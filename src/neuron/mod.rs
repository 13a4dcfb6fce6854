//! Reduced conductance based neuron models expressed as ordinary differential
//! equations, along with the gating kinetics they are built from.
//!
//! Each model exposes its derivative function and its default parameters, states
//! and time scale through the [`ode_model::ODEModel`] trait so that an external
//! integrator can drive it without knowing the model's internals.

pub mod gating;
pub mod ode_model;
pub mod hodgkin_huxley_rinzel;
/// A macro to automatically derive [`ode_model::NamedParameters`] for parameter structs.
pub mod model_parameters_traits {
    pub use ::model_parameters_traits::*;
}
