//! # Reduced Neuron Models
//!
//! `reduced_neuron_models` provides the right hand side of reduced conductance
//! based neuron models so they can be handed to an external ODE integrator.
//! Currently implements the Rinzel reduction of the Hodgkin Huxley neuron,
//! which lumps the `n`, `m` and `h` gates into a single recovery variable `R`
//! and evolves the state `(V, R)`.
//!
//! Models expose their derivative along with their default parameters, default
//! states and time scale through the [`neuron::ode_model::ODEModel`] trait.
//! Stepping, solver selection and plotting are left to the caller.
//!
//! ## Example Code
//!
//! ### Evaluating the derivative at rest
//!
//! ```rust
//! use reduced_neuron_models::neuron::{
//!     hodgkin_huxley_rinzel::HodgkinHuxleyRinzel,
//!     ode_model::{ODEModel, to_model_time},
//! };
//!
//! let model = HodgkinHuxleyRinzel::default_impl();
//! let state = HodgkinHuxleyRinzel::initial_state();
//!
//! // the model runs in ms while the framework clock is in s
//! let t = to_model_time::<HodgkinHuxleyRinzel>(0.5);
//! assert_eq!(t, 500.);
//!
//! let derivative = model.ode(t, &state, 10.);
//! assert!(derivative.v.is_finite() && derivative.r.is_finite());
//!
//! // without external input
//! let derivative = model.gradient(t, &state);
//! assert!(derivative.r > 0.);
//! ```
//!
//! ### Evaluating many voltages at once
//!
//! ```rust
//! use ndarray::{Array1, aview1};
//! use reduced_neuron_models::neuron::hodgkin_huxley_rinzel::HodgkinHuxleyRinzel;
//!
//! let model = HodgkinHuxleyRinzel::default_impl();
//! let voltages = Array1::linspace(-90., 30., 121);
//!
//! // a single recovery value and input current are broadcast across voltages
//! let (dv, dr) = model.ode_array(0., voltages.view(), aview1(&[0.]), aview1(&[0.]))
//!     .unwrap();
//!
//! assert_eq!(dv.len(), 121);
//! assert_eq!(dr.len(), 121);
//! ```
//!
//! ### Overriding parameters by name
//!
//! ```rust
//! use reduced_neuron_models::neuron::{
//!     hodgkin_huxley_rinzel::HodgkinHuxleyRinzel,
//!     ode_model::{NamedParameters, ODEModel},
//! };
//!
//! let params = HodgkinHuxleyRinzel::default_params()
//!     .with_overrides([("g_Na", 100.), ("E_L", -60.)])
//!     .unwrap();
//!
//! assert_eq!(params.get_parameter("g_Na"), Some(100.));
//! assert!(params.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod neuron;
