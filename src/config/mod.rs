//! Reading model parameters, initial state and stimulus from TOML.
//!
//! ```toml
//! [hodgkin_huxley_rinzel]
//! t = 0.0
//! I_ext = 10.0
//!
//! [hodgkin_huxley_rinzel.parameters]
//! g_Na = 120.0
//! S = 1.27135220916422
//!
//! [hodgkin_huxley_rinzel.states]
//! V = -65.0
//! R = 0.0
//! ```
//!
//! Every key is optional, missing values fall back to the model defaults.

use std::{fs::read_to_string, path::Path};
use toml::{from_str, Value};
use tracing::debug;
use crate::error::{ConfigError, ReducedNeuronError};
use crate::neuron::{
    hodgkin_huxley_rinzel::{HodgkinHuxleyRinzel, RinzelParameters, RinzelState},
    ode_model::ODEModel,
};


/// Name of the table holding the model configuration
pub const MODEL_TABLE: &str = "hodgkin_huxley_rinzel";

/// Parses a float, integers are converted to floats
pub fn parse_f64(value: &Value, field_name: &str) -> Result<f64, ConfigError> {
    match value {
        Value::Float(x) => Ok(*x),
        Value::Integer(x) => Ok(*x as f64),
        _ => Err(ConfigError::InvalidValue(field_name.to_string())),
    }
}

/// Parses the value under `key` if present, otherwise returns `default`
pub fn parse_value_with_default<T>(
    table: &Value,
    key: &str,
    parser: impl Fn(&Value, &str) -> Result<T, ConfigError>,
    default: T,
) -> Result<T, ConfigError> {
    table
        .get(key)
        .map_or(Ok(default), |value| parser(value, key))
}

/// Returns the configuration file path from the command line arguments,
/// the first argument is the program name
pub fn config_path_from_args(args: &[String]) -> Result<&str, ConfigError> {
    args.get(1)
        .map(|path| path.as_str())
        .ok_or(ConfigError::MissingArgument(String::from("Requires .toml argument file")))
}

/// Parameters, initial state and input used to evaluate the model once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    pub params: RinzelParameters,
    pub state: RinzelState,
    /// External current (uA/cm^2)
    pub i_ext: f64,
    /// Evaluation time (ms)
    pub t: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            params: HodgkinHuxleyRinzel::default_params(),
            state: HodgkinHuxleyRinzel::initial_state(),
            i_ext: 0.,
            t: 0.,
        }
    }
}

fn parse_parameters(table: &Value) -> Result<RinzelParameters, ReducedNeuronError> {
    let defaults = HodgkinHuxleyRinzel::default_params();

    let parameter_table = match table.get("parameters") {
        Some(value) => value
            .as_table()
            .ok_or(ConfigError::InvalidValue(String::from("parameters")))?,
        None => return Ok(defaults),
    };

    let mut overrides: Vec<(&str, f64)> = Vec::new();
    for (key, value) in parameter_table.iter() {
        overrides.push((key.as_str(), parse_f64(value, key)?));
    }

    Ok(defaults.with_overrides(overrides)?)
}

fn parse_state(table: &Value) -> Result<RinzelState, ConfigError> {
    let initial = HodgkinHuxleyRinzel::initial_state();

    let state_table = match table.get("states") {
        Some(value) => value,
        None => return Ok(initial),
    };

    let keys = state_table
        .as_table()
        .ok_or(ConfigError::InvalidValue(String::from("states")))?
        .keys();

    for key in keys {
        if key != "V" && key != "R" {
            return Err(ConfigError::InvalidValue(key.clone()));
        }
    }

    Ok(RinzelState {
        v: parse_value_with_default(state_table, "V", parse_f64, initial.v)?,
        r: parse_value_with_default(state_table, "R", parse_f64, initial.r)?,
    })
}

impl ModelConfig {
    /// Reads the configuration from the contents of a TOML file
    pub fn from_toml_str(content: &str) -> Result<Self, ReducedNeuronError> {
        let config: Value = from_str(content)
            .map_err(|e| ConfigError::TomlParse(e.to_string()))?;

        let table = config
            .get(MODEL_TABLE)
            .ok_or(ConfigError::MissingTable(String::from(MODEL_TABLE)))?;

        let model_config = ModelConfig {
            params: parse_parameters(table)?,
            state: parse_state(table)?,
            i_ext: parse_value_with_default(table, "I_ext", parse_f64, 0.)?,
            t: parse_value_with_default(table, "t", parse_f64, 0.)?,
        };

        debug!(?model_config, "loaded model configuration");

        Ok(model_config)
    }

    /// Reads the configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReducedNeuronError> {
        let content = read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(format!("{}: {}", path.as_ref().display(), e)))?;

        ModelConfig::from_toml_str(&content)
    }

    /// Builds the model described by the configured parameters
    pub fn model(&self) -> HodgkinHuxleyRinzel {
        HodgkinHuxleyRinzel::new(self.params)
    }
}
