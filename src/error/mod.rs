use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for invalid model parameters
pub enum ParameterError {
    /// Membrane capacitance must be strictly positive
    NonPositiveCapacitance,
    /// A maximal conductance must be strictly positive
    NonPositiveConductance(String),
    /// Coupling scale `S` cannot be zero since the potassium current divides by it
    ZeroCouplingScale,
    /// Parameter is NaN or infinite
    NonFiniteParameter(String),
    /// Parameter name is not recognized by the model
    UnknownParameter(String),
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ParameterError::NonPositiveCapacitance => write!(f, "Membrane capacitance must be positive"),
            ParameterError::NonPositiveConductance(name) => write!(f, "Conductance '{}' must be positive", name),
            ParameterError::ZeroCouplingScale => write!(f, "Coupling scale 'S' cannot be zero"),
            ParameterError::NonFiniteParameter(name) => write!(f, "Parameter '{}' must be finite", name),
            ParameterError::UnknownParameter(name) => write!(f, "Unknown parameter '{}'", name),
        }
    }
}

impl Debug for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for state values that cannot be evaluated or interpreted
pub enum StateError {
    /// Array inputs cannot be broadcast together (expected length, found length)
    ShapeMismatch(usize, usize),
    /// Recovery variable has left `[0, 1]`
    RecoveryOutOfBounds(f64),
    /// Voltage or recovery variable is NaN or infinite
    NonFiniteState,
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            StateError::ShapeMismatch(expected, found) => write!(
                f, "Cannot broadcast input of length {} to length {}", found, expected
            ),
            StateError::RecoveryOutOfBounds(r) => write!(
                f, "Recovery variable {} is outside of [0, 1]", r
            ),
            StateError::NonFiniteState => write!(f, "State must be finite"),
        }
    }
}

impl Debug for StateError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for reading model configurations
pub enum ConfigError {
    /// Configuration file cannot be read
    FileRead(String),
    /// Configuration is not valid TOML
    TomlParse(String),
    /// Value under the given key cannot be parsed
    InvalidValue(String),
    /// Expected table is missing
    MissingTable(String),
    /// Required command line argument was not given
    MissingArgument(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ConfigError::FileRead(msg) => write!(f, "Cannot read file: {}", msg),
            ConfigError::TomlParse(msg) => write!(f, "Cannot read config: {}", msg),
            ConfigError::InvalidValue(key) => write!(f, "Cannot parse '{}'", key),
            ConfigError::MissingTable(name) => write!(f, "Missing table '{}'", name),
            ConfigError::MissingArgument(msg) => write!(f, "Missing argument: {}", msg),
        }
    }
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum ReducedNeuronError {
    /// Errors related to model parameters
    ParameterRelatedError(ParameterError),
    /// Errors related to state values
    StateRelatedError(StateError),
    /// Errors related to configuration files
    ConfigRelatedError(ConfigError),
}

impl Display for ReducedNeuronError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ReducedNeuronError::ParameterRelatedError(err) => write!(f, "{}", err),
            ReducedNeuronError::StateRelatedError(err) => write!(f, "{}", err),
            ReducedNeuronError::ConfigRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for ReducedNeuronError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for ReducedNeuronError {}

impl From<ParameterError> for ReducedNeuronError {
    fn from(err: ParameterError) -> ReducedNeuronError {
        ReducedNeuronError::ParameterRelatedError(err)
    }
}

impl From<StateError> for ReducedNeuronError {
    fn from(err: StateError) -> ReducedNeuronError {
        ReducedNeuronError::StateRelatedError(err)
    }
}

impl From<ConfigError> for ReducedNeuronError {
    fn from(err: ConfigError) -> ReducedNeuronError {
        ReducedNeuronError::ConfigRelatedError(err)
    }
}
