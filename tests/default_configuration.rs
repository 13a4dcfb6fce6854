#[cfg(test)]
mod tests {
    use std::{env, fs};
    use reduced_neuron_models::{
        config::ModelConfig,
        error::{ParameterError, ReducedNeuronError, StateError},
        neuron::{
            hodgkin_huxley_rinzel::{HodgkinHuxleyRinzel, RinzelParameters, RinzelState},
            ode_model::{
                to_global_time, to_model_time, DefaultValue, NamedParameters, ODEModel,
            },
        },
    };

    #[test]
    pub fn test_default_parameters() {
        let params = HodgkinHuxleyRinzel::default_params();

        let expected = [
            ("C", 1.),
            ("g_Na", 120.),
            ("g_K", 36.),
            ("g_L", 0.3),
            ("E_Na", 50.),
            ("E_K", -77.),
            ("E_L", -54.387),
            ("S", 1.27135220916422),
        ];

        assert_eq!(RinzelParameters::parameter_names().len(), expected.len());
        for ((name, value), listed) in expected.iter().zip(RinzelParameters::parameter_names()) {
            assert_eq!(name, listed);
            assert_eq!(params.get_parameter(name), Some(*value));
        }

        assert_eq!(params.get_parameter("g_na"), None);
        assert!(params.validate().is_ok());
    }

    #[test]
    pub fn test_default_states() {
        let states = HodgkinHuxleyRinzel::default_states();

        assert_eq!(states.len(), 2);
        assert_eq!(states[0].name, "V");
        assert_eq!(states[0].value, DefaultValue::Scalar(-65.));
        assert_eq!(states[1].name, "R");
        assert_eq!(states[1].value, DefaultValue::Triple(0., 0., 1.));

        assert_eq!(HodgkinHuxleyRinzel::initial_state(), RinzelState::new(-65., 0.));
        assert_eq!(<[f64; 2]>::from(HodgkinHuxleyRinzel::initial_state()), [-65., 0.]);
    }

    #[test]
    pub fn test_state_array_conversion() {
        let state = RinzelState::from([-50., 0.3]);

        assert_eq!(state, RinzelState::new(-50., 0.3));
        assert_eq!(state.v, -50.);
        assert_eq!(state.r, 0.3);
        assert_eq!(<[f64; 2]>::from(state), [-50., 0.3]);
        assert_eq!(RinzelState::from(<[f64; 2]>::from(state)), state);
    }

    #[test]
    pub fn test_time_scale() {
        assert_eq!(HodgkinHuxleyRinzel::TIME_SCALE, 1000.);
        assert_eq!(to_model_time::<HodgkinHuxleyRinzel>(0.25), 250.);
        assert_eq!(to_global_time::<HodgkinHuxleyRinzel>(250.), 0.25);
    }

    #[test]
    pub fn test_overrides() -> Result<(), ReducedNeuronError> {
        let params = RinzelParameters::default()
            .with_overrides([("g_K", 20.), ("S", 1.)])?;

        assert_eq!(params.g_k, 20.);
        assert_eq!(params.s, 1.);
        assert_eq!(params.g_na, 120.);

        let result = RinzelParameters::default().with_overrides([("g_Ca", 1.)]);
        assert!(matches!(result, Err(ParameterError::UnknownParameter(name)) if name == "g_Ca"));

        let mut params = RinzelParameters::default();
        assert!(params.set_parameter("E_L", -60.));
        assert!(!params.set_parameter("E_Ca", 120.));
        assert_eq!(params.e_l, -60.);

        Ok(())
    }

    #[test]
    pub fn test_validation() {
        let defaults = RinzelParameters::default();

        assert!(matches!(
            RinzelParameters { c_m: 0., ..defaults }.validate(),
            Err(ParameterError::NonPositiveCapacitance)
        ));
        assert!(matches!(
            RinzelParameters { c_m: -1., ..defaults }.validate(),
            Err(ParameterError::NonPositiveCapacitance)
        ));
        assert!(matches!(
            RinzelParameters { g_k: -36., ..defaults }.validate(),
            Err(ParameterError::NonPositiveConductance(name)) if name == "g_K"
        ));
        assert!(matches!(
            RinzelParameters { s: 0., ..defaults }.validate(),
            Err(ParameterError::ZeroCouplingScale)
        ));
        assert!(matches!(
            RinzelParameters { e_na: f64::NAN, ..defaults }.validate(),
            Err(ParameterError::NonFiniteParameter(name)) if name == "E_Na"
        ));
    }

    #[test]
    pub fn test_state_bounds() {
        assert!(RinzelState::new(-65., 0.).check_bounds().is_ok());
        assert!(RinzelState::new(-65., 1.).check_bounds().is_ok());

        assert!(matches!(
            RinzelState::new(-65., 1.01).check_bounds(),
            Err(StateError::RecoveryOutOfBounds(r)) if r == 1.01
        ));
        assert!(matches!(
            RinzelState::new(-65., -0.01).check_bounds(),
            Err(StateError::RecoveryOutOfBounds(_))
        ));
        assert!(matches!(
            RinzelState::new(f64::NAN, 0.5).check_bounds(),
            Err(StateError::NonFiniteState)
        ));
    }

    #[test]
    pub fn test_config_file() -> Result<(), ReducedNeuronError> {
        let content = r#"
[hodgkin_huxley_rinzel]
t = 1.5
I_ext = 10

[hodgkin_huxley_rinzel.parameters]
g_Na = 100.0
E_L = -60

[hodgkin_huxley_rinzel.states]
R = 0.2
"#;

        let path = env::temp_dir().join(format!("reduced_neuron_models_{}.toml", std::process::id()));
        fs::write(&path, content).expect("Cannot write config");

        let config = ModelConfig::from_file(&path);
        fs::remove_file(&path).expect("Cannot remove config");
        let config = config?;

        assert_eq!(config.t, 1.5);
        assert_eq!(config.i_ext, 10.);
        assert_eq!(config.params.g_na, 100.);
        assert_eq!(config.params.e_l, -60.);
        assert_eq!(config.params.g_k, 36.);
        assert_eq!(config.state, RinzelState::new(-65., 0.2));

        let model = config.model();
        let derivative = model.ode(config.t, &config.state, config.i_ext);
        assert!(derivative.v.is_finite() && derivative.r.is_finite());

        Ok(())
    }

    #[test]
    pub fn test_missing_config_file() {
        let result = ModelConfig::from_file("/nonexistent/reduced_neuron_models.toml");

        assert!(matches!(result, Err(ReducedNeuronError::ConfigRelatedError(_))));
    }
}
