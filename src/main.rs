use std::env;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use reduced_neuron_models::{
    config::{config_path_from_args, ModelConfig},
    error::ReducedNeuronError,
    neuron::{
        hodgkin_huxley_rinzel::{ionic_currents, HodgkinHuxleyRinzel},
        ode_model::{to_global_time, ODEModel},
    },
};


fn main() -> Result<(), ReducedNeuronError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let config = ModelConfig::from_file(config_path_from_args(&args)?)?;
    config.params.validate()?;

    if let Err(e) = config.state.check_bounds() {
        warn!("{}", e);
    }

    let model = config.model();
    let derivative = model.ode(config.t, &config.state, config.i_ext);
    let currents = ionic_currents(model.get_params(), &config.state);

    println!(
        "t: {} ms ({} s)",
        config.t,
        to_global_time::<HodgkinHuxleyRinzel>(config.t),
    );
    println!("V: {}, R: {}, I_ext: {}", config.state.v, config.state.r, config.i_ext);
    println!("I_K: {}, I_Na: {}, I_L: {}", currents.i_k, currents.i_na, currents.i_l);
    println!("dV/dt: {}", derivative.v);
    println!("dR/dt: {}", derivative.r);

    Ok(())
}
