use crate::config::{self, RuntimeConfig};
use leptos::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigState {
    pub runtime: RuntimeConfig,
    pub loading: bool,
}

/// Shared config state, seeded from whatever `config::init` has resolved so
/// far. Views read it reactively so they can render before loading finishes.
pub fn use_config() -> (ReadSignal<ConfigState>, WriteSignal<ConfigState>) {
    match use_context::<(ReadSignal<ConfigState>, WriteSignal<ConfigState>)>() {
        Some(ctx) => ctx,
        None => {
            let (read, write) = create_signal(ConfigState {
                runtime: config::runtime_config(),
                loading: false,
            });
            provide_context((read, write));
            (read, write)
        }
    }
}

pub async fn refresh_runtime_config(set_state: WriteSignal<ConfigState>) {
    set_state.update(|s| s.loading = true);
    let runtime = config::init().await;
    log::info!("Runtime config initialized: {runtime:?}");
    set_state.set(ConfigState {
        runtime,
        loading: false,
    });
}
