use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let parsed = Args::try_parse_from(location_hash.split(['#', '&']));
    let log_level = match &parsed {
        Ok(args) => args.verbose.log_level(),
        Err(_) => Some(log::Level::Warn),
    };
    if let Some(log_level) = log_level {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    let args = parsed.unwrap_or_else(|err| {
        log::error!("Could not parse settings: {}", err);
        Args {
            game: game::GameProps::from_settings_error(err),
            ..Args::default()
        }
    });
    log::debug!("settings: {:?}", args.game);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
