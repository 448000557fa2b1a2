//! Desktop build of the satellite map.

use demo::{Fix, SatMapApp};
use satmap::MapConfig;

fn config() -> MapConfig {
    let mut config = MapConfig::default();
    if let Ok(tiles) = std::env::var("SATMAP_TILES_URL") {
        log::info!("Using tiles from '{tiles}'.");
        config.tiles = tiles.as_str().into();
    }
    config
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let config = config();
    let fix = Fix::from_env();
    eframe::run_native(
        "satmap",
        Default::default(),
        Box::new(move |cc| Ok(Box::new(SatMapApp::new(cc, &config, fix)))),
    )
}
