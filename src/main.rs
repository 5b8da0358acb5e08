use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use collatz_life::{
    RenderLoop, SimulationConfig,
    config::{GRID_SIZE, WINDOW_TITLE},
    rendering::{MacroquadDisplay, MacroquadScheduler},
};

fn window_conf() -> Conf {
    // One window pixel per cell
    let side = GRID_SIZE as i32;
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: side,
        window_height: side,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = SimulationConfig::default();
    info!(size = config.size, seed_value = config.seed_value, "collatz_life starting");

    let mut render_loop = match RenderLoop::new(&config) {
        Ok(render_loop) => render_loop,
        Err(err) => {
            error!(%err, "failed to build simulator");
            return;
        }
    };
    let mut display = match MacroquadDisplay::new(config.size) {
        Ok(display) => display,
        Err(err) => {
            error!(%err, "failed to create display surface");
            return;
        }
    };

    render_loop.run(&mut display, &mut MacroquadScheduler).await;
}
