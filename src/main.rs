use mazecast::prelude::*;
use mazecast::window::WINDOW_TITLE;
use tracing_subscriber::EnvFilter;

fn start() -> mazecast::Result<()> {
    let grid = Grid::default_map()?;
    tracing::info!(width = grid.width(), height = grid.height(), "map loaded");

    let config = EngineConfig::default();
    let (width, height) = (config.render.screen_width, config.render.screen_height);
    let mut engine = Engine::new(grid, config)?;

    let mut window = Window::new(WINDOW_TITLE, width, height)?;
    let mut limiter = FrameLimiter::new(&window);

    let frames = run(&mut engine, &mut window, &mut limiter)?;
    tracing::info!(frames, "shutting down");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = start() {
        tracing::error!(%err, "startup failed");
        eprintln!("mazecast: {err}");
        std::process::exit(1);
    }
}
