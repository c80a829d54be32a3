use projectile_sim::logging::init_tracing;

mod app;
mod constants;
mod hud;
mod launch;
mod model;
mod render;
mod state;

fn main() {
    init_tracing("warn");

    let launch = match launch::resolve_launch() {
        Ok(Some(launch)) => launch,
        Ok(None) => return,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let state = state::ViewerState::new(launch.planet, launch.config, launch.settings);
    macroquad::Window::from_config(app::window_conf(), app::run(state));
}
