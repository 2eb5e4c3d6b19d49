use log::Level;

fn main() {
    console_error_panic_hook::set_once();

    let config = match devicebox_dashboard::load_config() {
        Ok(config) => config,
        Err(err) => {
            _ = console_log::init_with_level(Level::Info);
            log::error!("device widget disabled: {err}");
            return;
        }
    };

    let level = config.logging.level.parse().unwrap_or(Level::Info);
    _ = console_log::init_with_level(level);

    match devicebox_dashboard::start(config) {
        Ok(widget) => widget.forget(),
        Err(err) => log::error!("device widget disabled: {err}"),
    }
}
