use std::rc::Rc;

use chem_master::config::AppConfig;
use chem_master::logging;

mod ui;

// Trunk/Yew entrypoint
fn main() {
    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!(
        "starting, grading via {} ({})",
        config.grading.endpoint,
        config.grading.on_failure
    );
    yew::Renderer::<ui::App>::with_props(ui::AppProps {
        config: Rc::new(config),
    })
    .render();
}
