pub mod api;
pub mod budget;
pub mod components;
pub mod config;
pub mod dom;
pub mod editor;
pub mod error;
pub mod records;
pub mod visualizer;

use config::TrackerConfig;

fn run(config: TrackerConfig) {
    let root = match dom::document().map(|doc| doc.document_element()) {
        Ok(Some(root)) => root,
        Ok(None) => {
            log::error!("document has no root element");
            return;
        }
        Err(err) => {
            log::error!("{}", err);
            return;
        }
    };
    visualizer::render(&root);
    editor::attach(&root, &config);
    log::info!("budget tracker ready");
}

/// Installs the panic hook and logger, then paints the budget bars and wires
/// the record buttons once the page is ready.
pub fn start() {
    console_error_panic_hook::set_once();
    let config = TrackerConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::debug!("config: {:?}", config);

    if let Err(err) = dom::on_ready(move || run(config)) {
        log::error!("could not wait for page-ready: {}", err);
    }
}
