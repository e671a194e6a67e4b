use folio_dashboard_leptos::App;

fn main() {
    console_error_panic_hook::set_once();
    // `tracing` events from the page logic arrive here through its `log` feature.
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(App);
}
