//! Browser entry point: installs panic/console logging and mounts the app.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(teamblog::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("teamblog runs in the browser; build it with `trunk serve` (enables the `csr` feature)");
}
