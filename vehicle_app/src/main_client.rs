use leptos::*;
use vehicle_app::App;

fn main() {
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(|cx| {
        view! { cx, <App/> }
    });
}
