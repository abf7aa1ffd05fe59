use grocery_list_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    grocery_list_ui::logging::init();
    leptos::mount::mount_to_body(App);
}
