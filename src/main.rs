mod app;
mod errors;
mod hooks;
mod pages;
mod services;
mod shared;
mod types;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(e) = app::mount_all() {
        log::error!("mount: {:?}", e);
    }
}
