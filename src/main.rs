#![allow(warnings)]
//! Sweet Shop Dashboard Entry Point

mod models;
mod error;
mod config;
mod cart;
mod notify;
mod api;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::{Level, LevelFilter};
use rolling_logger::{LogLine, RollingLogger};

/// Recent lines kept for the diagnostics panel
const LOG_CAPACITY: usize = 200;

fn console_sink(line: &LogLine) {
    let text: wasm_bindgen::JsValue = line.to_string().into();
    match line.level {
        Level::Error => web_sys::console::error_1(&text),
        Level::Warn => web_sys::console::warn_1(&text),
        _ => web_sys::console::log_1(&text),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let logger = RollingLogger::new(LOG_CAPACITY, LevelFilter::Debug).with_sink(console_sink);
    if let Err(err) = rolling_logger::init(logger) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    mount_to_body(App);
}
