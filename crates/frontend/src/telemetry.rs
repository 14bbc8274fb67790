//! Console tracing setup

use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Install the panic hook and route `tracing` events to the browser console.
pub fn init() {
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(fmt_layer).init();
}
