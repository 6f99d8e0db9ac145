mod browser;
mod command_handler;
mod constants;
mod crawler;
mod errors;
mod handlers;
mod tracer;
mod utils;

use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(err) = command_handler::handle_args(env::args()).await {
        eprintln!("{err}");
        process::exit(1);
    }
}
