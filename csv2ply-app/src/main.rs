//! CSV2PLY
//!
//! Converts a per-vertex CSV mesh export from a graphics debugger into an
//! ASCII PLY file.

mod app;

use app::Args;
use clap::Parser;

fn main() {
    let args = Args::parse();

    if let Err(e) = app::run(&args) {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    }
}
