//! Restore transparency to a single logo.
//!
//! Usage:
//! ```sh
//! cargo run --example restore_logo -- input.png output.png
//! ```

use std::env;
use std::process;

use checkerboard_alpha::TransparencyRestorer;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <input> <output>", args[0]);
        process::exit(1);
    }

    let input = &args[1];
    let output = &args[2];

    let restorer = TransparencyRestorer::default();
    match restorer.process_file(input.as_ref(), output.as_ref()) {
        Ok(report) => {
            let (w, h) = report.final_size;
            println!("Done: {} ({w}x{h})", report.output.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
