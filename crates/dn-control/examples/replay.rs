//! Replay a JSON event script through a headless control.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p dn-control --example replay -- script.json
//! ```

use std::process::ExitCode;

use dn_control::Script;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: replay <script.json>");
        return ExitCode::FAILURE;
    };

    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match Script::from_json(&json).and_then(|script| script.run()) {
        Ok(replay) => match serde_json::to_string_pretty(&replay) {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{path}: {e}");
            ExitCode::FAILURE
        }
    }
}
