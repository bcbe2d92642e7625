//! rLogDash main entrypoint.

use rlogdash::run;
use rlogdash::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
