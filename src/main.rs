//! timesheets main entrypoint.

use timesheets::run;
use timesheets::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
