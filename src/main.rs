//! `fixdesk` (fxd) - Session-scoped issue desk
//!
//! Issues, suggestions, and votes live in memory for exactly one run:
//! start a session, work the queue, and the state is discarded on exit.

use fixdesk::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
