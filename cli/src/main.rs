mod logging;

use std::io::{self, Write};

use greetr_core::greeting;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    logging::init();

    let message = greeting::greeting();
    debug!(message, "resolved greeting");

    // Stdout carries exactly the greeting and its newline, nothing else.
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}")?;

    Ok(())
}
