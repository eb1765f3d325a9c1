//! Five small programs about pointers: taking an address, walking an array by
//! offset, following a pointer to a pointer, allocating and releasing heap
//! memory, and swapping through references.
//!
//! Each demo lives in its own module and has a matching binary under `src/bin`.
//! `observe` functions return plain reports; `run` functions print them.

pub mod address;
pub mod arithmetic;
pub mod config;
pub mod console;
pub mod double;
pub mod error;
pub mod heap;
pub mod swap;

pub use config::DemoConfig;
pub use console::{Console, Locale};
pub use error::{ConfigError, DemoError};
pub use heap::HeapBuffer;

use std::io::{self, StdoutLock, Write};
use std::process::ExitCode;

/// Runs all five demos in order, separated by blank lines.
pub fn run_all<W: Write>(console: &mut Console<W>, config: &DemoConfig) -> Result<(), DemoError> {
    address::run(console)?;
    console.blank()?;
    arithmetic::run(console)?;
    console.blank()?;
    double::run(console)?;
    console.blank()?;
    heap::run(console, config)?;
    console.blank()?;
    swap::run(console)?;
    Ok(())
}

/// Entry point shared by the binaries.
///
/// Loads the configuration, runs `demo` against stdout and maps any failure to
/// a diagnostic on stderr plus exit status 1.
pub fn run_to_stdout<F>(demo: F) -> ExitCode
where
    F: FnOnce(&mut Console<StdoutLock<'static>>, &DemoConfig) -> Result<(), DemoError>,
{
    let (config, outcome) = match DemoConfig::load() {
        Ok(config) => {
            let mut console = Console::new(io::stdout().lock(), &config);
            let mut outcome = demo(&mut console, &config);
            if outcome.is_ok() {
                outcome = console.flush().map_err(DemoError::from);
            }
            (config, outcome)
        }
        Err(error) => (DemoConfig::default(), Err(error.into())),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = console::report_failure(&mut io::stderr().lock(), &error, config.color);
            ExitCode::FAILURE
        }
    }
}
