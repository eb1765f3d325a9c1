// Runs every pointer demo in sequence.
use std::process::ExitCode;

fn main() -> ExitCode {
    pointer_basics::run_to_stdout(pointer_basics::run_all)
}
