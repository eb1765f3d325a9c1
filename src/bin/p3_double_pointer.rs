// Pattern 3: Double Indirection
use pointer_basics::double;
use std::process::ExitCode;

fn main() -> ExitCode {
    pointer_basics::run_to_stdout(|console, _| double::run(console).map(drop))
}
