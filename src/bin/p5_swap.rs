// Pattern 5: Swapping Through References
use pointer_basics::swap;
use std::process::ExitCode;

fn main() -> ExitCode {
    pointer_basics::run_to_stdout(|console, _| swap::run(console).map(drop))
}
