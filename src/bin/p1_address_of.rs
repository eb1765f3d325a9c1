// Pattern 1: Address-of and Dereference
use pointer_basics::address;
use std::process::ExitCode;

fn main() -> ExitCode {
    pointer_basics::run_to_stdout(|console, _| address::run(console).map(drop))
}
