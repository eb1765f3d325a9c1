// Pattern 2: Pointer Arithmetic over an Array
use pointer_basics::arithmetic;
use std::process::ExitCode;

fn main() -> ExitCode {
    pointer_basics::run_to_stdout(|console, _| arithmetic::run(console).map(drop))
}
