// Pattern 4: Heap Allocation and Release
//
// Exits with status 1 if the heap cannot hold the requested buffer.
use pointer_basics::heap;
use std::process::ExitCode;

fn main() -> ExitCode {
    pointer_basics::run_to_stdout(|console, config| heap::run(console, config).map(drop))
}
