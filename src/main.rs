//! Name-binding extraction for Java method invocations.
//!
//! Binary crate entry point. All CLI logic is in the `cli` module.

// Use mimalloc as global allocator: many small short-lived allocations per
// parsed file (arena nodes, feature strings).
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod cli;

fn main() {
    cli::run();
}
