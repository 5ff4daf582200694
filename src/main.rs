//! # Cradle
//!
//! Runs or compiles a cradle program from a file, a pipe or the console.
//!

mod term;

fn main() {
    term::main();
}
