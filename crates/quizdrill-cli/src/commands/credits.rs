//! The `quizdrill credits` command.

pub fn execute() {
    println!("quizdrill {}", env!("CARGO_PKG_VERSION"));
    println!("Authors: the quizdrill contributors");
}
