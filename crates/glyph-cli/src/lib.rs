//! Library wrapper around the `glyph` CLI implementation.
//!
//! `cargo test -p glyph-cli --lib` typechecks the CLI without building the
//! integration-test binary, so the binary crate root is compiled here as a module.
//!
//! Note: `fn main()` inside `main.rs` is just another function when compiled as a module.

#[allow(dead_code)]
#[path = "main.rs"]
mod main_bin;
