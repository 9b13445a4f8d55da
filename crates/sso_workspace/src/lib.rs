// This is a stub lib.rs generated by `cargo hakari`.
// It is typically empty.
// For more, see https://docs.rs/cargo-hakari.
