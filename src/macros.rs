// src/macros.rs

/// `s!()` → empty `String`, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => { ::std::string::String::new() };
    ($e:expr) => { ::std::string::String::from($e) };
}
