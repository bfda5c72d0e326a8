/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "World";

/// Return a greeting message for `name`, or for [`DEFAULT_NAME`] when `None`.
///
/// The name is embedded verbatim; empty and non-ASCII names are accepted.
///
/// ```
/// use greeter::greet::greet;
///
/// assert_eq!(greet(None), "Hello, World!");
/// assert_eq!(greet(Some("Rust")), "Hello, Rust!");
/// ```
pub fn greet(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME))
}
