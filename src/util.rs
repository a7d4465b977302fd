/// Uppercases the first character of `s` and leaves the rest unchanged.
///
/// Used when composing camel-case property names out of attribute names.
/// An empty string stays empty. A first character whose uppercase form is
/// longer than one character (e.g. `ß`) expands in place.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
