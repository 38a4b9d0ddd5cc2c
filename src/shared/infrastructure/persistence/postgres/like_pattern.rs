/// Wraps `needle` for `LIKE $n ESCAPE '\'` so it only matches as a literal
/// substring; `%`, `_` and `\` in user input lose their pattern meaning.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for character in needle.chars() {
        if matches!(character, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(character);
    }
    pattern.push('%');
    pattern
}
