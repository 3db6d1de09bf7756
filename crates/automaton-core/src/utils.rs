/// Pick the singular or plural form of a noun for `count`.
///
/// # Examples
/// ```
/// use automaton_core::utils::pluralize;
/// assert_eq!(pluralize(1, "state", "states"), "state");
/// assert_eq!(pluralize(3, "state", "states"), "states");
/// ```
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Render a symbol as a quoted, escaped character literal.
///
/// # Examples
/// ```
/// use automaton_core::utils::quote_symbol;
/// assert_eq!(quote_symbol('a'), "'a'");
/// assert_eq!(quote_symbol('\n'), "'\\n'");
/// ```
pub fn quote_symbol(symbol: char) -> String {
    format!("'{}'", symbol.escape_debug())
}

/// Unicode code point notation (`U+0061`).
pub fn code_point(symbol: char) -> String {
    format!("U+{:04X}", symbol as u32)
}

/// Number of decimal digits needed to print `n`.
pub fn decimal_width(n: usize) -> usize {
    let mut width = 1;
    let mut rest = n / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}
