/// Split one CSV line into fields.
///
/// A `"` toggles quoted mode; inside quotes a comma is kept as text. Quote
/// characters are dropped and `""` is not unescaped, so `"a""b"` reads as
/// `ab`. The last field is always emitted, even when empty. Line endings are
/// not handled here: callers trim the line first.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::parse_line;

    #[test]
    fn test_quoted_comma_is_literal() {
        assert_eq!(parse_line(r#"A,"B,C",D"#), vec!["A", "B,C", "D"]);
    }

    #[test]
    fn test_trailing_empty_field() {
        assert_eq!(parse_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn test_doubled_quotes_are_not_unescaped() {
        assert_eq!(parse_line(r#""a""b",c"#), vec!["ab", "c"]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest() {
        assert_eq!(parse_line(r#"x,"y,z"#), vec!["x", "y,z"]);
    }

    #[test]
    fn test_whitespace_is_preserved() {
        assert_eq!(parse_line(" Hatillo , Palma "), vec![" Hatillo ", " Palma "]);
    }
}
