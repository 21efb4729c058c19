/// Splits a raw source line on runs of whitespace.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Removes a leading `name:` token, if present.
///
/// Returns the label name (without the colon) and the remaining tokens.
pub fn strip_label_prefix<'a>(
    tokens: &[&'a str],
) -> (Option<&'a str>, Vec<&'a str>) {
    match tokens.split_first() {
        Some((&first, rest)) => match first.strip_suffix(':') {
            Some(label) => (Some(label), rest.to_vec()),
            None => (None, tokens.to_vec()),
        },
        None => (None, Vec::new()),
    }
}

/// A tokenized source line with its label split off.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Line<'a> {
    /// Label annotating this line, if any.
    pub label: Option<&'a str>,
    /// Tokens of the statement on this line.
    pub body: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Tokenizes `raw` and strips its label.
    ///
    /// This is used both when scanning a program and on every visit during
    /// execution, so both see the same label and statement.
    pub fn parse(raw: &'a str) -> Self {
        let (label, body) = strip_label_prefix(&tokenize(raw));

        Line { label, body }
    }

    /// Leading keyword of the statement.
    pub fn keyword(&self) -> Option<&'a str> {
        self.body.first().copied()
    }

    /// Whether the line holds no statement.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_runs_of_whitespace() {
        assert_eq!(
            tokenize("  ASSIGN\tX   + X\t 1 "),
            vec!["ASSIGN", "X", "+", "X", "1"]
        );
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_strip_label_prefix() {
        let tokens = tokenize("LOOP: ASSIGN N + N 1");
        let (label, body) = strip_label_prefix(&tokens);

        assert_eq!(label, Some("LOOP"));
        assert_eq!(body, vec!["ASSIGN", "N", "+", "N", "1"]);

        let tokens = tokenize("PRINT N");
        let (label, body) = strip_label_prefix(&tokens);

        assert_eq!(label, None);
        assert_eq!(body, vec!["PRINT", "N"]);
    }

    #[test]
    fn test_label_only_line() {
        let line = Line::parse("END:");

        assert_eq!(line.label, Some("END"));
        assert!(line.is_empty());
        assert_eq!(line.keyword(), None);
    }

    #[test]
    fn test_only_leading_colon_token_is_label() {
        let line = Line::parse("PRINT done:");

        assert_eq!(line.label, None);
        assert_eq!(line.body, vec!["PRINT", "done:"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = "again:   IF > N 3 again";

        let first = Line::parse(raw);
        let second = Line::parse(raw);

        assert_eq!(first, second);
        assert_eq!(first.label, Some("again"));
        assert_eq!(first.keyword(), Some("IF"));
    }
}
