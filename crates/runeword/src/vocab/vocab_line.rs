//! # Vocabulary Line Shapes

/// One parsed vocabulary line.
///
/// Lines are trimmed, then split on the separator:
/// ```terminaloutput
/// {TOKEN}
/// {ID}{SEP}{TOKEN}
/// {TOKEN}{SEP}{ID}
/// ```
///
/// Two-field lines are disambiguated by trying the first field as an id,
/// then the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabLine<'a> {
    /// ``{TOKEN}``; the id is the line index.
    Token(&'a str),

    /// ``{ID}{SEP}{TOKEN}``.
    IdToken(u64, &'a str),

    /// ``{TOKEN}{SEP}{ID}``.
    TokenId(&'a str, u64),
}

impl<'a> VocabLine<'a> {
    /// Parse a single line.
    ///
    /// ## Arguments
    /// * `line` - the raw line; surrounding whitespace is ignored.
    /// * `separator` - the field separator; must not be empty.
    ///
    /// ## Returns
    /// `None` if the line has more than two fields,
    /// or two fields and neither is a non-negative integer.
    pub fn parse(
        line: &'a str,
        separator: &str,
    ) -> Option<Self> {
        let mut fields = line.trim().split(separator);

        let first = fields.next()?;
        let Some(second) = fields.next() else {
            return Some(VocabLine::Token(first));
        };
        if fields.next().is_some() {
            return None;
        }

        if let Ok(id) = first.parse::<u64>() {
            Some(VocabLine::IdToken(id, second))
        } else if let Ok(id) = second.parse::<u64>() {
            Some(VocabLine::TokenId(first, id))
        } else {
            None
        }
    }

    /// The token field.
    pub fn token(&self) -> &'a str {
        match *self {
            VocabLine::Token(token) => token,
            VocabLine::IdToken(_, token) => token,
            VocabLine::TokenId(token, _) => token,
        }
    }

    /// The explicit id field, if the line has one.
    pub fn id(&self) -> Option<u64> {
        match *self {
            VocabLine::Token(_) => None,
            VocabLine::IdToken(id, _) => Some(id),
            VocabLine::TokenId(_, id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shapes() {
        assert_eq!(VocabLine::parse("OOV", "\t"), Some(VocabLine::Token("OOV")));
        assert_eq!(
            VocabLine::parse("8000\tOOV", "\t"),
            Some(VocabLine::IdToken(8000, "OOV"))
        );
        assert_eq!(
            VocabLine::parse("OOV\t8000", "\t"),
            Some(VocabLine::TokenId("OOV", 8000))
        );
    }

    #[test]
    fn test_parse_prefers_leading_id() {
        // Both fields are integers; the first one is the id.
        let line = VocabLine::parse("12\t34", "\t").unwrap();
        assert_eq!(line.id(), Some(12));
        assert_eq!(line.token(), "34");
    }

    #[test]
    fn test_parse_trims_line_not_fields() {
        assert_eq!(
            VocabLine::parse("  738\t以 \n", "\t"),
            Some(VocabLine::IdToken(738, "以"))
        );
        assert_eq!(VocabLine::parse("a \t 5", "\t"), None);
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(VocabLine::parse("1\t2\t3", "\t"), None);
        assert_eq!(VocabLine::parse("a\tb", "\t"), None);
        assert_eq!(VocabLine::parse("-1\ta", "\t"), None);
    }

    #[test]
    fn test_parse_multi_char_separator() {
        assert_eq!(
            VocabLine::parse("hello :: 7", " :: "),
            Some(VocabLine::TokenId("hello", 7))
        );
        assert_eq!(VocabLine::parse("", "\t"), Some(VocabLine::Token("")));
    }
}
