//! Line-level CSV parsing.
//!
//! [`LineParser`] turns one line of text into its ordered field values in a
//! single left-to-right pass.
//!
//! ## Quoting rules
//!
//! - Spaces before a field are skipped.
//! - A field that starts with `"` is quoted. It may contain commas, and a
//!   literal quote is written as `""`. Only spaces may follow the closing quote
//!   before the next comma or the end of the line.
//! - A field that does not start with `"` must not contain one.
//! - Unquoted fields lose their trailing whitespace. Quoted fields are kept
//!   verbatim unless trimming is enabled.
//! - A line ending in a comma has one more, empty, field.
//!
//! ## Examples
//!
//! ```rust
//! use csv_table::LineParser;
//!
//! let mut parser = LineParser::new(false);
//! let fields = parser.parse(r#"x, "hello, world" ,y"#).unwrap();
//! assert_eq!(fields, vec!["x", "hello, world", "y"]);
//!
//! let fields = parser.parse(r#""He said ""hi""""#).unwrap();
//! assert_eq!(fields, vec![r#"He said "hi""#]);
//! ```

use crate::{Error, Result};

/// Splits single CSV lines into fields.
///
/// The field buffer is owned by the parser and reused between lines. Parsing
/// a line never depends on a previous line.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    trim: bool,
    buffer: String,
}

impl LineParser {
    /// Creates a parser. With `trim` set, every field is trimmed on both sides.
    #[must_use]
    pub fn new(trim: bool) -> Self {
        LineParser {
            trim,
            buffer: String::with_capacity(100),
        }
    }

    /// Whether fields are trimmed on both sides.
    #[must_use]
    pub fn trim(&self) -> bool {
        self.trim
    }

    /// Parses one line into its fields.
    ///
    /// Columns in errors are 1-based character positions. The line number of
    /// the error is 1; readers replace it with the real one.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedQuoting`] for an unterminated quoted field or
    ///   content after a closing quote.
    /// - [`Error::UnquotedQuote`] for a `"` inside an unquoted field.
    pub fn parse(&mut self, line: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = line.chars().collect();
        let len = chars.len();
        let mut fields = Vec::new();

        self.buffer.clear();
        let mut in_column = false;
        let mut in_quotes = false;
        let mut quote_count = 0usize;
        let mut i = 0;

        while i < len {
            let ch = chars[i];

            if !in_column {
                match ch {
                    ' ' => {}
                    ',' => fields.push(String::new()),
                    '"' => {
                        in_column = true;
                        in_quotes = true;
                        quote_count = 1;
                    }
                    _ => {
                        in_column = true;
                        in_quotes = false;
                        quote_count = 0;
                        self.buffer.push(ch);
                    }
                }
                i += 1;
                continue;
            }

            if in_quotes {
                // An open quoted field has seen an odd number of quotes
                if quote_count % 2 == 0 {
                    return Err(Error::malformed_quoting(i + 1, "invalid double quotes"));
                }

                if ch != '"' {
                    self.buffer.push(ch);
                    i += 1;
                    continue;
                }

                match chars.get(i + 1) {
                    Some('"') => {
                        self.buffer.push('"');
                        quote_count += 2;
                        i += 2;
                    }
                    Some(_) => {
                        let mut j = i + 1;
                        while j < len && chars[j] == ' ' {
                            j += 1;
                        }
                        match chars.get(j) {
                            None | Some(',') => {
                                fields.push(self.finish_field(true));
                                in_column = false;
                                i = j + 1;
                            }
                            Some(_) => {
                                return Err(Error::malformed_quoting(
                                    j + 1,
                                    "unexpected character after closing double quote",
                                ));
                            }
                        }
                    }
                    None => {
                        fields.push(self.finish_field(true));
                        in_column = false;
                        i += 1;
                    }
                }
            } else {
                match ch {
                    ',' => {
                        fields.push(self.finish_field(false));
                        in_column = false;
                    }
                    '"' => return Err(Error::unquoted_quote(i + 1)),
                    _ => self.buffer.push(ch),
                }
                i += 1;
            }
        }

        if in_column {
            if in_quotes && quote_count % 2 != 0 {
                return Err(Error::malformed_quoting(
                    len + 1,
                    "unterminated quoted field",
                ));
            }
            if !in_quotes && quote_count != 0 {
                return Err(Error::malformed_quoting(len + 1, "invalid double quotes"));
            }
            fields.push(self.finish_field(in_quotes));
        } else if line.trim_end().ends_with(',') {
            fields.push(String::new());
        }

        Ok(fields)
    }

    /// Takes the buffered field, applying the trimming rules.
    fn finish_field(&mut self, quoted: bool) -> String {
        let raw = if quoted {
            self.buffer.as_str()
        } else {
            self.buffer.trim_end()
        };
        let field = if self.trim { raw.trim() } else { raw }.to_string();
        self.buffer.clear();
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Vec<String>> {
        LineParser::new(false).parse(line)
    }

    fn parse_trimmed(line: &str) -> Result<Vec<String>> {
        LineParser::new(true).parse(line)
    }

    #[test]
    fn test_simple_fields() {
        assert_eq!(parse("a,b,c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_line_has_no_fields() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("    ").unwrap().is_empty());
    }

    #[test]
    fn test_leading_spaces_skipped_trailing_trimmed() {
        assert_eq!(parse("  a  ,   b ,c   ").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_inner_spaces_kept() {
        assert_eq!(parse("hello world, x y").unwrap(), vec!["hello world", "x y"]);
    }

    #[test]
    fn test_leading_tab_kept_without_trim() {
        assert_eq!(parse("\tx,y").unwrap(), vec!["\tx", "y"]);
        assert_eq!(parse_trimmed("\tx,y").unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(parse(",a,,b").unwrap(), vec!["", "a", "", "b"]);
        assert_eq!(parse(",").unwrap(), vec!["", ""]);
    }

    #[test]
    fn test_trailing_delimiter() {
        assert_eq!(parse("a,b,").unwrap(), vec!["a", "b", ""]);
        assert_eq!(parse("a,b,   ").unwrap(), vec!["a", "b", ""]);
        assert_eq!(parse("a,,").unwrap(), vec!["a", "", ""]);
    }

    #[test]
    fn test_quoted_field_with_comma() {
        assert_eq!(
            parse("x,\"hello, world\",y").unwrap(),
            vec!["x", "hello, world", "y"]
        );
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(
            parse("\"He said \"\"hi\"\"\"").unwrap(),
            vec!["He said \"hi\""]
        );
        assert_eq!(parse("\"\"\"\"").unwrap(), vec!["\""]);
    }

    #[test]
    fn test_empty_quoted_field() {
        assert_eq!(parse("\"\",a").unwrap(), vec!["", "a"]);
        assert_eq!(parse("a,\"\"").unwrap(), vec!["a", ""]);
    }

    #[test]
    fn test_quoted_content_is_verbatim() {
        assert_eq!(parse("\"  padded  \",x").unwrap(), vec!["  padded  ", "x"]);
        assert_eq!(parse_trimmed("\"  padded  \",x").unwrap(), vec!["padded", "x"]);
    }

    #[test]
    fn test_spaces_after_closing_quote() {
        assert_eq!(parse("\"a\"   ,b").unwrap(), vec!["a", "b"]);
        assert_eq!(parse("b,\"a\"   ").unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn test_quoted_then_trailing_delimiter() {
        assert_eq!(parse("\"a\",").unwrap(), vec!["a", ""]);
    }

    #[test]
    fn test_quoted_field_ending_with_comma_inside() {
        assert_eq!(parse("x,\"a,\"").unwrap(), vec!["x", "a,"]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse("\"abc").unwrap_err();
        assert!(matches!(err, Error::MalformedQuoting { col: 5, .. }));
    }

    #[test]
    fn test_line_ending_in_escaped_quote_is_unterminated() {
        let err = parse("\"abc\"\"").unwrap_err();
        assert!(matches!(err, Error::MalformedQuoting { .. }));
    }

    #[test]
    fn test_quote_inside_unquoted_field() {
        let err = parse("ab\"cd").unwrap_err();
        assert_eq!(err, Error::UnquotedQuote { line: 1, col: 3 });
    }

    #[test]
    fn test_stray_content_after_closing_quote() {
        let err = parse("\"a\" b,c").unwrap_err();
        match err {
            Error::MalformedQuoting { col, msg, .. } => {
                assert_eq!(col, 5);
                assert!(msg.contains("closing double quote"));
            }
            other => panic!("Expected MalformedQuoting, got {other:?}"),
        }
    }

    #[test]
    fn test_no_partial_output_on_error() {
        let mut parser = LineParser::new(false);
        assert!(parser.parse("a,b,c\"d").is_err());
        // buffer leftovers must not leak into the next line
        assert_eq!(parser.parse("x,y").unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn test_parser_reuse_is_idempotent() {
        let mut parser = LineParser::new(true);
        let line = " 1 , \"two, too\" ,3,";
        let first = parser.parse(line).unwrap();
        let second = parser.parse(line).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["1", "two, too", "3", ""]);
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(
            parse("名前,\"東京, 日本\",ü").unwrap(),
            vec!["名前", "東京, 日本", "ü"]
        );
    }

    #[test]
    fn test_unicode_error_column_counts_chars() {
        let err = parse("éé\"").unwrap_err();
        assert_eq!(err, Error::UnquotedQuote { line: 1, col: 3 });
    }
}
