use crate::constants::LOG_ERROR_MESSAGE;
use once_cell::sync::Lazy;
use regex::Regex;

// Only the catch-block idiom is recognised: the exception variable is always
// `e` and the call ends with `;`. The leading whitespace run is captured so the
// replacement keeps the original indentation.
static PRINT_STACK_TRACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\s+)e\.printStackTrace\(\);").unwrap());

static LOGGER_CALL_REPLACEMENT: Lazy<String> =
    Lazy::new(|| format!("${{1}}Logger.error(\"{}\", e);", LOG_ERROR_MESSAGE));

/// Replaces every `e.printStackTrace();` preceded by whitespace with a `Logger.error` call.
///
/// # Examples
/// ```
/// use daofix::processing::filters::replace_print_stack_traces;
///
/// let text = "} catch (SQLException e) {\n    e.printStackTrace();\n}";
/// let expected = "} catch (SQLException e) {\n    Logger.error(\"Database operation failed\", e);\n}";
///
/// assert_eq!(replace_print_stack_traces(text), expected);
/// ```
pub fn replace_print_stack_traces(content: &str) -> String {
    PRINT_STACK_TRACE_RE
        .replace_all(content, LOGGER_CALL_REPLACEMENT.as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_four_space_indent() {
        let input = "\n    e.printStackTrace();";
        let expected = "\n    Logger.error(\"Database operation failed\", e);";
        assert_eq!(replace_print_stack_traces(input), expected);
    }

    #[test]
    fn test_preserves_tabs_and_mixed_whitespace() {
        let input = "{\n\t\t e.printStackTrace();\n}";
        let expected = "{\n\t\t Logger.error(\"Database operation failed\", e);\n}";
        assert_eq!(replace_print_stack_traces(input), expected);
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let input = "\
try { a(); } catch (SQLException e) {
            e.printStackTrace();
        }
try { b(); } catch (SQLException e) {
            e.printStackTrace();
        }
try { c(); } catch (Exception e) {
            e.printStackTrace();
        }
";
        let output = replace_print_stack_traces(input);
        assert_eq!(output.matches("printStackTrace").count(), 0);
        assert_eq!(
            output
                .matches("            Logger.error(\"Database operation failed\", e);")
                .count(),
            3
        );
    }

    #[test]
    fn test_requires_leading_whitespace() {
        // At the very start of the content there is no whitespace to capture.
        let input = "e.printStackTrace();";
        assert_eq!(replace_print_stack_traces(input), input);
    }

    #[test]
    fn test_ignores_other_variable_names() {
        let input = "\n    ex.printStackTrace();\n    err.printStackTrace();\n    this.e.printStackTrace();";
        assert_eq!(replace_print_stack_traces(input), input);
    }

    #[test]
    fn test_ignores_calls_without_terminator() {
        let input = "\n    e.printStackTrace()\n";
        assert_eq!(replace_print_stack_traces(input), input);
    }

    #[test]
    fn test_does_not_match_logger_calls() {
        let input = "\n    Logger.error(\"Database operation failed\", e);";
        assert_eq!(replace_print_stack_traces(input), input);
    }

    #[test]
    fn test_same_line_after_brace_keeps_single_space() {
        let input = "catch (Exception e) { e.printStackTrace(); }";
        let expected = "catch (Exception e) { Logger.error(\"Database operation failed\", e); }";
        assert_eq!(replace_print_stack_traces(input), expected);
    }
}
