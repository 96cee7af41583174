use crate::constants::{DB_CONNECTION_IMPORT, LOGGER_IMPORT};

/// Inserts the logger import directly after the database-connection import.
///
/// Nothing happens when the logger import is already present anywhere in the
/// content, or when there is no database-connection import to anchor on.
///
/// # Examples
/// ```
/// use daofix::processing::filters::insert_logger_import;
///
/// let source = "import com.college.utils.DatabaseConnection;\n\npublic class UserDAO {}";
/// let expected = "import com.college.utils.DatabaseConnection;\n\
///                 import com.college.utils.Logger;\n\npublic class UserDAO {}";
///
/// assert_eq!(insert_logger_import(source), expected);
/// // A second pass leaves the content alone.
/// assert_eq!(insert_logger_import(expected), expected);
/// ```
pub fn insert_logger_import(content: &str) -> String {
    if content.contains(LOGGER_IMPORT) {
        return content.to_string();
    }
    content.replace(
        DB_CONNECTION_IMPORT,
        &format!("{}\n{}", DB_CONNECTION_IMPORT, LOGGER_IMPORT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_once_after_db_import() {
        let input = "package com.college.dao;\n\nimport com.college.models.User;\nimport com.college.utils.DatabaseConnection;\nimport java.sql.*;\n";
        let expected = "package com.college.dao;\n\nimport com.college.models.User;\nimport com.college.utils.DatabaseConnection;\nimport com.college.utils.Logger;\nimport java.sql.*;\n";
        let output = insert_logger_import(input);
        assert_eq!(output, expected);
        assert_eq!(output.matches(LOGGER_IMPORT).count(), 1);
    }

    #[test]
    fn test_skips_when_logger_already_imported() {
        // Logger imported before the DB import; no second copy may appear.
        let input = "import com.college.utils.Logger;\nimport com.college.utils.DatabaseConnection;\n";
        assert_eq!(insert_logger_import(input), input);
    }

    #[test]
    fn test_noop_without_db_import() {
        let input = "package com.college.dao;\n\nimport java.util.List;\n";
        assert_eq!(insert_logger_import(input), input);
    }

    #[test]
    fn test_noop_on_empty_content() {
        assert_eq!(insert_logger_import(""), "");
    }
}
