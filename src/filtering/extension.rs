// src/filtering/extension.rs

/// Checks whether a file name ends with `.` followed by the given suffix.
///
/// This is a plain, case-sensitive suffix test on the name, not an extension
/// lookup: a file literally named `.java` matches the `java` suffix, while
/// `UserDAO.JAVA` and `UserDAO.java.bak` do not.
///
/// # Examples
///
/// ```
/// use daofix::filtering::has_source_suffix;
///
/// assert!(has_source_suffix("UserDAO.java", "java"));
/// assert!(!has_source_suffix("UserDAO.java.orig", "java"));
/// assert!(!has_source_suffix("Readme.md", "java"));
/// ```
pub fn has_source_suffix(file_name: &str, suffix: &str) -> bool {
    file_name
        .strip_suffix(suffix)
        .map_or(false, |stem| stem.ends_with('.'))
}
