//! Identifier casing transforms.
//!
//! Pure, single-pass conversions between Rust-style `PascalCase`/`camelCase`
//! identifiers and database `snake_case` column names. Inputs are expected
//! to be ASCII identifiers (letters, digits, underscores); non-ASCII
//! characters pass through untouched.

/// Convert a `PascalCase`/`camelCase` identifier to `snake_case`.
///
/// An underscore is inserted before each internal uppercase letter once at
/// least one non-underscore character has been emitted, and the result is
/// fully lowercased. Every letter of an uppercase run is separated:
/// `XxYy` becomes `xx_yy`, `XxYY` becomes `xx_y_y`. A leading underscore
/// run never triggers an insertion. See [`snake_string_with_acronym`] for
/// the variant that keeps acronym runs together.
///
/// # Example
///
/// ```
/// use sqlconv::case::snake_string;
///
/// assert_eq!(snake_string("UserProfile"), "user_profile");
/// assert_eq!(snake_string("XxYY"), "xx_y_y");
/// ```
#[must_use]
pub fn snake_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let mut emitted_word = false;
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() && emitted_word {
            out.push('_');
        }
        if ch != '_' {
            emitted_word = true;
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Convert an identifier to `snake_case`, keeping acronym runs together.
///
/// An underscore is inserted before an uppercase letter only when the
/// previous or the next character is lowercase, so a separator appears at
/// both edges of an acronym run but not inside it: `HTTPServer` becomes
/// `http_server` and `XxYY` becomes `xx_yy`, where [`snake_string`] would
/// produce `h_t_t_p_server` and `xx_y_y`.
///
/// # Example
///
/// ```
/// use sqlconv::case::snake_string_with_acronym;
///
/// assert_eq!(snake_string_with_acronym("HTTPServer"), "http_server");
/// assert_eq!(snake_string_with_acronym("UserID"), "user_id");
/// ```
#[must_use]
pub fn snake_string_with_acronym(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() * 2);
    for (i, &ch) in chars.iter().enumerate() {
        let before = i > 0 && chars[i - 1].is_ascii_lowercase();
        let after = i + 1 < chars.len() && chars[i + 1].is_ascii_lowercase();
        if i > 0 && ch.is_ascii_uppercase() && (before || after) {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Convert a `snake_case` identifier to `PascalCase`.
///
/// Underscores are dropped; the first ASCII letter at the start of the
/// string and after each underscore run is uppercased. Everything else is
/// left as-is, so already-capitalized letters survive unchanged.
///
/// # Example
///
/// ```
/// use sqlconv::case::camel_string;
///
/// assert_eq!(camel_string("user_profile"), "UserProfile");
/// assert_eq!(camel_string("xx__yy"), "XxYy");
/// ```
#[must_use]
pub fn camel_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for ch in s.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.push(ch.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_string_basic() {
        assert_eq!(snake_string("XxYy"), "xx_yy");
        assert_eq!(snake_string("XxYY"), "xx_y_y");
        assert_eq!(snake_string("UserProfile"), "user_profile");
        assert_eq!(snake_string("ID"), "i_d");
    }

    #[test]
    fn test_snake_string_leaves_snake_case_untouched() {
        assert_eq!(snake_string(""), "");
        assert_eq!(snake_string("a"), "a");
        assert_eq!(snake_string("already_snake"), "already_snake");
    }

    #[test]
    fn test_snake_string_leading_underscores() {
        // Nothing emitted before the underscore run, so no separator is
        // inserted for the first letter after it.
        assert_eq!(snake_string("_Xx"), "_xx");
        assert_eq!(snake_string("__XxYy"), "__xx_yy");
    }

    #[test]
    fn test_snake_string_digits() {
        assert_eq!(snake_string("Field1Name"), "field1_name");
        assert_eq!(snake_string("a1B2"), "a1_b2");
    }

    #[test]
    fn test_snake_string_with_acronym_boundaries() {
        assert_eq!(snake_string_with_acronym("XxYY"), "xx_yy");
        assert_eq!(snake_string_with_acronym("XxYy"), "xx_yy");
        assert_eq!(snake_string_with_acronym("HTTPServer"), "http_server");
        assert_eq!(snake_string_with_acronym("UserID"), "user_id");
        assert_eq!(snake_string_with_acronym("IDNumber"), "id_number");
    }

    #[test]
    fn test_snake_string_with_acronym_all_upper() {
        // No lowercase neighbor anywhere, so no separators at all.
        assert_eq!(snake_string_with_acronym("ABC"), "abc");
        assert_eq!(snake_string_with_acronym(""), "");
    }

    #[test]
    fn test_camel_string_basic() {
        assert_eq!(camel_string("xx_yy"), "XxYy");
        assert_eq!(camel_string("user_profile"), "UserProfile");
        assert_eq!(camel_string("a"), "A");
        assert_eq!(camel_string(""), "");
    }

    #[test]
    fn test_camel_string_underscore_runs_collapse() {
        assert_eq!(camel_string("xx__yy"), "XxYy");
        assert_eq!(camel_string("_xx"), "Xx");
        assert_eq!(camel_string("xx_"), "Xx");
    }

    #[test]
    fn test_camel_string_keeps_existing_capitals() {
        // No forced lowercasing of the remainder.
        assert_eq!(camel_string("xX_yY"), "XXYY");
        assert_eq!(camel_string("ID"), "ID");
    }

    #[test]
    fn test_camel_string_digit_after_underscore() {
        // A digit consumes the capitalization trigger.
        assert_eq!(camel_string("xx_1y"), "Xx1y");
    }

    #[test]
    fn test_snake_camel_round_trip_on_normalized_input() {
        for name in ["UserProfile", "XxYy", "Account", "OrderLineItem"] {
            let snake = snake_string(name);
            assert_eq!(camel_string(&snake), name);
            // A second trip through the pair is a fixed point.
            assert_eq!(snake_string(&camel_string(&snake)), snake);
        }
    }
}
