//! Identifier case conversion.

use crate::model::ConversionMode;

/// `foo__bar_baz` -> `FooBarBaz`. Empty segments are dropped; the tail of
/// each segment is kept as is.
pub fn snake_to_pascal(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(s.len());
    for seg in s.split('_').filter(|seg| !seg.is_empty()) {
        let mut chars = seg.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Lowercases the first character only.
pub fn pascal_to_camel(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// `UserName` -> `user_name`, `HTTPServer` -> `http_server`. Existing
/// underscores are kept; lowercase input comes back unchanged.
pub fn to_snake(s: &str) -> String {
    let chars: Vec<char> = s.trim().chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Applies a case mode to a bare name. Pascal and camel lowercase the input
/// first, so `USER_ID` becomes `UserId`. Returns `None` for
/// [`ConversionMode::Property`], which is not a naming variant.
pub fn convert_name(s: &str, mode: ConversionMode) -> Option<String> {
    match mode {
        ConversionMode::Pascal => Some(snake_to_pascal(&to_lower(s))),
        ConversionMode::Camel => Some(pascal_to_camel(&snake_to_pascal(&to_lower(s)))),
        ConversionMode::Lower => Some(to_lower(s)),
        ConversionMode::Upper => Some(to_upper(s)),
        ConversionMode::Property => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_to_pascal_basics() {
        assert_eq!(snake_to_pascal(""), "");
        assert_eq!(snake_to_pascal("   "), "");
        assert_eq!(snake_to_pascal("foo_bar"), "FooBar");
        assert_eq!(snake_to_pascal("foo__bar"), "FooBar");
        assert_eq!(snake_to_pascal("_leading_and_trailing_"), "LeadingAndTrailing");
        assert_eq!(snake_to_pascal("___"), "");
    }

    #[test]
    fn snake_to_pascal_keeps_segment_tails() {
        assert_eq!(snake_to_pascal("user_ID"), "UserID");
        assert_eq!(snake_to_pascal("already"), "Already");
    }

    #[test]
    fn pascal_to_camel_basics() {
        assert_eq!(pascal_to_camel("FooBar"), "fooBar");
        assert_eq!(pascal_to_camel(""), "");
        assert_eq!(pascal_to_camel("X"), "x");
        assert_eq!(pascal_to_camel("fooBar"), "fooBar");
    }

    #[test]
    fn pascal_then_camel_lowercases_only_the_first_letter() {
        // token lists of 1..=4 tokens, each 1..=3 letters, walking the alphabet
        let mut seed = 0usize;
        for count in 1..=4 {
            for len in 1..=3 {
                for _ in 0..5 {
                    let tokens: Vec<String> = (0..count)
                        .map(|_| {
                            (0..len)
                                .map(|_| {
                                    seed = (seed * 7 + 3) % 26;
                                    (b'a' + seed as u8) as char
                                })
                                .collect()
                        })
                        .collect();

                    let mut expected = tokens[0].clone();
                    for t in &tokens[1..] {
                        expected.push_str(&t[..1].to_uppercase());
                        expected.push_str(&t[1..]);
                    }

                    let snake = tokens.join("_");
                    assert_eq!(pascal_to_camel(&snake_to_pascal(&snake)), expected, "tokens {tokens:?}");
                }
            }
        }
    }

    #[test]
    fn to_snake_splits_on_case_boundaries() {
        assert_eq!(to_snake("UserName"), "user_name");
        assert_eq!(to_snake("OrderLineId"), "order_line_id");
        assert_eq!(to_snake("UserID"), "user_id");
        assert_eq!(to_snake("HTTPServer"), "http_server");
        assert_eq!(to_snake("Address2Line"), "address2_line");
        assert_eq!(to_snake("last_seen"), "last_seen");
        assert_eq!(to_snake("User_Name"), "user_name");
        assert_eq!(to_snake("cnt"), "cnt");
        assert_eq!(to_snake(""), "");
    }

    #[test]
    fn convert_name_modes() {
        assert_eq!(convert_name("USER_NAME", ConversionMode::Pascal).as_deref(), Some("UserName"));
        assert_eq!(convert_name("USER_NAME", ConversionMode::Camel).as_deref(), Some("userName"));
        assert_eq!(convert_name("User_Name", ConversionMode::Lower).as_deref(), Some("user_name"));
        assert_eq!(convert_name("User_Name", ConversionMode::Upper).as_deref(), Some("USER_NAME"));
        assert_eq!(convert_name("user_name", ConversionMode::Property), None);
    }
}
