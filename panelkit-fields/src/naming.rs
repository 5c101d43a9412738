//! Accessor name generation.

/// Camelize a property path segment.
///
/// The first character and every character that follows a run of `_` / `.`
/// delimiters are upper-cased (ASCII only) and the run is dropped. When the
/// last delimiter of a run is a `.`, an `_` is kept in its place:
///
/// ```
/// use panelkit_fields::camelize;
///
/// assert_eq!(camelize("first_name"), "FirstName");
/// assert_eq!(camelize("foo.bar_baz"), "Foo_BarBaz");
/// assert_eq!(camelize("foo_bar.baz"), "FooBar_Baz");
/// ```
///
/// The start of the string counts as its own (empty) run, so a leading
/// delimiter is treated as the character to upper-case and survives:
/// `_private` stays `_private`, `__x` becomes `_X`. A delimiter run with
/// nothing capitalizable after it donates its last delimiter as that
/// character: `a__` becomes `A_`.
pub fn camelize(property: &str) -> String {
    let chars: Vec<char> = property.chars().collect();
    let mut out = String::with_capacity(property.len());
    let mut i = 0;

    if let Some(&first) = chars.first() {
        if first != '\n' {
            out.push(first.to_ascii_uppercase());
            i = 1;
        }
    }

    while i < chars.len() {
        if !is_delimiter(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let mut end = i;
        while end < chars.len() && is_delimiter(chars[end]) {
            end += 1;
        }

        // The run must be followed by a capitalizable character; otherwise
        // give back its last delimiter, provided the run stays non-empty.
        let (run_end, target) = match chars.get(end) {
            Some(&c) if c != '\n' => (end, c),
            _ if end - i >= 2 => (end - 1, chars[end - 1]),
            _ => {
                out.extend(&chars[i..end]);
                i = end;
                continue;
            }
        };

        if chars[run_end - 1] == '.' {
            out.push('_');
        }
        out.push(target.to_ascii_uppercase());
        i = run_end + 1;
    }

    out
}

fn is_delimiter(c: char) -> bool {
    c == '_' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("name", "Name")]
    #[case("first_name", "FirstName")]
    #[case("foo.bar_baz", "Foo_BarBaz")]
    #[case("foo_bar.baz", "FooBar_Baz")]
    #[case("a__b", "AB")]
    #[case("a_.b", "A_B")]
    #[case("a._b", "AB")]
    #[case("_private", "_private")]
    #[case("__x", "_X")]
    #[case(".hidden", ".hidden")]
    #[case("trailing_", "Trailing_")]
    #[case("a__", "A_")]
    #[case("a..", "A_.")]
    #[case("already_Upper", "AlreadyUpper")]
    #[case("x", "X")]
    #[case("", "")]
    fn camelize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(camelize(input), expected);
    }

    #[test]
    fn camelize_leaves_non_ascii_untouched() {
        assert_eq!(camelize("prénom_éte"), "Prénométe");
        assert_eq!(camelize("été"), "été");
    }

    #[test]
    fn camelize_does_not_capitalize_newline() {
        assert_eq!(camelize("a_\nb"), "A_\nb");
    }
}
