//! Shell-style `$VAR` / `${VAR}` substitution.

/// Replace `${NAME}` and `$NAME` references in `input` using `lookup`.
///
/// Unset variables expand to the empty string. Malformed references
/// (`${}` or an unterminated `${`) are dropped, and a `$` that is not
/// followed by a name is kept as-is.
pub fn expand_vars<F>(input: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        match reference_name(after) {
            Reference::Name { name, consumed } => {
                out.push_str(&lookup(name).unwrap_or_default());
                rest = &after[consumed..];
            }
            Reference::Malformed { consumed } => {
                rest = &after[consumed..];
            }
            Reference::Literal => {
                out.push('$');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

enum Reference<'a> {
    Name { name: &'a str, consumed: usize },
    Malformed { consumed: usize },
    Literal,
}

fn is_special(c: u8) -> bool {
    matches!(c, b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'-') || c.is_ascii_digit()
}

fn is_name_char(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphanumeric()
}

// `s` is the text right after a `$`.
fn reference_name(s: &str) -> Reference<'_> {
    let bytes = s.as_bytes();

    match bytes.first() {
        None => Reference::Literal,
        Some(b'{') => {
            if bytes.len() > 2 && is_special(bytes[1]) && bytes[2] == b'}' {
                return Reference::Name { name: &s[1..2], consumed: 3 };
            }
            match s[1..].find('}') {
                Some(0) => Reference::Malformed { consumed: 2 },
                Some(close) => Reference::Name { name: &s[1..close + 1], consumed: close + 2 },
                None => Reference::Malformed { consumed: 1 },
            }
        }
        Some(&c) if is_special(c) => Reference::Name { name: &s[..1], consumed: 1 },
        Some(_) => {
            let len = bytes.iter().take_while(|&&c| is_name_char(c)).count();
            if len == 0 {
                Reference::Literal
            } else {
                Reference::Name { name: &s[..len], consumed: len }
            }
        }
    }
}
