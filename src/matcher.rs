//! Pattern primitives anchored at the cursor.
//!
//! Every matcher returns the byte length of its match at `pos`, or `None`.
//! A returned length is never zero. Lookahead conditions are checked but
//! not included in the length.

/// A pattern tried at the cursor by a [`Rule`](crate::rules::Rule).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// One or more whitespace characters, newlines included.
    Whitespace,
    /// `//` up to, not including, the line end.
    LineComment,
    /// Exact text.
    Literal(&'static str),
    /// Exact text not followed by a word character.
    Word(&'static str),
    /// `[-+]?` mantissa with optional fraction, then a mandatory exponent.
    ExponentFloat,
    /// `-?` digits `.` digits.
    FractionFloat,
    /// `-?` digits.
    Integer,
    /// Dotted identifier followed by optional whitespace and `(`.
    FunctionCall,
    /// Permissive measure name at a line start, followed by `=` or `:=`.
    MeasureName,
    /// Word character, then word characters and dots.
    Identifier,
    /// Multi- or single-character operator.
    Operator,
    /// Any single character of the set.
    OneOf(&'static str),
    /// `@` followed by word characters.
    VariableInstance,
    /// Backslash and the character after it, unless that is a newline.
    EscapedChar,
    /// One or more characters outside the set.
    RunExcept(&'static str),
    /// ASCII identifier starting with a letter, followed by `=`.
    DeclaredName,
    /// Anything else on the line before the next `=`, which may also
    /// follow on a later line.
    MalformedName,
}

const MULTI_CHAR_OPERATORS: &[&str] = &[":=", "||", "&&", "==", "<=", ">=", "<>"];
const SINGLE_CHAR_OPERATORS: &[u8] = b"+-*/^=<>&";

impl Matcher {
    #[must_use]
    pub fn match_at(self, input: &str, pos: usize) -> Option<usize> {
        let rest = input.get(pos..)?;
        if rest.is_empty() {
            return None;
        }
        let len = match self {
            Self::Whitespace => space_run(rest.as_bytes(), 0),
            Self::LineComment => {
                if rest.starts_with("//") {
                    rest.find('\n').unwrap_or(rest.len())
                } else {
                    0
                }
            }
            Self::Literal(text) => {
                if rest.starts_with(text) {
                    text.len()
                } else {
                    0
                }
            }
            Self::Word(text) => {
                let boundary = !rest.as_bytes().get(text.len()).is_some_and(|&b| is_word(b));
                if boundary && rest.starts_with(text) {
                    text.len()
                } else {
                    0
                }
            }
            Self::ExponentFloat => exponent_float(rest.as_bytes()),
            Self::FractionFloat => fraction_float(rest.as_bytes()),
            Self::Integer => {
                let bytes = rest.as_bytes();
                let sign = usize::from(bytes[0] == b'-');
                let digits = digit_run(bytes, sign);
                if digits == 0 { 0 } else { sign + digits }
            }
            Self::FunctionCall => function_call(rest.as_bytes()),
            Self::MeasureName => {
                let at_line_start = pos == 0 || input.as_bytes()[pos - 1] == b'\n';
                if at_line_start {
                    measure_name(rest)
                } else {
                    0
                }
            }
            Self::Identifier => {
                let bytes = rest.as_bytes();
                if is_word(bytes[0]) {
                    1 + bytes[1..]
                        .iter()
                        .take_while(|&&b| is_word(b) || b == b'.')
                        .count()
                } else {
                    0
                }
            }
            Self::Operator => operator(rest),
            Self::OneOf(set) => usize::from(set.as_bytes().contains(&rest.as_bytes()[0])),
            Self::VariableInstance => {
                let bytes = rest.as_bytes();
                if bytes[0] == b'@' {
                    let name = word_run(bytes, 1);
                    if name == 0 { 0 } else { 1 + name }
                } else {
                    0
                }
            }
            Self::EscapedChar => {
                if rest.starts_with('\\') {
                    match rest[1..].chars().next() {
                        Some(ch) if ch != '\n' => 1 + ch.len_utf8(),
                        _ => 0,
                    }
                } else {
                    0
                }
            }
            Self::RunExcept(set) => rest
                .bytes()
                .take_while(|b| !set.as_bytes().contains(b))
                .count(),
            Self::DeclaredName => declared_name(rest.as_bytes()),
            Self::MalformedName => malformed_name(rest),
        };
        (len > 0).then_some(len)
    }
}

/// Whitespace as the formula language sees it: ASCII space, tab,
/// line feed, carriage return, vertical tab and form feed.
const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

fn is_space_char(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_space)
}

const fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn space_run(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|&&b| is_space(b)).count())
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}

fn word_run(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|&&b| is_word(b)).count())
}

fn exponent_float(bytes: &[u8]) -> usize {
    let mut end = usize::from(matches!(bytes[0], b'+' | b'-'));
    let integral = digit_run(bytes, end);
    end += integral;
    let fraction = if bytes.get(end) == Some(&b'.') {
        digit_run(bytes, end + 1)
    } else {
        0
    };
    if fraction > 0 {
        end += 1 + fraction;
    } else if integral == 0 {
        return 0;
    }
    if !matches!(bytes.get(end), Some(b'e' | b'E')) {
        return 0;
    }
    end += 1;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let exponent = digit_run(bytes, end);
    if exponent == 0 { 0 } else { end + exponent }
}

fn fraction_float(bytes: &[u8]) -> usize {
    let sign = usize::from(bytes[0] == b'-');
    let integral = digit_run(bytes, sign);
    let dot = sign + integral;
    if integral == 0 || bytes.get(dot) != Some(&b'.') {
        return 0;
    }
    let fraction = digit_run(bytes, dot + 1);
    if fraction == 0 { 0 } else { dot + 1 + fraction }
}

fn function_call(bytes: &[u8]) -> usize {
    let name = bytes
        .iter()
        .take_while(|&&b| is_word(b) || b == b'.')
        .count();
    if name == 0 {
        return 0;
    }
    let paren = name + space_run(bytes, name);
    if bytes.get(paren) == Some(&b'(') { name } else { 0 }
}

/// Whether `rest[from..]` continues with optional whitespace, an optional
/// `:` and then `=`.
fn assignment_follows(rest: &[u8], from: usize) -> bool {
    let mut at = from + space_run(rest, from);
    if rest.get(at) == Some(&b':') {
        at += 1;
    }
    rest.get(at) == Some(&b'=')
}

/// Shortest non-empty prefix of the line, optionally extended by one
/// character that is neither `:` nor whitespace, that is followed by an
/// assignment. The line must not start with `=`.
fn measure_name(rest: &str) -> usize {
    let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
    if line.starts_with('=') {
        return 0;
    }
    let bytes = rest.as_bytes();
    // Last whitespace run measured; every offset inside it skips to its end.
    let mut run = 0..0;
    let mut follows = |from: usize| {
        let skipped = if run.contains(&from) {
            run.end
        } else {
            let end = from + space_run(bytes, from);
            if end > from {
                run = from..end;
            }
            end
        };
        assignment_follows(bytes, skipped)
    };
    for (idx, ch) in line.char_indices() {
        let end = idx + ch.len_utf8();
        if let Some(next) = line[end..].chars().next() {
            let extended = end + next.len_utf8();
            if next != ':' && !is_space_char(next) && follows(extended) {
                return extended;
            }
        }
        if follows(end) {
            return end;
        }
    }
    0
}

fn operator(rest: &str) -> usize {
    if MULTI_CHAR_OPERATORS.iter().any(|op| rest.starts_with(op)) {
        2
    } else {
        usize::from(SINGLE_CHAR_OPERATORS.contains(&rest.as_bytes()[0]))
    }
}

fn declared_name(bytes: &[u8]) -> usize {
    if !bytes[0].is_ascii_alphabetic() {
        return 0;
    }
    let name = word_run(bytes, 0);
    let eq = name + space_run(bytes, name);
    if bytes.get(eq) == Some(&b'=') { name } else { 0 }
}

/// Everything before the first `=` of the line, minus trailing whitespace.
/// A line without `=` matches as a whole when the `=` follows on a later
/// line.
///
/// The span deliberately stops at the first `=` rather than the last one
/// reachable, so `VAR a b = x = 1` flags only `a b`.
fn malformed_name(rest: &str) -> usize {
    let line_end = rest.find('\n').unwrap_or(rest.len());
    let line = &rest[..line_end];
    if let Some(eq) = line.find('=') {
        return line[..eq].trim_end_matches(is_space_char).len();
    }
    let name = line.trim_end_matches(is_space_char).len();
    let bytes = rest.as_bytes();
    let eq = name + space_run(bytes, name);
    if name > 0 && bytes.get(eq) == Some(&b'=') { name } else { 0 }
}
