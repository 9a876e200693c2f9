//! Detection of secondary-handle (`!!`) tags that `serde_yaml` cannot keep.
//!
//! `serde_yaml` resolves `!!name` against the core schema and drops any
//! name it does not know, so `!!python/name:foo` would be written back as
//! an empty string. Such documents are refused instead of rewritten.

/// Tags of the YAML core and type repository that survive a round-trip.
const CORE_TAGS: &[&str] = &[
    "str",
    "int",
    "float",
    "bool",
    "null",
    "seq",
    "map",
    "binary",
    "timestamp",
];

/// Characters that end a tag token.
fn ends_tag(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '[' | ']' | '{' | '}')
}

/// Characters after which a new YAML token may start.
fn is_boundary(prev: Option<char>) -> bool {
    prev.is_none_or(|c| c.is_whitespace() || matches!(c, '[' | '{' | ','))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Comment,
}

/// First `!!` tag in `content` outside the core set, without the handle.
///
/// Comments and quoted scalars are skipped. Block scalar bodies are not
/// tracked, so tag-like text inside `|` or `>` blocks is reported too.
pub(crate) fn find_unsupported_tag(content: &str) -> Option<String> {
    let mut state = State::Plain;
    let mut prev: Option<char> = None;
    let mut chars = content.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match state {
            State::Comment => {
                if c == '\n' {
                    state = State::Plain;
                }
            }
            State::SingleQuoted => {
                if c == '\'' {
                    state = State::Plain;
                }
            }
            State::DoubleQuoted => {
                if c == '\\' {
                    chars.next();
                } else if c == '"' {
                    state = State::Plain;
                }
            }
            State::Plain => match c {
                '#' if is_boundary(prev) => state = State::Comment,
                '\'' if is_boundary(prev) => state = State::SingleQuoted,
                '"' if is_boundary(prev) => state = State::DoubleQuoted,
                '!' if is_boundary(prev) && content[idx..].starts_with("!!") => {
                    let name: String = content[idx + 2..]
                        .chars()
                        .take_while(|&c| !ends_tag(c))
                        .collect();
                    if !name.is_empty() && !CORE_TAGS.contains(&name.as_str()) {
                        return Some(name);
                    }
                }
                _ => {}
            },
        }
        prev = Some(c);
    }

    None
}
