//! Message templates and the structured arguments they are rendered from.

use folio_source::PathString;
use serde::Serialize;
use std::fmt;

/// One argument of a diagnostic message.
///
/// Arguments are kept alongside the rendered message so reporting code can
/// re-render or inspect them without parsing the text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageArg {
    /// A text value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A logical path.
    Path(PathString),
    /// A missing value, rendered as empty text.
    Null,
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Str(s) => f.write_str(s),
            MessageArg::Int(i) => write!(f, "{i}"),
            MessageArg::Float(x) => write!(f, "{x}"),
            MessageArg::Bool(b) => write!(f, "{b}"),
            MessageArg::Path(p) => write!(f, "{p}"),
            MessageArg::Null => Ok(()),
        }
    }
}

impl From<String> for MessageArg {
    fn from(s: String) -> Self {
        MessageArg::Str(s)
    }
}

impl From<&str> for MessageArg {
    fn from(s: &str) -> Self {
        MessageArg::Str(s.to_string())
    }
}

impl From<bool> for MessageArg {
    fn from(b: bool) -> Self {
        MessageArg::Bool(b)
    }
}

impl From<f64> for MessageArg {
    fn from(x: f64) -> Self {
        MessageArg::Float(x)
    }
}

impl From<PathString> for MessageArg {
    fn from(p: PathString) -> Self {
        MessageArg::Path(p)
    }
}

impl<T: Into<MessageArg>> From<Option<T>> for MessageArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(MessageArg::Null, Into::into)
    }
}

macro_rules! int_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MessageArg {
                fn from(i: $ty) -> Self {
                    MessageArg::Int(i64::from(i))
                }
            }
        )*
    };
}

int_arg!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for MessageArg {
    fn from(i: usize) -> Self {
        i64::try_from(i).map_or_else(|_| MessageArg::Str(i.to_string()), MessageArg::Int)
    }
}

/// Renders `template`, replacing `{N}` with the `N`th argument.
///
/// `{{` and `}}` produce literal braces. Placeholders that are malformed or
/// refer to a missing argument are copied through unchanged.
pub fn format_message(template: &str, args: &[MessageArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('{') {
            if let Some(end) = tail.find('}') {
                let index = &tail[1..end];
                if let Some(arg) = index.parse::<usize>().ok().and_then(|i| args.get(i)) {
                    out.push_str(&arg.to_string());
                    rest = &tail[end + 1..];
                    continue;
                }
            }
        }

        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}
