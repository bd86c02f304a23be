use std::borrow::Cow;
use std::fmt;
use std::str::Chars;

/// Metadata attached to a record field.
///
/// By convention a tag is a space-separated list of `key:"value"` pairs, for
/// example `validate:"min:1;max:10" json:"count"`. Keys may not contain spaces,
/// quotes, colons or control characters; values are double-quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StructTag<'a>(&'a str);

impl<'a> StructTag<'a> {
    /// Wraps a raw tag string.
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// Returns the raw tag string.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns true if the raw tag is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value associated with `key`, or an empty string when the
    /// key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Cow<'a, str> {
        self.lookup(key).unwrap_or(Cow::Borrowed(""))
    }

    /// Returns the value associated with `key`.
    ///
    /// Scanning stops at the first malformed pair, so keys after it are never
    /// found. Values are unquoted with the usual escapes (`\n`, `\t`, `\xNN`,
    /// `\u00e9`, octal `\101`, ...); a value with an invalid escape, a raw
    /// newline, or escaped bytes that are not UTF-8 is not found either.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Cow<'a, str>> {
        let mut rest = self.0;
        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                return None;
            }

            let bytes = rest.as_bytes();
            let name_len = bytes
                .iter()
                .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
                .unwrap_or(bytes.len());
            if name_len == 0
                || name_len + 1 >= bytes.len()
                || bytes[name_len] != b':'
                || bytes[name_len + 1] != b'"'
            {
                return None;
            }
            let name = &rest[..name_len];
            rest = &rest[name_len + 1..];

            // `rest` starts at the opening quote.
            let bytes = rest.as_bytes();
            let mut i = 1;
            while i < bytes.len() && bytes[i] != b'"' {
                if bytes[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= bytes.len() {
                return None;
            }
            let quoted = &rest[1..i];
            rest = &rest[i + 1..];

            if name == key {
                return unquote(quoted);
            }
        }
    }
}

impl fmt::Display for StructTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Resolves backslash escapes inside a quoted tag value.
fn unquote(quoted: &str) -> Option<Cow<'_, str>> {
    if !quoted.contains(['\\', '\n']) {
        return Some(Cow::Borrowed(quoted));
    }

    let mut out = Vec::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        match c {
            '\n' => return None,
            '\\' => unescape(&mut chars, &mut out)?,
            _ => push_char(&mut out, c),
        }
    }
    String::from_utf8(out).ok().map(Cow::Owned)
}

/// Decodes one escape sequence; `chars` is positioned after the backslash.
fn unescape(chars: &mut Chars<'_>, out: &mut Vec<u8>) -> Option<()> {
    let byte = match chars.next()? {
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'v' => 0x0b,
        '\\' => b'\\',
        '"' => b'"',
        'x' => u8::try_from(digits(chars, 16, 2)?).ok()?,
        'u' => {
            push_char(out, char::from_u32(digits(chars, 16, 4)?)?);
            return Some(());
        }
        'U' => {
            push_char(out, char::from_u32(digits(chars, 16, 8)?)?);
            return Some(());
        }
        first @ '0'..='7' => {
            let high = first.to_digit(8)?;
            let low = digits(chars, 8, 2)?;
            u8::try_from(high * 64 + low).ok()?
        }
        _ => return None,
    };
    out.push(byte);
    Some(())
}

/// Reads exactly `count` digits in `radix`.
fn digits(chars: &mut Chars<'_>, radix: u32, count: usize) -> Option<u32> {
    (0..count).try_fold(0, |acc: u32, _| {
        Some(acc * radix + chars.next()?.to_digit(radix)?)
    })
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
