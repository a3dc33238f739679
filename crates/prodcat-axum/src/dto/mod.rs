//! Request and response shapes specific to the HTTP surface.

use serde::Deserialize;

/// Query parameters for `GET /products`.
///
/// `limit` is kept as raw text: a value without a leading integer means
/// "no limit", not a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    pub limit: Option<String>,
}

impl ListProductsParams {
    /// The requested limit, if present and starting with an integer.
    pub fn parsed_limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(leading_integer)
    }
}

/// Read the integer at the start of `raw`, ignoring whatever follows it.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, so `" 2abc"`
/// is `2` and `"1.5"` is `1`. Returns `None` when no digit follows, or when
/// the digits don't fit in an `i64`.
pub fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
