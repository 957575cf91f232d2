use crate::foundation::core::Point;

/// Parses point lists encoded as `x10y20x30y40`.
///
/// The input is split on `row` into chunks, and each chunk is split on `pair` into an
/// x token and a y token. Chunks whose tokens are not integers are dropped silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointListParser {
    row: char,
    pair: char,
}

impl Default for PointListParser {
    fn default() -> Self {
        Self { row: 'x', pair: 'y' }
    }
}

impl PointListParser {
    /// Parser with custom delimiters.
    pub fn new(row: char, pair: char) -> Self {
        Self { row, pair }
    }

    /// Decode every well-formed point in `encoded`, in order of appearance.
    pub fn parse(&self, encoded: &str) -> Vec<Point> {
        encoded
            .split(self.row)
            .filter_map(|chunk| {
                let mut tokens = chunk.split(self.pair);
                let x = parse_leading_int(tokens.next()?)?;
                let y = parse_leading_int(tokens.next()?)?;
                Some(Point::new(x, y))
            })
            .collect()
    }
}

/// Decode `encoded` with the default `x`/`y` delimiters.
pub fn parse_points(encoded: &str) -> Vec<Point> {
    PointListParser::default().parse(encoded)
}

/// Lenient integer parse: leading whitespace, optional sign, then digits. Anything after
/// the digits is ignored (`"12px"` is 12). `None` without digits or on `i32` overflow.
fn parse_leading_int(token: &str) -> Option<i32> {
    let s = token.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

#[cfg(test)]
#[path = "../tests/unit/coords.rs"]
mod tests;
