use serde::Deserialize;

/// A user as returned by the `/users` resource.
///
/// Only the fields the report needs are declared; anything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Address {
    pub geo: Geo,
}

/// Coordinates exactly as the API sends them: decimal strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

impl User {
    #[cfg(test)]
    pub fn new(id: i64, name: impl Into<String>, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: Address {
                geo: Geo {
                    lat: lat.into(),
                    lng: lng.into(),
                },
            },
        }
    }

    /// Parsed `(lat, lng)`.
    ///
    /// Each coordinate is read from its longest leading decimal number, so trailing junk such as
    /// `"-10°"` still yields -10. A coordinate with no leading number comes back as NaN.
    pub fn coordinates(&self) -> (f64, f64) {
        (parse_coordinate(&self.address.geo.lat), parse_coordinate(&self.address.geo.lng))
    }
}

fn parse_coordinate(raw: &str) -> f64 {
    let text = raw.trim_start();
    let end = numeric_prefix_len(text);
    if end == 0 {
        return f64::NAN;
    }
    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Byte length of the leading `[+-]digits[.digits][e[+-]digits]` (or `[+-]Infinity`) in `text`.
///
/// Zero when `text` does not start with a number.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| bytes[start.min(bytes.len())..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        return end + "Infinity".len();
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    end
}
