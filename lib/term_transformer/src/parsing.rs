mod date_time;
mod numeric;

pub use date_time::parse_date_time;
pub use numeric::{parse_decimal, parse_double, parse_float, parse_integer};

/// `true` and `1` are true, `false` and `0` are false.
pub fn parse_boolean(lexical: &str) -> Option<bool> {
    match lexical {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
