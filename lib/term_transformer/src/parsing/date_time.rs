use chrono::{FixedOffset, NaiveDate};
use nom::branch::alt;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::{char as char_func, digit1, one_of};
use nom::combinator::{all_consuming, map_opt, map_res, opt, recognize, verify};
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;
use representation::XsdDateTime;
use std::str::FromStr;

const MAX_OFFSET_MINUTES: u32 = 14 * 60;

struct DateTimeParts<'a> {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    fraction: Option<&'a str>,
    offset: Option<FixedOffset>,
}

/// Parses `-?YYYY-MM-DDThh:mm:ss(.s+)?(Z|(+|-)hh:mm)?`.
pub fn parse_date_time(lexical: &str) -> Option<XsdDateTime> {
    let (_, parts) = all_consuming(date_time_lexical)(lexical).ok()?;
    parts.into_date_time()
}

impl DateTimeParts<'_> {
    fn into_date_time(self) -> Option<XsdDateTime> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?;
        let date_time = if self.hour == 24 {
            // 24:00:00 is the first instant of the next day
            let zero_fraction = self.fraction.map_or(true, |f| f.bytes().all(|b| b == b'0'));
            if self.minute != 0 || self.second != 0 || !zero_fraction {
                return None;
            }
            date.succ_opt()?.and_hms_opt(0, 0, 0)?
        } else {
            let nanos = self.fraction.map_or(0, fraction_nanos);
            date.and_hms_nano_opt(self.hour, self.minute, self.second, nanos)?
        };
        Some(XsdDateTime::new(date_time, self.offset))
    }
}

// Digits beyond nanosecond precision are dropped
fn fraction_nanos(f: &str) -> u32 {
    f.bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn date_time_lexical(d: &str) -> IResult<&str, DateTimeParts<'_>> {
    let (d, (year, _, month, _, day, _, hour, _, minute, _, second, fraction, offset)) =
        tuple((
            year,
            char_func('-'),
            two_digits,
            char_func('-'),
            two_digits,
            char_func('T'),
            two_digits,
            char_func(':'),
            two_digits,
            char_func(':'),
            two_digits,
            opt(preceded(char_func('.'), digit1)),
            opt(timezone),
        ))(d)?;
    Ok((
        d,
        DateTimeParts {
            year,
            month,
            day,
            hour,
            minute,
            second,
            fraction,
            offset,
        },
    ))
}

fn year(y: &str) -> IResult<&str, i32> {
    map_res(
        verify(recognize(pair(opt(char_func('-')), digit1)), |s: &str| {
            let negative = s.starts_with('-');
            let digits = s.trim_start_matches('-');
            // Four digits at least, no leading zero beyond that, and no negative zero
            (digits.len() == 4 || (digits.len() > 4 && !digits.starts_with('0')))
                && !(negative && digits.bytes().all(|b| b == b'0'))
        }),
        i32::from_str,
    )(y)
}

fn two_digits(d: &str) -> IResult<&str, u32> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), u32::from_str)(d)
}

fn timezone(t: &str) -> IResult<&str, FixedOffset> {
    alt((
        map_opt(char_func('Z'), |_| FixedOffset::east_opt(0)),
        map_opt(
            tuple((one_of("+-"), two_digits, char_func(':'), two_digits)),
            |(sign, hours, _, minutes)| {
                let total = hours * 60 + minutes;
                if minutes > 59 || total > MAX_OFFSET_MINUTES {
                    return None;
                }
                let seconds = i32::try_from(total * 60).ok()?;
                if sign == '-' {
                    FixedOffset::west_opt(seconds)
                } else {
                    FixedOffset::east_opt(seconds)
                }
            },
        ),
    ))(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_utc_date_time() {
        let dt = parse_date_time("2022-01-02T03:04:05Z").unwrap();
        assert_eq!(dt.naive_local(), naive(2022, 1, 2, 3, 4, 5));
        assert_eq!(dt.to_utc(), Some(naive(2022, 1, 2, 3, 4, 5).and_utc()));
    }

    #[test]
    fn test_offsets() {
        let dt = parse_date_time("2022-01-02T03:04:05-05:30").unwrap();
        assert_eq!(dt.offset(), FixedOffset::west_opt(5 * 3600 + 30 * 60));
        assert_eq!(dt.to_utc(), Some(naive(2022, 1, 2, 8, 34, 5).and_utc()));
        assert!(parse_date_time("2022-01-02T03:04:05+14:00").is_some());
        assert!(parse_date_time("2022-01-02T03:04:05+14:01").is_none());
        assert!(parse_date_time("2022-01-02T03:04:05+01:60").is_none());
    }

    #[test]
    fn test_without_timezone() {
        let dt = parse_date_time("2000-01-01T00:00:00").unwrap();
        assert!(!dt.has_timezone());
        assert_eq!(dt.naive_local(), naive(2000, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_fractional_seconds() {
        let dt = parse_date_time("2022-01-02T03:04:05.1234567891Z").unwrap();
        assert_eq!(
            dt.naive_local(),
            NaiveDate::from_ymd_opt(2022, 1, 2)
                .unwrap()
                .and_hms_nano_opt(3, 4, 5, 123_456_789)
                .unwrap()
        );
        assert!(parse_date_time("2022-01-02T03:04:05.Z").is_none());
    }

    #[test]
    fn test_end_of_day() {
        let dt = parse_date_time("1999-12-31T24:00:00").unwrap();
        assert_eq!(dt.naive_local(), naive(2000, 1, 1, 0, 0, 0));
        assert!(parse_date_time("1999-12-31T24:00:00.000").is_some());
        assert!(parse_date_time("1999-12-31T24:00:01").is_none());
    }

    #[test]
    fn test_calendar_validation() {
        assert!(parse_date_time("2024-02-29T00:00:00").is_some());
        assert!(parse_date_time("2023-02-29T00:00:00").is_none());
        assert!(parse_date_time("2023-04-31T00:00:00").is_none());
        assert!(parse_date_time("2023-13-01T00:00:00").is_none());
        assert!(parse_date_time("2023-01-01T23:60:00").is_none());
        assert!(parse_date_time("2023-01-01T23:00:60").is_none());
    }

    #[test]
    fn test_years() {
        assert_eq!(
            parse_date_time("-0044-03-15T12:00:00").unwrap().naive_local(),
            naive(-44, 3, 15, 12, 0, 0)
        );
        assert!(parse_date_time("12022-01-01T00:00:00").is_some());
        assert!(parse_date_time("02022-01-01T00:00:00").is_none());
        assert!(parse_date_time("922-01-01T00:00:00").is_none());
        assert!(parse_date_time("-0000-01-01T00:00:00").is_none());
    }

    #[test]
    fn test_malformed() {
        for invalid in [
            "",
            "apple",
            "2022-01-02",
            "2022-01-02 03:04:05",
            "2022-1-02T03:04:05",
            "2022-01-02T03:04:05ZZ",
            "2022-01-02T03:04:05+0100",
            " 2022-01-02T03:04:05",
        ] {
            assert!(parse_date_time(invalid).is_none(), "{invalid}");
        }
    }
}
