use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use std::fmt::{Display, Formatter};

/// The value of an `xsd:dateTime` literal.
///
/// XSD allows the timezone to be left out, so the local date time and the
/// optional offset are kept apart rather than forced into a [`DateTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XsdDateTime {
    date_time: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl XsdDateTime {
    pub fn new(date_time: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        XsdDateTime { date_time, offset }
    }

    pub fn naive_local(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn has_timezone(&self) -> bool {
        self.offset.is_some()
    }

    pub fn to_fixed_offset(&self) -> Option<DateTime<FixedOffset>> {
        self.offset
            .and_then(|offset| offset.from_local_datetime(&self.date_time).single())
    }

    /// The instant on the UTC time line, if the value has a timezone.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.to_fixed_offset().map(|x| x.with_timezone(&Utc))
    }
}

impl Display for XsdDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date_time.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        match self.offset {
            Some(offset) if offset.local_minus_utc() == 0 => write!(f, "Z"),
            Some(offset) => write!(f, "{offset}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_utc_instant_from_offset() {
        let local = NaiveDate::from_ymd_opt(2022, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let dt = XsdDateTime::new(local, FixedOffset::east_opt(3600));
        let expected = NaiveDate::from_ymd_opt(2022, 1, 2)
            .unwrap()
            .and_hms_opt(2, 4, 5)
            .unwrap()
            .and_utc();
        assert_eq!(dt.to_utc(), Some(expected));
        assert_eq!(dt.to_string(), "2022-01-02T03:04:05+01:00");
    }

    #[test]
    fn test_no_timezone_has_no_instant() {
        let local = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let dt = XsdDateTime::new(local, None);
        assert!(!dt.has_timezone());
        assert_eq!(dt.to_utc(), None);
        assert_eq!(dt.to_string(), "2000-01-01T00:00:00");
    }
}
