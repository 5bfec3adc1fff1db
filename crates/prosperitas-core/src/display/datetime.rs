//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` formatted in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shape() {
        let ts = Timestamp::from_second(1_700_000_000).expect("valid timestamp");
        let output = LocalDateTime(&ts).to_string();
        // Date and time parts are fixed width regardless of timezone
        assert_eq!(output.as_bytes()[4], b'-');
        assert_eq!(output.as_bytes()[10], b' ');
        assert_eq!(output.as_bytes()[13], b':');
    }
}
