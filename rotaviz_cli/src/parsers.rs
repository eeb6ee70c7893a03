use jiff::SpanRelativeTo;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    let duration = if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        duration
    } else if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        duration
    } else if let Ok(seconds) = input.parse::<i64>() {
        jiff::SignedDuration::from_secs(seconds.abs())
    } else {
        return Err(String::from("Invalid duration"));
    };

    if duration.is_negative() {
        return Err(String::from("Duration must not be negative"));
    }

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(
            parse_duration("30s").unwrap(),
            jiff::SignedDuration::from_secs(30)
        );
        assert_eq!(
            parse_duration("PT1M").unwrap(),
            jiff::SignedDuration::from_secs(60)
        );
        assert_eq!(
            parse_duration("45").unwrap(),
            jiff::SignedDuration::from_secs(45)
        );
        assert!(parse_duration("soon").is_err());
    }
}
