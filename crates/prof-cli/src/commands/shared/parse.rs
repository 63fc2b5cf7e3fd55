use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use anyhow::Context;
use chrono::{DateTime, Utc};
use prof_core::enums::HiringSemester;
use prof_core::serde_util::parse_datetime;

/// Parse a choice flag through its `FromStr`, naming the flag on failure.
pub fn parse_choice<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    parse_datetime(raw).with_context(|| format!("invalid {field}"))
}

/// `none` or a blank value clears the date.
pub fn parse_clearable_date(raw: &str, field: &str) -> anyhow::Result<Option<DateTime<Utc>>> {
    if is_clear(raw) {
        Ok(None)
    } else {
        parse_date(raw, field).map(Some)
    }
}

/// `none` or a blank value clears the semester.
pub fn parse_clearable_semester(raw: &str) -> anyhow::Result<Option<HiringSemester>> {
    if is_clear(raw) {
        Ok(None)
    } else {
        parse_choice(raw, "semester").map(Some)
    }
}

fn is_clear(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none")
}

/// Use the flag value, or read one line from stdin.
pub fn password_or_stdin(provided: Option<&str>) -> anyhow::Result<String> {
    if let Some(password) = provided {
        return Ok(password.to_string());
    }
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("password is required (pass --password or pipe it on stdin)");
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use prof_core::enums::TriState;
    use prof_query::RecruitingFilter;

    use super::*;

    #[test]
    fn choice_errors_name_the_flag() {
        let err = parse_choice::<RecruitingFilter>("maybe", "recruiting").expect_err("should fail");
        assert!(err.to_string().contains("invalid recruiting 'maybe'"));
        assert_eq!(parse_choice::<TriState>("yes", "recruiting-phd").unwrap(), TriState::Yes);
    }

    #[test]
    fn dates_accept_plain_days_and_clear_words() {
        assert_eq!(
            parse_clearable_date("2025-09-01", "deadline").unwrap(),
            Some(Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_clearable_date("none", "deadline").unwrap(), None);
        assert!(parse_date("next week", "deadline").is_err());
    }

    #[test]
    fn semester_clear_and_parse() {
        assert_eq!(parse_clearable_semester("NONE").unwrap(), None);
        assert_eq!(
            parse_clearable_semester("spring").unwrap(),
            Some(HiringSemester::Spring)
        );
    }

    #[test]
    fn explicit_password_skips_stdin() {
        assert_eq!(password_or_stdin(Some("hunter22")).unwrap(), "hunter22");
    }
}
