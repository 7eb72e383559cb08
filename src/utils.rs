use super::*;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

pub(crate) fn host_label(url: &str) -> String {
  match Url::parse(url) {
    Ok(parsed) => parsed
      .host_str()
      .map_or_else(|| "Invalid URL".to_string(), str::to_string),
    Err(error) => {
      debug!(url, %error, "could not parse story url");
      "Invalid URL".to_string()
    }
  }
}

fn plural(count: i64, unit: &str) -> String {
  if count == 1 {
    format!("1 {unit}")
  } else {
    format!("{count} {unit}s")
  }
}

/// Human distance between two instants, e.g. "about 3 hours ago".
pub(crate) fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
  let seconds = (now - then).num_seconds();

  let distance = match seconds.abs() {
    s if s < 30 => "less than a minute".to_string(),
    s if s < 90 => "1 minute".to_string(),
    s if s < 45 * MINUTE => plural((s + 30) / MINUTE, "minute"),
    s if s < 90 * MINUTE => "about 1 hour".to_string(),
    s if s < DAY => {
      format!("about {}", plural((s + 30 * MINUTE) / HOUR, "hour"))
    }
    s if s < 42 * HOUR => "1 day".to_string(),
    s if s < MONTH => plural((s + 12 * HOUR) / DAY, "day"),
    s if s < 45 * DAY => "about 1 month".to_string(),
    s if s < YEAR => plural((s + 15 * DAY) / MONTH, "month"),
    s => format!("about {}", plural(s / YEAR, "year")),
  };

  if seconds < 0 {
    format!("in {distance}")
  } else {
    format!("{distance} ago")
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    Some((end, _)) => format!("{}...", text[..end].trim_end()),
    None => text.to_string(),
  }
}
