//! Utility helpers for AnimeStream

use chrono::Weekday;

/// Turn a URL slug such as `one-piece` into a display title (`One Piece`).
/// Groups of `-`/`_` collapse to a single space.
pub fn title_from_slug<S: AsRef<str>>(slug: S) -> String {
    slug.as_ref()
        .split(|ch: char| ch == '-' || ch == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `m:ss` below an hour, `h:mm:ss` above. Non-finite or negative input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hrs = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hrs > 0 {
        format!("{hrs}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

/// Day names as the schedule endpoint spells them.
pub fn schedule_day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Minggu",
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_titles() {
        assert_eq!(title_from_slug("one-piece"), "One Piece");
        assert_eq!(title_from_slug("slice_of--life"), "Slice Of Life");
        assert_eq!(title_from_slug(""), "");
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(3725.0), "1:02:05");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-4.0), "0:00");
    }

    #[test]
    fn schedule_days_are_indonesian() {
        assert_eq!(schedule_day_name(Weekday::Sun), "Minggu");
        assert_eq!(schedule_day_name(Weekday::Fri), "Jumat");
    }
}
