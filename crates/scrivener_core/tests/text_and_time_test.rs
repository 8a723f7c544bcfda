use chrono::{TimeZone, Utc};
use scrivener_core::{CreativeMode, Genre, truncate_for_log, utc_as_string};

#[test]
fn utc_as_string_sub_second_forms() {
    let dt = Utc
        .with_ymd_and_hms(2024, 11, 5, 23, 59, 1)
        .unwrap()
        + chrono::Duration::microseconds(123_456);

    assert_eq!(utc_as_string(&dt, true, true), "20241105_235901.123456");
    assert_eq!(utc_as_string(&dt, false, true), "2024-11-05T23:59:01.123456Z");
}

#[test]
fn truncate_counts_characters_not_bytes() {
    let text = "ééééééééé";
    assert_eq!(truncate_for_log(text, 5), "éé...");
}

#[test]
fn truncate_keeps_text_at_exact_limit() {
    assert_eq!(truncate_for_log("12345", 5), "12345");
    assert_eq!(truncate_for_log("123456", 5), "12...");
}

#[test]
fn genre_maps_to_creative_mode() {
    assert_eq!(Genre::LongformFiction.creative_mode(), CreativeMode::Author);
    assert_eq!(Genre::Podcast.creative_mode(), CreativeMode::Podcast);
    assert_eq!("longform-fiction".parse::<Genre>().unwrap(), Genre::LongformFiction);
    assert_eq!(Genre::LongformFiction.as_ref(), "longform-fiction");
}
