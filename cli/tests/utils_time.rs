use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use next_holiday::utils::time::{now_in_timezone, parse_timezone, today_local, DateLayout};

#[test]
fn time_now_in_kyiv_returns_kyiv_datetime() {
    let tz: Tz = "Europe/Kiev".parse().unwrap();
    let result = now_in_timezone(&tz);
    assert_eq!(result.timezone(), tz);
}

#[test]
fn time_today_local_different_timezones() {
    let kyiv: Tz = "Europe/Kiev".parse().unwrap();
    let pst: Tz = "America/Los_Angeles".parse().unwrap();

    let kyiv_date = today_local(&kyiv);
    let pst_date = today_local(&pst);

    let diff_days = (kyiv_date - pst_date).num_days().abs();
    assert!(diff_days <= 1);
}

#[test]
fn time_today_local_is_close_to_utc_today() {
    let tz: Tz = chrono_tz::UTC;
    let result = today_local(&tz);
    let diff_days = (result - Utc::now().date_naive()).num_days().abs();
    assert!(diff_days <= 1);
}

#[test]
fn time_parse_timezone_accepts_iana_names() {
    assert_eq!(parse_timezone("Asia/Tokyo").unwrap(), chrono_tz::Asia::Tokyo);
    assert!(parse_timezone("Tokyo").is_err());
}

#[test]
fn time_layout_round_trip_is_deterministic() {
    let api = DateLayout::new("%Y-%m-%d").unwrap();
    let output = DateLayout::new("%b %d").unwrap();

    let rendered: Vec<String> = (0..3)
        .map(|_| output.format(api.parse("2020-10-14").unwrap()))
        .collect();

    assert_eq!(rendered, vec!["Oct 14"; 3]);
    assert_eq!(
        api.parse("2020-10-14").unwrap(),
        NaiveDate::from_ymd_opt(2020, 10, 14).unwrap()
    );
}

#[test]
fn time_layout_deserializes_from_json() {
    let layout: DateLayout = serde_json::from_str(r#""%d.%m.%Y""#).unwrap();
    assert_eq!(layout.format(NaiveDate::from_ymd_opt(2020, 6, 28).unwrap()), "28.06.2020");
    assert!(serde_json::from_str::<DateLayout>(r#""%H:%M""#).is_err());
}
