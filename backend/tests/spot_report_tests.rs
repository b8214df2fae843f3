mod support;

use chrono_tz::America::Los_Angeles;
use surf_report::api::{SpotId, TimeWindow};
use surf_report::config::ReportSettings;
use surf_report::db::repositories::LocalRepository;
use surf_report::db::SpotRepository;
use surf_report::models::{ChronoTzResolver, FixedClock};
use surf_report::services::build_spot_report;
use surf_report::services::time_windows::{TimeWindowTable, WindowSpan};

use support::{local, seeded_repository, session, spot, MYSTERY_REEF, PIPELINE, STEAMER_LANE};

#[tokio::test]
async fn test_morning_consensus_shown_in_the_afternoon() {
    let repo = seeded_repository();
    let clock = FixedClock(support::afternoon_in_santa_cruz());

    let report = build_spot_report(
        &repo,
        SpotId::new(STEAMER_LANE),
        &clock,
        &ChronoTzResolver,
        &ReportSettings::default(),
    )
    .await
    .unwrap();

    assert_eq!(report.latest_consensus_time, TimeWindow::Morning);
    assert_eq!(report.consensus.morning.session_count, 3);
    assert_eq!(report.consensus.morning.rating.as_deref(), Some("fun"));
    assert_eq!(report.consensus.morning.wave_height.as_deref(), Some("chest"));
    assert_eq!(report.consensus.midday.session_count, 0);
    assert!(report.consensus.midday.rating.is_none());
    assert_eq!(report.consensus.afternoon.session_count, 0);
    assert!(report.has_consensus_today);
    assert_eq!(report.spot_timezone, "America/Los_Angeles");
}

#[tokio::test]
async fn test_recent_sessions_are_today_newest_first() {
    let repo = seeded_repository();
    let clock = FixedClock(support::afternoon_in_santa_cruz());

    let report = build_spot_report(
        &repo,
        SpotId::new(STEAMER_LANE),
        &clock,
        &ChronoTzResolver,
        &ReportSettings::default(),
    )
    .await
    .unwrap();

    let ratings: Vec<_> = report
        .recent_sessions
        .iter()
        .map(|r| r.rating.as_deref().unwrap_or_default())
        .collect();
    // yesterday's private "flat" session is not part of today
    assert_eq!(ratings, vec!["epic", "fun", "fun"]);
}

#[tokio::test]
async fn test_report_uses_spot_timezone() {
    let repo = seeded_repository();
    // 09:00 in Honolulu
    let clock = FixedClock(local(chrono_tz::Pacific::Honolulu, 2024, 6, 3, 9, 0));

    let report = build_spot_report(
        &repo,
        SpotId::new(PIPELINE),
        &clock,
        &ChronoTzResolver,
        &ReportSettings::default(),
    )
    .await
    .unwrap();

    assert_eq!(report.spot_timezone, "Pacific/Honolulu");
    assert_eq!(report.consensus.morning.session_count, 1);
    assert_eq!(report.consensus.morning.rating.as_deref(), Some("epic"));
    assert_eq!(report.latest_consensus_time, TimeWindow::Morning);
}

#[tokio::test]
async fn test_spot_without_sessions_falls_back_to_current_window() {
    let repo = seeded_repository();
    let clock = FixedClock(local(Los_Angeles, 2024, 6, 3, 11, 30));

    let report = build_spot_report(
        &repo,
        SpotId::new(MYSTERY_REEF),
        &clock,
        &ChronoTzResolver,
        &ReportSettings::default(),
    )
    .await
    .unwrap();

    assert!(!report.has_consensus_today);
    assert!(report.recent_sessions.is_empty());
    assert_eq!(report.latest_consensus_time, TimeWindow::Midday);
    // no timezone on the spot
    assert_eq!(report.spot_timezone, "America/Los_Angeles");
}

#[tokio::test]
async fn test_unknown_spot_is_not_found() {
    let repo = LocalRepository::new();
    let err = build_spot_report(
        &repo,
        SpotId::new(404),
        &FixedClock(support::afternoon_in_santa_cruz()),
        &ChronoTzResolver,
        &ReportSettings::default(),
    )
    .await
    .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_custom_window_table() {
    let repo = seeded_repository();
    let settings = ReportSettings {
        time_windows: TimeWindowTable {
            morning: WindowSpan::new(4, 7),
            midday: WindowSpan::new(7, 12),
            afternoon: WindowSpan::new(12, 20),
        },
        ..ReportSettings::default()
    };

    let report = build_spot_report(
        &repo,
        SpotId::new(STEAMER_LANE),
        &FixedClock(support::afternoon_in_santa_cruz()),
        &ChronoTzResolver,
        &settings,
    )
    .await
    .unwrap();

    // 06:00 alone in morning; 07:00 and 09:00 in midday
    assert_eq!(report.consensus.morning.session_count, 1);
    assert_eq!(report.consensus.midday.session_count, 2);
    assert_eq!(report.latest_consensus_time, TimeWindow::Midday);
    assert_eq!(report.time_windows.afternoon, WindowSpan::new(12, 20));
}

#[tokio::test]
async fn test_report_across_dst_start() {
    // 2024-03-10: clocks jump from 02:00 to 03:00 in Los Angeles
    let repo = LocalRepository::new();
    repo.insert_spot(spot(7, "Rincon", "Carpinteria, CA", Some("America/Los_Angeles")));
    repo.insert_session(session(
        70,
        "kai",
        "Rincon",
        local(Los_Angeles, 2024, 3, 10, 1, 30),
        "fun",
        true,
    ));
    repo.insert_session(session(
        71,
        "kai",
        "Rincon",
        local(Los_Angeles, 2024, 3, 10, 5, 0),
        "good",
        true,
    ));

    let spot = repo.get_spot(SpotId::new(7)).await.unwrap().unwrap();
    assert_eq!(repo.fetch_session_reports_for_spot(&spot).await.unwrap().len(), 2);

    let report = build_spot_report(
        &repo,
        SpotId::new(7),
        &FixedClock(local(Los_Angeles, 2024, 3, 10, 6, 0)),
        &ChronoTzResolver,
        &ReportSettings::default(),
    )
    .await
    .unwrap();

    // 05:00 PDT is 12:00 UTC; a fixed -8h offset would put it at 04:00
    assert_eq!(report.consensus.morning.session_count, 1);
    assert_eq!(report.consensus.morning.rating.as_deref(), Some("good"));
    assert_eq!(report.recent_sessions.len(), 2);
}
