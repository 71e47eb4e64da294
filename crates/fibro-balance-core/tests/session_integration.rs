//! Integration tests for a full tracking session over SQLite storage.

use std::sync::Arc;

use chrono::NaiveDate;
use fibro_balance_core::storage::database::DATABASE_FILE;
use fibro_balance_core::{
    Averages, Confirmation, EntryDraft, Event, FixedClock, Session, SqliteGateway, StateGateway,
};

fn day(s: &str) -> NaiveDate {
    fibro_balance_core::parse_date(s).unwrap()
}

fn draft(date: &str, pain: &str, fatigue: &str, sleep: &str, stress: &str) -> EntryDraft {
    EntryDraft {
        date: Some(day(date)),
        pain: Some(pain.into()),
        fatigue: Some(fatigue.into()),
        mood: Some("3".into()),
        sleep: Some(sleep.into()),
        stress: Some(stress.into()),
        notes: None,
    }
}

fn open(dir: &tempfile::TempDir, clock: &FixedClock) -> Session {
    let gateway = SqliteGateway::open_at(&dir.path().join(DATABASE_FILE)).unwrap();
    Session::start(Box::new(gateway), Arc::new(clock.clone()))
}

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::new(day("2024-03-01"));

    {
        let mut session = open(&dir, &clock);
        session.save_entry(&draft("2024-03-01", "4", "6", "7", "2"));
        session.save_entry(&draft("2024-02-29", "6", "4", "5", "4"));
        session.set_capacity("12");
        session.complete_exercise("stretch-5").unwrap();
    }

    let session = open(&dir, &clock);
    assert_eq!(session.state().entries.len(), 2);
    assert_eq!(session.budget().total(), 12);
    assert_eq!(session.budget().used(), 1);
    assert_eq!(
        session.averages(),
        Averages { pain: 5.0, fatigue: 5.0, sleep: 6.0, stress: 3.0 }
    );
}

#[test]
fn test_restart_on_next_day_rolls_budget() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::new(day("2024-01-01"));

    {
        let mut session = open(&dir, &clock);
        session.set_capacity("15");
        session.consume_spoons(9);
    }

    clock.set(day("2024-01-02"));
    let session = open(&dir, &clock);
    assert_eq!(session.budget().date(), day("2024-01-02"));
    assert_eq!(session.budget().total(), 15);
    assert_eq!(session.budget().used(), 0);
}

#[test]
fn test_resave_same_date_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::new(day("2024-03-01"));
    let mut session = open(&dir, &clock);

    session.save_entry(&draft("2024-03-01", "2", "2", "8", "1"));
    let outcome = session.save_entry(&draft("2024-03-01", "9", "2", "8", "1"));
    assert!(matches!(outcome.event, Event::EntrySaved { replaced: true, .. }));
    assert_eq!(session.state().entries.len(), 1);
    assert_eq!(session.entry(day("2024-03-01")).unwrap().pain, 9);
}

#[test]
fn test_export_matches_store() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::new(day("2024-03-01"));
    let mut session = open(&dir, &clock);

    session.save_entry(&EntryDraft {
        date: Some(day("2024-03-01")),
        pain: Some("5".into()),
        fatigue: Some("3".into()),
        mood: Some("4".into()),
        sleep: Some("8".into()),
        stress: Some("2".into()),
        notes: Some("ok".into()),
    });

    assert_eq!(
        session.export_csv(),
        "date,pain,fatigue,mood,sleep,stress,notes\n2024-03-01,5,3,4,8,2,ok"
    );
}

#[test]
fn test_confirmed_reset_removes_stored_record() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::new(day("2024-03-01"));
    let path = dir.path().join(DATABASE_FILE);

    {
        let mut session = open(&dir, &clock);
        session.save_entry(&draft("2024-03-01", "4", "4", "7", "3"));
        session.set_capacity("20");

        assert!(session.reset_all(Confirmation::Declined).is_none());
        assert_eq!(session.state().entries.len(), 1);

        assert!(session.reset_all(Confirmation::Confirmed).is_some());
    }

    let raw = SqliteGateway::open_at(&path).unwrap();
    assert!(raw.load().unwrap().is_none());

    let session = open(&dir, &clock);
    assert!(session.state().entries.is_empty());
    assert_eq!(session.budget().total(), 10);
}

#[test]
fn test_trend_and_recent_views() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::new(day("2024-03-31"));
    let mut session = open(&dir, &clock);

    for d in 1..=20 {
        session.save_entry(&draft(&format!("2024-03-{d:02}"), "3", "3", "7", "3"));
    }

    let trend = session.trend(14);
    assert_eq!(trend.len(), 14);
    assert_eq!(trend[0].date, day("2024-03-07"));

    let recent = session.recent_entries(10);
    assert_eq!(recent[0].date, day("2024-03-20"));
    assert_eq!(recent.len(), 10);
}
