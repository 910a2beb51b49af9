//! Ledger and reporting scenarios: registration through the workflow layer,
//! clock-anchored totals, and the dashboard bundle over the seed dataset.

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use dime_app::{workflows, AppConfig, AppCore, NO_TRIBE_LABEL};
use dime_core::{ChurchInfoUpdate, KpiValue, MemberId, NewTithe, Tribe};
use dime_effects::{FixedClock, MemoryStorage};

fn mid_january() -> Arc<FixedClock> {
    Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0)
            .single()
            .expect("valid instant"),
    ))
}

fn core_over(clock: Arc<FixedClock>, storage: MemoryStorage) -> AppCore {
    AppCore::new(AppConfig::default(), clock, Arc::new(storage))
}

fn draft(member: &str, amount: u64, date: NaiveDate) -> NewTithe {
    NewTithe {
        member_id: MemberId::from(member),
        amount,
        date,
    }
}

#[tokio::test]
async fn test_month_total_tracks_the_clock() {
    let clock = mid_january();
    let app = core_over(clock.clone(), MemoryStorage::new());

    assert_eq!(app.total_tithes_this_month().await.expect("total"), 17500);

    clock.set(
        Utc.with_ymd_and_hms(2025, 12, 25, 9, 0, 0)
            .single()
            .expect("valid instant"),
    );
    assert_eq!(app.total_tithes_this_month().await.expect("total"), 15000);

    clock.set(
        Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0)
            .single()
            .expect("valid instant"),
    );
    assert_eq!(app.total_tithes_this_month().await.expect("total"), 0);
}

#[tokio::test]
async fn test_member_history_is_most_recent_first() {
    let app = core_over(mid_january(), MemoryStorage::new());
    let ledger = app.tithes().get();

    let ids: Vec<&str> = ledger
        .for_member(&MemberId::from("1"))
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["t3", "t1"]);
}

#[tokio::test]
async fn test_registration_lands_in_totals_and_survives_a_restart() {
    let storage = MemoryStorage::new();
    let app = core_over(mid_january(), storage.clone());

    let id = workflows::register_tithe(
        &app,
        draft("4", 3000, NaiveDate::from_ymd_opt(2026, 1, 14).expect("valid date")),
    )
    .await
    .expect("registration should succeed");

    assert_eq!(app.tithes().get().count(), 5);
    assert_eq!(app.total_tithes_this_month().await.expect("total"), 20500);

    let restored = AppCore::load(AppConfig::default(), mid_january(), Arc::new(storage))
        .await
        .expect("load should succeed");
    let ledger = restored.tithes().get();
    assert_eq!(ledger.count(), 5);
    assert_eq!(
        ledger.for_member(&MemberId::from("4"))[0].id,
        id
    );
}

#[tokio::test]
async fn test_ledger_tolerates_a_dangling_member_reference() {
    let app = core_over(mid_january(), MemoryStorage::new());

    workflows::register_tithe(
        &app,
        draft("departed", 99999, NaiveDate::from_ymd_opt(2026, 1, 20).expect("valid date")),
    )
    .await
    .expect("registration should succeed");

    let ledger = app.tithes().get();
    let directory = app.members().get();
    assert_eq!(ledger.count(), 5);
    // the orphaned amount counts in totals but moves no tribe
    assert_eq!(ledger.total_for_month(NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date")), 117_499);
    assert_eq!(ledger.most_generous_tribe(&directory), Some(Tribe::Levi));
}

#[tokio::test]
async fn test_generosity_ranking_shifts_with_new_contributions() {
    let app = core_over(mid_january(), MemoryStorage::new());
    assert_eq!(
        app.tithes().get().most_generous_tribe(&app.members().get()),
        Some(Tribe::Levi)
    );

    // member "2" belongs to Benjamin; push the tribe past Lévi's 15 000
    workflows::register_tithe(
        &app,
        draft("2", 6000, NaiveDate::from_ymd_opt(2026, 1, 16).expect("valid date")),
    )
    .await
    .expect("registration should succeed");

    assert_eq!(
        app.tithes().get().most_generous_tribe(&app.members().get()),
        Some(Tribe::Benjamin)
    );
}

#[tokio::test]
async fn test_daily_evolution_spans_the_whole_month() {
    let app = core_over(mid_january(), MemoryStorage::new());

    let series = app.daily_evolution().await.expect("series");
    // one zero-filled point per January day, contributions added onto theirs
    assert_eq!(series.len(), 31);
    let contributing: Vec<u32> = series
        .iter()
        .filter(|p| p.amount > 0)
        .map(|p| chrono::Datelike::day(&p.date))
        .collect();
    assert_eq!(contributing, vec![5, 10, 12]);
    assert_eq!(series.iter().map(|p| p.amount).sum::<u64>(), 17500);
}

#[tokio::test]
async fn test_reports_bundle_over_the_seed_dataset() {
    let app = core_over(mid_january(), MemoryStorage::new());
    let reports = app.reports().await.expect("reports");

    assert_eq!(reports.kpis.len(), 4);
    assert_eq!(reports.kpis[0].title, "Dîmes du mois");
    assert_eq!(reports.kpis[0].value, KpiValue::Amount(17500));
    // December closed at 15 000, January stands at 17 500
    let change = reports.kpis[0].change.expect("previous month baseline");
    assert!((change - 16.666_666).abs() < 0.001, "{change}");

    assert_eq!(reports.kpis[1].value, KpiValue::Count(15));
    assert_eq!(
        reports.kpis[2].value,
        KpiValue::Text("Lévi".to_string())
    );
    assert_eq!(reports.kpis[3].value, KpiValue::Amount(32500));

    // only January 2026 has contributions this year
    assert_eq!(reports.evolution.len(), 1);
    assert_eq!(reports.evolution[0].month, "2026-01");
    assert_eq!(reports.evolution[0].amount, 17500);

    let tribe_order: Vec<Tribe> = reports.tribes.iter().map(|t| t.tribe).collect();
    assert_eq!(tribe_order, vec![Tribe::Levi, Tribe::Juda, Tribe::Benjamin]);

    let counts: Vec<u64> = reports.age_pyramid.iter().map(|g| g.count).collect();
    assert_eq!(counts, vec![0, 2, 7, 4, 2, 0]);
    assert_eq!(counts.iter().sum::<u64>(), 15);
}

#[tokio::test]
async fn test_reports_fall_back_to_the_no_tribe_sentinel() {
    let app = core_over(mid_january(), MemoryStorage::new());
    app.tithes().set(Default::default());

    let reports = app.reports().await.expect("reports");
    assert_eq!(
        reports.kpis[2].value,
        KpiValue::Text(NO_TRIBE_LABEL.to_string())
    );
    assert!(reports.tribes.is_empty());
    assert!(reports.evolution.is_empty());
}

#[tokio::test]
async fn test_church_profile_updates_persist() {
    let storage = MemoryStorage::new();
    let app = core_over(mid_january(), storage.clone());

    workflows::update_church_info(
        &app,
        ChurchInfoUpdate {
            email: Some("tresorerie@geremadime.cm".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("update should succeed");

    let renamed = workflows::set_tribe_manager(&app, Tribe::Juda, "Léa Bella")
        .await
        .expect("rename should succeed");
    assert!(renamed);

    let restored = AppCore::load(AppConfig::default(), mid_january(), Arc::new(storage))
        .await
        .expect("load should succeed");
    let church = restored.church().get();
    assert_eq!(church.info.email, "tresorerie@geremadime.cm");
    // untouched fields keep their seeded values
    assert_eq!(church.info.currency, "XAF");
    assert_eq!(
        church.manager_for(Tribe::Juda).map(|m| m.manager_name.as_str()),
        Some("Léa Bella")
    );
}
