use caraday_db::models::wiki_summary::UpsertWikiSummary;
use caraday_db::repositories::WikiSummaryRepo;
use chrono::{Duration, Utc};
use sqlx::PgPool;

fn entry(title: &str, extract: &str, ttl: Duration) -> UpsertWikiSummary {
    let now = Utc::now();
    UpsertWikiSummary {
        lang: "fr".to_string(),
        lookup_title: "Peugeot 208 (II)".to_string(),
        title: title.to_string(),
        extract: extract.to_string(),
        url: "https://fr.wikipedia.org/wiki/Peugeot_208_II".to_string(),
        source: "wikipedia".to_string(),
        fetched_at: now,
        expires_at: now + ttl,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upsert_refreshes_existing_entry(pool: PgPool) {
    let first = WikiSummaryRepo::upsert(&pool, &entry("Peugeot 208 II", "old", Duration::days(30)))
        .await
        .unwrap();
    let second = WikiSummaryRepo::upsert(&pool, &entry("Peugeot 208 II", "new", Duration::days(30)))
        .await
        .unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.extract, "new");

    let fresh = WikiSummaryRepo::find_fresh(&pool, "fr", "Peugeot 208 (II)", Utc::now())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fresh.extract, "new");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_expired_entries_are_not_fresh(pool: PgPool) {
    WikiSummaryRepo::upsert(&pool, &entry("Peugeot 208 II", "stale", Duration::days(-1)))
        .await
        .unwrap();

    let fresh = WikiSummaryRepo::find_fresh(&pool, "fr", "Peugeot 208 (II)", Utc::now())
        .await
        .unwrap();
    assert!(fresh.is_none());

    let other_lang = WikiSummaryRepo::find_fresh(&pool, "en", "Peugeot 208 (II)", Utc::now())
        .await
        .unwrap();
    assert!(other_lang.is_none());
}
