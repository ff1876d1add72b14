//! End-to-end notification aggregation tests
//!
//! Exercises the public API the way an embedding application would: wire the
//! in-memory collaborators into a `NotificationService` and fetch feeds for
//! several users against a shared record table.

use std::sync::Arc;

use chirper_notifications::{
    InMemoryRecordStore, InMemoryStatusUpdateStore, InMemoryUserDirectory, NoOpMetricsEmitter,
    Notification, NotificationRecord, NotificationService, StatusUpdate, UserRef,
};
use chirper_notifications::notifications::NOTIFICATIONS_TABLE;

struct TestApp {
    records: Arc<InMemoryRecordStore>,
    status_updates: Arc<InMemoryStatusUpdateStore>,
    users: Arc<InMemoryUserDirectory>,
    service: NotificationService,
}

fn test_app() -> TestApp {
    let records = Arc::new(InMemoryRecordStore::new());
    let status_updates = Arc::new(InMemoryStatusUpdateStore::new());
    let users = Arc::new(InMemoryUserDirectory::new());
    let service = NotificationService::new(
        records.clone(),
        status_updates.clone(),
        users.clone(),
        Arc::new(NoOpMetricsEmitter),
    );
    TestApp {
        records,
        status_updates,
        users,
        service,
    }
}

/// Three users, a handful of interactions between them, and a record of a
/// kind nobody recognizes.
fn seed(app: &TestApp) {
    for user_id in [100, 200, 300] {
        app.users.add_user(user_id);
    }
    app.status_updates.insert(StatusUpdate::new(5000, 100));
    app.status_updates.insert(StatusUpdate::new(5001, 200));
    app.status_updates.insert(StatusUpdate::new(5002, 300));

    let rows: &[(usize, &[&str])] = &[
        (1, &["followed", "200", "100"]),
        (2, &["favorited", "300", "5000"]),
        (3, &["replied", "200", "5000", "5001"]),
        (4, &["reposted", "100", "5001"]),
        (5, &["poll_ended", "200", "5000"]),
    ];
    for (id, fields) in rows {
        app.records.insert(
            NOTIFICATIONS_TABLE,
            NotificationRecord::new(*id, fields.iter().copied()),
        );
    }
}

#[test]
fn test_aggregates_a_full_feed_in_insertion_order() {
    let app = test_app();
    seed(&app);

    let feed = app.service.fetch_notifications(100).unwrap();

    assert_eq!(
        feed,
        vec![
            Notification::Followed {
                follower: UserRef::new(200),
                user: UserRef::new(100),
            },
            Notification::Favorited {
                favoriter: UserRef::new(300),
                status_update: StatusUpdate::new(5000, 100),
            },
            Notification::Replied {
                sender: UserRef::new(200),
                status_update: StatusUpdate::new(5000, 100),
                reply: StatusUpdate::new(5001, 200),
            },
        ]
    );
}

#[test]
fn test_feeds_are_scoped_per_user() {
    let app = test_app();
    seed(&app);

    let feed = app.service.fetch_notifications(200).unwrap();

    assert_eq!(
        feed,
        vec![Notification::Reposted {
            reposter: UserRef::new(100),
            status_update: StatusUpdate::new(5001, 200),
        }]
    );

    let untouched = app.service.fetch_notifications(300).unwrap();
    assert!(untouched.is_empty());
}

#[test]
fn test_feed_serializes_for_the_client() {
    let app = test_app();
    seed(&app);

    let feed = app.service.fetch_notifications(200).unwrap();
    let json = serde_json::to_value(&feed).unwrap();

    assert_eq!(json[0]["kind"], "reposted");
    assert_eq!(json[0]["reposter"]["id"], 100);
    assert_eq!(json[0]["status_update"]["owner_id"], 200);
}
