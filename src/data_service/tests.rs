use super::DataService;
use crate::errors::ServiceError;
use crate::models::{CreatorInput, NewPlan, PrivacyLevel, ProfileUpdate, SettingsUpdate, UserSettings};

fn service() -> DataService {
    DataService::new(false)
}

fn sample_plan() -> NewPlan {
    NewPlan {
        title: "T".to_string(),
        venue: "V".to_string(),
        date: "2025-01-01".to_string(),
        time: "9PM".to_string(),
        budget: Some(1000),
        creator_id: Some("u1".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn club_list_is_stable_across_calls() {
    let svc = service();
    let first = svc.list_clubs().await;
    let second = svc.list_clubs().await;
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[tokio::test]
async fn club_lookup_by_id() {
    let svc = service();
    let club = svc.get_club("1").await.unwrap();
    assert_eq!(club.name, "Skybar Lounge");
    assert_eq!(club.entry_price, 1500);
    assert!(svc.get_club("does-not-exist").await.is_none());
}

#[tokio::test]
async fn created_plan_goes_first_with_no_participants() {
    let svc = service();
    let before = svc.list_plans().await.len();

    let plan_id = svc.create_plan(sample_plan()).await;
    let plans = svc.list_plans().await;

    assert_eq!(plans.len(), before + 1);
    let plan = &plans[0];
    assert_eq!(plan.id, plan_id);
    assert!(plan.participants.is_empty());
    assert_eq!(plan.budget, 1000);
    assert_eq!(plan.creator.id, "u1");
    assert_eq!(plan.creator.name, "You");
}

#[tokio::test]
async fn plan_creator_falls_back_to_default_identity() {
    let svc = service();
    let mut new_plan = sample_plan();
    new_plan.creator_id = None;
    new_plan.creator = Some(CreatorInput {
        name: Some("Rahul".to_string()),
        avatar: None,
    });

    svc.create_plan(new_plan).await;
    let creator = svc.list_plans().await[0].creator.clone();
    assert_eq!(creator.id, "1");
    assert_eq!(creator.name, "Rahul");
    assert_eq!(creator.avatar, "https://i.pravatar.cc/150?img=1");
}

#[tokio::test]
async fn rapid_plan_creation_yields_distinct_ids() {
    let svc = service();
    let a = svc.create_plan(sample_plan()).await;
    let b = svc.create_plan(sample_plan()).await;
    assert_ne!(a, b);
    let plans = svc.list_plans().await;
    assert_eq!(plans[0].id, b);
    assert_eq!(plans[1].id, a);
}

#[tokio::test]
async fn appended_message_is_listed() {
    let svc = service();
    let message_id = svc.append_message("c1", "u1", "hi").await;

    let messages = svc.list_messages("c1").await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, message_id);
    assert_eq!(messages[0].message, "hi");
    assert_eq!(messages[0].chat_id, "c1");
    assert!(svc.list_messages("c2").await.is_empty());
}

#[tokio::test]
async fn messages_keep_append_order() {
    let svc = service();
    svc.append_message("c1", "u1", "first").await;
    svc.append_message("c1", "u2", "second").await;

    let texts: Vec<String> = svc
        .list_messages("c1")
        .await
        .into_iter()
        .map(|m| m.message)
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[tokio::test]
async fn sender_resolved_from_known_profile() {
    let svc = service();
    let user = svc.signup("Priya", "priya@example.com", "pw").await.unwrap();

    svc.append_message("c1", &user.id, "hello").await;
    svc.append_message("c1", "stranger", "hey").await;

    let messages = svc.list_messages("c1").await;
    assert_eq!(messages[0].sender_name, "Priya");
    assert_eq!(messages[0].sender_avatar, user.avatar);
    assert_eq!(messages[1].sender_name, "You");
}

#[tokio::test]
async fn settings_default_without_write() {
    let svc = service();
    let settings = svc.get_settings("new-user").await;
    assert_eq!(
        settings,
        UserSettings {
            dark_mode: true,
            language: "en".to_string(),
            notifications: true,
            privacy_level: PrivacyLevel::Public,
        }
    );
}

#[tokio::test]
async fn settings_write_replaces_whole_record() {
    let svc = service();
    let first = SettingsUpdate {
        dark_mode: Some(false),
        language: Some("hi".to_string()),
        ..Default::default()
    };
    svc.put_settings("u1", first.into_settings()).await;
    assert_eq!(svc.get_settings("u1").await.language, "hi");

    let second = SettingsUpdate {
        privacy_level: Some(PrivacyLevel::Friends),
        ..Default::default()
    };
    svc.put_settings("u1", second.into_settings()).await;

    let stored = svc.get_settings("u1").await;
    assert_eq!(stored.privacy_level, PrivacyLevel::Friends);
    assert_eq!(stored.language, "en");
    assert!(stored.dark_mode);
    assert_eq!(svc.get_settings("u2").await, UserSettings::default());
}

#[tokio::test]
async fn login_requires_both_fields() {
    let svc = service();
    assert_eq!(
        svc.login("", "").await,
        Err(ServiceError::Validation("Invalid credentials".to_string()))
    );
    assert!(svc.login("a@b.com", "").await.is_err());

    let user = svc.login("a@b.com", "x").await.unwrap();
    assert_eq!(user.name, "a");
    assert_eq!(user.email, "a@b.com");
}

#[tokio::test]
async fn signup_synthesizes_identity() {
    let svc = service();
    assert_eq!(
        svc.signup("Neha", "", "pw").await,
        Err(ServiceError::Validation("Invalid input".to_string()))
    );

    let a = svc.signup("Neha", "neha@example.com", "pw").await.unwrap();
    let b = svc.signup("Neha", "neha@example.com", "pw").await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.name, "Neha");
    assert!(a.avatar.starts_with("https://i.pravatar.cc/150?img="));
}

#[tokio::test]
async fn profile_update_renames_sender() {
    let svc = service();
    svc.login("karan@example.com", "pw").await.unwrap();
    svc.update_profile(
        "1",
        ProfileUpdate {
            name: Some("Karan".to_string()),
            email: None,
        },
    )
    .await;

    svc.append_message("c9", "1", "on my way").await;
    let messages = svc.list_messages("c9").await;
    assert_eq!(messages[0].sender_name, "Karan");
}

#[tokio::test(start_paused = true)]
async fn operations_wait_out_simulated_latency() {
    let svc = DataService::new(true);
    let started = tokio::time::Instant::now();
    svc.login("a@b.com", "x").await.unwrap();
    assert!(started.elapsed() >= super::AUTH_DELAY);
}
