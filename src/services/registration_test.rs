use super::*;
use crate::models::avatar::INITIALS_AVATAR;
use crate::services::store::MemoryStorage;
use crate::services::validation::Field;

const KEY: &str = "users";

fn catalog() -> AvatarCatalog {
    AvatarCatalog::from_json(r#"{"avatars":[{"id":1,"name":"alex","url":"https://img/alex.svg"}]}"#)
        .expect("catalog should parse")
}

fn empty_store() -> UserStore<MemoryStorage> {
    UserStore::new(MemoryStorage::new(), KEY)
}

// =============================================================
// submit: happy path
// =============================================================

#[test]
fn first_user_lands_in_empty_store() {
    let store = empty_store();
    let user = submit(&UserDraft::new("Ana", INITIALS_AVATAR), &catalog(), &store).expect("ok");
    assert_eq!(user.username, "Ana");
    assert_eq!(
        store.raw().expect("raw").as_deref(),
        Some(r#"[{"username":"Ana","avatar":"username"}]"#)
    );
}

#[test]
fn users_are_appended_in_order() {
    let store = empty_store();
    for name in ["Ana", "Bruno", "Carla"] {
        submit(&UserDraft::new(name, "alex"), &catalog(), &store).expect("ok");
    }
    let names: Vec<String> = store
        .load()
        .expect("load")
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, ["Ana", "Bruno", "Carla"]);
}

#[test]
fn names_differing_only_in_case_coexist() {
    let store = empty_store();
    submit(&UserDraft::new("Ana", INITIALS_AVATAR), &catalog(), &store).expect("ok");
    submit(&UserDraft::new("ana", INITIALS_AVATAR), &catalog(), &store).expect("ok");
    assert_eq!(store.load().expect("load").len(), 2);
}

// =============================================================
// submit: rejections
// =============================================================

#[test]
fn duplicate_leaves_store_byte_for_byte_unchanged() {
    let seeded = r#"[ {"username":"Ana","avatar":"alex"} ]"#;
    let store = UserStore::new(MemoryStorage::with_item(KEY, seeded), KEY);

    let err = submit(&UserDraft::new("Ana", INITIALS_AVATAR), &catalog(), &store)
        .expect_err("duplicate");
    assert!(matches!(err, SubmitError::Duplicate(ref name) if name == "Ana"));
    assert_eq!(store.raw().expect("raw").as_deref(), Some(seeded));
}

#[test]
fn invalid_draft_never_touches_store() {
    let store = empty_store();
    let err = submit(&UserDraft::new("A", INITIALS_AVATAR), &catalog(), &store).expect_err("short");
    match err {
        SubmitError::Invalid(errors) => assert_eq!(errors[0].field, Field::Username),
        other => panic!("expected Invalid, got {other:?}"),
    }
    assert!(store.raw().expect("raw").is_none());
}

#[test]
fn unknown_avatar_is_rejected_before_storage() {
    let store = empty_store();
    let err = submit(&UserDraft::new("Ana", "dragon"), &catalog(), &store).expect_err("avatar");
    assert!(matches!(err, SubmitError::Invalid(_)));
    assert!(store.raw().expect("raw").is_none());
}

#[test]
fn corrupt_store_is_not_overwritten() {
    let store = UserStore::new(MemoryStorage::with_item(KEY, "garbage"), KEY);
    let err = submit(&UserDraft::new("Ana", INITIALS_AVATAR), &catalog(), &store)
        .expect_err("corrupt");
    assert!(matches!(err, SubmitError::Storage(StoreError::Corrupt(_))));
    assert_eq!(store.raw().expect("raw").as_deref(), Some("garbage"));
}

#[test]
fn append_keeps_existing_entries_verbatim() {
    let seeded = r#"[{"username":"Bob","avatar":"alex","createdAt":"2024-01-01"}]"#;
    let store = UserStore::new(MemoryStorage::with_item(KEY, seeded), KEY);

    submit(&UserDraft::new("Ana", INITIALS_AVATAR), &catalog(), &store).expect("ok");
    assert_eq!(
        store.raw().expect("raw").as_deref(),
        Some(r#"[{"username":"Bob","avatar":"alex","createdAt":"2024-01-01"},{"username":"Ana","avatar":"username"}]"#)
    );
}

#[test]
fn entry_without_avatar_does_not_block_registration() {
    let store = UserStore::new(MemoryStorage::with_item(KEY, r#"[{"username":"Bob"}]"#), KEY);
    submit(&UserDraft::new("Ana", INITIALS_AVATAR), &catalog(), &store).expect("ok");
    assert_eq!(store.load_records().expect("records").len(), 2);
}

#[test]
fn entry_without_avatar_still_counts_as_duplicate() {
    let seeded = r#"[{"username":"Bob"}]"#;
    let store = UserStore::new(MemoryStorage::with_item(KEY, seeded), KEY);
    let err = submit(&UserDraft::new("Bob", INITIALS_AVATAR), &catalog(), &store)
        .expect_err("duplicate");
    assert!(matches!(err, SubmitError::Duplicate(_)));
    assert_eq!(store.raw().expect("raw").as_deref(), Some(seeded));
}

#[test]
fn blank_store_accepts_first_user() {
    let store = UserStore::new(MemoryStorage::with_item(KEY, ""), KEY);
    submit(&UserDraft::new("Ana", INITIALS_AVATAR), &catalog(), &store).expect("ok");
    assert_eq!(
        store.raw().expect("raw").as_deref(),
        Some(r#"[{"username":"Ana","avatar":"username"}]"#)
    );
}

// =============================================================
// register / notice
// =============================================================

#[test]
fn register_skips_validation() {
    let store = empty_store();
    let user = User {
        username: "X".to_string(),
        avatar: INITIALS_AVATAR.to_string(),
    };
    register(&store, user.clone()).expect("register");
    assert_eq!(store.load().expect("load"), vec![user]);
}

#[test]
fn duplicate_notice_names_the_user() {
    let notice = SubmitError::Duplicate("Ana".to_string()).notice();
    assert!(notice.contains("\"Ana\""));
    assert!(notice.contains("already exists"));
}

#[test]
fn encode_notice_is_not_reported_as_corrupt_data() {
    let err = serde_json::from_str::<User>("{").expect_err("bad json");
    let notice = SubmitError::Storage(StoreError::Encode(err)).notice();
    assert!(!notice.contains("could not be read"));
    assert!(notice.contains("could not be saved"));
}

#[test]
fn quota_notice_mentions_storage() {
    assert!(SubmitError::Storage(StoreError::Quota).notice().contains("storage is full"));
}
