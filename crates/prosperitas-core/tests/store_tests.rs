mod common;

use common::{create_test_store, open_store};
use prosperitas_core::{
    db::{MODULES_KEY, PROGRESS_KEY},
    CompletionOutcome, Database, LessonState, LibraryFilter, ModuleCategory, Progress,
};

#[test]
fn test_learning_session_workflow() {
    let (temp_dir, mut store) = create_test_store();

    let dashboard = store.dashboard();
    assert_eq!(dashboard.completion_percentage, 0);
    assert_eq!(
        dashboard.next_lesson.map(|r| r.lesson.id),
        Some("m1-l1".to_string())
    );

    assert!(matches!(
        store.complete_lesson("m1-l1"),
        CompletionOutcome::Completed { .. }
    ));
    assert!(store.toggle_favorite("m4-l2"));

    let dashboard = store.dashboard();
    assert_eq!(dashboard.completed_lessons, 1);
    assert_eq!(dashboard.total_points, 100);
    assert_eq!(dashboard.completion_percentage, 7);
    drop(store);

    let store = open_store(&temp_dir);
    let (_, lesson) = store.lesson("m1-l2").expect("seed lesson");
    assert_eq!(lesson.state(), LessonState::Unlocked);
    assert_eq!(store.favorites().len(), 1);
    assert_eq!(store.progress().total_points, 100);
}

#[test]
fn test_progress_written_by_hand_is_loaded() {
    let (temp_dir, store) = create_test_store();
    drop(store);

    {
        let mut db = Database::new(temp_dir.path().join("test.db")).expect("open db");
        db.put_record(
            PROGRESS_KEY,
            r#"{"completedLessonIds":["m1-l1","m1-l2"],"favoriteLessonIds":[],"totalPoints":2000,"currentLevel":3}"#,
        )
        .expect("write progress");
    }

    let store = open_store(&temp_dir);
    assert_eq!(store.progress().total_points, 2000);
    assert_eq!(store.progress().current_level, 3);
    assert!(store.progress().is_completed("m1-l2"));
}

#[test]
fn test_missing_progress_fields_take_defaults() {
    let (temp_dir, store) = create_test_store();
    drop(store);

    {
        let mut db = Database::new(temp_dir.path().join("test.db")).expect("open db");
        db.put_record(PROGRESS_KEY, "{}").expect("write progress");
    }

    assert_eq!(open_store(&temp_dir).progress(), &Progress::default());
}

#[test]
fn test_catalog_violating_invariants_is_replaced_by_seed() {
    let (temp_dir, store) = create_test_store();
    drop(store);

    {
        let mut db = Database::new(temp_dir.path().join("test.db")).expect("open db");
        let locked_but_completed = r#"[{"id":"x","title":"X","description":"","category":"math","level":1,
            "lessons":[{"id":"x1","title":"X1","description":"","category":"math",
            "estimatedMinutes":5,"isUnlocked":false,"isCompleted":true}]}]"#;
        db.put_record(MODULES_KEY, locked_but_completed)
            .expect("write modules");
    }

    let store = open_store(&temp_dir);
    assert_eq!(store.catalog().modules().len(), 6);
    assert!(store.lesson("x1").is_none());
}

#[test]
fn test_library_search_across_categories() {
    let (_temp_dir, store) = create_test_store();

    let filter = LibraryFilter {
        category: None,
        search: Some("risco".to_string()),
    };
    let ids: Vec<&str> = store.library(&filter).iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m5"]);

    let filter = LibraryFilter {
        category: Some(ModuleCategory::Business),
        search: Some("risco".to_string()),
    };
    assert!(store.library(&filter).is_empty());
}
