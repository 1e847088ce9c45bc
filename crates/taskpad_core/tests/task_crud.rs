use taskpad_core::{
    InMemoryTaskRepository, RepoError, TaskRepository, TaskService, RECOMMENDED_MAX_TASKS,
};

#[test]
fn add_and_get_roundtrip() {
    let mut repo = InMemoryTaskRepository::new();

    let created = repo.add_task("Buy groceries").unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.description, "Buy groceries");
    assert!(!created.completed);

    let loaded = repo.get_task(created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn add_assigns_sequential_ids_and_preserves_order() {
    let mut repo = InMemoryTaskRepository::new();

    let first = repo.add_task("Buy groceries").unwrap();
    let second = repo.add_task("Walk dog").unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let tasks = repo.list_tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "Buy groceries");
    assert_eq!(tasks[1].description, "Walk dog");
}

#[test]
fn add_trims_description_before_storage() {
    let mut repo = InMemoryTaskRepository::new();
    let task = repo.add_task("   Read book  ").unwrap();
    assert_eq!(task.description, "Read book");
}

#[test]
fn add_rejects_blank_descriptions_and_leaves_store_unchanged() {
    let mut repo = InMemoryTaskRepository::new();
    repo.add_task("existing").unwrap();

    let empty = repo.add_task("").unwrap_err();
    assert!(matches!(empty, RepoError::Validation(_)));

    let blank = repo.add_task("   ").unwrap_err();
    assert!(matches!(blank, RepoError::Validation(_)));

    let tasks = repo.list_tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].description, "existing");

    // The rejected calls must not burn ids either.
    let next = repo.add_task("next").unwrap();
    assert_eq!(next.id, 2);
}

#[test]
fn list_on_empty_store_returns_empty_vec() {
    let repo = InMemoryTaskRepository::new();
    assert!(repo.list_tasks().is_empty());
    assert!(repo.is_empty());
    assert_eq!(repo.len(), 0);
}

#[test]
fn list_order_is_stable_across_updates_and_toggles() {
    let mut repo = InMemoryTaskRepository::new();
    repo.add_task("a").unwrap();
    repo.add_task("b").unwrap();
    repo.add_task("c").unwrap();

    repo.set_completed(2, true).unwrap();
    repo.update_description(1, "a updated").unwrap();

    let ids: Vec<_> = repo.list_tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn deleted_ids_are_never_reused() {
    let mut repo = InMemoryTaskRepository::new();
    repo.add_task("Buy groceries").unwrap();
    repo.add_task("Walk dog").unwrap();

    repo.delete_task(1).unwrap();

    let tasks = repo.list_tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, 2);

    let next = repo.add_task("Read book").unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn delete_preserves_remaining_tasks_and_their_order() {
    let mut repo = InMemoryTaskRepository::new();
    repo.add_task("a").unwrap();
    repo.add_task("b").unwrap();
    repo.add_task("c").unwrap();
    repo.set_completed(3, true).unwrap();

    repo.delete_task(2).unwrap();

    let tasks = repo.list_tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, 1);
    assert_eq!(tasks[0].description, "a");
    assert_eq!(tasks[1].id, 3);
    assert!(tasks[1].completed);
}

#[test]
fn update_preserves_id_and_completion_state() {
    let mut repo = InMemoryTaskRepository::new();
    repo.add_task("Walk dog").unwrap();
    repo.set_completed(1, true).unwrap();

    let updated = repo.update_description(1, "Walk the dog twice").unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.description, "Walk the dog twice");
    assert!(updated.completed);
}

#[test]
fn update_validates_description_before_existence_lookup() {
    let mut repo = InMemoryTaskRepository::new();

    // Whitespace-only input is a validation failure even when the id does
    // not exist.
    let err = repo.update_description(999, "   ").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn update_rejects_blank_description_and_keeps_current_text() {
    let mut repo = InMemoryTaskRepository::new();
    repo.add_task("original").unwrap();

    let err = repo.update_description(1, "  \t").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    assert_eq!(repo.get_task(1).unwrap().description, "original");
}

#[test]
fn set_completed_is_idempotent() {
    let mut repo = InMemoryTaskRepository::new();
    repo.add_task("repeat me").unwrap();

    let once = repo.set_completed(1, true).unwrap();
    let twice = repo.set_completed(1, true).unwrap();
    assert_eq!(once, twice);
    assert!(twice.completed);

    repo.set_completed(1, false).unwrap();
    let reopened = repo.set_completed(1, false).unwrap();
    assert!(!reopened.completed);
}

#[test]
fn missing_ids_fail_consistently_across_operations() {
    let mut repo = InMemoryTaskRepository::new();
    repo.add_task("only task").unwrap();
    repo.delete_task(1).unwrap();

    // Absent, deleted and never-assigned ids all report NotFound.
    for id in [0, 1, 99] {
        assert!(matches!(
            repo.get_task(id),
            Err(RepoError::NotFound(missing)) if missing == id
        ));
        assert!(matches!(
            repo.update_description(id, "new text"),
            Err(RepoError::NotFound(missing)) if missing == id
        ));
        assert!(matches!(
            repo.delete_task(id),
            Err(RepoError::NotFound(missing)) if missing == id
        ));
        assert!(matches!(
            repo.set_completed(id, true),
            Err(RepoError::NotFound(missing)) if missing == id
        ));
        assert!(matches!(
            repo.set_completed(id, false),
            Err(RepoError::NotFound(missing)) if missing == id
        ));
    }
}

#[test]
fn store_stays_usable_past_the_recommended_maximum() {
    let mut repo = InMemoryTaskRepository::new();
    for index in 0..=RECOMMENDED_MAX_TASKS {
        repo.add_task(&format!("task {index}")).unwrap();
    }

    assert_eq!(repo.len(), RECOMMENDED_MAX_TASKS + 1);
    let last = repo.get_task((RECOMMENDED_MAX_TASKS + 1) as u64).unwrap();
    assert_eq!(last.description, format!("task {RECOMMENDED_MAX_TASKS}"));
}

#[test]
fn not_found_error_renders_the_id() {
    let repo = InMemoryTaskRepository::new();
    let err = repo.get_task(99).unwrap_err();
    assert_eq!(err.to_string(), "no task with id 99");
}

#[test]
fn service_wraps_repository_calls() {
    let mut service = TaskService::new(InMemoryTaskRepository::new());

    let groceries = service.add_task("Buy groceries").unwrap();
    assert_eq!(groceries.id, 1);

    let dog = service.add_task("Walk dog").unwrap();
    assert_eq!(dog.id, 2);

    service.delete_task(groceries.id).unwrap();
    let book = service.add_task("Read book").unwrap();
    assert_eq!(book.id, 3);

    let done = service.mark_complete(dog.id).unwrap();
    assert!(done.completed);

    let updated = service
        .update_description(dog.id, "Walk the dog twice")
        .unwrap();
    assert_eq!(updated.description, "Walk the dog twice");
    assert!(updated.completed);

    let ids: Vec<_> = service.list_tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let reopened = service.mark_incomplete(dog.id).unwrap();
    assert!(!reopened.completed);

    assert!(matches!(
        service.get_task(99),
        Err(RepoError::NotFound(99))
    ));
}
