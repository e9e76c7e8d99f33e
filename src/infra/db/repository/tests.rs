use crate::domain::{NewTask, Priority, TaskDetails, TaskStatus};
use crate::infra::db::Database;
use crate::infra::db::repository::*;
use chrono::NaiveDate;

fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: "Desc".to_string(),
        category: "Home".to_string(),
        task_type: "Errand".to_string(),
        priority: Priority::High,
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        external_link: Some("https://example.com/ticket/1".to_string()),
    }
}

#[test]
fn test_task_repository_create() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = TaskRepository::new(db.connection());

    let created = repo.create(&new_task("Buy milk"))?;
    assert_eq!(created.status, TaskStatus::New);
    assert_eq!(created.percent_done, 0);

    let all = repo.find_all()?;
    assert_eq!(all.len(), 1);
    let task = &all[0];
    assert_eq!(task.id, created.id);
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "Desc");
    assert_eq!(task.category, "Home");
    assert_eq!(task.task_type, "Errand");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(task.status, TaskStatus::New);
    assert_eq!(task.percent_done, 0);
    assert_eq!(task.effort_planned, 0.0);
    assert_eq!(task.effort_actual, 0.0);
    assert_eq!(
        task.external_link.as_deref(),
        Some("https://example.com/ticket/1")
    );
    assert_eq!(task.created_at, created.created_at);

    Ok(())
}

#[test]
fn test_find_all_newest_first() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.task_repo();

    for title in ["first", "second", "third", "fourth"] {
        repo.create(&new_task(title))?;
    }

    let all = repo.find_all()?;
    let ids: Vec<_> = all.iter().map(|t| t.id).collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(all[0].title, "fourth");
    assert_eq!(all[3].title, "first");

    Ok(())
}

#[test]
fn test_update_status_leaves_other_fields() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.task_repo();
    let created = repo.create(&new_task("Report"))?;
    let before = repo.find_by_id(created.id)?.expect("task exists");

    let affected = repo.update_status(created.id, TaskStatus::Final, 100)?;
    assert_eq!(affected, 1);

    let after = repo.find_by_id(created.id)?.expect("task exists");
    assert_eq!(after.status, TaskStatus::Final);
    assert_eq!(after.percent_done, 100);

    let mut expected = before;
    expected.status = TaskStatus::Final;
    expected.percent_done = 100;
    assert_eq!(after, expected);

    Ok(())
}

#[test]
fn test_update_status_allows_any_transition() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.task_repo();
    let task = repo.create(&new_task("Flip-flop"))?;

    repo.update_status(task.id, TaskStatus::Cancelled, 30)?;
    repo.update_status(task.id, TaskStatus::New, 0)?;
    repo.update_status(task.id, TaskStatus::OnHold, 55)?;

    let task = repo.find_by_id(task.id)?.expect("task exists");
    assert_eq!(task.status, TaskStatus::OnHold);
    assert_eq!(task.percent_done, 55);

    Ok(())
}

#[test]
fn test_update_efforts() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.task_repo();
    let task = repo.create(&new_task("Estimate"))?;

    repo.update_efforts(task.id, 8.5, 3.25)?;

    let task = repo.find_by_id(task.id)?.expect("task exists");
    assert_eq!(task.effort_planned, 8.5);
    assert_eq!(task.effort_actual, 3.25);
    assert_eq!(task.status, TaskStatus::New);

    Ok(())
}

#[test]
fn test_update_details_overwrites_owned_fields() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.task_repo();
    let task = repo.create(&new_task("Draft"))?;
    repo.update_efforts(task.id, 1.0, 2.0)?;
    repo.update_status(task.id, TaskStatus::Work, 40)?;

    let details = TaskDetails {
        title: "Final draft".into(),
        description: "Rewritten".into(),
        category: "Work".into(),
        task_type: "Writing".into(),
        priority: Priority::Critical,
        effort_planned: 6.0,
        external_link: None,
        status: TaskStatus::OnHold,
    };
    assert_eq!(repo.update_details(task.id, &details)?, 1);

    let updated = repo.find_by_id(task.id)?.expect("task exists");
    assert_eq!(updated.title, "Final draft");
    assert_eq!(updated.description, "Rewritten");
    assert_eq!(updated.category, "Work");
    assert_eq!(updated.task_type, "Writing");
    assert_eq!(updated.priority, Priority::Critical);
    assert_eq!(updated.effort_planned, 6.0);
    assert_eq!(updated.external_link, None);
    assert_eq!(updated.status, TaskStatus::OnHold);
    // Not owned by the detail edit
    assert_eq!(updated.effort_actual, 2.0);
    assert_eq!(updated.percent_done, 40);
    assert_eq!(updated.start_date, task.start_date);
    assert_eq!(updated.created_at, task.created_at);

    Ok(())
}

#[test]
fn test_updates_on_missing_task_affect_nothing() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.task_repo();

    assert_eq!(repo.update_status(42, TaskStatus::Work, 10)?, 0);
    assert_eq!(repo.update_efforts(42, 1.0, 1.0)?, 0);
    assert_eq!(repo.delete(42)?, 0);
    assert!(repo.find_by_id(42)?.is_none());

    Ok(())
}

#[test]
fn test_comment_repository() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let task_repo = TaskRepository::new(db.connection());
    let repo = CommentRepository::new(db.connection());

    let task = task_repo.create(&new_task("Commented"))?;
    repo.add(task.id, "started")?;
    repo.add(task.id, "halfway")?;
    let last = repo.add(task.id, "done")?;

    let list = repo.list_for_task(task.id)?;
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].comment_text, "done");
    assert_eq!(list[0].task_id, task.id);
    assert_eq!(list[0].id, last.id);
    assert_eq!(list[2].comment_text, "started");

    Ok(())
}

#[test]
fn test_comments_are_scoped_to_task() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let task_repo = db.task_repo();
    let repo = db.comment_repo();

    let a = task_repo.create(&new_task("A"))?;
    let b = task_repo.create(&new_task("B"))?;
    repo.add(a.id, "for a")?;
    repo.add(b.id, "for b")?;

    let list = repo.list_for_task(a.id)?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].comment_text, "for a");

    Ok(())
}

#[test]
fn test_comment_for_unknown_task_rejected_by_foreign_key() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let repo = db.comment_repo();

    assert!(repo.add(999, "orphan").is_err());
    assert!(repo.list_for_task(999)?.is_empty());

    Ok(())
}

#[test]
fn test_delete_task_cascades_comments() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let task_repo = db.task_repo();
    let comment_repo = db.comment_repo();

    let doomed = task_repo.create(&new_task("Doomed"))?;
    let kept = task_repo.create(&new_task("Kept"))?;
    comment_repo.add(doomed.id, "one")?;
    comment_repo.add(doomed.id, "two")?;
    comment_repo.add(kept.id, "stays")?;

    assert_eq!(task_repo.delete(doomed.id)?, 1);

    assert!(comment_repo.list_for_task(doomed.id)?.is_empty());
    assert_eq!(comment_repo.list_for_task(kept.id)?.len(), 1);

    let conn = db.connection();
    let guard = conn.lock().unwrap();
    let orphaned: i64 = guard.query_row(
        "SELECT COUNT(*) FROM comments WHERE task_id = ?1",
        [doomed.id],
        |row| row.get(0),
    )?;
    assert_eq!(orphaned, 0);

    Ok(())
}

#[test]
fn test_unknown_stored_values_fall_back_to_defaults() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    {
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        guard.execute(
            "INSERT INTO tasks (title, status, priority, start_date, percent_done, created_at)
             VALUES ('Odd', 'Archived', 9, 'someday', 250, 'now')",
            [],
        )?;
    }

    let all = db.task_repo().find_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, TaskStatus::New);
    assert_eq!(all[0].priority, Priority::Medium);
    assert_eq!(all[0].start_date, None);
    assert_eq!(all[0].percent_done, 100);

    Ok(())
}

#[test]
fn test_stored_status_outside_known_names_loads_as_new() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    {
        let conn = db.connection();
        let guard = conn.lock().unwrap();
        guard.execute_batch(
            "INSERT INTO tasks (title, status, created_at) VALUES ('a', 'done', 'now');
             INSERT INTO tasks (title, status, created_at) VALUES ('b', 'ON HOLD', 'now');",
        )?;
    }

    let all = db.task_repo().find_all()?;
    assert_eq!(all[0].status, TaskStatus::OnHold);
    assert_eq!(all[1].status, TaskStatus::New);

    Ok(())
}
