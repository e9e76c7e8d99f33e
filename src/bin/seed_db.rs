use chrono::NaiveDate;
use std::path::PathBuf;
use tasktrack::domain::{NewTask, Priority, TaskStatus};
use tasktrack::infra::app_config::{load_config, resolve_db_path};
use tasktrack::infra::db::Database;

struct SampleTask {
    task: NewTask,
    status: TaskStatus,
    percent_done: u8,
    efforts: (f64, f64),
    comments: &'static [&'static str],
}

fn sample_tasks() -> Vec<SampleTask> {
    vec![
        SampleTask {
            task: NewTask {
                title: "Renew passport".to_string(),
                description: "Appointment at the citizen office, bring two photos.".to_string(),
                category: "Private".to_string(),
                task_type: "Task".to_string(),
                priority: Priority::High,
                start_date: NaiveDate::from_ymd_opt(2024, 6, 3),
                external_link: None,
            },
            status: TaskStatus::Work,
            percent_done: 50,
            efforts: (2.0, 1.5),
            comments: &["Photos done", "Appointment booked for Monday"],
        },
        SampleTask {
            task: NewTask {
                title: "Fix CSV export encoding".to_string(),
                description: "Umlauts are broken when opening the export in spreadsheets."
                    .to_string(),
                category: "Work".to_string(),
                task_type: "Bug".to_string(),
                priority: Priority::Critical,
                start_date: None,
                external_link: Some("https://issues.example.com/EXP-118".to_string()),
            },
            status: TaskStatus::New,
            percent_done: 0,
            efforts: (4.0, 0.0),
            comments: &[],
        },
        SampleTask {
            task: NewTask {
                title: "Quarterly planning".to_string(),
                description: String::new(),
                category: "Work".to_string(),
                task_type: "Meeting".to_string(),
                priority: Priority::Medium,
                start_date: NaiveDate::from_ymd_opt(2024, 7, 1),
                external_link: None,
            },
            status: TaskStatus::OnHold,
            percent_done: 10,
            efforts: (3.0, 0.5),
            comments: &["Waiting for budget numbers"],
        },
        SampleTask {
            task: NewTask {
                title: "Buy birthday present".to_string(),
                description: String::new(),
                category: "Private".to_string(),
                task_type: "Task".to_string(),
                priority: Priority::Low,
                start_date: None,
                external_link: None,
            },
            status: TaskStatus::Final,
            percent_done: 100,
            efforts: (1.0, 1.25),
            comments: &["Ordered online"],
        },
    ]
}

pub fn run(db: &Database) -> anyhow::Result<usize> {
    let tasks = db.task_repo();
    let comments = db.comment_repo();
    let mut inserted = 0;

    for sample in sample_tasks() {
        let task = tasks.create(&sample.task)?;
        tasks.update_status(task.id, sample.status, sample.percent_done)?;
        tasks.update_efforts(task.id, sample.efforts.0, sample.efforts.1)?;
        for text in sample.comments {
            comments.add(task.id, text)?;
        }
        println!("Inserted task #{}: {} ({})", task.id, task.title, sample.status);
        inserted += 1;
    }

    Ok(inserted)
}

/// The database the app itself opens: env override, then config, then platform default.
fn db_path() -> PathBuf {
    resolve_db_path(None, &load_config())
}

fn main() -> anyhow::Result<()> {
    let db_path = db_path();
    println!("Connecting to database at: {}", db_path.display());
    let db = Database::open_at(db_path.clone())?;

    let inserted = run(&db)?;

    println!("\nAdded {inserted} sample tasks.");
    println!("Database location: {}", db_path.display());
    println!("Run the application with `cargo run` to see them in the task list.");
    Ok(())
}
