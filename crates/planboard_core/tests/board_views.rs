use chrono::NaiveDate;
use planboard_core::db::open_db_in_memory;
use planboard_core::{
    build_clipboard, build_gantt, build_overview, ProjectRepository, SqliteProjectRepository,
    SqliteTaskRepository, TaskDeleteMode, TaskListQuery, TaskRepository, TaskService, TaskStatus,
    PROJECT_CATEGORY,
};
use rusqlite::Connection;

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

struct Board<'conn> {
    projects: SqliteProjectRepository<'conn>,
    tasks: TaskService<SqliteTaskRepository<'conn>>,
}

fn board(conn: &Connection) -> Board<'_> {
    Board {
        projects: SqliteProjectRepository::try_new(conn).unwrap(),
        tasks: TaskService::new(SqliteTaskRepository::try_new(conn).unwrap()),
    }
}

#[test]
fn clipboard_groups_visible_tasks_by_assignee() {
    let conn = open_db_in_memory().unwrap();
    let board = board(&conn);

    let project = board
        .projects
        .create_project("A", "", date("2024-01-01"), date("2024-02-01"))
        .unwrap();
    let folder = board
        .projects
        .create_subfolder(project.project_uuid, "Design")
        .unwrap();

    let bob_task = board
        .tasks
        .create_task(folder.subfolder_uuid, "one", "Bob", date("2024-01-02"), date("2024-01-05"))
        .unwrap();
    board
        .tasks
        .create_task(folder.subfolder_uuid, "two", "Alice", date("2024-01-02"), date("2024-01-05"))
        .unwrap();
    let archived = board
        .tasks
        .create_task(folder.subfolder_uuid, "gone", "Bob", date("2024-01-02"), date("2024-01-05"))
        .unwrap();
    board
        .tasks
        .delete_task(archived.task_uuid, TaskDeleteMode::Archive)
        .unwrap();

    let subfolders = board.projects.list_all_subfolders().unwrap();
    let visible = board.tasks.clipboard_tasks().unwrap();
    let columns = build_clipboard(&subfolders, &visible);

    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].assignee, "Bob");
    assert_eq!(columns[0].cards.len(), 1);
    assert_eq!(columns[0].cards[0].task_uuid, bob_task.task_uuid);
    assert_eq!(columns[0].cards[0].subfolder_name, "Design");
    assert_eq!(columns[1].assignee, "Alice");
}

#[test]
fn gantt_concatenates_task_rows_then_project_rows() {
    let conn = open_db_in_memory().unwrap();
    let board = board(&conn);

    let project = board
        .projects
        .create_project("Launch", "", date("2024-01-01"), date("2024-02-01"))
        .unwrap();
    let folder = board
        .projects
        .create_subfolder(project.project_uuid, "Design")
        .unwrap();
    board
        .tasks
        .create_task(
            folder.subfolder_uuid,
            "Wireframe",
            "Alice",
            date("2024-01-02"),
            date("2024-01-09"),
        )
        .unwrap();

    let rows = build_gantt(
        &board.projects.list_projects().unwrap(),
        &board.projects.list_all_subfolders().unwrap(),
        &board.tasks.list_tasks(&TaskListQuery::default()).unwrap(),
    );

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "Design - Wireframe");
    assert_eq!(rows[0].category, "Alice");
    assert_eq!(rows[1].label, "Launch");
    assert_eq!(rows[1].category, PROJECT_CATEGORY);
    assert_eq!(rows[1].start, date("2024-01-01"));
    assert_eq!(rows[1].end, date("2024-02-01"));
}

#[test]
fn overview_includes_tasks_hidden_from_the_clipboard() {
    let conn = open_db_in_memory().unwrap();
    let board = board(&conn);

    let project = board
        .projects
        .create_project("A", "", date("2024-01-01"), date("2024-02-01"))
        .unwrap();
    let folder = board
        .projects
        .create_subfolder(project.project_uuid, "Design")
        .unwrap();
    let task = board
        .tasks
        .create_task(
            folder.subfolder_uuid,
            "Wireframe",
            "Alice",
            date("2024-01-02"),
            date("2024-01-09"),
        )
        .unwrap();
    board
        .tasks
        .update_status(task.task_uuid, TaskStatus::Finished)
        .unwrap();

    let overview = build_overview(
        &board.projects.list_projects().unwrap(),
        &board.projects.list_all_subfolders().unwrap(),
        &board.tasks.list_tasks(&TaskListQuery::default()).unwrap(),
    );

    assert_eq!(overview.len(), 1);
    let folder_view = &overview[0].subfolders[0];
    assert_eq!(folder_view.subfolder.name, "Design");
    assert_eq!(folder_view.tasks.len(), 1);
    assert_eq!(folder_view.tasks[0].status, TaskStatus::Finished);
    assert!(!folder_view.tasks[0].visible_in_clipboard);
}
