//! PostgreSQL repository tests against a disposable container.
//!
//! Needs a running Docker daemon.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use domain_todos::conversions::todos_to_proto;
use domain_todos::{CreateTodo, PgTodoRepository, TodoError, TodoRepository, TodoService, UpdateTodo};
use sqlx::postgres::PgPoolOptions;
use test_utils::{TestDataBuilder, TestDatabase};

fn create_input(builder: &TestDataBuilder, suffix: &str) -> CreateTodo {
    CreateTodo {
        title: builder.name("todo", suffix),
        description: format!("description {}", suffix),
        reminder: builder.reminder(),
    }
}

fn update_input(builder: &TestDataBuilder) -> UpdateTodo {
    UpdateTodo {
        title: builder.name("todo", "updated"),
        description: "updated".to_string(),
        reminder: builder.reminder(),
    }
}

#[tokio::test]
async fn test_create_then_read_round_trips() {
    let db = TestDatabase::new().await;
    let repository = PgTodoRepository::new(db.pool());
    let builder = TestDataBuilder::from_test_name("test_create_then_read_round_trips");

    let input = create_input(&builder, "main");
    let id = repository.create(input.clone()).await.unwrap();
    let todo = repository.get_by_id(id).await.unwrap().unwrap();

    assert_eq!(todo.id, id);
    assert_eq!(todo.title, input.title);
    assert_eq!(todo.description, input.description);
    assert_eq!(todo.reminder, input.reminder);
}

#[tokio::test]
async fn test_absent_ids() {
    let db = TestDatabase::new().await;
    let repository = PgTodoRepository::new(db.pool());
    let builder = TestDataBuilder::from_test_name("test_absent_ids");

    assert!(repository.get_by_id(404).await.unwrap().is_none());
    assert_eq!(repository.delete(404).await.unwrap(), 0);

    let update = UpdateTodo {
        title: "nothing".to_string(),
        description: String::new(),
        reminder: builder.reminder(),
    };
    assert_eq!(repository.update(404, update).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_and_delete_touch_only_the_target() {
    let db = TestDatabase::new().await;
    let repository = PgTodoRepository::new(db.pool());
    let builder = TestDataBuilder::from_test_name("test_update_and_delete_touch_only_the_target");

    let first = repository.create(create_input(&builder, "first")).await.unwrap();
    let second_input = create_input(&builder, "second");
    let second = repository.create(second_input.clone()).await.unwrap();

    let update = UpdateTodo {
        title: "changed".to_string(),
        description: "changed".to_string(),
        reminder: Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap(),
    };
    assert_eq!(repository.update(first, update.clone()).await.unwrap(), 1);

    let changed = repository.get_by_id(first).await.unwrap().unwrap();
    assert_eq!(changed.title, update.title);
    assert_eq!(changed.reminder, update.reminder);

    let untouched = repository.get_by_id(second).await.unwrap().unwrap();
    assert_eq!(untouched.title, second_input.title);

    assert_eq!(repository.delete(first).await.unwrap(), 1);
    assert!(repository.get_by_id(first).await.unwrap().is_none());
    assert!(repository.get_by_id(second).await.unwrap().is_some());
}

#[tokio::test]
async fn test_list_matches_row_count() {
    let db = TestDatabase::new().await;
    let repository = PgTodoRepository::new(db.pool());
    let builder = TestDataBuilder::from_test_name("test_list_matches_row_count");

    assert!(repository.list().await.unwrap().is_empty());

    for suffix in ["a", "b", "c"] {
        repository.create(create_input(&builder, suffix)).await.unwrap();
    }

    let todos = repository.list().await.unwrap();
    assert_eq!(todos.len() as i64, db.count_todos().await);
    assert_eq!(todos.len(), 3);
}

#[tokio::test]
async fn test_service_scenario() {
    let db = TestDatabase::new().await;
    db.reset().await;
    let service = TodoService::new(PgTodoRepository::new(db.pool()));
    let reminder = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let id = service
        .create_todo(CreateTodo {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            reminder,
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    let todo = service.get_todo(1).await.unwrap();
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, "2%");
    assert_eq!(todo.reminder, reminder);

    let updated = service
        .update_todo(
            1,
            UpdateTodo {
                title: "Buy oat milk".to_string(),
                description: "2%".to_string(),
                reminder,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated, 1);

    assert_eq!(service.delete_todo(1).await.unwrap(), 1);
    assert!(matches!(service.get_todo(1).await, Err(TodoError::NotFound(1))));
}

#[tokio::test]
async fn test_connections_return_to_pool() {
    let db = TestDatabase::new().await;
    db.reset().await;
    // A single connection: any call that leaks it starves every later call.
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(1))
        .connect(&db.connection_string)
        .await
        .unwrap();
    let service = TodoService::new(PgTodoRepository::new(pool.clone()));
    let builder = TestDataBuilder::from_test_name("connections_return_to_pool");

    for round in 0..10 {
        let id = service
            .create_todo(create_input(&builder, &round.to_string()))
            .await
            .unwrap();
        assert_eq!(service.get_todo(id).await.unwrap().id, id);
        assert_eq!(service.list_todos().await.unwrap().len(), 1);
        assert_eq!(service.delete_todo(id).await.unwrap(), 1);

        assert!(matches!(service.get_todo(id).await, Err(TodoError::NotFound(missing)) if missing == id));
        assert!(matches!(service.delete_todo(id).await, Err(TodoError::NotFound(_))));
        assert!(matches!(
            service.update_todo(id, update_input(&builder)).await,
            Err(TodoError::NotFound(_))
        ));
        assert!(matches!(service.check_api("v2"), Err(TodoError::UnsupportedVersion { .. })));
    }

    // Statement errors must hand the connection back too.
    sqlx::raw_sql("ALTER TABLE todo RENAME TO todo_gone")
        .execute(&db.pool)
        .await
        .unwrap();
    for id in 0..10 {
        assert!(matches!(service.get_todo(id).await, Err(TodoError::Database { .. })));
        assert!(matches!(service.list_todos().await, Err(TodoError::Database { .. })));
        assert!(matches!(
            service.create_todo(create_input(&builder, "gone")).await,
            Err(TodoError::Database { .. })
        ));
    }
    sqlx::raw_sql("ALTER TABLE todo_gone RENAME TO todo")
        .execute(&db.pool)
        .await
        .unwrap();

    assert!(service.list_todos().await.unwrap().is_empty());
    assert_eq!(pool.size(), 1);
    assert_eq!(pool.num_idle(), pool.size() as usize);
}

#[tokio::test]
async fn test_unencodable_stored_reminder_fails_the_whole_list() {
    let db = TestDatabase::new().await;
    let repository = PgTodoRepository::new(db.pool());

    db.insert_todo("fine", "", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .await;
    db.insert_todo("too far", "", Utc.with_ymd_and_hms(12000, 1, 1, 0, 0, 0).unwrap())
        .await;

    let todos = repository.list().await.unwrap();
    assert_eq!(todos.len(), 2);
    assert!(matches!(todos_to_proto(todos), Err(TodoError::Internal(_))));
}
