//! Proto ↔ domain conversions
//!
//! The reminder is the only field with two representations:
//! `google.protobuf.Timestamp` on the wire and `DateTime<Utc>` in the store.
//! All five operations go through [`reminder_from_proto`] and
//! [`reminder_to_proto`].

use chrono::{DateTime, Utc};
use grpc_client::conversions::{datetime_to_timestamp, timestamp_to_datetime};
use rpc::Timestamp;
use rpc::todo::v1 as proto;

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, Todo, UpdateTodo};

/// Wire reminder to storage; missing or out-of-range values are caller errors
pub fn reminder_from_proto(reminder: Option<Timestamp>) -> TodoResult<DateTime<Utc>> {
    let ts = reminder.ok_or_else(|| {
        TodoError::InvalidArgument("reminder field has invalid format: missing".to_string())
    })?;
    timestamp_to_datetime(&ts)
        .map_err(|e| TodoError::InvalidArgument(format!("reminder field has invalid format: {}", e)))
}

/// Storage reminder to wire; a stored value the wire cannot carry is an internal error
pub fn reminder_to_proto(reminder: DateTime<Utc>) -> TodoResult<Timestamp> {
    datetime_to_timestamp(reminder)
        .map_err(|e| TodoError::Internal(format!("reminder field has invalid format: {}", e)))
}

/// The `to_do` message a Create/Update request must carry
pub fn require_to_do(to_do: Option<proto::ToDo>) -> TodoResult<proto::ToDo> {
    to_do.ok_or_else(|| TodoError::InvalidArgument("to_do is required".to_string()))
}

// ============================================================================
// Proto -> Domain
// ============================================================================

impl TryFrom<proto::ToDo> for CreateTodo {
    type Error = TodoError;

    /// The id on the message is ignored; the store assigns one.
    fn try_from(msg: proto::ToDo) -> TodoResult<Self> {
        Ok(Self {
            reminder: reminder_from_proto(msg.reminder)?,
            title: msg.title,
            description: msg.description,
        })
    }
}

impl TryFrom<proto::ToDo> for UpdateTodo {
    type Error = TodoError;

    fn try_from(msg: proto::ToDo) -> TodoResult<Self> {
        Ok(Self {
            reminder: reminder_from_proto(msg.reminder)?,
            title: msg.title,
            description: msg.description,
        })
    }
}

// ============================================================================
// Domain -> Proto
// ============================================================================

impl TryFrom<Todo> for proto::ToDo {
    type Error = TodoError;

    fn try_from(todo: Todo) -> TodoResult<Self> {
        Ok(Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            reminder: Some(reminder_to_proto(todo.reminder)?),
        })
    }
}

/// Convert every row or fail as a whole
pub fn todos_to_proto(todos: Vec<Todo>) -> TodoResult<Vec<proto::ToDo>> {
    todos.into_iter().map(proto::ToDo::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_reminder_round_trip_at_seconds_precision() {
        let ts = Timestamp {
            seconds: 1_704_067_200,
            nanos: 0,
        };
        let dt = reminder_from_proto(Some(ts)).unwrap();
        assert_eq!(dt, new_year());
        assert_eq!(reminder_to_proto(dt).unwrap(), ts);
    }

    #[test]
    fn test_missing_reminder_is_invalid_argument() {
        let err = reminder_from_proto(None).unwrap_err();
        assert!(matches!(err, TodoError::InvalidArgument(ref msg) if msg.contains("reminder")));
    }

    #[test]
    fn test_bad_nanos_is_invalid_argument() {
        let err = reminder_from_proto(Some(Timestamp {
            seconds: 0,
            nanos: -5,
        }))
        .unwrap_err();
        assert!(matches!(err, TodoError::InvalidArgument(_)));
    }

    #[test]
    fn test_unencodable_stored_reminder_is_internal() {
        let far = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap() + Duration::days(1);
        assert!(matches!(reminder_to_proto(far), Err(TodoError::Internal(_))));
    }

    #[test]
    fn test_create_ignores_wire_id() {
        let msg = proto::ToDo {
            id: 99,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            reminder: Some(Timestamp {
                seconds: 1_704_067_200,
                nanos: 0,
            }),
        };
        let input = CreateTodo::try_from(msg).unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.reminder, new_year());
    }

    #[test]
    fn test_require_to_do() {
        assert!(matches!(require_to_do(None), Err(TodoError::InvalidArgument(_))));
        assert!(require_to_do(Some(proto::ToDo::default())).is_ok());
    }

    #[test]
    fn test_list_fails_as_a_whole() {
        let good = Todo {
            id: 1,
            title: "a".to_string(),
            description: String::new(),
            reminder: new_year(),
        };
        let bad = Todo {
            id: 2,
            reminder: Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap() + Duration::days(1),
            ..good.clone()
        };

        assert_eq!(todos_to_proto(vec![good.clone()]).unwrap().len(), 1);
        assert!(todos_to_proto(vec![good, bad]).is_err());
        assert!(todos_to_proto(Vec::new()).unwrap().is_empty());
    }
}
