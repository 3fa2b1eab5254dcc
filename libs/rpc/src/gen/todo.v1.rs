// @generated
// This file is @generated by prost-build.
/// ToDo is a task item with a reminder.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToDo {
    /// Store-assigned identifier
    #[prost(int64, tag="1")]
    pub id: i64,
    /// Short title of the task
    #[prost(string, tag="2")]
    pub title: ::prost::alloc::string::String,
    /// Free-form description, may be empty
    #[prost(string, tag="3")]
    pub description: ::prost::alloc::string::String,
    /// When to be reminded about the task
    #[prost(message, optional, tag="4")]
    pub reminder: ::core::option::Option<::prost_types::Timestamp>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRequest {
    /// API versioning: empty means "use the server's current version"
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    /// Task to add (id is ignored)
    #[prost(message, optional, tag="2")]
    pub to_do: ::core::option::Option<ToDo>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct CreateResponse {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    /// Identifier assigned by the store
    #[prost(int64, tag="2")]
    pub id: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ReadRequest {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    #[prost(int64, tag="2")]
    pub id: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadResponse {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    #[prost(message, optional, tag="2")]
    pub to_do: ::core::option::Option<ToDo>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateRequest {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    /// Full replacement; id selects the row
    #[prost(message, optional, tag="2")]
    pub to_do: ::core::option::Option<ToDo>,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct UpdateResponse {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    /// Number of rows changed (1 on success)
    #[prost(int64, tag="2")]
    pub updated: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteRequest {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    #[prost(int64, tag="2")]
    pub id: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DeleteResponse {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    /// Number of rows removed (1 on success)
    #[prost(int64, tag="2")]
    pub deleted: i64,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ReadAllRequest {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReadAllResponse {
    #[prost(string, tag="1")]
    pub api: ::prost::alloc::string::String,
    #[prost(message, repeated, tag="2")]
    pub to_dos: ::prost::alloc::vec::Vec<ToDo>,
}
include!("todo.v1.tonic.rs");
// @@protoc_insertion_point(module)
