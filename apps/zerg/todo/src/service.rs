//! ToDo gRPC service implementation
//!
//! Every handler checks the API version first, then converts the request,
//! then calls the domain service. Errors cross the wire through
//! `From<TodoError> for Status`.

use std::sync::Arc;

use domain_todos::conversions::{self as conv, require_to_do};
use domain_todos::{API_VERSION, CreateTodo, TodoRepository, TodoService, UpdateTodo};
use rpc::todo::v1::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadAllRequest, ReadAllResponse,
    ReadRequest, ReadResponse, ToDo, UpdateRequest, UpdateResponse,
    to_do_service_server::ToDoService,
};
use tonic::{Request, Response, Status};

/// gRPC service implementation for ToDo items
///
/// Generic over the repository type for testability.
pub struct ToDoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    service: Arc<TodoService<R>>,
}

impl<R> ToDoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    pub fn new(service: TodoService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[tonic::async_trait]
impl<R> ToDoService for ToDoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let req = request.into_inner();
        self.service.check_api(&req.api)?;

        let input: CreateTodo = require_to_do(req.to_do)?.try_into()?;
        let id = self.service.create_todo(input).await?;

        Ok(Response::new(CreateResponse {
            api: API_VERSION.to_string(),
            id,
        }))
    }

    async fn read(&self, request: Request<ReadRequest>) -> Result<Response<ReadResponse>, Status> {
        let req = request.into_inner();
        self.service.check_api(&req.api)?;

        let todo = self.service.get_todo(req.id).await?;

        Ok(Response::new(ReadResponse {
            api: API_VERSION.to_string(),
            to_do: Some(ToDo::try_from(todo)?),
        }))
    }

    async fn update(
        &self,
        request: Request<UpdateRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        let req = request.into_inner();
        self.service.check_api(&req.api)?;

        let to_do = require_to_do(req.to_do)?;
        let id = to_do.id;
        let input: UpdateTodo = to_do.try_into()?;
        let updated = self.service.update_todo(id, input).await?;

        Ok(Response::new(UpdateResponse {
            api: API_VERSION.to_string(),
            updated: updated as i64,
        }))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let req = request.into_inner();
        self.service.check_api(&req.api)?;

        let deleted = self.service.delete_todo(req.id).await?;

        Ok(Response::new(DeleteResponse {
            api: API_VERSION.to_string(),
            deleted: deleted as i64,
        }))
    }

    async fn read_all(
        &self,
        request: Request<ReadAllRequest>,
    ) -> Result<Response<ReadAllResponse>, Status> {
        let req = request.into_inner();
        self.service.check_api(&req.api)?;

        let todos = self.service.list_todos().await?;

        Ok(Response::new(ReadAllResponse {
            api: API_VERSION.to_string(),
            to_dos: conv::todos_to_proto(todos)?,
        }))
    }
}
