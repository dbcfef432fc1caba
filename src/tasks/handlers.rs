use super::*;
use crate::Auth;
use crate::Error;
use crate::ID;
use actix_web::HttpResponse;
use actix_web::web;

/// Unparseable ids are treated like ids that do not exist.
fn task_id(raw: &str) -> Result<ID<Task>, Error> {
    raw.parse().map_err(|_| Error::NotFound("Task"))
}

pub async fn list_tasks<R: TaskRepository + 'static>(
    auth: Auth,
    db: web::Data<R>,
) -> Result<HttpResponse, Error> {
    let tasks = db.tasks(auth.user()).await?;
    Ok(HttpResponse::Ok().json(tasks.iter().map(TaskInfo::from).collect::<Vec<_>>()))
}

pub async fn create_task<R: TaskRepository + 'static>(
    auth: Auth,
    db: web::Data<R>,
    req: web::Json<CreateTask>,
) -> Result<HttpResponse, Error> {
    let task = Task::create(auth.user(), req.into_inner())?;
    db.insert(&task).await?;
    Ok(HttpResponse::Created().json(TaskInfo::from(&task)))
}

pub async fn update_task<R: TaskRepository + 'static>(
    auth: Auth,
    db: web::Data<R>,
    path: web::Path<String>,
    req: web::Json<TaskPatch>,
) -> Result<HttpResponse, Error> {
    let id = task_id(&path)?;
    let patch = req.into_inner().validated()?;
    db.update(auth.user(), id, &patch)
        .await?
        .map(|task| HttpResponse::Ok().json(TaskInfo::from(&task)))
        .ok_or(Error::NotFound("Task"))
}

pub async fn delete_task<R: TaskRepository + 'static>(
    auth: Auth,
    db: web::Data<R>,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let id = task_id(&path)?;
    match db.delete(auth.user(), id).await? {
        true => Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Task deleted" }))),
        false => Err(Error::NotFound("Task")),
    }
}
