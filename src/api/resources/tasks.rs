//
//  clumio-sdk
//  api/resources/tasks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Tasks
//!
//! Long-running work (backups, restores, deletions) is tracked as a task.
//! Operations answering `202` hand back a task id that can be polled with
//! [`Tasks::read`] and aborted with [`Tasks::abort`].

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Request};
use crate::api::resources::shared::EntityRef;
use crate::config::Config;

const RESOURCE: &str = "tasks";

pub static LIST_TASKS: Operation = Operation {
    name: "list_tasks",
    method: Method::GET,
    path: "/tasks",
    resource: RESOURCE,
    version: "v1",
    query: &["limit", "start", "filter", "sort"],
    success: &[200],
    pages: PageStyle::Legacy,
};

pub static READ_TASK: Operation = Operation {
    name: "read_task",
    method: Method::GET,
    path: "/tasks/{task_id}",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

pub static UPDATE_TASK: Operation = Operation {
    name: "update_task",
    method: Method::PATCH,
    path: "/tasks/{task_id}",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

/// Lifecycle state of a task, as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    Aborting,
    Aborted,
}

impl TaskStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "queued" => Some(Self::Queued),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            "aborting" => Some(Self::Aborting),
            "aborted" => Some(Self::Aborted),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Aborted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,

    /// e.g. `aws_ebs_volume_incremental_backup`.
    #[serde(rename = "type")]
    pub task_type: String,

    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_entity: Option<EntityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_entity: Option<EntityRef>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

impl Task {
    /// `None` for a status this SDK version does not know.
    pub fn status(&self) -> Option<TaskStatus> {
        TaskStatus::parse(&self.status)
    }
}

/// The only transition a client may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatusUpdate {
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub status: TaskStatusUpdate,
}

impl UpdateTaskRequest {
    pub fn abort() -> Self {
        Self {
            status: TaskStatusUpdate::Aborted,
        }
    }
}

pub type ListTasksResponse = ListResponse<Task>;

pub struct Tasks<'a> {
    executor: Executor<'a>,
}

impl<'a> Tasks<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    /// Fetches a single page.
    pub async fn list(&self, params: ListParams) -> Result<Response<ListTasksResponse>> {
        self.executor
            .send(Request::new(&LIST_TASKS).query(params.into_query()))
            .await
    }

    /// Walks every page, starting from `params.start` (default page 1).
    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListTasksResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_TASKS).query(params.into_query()),
        )
    }

    pub async fn read(&self, task_id: &str) -> Result<Response<Task>> {
        self.executor
            .send(Request::new(&READ_TASK).path_param("task_id", task_id))
            .await
    }

    pub async fn update(
        &self,
        task_id: &str,
        body: Option<&UpdateTaskRequest>,
    ) -> Result<Response<Task>> {
        let request = Request::new(&UPDATE_TASK)
            .path_param("task_id", task_id)
            .body(body)?;
        self.executor.send(request).await
    }

    /// Requests that a queued or running task be aborted.
    pub async fn abort(&self, task_id: &str) -> Result<Response<Task>> {
        self.update(task_id, Some(&UpdateTaskRequest::abort())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::PageStart;
    use mockito::Matcher;
    use serde_json::json;

    fn config(url: &str) -> Config {
        Config::builder()
            .api_token("secret")
            .hostname(url)
            .build_with_env(|_| None)
            .unwrap()
    }

    #[test]
    fn test_unknown_status_still_deserializes() {
        let task: Task = serde_json::from_value(json!({
            "id": "t-1",
            "type": "aws_ebs_volume_incremental_backup",
            "status": "paused_for_maintenance",
            "new_vendor_field": 3
        }))
        .unwrap();
        assert_eq!(task.status, "paused_for_maintenance");
        assert_eq!(task.status(), None);
    }

    #[test]
    fn test_abort_request_serializes_vendor_string() {
        assert_eq!(
            serde_json::to_value(UpdateTaskRequest::abort()).unwrap(),
            json!({"status": "aborted"})
        );
        assert!(serde_json::from_value::<UpdateTaskRequest>(json!({"status": "completed"})).is_err());
    }

    #[tokio::test]
    async fn test_abort_sends_patch() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/tasks/t-1")
            .match_header("accept", "application/api.clumio.tasks=v1+json")
            .match_body(Matcher::Json(json!({"status": "aborted"})))
            .with_status(200)
            .with_body(r#"{"id": "t-1", "type": "restore", "status": "aborting"}"#)
            .create_async()
            .await;

        let config = config(&server.url());
        let tasks = Tasks::new(&config).unwrap();
        let task = tasks.abort("t-1").await.unwrap().into_parsed().unwrap();
        assert_eq!(task.status(), Some(TaskStatus::Aborting));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_all_walks_legacy_pages() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/tasks")
            .match_query(Matcher::Exact("limit=1".into()))
            .with_status(200)
            .with_body(
                json!({
                    "_embedded": {"items": [{"id": "a", "type": "x", "status": "completed"}]},
                    "_links": {"_next": {"href": "/tasks?limit=1&start=2"}},
                    "current_count": 1
                })
                .to_string(),
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", "/tasks")
            .match_query(Matcher::UrlEncoded("start".into(), "2".into()))
            .with_status(200)
            .with_body(
                json!({
                    "_embedded": {"items": [{"id": "b", "type": "x", "status": "queued"}]},
                    "_links": {}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let config = config(&server.url());
        let tasks = Tasks::new(&config).unwrap();
        let pages = tasks
            .list_all(ListParams::new().limit(1))
            .collect_pages()
            .await
            .unwrap();

        let ids: Vec<String> = pages
            .into_iter()
            .flat_map(|page| page.into_parsed().unwrap().into_items())
            .map(|task| task.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_decodes_typed_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/tasks")
            .match_query(Matcher::UrlEncoded("start".into(), "3".into()))
            .with_status(200)
            .with_body(
                json!({
                    "_embedded": {"items": [{"id": "c", "type": "x", "status": "in_progress"}]},
                    "_links": {},
                    "start": 3,
                    "total_pages_count": 3
                })
                .to_string(),
            )
            .create_async()
            .await;

        let config = config(&server.url());
        let page = Tasks::new(&config)
            .unwrap()
            .list(ListParams::new().start("3"))
            .await
            .unwrap()
            .into_parsed()
            .unwrap();

        assert_eq!(page.start, Some(PageStart::Number(3)));
        assert!(!page.has_next());
        assert_eq!(page.items()[0].status(), Some(TaskStatus::InProgress));
    }
}
