//
//  clumio-sdk
//  api/resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Request};
use crate::config::Config;

const RESOURCE: &str = "users";
const VERSION: &str = "v2";

pub static LIST_USERS: Operation = Operation {
    name: "list_users",
    method: Method::GET,
    path: "/users",
    resource: RESOURCE,
    version: VERSION,
    query: &["limit", "start", "filter", "sort"],
    success: &[200],
    pages: PageStyle::Legacy,
};

pub static CREATE_USER: Operation = Operation {
    name: "create_user",
    method: Method::POST,
    path: "/users",
    resource: RESOURCE,
    version: VERSION,
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

pub static READ_USER: Operation = Operation {
    name: "read_user",
    method: Method::GET,
    path: "/users/{user_id}",
    resource: RESOURCE,
    version: VERSION,
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

pub static UPDATE_USER: Operation = Operation {
    name: "update_user",
    method: Method::PATCH,
    path: "/users/{user_id}",
    resource: RESOURCE,
    version: VERSION,
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

pub static DELETE_USER: Operation = Operation {
    name: "delete_user",
    method: Method::DELETE,
    path: "/users/{user_id}",
    resource: RESOURCE,
    version: VERSION,
    query: &[],
    success: &[200, 204],
    pages: PageStyle::None,
};

/// A role granted over a set of organizational units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role_id: String,
    pub organizational_unit_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_confirmed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inviter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_control_configuration: Vec<RoleAssignment>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_control_configuration: Vec<RoleAssignment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignmentUpdates {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<RoleAssignment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<RoleAssignment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_control_configuration_updates: Option<RoleAssignmentUpdates>,
}

pub type ListUsersResponse = ListResponse<User>;

pub struct Users<'a> {
    executor: Executor<'a>,
}

impl<'a> Users<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(&self, params: ListParams) -> Result<Response<ListUsersResponse>> {
        self.executor
            .send(Request::new(&LIST_USERS).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListUsersResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_USERS).query(params.into_query()),
        )
    }

    pub async fn create(&self, body: Option<&CreateUserRequest>) -> Result<Response<User>> {
        let request = Request::new(&CREATE_USER).body(body)?;
        self.executor.send(request).await
    }

    pub async fn read(&self, user_id: &str) -> Result<Response<User>> {
        self.executor
            .send(Request::new(&READ_USER).path_param("user_id", user_id))
            .await
    }

    pub async fn update(
        &self,
        user_id: &str,
        body: Option<&UpdateUserRequest>,
    ) -> Result<Response<User>> {
        let request = Request::new(&UPDATE_USER)
            .path_param("user_id", user_id)
            .body(body)?;
        self.executor.send(request).await
    }

    pub async fn delete(&self, user_id: &str) -> Result<Response<()>> {
        self.executor
            .send(Request::new(&DELETE_USER).path_param("user_id", user_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_disable_user_sends_only_set_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/users/42")
            .match_header("accept", "application/api.clumio.users=v2+json")
            .match_body(Matcher::Json(json!({"is_enabled": false})))
            .with_status(200)
            .with_body(r#"{"id": "42", "email": "ops@example.com", "is_enabled": false}"#)
            .create_async()
            .await;

        let config = Config::builder()
            .api_token("secret")
            .hostname(server.url())
            .build_with_env(|_| None)
            .unwrap();
        let users = Users::new(&config).unwrap();
        let body = UpdateUserRequest {
            is_enabled: Some(false),
            ..Default::default()
        };
        let user = users.update("42", Some(&body)).await.unwrap().into_parsed().unwrap();
        assert_eq!(user.is_enabled, Some(false));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_raw_mode_delete_exposes_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/users/42")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let config = Config::builder()
            .api_token("secret")
            .hostname(server.url())
            .raw_response(true)
            .build_with_env(|_| None)
            .unwrap();
        let users = Users::new(&config).unwrap();
        let response = users.delete("42").await.unwrap();
        assert_eq!(response.raw().unwrap().status, 200);
        assert_eq!(response.parsed(), Some(&()));
    }
}
