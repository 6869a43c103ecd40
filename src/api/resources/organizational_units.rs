//
//  clumio-sdk
//  api/resources/organizational_units.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Organizational Units
//!
//! Organizational units (OUs) partition an account's assets and users.
//! Creating or changing an OU that moves assets is applied asynchronously:
//! the server answers `202` with the OU as submitted plus the task moving
//! the assets.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result, TaskReference};
use crate::api::executor::{Executor, Outcome, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Query, Request};
use crate::config::Config;

const RESOURCE: &str = "organizational-units";
const VERSION: &str = "v2";

pub static LIST_ORGANIZATIONAL_UNITS: Operation = Operation {
    name: "list_organizational_units",
    method: Method::GET,
    path: "/organizational-units",
    resource: RESOURCE,
    version: VERSION,
    query: &["limit", "start", "filter"],
    success: &[200],
    pages: PageStyle::Legacy,
};

pub static CREATE_ORGANIZATIONAL_UNIT: Operation = Operation {
    name: "create_organizational_unit",
    method: Method::POST,
    path: "/organizational-units",
    resource: RESOURCE,
    version: VERSION,
    query: &["embed"],
    success: &[200, 202],
    pages: PageStyle::None,
};

pub static READ_ORGANIZATIONAL_UNIT: Operation = Operation {
    name: "read_organizational_unit",
    method: Method::GET,
    path: "/organizational-units/{id}",
    resource: RESOURCE,
    version: VERSION,
    query: &["embed"],
    success: &[200],
    pages: PageStyle::None,
};

pub static PATCH_ORGANIZATIONAL_UNIT: Operation = Operation {
    name: "patch_organizational_unit",
    method: Method::PATCH,
    path: "/organizational-units/{id}",
    resource: RESOURCE,
    version: VERSION,
    query: &["embed"],
    success: &[200, 202],
    pages: PageStyle::None,
};

pub static DELETE_ORGANIZATIONAL_UNIT: Operation = Operation {
    name: "delete_organizational_unit",
    method: Method::DELETE,
    path: "/organizational-units/{id}",
    resource: RESOURCE,
    version: VERSION,
    query: &[],
    success: &[202],
    pages: PageStyle::None,
};

/// A user and the role they hold within an OU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithRole {
    pub user_id: String,
    pub assigned_role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `None` for the root OU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_organizational_unit_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub configured_datasource_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descendant_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserWithRole>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

/// `202` body of create and patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedOrganizationalUnit {
    pub task_id: String,

    #[serde(flatten)]
    pub unit: OrganizationalUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrganizationalUnitRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserWithRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdates {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<UserWithRole>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOrganizationalUnitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<UserUpdates>,
}

pub type ListOrganizationalUnitsResponse = ListResponse<OrganizationalUnit>;

pub type OrganizationalUnitOutcome = Outcome<OrganizationalUnit, QueuedOrganizationalUnit>;

pub struct OrganizationalUnits<'a> {
    executor: Executor<'a>,
}

impl<'a> OrganizationalUnits<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(
        &self,
        params: ListParams,
    ) -> Result<Response<ListOrganizationalUnitsResponse>> {
        self.executor
            .send(Request::new(&LIST_ORGANIZATIONAL_UNITS).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListOrganizationalUnitsResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_ORGANIZATIONAL_UNITS).query(params.into_query()),
        )
    }

    pub async fn create(
        &self,
        embed: Option<&str>,
        body: Option<&CreateOrganizationalUnitRequest>,
    ) -> Result<Response<OrganizationalUnitOutcome>> {
        let request = Request::new(&CREATE_ORGANIZATIONAL_UNIT)
            .query(Query::new().with("embed", embed))
            .body(body)?;
        self.executor.send_accepted(request).await
    }

    pub async fn read(&self, id: &str, embed: Option<&str>) -> Result<Response<OrganizationalUnit>> {
        let request = Request::new(&READ_ORGANIZATIONAL_UNIT)
            .path_param("id", id)
            .query(Query::new().with("embed", embed));
        self.executor.send(request).await
    }

    pub async fn patch(
        &self,
        id: &str,
        embed: Option<&str>,
        body: Option<&PatchOrganizationalUnitRequest>,
    ) -> Result<Response<OrganizationalUnitOutcome>> {
        let request = Request::new(&PATCH_ORGANIZATIONAL_UNIT)
            .path_param("id", id)
            .query(Query::new().with("embed", embed))
            .body(body)?;
        self.executor.send_accepted(request).await
    }

    pub async fn delete(&self, id: &str) -> Result<Response<TaskReference>> {
        self.executor
            .send(Request::new(&DELETE_ORGANIZATIONAL_UNIT).path_param("id", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn config(url: &str) -> Config {
        Config::builder()
            .api_token("secret")
            .hostname(url)
            .organizational_unit_context("root")
            .build_with_env(|_| None)
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_completes_synchronously() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/organizational-units")
            .match_header("accept", "application/api.clumio.organizational-units=v2+json")
            .match_header("x-clumio-organizationalunit-context", "root")
            .match_body(Matcher::Json(json!({"name": "finance", "parent_id": "root"})))
            .with_status(200)
            .with_body(r#"{"id": "ou-1", "name": "finance", "parent_id": "root"}"#)
            .create_async()
            .await;

        let config = config(&server.url());
        let units = OrganizationalUnits::new(&config).unwrap();
        let body = CreateOrganizationalUnitRequest {
            name: "finance".into(),
            description: None,
            parent_id: Some("root".into()),
            users: Vec::new(),
        };
        let outcome = units.create(None, Some(&body)).await.unwrap().into_parsed().unwrap();
        assert_eq!(outcome.completed().unwrap().id, "ou-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_queued_carries_unit_and_task() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PATCH", "/organizational-units/ou-1")
            .with_status(202)
            .with_body(r#"{"task_id": "t-8", "id": "ou-1", "name": "finance-eu"}"#)
            .create_async()
            .await;

        let config = config(&server.url());
        let units = OrganizationalUnits::new(&config).unwrap();
        let body = PatchOrganizationalUnitRequest {
            name: Some("finance-eu".into()),
            ..Default::default()
        };
        let queued = units
            .patch("ou-1", None, Some(&body))
            .await
            .unwrap()
            .into_parsed()
            .unwrap()
            .queued()
            .unwrap();
        assert_eq!(queued.task_id, "t-8");
        assert_eq!(queued.unit.name, "finance-eu");
    }
}
