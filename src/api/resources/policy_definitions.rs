//
//  clumio-sdk
//  api/resources/policy_definitions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Policy Definitions
//!
//! A policy groups one or more backup operations, each with its SLAs
//! (retention and RPO). Updating a policy that is already assigned to assets
//! may be applied asynchronously, in which case the server answers `202` and
//! the update is returned as [`Outcome::Queued`].

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result, TaskReference};
use crate::api::executor::{Executor, Outcome, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Query, Request};
use crate::api::resources::shared::{DurationUnit, RetentionDuration};
use crate::config::Config;

const RESOURCE: &str = "policy-definitions";

pub static LIST_POLICY_DEFINITIONS: Operation = Operation {
    name: "list_policy_definitions",
    method: Method::GET,
    path: "/policies/definitions",
    resource: RESOURCE,
    version: "v1",
    query: &["limit", "start", "filter", "embed"],
    success: &[200],
    pages: PageStyle::Cursor,
};

pub static CREATE_POLICY_DEFINITION: Operation = Operation {
    name: "create_policy_definition",
    method: Method::POST,
    path: "/policies/definitions",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

pub static READ_POLICY_DEFINITION: Operation = Operation {
    name: "read_policy_definition",
    method: Method::GET,
    path: "/policies/definitions/{policy_id}",
    resource: RESOURCE,
    version: "v1",
    query: &["embed"],
    success: &[200],
    pages: PageStyle::None,
};

pub static UPDATE_POLICY_DEFINITION: Operation = Operation {
    name: "update_policy_definition",
    method: Method::PUT,
    path: "/policies/definitions/{policy_id}",
    resource: RESOURCE,
    version: "v1",
    query: &["embed"],
    success: &[200, 202],
    pages: PageStyle::None,
};

pub static DELETE_POLICY_DEFINITION: Operation = Operation {
    name: "delete_policy_definition",
    method: Method::DELETE,
    path: "/policies/definitions/{policy_id}",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[202],
    pages: PageStyle::None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationStatus {
    Activated,
    Deactivated,
}

/// When a policy operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSetting {
    Immediate,
    Window,
}

/// Backup frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpoFrequency {
    pub unit: DurationUnit,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSla {
    pub retention_duration: RetentionDuration,
    pub rpo_frequency: RpoFrequency,
}

/// A time-of-day window, `HH:MM` in the policy's timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// One operation of a policy as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyOperation {
    /// e.g. `aws_ebs_volume_backup`, `protection_group_backup`.
    #[serde(rename = "type")]
    pub operation_type: String,

    pub action_setting: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_window_tz: Option<BackupWindow>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slas: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub name: String,

    pub activation_status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_status: Option<String>,

    #[serde(default)]
    pub operations: Vec<PolicyOperation>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

impl Policy {
    pub fn is_active(&self) -> bool {
        self.activation_status == "activated"
    }
}

/// One operation of a policy being created or replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyOperationInput {
    #[serde(rename = "type")]
    pub operation_type: String,

    pub action_setting: ActionSetting,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_window_tz: Option<BackupWindow>,

    pub slas: Vec<BackupSla>,
}

/// Body of both create and update; update replaces the whole definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDefinitionRequest {
    pub name: String,
    pub activation_status: ActivationStatus,
    pub operations: Vec<PolicyOperationInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Queued policy update: the task applying it, plus the policy as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedPolicyUpdate {
    pub task_id: String,

    #[serde(flatten)]
    pub policy: Policy,
}

pub type ListPoliciesResponse = ListResponse<Policy>;

pub struct PolicyDefinitions<'a> {
    executor: Executor<'a>,
}

impl<'a> PolicyDefinitions<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(&self, params: ListParams) -> Result<Response<ListPoliciesResponse>> {
        self.executor
            .send(Request::new(&LIST_POLICY_DEFINITIONS).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListPoliciesResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_POLICY_DEFINITIONS).query(params.into_query()),
        )
    }

    pub async fn create(&self, body: Option<&PolicyDefinitionRequest>) -> Result<Response<Policy>> {
        let request = Request::new(&CREATE_POLICY_DEFINITION).body(body)?;
        self.executor.send(request).await
    }

    pub async fn read(&self, policy_id: &str, embed: Option<&str>) -> Result<Response<Policy>> {
        let request = Request::new(&READ_POLICY_DEFINITION)
            .path_param("policy_id", policy_id)
            .query(Query::new().with("embed", embed));
        self.executor.send(request).await
    }

    pub async fn update(
        &self,
        policy_id: &str,
        embed: Option<&str>,
        body: Option<&PolicyDefinitionRequest>,
    ) -> Result<Response<Outcome<Policy, QueuedPolicyUpdate>>> {
        let request = Request::new(&UPDATE_POLICY_DEFINITION)
            .path_param("policy_id", policy_id)
            .query(Query::new().with("embed", embed))
            .body(body)?;
        self.executor.send_accepted(request).await
    }

    pub async fn delete(&self, policy_id: &str) -> Result<Response<TaskReference>> {
        self.executor
            .send(Request::new(&DELETE_POLICY_DEFINITION).path_param("policy_id", policy_id))
            .await
    }
}
