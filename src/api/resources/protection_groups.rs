//
//  clumio-sdk
//  api/resources/protection_groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Protection Groups
//!
//! A protection group selects S3 buckets (by rule) and the objects within
//! them (by prefix and storage class) that a policy protects.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result, TaskReference};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Query, Request};
use crate::config::Config;

const RESOURCE: &str = "protection-groups";

pub static LIST_PROTECTION_GROUPS: Operation = Operation {
    name: "list_protection_groups",
    method: Method::GET,
    path: "/datasources/protection-groups",
    resource: RESOURCE,
    version: "v1",
    query: &["limit", "start", "filter", "embed"],
    success: &[200],
    pages: PageStyle::Cursor,
};

pub static CREATE_PROTECTION_GROUP: Operation = Operation {
    name: "create_protection_group",
    method: Method::POST,
    path: "/datasources/protection-groups",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

pub static READ_PROTECTION_GROUP: Operation = Operation {
    name: "read_protection_group",
    method: Method::GET,
    path: "/datasources/protection-groups/{group_id}",
    resource: RESOURCE,
    version: "v1",
    query: &["lookback_days"],
    success: &[200],
    pages: PageStyle::None,
};

pub static DELETE_PROTECTION_GROUP: Operation = Operation {
    name: "delete_protection_group",
    method: Method::DELETE,
    path: "/datasources/protection-groups/{group_id}",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[202],
    pages: PageStyle::None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum S3StorageClass {
    Standard,
    StandardIa,
    OnezoneIa,
    IntelligentTiering,
    Glacier,
    GlacierIr,
    DeepArchive,
    ReducedRedundancy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixFilter {
    pub prefix: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_sub_prefixes: Vec<String>,
}

/// Object selection as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix_filters: Vec<PrefixFilter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage_classes: Vec<String>,
}

/// Object selection for a new group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectFilterInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix_filters: Vec<PrefixFilter>,

    pub storage_classes: Vec<S3StorageClass>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectionGroup {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// JSON rule over bucket attributes, e.g. `{"aws_tag": {"$eq": {...}}}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_rule: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_filter: Option<ObjectFilter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProtectionGroupRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_rule: Option<String>,

    pub object_filter: ObjectFilterInput,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,
}

pub type ListProtectionGroupsResponse = ListResponse<ProtectionGroup>;

pub struct ProtectionGroups<'a> {
    executor: Executor<'a>,
}

impl<'a> ProtectionGroups<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(&self, params: ListParams) -> Result<Response<ListProtectionGroupsResponse>> {
        self.executor
            .send(Request::new(&LIST_PROTECTION_GROUPS).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListProtectionGroupsResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_PROTECTION_GROUPS).query(params.into_query()),
        )
    }

    pub async fn create(
        &self,
        body: Option<&CreateProtectionGroupRequest>,
    ) -> Result<Response<ProtectionGroup>> {
        let request = Request::new(&CREATE_PROTECTION_GROUP).body(body)?;
        self.executor.send(request).await
    }

    /// `lookback_days` widens the window used for the group's statistics.
    pub async fn read(
        &self,
        group_id: &str,
        lookback_days: Option<u32>,
    ) -> Result<Response<ProtectionGroup>> {
        let request = Request::new(&READ_PROTECTION_GROUP)
            .path_param("group_id", group_id)
            .query(Query::new().with("lookback_days", lookback_days));
        self.executor.send(request).await
    }

    pub async fn delete(&self, group_id: &str) -> Result<Response<TaskReference>> {
        self.executor
            .send(Request::new(&DELETE_PROTECTION_GROUP).path_param("group_id", group_id))
            .await
    }
}
