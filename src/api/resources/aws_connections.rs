//
//  clumio-sdk
//  api/resources/aws_connections.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! AWS account/region connections.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Query, Request};
use crate::config::Config;

const RESOURCE: &str = "aws-connections";

pub static LIST_AWS_CONNECTIONS: Operation = Operation {
    name: "list_aws_connections",
    method: Method::GET,
    path: "/connections/aws",
    resource: RESOURCE,
    version: "v1",
    query: &["limit", "start", "filter"],
    success: &[200],
    pages: PageStyle::Legacy,
};

pub static CREATE_AWS_CONNECTION: Operation = Operation {
    name: "create_aws_connection",
    method: Method::POST,
    path: "/connections/aws",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

pub static READ_AWS_CONNECTION: Operation = Operation {
    name: "read_aws_connection",
    method: Method::GET,
    path: "/connections/aws/{connection_id}",
    resource: RESOURCE,
    version: "v1",
    query: &["return_external_id"],
    success: &[200],
    pages: PageStyle::None,
};

pub static UPDATE_AWS_CONNECTION: Operation = Operation {
    name: "update_aws_connection",
    method: Method::PATCH,
    path: "/connections/aws/{connection_id}",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

pub static DELETE_AWS_CONNECTION: Operation = Operation {
    name: "delete_aws_connection",
    method: Method::DELETE,
    path: "/connections/aws/{connection_id}",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[200, 204],
    pages: PageStyle::None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwsAssetType {
    #[serde(rename = "EBS")]
    Ebs,
    #[serde(rename = "EC2")]
    Ec2,
    #[serde(rename = "RDS")]
    Rds,
    #[serde(rename = "DynamoDB")]
    DynamoDb,
    #[serde(rename = "S3")]
    S3,
    #[serde(rename = "EC2MSSQL")]
    Ec2Mssql,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwsService {
    Discover,
    Protect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsConnection {
    pub id: String,
    pub account_native_id: String,
    pub aws_region: String,

    /// `connected`, `connecting` or `disconnected`.
    pub connection_status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protect_asset_types_enabled: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services_enabled: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

impl AwsConnection {
    pub fn is_connected(&self) -> bool {
        self.connection_status == "connected"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAwsConnectionRequest {
    pub account_native_id: String,
    pub aws_region: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protect_asset_types_enabled: Vec<AwsAssetType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services_enabled: Vec<AwsService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAwsConnectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,
}

pub type ListAwsConnectionsResponse = ListResponse<AwsConnection>;

pub struct AwsConnections<'a> {
    executor: Executor<'a>,
}

impl<'a> AwsConnections<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(&self, params: ListParams) -> Result<Response<ListAwsConnectionsResponse>> {
        self.executor
            .send(Request::new(&LIST_AWS_CONNECTIONS).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListAwsConnectionsResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_AWS_CONNECTIONS).query(params.into_query()),
        )
    }

    pub async fn create(
        &self,
        body: Option<&CreateAwsConnectionRequest>,
    ) -> Result<Response<AwsConnection>> {
        let request = Request::new(&CREATE_AWS_CONNECTION).body(body)?;
        self.executor.send(request).await
    }

    pub async fn read(&self, connection_id: &str) -> Result<Response<AwsConnection>> {
        self.read_with(connection_id, None).await
    }

    /// Like [`read`](Self::read), optionally asking for the external id.
    pub async fn read_with(
        &self,
        connection_id: &str,
        return_external_id: Option<bool>,
    ) -> Result<Response<AwsConnection>> {
        let request = Request::new(&READ_AWS_CONNECTION)
            .path_param("connection_id", connection_id)
            .query(Query::new().with("return_external_id", return_external_id));
        self.executor.send(request).await
    }

    pub async fn update(
        &self,
        connection_id: &str,
        body: Option<&UpdateAwsConnectionRequest>,
    ) -> Result<Response<AwsConnection>> {
        let request = Request::new(&UPDATE_AWS_CONNECTION)
            .path_param("connection_id", connection_id)
            .body(body)?;
        self.executor.send(request).await
    }

    pub async fn delete(&self, connection_id: &str) -> Result<Response<()>> {
        self.executor
            .send(Request::new(&DELETE_AWS_CONNECTION).path_param("connection_id", connection_id))
            .await
    }
}
