//
//  clumio-sdk
//  api/resources/aws_ebs_volumes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! EBS volumes discovered in connected AWS accounts.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Query, Request};
use crate::api::resources::shared::AwsTag;
use crate::config::Config;

const RESOURCE: &str = "aws-ebs-volumes";

pub static LIST_AWS_EBS_VOLUMES: Operation = Operation {
    name: "list_aws_ebs_volumes",
    method: Method::GET,
    path: "/datasources/aws/ebs-volumes",
    resource: RESOURCE,
    version: "v1",
    query: &["limit", "start", "filter", "embed"],
    success: &[200],
    pages: PageStyle::Cursor,
};

pub static READ_AWS_EBS_VOLUME: Operation = Operation {
    name: "read_aws_ebs_volume",
    method: Method::GET,
    path: "/datasources/aws/ebs-volumes/{volume_id}",
    resource: RESOURCE,
    version: "v1",
    query: &["embed"],
    success: &[200],
    pages: PageStyle::None,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbsVolume {
    pub id: String,
    pub volume_native_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_native_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_az: Option<String>,

    /// GiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// e.g. `gp3`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_encrypted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<AwsTag>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

impl EbsVolume {
    pub fn is_protected(&self) -> bool {
        self.protection_status.as_deref() == Some("protected")
    }
}

pub type ListEbsVolumesResponse = ListResponse<EbsVolume>;

pub struct AwsEbsVolumes<'a> {
    executor: Executor<'a>,
}

impl<'a> AwsEbsVolumes<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(&self, params: ListParams) -> Result<Response<ListEbsVolumesResponse>> {
        self.executor
            .send(Request::new(&LIST_AWS_EBS_VOLUMES).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListEbsVolumesResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_AWS_EBS_VOLUMES).query(params.into_query()),
        )
    }

    pub async fn read(&self, volume_id: &str, embed: Option<&str>) -> Result<Response<EbsVolume>> {
        let request = Request::new(&READ_AWS_EBS_VOLUME)
            .path_param("volume_id", volume_id)
            .query(Query::new().with("embed", embed));
        self.executor.send(request).await
    }
}
