//
//  clumio-sdk
//  api/resources/backup_aws_ebs_volumes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # EBS Volume Backups
//!
//! Lists and reads EBS volume backups, and starts on-demand backups. An
//! on-demand backup always runs asynchronously: [`BackupAwsEbsVolumes::create`]
//! returns the task to poll.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result, TaskReference};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Request};
use crate::api::resources::shared::{AwsTag, BackupType, OnDemandSetting};
use crate::config::Config;

const RESOURCE: &str = "backup-aws-ebs-volumes";
const VERSION: &str = "v2";

pub static LIST_BACKUP_AWS_EBS_VOLUMES: Operation = Operation {
    name: "list_backup_aws_ebs_volumes",
    method: Method::GET,
    path: "/backups/aws/ebs-volumes",
    resource: RESOURCE,
    version: VERSION,
    query: &["limit", "start", "filter", "sort"],
    success: &[200],
    pages: PageStyle::Cursor,
};

pub static CREATE_BACKUP_AWS_EBS_VOLUME: Operation = Operation {
    name: "create_backup_aws_ebs_volume",
    method: Method::POST,
    path: "/backups/aws/ebs-volumes",
    resource: RESOURCE,
    version: VERSION,
    query: &[],
    success: &[202],
    pages: PageStyle::None,
};

pub static READ_BACKUP_AWS_EBS_VOLUME: Operation = Operation {
    name: "read_backup_aws_ebs_volume",
    method: Method::GET,
    path: "/backups/aws/ebs-volumes/{backup_id}",
    resource: RESOURCE,
    version: VERSION,
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbsBackup {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_native_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_native_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_az: Option<String>,

    /// `clumio_backup` or `aws_snapshot`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<AwsTag>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEbsBackupRequest {
    /// Clumio-assigned volume id, not the `vol-` native id.
    pub volume_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<OnDemandSetting>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<BackupType>,
}

pub type ListEbsBackupsResponse = ListResponse<EbsBackup>;

pub struct BackupAwsEbsVolumes<'a> {
    executor: Executor<'a>,
}

impl<'a> BackupAwsEbsVolumes<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(&self, params: ListParams) -> Result<Response<ListEbsBackupsResponse>> {
        self.executor
            .send(Request::new(&LIST_BACKUP_AWS_EBS_VOLUMES).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListEbsBackupsResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_BACKUP_AWS_EBS_VOLUMES).query(params.into_query()),
        )
    }

    pub async fn create(
        &self,
        body: Option<&CreateEbsBackupRequest>,
    ) -> Result<Response<TaskReference>> {
        let request = Request::new(&CREATE_BACKUP_AWS_EBS_VOLUME).body(body)?;
        self.executor.send(request).await
    }

    pub async fn read(&self, backup_id: &str) -> Result<Response<EbsBackup>> {
        self.executor
            .send(Request::new(&READ_BACKUP_AWS_EBS_VOLUME).path_param("backup_id", backup_id))
            .await
    }
}
