//
//  clumio-sdk
//  api/resources/backup_aws_ec2_instances.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, ResourceLinks, Result, TaskReference};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Request};
use crate::api::resources::shared::{AwsTag, BackupType, OnDemandSetting};
use crate::config::Config;

const RESOURCE: &str = "backup-aws-ec2-instances";

pub static LIST_BACKUP_AWS_EC2_INSTANCES: Operation = Operation {
    name: "list_backup_aws_ec2_instances",
    method: Method::GET,
    path: "/backups/aws/ec2-instances",
    resource: RESOURCE,
    version: "v1",
    query: &["limit", "start", "filter", "sort"],
    success: &[200],
    pages: PageStyle::Cursor,
};

pub static CREATE_BACKUP_AWS_EC2_INSTANCE: Operation = Operation {
    name: "create_backup_aws_ec2_instance",
    method: Method::POST,
    path: "/backups/aws/ec2-instances",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[202],
    pages: PageStyle::None,
};

pub static READ_BACKUP_AWS_EC2_INSTANCE: Operation = Operation {
    name: "read_backup_aws_ec2_instance",
    method: Method::GET,
    path: "/backups/aws/ec2-instances/{backup_id}",
    resource: RESOURCE,
    version: "v1",
    query: &[],
    success: &[200],
    pages: PageStyle::None,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec2BackupVolume {
    pub volume_native_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec2Backup {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_native_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_native_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attached_backup_ebs_volumes: Vec<Ec2BackupVolume>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<AwsTag>,

    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEc2BackupRequest {
    pub instance_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<OnDemandSetting>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<BackupType>,
}

pub type ListEc2BackupsResponse = ListResponse<Ec2Backup>;

pub struct BackupAwsEc2Instances<'a> {
    executor: Executor<'a>,
}

impl<'a> BackupAwsEc2Instances<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(&self, params: ListParams) -> Result<Response<ListEc2BackupsResponse>> {
        self.executor
            .send(Request::new(&LIST_BACKUP_AWS_EC2_INSTANCES).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListEc2BackupsResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_BACKUP_AWS_EC2_INSTANCES).query(params.into_query()),
        )
    }

    pub async fn create(
        &self,
        body: Option<&CreateEc2BackupRequest>,
    ) -> Result<Response<TaskReference>> {
        let request = Request::new(&CREATE_BACKUP_AWS_EC2_INSTANCE).body(body)?;
        self.executor.send(request).await
    }

    pub async fn read(&self, backup_id: &str) -> Result<Response<Ec2Backup>> {
        self.executor
            .send(Request::new(&READ_BACKUP_AWS_EC2_INSTANCE).path_param("backup_id", backup_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backup_ignores_unknown_fields() {
        let backup: Ec2Backup = serde_json::from_value(json!({
            "id": "b-1",
            "instance_native_id": "i-0abc",
            "attached_backup_ebs_volumes": [{"volume_native_id": "vol-1", "size": 8, "type": "gp3"}],
            "ami": {"name": "not modelled"}
        }))
        .unwrap();
        assert_eq!(backup.attached_backup_ebs_volumes[0].size, Some(8));
        assert!(serde_json::to_value(&backup).unwrap().get("ami").is_none());
    }

    #[tokio::test]
    async fn test_read_error_carries_operation_and_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/backups/aws/ec2-instances/missing")
            .with_status(404)
            .with_body(r#"{"errors": [{"error_code": 404, "error_message": "Backup not found"}]}"#)
            .create_async()
            .await;

        let config = Config::builder()
            .api_token("secret")
            .hostname(server.url())
            .build_with_env(|_| None)
            .unwrap();
        let backups = BackupAwsEc2Instances::new(&config).unwrap();
        let err = backups.read("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.reason.contains("read_backup_aws_ec2_instance"));
        assert_eq!(err.vendor_message().as_deref(), Some("Backup not found"));
    }
}
