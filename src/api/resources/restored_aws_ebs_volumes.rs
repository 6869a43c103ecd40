//
//  clumio-sdk
//  api/resources/restored_aws_ebs_volumes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Restoring an EBS volume backup into a new volume.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{Result, TaskReference};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{Operation, PageStyle, Request};
use crate::api::resources::shared::AwsTag;
use crate::config::Config;

pub static RESTORE_AWS_EBS_VOLUME: Operation = Operation {
    name: "restore_aws_ebs_volume",
    method: Method::POST,
    path: "/restores/aws/ebs-volumes",
    resource: "restored-aws-ebs-volumes",
    version: "v2",
    query: &[],
    success: &[202],
    pages: PageStyle::None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EbsVolumeType {
    Gp2,
    Gp3,
    Io1,
    Io2,
    Sc1,
    St1,
    Standard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbsRestoreSource {
    pub backup_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbsRestoreTarget {
    pub aws_az: String,

    /// Clumio id of the AWS environment (account + region) to restore into.
    pub environment_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_native_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<u64>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<EbsVolumeType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<AwsTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreEbsVolumeRequest {
    pub source: EbsRestoreSource,
    pub target: EbsRestoreTarget,
}

pub struct RestoredAwsEbsVolumes<'a> {
    executor: Executor<'a>,
}

impl<'a> RestoredAwsEbsVolumes<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn restore(
        &self,
        body: Option<&RestoreEbsVolumeRequest>,
    ) -> Result<Response<TaskReference>> {
        let request = Request::new(&RESTORE_AWS_EBS_VOLUME).body(body)?;
        self.executor.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_volume_type_uses_vendor_strings() {
        let target = EbsRestoreTarget {
            aws_az: "us-west-2a".into(),
            environment_id: "env-1".into(),
            kms_key_native_id: None,
            iops: Some(3000),
            volume_type: Some(EbsVolumeType::Gp3),
            tags: vec![AwsTag {
                key: "team".into(),
                value: "storage".into(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            json!({
                "aws_az": "us-west-2a",
                "environment_id": "env-1",
                "iops": 3000,
                "type": "gp3",
                "tags": [{"key": "team", "value": "storage"}]
            })
        );
        assert!(serde_json::from_value::<EbsVolumeType>(json!("gp9")).is_err());
    }

    #[tokio::test]
    async fn test_restore_returns_task() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/restores/aws/ebs-volumes")
            .match_header("accept", "application/api.clumio.restored-aws-ebs-volumes=v2+json")
            .with_status(202)
            .with_body(r#"{"task_id": "t-11"}"#)
            .create_async()
            .await;

        let config = Config::builder()
            .api_token("secret")
            .hostname(server.url())
            .build_with_env(|_| None)
            .unwrap();
        let restores = RestoredAwsEbsVolumes::new(&config).unwrap();
        let body = RestoreEbsVolumeRequest {
            source: EbsRestoreSource {
                backup_id: "b-1".into(),
            },
            target: EbsRestoreTarget {
                aws_az: "us-west-2a".into(),
                environment_id: "env-1".into(),
                kms_key_native_id: None,
                iops: None,
                volume_type: None,
                tags: Vec::new(),
            },
        };
        let task = restores.restore(Some(&body)).await.unwrap().into_parsed().unwrap();
        assert_eq!(task.task_id, "t-11");
        mock.assert_async().await;
    }
}
