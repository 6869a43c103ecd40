//
//  clumio-sdk
//  api/resources/restored_protection_group_s3_objects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # S3 Object Restores
//!
//! Restores individual objects out of protection group backups. With
//! `return_object_to_restore` set the server answers `200` with the objects
//! it would restore instead of queueing the restore; otherwise it answers
//! `202` with the restore task.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{Items, Result, TaskReference};
use crate::api::executor::{Executor, Outcome, Response};
use crate::api::operation::{Operation, PageStyle, Request};
use crate::api::resources::protection_groups::S3StorageClass;
use crate::config::Config;

pub static RESTORE_PROTECTION_GROUP_S3_OBJECTS: Operation = Operation {
    name: "restore_protection_group_s3_objects",
    method: Method::POST,
    path: "/restores/protection-groups/s3-objects",
    resource: "restored-protection-group-s3-objects",
    version: "v1",
    query: &[],
    success: &[200, 202],
    pages: PageStyle::None,
};

/// One object version inside a protection group backup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3ObjectSource {
    pub backup_id: String,
    pub bucket_name: String,
    pub object_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3ObjectsTarget {
    pub bucket: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_original_storage_class: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<S3StorageClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreS3ObjectsRequest {
    pub source: Vec<S3ObjectSource>,
    pub target: S3ObjectsTarget,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_object_to_restore: Option<bool>,
}

/// An object the server would restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorableObject {
    pub bucket_name: String,
    pub object_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

/// The `200` answer: the objects selected for restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorableObjects {
    #[serde(default, rename = "_embedded")]
    pub embedded: Items<RestorableObject>,
}

pub struct RestoredProtectionGroupS3Objects<'a> {
    executor: Executor<'a>,
}

impl<'a> RestoredProtectionGroupS3Objects<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn restore(
        &self,
        body: Option<&RestoreS3ObjectsRequest>,
    ) -> Result<Response<Outcome<RestorableObjects, TaskReference>>> {
        let request = Request::new(&RESTORE_PROTECTION_GROUP_S3_OBJECTS).body(body)?;
        self.executor.send_accepted(request).await
    }
}
