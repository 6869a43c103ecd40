//
//  clumio-sdk
//  api/resources/shared.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Model fragments reused by several resources.

use serde::{Deserialize, Serialize};

/// An AWS resource tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsTag {
    pub key: String,
    pub value: String,
}

/// A reference to another Clumio entity, as found in tasks and audit trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub entity_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Unit of a retention or RPO duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

/// How long a backup is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionDuration {
    pub unit: DurationUnit,
    pub value: u32,
}

impl RetentionDuration {
    pub fn days(value: u32) -> Self {
        Self {
            unit: DurationUnit::Days,
            value,
        }
    }
}

/// Backup flavor for on-demand AWS backups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupType {
    ClumioBackup,
    AwsSnapshot,
}

/// Settings of an on-demand backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnDemandSetting {
    pub retention_duration: RetentionDuration,
}
