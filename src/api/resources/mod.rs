//
//  clumio-sdk
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Resource Controllers
//!
//! One module per vendor resource. Each module holds the resource's models,
//! its `'static` operation descriptors, and a controller that borrows the
//! shared [`Config`](crate::Config):
//!
//! ```rust,no_run
//! use clumio_sdk::api::resources::{Tasks, UpdateTaskRequest};
//! use clumio_sdk::Config;
//!
//! # async fn example() -> Result<(), clumio_sdk::ClumioError> {
//! let config = Config::builder().build()?;
//! let tasks = Tasks::new(&config)?;
//! tasks.update("1234", Some(&UpdateTaskRequest::abort())).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`OPERATIONS`] lists every descriptor, for tooling that dispatches by
//! operation name.

pub mod audit_trails;
pub mod aws_connections;
pub mod aws_ebs_volumes;
pub mod backup_aws_ebs_volumes;
pub mod backup_aws_ec2_instances;
pub mod organizational_units;
pub mod policy_assignments;
pub mod policy_definitions;
pub mod protection_groups;
pub mod restored_aws_ebs_volumes;
pub mod restored_protection_group_s3_objects;
pub mod shared;
pub mod tasks;
pub mod users;

pub use audit_trails::{AuditTrail, AuditTrails};
pub use aws_connections::{
    AwsConnection, AwsConnections, CreateAwsConnectionRequest, UpdateAwsConnectionRequest,
};
pub use aws_ebs_volumes::{AwsEbsVolumes, EbsVolume};
pub use backup_aws_ebs_volumes::{BackupAwsEbsVolumes, CreateEbsBackupRequest, EbsBackup};
pub use backup_aws_ec2_instances::{BackupAwsEc2Instances, CreateEc2BackupRequest, Ec2Backup};
pub use organizational_units::{
    CreateOrganizationalUnitRequest, OrganizationalUnit, OrganizationalUnits,
    PatchOrganizationalUnitRequest,
};
pub use policy_assignments::{PolicyAssignments, SetPolicyAssignmentsRequest};
pub use policy_definitions::{Policy, PolicyDefinitionRequest, PolicyDefinitions};
pub use protection_groups::{CreateProtectionGroupRequest, ProtectionGroup, ProtectionGroups};
pub use restored_aws_ebs_volumes::{RestoreEbsVolumeRequest, RestoredAwsEbsVolumes};
pub use restored_protection_group_s3_objects::{
    RestoreS3ObjectsRequest, RestoredProtectionGroupS3Objects,
};
pub use shared::{AwsTag, EntityRef, RetentionDuration};
pub use tasks::{Task, TaskStatus, Tasks, UpdateTaskRequest};
pub use users::{CreateUserRequest, UpdateUserRequest, User, Users};

use super::operation::Operation;

/// Every operation this SDK knows, grouped by resource.
pub static OPERATIONS: &[&Operation] = &[
    &aws_connections::LIST_AWS_CONNECTIONS,
    &aws_connections::CREATE_AWS_CONNECTION,
    &aws_connections::READ_AWS_CONNECTION,
    &aws_connections::UPDATE_AWS_CONNECTION,
    &aws_connections::DELETE_AWS_CONNECTION,
    &tasks::LIST_TASKS,
    &tasks::READ_TASK,
    &tasks::UPDATE_TASK,
    &policy_definitions::LIST_POLICY_DEFINITIONS,
    &policy_definitions::CREATE_POLICY_DEFINITION,
    &policy_definitions::READ_POLICY_DEFINITION,
    &policy_definitions::UPDATE_POLICY_DEFINITION,
    &policy_definitions::DELETE_POLICY_DEFINITION,
    &policy_assignments::SET_POLICY_ASSIGNMENTS,
    &aws_ebs_volumes::LIST_AWS_EBS_VOLUMES,
    &aws_ebs_volumes::READ_AWS_EBS_VOLUME,
    &backup_aws_ebs_volumes::LIST_BACKUP_AWS_EBS_VOLUMES,
    &backup_aws_ebs_volumes::CREATE_BACKUP_AWS_EBS_VOLUME,
    &backup_aws_ebs_volumes::READ_BACKUP_AWS_EBS_VOLUME,
    &backup_aws_ec2_instances::LIST_BACKUP_AWS_EC2_INSTANCES,
    &backup_aws_ec2_instances::CREATE_BACKUP_AWS_EC2_INSTANCE,
    &backup_aws_ec2_instances::READ_BACKUP_AWS_EC2_INSTANCE,
    &restored_aws_ebs_volumes::RESTORE_AWS_EBS_VOLUME,
    &protection_groups::LIST_PROTECTION_GROUPS,
    &protection_groups::CREATE_PROTECTION_GROUP,
    &protection_groups::READ_PROTECTION_GROUP,
    &protection_groups::DELETE_PROTECTION_GROUP,
    &restored_protection_group_s3_objects::RESTORE_PROTECTION_GROUP_S3_OBJECTS,
    &organizational_units::LIST_ORGANIZATIONAL_UNITS,
    &organizational_units::CREATE_ORGANIZATIONAL_UNIT,
    &organizational_units::READ_ORGANIZATIONAL_UNIT,
    &organizational_units::PATCH_ORGANIZATIONAL_UNIT,
    &organizational_units::DELETE_ORGANIZATIONAL_UNIT,
    &users::LIST_USERS,
    &users::CREATE_USER,
    &users::READ_USER,
    &users::UPDATE_USER,
    &users::DELETE_USER,
    &audit_trails::LIST_AUDIT_TRAILS,
];

/// Looks up an operation by its name, e.g. `list_tasks`.
pub fn find_operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS
        .iter()
        .copied()
        .find(|operation| operation.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::operation::PageStyle;
    use std::collections::HashSet;

    #[test]
    fn test_operation_names_are_unique() {
        let names: HashSet<_> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
    }

    #[test]
    fn test_paged_operations_accept_start() {
        for op in OPERATIONS.iter().filter(|op| op.pages != PageStyle::None) {
            assert!(op.accepts_query("start"), "{} must accept start", op.name);
            assert!(op.accepts_query("limit"), "{} must accept limit", op.name);
        }
    }

    #[test]
    fn test_find_operation() {
        let op = find_operation("restore_aws_ebs_volume").unwrap();
        assert_eq!(op.accept(), "application/api.clumio.restored-aws-ebs-volumes=v2+json");
        assert_eq!(op.success, &[202]);
        assert!(find_operation("list_everything").is_none());
    }
}
