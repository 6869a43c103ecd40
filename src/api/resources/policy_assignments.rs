//
//  clumio-sdk
//  api/resources/policy_assignments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Assigning and unassigning policies to protectable entities.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{Result, TaskReference};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{Operation, PageStyle, Request};
use crate::config::Config;

pub static SET_POLICY_ASSIGNMENTS: Operation = Operation {
    name: "set_policy_assignments",
    method: Method::POST,
    path: "/policies/assignments",
    resource: "policy-assignments",
    version: "v1",
    query: &[],
    success: &[202],
    pages: PageStyle::None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentAction {
    Assign,
    Unassign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentEntityType {
    AwsEbsVolume,
    AwsEc2Instance,
    AwsRdsResource,
    AwsDynamodbTable,
    ProtectionGroup,
    ProtectionGroupBackup,
    AwsTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEntity {
    pub id: String,

    #[serde(rename = "type")]
    pub entity_type: AssignmentEntityType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAssignment {
    pub action: AssignmentAction,
    pub entity: AssignmentEntity,

    /// Use `null` when unassigning.
    pub policy_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPolicyAssignmentsRequest {
    pub items: Vec<PolicyAssignment>,
}

impl SetPolicyAssignmentsRequest {
    pub fn assign(mut self, policy_id: &str, entity_type: AssignmentEntityType, id: &str) -> Self {
        self.items.push(PolicyAssignment {
            action: AssignmentAction::Assign,
            entity: AssignmentEntity {
                id: id.to_string(),
                entity_type,
            },
            policy_id: Some(policy_id.to_string()),
        });
        self
    }

    pub fn unassign(mut self, entity_type: AssignmentEntityType, id: &str) -> Self {
        self.items.push(PolicyAssignment {
            action: AssignmentAction::Unassign,
            entity: AssignmentEntity {
                id: id.to_string(),
                entity_type,
            },
            policy_id: None,
        });
        self
    }
}

pub struct PolicyAssignments<'a> {
    executor: Executor<'a>,
}

impl<'a> PolicyAssignments<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn set(
        &self,
        body: Option<&SetPolicyAssignmentsRequest>,
    ) -> Result<Response<TaskReference>> {
        let request = Request::new(&SET_POLICY_ASSIGNMENTS).body(body)?;
        self.executor.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_assignments_returns_task() {
        let body = SetPolicyAssignmentsRequest::default()
            .assign("p-1", AssignmentEntityType::AwsEbsVolume, "vol-1")
            .unassign(AssignmentEntityType::ProtectionGroup, "pg-1");

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/policies/assignments")
            .match_header("accept", "application/api.clumio.policy-assignments=v1+json")
            .match_body(Matcher::Json(json!({
                "items": [
                    {"action": "assign", "entity": {"id": "vol-1", "type": "aws_ebs_volume"}, "policy_id": "p-1"},
                    {"action": "unassign", "entity": {"id": "pg-1", "type": "protection_group"}, "policy_id": null}
                ]
            })))
            .with_status(202)
            .with_body(r#"{"task_id": "t-7"}"#)
            .create_async()
            .await;

        let config = Config::builder()
            .api_token("secret")
            .hostname(server.url())
            .build_with_env(|_| None)
            .unwrap();
        let assignments = PolicyAssignments::new(&config).unwrap();
        let task = assignments.set(Some(&body)).await.unwrap().into_parsed().unwrap();
        assert_eq!(task.task_id, "t-7");
        mock.assert_async().await;
    }
}
