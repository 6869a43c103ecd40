//
//  clumio-sdk
//  api/resources/audit_trails.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Read-only log of user and API actions.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ListResponse, Paginator, Result};
use crate::api::executor::{Executor, Response};
use crate::api::operation::{ListParams, Operation, PageStyle, Request};
use crate::api::resources::shared::EntityRef;
use crate::config::Config;

pub static LIST_AUDIT_TRAILS: Operation = Operation {
    name: "list_audit_trails",
    method: Method::GET,
    path: "/audit-trails",
    resource: "audit-trails",
    version: "v1",
    query: &["limit", "start", "filter", "sort"],
    success: &[200],
    pages: PageStyle::Legacy,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrail {
    pub id: String,

    /// e.g. `create_policy`.
    pub action: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// `success`, `partial_success` or `failure`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// `ui` or `api`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuditUser>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_entity: Option<EntityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_entity: Option<EntityRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type ListAuditTrailsResponse = ListResponse<AuditTrail>;

pub struct AuditTrails<'a> {
    executor: Executor<'a>,
}

impl<'a> AuditTrails<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    pub async fn list(&self, params: ListParams) -> Result<Response<ListAuditTrailsResponse>> {
        self.executor
            .send(Request::new(&LIST_AUDIT_TRAILS).query(params.into_query()))
            .await
    }

    pub fn list_all(&self, params: ListParams) -> Paginator<'a, ListAuditTrailsResponse> {
        Paginator::new(
            self.executor.clone(),
            Request::new(&LIST_AUDIT_TRAILS).query(params.into_query()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_filter_is_url_encoded_and_embed_dropped() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/audit-trails")
            .match_query(Matcher::Exact(
                "filter=%7B%22action%22%3A%7B%22%24eq%22%3A%22login%22%7D%7D".into(),
            ))
            .with_status(200)
            .with_body(
                json!({
                    "_embedded": {"items": [{
                        "id": "a-1",
                        "action": "login",
                        "user": {"email": "ops@example.com"},
                        "primary_entity": {"type": "user", "id": "42"}
                    }]},
                    "start": "1",
                    "total_pages_count": 1
                })
                .to_string(),
            )
            .create_async()
            .await;

        let config = Config::builder()
            .api_token("secret")
            .hostname(server.url())
            .build_with_env(|_| None)
            .unwrap();
        let trails = AuditTrails::new(&config).unwrap();
        let page = trails
            .list(
                ListParams::new()
                    .filter(r#"{"action":{"$eq":"login"}}"#)
                    .embed("read-user"),
            )
            .await
            .unwrap()
            .into_parsed()
            .unwrap();

        let trail = &page.items()[0];
        assert_eq!(trail.user.as_ref().unwrap().email.as_deref(), Some("ops@example.com"));
        assert_eq!(trail.primary_entity.as_ref().unwrap().entity_type, "user");
        assert!(!page.has_next());
        mock.assert_async().await;
    }
}
