//!
//! LinkedIn REST client: create posts as a member, read the member's own
//! posts and conversations. Uses the versioned `/rest` API, which wants
//! the `LinkedIn-Version` and Restli protocol headers on every call.

use serde::{Deserialize, Serialize};
use ureq::Agent;

use crate::client::{ApiError, agent, is_success};
use crate::config::LinkedinConfig;
use crate::output::{FeedItem, Message, PostResult};

const BASE_URL: &str = "https://api.linkedin.com";
const API_VERSION: &str = "202602";
const NETWORK: &str = "linkedin";

pub struct LinkedinClient {
    agent: Agent,
    token: String,
    person_urn: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePostRequest<'a> {
    author: &'a str,
    commentary: &'a str,
    visibility: &'a str,
    distribution: Distribution<'a>,
    lifecycle_state: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Distribution<'a> {
    feed_distribution: &'a str,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CreatePostResponse {
    id: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PostsResponse {
    elements: Vec<PostElement>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
struct PostElement {
    id: String,
    commentary: String,
    created_at: i64,
    social_detail: Option<SocialDetail>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
struct SocialDetail {
    total_social_activity_counts: ActivityCounts,
}

#[derive(Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
struct ActivityCounts {
    num_likes: u64,
    num_comments: u64,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ConversationsResponse {
    elements: Vec<Conversation>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Conversation {
    id: String,
    events: Vec<ConversationEvent>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
struct ConversationEvent {
    event_content: EventContent,
    from: EventSender,
    created_at: i64,
}

#[derive(Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
struct EventContent {
    message_event: MessageEvent,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MessageEvent {
    body: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct EventSender {
    #[serde(rename = "com.linkedin.voyager.messaging.MessagingMember")]
    member: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ApiErrorBody {
    message: String,
}

impl LinkedinClient {
    pub fn new(cfg: &LinkedinConfig) -> Self {
        Self {
            agent: agent(),
            token: cfg.access_token.clone(),
            person_urn: cfg.person_urn.clone(),
        }
    }

    /// Publish a public post authored as the configured member.
    pub fn create_post(&self, text: &str) -> Result<PostResult, ApiError> {
        let request = CreatePostRequest {
            author: &self.person_urn,
            commentary: text,
            visibility: "PUBLIC",
            distribution: Distribution {
                feed_distribution: "MAIN_FEED",
            },
            lifecycle_state: "PUBLISHED",
        };

        let url = format!("{BASE_URL}/rest/posts");
        log::debug!("POST {url}");
        let mut response = self
            .agent
            .post(url.as_str())
            .header("Authorization", format!("Bearer {}", self.token))
            .header("LinkedIn-Version", API_VERSION)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .send_json(&request)?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        if !is_success(status) {
            return Err(error_from(status, &body));
        }

        // A 201 may come back with an empty body; the id is optional.
        let parsed: CreatePostResponse = serde_json::from_str(&body).unwrap_or_default();
        Ok(PostResult {
            network: NETWORK.to_string(),
            id: parsed.id,
            url: String::new(),
            text: text.to_string(),
        })
    }

    /// The member's own recent posts, most recently modified first.
    pub fn feed(&self, count: usize) -> Result<Vec<FeedItem>, ApiError> {
        let count = if count == 0 { 10 } else { count };
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("author", &self.person_urn)
            .append_pair("q", "author")
            .append_pair("count", &count.to_string())
            .append_pair("sortBy", "LAST_MODIFIED")
            .finish();

        let body = self.get(&format!("{BASE_URL}/rest/posts?{query}"))?;
        let parsed: PostsResponse = serde_json::from_str(&body)?;

        Ok(parsed
            .elements
            .into_iter()
            .map(|post| {
                let counts = post
                    .social_detail
                    .map(|d| d.total_social_activity_counts)
                    .unwrap_or_default();
                FeedItem {
                    id: post.id,
                    author: "You".to_string(),
                    text: post.commentary,
                    created_at: millis_to_rfc3339(post.created_at),
                    likes: counts.num_likes,
                    reposts: None,
                    replies: counts.num_comments,
                }
            })
            .collect())
    }

    /// Recent conversation messages, flattened across conversations and
    /// capped at `count`.
    pub fn messages(&self, count: usize) -> Result<Vec<Message>, ApiError> {
        let count = if count == 0 { 10 } else { count };
        let body = self.get(&format!(
            "{BASE_URL}/rest/conversations?q=participant&count={count}"
        ))?;
        let parsed: ConversationsResponse = serde_json::from_str(&body)?;

        let mut messages = Vec::new();
        for conversation in parsed.elements {
            for event in conversation.events {
                messages.push(Message {
                    id: conversation.id.clone(),
                    sender: event.from.member,
                    text: event.event_content.message_event.body,
                    created_at: millis_to_rfc3339(event.created_at),
                });
            }
        }
        messages.truncate(count);

        Ok(messages)
    }

    fn get(&self, url: &str) -> Result<String, ApiError> {
        log::debug!("GET {url}");
        let mut response = self
            .agent
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("LinkedIn-Version", API_VERSION)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .call()?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        if !is_success(status) {
            return Err(error_from(status, &body));
        }
        Ok(body)
    }
}

fn millis_to_rfc3339(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}

fn error_from(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Auth(NETWORK),
        403 => ApiError::Forbidden(NETWORK),
        429 => ApiError::RateLimited,
        _ => {
            let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
            let message = if parsed.message.is_empty() {
                body.to_string()
            } else {
                parsed.message
            };
            ApiError::Api {
                network: NETWORK,
                status,
                message,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_request_uses_rest_field_names() {
        let request = CreatePostRequest {
            author: "urn:li:person:abc",
            commentary: "hello",
            visibility: "PUBLIC",
            distribution: Distribution {
                feed_distribution: "MAIN_FEED",
            },
            lifecycle_state: "PUBLISHED",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["lifecycleState"], "PUBLISHED");
        assert_eq!(json["distribution"]["feedDistribution"], "MAIN_FEED");
    }

    #[test]
    fn conversation_events_deserialize_sender_member() {
        let raw = r#"{
            "elements": [{
                "id": "c1",
                "events": [{
                    "eventContent": {"messageEvent": {"body": "hi"}},
                    "from": {"com.linkedin.voyager.messaging.MessagingMember": "urn:li:member:9"},
                    "createdAt": 1700000000000
                }]
            }]
        }"#;
        let parsed: ConversationsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.elements[0].events[0].from.member, "urn:li:member:9");
        assert_eq!(parsed.elements[0].events[0].event_content.message_event.body, "hi");
    }

    #[test]
    fn missing_social_detail_counts_as_zero() {
        let raw = r#"{"elements":[{"id":"p1","commentary":"text","createdAt":0}]}"#;
        let parsed: PostsResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.elements[0].social_detail.is_none());
    }

    #[test]
    fn error_body_message_is_preferred() {
        let err = error_from(422, r#"{"message":"bad urn","status":422}"#);
        match err {
            ApiError::Api { message, .. } => assert_eq!(message, "bad urn"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
