//!
//! Twitter API v2 client: publish statuses and threads, read the home
//! timeline and DM events.

use serde::{Deserialize, Serialize};
use ureq::Agent;

use crate::client::{ApiError, agent, is_success};
use crate::config::TwitterConfig;
use crate::output::{FeedItem, Message, PostResult};

const BASE_URL: &str = "https://api.twitter.com/2";
const NETWORK: &str = "twitter";

pub struct TwitterClient {
    agent: Agent,
    token: String,
    user_id: String,
}

#[derive(Serialize)]
struct CreateTweetRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<ReplyTarget<'a>>,
}

#[derive(Serialize)]
struct ReplyTarget<'a> {
    in_reply_to_tweet_id: &'a str,
}

#[derive(Deserialize)]
struct CreateTweetResponse {
    data: CreatedTweet,
}

#[derive(Deserialize)]
struct CreatedTweet {
    id: String,
    text: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TimelineResponse {
    data: Vec<TimelineTweet>,
    includes: Includes,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TimelineTweet {
    id: String,
    text: String,
    author_id: String,
    created_at: String,
    public_metrics: PublicMetrics,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PublicMetrics {
    like_count: u64,
    retweet_count: u64,
    reply_count: u64,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Includes {
    users: Vec<UserRef>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct UserRef {
    id: String,
    username: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DmEventsResponse {
    data: Vec<DmEvent>,
    includes: Includes,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DmEvent {
    id: String,
    text: String,
    sender_id: String,
    created_at: String,
}

/// Error body shape used by the v2 API.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ApiErrorBody {
    detail: String,
    title: String,
}

impl TwitterClient {
    pub fn new(cfg: &TwitterConfig) -> Self {
        Self {
            agent: agent(),
            token: cfg.access_token.clone(),
            user_id: cfg.user_id.clone(),
        }
    }

    /// Publish a single status.
    pub fn post_status(&self, text: &str) -> Result<PostResult, ApiError> {
        self.create_tweet(text, None)
    }

    /// Publish an ordered thread: each chunk replies to the previous one.
    /// A mid-thread failure aborts; chunks already published stay up.
    pub fn post_thread(&self, chunks: &[String]) -> Result<Vec<PostResult>, ApiError> {
        let mut results = Vec::with_capacity(chunks.len());
        let mut last_id = String::new();

        for chunk in chunks {
            let reply_to = (!last_id.is_empty()).then_some(last_id.as_str());
            let result = self.create_tweet(chunk, reply_to)?;
            last_id = result.id.clone();
            results.push(result);
        }

        Ok(results)
    }

    fn create_tweet(&self, text: &str, reply_to: Option<&str>) -> Result<PostResult, ApiError> {
        let request = CreateTweetRequest {
            text,
            reply: reply_to.map(|id| ReplyTarget {
                in_reply_to_tweet_id: id,
            }),
        };

        let url = format!("{BASE_URL}/tweets");
        log::debug!("POST {url}");
        let mut response = self
            .agent
            .post(url.as_str())
            .header("Authorization", format!("Bearer {}", self.token))
            .send_json(&request)?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        if !is_success(status) {
            return Err(error_from(status, &body));
        }

        let parsed: CreateTweetResponse = serde_json::from_str(&body)?;
        Ok(PostResult {
            network: NETWORK.to_string(),
            id: parsed.data.id.clone(),
            url: format!("https://twitter.com/i/status/{}", parsed.data.id),
            text: parsed.data.text,
        })
    }

    /// Reverse-chronological home timeline.
    pub fn timeline(&self, count: usize) -> Result<Vec<FeedItem>, ApiError> {
        let count = if count == 0 { 10 } else { count };
        let url = format!(
            "{BASE_URL}/users/{}/timelines/reverse_chronological\
             ?max_results={count}\
             &tweet.fields=created_at,public_metrics,author_id\
             &expansions=author_id&user.fields=username",
            self.user_id
        );

        let body = self.get(&url)?;
        let parsed: TimelineResponse = serde_json::from_str(&body)?;
        let users = parsed.includes;

        Ok(parsed
            .data
            .into_iter()
            .map(|tweet| FeedItem {
                id: tweet.id,
                author: users.username_for(&tweet.author_id),
                text: tweet.text,
                created_at: or_now(tweet.created_at),
                likes: tweet.public_metrics.like_count,
                reposts: Some(tweet.public_metrics.retweet_count),
                replies: tweet.public_metrics.reply_count,
            })
            .collect())
    }

    /// Recent direct message events.
    pub fn direct_messages(&self, count: usize) -> Result<Vec<Message>, ApiError> {
        let count = if count == 0 { 10 } else { count };
        let url = format!(
            "{BASE_URL}/dm_events?max_results={count}\
             &dm_event.fields=created_at,sender_id&event_types=MessageCreate\
             &expansions=sender_id&user.fields=username,name"
        );

        let body = self.get(&url)?;
        let parsed: DmEventsResponse = serde_json::from_str(&body)?;
        let users = parsed.includes;

        Ok(parsed
            .data
            .into_iter()
            .map(|event| Message {
                id: event.id,
                sender: users.username_for(&event.sender_id),
                text: event.text,
                created_at: or_now(event.created_at),
            })
            .collect())
    }

    fn get(&self, url: &str) -> Result<String, ApiError> {
        log::debug!("GET {url}");
        let mut response = self
            .agent
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .call()?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        if !is_success(status) {
            return Err(error_from(status, &body));
        }
        Ok(body)
    }
}

impl Includes {
    fn username_for(&self, id: &str) -> String {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }
}

fn or_now(created_at: String) -> String {
    if created_at.is_empty() {
        chrono::Utc::now().to_rfc3339()
    } else {
        created_at
    }
}

fn error_from(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Auth(NETWORK),
        403 => ApiError::Forbidden(NETWORK),
        429 => ApiError::RateLimited,
        _ => {
            let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
            let message = if parsed.detail.is_empty() {
                body.to_string()
            } else {
                parsed.detail
            };
            ApiError::Api {
                network: NETWORK,
                status,
                message,
            }
        }
    }
}
