use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A public event from `GET /users/{username}/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub repo: Option<EventRepo>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// A single line of a user's recent-activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub kind: String,
    pub repository: String,
    pub occurred_at: Option<DateTime<Utc>>,
    pub description: String,
}

/// Turn raw public events into display-ready activity entries.
pub fn summarize(events: &[Event]) -> Vec<ActivityEntry> {
    events
        .iter()
        .map(|event| {
            let repository = event
                .repo
                .as_ref()
                .map(|repo| repo.name.as_str())
                .unwrap_or("unknown repository");

            let description = match event.kind.as_str() {
                "PushEvent" => {
                    let commits = event
                        .payload
                        .get("commits")
                        .and_then(Value::as_array)
                        .map(Vec::len)
                        .unwrap_or(0);
                    format!("pushed {commits} commit(s) to {repository}")
                }
                "IssuesEvent" => {
                    let action = event
                        .payload
                        .get("action")
                        .and_then(Value::as_str)
                        .unwrap_or("updated");
                    format!("{action} an issue in {repository}")
                }
                "WatchEvent" => format!("starred {repository}"),
                other => format!("{other} in {repository}"),
            };

            ActivityEntry {
                kind: event.kind.clone(),
                repository: repository.to_string(),
                occurred_at: event.created_at,
                description,
            }
        })
        .collect()
}
