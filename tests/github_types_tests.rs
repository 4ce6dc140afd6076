use chrono::{DateTime, Utc};
use gitview::github::types::sort_repositories_newest_first;
use gitview::github::{Commit, Event, Profile, Repository, summarize};

fn timestamp(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC3339 timestamp")
}

#[test]
fn profile_parses_and_ignores_extra_upstream_fields() {
    let payload = r#"{
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "name": "The Octocat",
        "company": "@github",
        "bio": null,
        "public_repos": 8,
        "followers": 10000
    }"#;

    let profile: Profile = serde_json::from_str(payload).expect("profile should parse");
    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name.as_deref(), Some("The Octocat"));
    assert_eq!(profile.bio, None);
    assert_eq!(profile.public_repos, 8);
}

#[test]
fn repositories_parse_from_api_shape() {
    let payload = r#"[
        {
            "name": "Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "created_at": "2011-01-26T19:01:12Z",
            "fork": false,
            "stargazers_count": 3
        }
    ]"#;

    let repos: Vec<Repository> = serde_json::from_str(payload).expect("repos should parse");
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "Hello-World");
    assert_eq!(repos[0].created_at, timestamp("2011-01-26T19:01:12Z"));
}

#[test]
fn repositories_sort_newest_first() {
    let mut repos = vec![
        Repository {
            name: "oldest".to_string(),
            html_url: "https://github.com/u/oldest".to_string(),
            created_at: timestamp("2019-05-01T00:00:00Z"),
        },
        Repository {
            name: "newest".to_string(),
            html_url: "https://github.com/u/newest".to_string(),
            created_at: timestamp("2024-02-02T00:00:00Z"),
        },
        Repository {
            name: "middle".to_string(),
            html_url: "https://github.com/u/middle".to_string(),
            created_at: timestamp("2021-09-15T12:00:00Z"),
        },
    ];

    sort_repositories_newest_first(&mut repos);

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["newest", "middle", "oldest"]);
}

#[test]
fn repository_sort_keeps_api_order_on_equal_timestamps() {
    let shared = timestamp("2022-06-01T08:00:00Z");
    let mut repos = vec![
        Repository {
            name: "first-in-api-order".to_string(),
            html_url: "https://github.com/u/a".to_string(),
            created_at: shared,
        },
        Repository {
            name: "second-in-api-order".to_string(),
            html_url: "https://github.com/u/b".to_string(),
            created_at: shared,
        },
        Repository {
            name: "newer".to_string(),
            html_url: "https://github.com/u/c".to_string(),
            created_at: timestamp("2023-06-01T08:00:00Z"),
        },
    ];

    sort_repositories_newest_first(&mut repos);

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["newer", "first-in-api-order", "second-in-api-order"]
    );
}

#[test]
fn commits_parse_with_and_without_author() {
    let payload = r#"[
        {
            "sha": "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d",
            "commit": {
                "message": "Merge pull request #6",
                "author": { "name": "The Octocat", "email": "octocat@nowhere.com" }
            }
        },
        {
            "sha": "553c2077f0edc3d5dc5d17262f6aa498e69d6f8e",
            "commit": { "message": "first commit" }
        }
    ]"#;

    let commits: Vec<Commit> = serde_json::from_str(payload).expect("commits should parse");
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].commit.message, "Merge pull request #6");
    assert_eq!(
        commits[0].commit.author.as_ref().map(|a| a.name.as_str()),
        Some("The Octocat")
    );
    assert!(commits[1].commit.author.is_none());
}

#[test]
fn activity_summaries_describe_known_event_kinds() {
    let payload = r#"[
        {
            "type": "PushEvent",
            "repo": { "name": "octocat/Hello-World" },
            "created_at": "2024-03-01T10:00:00Z",
            "payload": { "commits": [{"sha": "a"}, {"sha": "b"}] }
        },
        {
            "type": "IssuesEvent",
            "repo": { "name": "octocat/Hello-World" },
            "created_at": "2024-03-01T11:00:00Z",
            "payload": { "action": "opened" }
        },
        {
            "type": "WatchEvent",
            "repo": { "name": "rust-lang/rust" },
            "created_at": "2024-03-01T12:00:00Z",
            "payload": {}
        },
        {
            "type": "ForkEvent",
            "repo": { "name": "rust-lang/rust" },
            "created_at": "2024-03-01T13:00:00Z",
            "payload": {}
        }
    ]"#;

    let events: Vec<Event> = serde_json::from_str(payload).expect("events should parse");
    let entries = summarize(&events);

    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries[0].description,
        "pushed 2 commit(s) to octocat/Hello-World"
    );
    assert_eq!(entries[1].description, "opened an issue in octocat/Hello-World");
    assert_eq!(entries[2].description, "starred rust-lang/rust");
    assert_eq!(entries[3].description, "ForkEvent in rust-lang/rust");
    assert_eq!(entries[0].occurred_at, Some(timestamp("2024-03-01T10:00:00Z")));
}

#[test]
fn activity_summary_tolerates_missing_repo_and_payload() {
    let payload = r#"[{ "type": "PushEvent" }]"#;

    let events: Vec<Event> = serde_json::from_str(payload).expect("events should parse");
    let entries = summarize(&events);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].repository, "unknown repository");
    assert_eq!(
        entries[0].description,
        "pushed 0 commit(s) to unknown repository"
    );
    assert!(entries[0].occurred_at.is_none());
}
