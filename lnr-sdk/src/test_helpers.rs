// ABOUTME: Test helper utilities for mocking Linear API responses
// ABOUTME: Provides canned paginated and mutation payloads for mockito-backed tests

use serde_json::{Value, json};

pub fn teams_page(teams: &[(&str, &str)], end_cursor: Option<&str>) -> Value {
    json!({
        "data": {
            "teams": {
                "nodes": teams
                    .iter()
                    .map(|(id, name)| json!({ "id": id, "name": name }))
                    .collect::<Vec<_>>(),
                "pageInfo": {
                    "hasNextPage": end_cursor.is_some(),
                    "endCursor": end_cursor,
                }
            }
        }
    })
}

pub fn labels_page(labels: &[(&str, &str)], end_cursor: Option<&str>) -> Value {
    json!({
        "data": {
            "team": {
                "labels": {
                    "nodes": labels
                        .iter()
                        .map(|(id, name)| json!({ "id": id, "name": name }))
                        .collect::<Vec<_>>(),
                    "pageInfo": {
                        "hasNextPage": end_cursor.is_some(),
                        "endCursor": end_cursor,
                    }
                }
            }
        }
    })
}

pub fn users_page(users: &[(&str, &str, &str)], end_cursor: Option<&str>) -> Value {
    json!({
        "data": {
            "team": {
                "organization": {
                    "users": {
                        "nodes": users
                            .iter()
                            .map(|(id, name, email)| {
                                json!({ "id": id, "name": name, "email": email })
                            })
                            .collect::<Vec<_>>(),
                        "pageInfo": {
                            "hasNextPage": end_cursor.is_some(),
                            "endCursor": end_cursor,
                        }
                    }
                }
            }
        }
    })
}

pub fn states_page(states: &[(&str, &str, &str)], end_cursor: Option<&str>) -> Value {
    json!({
        "data": {
            "team": {
                "states": {
                    "nodes": states
                        .iter()
                        .map(|(id, name, kind)| {
                            json!({ "id": id, "name": name, "type": kind })
                        })
                        .collect::<Vec<_>>(),
                    "pageInfo": {
                        "hasNextPage": end_cursor.is_some(),
                        "endCursor": end_cursor,
                    }
                }
            }
        }
    })
}

pub fn issue_create_success(identifier: &str) -> Value {
    json!({
        "data": {
            "issueCreate": {
                "success": true,
                "issue": {
                    "id": "new-issue-id",
                    "identifier": identifier,
                    "title": "Test New Issue",
                    "url": format!("https://linear.app/acme/issue/{identifier}"),
                }
            }
        }
    })
}

pub fn issue_create_rejected() -> Value {
    json!({
        "data": {
            "issueCreate": {
                "success": false,
                "issue": null,
            }
        }
    })
}

pub fn error_response(messages: &[&str]) -> Value {
    json!({
        "errors": messages
            .iter()
            .map(|message| json!({ "message": message }))
            .collect::<Vec<_>>()
    })
}
