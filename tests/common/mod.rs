#![allow(dead_code)]

use linktree_snapshot::config::Config;
use serde_json::{Value, json};

pub const GATES_PATH: &str = "/api/profiles/validation/gates";

pub fn account(id: i64, username: &str) -> Value {
    json!({
        "username": username,
        "profilePictureUrl": format!("https://cdn.example.com/{username}.png"),
        "id": id,
        "isActive": true,
        "description": "Test profile",
        "createdAt": 1_600_000_000_000_i64,
        "updatedAt": 1_700_000_000_000_i64
    })
}

pub fn page_props(username: &str, links: Value, social_links: Value) -> Value {
    json!({
        "account": account(4242, username),
        "links": links,
        "socialLinks": social_links
    })
}

pub fn profile_html(page_props: &Value) -> String {
    let payload = json!({
        "props": { "pageProps": page_props },
        "page": "/[profile]",
        "buildId": "test"
    });
    format!(
        "<!DOCTYPE html><html><head><title>Profile</title></head><body>\
         <div id=\"__next\"></div>\
         <script id=\"__NEXT_DATA__\" type=\"application/json\">{payload}</script>\
         </body></html>"
    )
}

/// Visible link, gated link, and a payment widget.
pub fn mixed_links() -> Value {
    json!([
        { "id": "1", "url": "https://a.example", "locked": false, "title": "A", "type": "CLASSIC" },
        { "id": "2", "url": null, "locked": true, "title": null, "type": "CLASSIC" },
        { "id": "3", "url": null, "locked": false, "title": "Pay", "type": "COMMERCE_PAY" }
    ])
}

pub fn socials() -> Value {
    json!([
        { "type": "INSTAGRAM", "url": "https://instagram.com/tester" },
        { "type": "EMAIL_ADDRESS", "url": "mailto:tester@example.com" }
    ])
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.trim_end_matches('/').to_string(),
        profile_host: "127.0.0.1".to_string(),
        request_timeout_secs: 5,
        user_agent: "linktree-snapshot-tests".to_string(),
        ..Config::default()
    }
}
