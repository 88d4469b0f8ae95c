//! Human-readable console rendering of a snapshot.

use colored::*;

use super::dto::ProfileSnapshot;
use crate::domain::entities::GateResolution;

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {label:<16}{value}")
}

/// Renders the snapshot as console lines.
pub fn render(snapshot: &ProfileSnapshot) -> String {
    let mut lines = vec![
        "Profile".bright_blue().bold().to_string(),
        field("username:", snapshot.username.cyan()),
        field("url:", &snapshot.url),
        field("id:", snapshot.id),
        field("avatar image:", or_none(snapshot.avatar.as_deref())),
        field("isActive:", snapshot.is_active),
        field("description:", or_none(snapshot.description.as_deref())),
        field("createdAt unix:", snapshot.created_at_unix),
        field("updatedAt unix:", snapshot.updated_at_unix),
        field("createdAt:", or_none(snapshot.created_at.as_deref())),
        field("updatedAt:", or_none(snapshot.updated_at.as_deref())),
        String::new(),
        format!("Links ({})", snapshot.links.len())
            .bright_white()
            .bold()
            .to_string(),
    ];

    lines.extend(snapshot.links.iter().map(|link| {
        let title = link.title.as_deref().unwrap_or("(untitled)");
        format!("  {}: {}", title.bright_white(), link.url.bright_cyan())
    }));

    lines.push(String::new());
    lines.push(
        format!("Contacts ({})", snapshot.contacts.len())
            .bright_white()
            .bold()
            .to_string(),
    );
    lines.extend(snapshot.contacts.iter().map(|contact| {
        format!(
            "  {}: {}",
            contact.title.bright_white(),
            or_none(contact.url.as_deref()).bright_cyan()
        )
    }));

    let warning = match &snapshot.gates {
        GateResolution::Partial { pending, .. } => {
            Some(format!("warning: {pending} gated link(s) were not revealed"))
        }
        GateResolution::Failed { pending, reason } => {
            Some(format!("warning: {pending} gated link(s) hidden: {reason}"))
        }
        GateResolution::NotRequired | GateResolution::Resolved { .. } => None,
    };
    if let Some(warning) = warning {
        lines.push(String::new());
        lines.push(warning.yellow().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Prints the snapshot to stdout.
pub fn print(snapshot: &ProfileSnapshot) {
    print!("{}", render(snapshot));
}
