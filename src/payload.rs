use serde::Serialize;

use crate::message::Mention;

/// Provider-specific webhook payload, built once per run and sent once.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NotificationPayload {
    Flat(FlatMessage),
    Card(CardMessage),
}

/// Minimal shape for webhook consumers that take a plain message (Slack).
#[derive(Debug, Serialize)]
pub struct FlatMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    username: String,
    text: String,
}

/// Teams message wrapping an adaptive card attachment.
#[derive(Debug, Serialize)]
pub struct CardMessage {
    #[serde(rename = "type")]
    message_type: String,
    attachments: Vec<CardAttachment>,
}

#[derive(Debug, Serialize)]
struct CardAttachment {
    #[serde(rename = "contentType")]
    content_type: String,
    content: AdaptiveCard,
}

#[derive(Debug, Serialize)]
struct AdaptiveCard {
    #[serde(rename = "type")]
    card_type: String,
    body: Vec<TextBlock>,
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    msteams: MsTeamsExtension,
}

#[derive(Debug, Serialize)]
struct TextBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: String,
    wrap: bool,
}

/// Teams validates inline `<at>` tokens against this entity list.
#[derive(Debug, Serialize)]
struct MsTeamsExtension {
    entities: Vec<MentionEntity>,
}

#[derive(Debug, Serialize)]
struct MentionEntity {
    #[serde(rename = "type")]
    entity_type: String,
    text: String,
    mentioned: Mentioned,
}

#[derive(Debug, Serialize)]
struct Mentioned {
    id: String,
    name: String,
}

/// Wrap `text` (and `channel` when provided) into a flat webhook message.
pub fn format_flat(channel: Option<&str>, text: &str) -> NotificationPayload {
    NotificationPayload::Flat(FlatMessage {
        channel: channel.map(str::to_string),
        username: "PR Reviews Reminder".to_string(),
        text: text.to_string(),
    })
}

/// Wrap `text` plus resolved mentions into an adaptive-card message.
pub fn format_with_mentions(text: &str, mentions: &[Mention]) -> NotificationPayload {
    let entities = mentions
        .iter()
        .map(|mention| MentionEntity {
            entity_type: "mention".to_string(),
            text: format!("<at>{}</at>", mention.login),
            mentioned: Mentioned {
                id: mention.id.clone(),
                name: mention.login.clone(),
            },
        })
        .collect();

    NotificationPayload::Card(CardMessage {
        message_type: "message".to_string(),
        attachments: vec![CardAttachment {
            content_type: "application/vnd.microsoft.card.adaptive".to_string(),
            content: AdaptiveCard {
                card_type: "AdaptiveCard".to_string(),
                body: vec![TextBlock {
                    block_type: "TextBlock".to_string(),
                    text: text.to_string(),
                    wrap: true,
                }],
                schema: "http://adaptivecards.io/schemas/adaptive-card.json".to_string(),
                version: "1.0".to_string(),
                msteams: MsTeamsExtension { entities },
            },
        }],
    })
}
