//! Typed Slack incoming-webhook payload.

use crate::services::messages::{IN_STOCK_HEADLINE, PRODUCT_PAGE_LABEL, PRODUCT_PAGE_LINK_TEXT};
use serde::{Deserialize, Serialize};

/// Message posted to a Slack incoming webhook
///
/// `text` is the notification fallback; `blocks` is the rendered body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub text: String,
    pub blocks: Vec<Block>,
}

/// Layout block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
}

/// Text object of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl Block {
    pub fn markdown(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::Mrkdwn { text: text.into() },
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::PlainText { text: text.into() },
        }
    }
}

/// Mention prefix for `member_id`, or an empty string without one
///
/// The token carries a trailing space so it can be prepended directly.
pub fn mention_prefix(member_id: Option<&str>) -> String {
    match member_id {
        Some(id) if !id.is_empty() => format!("<@{}> ", id),
        _ => String::new(),
    }
}

impl SlackMessage {
    /// Builds the in-stock alert
    ///
    /// The mention, when present, leads both the fallback text and the
    /// first section. The second section links to the product page.
    pub fn in_stock_alert(summary: &str, target_url: &str, member_id: Option<&str>) -> Self {
        let mention = mention_prefix(member_id);

        Self {
            text: format!("{}{}", mention, summary),
            blocks: vec![
                Block::markdown(format!("{}*{}*", mention, IN_STOCK_HEADLINE)),
                Block::markdown(format!(
                    "{}: <{}|{}>",
                    PRODUCT_PAGE_LABEL, target_url, PRODUCT_PAGE_LINK_TEXT
                )),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::messages::in_stock_summary;
    use serde_json::json;

    const URL: &str = "https://shop.example/products/tee";

    #[test]
    fn test_alert_with_mention() {
        let summary = in_stock_summary(URL);
        let message = SlackMessage::in_stock_alert(&summary, URL, Some("U123"));

        assert!(message.text.starts_with("<@U123> 商品在庫あります！"));
        assert_eq!(message.text, format!("<@U123> {}", summary));
        assert_eq!(message.blocks[0], Block::markdown("<@U123> *商品在庫あります！*"));
    }

    #[test]
    fn test_alert_without_mention_has_no_token() {
        for member_id in [None, Some("")] {
            let message = SlackMessage::in_stock_alert(&in_stock_summary(URL), URL, member_id);
            let serialized = serde_json::to_string(&message).unwrap();

            assert!(!serialized.contains("<@"));
            assert!(message.text.starts_with("商品在庫あります！"));
            assert_eq!(message.blocks[0], Block::markdown("*商品在庫あります！*"));
        }
    }

    #[test]
    fn test_alert_payload_shape() {
        let message = SlackMessage::in_stock_alert(&in_stock_summary(URL), URL, Some("U123"));
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(
            value,
            json!({
                "text": format!("<@U123> 商品在庫あります！\n商品ページ: {}", URL),
                "blocks": [
                    {
                        "type": "section",
                        "text": { "type": "mrkdwn", "text": "<@U123> *商品在庫あります！*" }
                    },
                    {
                        "type": "section",
                        "text": { "type": "mrkdwn", "text": format!("商品ページ: <{}|こちらをクリック>", URL) }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_plain_text_block_serialization() {
        let value = serde_json::to_value(Block::plain("hello")).unwrap();
        assert_eq!(
            value,
            json!({ "type": "section", "text": { "type": "plain_text", "text": "hello" } })
        );
    }
}
