//! Inbound request envelope
//!
//! The already-parsed request the voice platform delivers to the skill:
//! session info plus either a lifecycle notification or a named intent
//! carrying slot values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub session: SessionInfo,
    pub request: RequestBody,
}

/// The conversational context identifying which Game aggregate applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    /// Set by the platform on the first request of a session.
    #[serde(default, rename = "new")]
    pub is_new: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    #[serde(rename = "LaunchRequest")]
    Launch,
    #[serde(rename = "SessionStartedRequest")]
    SessionStarted,
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded,
    #[serde(rename = "IntentRequest")]
    Intent { intent: IntentPayload },
}

/// A named, slot-carrying request representing a recognized user utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// A named parameter extracted from user speech, attached to an intent.
/// The platform sends the slot without a value when nothing was recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl IntentPayload {
    /// Raw value of a slot, if the platform filled it.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|slot| slot.value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_intent_request() {
        let raw = r#"{
            "session": {"sessionId": "amzn1.echo-api.session.abc", "new": false},
            "request": {
                "type": "IntentRequest",
                "intent": {
                    "name": "AddScoreIntent",
                    "slots": {
                        "PlayerName": {"name": "PlayerName", "value": "john"},
                        "ScoreNumber": {"name": "ScoreNumber", "value": "3"}
                    }
                }
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.session.session_id, "amzn1.echo-api.session.abc");
        assert!(!envelope.session.is_new);

        match envelope.request {
            RequestBody::Intent { intent } => {
                assert_eq!(intent.name, "AddScoreIntent");
                assert_eq!(intent.slot_value("PlayerName"), Some("john"));
                assert_eq!(intent.slot_value("ScoreNumber"), Some("3"));
                assert_eq!(intent.slot_value("Missing"), None);
            }
            other => panic!("expected intent request, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_launch_request_without_new_flag() {
        let raw = r#"{
            "session": {"sessionId": "s1"},
            "request": {"type": "LaunchRequest"}
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(raw).unwrap();
        assert!(!envelope.session.is_new);
        assert!(matches!(envelope.request, RequestBody::Launch));
    }

    #[test]
    fn test_empty_slot_value_is_none() {
        let raw = r#"{
            "session": {"sessionId": "s1", "new": true},
            "request": {
                "type": "IntentRequest",
                "intent": {
                    "name": "AddPlayerIntent",
                    "slots": {"PlayerName": {"name": "PlayerName"}}
                }
            }
        }"#;

        let envelope: RequestEnvelope = serde_json::from_str(raw).unwrap();
        match envelope.request {
            RequestBody::Intent { intent } => {
                assert_eq!(intent.slot_value("PlayerName"), None);
            }
            other => panic!("expected intent request, got {:?}", other),
        }
    }
}
