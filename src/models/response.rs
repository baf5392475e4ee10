//! Outbound response values
//!
//! Handlers return exactly one of these per invocation. `ask` keeps the
//! session open for another turn, `tell` closes it, and `tell_with_card`
//! closes it with a companion-app card attached. Speech is plain text or
//! SSML markup.

use serde::{Deserialize, Serialize};

/// Spoken payload: plain text or SSML markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeechOutput {
    Plain(String),
    Ssml(String),
}

impl SpeechOutput {
    pub fn as_str(&self) -> &str {
        match self {
            SpeechOutput::Plain(text) | SpeechOutput::Ssml(text) => text,
        }
    }
}

/// Visual card payload for tell-with-card responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCard {
    pub title: String,
    pub content: String,
}

/// Terminal response of one handler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillResponse {
    Ask {
        speech: SpeechOutput,
        reprompt: Option<SpeechOutput>,
    },
    Tell {
        speech: SpeechOutput,
    },
    TellWithCard {
        speech: SpeechOutput,
        card: SimpleCard,
    },
}

impl SkillResponse {
    /// Speak and keep the session open, with no reprompt.
    pub fn ask(speech: impl Into<String>) -> Self {
        SkillResponse::Ask {
            speech: SpeechOutput::Plain(speech.into()),
            reprompt: None,
        }
    }

    /// Speak and keep the session open, repeating the reprompt if the user
    /// stays silent.
    pub fn ask_with_reprompt(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        SkillResponse::Ask {
            speech: SpeechOutput::Plain(speech.into()),
            reprompt: Some(SpeechOutput::Plain(reprompt.into())),
        }
    }

    /// Ask with the same SSML payload as speech and reprompt.
    pub fn ask_ssml(markup: impl Into<String>) -> Self {
        let markup = markup.into();
        SkillResponse::Ask {
            speech: SpeechOutput::Ssml(markup.clone()),
            reprompt: Some(SpeechOutput::Ssml(markup)),
        }
    }

    /// Speak and end the session.
    pub fn tell(speech: impl Into<String>) -> Self {
        SkillResponse::Tell {
            speech: SpeechOutput::Plain(speech.into()),
        }
    }

    /// Speak, end the session, and attach a card.
    pub fn tell_with_card(
        speech: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        SkillResponse::TellWithCard {
            speech: SpeechOutput::Plain(speech.into()),
            card: SimpleCard {
                title: title.into(),
                content: content.into(),
            },
        }
    }

    pub fn speech(&self) -> &SpeechOutput {
        match self {
            SkillResponse::Ask { speech, .. }
            | SkillResponse::Tell { speech }
            | SkillResponse::TellWithCard { speech, .. } => speech,
        }
    }

    pub fn reprompt(&self) -> Option<&SpeechOutput> {
        match self {
            SkillResponse::Ask { reprompt, .. } => reprompt.as_ref(),
            _ => None,
        }
    }

    pub fn should_end_session(&self) -> bool {
        !matches!(self, SkillResponse::Ask { .. })
    }

    /// Convert into the platform wire form.
    pub fn into_envelope(self) -> ResponseEnvelope {
        let (speech, reprompt, card, should_end_session) = match self {
            SkillResponse::Ask { speech, reprompt } => (speech, reprompt, None, false),
            SkillResponse::Tell { speech } => (speech, None, None, true),
            SkillResponse::TellWithCard { speech, card } => (speech, None, Some(card), true),
        };

        ResponseEnvelope {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: OutputSpeech::from(speech),
                reprompt: reprompt.map(|speech| Reprompt {
                    output_speech: OutputSpeech::from(speech),
                }),
                card,
                should_end_session,
            },
        }
    }
}

/// Wire form of a response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<SimpleCard>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "PlainText")]
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl From<SpeechOutput> for OutputSpeech {
    fn from(speech: SpeechOutput) -> Self {
        match speech {
            SpeechOutput::Plain(text) => OutputSpeech::PlainText { text },
            SpeechOutput::Ssml(ssml) => OutputSpeech::Ssml { ssml },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_keeps_session_open() {
        let response = SkillResponse::ask_with_reprompt("Who's next?", "Next player?");
        assert!(!response.should_end_session());
        assert_eq!(response.speech().as_str(), "Who's next?");
        assert_eq!(response.reprompt().map(SpeechOutput::as_str), Some("Next player?"));
    }

    #[test]
    fn test_tell_closes_session() {
        let response = SkillResponse::tell("Goodbye");
        assert!(response.should_end_session());
        assert!(response.reprompt().is_none());
    }

    #[test]
    fn test_plain_wire_form() {
        let envelope = SkillResponse::ask_with_reprompt("hello", "again").into_envelope();
        let wire = serde_json::to_value(&envelope).unwrap();

        assert_eq!(wire["version"], "1.0");
        assert_eq!(wire["response"]["outputSpeech"]["type"], "PlainText");
        assert_eq!(wire["response"]["outputSpeech"]["text"], "hello");
        assert_eq!(
            wire["response"]["reprompt"]["outputSpeech"]["text"],
            "again"
        );
        assert_eq!(wire["response"]["shouldEndSession"], false);
        assert!(wire["response"].get("card").is_none());
    }

    #[test]
    fn test_ssml_wire_form() {
        let envelope = SkillResponse::ask_ssml("<speak>hi</speak>").into_envelope();
        let wire = serde_json::to_value(&envelope).unwrap();

        assert_eq!(wire["response"]["outputSpeech"]["type"], "SSML");
        assert_eq!(wire["response"]["outputSpeech"]["ssml"], "<speak>hi</speak>");
    }

    #[test]
    fn test_card_wire_form() {
        let envelope = SkillResponse::tell_with_card("done", "", "").into_envelope();
        let wire = serde_json::to_value(&envelope).unwrap();

        assert_eq!(wire["response"]["shouldEndSession"], true);
        assert_eq!(wire["response"]["card"]["title"], "");
        assert_eq!(wire["response"]["card"]["content"], "");
    }
}
