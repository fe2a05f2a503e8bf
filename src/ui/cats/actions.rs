use serde::{Deserialize, Serialize};

use crate::feed::CatImage;
use crate::ui::cats::intent::CatsIntent;

/// String-tagged action vocabulary.
///
/// Two generations of the feed used different tags for the same transitions.
/// Each feed profile picks one; tags from the other vocabulary are unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVocabulary {
    /// `cats/catsLoading`, `cats/catsLoaded`
    #[default]
    Slice,
    /// `LOADING_CATS`, `ADD_CATS` (also reads `FETCH_CATS`)
    Legacy,
}

impl ActionVocabulary {
    pub fn name(self) -> &'static str {
        match self {
            Self::Slice => "slice",
            Self::Legacy => "legacy",
        }
    }

    pub fn loading_tag(self) -> &'static str {
        match self {
            Self::Slice => "cats/catsLoading",
            Self::Legacy => "LOADING_CATS",
        }
    }

    pub fn loaded_tag(self) -> &'static str {
        match self {
            Self::Slice => "cats/catsLoaded",
            Self::Legacy => "ADD_CATS",
        }
    }

    /// Older spelling of the loaded tag, accepted on decode only.
    fn loaded_alias(self) -> Option<&'static str> {
        match self {
            Self::Slice => None,
            Self::Legacy => Some("FETCH_CATS"),
        }
    }

    fn is_loaded_tag(self, kind: &str) -> bool {
        kind == self.loaded_tag() || self.loaded_alias() == Some(kind)
    }

    pub fn failed_tag(self) -> &'static str {
        match self {
            Self::Slice => "cats/catsFailed",
            Self::Legacy => "FETCH_CATS_FAILED",
        }
    }

    pub fn tag(self, intent: &CatsIntent) -> &'static str {
        match intent {
            CatsIntent::Loading => self.loading_tag(),
            CatsIntent::Loaded { .. } => self.loaded_tag(),
            CatsIntent::Failed { .. } => self.failed_tag(),
        }
    }

    pub fn encode(self, intent: &CatsIntent) -> TaggedAction {
        let mut action = TaggedAction::new(self.tag(intent));
        match intent {
            CatsIntent::Loading => {}
            CatsIntent::Loaded { images } => match self {
                Self::Slice => action.payload = Some(images.clone()),
                Self::Legacy => action.cats = Some(images.clone()),
            },
            CatsIntent::Failed { reason } => action.error = Some(reason.clone()),
        }
        action
    }

    /// Returns `None` for untagged actions, for tags outside this vocabulary
    /// and for a loaded action that carries no image list.
    ///
    /// A loaded action may carry its list under `payload` or `cats`.
    pub fn decode(self, action: &TaggedAction) -> Option<CatsIntent> {
        let kind = action.kind.as_deref()?;
        if kind == self.loading_tag() {
            Some(CatsIntent::Loading)
        } else if self.is_loaded_tag(kind) {
            action
                .payload
                .as_ref()
                .or(action.cats.as_ref())
                .map(|images| CatsIntent::Loaded {
                    images: images.clone(),
                })
        } else if kind == self.failed_tag() {
            Some(CatsIntent::Failed {
                reason: action
                    .error
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        } else {
            None
        }
    }
}

/// Wire form of an action: `{"type": "...", "payload": [...]}`.
///
/// Every field is optional on the wire; `{}` parses to an action with no tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaggedAction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Vec<CatImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cats: Option<Vec<CatImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaggedAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or("<untagged>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_serializes_without_payload() {
        let action = ActionVocabulary::Slice.encode(&CatsIntent::Loading);
        assert_eq!(
            serde_json::to_string(&action).unwrap(),
            r#"{"type":"cats/catsLoading"}"#
        );
    }

    #[test]
    fn loaded_serializes_with_payload() {
        let intent = CatsIntent::Loaded {
            images: vec![CatImage::new("www.example.com/cat1")],
        };
        let action = ActionVocabulary::Legacy.encode(&intent);
        assert_eq!(
            serde_json::to_string(&action).unwrap(),
            r#"{"type":"ADD_CATS","cats":[{"url":"www.example.com/cat1"}]}"#
        );
    }

    #[test]
    fn legacy_reads_both_loaded_spellings() {
        let add: TaggedAction =
            serde_json::from_str(r#"{"type": "ADD_CATS", "cats": [{"url": "a"}]}"#).unwrap();
        let fetch: TaggedAction =
            serde_json::from_str(r#"{"type": "FETCH_CATS", "payload": [{"url": "a"}]}"#).unwrap();
        let expected = Some(CatsIntent::Loaded {
            images: vec![CatImage::new("a")],
        });
        assert_eq!(ActionVocabulary::Legacy.decode(&add), expected);
        assert_eq!(ActionVocabulary::Legacy.decode(&fetch), expected);
        assert_eq!(ActionVocabulary::Slice.decode(&fetch), None);
    }

    #[test]
    fn empty_object_is_untagged() {
        let action: TaggedAction = serde_json::from_str("{}").unwrap();
        assert_eq!(action, TaggedAction::default());
        assert_eq!(action.kind(), "<untagged>");
        assert_eq!(ActionVocabulary::Slice.decode(&action), None);
        assert_eq!(ActionVocabulary::Legacy.decode(&action), None);
        assert_eq!(serde_json::to_string(&action).unwrap(), "{}");
    }

    #[test]
    fn decodes_wire_json() {
        let action: TaggedAction = serde_json::from_str(
            r#"{"type": "cats/catsLoaded", "payload": [{"url": "a"}, {"url": "b"}]}"#,
        )
        .unwrap();
        assert_eq!(
            ActionVocabulary::Slice.decode(&action),
            Some(CatsIntent::Loaded {
                images: vec![CatImage::new("a"), CatImage::new("b")],
            })
        );
    }

    #[test]
    fn vocabularies_do_not_overlap() {
        let slice = ActionVocabulary::Slice.encode(&CatsIntent::Loading);
        let legacy = ActionVocabulary::Legacy.encode(&CatsIntent::Loading);
        assert_eq!(ActionVocabulary::Legacy.decode(&slice), None);
        assert_eq!(ActionVocabulary::Slice.decode(&legacy), None);
    }

    #[test]
    fn loaded_without_payload_is_rejected() {
        let action = TaggedAction::new("cats/catsLoaded");
        assert_eq!(ActionVocabulary::Slice.decode(&action), None);
    }

    #[test]
    fn failed_without_error_gets_placeholder_reason() {
        let action = TaggedAction::new("FETCH_CATS_FAILED");
        assert_eq!(
            ActionVocabulary::Legacy.decode(&action),
            Some(CatsIntent::Failed {
                reason: "unknown error".to_string()
            })
        );
    }

    #[test]
    fn vocabulary_parses_from_lowercase_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            actions: ActionVocabulary,
        }
        let parsed: Wrapper = toml::from_str(r#"actions = "legacy""#).unwrap();
        assert_eq!(parsed.actions, ActionVocabulary::Legacy);
        assert_eq!(parsed.actions.name(), "legacy");
    }
}
