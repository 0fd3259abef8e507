//! JSON request body shapes for the Armorvox v8 API.
//!
//! Every shape is a flat object; unset optional fields are omitted from the
//! serialized form rather than emitted as null. The one exception is
//! [`RequestBody::Verification`]'s `state`, which serializes as an explicit
//! null when supplied empty.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::params::UtteranceParameters;

/// A single audio utterance as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    /// Raw audio bytes, base64 encoded on the wire.
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocab: Option<String>,
    /// Reserved by the server; never populated by this client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_vector: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_quality: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recognition: Option<bool>,
}

impl Utterance {
    /// Reads the audio file named by `params` and builds the wire utterance.
    pub fn from_parameters(params: &UtteranceParameters) -> Result<Utterance> {
        let content = std::fs::read(&params.path).map_err(|source| Error::UtteranceFile {
            path: params.path.clone(),
            source,
        })?;
        Ok(Utterance {
            content,
            phrase: params.phrase.clone(),
            vocab: params.vocab.clone(),
            feature_vector: None,
            check_quality: params.check_quality,
            recognition: params.recognition,
        })
    }
}

/// Request body for one API call, one variant per JSON shape.
///
/// Serializes untagged, so each variant appears on the wire as the flat
/// shape object the server expects.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Enrolment {
        utterances: Vec<Utterance>,
        #[serde(skip_serializing_if = "Option::is_none")]
        channel: Option<String>,
        #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
        overrides: Option<String>,
    },
    Verification {
        utterance: Utterance,
        #[serde(skip_serializing_if = "Option::is_none")]
        channel: Option<String>,
        #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
        overrides: Option<String>,
        /// Opaque verification session state. `None` is omitted;
        /// `Some(None)` serializes as an explicit null.
        #[serde(skip_serializing_if = "Option::is_none")]
        state: Option<Option<String>>,
    },
    CrossMatch {
        ids: Vec<String>,
        utterance: Utterance,
        #[serde(skip_serializing_if = "Option::is_none")]
        channel: Option<String>,
        #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
        overrides: Option<String>,
    },
    Quality {
        utterance: Utterance,
        #[serde(skip_serializing_if = "Option::is_none")]
        mode: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        channel: Option<String>,
        #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
        overrides: Option<String>,
    },
    Gender {
        utterances: Vec<Utterance>,
        #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
        overrides: Option<String>,
    },
    Similarity {
        utterances: Vec<Utterance>,
        #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
        overrides: Option<String>,
    },
    ModelRank {
        utterances: Vec<Utterance>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        ubm_names: Vec<String>,
        #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
        overrides: Option<String>,
    },
}

/// Serde adapter encoding binary content as standard base64.
mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn to_value(body: &RequestBody) -> Value {
        serde_json::to_value(body).unwrap()
    }

    #[test]
    fn content_is_base64_encoded() {
        let utterance = Utterance {
            content: b"RIFF".to_vec(),
            ..Default::default()
        };
        let value = serde_json::to_value(&utterance).unwrap();
        assert_eq!(value, json!({ "content": "UklGRg==" }));

        let back: Utterance = serde_json::from_value(value).unwrap();
        assert_eq!(back.content, b"RIFF");
    }

    #[test]
    fn unset_optional_fields_are_omitted_not_null() {
        let body = RequestBody::Enrolment {
            utterances: vec![Utterance {
                content: vec![1, 2, 3],
                ..Default::default()
            }],
            channel: None,
            overrides: None,
        };
        let value = to_value(&body);
        let object = value.as_object().unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["utterances"]);

        let utterance = value["utterances"][0].as_object().unwrap();
        assert_eq!(utterance.keys().collect::<Vec<_>>(), vec!["content"]);
    }

    #[test]
    fn set_fields_use_wire_names() {
        let body = RequestBody::Quality {
            utterance: Utterance {
                content: vec![0],
                check_quality: Some(true),
                recognition: Some(false),
                ..Default::default()
            },
            mode: Some("enrol".to_string()),
            channel: Some("mobile".to_string()),
            overrides: Some("a=1\nb=2".to_string()),
        };
        let value = to_value(&body);
        assert_eq!(value["mode"], "enrol");
        assert_eq!(value["channel"], "mobile");
        assert_eq!(value["override"], "a=1\nb=2");
        assert_eq!(value["utterance"]["check_quality"], true);
        assert_eq!(value["utterance"]["recognition"], false);
    }

    #[test]
    fn verification_state_is_null_when_supplied_empty() {
        let utterance = Utterance {
            content: vec![0],
            ..Default::default()
        };

        let absent = RequestBody::Verification {
            utterance: utterance.clone(),
            channel: None,
            overrides: None,
            state: None,
        };
        assert!(!to_value(&absent).as_object().unwrap().contains_key("state"));

        let explicit = RequestBody::Verification {
            utterance,
            channel: None,
            overrides: None,
            state: Some(None),
        };
        assert_eq!(to_value(&explicit)["state"], Value::Null);
    }

    #[test]
    fn model_rank_omits_empty_model_names() {
        let body = RequestBody::ModelRank {
            utterances: vec![Utterance {
                content: vec![0],
                ..Default::default()
            }],
            ubm_names: vec![],
            overrides: None,
        };
        let value = to_value(&body);
        assert!(!value.as_object().unwrap().contains_key("ubm_names"));
    }

    #[test]
    fn utterance_file_error_names_the_path() {
        let params = UtteranceParameters {
            path: "does/not/exist.wav".into(),
            ..Default::default()
        };
        let err = Utterance::from_parameters(&params).unwrap_err();
        match err {
            Error::UtteranceFile { path, .. } => {
                assert_eq!(path, std::path::PathBuf::from("does/not/exist.wav"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
