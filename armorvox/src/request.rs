//! Maps a selected API onto an HTTP method, request path, and body.

use crate::api::SupportedApi;
use crate::body::{RequestBody, Utterance};
use crate::error::{Error, Result};
use crate::params::UtteranceParameters;

/// Default vocabulary for the get_phrase API.
pub const DEFAULT_VOCAB: &str = "en_digits";

/// Inputs shared by every API call, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    /// Voiceprint type name, e.g. `digit`.
    pub print_name: String,
    /// IDs to enrol, verify, delete or cross match. The rank_model API
    /// reads these as UBM model names instead.
    pub ids: Vec<String>,
    pub utterances: Vec<UtteranceParameters>,
    pub channel: Option<String>,
    /// Configuration overrides, already joined with newlines.
    pub overrides: Option<String>,
    /// Quality check mode, passed through opaquely.
    pub mode: Option<String>,
    /// Vocabulary for get_phrase; falls back to [`DEFAULT_VOCAB`].
    pub vocab: Option<String>,
}

/// A fully built API request, ready for the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: &'static str,
    /// Request path relative to the server base, segments percent-encoded.
    pub path: String,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    /// Builds the request for `api`.
    ///
    /// Cardinality preconditions are checked before any utterance file is
    /// read, so a usage error never performs I/O.
    pub fn build(api: SupportedApi, params: RequestParams) -> Result<ApiRequest> {
        match api {
            SupportedApi::Enrol => {
                let id = one_id(&params, api)?;
                require_utterances(&params, api)?;
                let path = print_path(&id, &params.print_name);
                let utterances = load_utterances(&params.utterances)?;
                Ok(ApiRequest {
                    method: "POST",
                    path,
                    body: Some(RequestBody::Enrolment {
                        utterances,
                        channel: params.channel,
                        overrides: params.overrides,
                    }),
                })
            }
            SupportedApi::Verify => {
                let id = one_id(&params, api)?;
                let utterance = Utterance::from_parameters(one_utterance(&params, api)?)?;
                Ok(ApiRequest {
                    method: "PUT",
                    path: print_path(&id, &params.print_name),
                    body: Some(RequestBody::Verification {
                        utterance,
                        channel: params.channel,
                        overrides: params.overrides,
                        state: None,
                    }),
                })
            }
            SupportedApi::GetVoiceprint => {
                let id = one_id(&params, api)?;
                Ok(ApiRequest {
                    method: "GET",
                    path: format!("{}?no_payload=false", print_path(&id, &params.print_name)),
                    body: None,
                })
            }
            SupportedApi::CheckEnrolled => {
                let id = one_id(&params, api)?;
                Ok(ApiRequest {
                    method: "GET",
                    path: format!("{}?no_payload=true", print_path(&id, &params.print_name)),
                    body: None,
                })
            }
            SupportedApi::Delete => {
                let id = one_id(&params, api)?;
                Ok(ApiRequest {
                    method: "DELETE",
                    path: print_path(&id, &params.print_name),
                    body: None,
                })
            }
            SupportedApi::CheckHealth => Ok(ApiRequest {
                method: "GET",
                path: "/health".to_string(),
                body: None,
            }),
            SupportedApi::CheckQuality => {
                let utterance = Utterance::from_parameters(one_utterance(&params, api)?)?;
                Ok(ApiRequest {
                    method: "POST",
                    path: format!("/analysis/quality/{}", encode(&params.print_name)),
                    body: Some(RequestBody::Quality {
                        utterance,
                        mode: params.mode,
                        channel: params.channel,
                        overrides: params.overrides,
                    }),
                })
            }
            SupportedApi::CrossMatch => {
                if params.ids.is_empty() {
                    return Err(Error::usage(format!("{api} requires at least 1 id")));
                }
                let utterance = Utterance::from_parameters(one_utterance(&params, api)?)?;
                Ok(ApiRequest {
                    method: "PUT",
                    path: format!("/voiceprint/{}", encode(&params.print_name)),
                    body: Some(RequestBody::CrossMatch {
                        ids: params.ids,
                        utterance,
                        channel: params.channel,
                        overrides: params.overrides,
                    }),
                })
            }
            SupportedApi::DetectGender => {
                require_utterances(&params, api)?;
                let utterances = load_utterances(&params.utterances)?;
                Ok(ApiRequest {
                    method: "POST",
                    path: "/analysis/gender".to_string(),
                    body: Some(RequestBody::Gender {
                        utterances,
                        overrides: params.overrides,
                    }),
                })
            }
            SupportedApi::GetPhrase => {
                let vocab = params.vocab.as_deref().unwrap_or(DEFAULT_VOCAB);
                Ok(ApiRequest {
                    method: "GET",
                    path: format!("/phrase/{}", encode(vocab)),
                    body: None,
                })
            }
            SupportedApi::CheckSimilarity => {
                if params.utterances.len() != 2 {
                    return Err(Error::usage(format!("{api} requires exactly 2 utterances")));
                }
                let utterances = load_utterances(&params.utterances)?;
                Ok(ApiRequest {
                    method: "POST",
                    path: "/analysis/similarity".to_string(),
                    body: Some(RequestBody::Similarity {
                        utterances,
                        overrides: params.overrides,
                    }),
                })
            }
            SupportedApi::RankModel => {
                require_utterances(&params, api)?;
                let utterances = load_utterances(&params.utterances)?;
                Ok(ApiRequest {
                    method: "POST",
                    path: "/analysis/model_rank".to_string(),
                    body: Some(RequestBody::ModelRank {
                        utterances,
                        ubm_names: params.ids,
                        overrides: params.overrides,
                    }),
                })
            }
        }
    }
}

/// Percent-encodes one path segment, form-urlencoded style (space is `+`).
fn encode(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

fn print_path(id: &str, print_name: &str) -> String {
    format!("/voiceprint/{}/{}", encode(id), encode(print_name))
}

fn one_id(params: &RequestParams, api: SupportedApi) -> Result<String> {
    match params.ids.as_slice() {
        [id] => Ok(id.clone()),
        _ => Err(Error::usage(format!("{api} requires exactly 1 id"))),
    }
}

fn one_utterance(params: &RequestParams, api: SupportedApi) -> Result<&UtteranceParameters> {
    match params.utterances.as_slice() {
        [utterance] => Ok(utterance),
        _ => Err(Error::usage(format!("{api} requires exactly 1 utterance"))),
    }
}

fn require_utterances(params: &RequestParams, api: SupportedApi) -> Result<()> {
    if params.utterances.is_empty() {
        return Err(Error::usage(format!("{api} requires at least 1 utterance")));
    }
    Ok(())
}

fn load_utterances(params: &[UtteranceParameters]) -> Result<Vec<Utterance>> {
    params.iter().map(Utterance::from_parameters).collect()
}
