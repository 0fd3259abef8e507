//! The fixed set of supported Armorvox v8 APIs.

use std::fmt;

use crate::error::{Error, Result};

/// An Armorvox v8 API callable by this client.
///
/// Each API has a canonical lower-case name and a short acronym; both are
/// accepted case-insensitively on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedApi {
    CheckHealth,
    CheckEnrolled,
    CheckQuality,
    Enrol,
    Verify,
    Delete,
    CrossMatch,
    DetectGender,
    GetPhrase,
    GetVoiceprint,
    CheckSimilarity,
    RankModel,
}

impl SupportedApi {
    /// All supported APIs, in help-text order.
    pub const ALL: [SupportedApi; 12] = [
        SupportedApi::CheckHealth,
        SupportedApi::CheckEnrolled,
        SupportedApi::CheckQuality,
        SupportedApi::Enrol,
        SupportedApi::Verify,
        SupportedApi::Delete,
        SupportedApi::CrossMatch,
        SupportedApi::DetectGender,
        SupportedApi::GetPhrase,
        SupportedApi::GetVoiceprint,
        SupportedApi::CheckSimilarity,
        SupportedApi::RankModel,
    ];

    /// Returns the canonical API name.
    pub fn name(&self) -> &'static str {
        match self {
            SupportedApi::CheckHealth => "check_health",
            SupportedApi::CheckEnrolled => "check_enrolled",
            SupportedApi::CheckQuality => "check_quality",
            SupportedApi::Enrol => "enrol",
            SupportedApi::Verify => "verify",
            SupportedApi::Delete => "delete",
            SupportedApi::CrossMatch => "cross_match",
            SupportedApi::DetectGender => "detect_gender",
            SupportedApi::GetPhrase => "get_phrase",
            SupportedApi::GetVoiceprint => "get_voiceprint",
            SupportedApi::CheckSimilarity => "check_similarity",
            SupportedApi::RankModel => "rank_model",
        }
    }

    /// Returns the short acronym accepted on the command line.
    pub fn acronym(&self) -> &'static str {
        match self {
            SupportedApi::CheckHealth => "ch",
            SupportedApi::CheckEnrolled => "ce",
            SupportedApi::CheckQuality => "cq",
            SupportedApi::Enrol => "e",
            SupportedApi::Verify => "v",
            SupportedApi::Delete => "d",
            SupportedApi::CrossMatch => "cm",
            SupportedApi::DetectGender => "dg",
            SupportedApi::GetPhrase => "gp",
            SupportedApi::GetVoiceprint => "gvp",
            SupportedApi::CheckSimilarity => "cs",
            SupportedApi::RankModel => "rm",
        }
    }

    /// Resolves a user supplied token against either the canonical name or
    /// the acronym, case-insensitively.
    pub fn resolve(token: &str) -> Result<SupportedApi> {
        Self::ALL
            .iter()
            .copied()
            .find(|api| {
                api.name().eq_ignore_ascii_case(token) || api.acronym().eq_ignore_ascii_case(token)
            })
            .ok_or_else(|| Error::UnsupportedApi(token.to_string()))
    }
}

impl fmt::Display for SupportedApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
