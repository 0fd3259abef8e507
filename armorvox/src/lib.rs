//! Armorvox v8 voice biometrics API client.
//!
//! Builds JSON request bodies for the Armorvox v8 REST API, sends them to a
//! configured server endpoint, and returns the raw response for display.
//! All voice biometric computation happens server side; this crate only
//! resolves command line parameters, assembles requests, and moves bytes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use armorvox::{resolve_parameters, ApiRequest, Client, RequestParams, SupportedApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One record per utterance; shorter option arrays cycle.
//!     let utterances = resolve_parameters(
//!         &["bob1.wav".to_string(), "bob2.wav".to_string()],
//!         &[],
//!         &["hello".to_string()],
//!         &[],
//!         &[],
//!     )?;
//!
//!     let request = ApiRequest::build(
//!         SupportedApi::Enrol,
//!         RequestParams {
//!             print_name: "digit".to_string(),
//!             ids: vec!["bob".to_string()],
//!             utterances,
//!             ..Default::default()
//!         },
//!     )?;
//!
//!     let client = Client::new()?;
//!     let response = client.execute(&request).await?;
//!     println!("{}", response.body);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod body;
mod client;
mod error;
mod params;
mod request;

pub use api::SupportedApi;
pub use body::{RequestBody, Utterance};
pub use client::{ApiResponse, Client, ClientBuilder, DEFAULT_GROUP, DEFAULT_SERVER};
pub use error::{Error, Result};
pub use params::{UtteranceParameters, resolve_parameters};
pub use request::{ApiRequest, DEFAULT_VOCAB, RequestParams};
