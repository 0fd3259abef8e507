//! Single invocation flow: resolve, build, send, print.

use armorvox::{
    ApiRequest, Client, Error, RequestBody, RequestParams, SupportedApi, resolve_parameters,
};
use clap::CommandFactory;
use tracing::debug;

use crate::Cli;

/// Runs one invocation. Usage errors print the help text plus the specific
/// message and do not fail the process; anything else propagates.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    match execute(cli).await {
        Ok(()) => Ok(()),
        Err(err) if err.is_usage() => {
            print_usage(&err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn execute(cli: &Cli) -> armorvox::Result<()> {
    let api = SupportedApi::resolve(&cli.api)?;

    if !cli.exclude_utterance.is_empty() {
        debug!(
            "ignoring {} excluded utterance(s)",
            cli.exclude_utterance.len()
        );
    }

    // Phrase files load here, before any request body exists.
    let utterances = resolve_parameters(
        &cli.utterance,
        &cli.check_quality,
        &cli.phrase,
        &cli.vocab,
        &cli.recognition,
    )?;

    let overrides = (!cli.overrides.is_empty()).then(|| cli.overrides.join("\n"));

    let request = ApiRequest::build(
        api,
        RequestParams {
            print_name: cli.print_name.clone(),
            ids: cli.id.clone(),
            utterances,
            channel: cli.channel.clone(),
            overrides,
            mode: cli.mode.clone(),
            vocab: cli.vocab.first().cloned(),
        },
    )?;

    let client = Client::builder()
        .server(&cli.server)
        .group(&cli.group)
        .build()?;

    println!("{} {}", request.method, client.url_for(&request));

    if cli.show_request {
        println!();
        match &request.body {
            Some(body) => {
                println!("Request body:");
                println!("{}", render_request(body, cli.pretty_print)?);
            }
            None => println!("Request body is empty"),
        }
    }

    let response = client.execute(&request).await?;

    println!();
    println!("Response body:");
    println!("{}", render_response(&response.body, cli.pretty_print));

    println!();
    println!("Time {} milliseconds", response.elapsed.as_millis());

    Ok(())
}

fn print_usage(err: &Error) {
    let mut cmd = Cli::command();
    let _ = cmd.print_help();
    println!();
    println!("{err}");
}

fn render_request(body: &RequestBody, pretty: bool) -> armorvox::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(body)?)
    } else {
        Ok(serde_json::to_string(body)?)
    }
}

/// Re-renders the response for display. Pretty printing only applies when
/// the body parses as JSON; anything else prints untouched.
fn render_response(body: &str, pretty: bool) -> String {
    if !pretty {
        return body.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
