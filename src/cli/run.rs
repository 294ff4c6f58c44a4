//! Execution of parsed CLI commands.

use std::io::{self, Write};

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;

use super::args::{CliCommand, RecommendArgs, USAGE};
use super::VERSION;
use crate::cancel::{cancel_pair, CancelHandle, CancelSignal};
use crate::client::RecommendClient;
use crate::config::ClientConfig;
use crate::dispatch::StreamOutcome;
use crate::error::ClientError;
use crate::models::{PipelinePhase, Recommendation};
use crate::traits::StreamHandler;
use crate::transcript::Transcript;

/// Renders a stream as it arrives: narration on stdout, progress on stderr.
///
/// The first stdout failure is kept and stops the stream through `stop`.
struct TerminalPrinter<W: Write + Send> {
    out: W,
    transcript: Transcript,
    write_error: Option<io::Error>,
    stop: Option<CancelHandle>,
}

impl<W: Write + Send> TerminalPrinter<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            transcript: Transcript::new(),
            write_error: None,
            stop: None,
        }
    }

    fn with_stop(mut self, stop: CancelHandle) -> Self {
        self.stop = Some(stop);
        self
    }

    fn emit(&mut self, text: &str) {
        if self.write_error.is_some() {
            return;
        }
        let written = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "stdout closed, stopping stream");
            self.write_error = Some(e);
            if let Some(stop) = &self.stop {
                stop.cancel();
            }
        }
    }
}

impl<W: Write + Send> StreamHandler for TerminalPrinter<W> {
    fn on_phase(&mut self, phase: PipelinePhase) {
        eprintln!("… {}", phase.label());
        self.transcript.on_phase(phase);
    }

    fn on_recommendations(&mut self, items: Vec<Recommendation>) {
        eprintln!("… {} candidates", items.len());
        self.transcript.on_recommendations(items);
    }

    fn on_token(&mut self, text: &str) {
        self.emit(text);
        self.transcript.on_token(text);
    }

    fn on_narrative_replace(&mut self, text: &str) {
        self.emit(&format!("\n\n{}", text));
        self.transcript.on_narrative_replace(text);
    }

    fn on_done(&mut self, session_id: &str) {
        self.emit("\n");
        self.transcript.on_done(session_id);
    }

    fn on_error(&mut self, error: &ClientError) {
        self.transcript.on_error(error);
    }
}

fn print_recommendations<W: Write>(out: &mut W, items: &[Recommendation]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    for (rank, item) in items.iter().enumerate() {
        writeln!(out, "{}. {} [{:.1}]", rank + 1, item.display_title(), item.score)?;
        if !item.reason.is_empty() {
            writeln!(out, "   {}", item.reason)?;
        }
        if let Some(director) = &item.director {
            writeln!(out, "   Director: {}", director)?;
        }
    }
    Ok(())
}

fn print_session(session_id: &str) {
    if !session_id.is_empty() {
        eprintln!("session: {}", session_id);
    }
}

/// Run `command`. Recommendation streams stop early when `cancel` fires.
pub async fn run_cli_command(command: CliCommand, cancel: CancelSignal) -> Result<()> {
    match command {
        CliCommand::Version => {
            println!("cinematch {}", VERSION);
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Health { url } => {
            let mut config = ClientConfig::from_env();
            if let Some(url) = url {
                config = config.with_base_url(url);
            }
            run_health(&config).await
        }
        CliCommand::Recommend(args) => {
            let config = args.apply_to(ClientConfig::from_env());
            run_recommend(&args, &config, cancel).await
        }
    }
}

async fn run_health(config: &ClientConfig) -> Result<()> {
    let client = RecommendClient::new(config)?;
    let health = client
        .health()
        .await
        .wrap_err_with(|| format!("health check against {} failed", config.base_url))?;

    println!("status: {}", health.status);
    for (name, value) in [
        ("vllm", &health.vllm),
        ("tmdb", &health.tmdb),
        ("streaming", &health.streaming),
    ] {
        if let Some(value) = value {
            println!("{}: {}", name, value);
        }
    }
    if health.is_ok() {
        Ok(())
    } else {
        Err(eyre!("service is {}", health.status))
    }
}

async fn run_recommend(
    args: &RecommendArgs,
    config: &ClientConfig,
    cancel: CancelSignal,
) -> Result<()> {
    let client = RecommendClient::new(config)?;
    let request = args.to_request(config);
    let mut stdout = io::stdout();

    if args.no_stream {
        let response = client.recommend(&request).await?;
        writeln!(stdout, "{}", response.narrative)?;
        print_recommendations(&mut stdout, &response.recommendations)?;
        print_session(&response.session_id);
        return Ok(());
    }

    let (stop, stream_cancel) = cancel_pair();
    let forward = {
        let stop = stop.clone();
        let mut cancel = cancel;
        tokio::spawn(async move {
            cancel.cancelled().await;
            stop.cancel();
        })
    };

    let mut printer = TerminalPrinter::new(stdout).with_stop(stop);
    let outcome = client
        .stream_recommendations(&request, &mut printer, stream_cancel)
        .await;
    forward.abort();
    let TerminalPrinter {
        mut out,
        transcript,
        write_error,
        ..
    } = printer;

    if let Some(e) = write_error {
        return Err(e).wrap_err("failed to write recommendations to stdout");
    }

    match outcome {
        StreamOutcome::Completed { session_id } => {
            print_recommendations(&mut out, &transcript.recommendations)?;
            print_session(&session_id);
            Ok(())
        }
        StreamOutcome::Failed(err) => Err(eyre!(
            "{} [{}] {}",
            err.user_message(),
            err.error_code(),
            err.recovery_hint()
        )),
        StreamOutcome::Ended => {
            print_recommendations(&mut out, &transcript.recommendations)?;
            Err(eyre!("stream closed before completion"))
        }
        StreamOutcome::Cancelled => {
            writeln!(out)?;
            eprintln!("cancelled");
            Ok(())
        }
    }
}
