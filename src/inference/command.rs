use super::gateway::{InferenceGateway, SpeechToText, Summarizer};
use crate::config::InferenceConfig;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;
use tracing::{error, info};

/// Speech-to-text collaborator invoked as an external command.
///
/// `{input}` and `{chunk_length}` placeholders in the configured arguments
/// are substituted per call; if no `{input}` placeholder is present, the
/// audio path is appended as the final argument. The transcript is read from
/// stdout.
pub struct CommandSpeechToText {
    program: String,
    args: Vec<String>,
}

impl SpeechToText for CommandSpeechToText {
    fn transcribe(&self, audio_path: &Path, chunk_length_secs: u32) -> Result<String> {
        let input = audio_path.display().to_string();
        let mut cmd = Command::new(&self.program);
        let mut saw_input = false;

        for arg in &self.args {
            let arg = arg.replace("{chunk_length}", &chunk_length_secs.to_string());
            if arg.contains("{input}") {
                saw_input = true;
                cmd.arg(arg.replace("{input}", &input));
            } else {
                cmd.arg(arg);
            }
        }
        if !saw_input {
            cmd.arg(&input);
        }

        let output = cmd
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to launch speech-to-text command {}", self.program))?;

        if !output.status.success() {
            bail!(
                "speech-to-text command exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Summarization collaborator invoked as an external command.
///
/// The input text is written to the command's stdin; `{max_length}` and
/// `{min_length}` placeholders in the configured arguments are substituted
/// per call. The summary is read from stdout.
pub struct CommandSummarizer {
    program: String,
    args: Vec<String>,
}

impl Summarizer for CommandSummarizer {
    fn summarize(&self, text: &str, max_length: u32, min_length: u32) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        for arg in &self.args {
            cmd.arg(
                arg.replace("{max_length}", &max_length.to_string())
                    .replace("{min_length}", &min_length.to_string()),
            );
        }

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to launch summarizer command {}", self.program))?;

        {
            let mut stdin = child
                .stdin
                .take()
                .context("summarizer command has no stdin handle")?;
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            bail!(
                "summarizer command exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Build the gateway from configuration at process startup.
///
/// Both engine commands must be configured; otherwise the gateway starts in
/// the permanent degraded state and every stream request fails fast with the
/// fixed models-unavailable error.
pub fn load(cfg: &InferenceConfig) -> InferenceGateway {
    let (Some((asr_program, asr_args)), Some((sum_program, sum_args))) =
        (split_command(&cfg.asr_command), split_command(&cfg.summarizer_command))
    else {
        error!("Inference engine commands are not configured; starting degraded");
        return InferenceGateway::degraded();
    };

    info!("Speech-to-text engine: {}", asr_program);
    info!("Summarization engine: {}", sum_program);

    InferenceGateway::new(
        Arc::new(CommandSpeechToText {
            program: asr_program,
            args: asr_args,
        }),
        Arc::new(CommandSummarizer {
            program: sum_program,
            args: sum_args,
        }),
    )
}

fn split_command(command: &[String]) -> Option<(String, Vec<String>)> {
    let (program, args) = command.split_first()?;
    Some((program.clone(), args.to_vec()))
}
