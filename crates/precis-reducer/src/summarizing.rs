use std::sync::Arc;

use async_trait::async_trait;
use precis_core::{
    ChatModel, ChatRequest, Message, PrecisError, Tokenizer, ToolChoice, Transcript,
};
use tokio_util::sync::CancellationToken;

use crate::{MessageReducer, ReducerConfig};

/// Persona for the summarization exchange.
const SUMMARIZER_PERSONA: &str = "You are a concise summarization assistant.";

/// Directive that opens every summarization prompt.
const SUMMARIZE_DIRECTIVE: &str = "Summarize the key facts and decisions from these earlier \
                                   conversation turns into a concise bullet list:";

/// Substituted when the model returns no summary text.
const EMPTY_SUMMARY_PLACEHOLDER: &str = "• (No summary generated)";

/// Header line of the summary message spliced into the transcript.
const SUMMARY_HEADER: &str = "[Summary of earlier conversation]";

type TurnSelector = dyn Fn(&[Message], usize) -> Vec<String> + Send + Sync;
type PromptBuilder = dyn Fn(&[String]) -> String + Send + Sync;
type SummaryFormatter = dyn Fn(&str) -> Message + Send + Sync;

/// Reduces a transcript by summarizing its oldest turns with an LLM.
///
/// When the accounted token total exceeds `max_context_tokens -
/// buffer_tokens`, the oldest `collapse_turn_count` messages are folded into
/// a single assistant message containing a generated summary. The transcript
/// is only mutated after a summary has been obtained; collaborator failures
/// and cancellation leave it untouched.
///
/// The selection, prompt-building and splice-formatting steps default to
/// [`select_turns`], [`build_summarization_prompt`] and
/// [`format_summary_message`], and can be replaced individually through the
/// `with_*` builders. The generation step is replaced by injecting a
/// different [`ChatModel`].
pub struct SummarizingReducer {
    model: Arc<dyn ChatModel>,
    tokenizer: Arc<dyn Tokenizer>,
    config: ReducerConfig,
    select: Box<TurnSelector>,
    build_prompt: Box<PromptBuilder>,
    format_summary: Box<SummaryFormatter>,
}

impl SummarizingReducer {
    pub fn new(
        model: Arc<dyn ChatModel>,
        tokenizer: Arc<dyn Tokenizer>,
        config: ReducerConfig,
    ) -> Self {
        Self {
            model,
            tokenizer,
            config,
            select: Box::new(select_turns),
            build_prompt: Box::new(build_summarization_prompt),
            format_summary: Box::new(format_summary_message),
        }
    }

    /// Replace the turn-selection step.
    pub fn with_turn_selector(
        mut self,
        select: impl Fn(&[Message], usize) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.select = Box::new(select);
        self
    }

    /// Replace the prompt-building step.
    pub fn with_prompt_builder(
        mut self,
        build: impl Fn(&[String]) -> String + Send + Sync + 'static,
    ) -> Self {
        self.build_prompt = Box::new(build);
        self
    }

    /// Replace the formatting of the spliced-in summary message.
    pub fn with_summary_formatter(
        mut self,
        format: impl Fn(&str) -> Message + Send + Sync + 'static,
    ) -> Self {
        self.format_summary = Box::new(format);
        self
    }

    /// Sum the tokenizer's counts over `"<role>: <content>"` accounting
    /// strings, with pre-tokenization and normalization enabled.
    ///
    /// Counting role and content together approximates the framing the
    /// generation backend will see.
    pub fn count_tokens(&self, transcript: &Transcript) -> Result<usize, PrecisError> {
        let mut total = 0;
        for message in transcript.iter() {
            let text = format!("{}: {}", message.role(), message.content());
            total += self.tokenizer.count_tokens(&text, true, true)?;
        }
        Ok(total)
    }

    /// Whether `total_tokens` exceeds the effective threshold.
    pub fn needs_reduction(&self, total_tokens: usize) -> bool {
        total_tokens as i64 > self.config.effective_threshold()
    }

    /// Run the summarization exchange, honoring cancellation.
    ///
    /// Tool invocation is disabled for the exchange; the summarizer may only
    /// produce text. An empty reply is not an error and becomes the
    /// placeholder bullet.
    async fn generate_summary(
        &self,
        prompt: String,
        cancel: &CancellationToken,
    ) -> Result<String, PrecisError> {
        if cancel.is_cancelled() {
            return Err(PrecisError::Cancelled);
        }

        let request = ChatRequest::new(vec![
            Message::system(SUMMARIZER_PERSONA),
            Message::user(prompt),
        ])
        .with_tool_choice(ToolChoice::None);

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(PrecisError::Cancelled),
            result = self.model.chat(request) => result?,
        };

        let summary = response.message.content().trim();
        if summary.is_empty() {
            Ok(EMPTY_SUMMARY_PLACEHOLDER.to_string())
        } else {
            Ok(summary.to_string())
        }
    }
}

#[async_trait]
impl MessageReducer for SummarizingReducer {
    async fn reduce(
        &self,
        transcript: &mut Transcript,
        cancel: &CancellationToken,
    ) -> Result<bool, PrecisError> {
        if transcript.is_empty() {
            return Ok(false);
        }

        let total_tokens = self.count_tokens(transcript)?;
        if !self.needs_reduction(total_tokens) {
            tracing::debug!(
                "token count {total_tokens} under threshold {}; skipping",
                self.config.effective_threshold()
            );
            return Ok(false);
        }

        let remove_count = self.config.collapse_turn_count().min(transcript.len());
        let turns = (self.select)(transcript.messages(), remove_count);
        let prompt = (self.build_prompt)(&turns);

        let summary = self.generate_summary(prompt, cancel).await?;

        transcript.collapse_prefix(remove_count, (self.format_summary)(&summary));
        tracing::info!("pruned {remove_count} turns, inserted summary");

        Ok(true)
    }
}

/// Format the oldest `count` messages as `"[<role>] <content>"` lines,
/// oldest first. Never overruns a short message list.
pub fn select_turns(messages: &[Message], count: usize) -> Vec<String> {
    messages
        .iter()
        .take(count)
        .map(|m| format!("[{}] {}", m.role(), m.content()))
        .collect()
}

/// Join formatted turns under the summarization directive.
///
/// Deterministic given the selected turns.
pub fn build_summarization_prompt(turns: &[String]) -> String {
    format!("{SUMMARIZE_DIRECTIVE}\n\n{}", turns.join("\n\n"))
}

/// Wrap a generated summary into the assistant message spliced into the
/// transcript: the fixed header, then one bullet line per summary line.
pub fn format_summary_message(summary: &str) -> Message {
    Message::assistant(format!(
        "{SUMMARY_HEADER}\n• {}",
        summary.replace('\n', "\n• ")
    ))
}
