use tracing::info;

use crate::error::SummarizationError;
use crate::llm::{build_summary_prompt, OpenAiClient, SYSTEM_PROMPT};
use crate::models::Statistics;

/// Execute the Summarize stage: one chat-completion call turning the
/// statistics into a natural-language summary.
///
/// The only stage with a network dependency. Exactly one request per
/// run; any transport, auth, or service failure is terminal with no
/// retry and no fallback model.
pub async fn execute_summarize(
    client: &OpenAiClient,
    stats: &Statistics,
) -> Result<String, SummarizationError> {
    let prompt = build_summary_prompt(stats);

    info!(
        "Requesting summary from model {} ({} departments)",
        client.model(),
        stats.department_count()
    );

    let summary = client.send_chat(SYSTEM_PROMPT, &prompt).await?;

    info!("Received summary ({} chars)", summary.len());

    Ok(summary)
}
