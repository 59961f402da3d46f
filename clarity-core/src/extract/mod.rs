//! Task extraction through a text-completion capability.
//!
//! The model is reached through the [`Extractor`] trait so the rest of the pipeline can
//! run against a deterministic stand-in. Only the JSON shape of the reply is checked;
//! field defaults are applied later by layout and export.

mod instruction;
mod parse;

pub use instruction::EXTRACTION_INSTRUCTION;
pub use parse::parse_plan;

use crate::error::{ClarityError, ClarityResult};
use crate::plan::Plan;
use std::future::Future;
use tracing::{debug, warn};

/// A text-completion capability: system instruction and user text in, free text out.
pub trait Extractor {
    fn complete(
        &self,
        instruction: &str,
        text: &str,
    ) -> impl Future<Output = ClarityResult<String>> + Send;
}

/// Extract a plan from `raw_text` using the standard instruction.
pub async fn extract_plan<E: Extractor>(extractor: &E, raw_text: &str) -> ClarityResult<Plan> {
    extract_plan_with(extractor, raw_text, EXTRACTION_INSTRUCTION).await
}

/// Extract a plan from `raw_text` under a caller-supplied instruction.
///
/// Blank input is rejected before any call is made. An empty task list is a
/// successful result.
pub async fn extract_plan_with<E: Extractor>(
    extractor: &E,
    raw_text: &str,
    instruction: &str,
) -> ClarityResult<Plan> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(ClarityError::EmptyInput);
    }

    debug!(chars = text.len(), "Requesting task extraction");
    let response = extractor.complete(instruction, text).await?;
    debug!(chars = response.len(), "Received extraction response");

    let plan = parse_plan(&response)?;
    if plan.tasks.is_empty() {
        warn!("Extraction returned no tasks");
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replies with canned text and records what it was asked.
    struct CannedExtractor {
        reply: String,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl CannedExtractor {
        fn new(reply: &str) -> Self {
            CannedExtractor {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Extractor for CannedExtractor {
        async fn complete(&self, instruction: &str, text: &str) -> ClarityResult<String> {
            self.seen
                .lock()
                .unwrap()
                .push((instruction.to_string(), text.to_string()));
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn extracts_plan_and_sends_trimmed_text() {
        let extractor = CannedExtractor::new(
            r#"{"summary": "Ship it", "tasks": [{"title": "Report", "duration_minutes": 45}]}"#,
        );

        let plan = extract_plan(&extractor, "  finish report  \n").await.unwrap();

        assert_eq!(plan.summary, "Ship it");
        assert_eq!(plan.tasks.len(), 1);
        let seen = extractor.seen.lock().unwrap();
        assert_eq!(seen[0].0, EXTRACTION_INSTRUCTION);
        assert_eq!(seen[0].1, "finish report");
    }

    #[tokio::test]
    async fn not_json_is_malformed_with_raw_text() {
        let extractor = CannedExtractor::new("not json");

        let err = extract_plan(&extractor, "some notes").await.unwrap_err();

        assert!(matches!(err, ClarityError::MalformedResponse { .. }));
        assert_eq!(err.raw_response(), Some("not json"));
    }

    #[tokio::test]
    async fn empty_task_list_is_success() {
        let extractor = CannedExtractor::new(r#"{"summary": "", "tasks": []}"#);
        let plan = extract_plan(&extractor, "nothing much").await.unwrap();
        assert!(plan.tasks.is_empty());
    }

    #[tokio::test]
    async fn blank_input_never_reaches_extractor() {
        let extractor = CannedExtractor::new("{}");
        let err = extract_plan(&extractor, "   \n\t").await.unwrap_err();
        assert!(matches!(err, ClarityError::EmptyInput));
        assert!(extractor.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn custom_instruction_is_forwarded() {
        let extractor = CannedExtractor::new(r#"{"summary": "", "tasks": []}"#);
        extract_plan_with(&extractor, "notes", "Be brief.").await.unwrap();
        assert_eq!(extractor.seen.lock().unwrap()[0].0, "Be brief.");
    }
}
