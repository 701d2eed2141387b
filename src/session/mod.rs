//! Refinement Session
//!
//! The interactive state machine over the content pipeline: a bounded
//! rolling history of artifacts, an accumulated feedback list, the last
//! request payload, the current target language, and unified diffs for
//! each improvement step.
//!
//! A session is single-user, in-memory, and process-local. All three
//! transitions take `&mut self`, so the borrow checker enforces the
//! required mutual exclusion; nothing is shared across sessions. The
//! session is discarded when the interactive client exits.

use tracing::debug;

use crate::constants;
use crate::pipeline::ContentPipeline;
use crate::types::{Artifact, CampaignRequest, Result};

pub struct RefinementSession {
    pipeline: ContentPipeline,
    /// Most-recent-first, capped at `HISTORY_CAP`, FIFO eviction.
    history: Vec<Artifact>,
    /// Most-recent-first, unbounded, cleared on every fresh generation.
    feedback_history: Vec<String>,
    /// Unified-diff strings, most-recent-first, one per improve step.
    diffs: Vec<String>,
    last_payload: Option<CampaignRequest>,
    language: String,
}

impl RefinementSession {
    pub fn new(pipeline: ContentPipeline) -> Self {
        Self {
            pipeline,
            history: Vec::new(),
            feedback_history: Vec::new(),
            diffs: Vec::new(),
            last_payload: None,
            language: constants::session::DEFAULT_LANGUAGE.to_string(),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Fresh generation: clears accumulated feedback and diffs, then runs
    /// the pipeline. On failure the clearing stands but no artifact or
    /// payload state changes.
    pub async fn generate(&mut self, request: CampaignRequest) -> Result<Artifact> {
        self.feedback_history.clear();
        self.diffs.clear();

        let artifact = self.pipeline.generate(&request).await?;

        self.language = request.effective_language().to_string();
        self.last_payload = Some(request);
        self.push_history(artifact.clone());
        Ok(artifact)
    }

    /// Regenerate the current artifact in a new language, carrying any
    /// accumulated feedback. Replaces `history[0]` in place; no history
    /// entry is pushed and no diff is recorded. Returns `None` when
    /// nothing has been generated yet.
    pub async fn translate(&mut self, new_language: &str) -> Result<Option<Artifact>> {
        let Some(base) = self.last_payload.clone() else {
            debug!("translate ignored: no prior generation");
            return Ok(None);
        };

        let mut payload = base;
        payload.language = new_language.to_string();
        payload.feedback = self.joined_feedback();

        let artifact = self.pipeline.generate(&payload).await?;

        match self.history.first_mut() {
            Some(slot) => *slot = artifact.clone(),
            None => self.history.push(artifact.clone()),
        }
        self.language = new_language.to_string();
        self.last_payload = Some(payload);
        Ok(Some(artifact))
    }

    /// Append feedback and regenerate. Records a unified diff between the
    /// outgoing artifact and the revision. Returns `None` when nothing
    /// has been generated yet or the feedback is blank.
    ///
    /// The feedback entry is inserted before the pipeline call and is
    /// deliberately not rolled back on failure, so the user keeps
    /// composed feedback across transient provider failures.
    pub async fn improve(&mut self, feedback_text: &str) -> Result<Option<Artifact>> {
        let Some(base) = self.last_payload.clone() else {
            debug!("improve ignored: no prior generation");
            return Ok(None);
        };
        if feedback_text.trim().is_empty() {
            debug!("improve ignored: blank feedback");
            return Ok(None);
        }

        self.feedback_history.insert(0, feedback_text.to_string());

        let mut payload = base;
        payload.feedback = self.joined_feedback();
        payload.language = self.language.clone();

        let artifact = self.pipeline.generate(&payload).await?;

        let previous = self
            .history
            .first()
            .map(|a| a.content.clone())
            .unwrap_or_default();
        self.diffs.insert(0, unified_diff(&previous, &artifact.content));
        self.push_history(artifact.clone());
        self.last_payload = Some(payload);
        Ok(Some(artifact))
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    pub fn latest(&self) -> Option<&Artifact> {
        self.history.first()
    }

    /// The artifact replaced by the most recent improvement, if any.
    pub fn previous(&self) -> Option<&Artifact> {
        self.history.get(1)
    }

    pub fn history(&self) -> &[Artifact] {
        &self.history
    }

    pub fn feedback_history(&self) -> &[String] {
        &self.feedback_history
    }

    pub fn diffs(&self) -> &[String] {
        &self.diffs
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn last_payload(&self) -> Option<&CampaignRequest> {
        self.last_payload.as_ref()
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Space-joined feedback, most-recent-first. `None` when empty so
    /// the payload omits the field entirely.
    fn joined_feedback(&self) -> Option<String> {
        if self.feedback_history.is_empty() {
            None
        } else {
            Some(self.feedback_history.join(" "))
        }
    }

    fn push_history(&mut self, artifact: Artifact) {
        self.history.insert(0, artifact);
        self.history.truncate(constants::session::HISTORY_CAP);
    }
}

/// Unified line diff between two text versions. Pure over its inputs;
/// the session stores the string, rendering belongs to the CLI.
pub fn unified_diff(old: &str, new: &str) -> String {
    similar::TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::testing::StubProvider;
    use crate::types::CopyError;
    use std::sync::Arc;

    fn request() -> CampaignRequest {
        CampaignRequest {
            campaign_type: "ppc_ads".to_string(),
            tone: "urgent".to_string(),
            platform: "Twitter".to_string(),
            topic: "winter sale".to_string(),
            ..Default::default()
        }
    }

    fn session_with(stub: Arc<StubProvider>) -> RefinementSession {
        RefinementSession::new(ContentPipeline::new(stub).unwrap())
    }

    #[tokio::test]
    async fn test_generate_records_payload_and_history() {
        let mut session = session_with(Arc::new(StubProvider::fixed("Copy v1")));
        let artifact = session.generate(request()).await.unwrap();
        assert_eq!(artifact.content, "Copy v1");
        assert_eq!(session.history().len(), 1);
        assert!(session.last_payload().is_some());
        assert_eq!(session.language(), "English");
    }

    #[tokio::test]
    async fn test_history_capped_at_five_fifo() {
        let stub = Arc::new(StubProvider::script(vec![
            Ok("v1"),
            Ok("v2"),
            Ok("v3"),
            Ok("v4"),
            Ok("v5"),
            Ok("v6"),
        ]));
        let mut session = session_with(stub);
        for _ in 0..6 {
            session.generate(request()).await.unwrap();
        }
        assert_eq!(session.history().len(), 5);
        assert_eq!(session.history()[0].content, "v6");
        assert_eq!(session.history()[4].content, "v2");
    }

    #[tokio::test]
    async fn test_generate_resets_feedback_and_diffs() {
        let stub = Arc::new(StubProvider::fixed("copy"));
        let mut session = session_with(stub);
        session.generate(request()).await.unwrap();
        session.improve("shorter").await.unwrap();
        assert_eq!(session.feedback_history().len(), 1);
        assert_eq!(session.diffs().len(), 1);

        session.generate(request()).await.unwrap();
        assert!(session.feedback_history().is_empty());
        assert!(session.diffs().is_empty());
    }

    #[tokio::test]
    async fn test_feedback_accumulates_most_recent_first() {
        let stub = Arc::new(StubProvider::fixed("copy"));
        let mut session = session_with(stub.clone());
        session.generate(request()).await.unwrap();
        session.improve("shorter").await.unwrap();
        session.improve("add emoji").await.unwrap();

        assert_eq!(session.feedback_history(), ["add emoji", "shorter"]);
        let user = stub.last_user_message().unwrap();
        assert!(user.contains("Feedback: 'add emoji shorter'"));
    }

    #[tokio::test]
    async fn test_improve_records_one_diff_per_success() {
        let stub = Arc::new(StubProvider::script(vec![
            Ok("first version"),
            Ok("second version"),
        ]));
        let mut session = session_with(stub);
        session.generate(request()).await.unwrap();
        session.improve("different").await.unwrap();

        assert_eq!(session.diffs().len(), 1);
        let diff = &session.diffs()[0];
        assert!(diff.contains("-first version"));
        assert!(diff.contains("+second version"));
        assert_eq!(session.previous().unwrap().content, "first version");
        assert_eq!(session.latest().unwrap().content, "second version");
    }

    #[tokio::test]
    async fn test_improve_noop_without_generation() {
        let mut session = session_with(Arc::new(StubProvider::fixed("copy")));
        let result = session.improve("shorter").await.unwrap();
        assert!(result.is_none());
        assert!(session.feedback_history().is_empty());
    }

    #[tokio::test]
    async fn test_improve_noop_on_blank_feedback() {
        let mut session = session_with(Arc::new(StubProvider::fixed("copy")));
        session.generate(request()).await.unwrap();
        let result = session.improve("   ").await.unwrap();
        assert!(result.is_none());
        assert!(session.feedback_history().is_empty());
        assert!(session.diffs().is_empty());
    }

    #[tokio::test]
    async fn test_improve_failure_keeps_feedback_no_diff() {
        let stub = Arc::new(StubProvider::script(vec![
            Ok("v1"),
            Err("quota exceeded"),
        ]));
        let mut session = session_with(stub);
        session.generate(request()).await.unwrap();

        let err = session.improve("shorter").await.unwrap_err();
        assert!(matches!(err, CopyError::Provider(_)));
        // Feedback persists across the failed call; history and diffs do not move.
        assert_eq!(session.feedback_history(), ["shorter"]);
        assert_eq!(session.history().len(), 1);
        assert!(session.diffs().is_empty());
        assert_eq!(session.latest().unwrap().content, "v1");
    }

    #[tokio::test]
    async fn test_translate_replaces_in_place() {
        let stub = Arc::new(StubProvider::script(vec![
            Ok("English copy"),
            Ok("Spanish copy"),
        ]));
        let mut session = session_with(stub);
        session.generate(request()).await.unwrap();
        let translated = session.translate("Spanish").await.unwrap().unwrap();

        assert_eq!(translated.content, "Spanish copy");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.latest().unwrap().content, "Spanish copy");
        assert!(session.diffs().is_empty());
        assert_eq!(session.language(), "Spanish");
        assert_eq!(session.last_payload().unwrap().language, "Spanish");
    }

    #[tokio::test]
    async fn test_translate_noop_without_generation() {
        let mut session = session_with(Arc::new(StubProvider::fixed("copy")));
        let result = session.translate("French").await.unwrap();
        assert!(result.is_none());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_translate_carries_feedback() {
        let stub = Arc::new(StubProvider::fixed("copy"));
        let mut session = session_with(stub.clone());
        session.generate(request()).await.unwrap();
        session.improve("shorter").await.unwrap();
        session.translate("German").await.unwrap();

        let user = stub.last_user_message().unwrap();
        assert!(user.contains("Feedback: 'shorter'"));
        assert!(user.contains("Please write this in German."));
    }

    #[tokio::test]
    async fn test_translate_failure_leaves_state() {
        let stub = Arc::new(StubProvider::script(vec![Ok("v1"), Err("down")]));
        let mut session = session_with(stub);
        session.generate(request()).await.unwrap();

        session.translate("French").await.unwrap_err();
        assert_eq!(session.language(), "English");
        assert_eq!(session.latest().unwrap().content, "v1");
        assert_eq!(session.last_payload().unwrap().language, "English");
    }

    #[tokio::test]
    async fn test_generate_failure_leaves_history() {
        let stub = Arc::new(StubProvider::script(vec![Ok("v1"), Err("down")]));
        let mut session = session_with(stub);
        session.generate(request()).await.unwrap();
        session.generate(request()).await.unwrap_err();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.latest().unwrap().content, "v1");
    }

    #[test]
    fn test_unified_diff_marks_changed_lines() {
        let diff = unified_diff("line one\nline two\n", "line one\nline 2\n");
        assert!(diff.contains("-line two"));
        assert!(diff.contains("+line 2"));
        assert!(diff.contains(" line one"));
    }

    #[test]
    fn test_unified_diff_identical_is_empty() {
        assert!(unified_diff("same\n", "same\n").is_empty());
    }
}
