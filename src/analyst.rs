//! The tactical analyst: composer + completion for each use case.

use std::collections::BTreeMap;

use crate::core::tool::{Arguments, ToolError};
use crate::knowledge::KnowledgeBase;
use crate::llm::Completer;
use crate::prompts::{compose, UseCase};

/// Stateless service over one completion client. Safe to share across requests.
pub struct Gaffer<C> {
    completer: C,
    knowledge: KnowledgeBase,
}

impl<C: Completer> Gaffer<C> {
    pub fn new(completer: C) -> Self {
        Self {
            completer,
            knowledge: KnowledgeBase::new(),
        }
    }

    pub fn completer(&self) -> &C {
        &self.completer
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Compose the prompt for `use_case` and run one completion.
    pub async fn ask(&self, use_case: UseCase, fields: &Arguments) -> Result<String, ToolError> {
        let prompt = compose(use_case, fields);
        tracing::debug!(?use_case, prompt_len = prompt.len(), "Requesting completion");
        self.completer
            .complete(&prompt)
            .await
            .map_err(|source| ToolError::Remote {
                activity: use_case.activity(),
                source,
            })
    }

    pub async fn analyze_tactics(
        &self,
        query: &str,
        formation: Option<&str>,
        context: Option<&str>,
    ) -> Result<String, ToolError> {
        let fields = fields(&[
            ("query", Some(query)),
            ("formation", formation),
            ("context", context),
        ]);
        self.ask(UseCase::TacticalQuery, &fields).await
    }

    pub async fn counter_formation(
        &self,
        opponent_formation: &str,
        your_strengths: Option<&str>,
        match_context: Option<&str>,
    ) -> Result<String, ToolError> {
        let fields = fields(&[
            ("opponent_formation", Some(opponent_formation)),
            ("your_strengths", your_strengths),
            ("match_context", match_context),
        ]);
        self.ask(UseCase::CounterFormation, &fields).await
    }

    pub async fn analyze_formation(
        &self,
        formation: &str,
        context: Option<&str>,
    ) -> Result<String, ToolError> {
        let fields = fields(&[("formation", Some(formation)), ("context", context)]);
        self.ask(UseCase::FormationAnalysis, &fields).await
    }

    pub async fn analyze_match(
        &self,
        match_data: &str,
        teams: Option<&str>,
        focus_areas: Option<&str>,
    ) -> Result<String, ToolError> {
        let fields = fields(&[
            ("match_data", Some(match_data)),
            ("teams", teams),
            ("focus_areas", focus_areas),
        ]);
        self.ask(UseCase::MatchAnalysis, &fields).await
    }

    pub async fn analyze_period(
        &self,
        period_data: &str,
        context: Option<&str>,
    ) -> Result<String, ToolError> {
        let fields = fields(&[("period_data", Some(period_data)), ("context", context)]);
        self.ask(UseCase::PeriodAnalysis, &fields).await
    }

    pub async fn compare_matches(
        &self,
        match1_data: &str,
        match2_data: &str,
        comparison_focus: Option<&str>,
    ) -> Result<String, ToolError> {
        let fields = fields(&[
            ("match1_data", Some(match1_data)),
            ("match2_data", Some(match2_data)),
            ("comparison_focus", comparison_focus),
        ]);
        self.ask(UseCase::MatchComparison, &fields).await
    }

    pub async fn summarize_match(
        &self,
        match_data: &str,
        focus_areas: &[&str],
    ) -> Result<String, ToolError> {
        let focus = focus_areas.join(", ");
        let fields = fields(&[
            ("match_data", Some(match_data)),
            ("focus_areas", Some(focus.as_str())),
        ]);
        self.ask(UseCase::MatchSummary, &fields).await
    }

    /// Categorized insights; see [`parse_insights`] for how the reply is split.
    pub async fn extract_insights(
        &self,
        match_data: &str,
    ) -> Result<BTreeMap<String, String>, ToolError> {
        let fields = fields(&[("match_data", Some(match_data))]);
        let reply = self.ask(UseCase::InsightExtraction, &fields).await?;
        Ok(parse_insights(&reply))
    }

    pub async fn training_recommendations(&self, match_data: &str) -> Result<String, ToolError> {
        let fields = fields(&[("match_data", Some(match_data))]);
        self.ask(UseCase::TrainingRecommendations, &fields).await
    }
}

fn fields(pairs: &[(&str, Option<&str>)]) -> Arguments {
    pairs
        .iter()
        .filter_map(|(k, v)| v.map(|v| (*k, v)))
        .collect()
}

/// Best-effort split of a free-text reply into labelled sections.
///
/// Blocks are separated by blank lines; the first line of a block (colons
/// stripped) is its label and the rest is its body. Output that does not
/// follow this shape yields odd or empty sections, never an error.
pub fn parse_insights(content: &str) -> BTreeMap<String, String> {
    let normalized = content.replace("\r\n", "\n");
    let mut insights = BTreeMap::new();
    for block in normalized.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        let mut lines = block.lines();
        let Some(first) = lines.next() else {
            continue;
        };
        let label = first.replace(':', "").trim().to_string();
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        insights.insert(label, body);
    }
    insights
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use crate::llm::{Completer, LlmError};

    /// Scripted completer: records prompts, replies with a fixed text or error.
    pub struct ScriptedCompleter {
        reply: Result<String, String>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedCompleter {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    impl Completer for ScriptedCompleter {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(LlmError::Api {
                    status: 401,
                    body: message.clone(),
                }),
            }
        }
    }
}
