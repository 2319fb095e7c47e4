//! Prompt composition.
//!
//! Every composer is a pure function of its use case and fields. Composition
//! never touches the network; the caller hands the text to a
//! [`crate::llm::Completer`].

mod templates;

use crate::core::tool::Arguments;
use crate::knowledge::KnowledgeBase;

pub const NOT_SPECIFIED: &str = "Not specified";
const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    TacticalQuery,
    CounterFormation,
    FormationAnalysis,
    MatchAnalysis,
    PeriodAnalysis,
    MatchComparison,
    MatchSummary,
    InsightExtraction,
    TrainingRecommendations,
}

impl UseCase {
    /// Gerund phrase used in user-facing failure messages.
    pub fn activity(self) -> &'static str {
        match self {
            Self::TacticalQuery => "analyzing your tactical query",
            Self::CounterFormation | Self::FormationAnalysis => "analyzing the formation",
            Self::MatchAnalysis => "analyzing the match",
            Self::PeriodAnalysis => "analyzing the period",
            Self::MatchComparison => "comparing the matches",
            Self::MatchSummary => "summarizing the match",
            Self::InsightExtraction => "extracting tactical insights",
            Self::TrainingRecommendations => "generating training recommendations",
        }
    }
}

/// Templates for the general tactical query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacticalTemplate {
    HighPress,
    Counter,
    Formation,
    General,
}

/// Checked top to bottom; the first rule with a keyword in the query wins.
/// "high press" must stay ahead of "counter".
pub const SELECTION_RULES: &[(&[&str], TacticalTemplate)] = &[
    (&["high press"], TacticalTemplate::HighPress),
    (&["counter", "beat"], TacticalTemplate::Counter),
    (&["formation"], TacticalTemplate::Formation),
];

impl TacticalTemplate {
    pub fn select(query: &str) -> Self {
        let query = query.to_lowercase();
        SELECTION_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| query.contains(k)))
            .map(|(_, template)| *template)
            .unwrap_or(Self::General)
    }

    fn text(self) -> &'static str {
        match self {
            Self::HighPress => templates::TACTICAL_HIGH_PRESS,
            Self::Counter => templates::TACTICAL_COUNTER,
            Self::Formation => templates::TACTICAL_FORMATION,
            Self::General => templates::TACTICAL_GENERAL,
        }
    }
}

/// Fill `{name}` markers in one pass. Substituted values are never rescanned,
/// so user text containing braces comes through verbatim.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn field<'a>(fields: &'a Arguments, name: &str, default: &'a str) -> &'a str {
    fields
        .get(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

fn join_or_unknown(items: Option<&[&str]>) -> String {
    match items {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => UNKNOWN.to_string(),
    }
}

fn formation_vars(kb: &KnowledgeBase, name: &str) -> [String; 3] {
    let info = kb.formation(name);
    [
        join_or_unknown(info.map(|f| f.strengths)),
        join_or_unknown(info.map(|f| f.weaknesses)),
        join_or_unknown(info.map(|f| f.key_positions)),
    ]
}

/// Build the instruction text for `use_case` from request fields.
pub fn compose(use_case: UseCase, fields: &Arguments) -> String {
    let kb = KnowledgeBase::new();
    match use_case {
        UseCase::TacticalQuery => {
            let query = field(fields, "query", NOT_SPECIFIED);
            let template = TacticalTemplate::select(query);
            render(
                template.text(),
                &[
                    ("query", query),
                    ("formation", field(fields, "formation", NOT_SPECIFIED)),
                    ("context", field(fields, "context", NOT_SPECIFIED)),
                ],
            )
        }
        UseCase::CounterFormation => {
            let opponent = field(fields, "opponent_formation", NOT_SPECIFIED);
            let [strengths, weaknesses, key_positions] = formation_vars(&kb, opponent);
            render(
                templates::COUNTER_FORMATION,
                &[
                    ("opponent_formation", opponent),
                    ("strengths", strengths.as_str()),
                    ("weaknesses", weaknesses.as_str()),
                    ("key_positions", key_positions.as_str()),
                    ("your_strengths", field(fields, "your_strengths", NOT_SPECIFIED)),
                    ("match_context", field(fields, "match_context", NOT_SPECIFIED)),
                ],
            )
        }
        UseCase::FormationAnalysis => {
            let formation = field(fields, "formation", NOT_SPECIFIED);
            let [strengths, weaknesses, key_positions] = formation_vars(&kb, formation);
            render(
                templates::FORMATION_ANALYSIS,
                &[
                    ("formation", formation),
                    ("strengths", strengths.as_str()),
                    ("weaknesses", weaknesses.as_str()),
                    ("key_positions", key_positions.as_str()),
                    ("context", field(fields, "context", "General analysis")),
                ],
            )
        }
        UseCase::MatchAnalysis => render(
            templates::MATCH_ANALYSIS,
            &[
                ("match_data", field(fields, "match_data", NOT_SPECIFIED)),
                ("teams", field(fields, "teams", NOT_SPECIFIED)),
                ("focus_areas", field(fields, "focus_areas", "General analysis")),
            ],
        ),
        UseCase::PeriodAnalysis => render(
            templates::PERIOD_ANALYSIS,
            &[
                ("period_data", field(fields, "period_data", NOT_SPECIFIED)),
                ("context", field(fields, "context", "General period analysis")),
            ],
        ),
        UseCase::MatchComparison => render(
            templates::MATCH_COMPARISON,
            &[
                ("match1_data", field(fields, "match1_data", NOT_SPECIFIED)),
                ("match2_data", field(fields, "match2_data", NOT_SPECIFIED)),
                (
                    "comparison_focus",
                    field(fields, "comparison_focus", "General comparison"),
                ),
            ],
        ),
        UseCase::MatchSummary => render(
            templates::MATCH_SUMMARY,
            &[
                ("match_data", field(fields, "match_data", NOT_SPECIFIED)),
                (
                    "focus_areas",
                    field(fields, "focus_areas", "general tactical analysis"),
                ),
            ],
        ),
        UseCase::InsightExtraction => render(
            templates::INSIGHT_EXTRACTION,
            &[("match_data", field(fields, "match_data", NOT_SPECIFIED))],
        ),
        UseCase::TrainingRecommendations => render(
            templates::TRAINING_RECOMMENDATIONS,
            &[("match_data", field(fields, "match_data", NOT_SPECIFIED))],
        ),
    }
}
