use crate::core::tool::{Field, ToolDescriptor};

pub const ANALYZE_TACTICS: &str = "analyze_tactics";
pub const COUNTER_FORMATION: &str = "counter_formation";
pub const ANALYZE_MATCH: &str = "analyze_match";
pub const GET_TACTICAL_KNOWLEDGE: &str = "get_tactical_knowledge";

const fn string_field(name: &'static str, required: bool, description: &'static str) -> Field {
    Field {
        name,
        kind: "string",
        required,
        description,
    }
}

/// Fixed tool catalog, in listing order.
pub static CATALOG: [ToolDescriptor; 4] = [
    ToolDescriptor {
        name: ANALYZE_TACTICS,
        description: "Analyze soccer tactics and provide advice",
        fields: &[
            string_field("query", true, "Tactical question or scenario"),
            string_field(
                "formation",
                false,
                "Optional formation to analyze (e.g., '4-3-3', '3-5-2')",
            ),
            string_field("context", false, "Additional context about the situation"),
        ],
    },
    ToolDescriptor {
        name: COUNTER_FORMATION,
        description: "Suggest formations and tactics to counter a specific formation",
        fields: &[
            string_field(
                "opponent_formation",
                true,
                "Opponent's formation (e.g., '4-3-3', '3-5-2')",
            ),
            string_field(
                "your_strengths",
                false,
                "Your team's strengths and available players",
            ),
            string_field(
                "match_context",
                false,
                "Match context (home/away, importance, etc.)",
            ),
        ],
    },
    ToolDescriptor {
        name: ANALYZE_MATCH,
        description: "Analyze a specific match and provide tactical insights",
        fields: &[
            string_field("match_data", true, "Match data or description to analyze"),
            string_field("teams", false, "Teams involved in the match"),
            string_field("focus_areas", false, "Specific areas to focus analysis on"),
        ],
    },
    ToolDescriptor {
        name: GET_TACTICAL_KNOWLEDGE,
        description: "Retrieve tactical knowledge and historical data",
        fields: &[
            string_field("topic", true, "Tactical topic to search for"),
            string_field("era", false, "Era or time period to focus on"),
            string_field("coach", false, "Specific coach or team to focus on"),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static ToolDescriptor> {
    CATALOG.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_and_required_fields() {
        let summary: Vec<(&str, Vec<&str>)> = CATALOG
            .iter()
            .map(|t| (t.name, t.required_fields().collect()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("analyze_tactics", vec!["query"]),
                ("counter_formation", vec!["opponent_formation"]),
                ("analyze_match", vec!["match_data"]),
                ("get_tactical_knowledge", vec!["topic"]),
            ]
        );
    }

    #[test]
    fn test_catalog_fields_are_strings() {
        assert!(CATALOG
            .iter()
            .flat_map(|t| t.fields.iter())
            .all(|f| f.kind == "string"));
        assert!(CATALOG.iter().all(|t| t.fields.len() == 3));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("counter_formation").unwrap().name, COUNTER_FORMATION);
        assert!(find("predict_score").is_none());
    }
}
