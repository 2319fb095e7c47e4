//! Static tactical knowledge: formations, concepts, coaches.
//!
//! Read-only after startup. Lookups are plain case-insensitive substring and
//! token matches; there is no ranking.

mod data;

use std::fmt::Write;

#[derive(Debug)]
pub struct Formation {
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub key_positions: &'static [&'static str],
    pub famous_coaches: &'static [&'static str],
    pub historical_context: &'static str,
}

#[derive(Debug)]
pub struct Concept {
    pub key: &'static str,
    pub description: &'static str,
    pub principles: &'static [&'static str],
    pub famous_examples: &'static [&'static str],
    pub counter_strategies: &'static [&'static str],
}

#[derive(Debug)]
pub struct Coach {
    pub key: &'static str,
    pub style: &'static str,
    pub formations: &'static [&'static str],
    pub key_principles: &'static [&'static str],
    pub teams: &'static [&'static str],
}

#[derive(Debug)]
pub struct EraNote {
    /// Lowercase fragments; any one of them in the era string selects the note
    pub markers: &'static [&'static str],
    pub note: &'static str,
}

/// Topics that list every formation
const GENERIC_FORMATION_TOPICS: &[&str] = &["formation", "formations", "tactics", "tactical"];

/// Topic fragments that pull in recent developments
const RECENT_MARKERS: &[&str] = &["recent", "modern"];

/// Everything a lookup matched, grouped by category in catalog order.
#[derive(Debug, Default)]
pub struct Hits {
    pub formations: Vec<&'static Formation>,
    pub concepts: Vec<&'static Concept>,
    pub coaches: Vec<&'static Coach>,
}

impl Hits {
    pub fn is_empty(&self) -> bool {
        self.formations.is_empty() && self.concepts.is_empty() && self.coaches.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    formations: &'static [Formation],
    concepts: &'static [Concept],
    coaches: &'static [Coach],
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    pub const fn new() -> Self {
        Self {
            formations: data::FORMATIONS,
            concepts: data::CONCEPTS,
            coaches: data::COACHES,
        }
    }

    /// Exact (case-insensitive) formation lookup, e.g. "4-3-3".
    pub fn formation(&self, name: &str) -> Option<&'static Formation> {
        let name = name.trim();
        self.formations
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn lookup(&self, topic: &str, coach: Option<&str>) -> Hits {
        let topic = topic.trim().to_lowercase();

        let formations = self
            .formations
            .iter()
            .filter(|f| formation_matches(f, &topic))
            .collect();

        let concepts = self
            .concepts
            .iter()
            .filter(|c| key_tokens_match(c.key, &topic))
            .collect();

        let coach_filter = coach
            .map(|c| c.trim().to_lowercase().replace(' ', "_"))
            .filter(|c| !c.is_empty());
        let coaches = self
            .coaches
            .iter()
            .filter(|c| match &coach_filter {
                Some(filter) => c.key.contains(filter.as_str()),
                None => key_tokens_match(c.key, &topic),
            })
            .collect();

        Hits {
            formations,
            concepts,
            coaches,
        }
    }

    /// Look up `topic` and render the markdown answer, shell included.
    pub fn retrieve(&self, topic: &str, era: Option<&str>, coach: Option<&str>) -> String {
        let hits = self.lookup(topic, coach);
        tracing::debug!(
            topic = %topic,
            formations = hits.formations.len(),
            concepts = hits.concepts.len(),
            coaches = hits.coaches.len(),
            "Knowledge lookup"
        );
        format_response(topic, &hits, era)
    }
}

fn formation_matches(formation: &Formation, topic: &str) -> bool {
    if topic.is_empty() {
        return false;
    }
    GENERIC_FORMATION_TOPICS.contains(&topic)
        || topic.contains(formation.name)
        || is_line_fragment(topic, formation.name)
}

/// "4-3" is a fragment of "4-3-3": at least two numeric lines, contiguous in the shape.
fn is_line_fragment(topic: &str, name: &str) -> bool {
    let parts: Vec<&str> = topic.split('-').collect();
    if parts.len() < 2
        || !parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    {
        return false;
    }
    let lines: Vec<&str> = name.split('-').collect();
    lines.windows(parts.len()).any(|w| w == parts.as_slice())
}

fn key_tokens_match(key: &str, topic: &str) -> bool {
    !topic.is_empty() && key.split('_').any(|token| topic.contains(token))
}

fn era_note(era: &str) -> String {
    let lowered = era.to_lowercase();
    data::ERA_NOTES
        .iter()
        .find(|n| n.markers.iter().any(|m| lowered.contains(m)))
        .map(|n| n.note.to_string())
        .unwrap_or_else(|| {
            format!(
                "No curated notes for the {} era; compare the formations and concepts above with the dominant sides of that period.",
                era
            )
        })
}

/// Python-style title case: a letter is upper-cased when it follows a non-letter.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn display_key(key: &str) -> String {
    title_case(&key.replace('_', " "))
}

pub fn format_response(topic: &str, hits: &Hits, era: Option<&str>) -> String {
    // Writing to a String cannot fail.
    let mut out = String::new();
    let _ = write!(out, "# Tactical Knowledge: {}", title_case(topic.trim()));

    if !hits.formations.is_empty() {
        out.push_str("\n\n## Formations");
        for f in &hits.formations {
            let _ = write!(out, "\n\n### {}", f.name);
            let _ = write!(out, "\n**Description:** {}", f.description);
            let _ = write!(out, "\n**Strengths:** {}", f.strengths.join(", "));
            let _ = write!(out, "\n**Weaknesses:** {}", f.weaknesses.join(", "));
            let _ = write!(out, "\n**Key Positions:** {}", f.key_positions.join(", "));
            let _ = write!(out, "\n**Famous Coaches:** {}", f.famous_coaches.join(", "));
            let _ = write!(out, "\n**Historical Context:** {}", f.historical_context);
        }
    }

    if !hits.concepts.is_empty() {
        out.push_str("\n\n## Tactical Concepts");
        for c in &hits.concepts {
            let _ = write!(out, "\n\n### {}", display_key(c.key));
            let _ = write!(out, "\n**Description:** {}", c.description);
            let _ = write!(out, "\n**Key Principles:** {}", c.principles.join(", "));
            let _ = write!(out, "\n**Famous Examples:** {}", c.famous_examples.join(", "));
            let _ = write!(
                out,
                "\n**Counter Strategies:** {}",
                c.counter_strategies.join(", ")
            );
        }
    }

    if !hits.coaches.is_empty() {
        out.push_str("\n\n## Coaches");
        for c in &hits.coaches {
            let _ = write!(out, "\n\n### {}", display_key(c.key));
            let _ = write!(out, "\n**Style:** {}", c.style);
            let _ = write!(out, "\n**Preferred Formations:** {}", c.formations.join(", "));
            let _ = write!(out, "\n**Key Principles:** {}", c.key_principles.join(", "));
            let _ = write!(out, "\n**Teams Managed:** {}", c.teams.join(", "));
        }
    }

    let lowered = topic.to_lowercase();
    if RECENT_MARKERS.iter().any(|m| lowered.contains(m)) {
        out.push_str("\n\n## Additional Context");
        out.push_str("\n\n### Recent Developments");
        let _ = write!(out, "\n{}", data::RECENT_DEVELOPMENTS);
        for (trend, summary) in data::TACTICAL_TRENDS {
            let _ = write!(out, "\n- **{}:** {}", trend, summary);
        }
    }

    if let Some(era) = era.map(str::trim).filter(|e| !e.is_empty()) {
        let _ = write!(out, "\n\n## {} Era Context", title_case(era));
        let _ = write!(out, "\n{}", era_note(era));
    }

    out.push_str("\n\n## Practical Applications");
    out.push_str("\nTo apply this tactical knowledge:");
    out.push_str("\n1. Study the principles and adapt them to your team's strengths");
    out.push_str("\n2. Practice the key movements and patterns in training");
    out.push_str("\n3. Analyze how successful teams implement these concepts");
    out.push_str("\n4. Gradually introduce elements into your tactical approach");

    out
}
