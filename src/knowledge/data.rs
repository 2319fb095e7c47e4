use super::{Coach, Concept, EraNote, Formation};

pub static FORMATIONS: &[Formation] = &[
    Formation {
        name: "4-3-3",
        description: "Attacking formation with three forwards",
        strengths: &["Width in attack", "High press capability", "Midfield control"],
        weaknesses: &["Vulnerable to counter-attacks", "Can be outnumbered in midfield"],
        key_positions: &["Wingers", "Holding midfielder", "Full-backs"],
        famous_coaches: &["Pep Guardiola", "Jurgen Klopp", "Carlo Ancelotti"],
        historical_context: "Popularized in the 1970s by Ajax and the Netherlands",
    },
    Formation {
        name: "3-5-2",
        description: "Flexible formation with wing-backs",
        strengths: &["Midfield dominance", "Flexible attacking", "Solid defensive base"],
        weaknesses: &["Limited width", "Can be exposed on flanks"],
        key_positions: &["Wing-backs", "Central midfielders", "Strikers"],
        famous_coaches: &["Antonio Conte", "Massimiliano Allegri", "Diego Simeone"],
        historical_context: "Revived in modern football by Antonio Conte at Juventus",
    },
    Formation {
        name: "4-4-2",
        description: "Classic balanced formation",
        strengths: &["Balanced", "Simple to implement", "Good defensive structure"],
        weaknesses: &["Can be predictable", "Limited creativity in midfield"],
        key_positions: &["Central midfielders", "Strikers", "Full-backs"],
        famous_coaches: &["Sir Alex Ferguson", "Arsene Wenger", "Carlo Ancelotti"],
        historical_context: "Dominant formation in English football for decades",
    },
    Formation {
        name: "4-2-3-1",
        description: "Double pivot screening an attacking midfield line behind a lone striker",
        strengths: &[
            "Attacking midfield creativity",
            "Flexible transitions",
            "Good defensive cover",
        ],
        weaknesses: &["Can leave striker isolated", "Requires specific player types"],
        key_positions: &["Attacking midfielder", "Holding midfielders", "Striker"],
        famous_coaches: &["Jose Mourinho", "Vicente del Bosque", "Jurgen Klopp"],
        historical_context: "Became the default shape of elite European sides in the late 2000s",
    },
];

pub static CONCEPTS: &[Concept] = &[
    Concept {
        key: "high_press",
        description: "Aggressive pressing in opponent's half",
        principles: &["Intensity", "Coordination", "Triggers"],
        famous_examples: &["Liverpool under Klopp", "Bayern under Guardiola"],
        counter_strategies: &["Long balls", "Quick transitions", "Playing out from back"],
    },
    Concept {
        key: "possession_football",
        description: "Controlling the ball and dictating tempo",
        principles: &["Ball retention", "Positional play", "Patient build-up"],
        famous_examples: &["Barcelona under Guardiola", "Manchester City"],
        counter_strategies: &["Counter-pressing", "Direct play", "Set-pieces"],
    },
    Concept {
        key: "counter_attacking",
        description: "Quick transitions from defense to attack",
        principles: &["Speed", "Directness", "Numerical superiority"],
        famous_examples: &["Real Madrid under Ancelotti", "Atletico Madrid"],
        counter_strategies: &["High defensive line", "Pressing", "Ball retention"],
    },
];

pub static COACHES: &[Coach] = &[
    Coach {
        key: "pep_guardiola",
        style: "Possession-based, positional play",
        formations: &["4-3-3", "3-2-4-1", "4-2-3-1"],
        key_principles: &["Ball retention", "High press", "Positional play"],
        teams: &["Barcelona", "Bayern Munich", "Manchester City"],
    },
    Coach {
        key: "jurgen_klopp",
        style: "High-intensity, counter-pressing",
        formations: &["4-3-3", "4-2-3-1"],
        key_principles: &["Gegenpressing", "High tempo", "Direct attacking"],
        teams: &["Borussia Dortmund", "Liverpool"],
    },
    Coach {
        key: "carlo_ancelotti",
        style: "Flexible, pragmatic",
        formations: &["4-3-3", "4-4-2", "4-2-3-1"],
        key_principles: &["Adaptability", "Player management", "Tactical flexibility"],
        teams: &["AC Milan", "Real Madrid", "Bayern Munich", "Napoli"],
    },
];

pub static RECENT_DEVELOPMENTS: &str =
    "Modern football has seen increased emphasis on pressing and positional play.";

/// (trend, summary)
pub static TACTICAL_TRENDS: &[(&str, &str)] = &[
    ("Pressing intensity", "Increasing emphasis on high-intensity pressing"),
    ("Formation flexibility", "More teams switching formations during matches"),
    ("Full-back roles", "Full-backs becoming more attacking and creative"),
    (
        "Midfield control",
        "Focus on controlling midfield through possession and pressing",
    ),
];

pub static ERA_NOTES: &[EraNote] = &[
    EraNote {
        markers: &["1970", "total football"],
        note: "Total Football: fluid positional interchange and an aggressive offside trap, led by Ajax and the Netherlands.",
    },
    EraNote {
        markers: &["1980", "1990", "sacchi"],
        note: "Zonal defending and compact pressing blocks, with Sacchi's Milan shrinking the pitch between the lines.",
    },
    EraNote {
        markers: &["2000"],
        note: "The rise of the 4-2-3-1 and the double pivot, with counter-attacking sides built on disciplined mid-blocks.",
    },
    EraNote {
        markers: &["2010", "tiki", "gegenpress"],
        note: "Positional play and gegenpressing: possession used to organise the counter-press and win the ball high.",
    },
];
