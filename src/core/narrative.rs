//! Template-driven prose layered on top of the compatibility score.
//!
//! Nothing here generates free text: every string is a fixed template with
//! profile fields interpolated, and every empty field has a literal fallback.

use crate::core::overlap::shared_in_order;
use crate::core::scoring::Compatibility;
use crate::models::{
    CompatibilityLabel, MatchCard, Narrative, ScoringWeights, SocialSpeed, TwinIntro, TwinProfile,
};

/// Reasons, risks, openers and summaries for a pair, using default weights
pub fn build_narrative(a: &TwinProfile, b: &TwinProfile) -> Narrative {
    narrate(a, b, &Compatibility::assess(a, b, &ScoringWeights::default()))
}

/// Assemble the narrative for an already assessed pair
///
/// Reasons and risks are appended in a fixed order.
pub fn narrate(a: &TwinProfile, b: &TwinProfile, compatibility: &Compatibility) -> Narrative {
    let breakdown = &compatibility.breakdown;
    let mut reasons = Vec::new();
    let mut risks = Vec::new();

    if breakdown.goal_overlap > 0 {
        reasons.push(format!(
            "You want similar things ({} / {}).",
            a.goals.join(", "),
            b.goals.join(", ")
        ));
    }

    if breakdown.vibe_overlap > 0 {
        reasons.push(format!(
            "You share similar vibe keywords ({} / {}).",
            a.vibe_words.join(", "),
            b.vibe_words.join(", ")
        ));
    }

    if breakdown.like_overlap > 0 {
        reasons.push(format!(
            "You both enjoy talking about: {}.",
            shared_in_order(&a.topics_like, &b.topics_like).join(", ")
        ));
    }

    if breakdown.intro_diff <= 2 {
        reasons.push("Your social energy feels naturally balanced.".to_string());
    }

    if breakdown.has_topic_conflict() {
        risks.push("Some conversation topics might feel draining or annoying.".to_string());
    }

    if breakdown.intro_diff >= 5 {
        risks.push("You recharge in very different ways; pacing will matter.".to_string());
    }

    match (a.social_speed, b.social_speed) {
        (SocialSpeed::Fast, SocialSpeed::Slow) => risks.push(format!(
            "{} moves faster while {} prefers a gentle pace.",
            a.display_name, b.display_name
        )),
        (SocialSpeed::Slow, SocialSpeed::Fast) => risks.push(format!(
            "{} moves faster while {} prefers a gentle pace.",
            b.display_name, a.display_name
        )),
        _ => {}
    }

    let opener_a = format!(
        "Try something simple and grounded, like: \"Hey {}, I liked that you described yourself as {} – how was your day really?\"",
        b.display_name,
        b.primary_vibe().unwrap_or("thoughtful")
    );

    let opener_b = format!(
        "You can start with: \"Hi {}, I relate to the {} vibe you mentioned. What kind of evenings recharge you the most?\"",
        a.display_name,
        a.primary_vibe().unwrap_or("quiet")
    );

    let summary_a = format!(
        "{}, this connection feels {}",
        a.display_name,
        match compatibility.label {
            CompatibilityLabel::High => "strong and emotionally promising.",
            CompatibilityLabel::Medium => "potentially good if you go slowly.",
            CompatibilityLabel::Low => "delicate and needs extra care.",
        }
    );

    let summary_b = format!(
        "{}, this twin connection is {}",
        b.display_name,
        match compatibility.label {
            CompatibilityLabel::High => "a great fit for your current goals.",
            CompatibilityLabel::Medium => "worth exploring gently.",
            CompatibilityLabel::Low => "possible, but only if both of you are patient.",
        }
    );

    Narrative {
        reasons,
        risks,
        opener_a,
        opener_b,
        summary_a,
        summary_b,
    }
}

/// Match card for UI lists, using default weights
pub fn build_match_card(a: &TwinProfile, b: &TwinProfile) -> MatchCard {
    match_card(a, b, &Compatibility::assess(a, b, &ScoringWeights::default()))
}

pub fn match_card(a: &TwinProfile, b: &TwinProfile, compatibility: &Compatibility) -> MatchCard {
    let narrative = narrate(a, b, compatibility);
    let label = compatibility.label;

    let summary = match label {
        CompatibilityLabel::High => format!(
            "{} and {} are strongly aligned and likely to feel safe together.",
            a.display_name, b.display_name
        ),
        CompatibilityLabel::Medium => format!(
            "There is potential between {} and {}, especially if they respect each other’s pacing.",
            a.display_name, b.display_name
        ),
        CompatibilityLabel::Low => {
            "This connection is more experimental; it could work with careful boundaries.".to_string()
        }
    };

    let atmosphere = match label {
        CompatibilityLabel::High => "supportive and grounding",
        CompatibilityLabel::Medium => "interesting and balanced",
        CompatibilityLabel::Low => "intense and unpredictable",
    };

    let vibe_description = format!(
        "{} feels {}, while {} brings {}. Together, the atmosphere can become {}",
        a.display_name,
        joined_or(&a.vibe_words, "subtle"),
        b.display_name,
        joined_or(&b.vibe_words, "their own unique energy"),
        atmosphere
    );

    let suggested_first_message = match label {
        CompatibilityLabel::High => {
            "“Hey, I think our vibes match in a nice way. Want to share something small about your day that felt good?”"
        }
        CompatibilityLabel::Medium => {
            "“You seem interesting but also gentle. How do you usually like to get to know someone new?”"
        }
        CompatibilityLabel::Low => {
            "“I like that you’re different from me. What should I know so I don’t accidentally drain you?”"
        }
    };

    MatchCard {
        compatibility_score: compatibility.score,
        match_label: label.title().to_string(),
        summary,
        vibe_description,
        why_it_works: narrative.reasons,
        watch_out: narrative.risks,
        suggested_first_message: suggested_first_message.to_string(),
    }
}

/// Scripted twin-to-twin introduction, using default weights
pub fn build_twin_intro(a: &TwinProfile, b: &TwinProfile) -> TwinIntro {
    twin_intro(a, b, &Compatibility::assess(a, b, &ScoringWeights::default()))
}

pub fn twin_intro(a: &TwinProfile, b: &TwinProfile, compatibility: &Compatibility) -> TwinIntro {
    let card = match_card(a, b, compatibility);

    let aura_to_aura_script = vec![
        format!(
            "{name}'s Aura: “Hey, I’ve been carrying {name}'s inner world. They’re feeling {vibe} today but they’re genuinely open to you.”",
            name = a.display_name,
            vibe = a.primary_vibe().unwrap_or("quiet")
        ),
        format!(
            "{name}'s Aura: “Nice to meet you. {name} gets overstimulated easily but they love when someone is {flag}.”",
            name = b.display_name,
            flag = b.primary_green_flag().unwrap_or("patient and honest")
        ),
        format!(
            "{name}'s Aura: “Let’s keep the tone {vibe_a} and {vibe_b}. No pressure, just small steps.”",
            name = a.display_name,
            vibe_a = a.primary_vibe().unwrap_or("soft"),
            vibe_b = b.primary_vibe().unwrap_or("kind")
        ),
    ];

    let intro_summary = format!(
        "This link feels like a {}-intensity connection. The Auras agree to protect both social batteries and avoid topics that feel too heavy too fast.",
        card.match_label.to_lowercase()
    );

    let suggested_openers = vec![
        "“What kind of connection are you secretly hoping for right now?”".to_string(),
        "“If tonight could feel emotionally safe for both of us, what would that look like?”".to_string(),
    ];

    let mut safety_notes = Vec::new();
    if !card.watch_out.is_empty() {
        safety_notes.push(format!(
            "Auras will gently slow the pace if conversations step into: {}.",
            card.watch_out.join("; ")
        ));
    }

    TwinIntro {
        title: format!("{} × {}", a.display_name, b.display_name),
        aura_to_aura_script,
        intro_summary,
        suggested_openers,
        safety_notes,
    }
}

fn joined_or(words: &[String], fallback: &str) -> String {
    if words.is_empty() {
        fallback.to_string()
    } else {
        words.join(", ")
    }
}
