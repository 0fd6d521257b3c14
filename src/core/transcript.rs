use crate::core::scoring::Compatibility;
use crate::models::{ScoringWeights, SocialSpeed, Speaker, TranscriptResult, TranscriptTurn, TwinProfile};

/// Turns in the full scripted exchange
pub const SCRIPT_TURNS: usize = 6;

const FALLBACK_TOPIC: &str = "slow evenings and small comforts";

/// Deterministic twin-to-twin conversation, using default weights
///
/// The script is a fixed linear template; `max_turns` only truncates it, so
/// the result always holds `min(max_turns, 6)` turns alternating A, B, A, ...
pub fn simulate_transcript(a: &TwinProfile, b: &TwinProfile, max_turns: usize) -> TranscriptResult {
    transcript(a, b, &Compatibility::assess(a, b, &ScoringWeights::default()), max_turns)
}

/// Script and summary for an already assessed pair
///
/// The summary names the match level in its capitalized card form
/// (`Medium`), not the lowercase wire label.
pub fn transcript(
    a: &TwinProfile,
    b: &TwinProfile,
    compatibility: &Compatibility,
    max_turns: usize,
) -> TranscriptResult {
    let topic = shared_topic(a, b);
    let pace = pace_phrase(a.social_speed, b.social_speed);

    let script = [
        format!(
            "Hey, I'm {}'s Aura. They’re feeling {} today and hoping for something {}.",
            a.display_name,
            a.primary_vibe().unwrap_or("soft"),
            a.primary_goal().unwrap_or("gentle")
        ),
        format!(
            "Nice to meet you. I'm {}'s Aura. They’re in a {} headspace and would enjoy {}.",
            b.display_name,
            b.primary_vibe().unwrap_or("quiet"),
            b.primary_goal().unwrap_or("a low-pressure chat")
        ),
        format!(
            "They both light up when talking about {}. Maybe we keep the focus there for now.",
            topic
        ),
        "Agreed. Heavy topics and sharp conflicts are off-limits tonight. Let’s keep it human, honest and simple."
            .to_string(),
        format!(
            "My priority is {}'s nervous system. If they start to shut down, I’ll quietly nudge them to take a break.",
            a.display_name
        ),
        format!(
            "Same here for {}. We’ll handle the emotional calibration while they just answer honestly.",
            b.display_name
        ),
    ];

    let turns: Vec<TranscriptTurn> = script
        .into_iter()
        .take(max_turns)
        .enumerate()
        .map(|(index, text)| TranscriptTurn {
            from: Speaker::for_turn(index),
            text,
        })
        .collect();

    let summary = format!(
        "The twin chat sets a tone of safety and {}. Match level: {} ({}/100). They’re encouraged to talk about {} and avoid known draining topics.",
        pace,
        compatibility.label.title(),
        compatibility.score,
        topic
    );

    TranscriptResult {
        transcript: turns,
        summary,
    }
}

/// First topic A likes that B also likes, ignoring case
pub fn shared_topic<'a>(a: &'a TwinProfile, b: &TwinProfile) -> &'a str {
    a.topics_like
        .iter()
        .find(|topic| {
            b.topics_like
                .iter()
                .any(|other| other.to_lowercase() == topic.to_lowercase())
        })
        .map(String::as_str)
        .unwrap_or(FALLBACK_TOPIC)
}

fn pace_phrase(a: SocialSpeed, b: SocialSpeed) -> &'static str {
    if a == SocialSpeed::Slow || b == SocialSpeed::Slow {
        "moving at a slow, breathable pace"
    } else {
        "adjusting the pace as you go"
    }
}
