//! The adaptive tutor response selector.
//!
//! A pure function over (latest user text, running message count): classify
//! the topic by keyword, bucket the proficiency level by turn count, pick the
//! authored script, and interleave a validation question on even turns.
//! No state, no I/O; the surrounding provider adds the cosmetic reply delay.

use serde::Serialize;

use crate::content::{
    teaching_script, validation_banner, validation_questions, ASSESSMENT_QUESTIONS,
};
use crate::domain::{Level, Topic};

/// Ordered keyword table; first matching entry wins. Photosynthesis is checked
/// before math, math before python. A message matching none is `General`.
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Photosynthesis, &["photosynthesis", "plant"]),
    (Topic::Math, &["2x + 5", "solve", "equation"]),
    (Topic::Python, &["python", "loop", "programming"]),
];

/// Selector output plus the echo metadata returned to the client.
#[derive(Clone, Debug)]
pub struct TutorReply {
    pub message: String,
    pub metadata: Option<ReplyMetadata>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReplyMetadata {
    pub topic: Topic,
    pub level: Level,
    #[serde(rename = "messageCount")]
    pub message_count: usize,
}

/// Beginner below 3 messages, intermediate below 8, advanced from 8 on.
pub fn proficiency_level(message_count: usize) -> Level {
    if message_count < 3 {
        Level::Beginner
    } else if message_count < 8 {
        Level::Intermediate
    } else {
        Level::Advanced
    }
}

/// First-match-wins, case-insensitive classification of free text.
pub fn classify_topic(text: &str) -> Topic {
    let lower = text.to_lowercase();
    for (topic, keywords) in TOPIC_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *topic;
        }
    }
    Topic::General
}

/// All matching topic tags, for client analytics. Unlike [`classify_topic`]
/// this does not stop at the first hit; a message about "plants in Python"
/// yields both tags.
pub fn topic_tags(text: &str) -> Vec<Topic> {
    let lower = text.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(topic, _)| *topic)
        .collect()
}

/// Deterministic canned-script selection. `message_count` must be >= 1; the
/// request boundary rejects empty histories before we get here.
pub fn select_response(user_text: &str, message_count: usize) -> TutorReply {
    let topic = classify_topic(user_text);
    let level = proficiency_level(message_count);
    let metadata = Some(ReplyMetadata { topic, level, message_count });

    // The first two assistant replies are always profiling questions,
    // regardless of topic or content.
    if message_count == 1 {
        return TutorReply {
            message: format!(
                "Great! I appreciate you sharing that. Now let me understand your current level better.\n\n{}",
                ASSESSMENT_QUESTIONS[1]
            ),
            metadata,
        };
    }
    if message_count == 2 {
        return TutorReply {
            message: format!("Perfect! Now tell me:\n\n{}", ASSESSMENT_QUESTIONS[2]),
            metadata,
        };
    }

    let message = match teaching_script(topic, level) {
        Some(script) => {
            if message_count % 2 == 0 {
                let questions = validation_questions(topic);
                let idx = (message_count / 3) % questions.len();
                format!("{}\n\n{}\n{}", script, validation_banner(topic), questions[idx])
            } else {
                script.to_string()
            }
        }
        // No keyword matched: ask about learning style instead of teaching.
        None => format!(
            "That's a great question! Based on your learning style, let me explain this in a way that works best for you.\n\nFirst, I'd like to understand better:\n{}\n\nThis helps me teach you in the most effective way! 📚",
            ASSESSMENT_QUESTIONS[0]
        ),
    };

    TutorReply { message, metadata }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(reply: &TutorReply) -> ReplyMetadata {
        reply.metadata.expect("scripted replies always carry metadata")
    }

    #[test]
    fn level_boundaries_at_three_and_eight() {
        assert_eq!(proficiency_level(0), Level::Beginner);
        assert_eq!(proficiency_level(2), Level::Beginner);
        assert_eq!(proficiency_level(3), Level::Intermediate);
        assert_eq!(proficiency_level(7), Level::Intermediate);
        assert_eq!(proficiency_level(8), Level::Advanced);
        assert_eq!(proficiency_level(100), Level::Advanced);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify_topic("Tell me about PHOTOSYNTHESIS"), Topic::Photosynthesis);
        assert_eq!(classify_topic("how do I SOLVE this"), Topic::Math);
        assert_eq!(classify_topic("Python Loops"), Topic::Python);
        assert_eq!(classify_topic("tell me about history"), Topic::General);
    }

    #[test]
    fn classification_is_first_match_wins() {
        // "plant" (photosynthesis) beats "python" because photosynthesis is
        // checked first in the fixed ordering.
        assert_eq!(classify_topic("a plant simulation in python"), Topic::Photosynthesis);
        // "solve" (math) beats "loop" (python).
        assert_eq!(classify_topic("solve this with a loop"), Topic::Math);
    }

    #[test]
    fn tags_collect_every_match() {
        let tags = topic_tags("a plant simulation in python");
        assert_eq!(tags, vec![Topic::Photosynthesis, Topic::Python]);
        assert!(topic_tags("hello there").is_empty());
    }

    #[test]
    fn first_two_counts_return_profiling_prompts_regardless_of_text() {
        for text in ["photosynthesis", "python loops", "anything at all"] {
            let r1 = select_response(text, 1);
            assert!(r1.message.contains(super::ASSESSMENT_QUESTIONS[1]));
            let r2 = select_response(text, 2);
            assert!(r2.message.contains(super::ASSESSMENT_QUESTIONS[2]));
        }
    }

    #[test]
    fn even_counts_append_validation_question_odd_counts_do_not() {
        for text in ["photosynthesis please", "solve 2x + 5 = 15", "teach me python"] {
            let even = select_response(text, 4);
            assert!(even.message.contains("🎯"), "{text}");
            let odd = select_response(text, 5);
            assert!(!odd.message.contains("🎯"), "{text}");
        }
    }

    #[test]
    fn validation_index_cycles_floor_n_over_3_mod_len() {
        let qs = validation_questions(Topic::Photosynthesis);
        // 4/3 = 1, 6/3 = 2, 10/3 = 3 mod 3 = 0
        for (count, idx) in [(4usize, 1usize), (6, 2), (10, 0)] {
            let r = select_response("photosynthesis", count);
            assert!(r.message.ends_with(qs[idx]), "count={count}");
        }
    }

    #[test]
    fn general_topic_returns_learning_style_prompt_at_any_count() {
        for count in [3usize, 4, 9, 40] {
            let r = select_response("tell me about the roman empire", count);
            assert!(r.message.contains(super::ASSESSMENT_QUESTIONS[0]), "count={count}");
            assert_eq!(meta(&r).topic, Topic::General);
        }
    }

    #[test]
    fn metadata_reflects_inputs() {
        let r = select_response("explain photosynthesis", 9);
        let m = meta(&r);
        assert_eq!(m.topic, Topic::Photosynthesis);
        assert_eq!(m.level, Level::Advanced);
        assert_eq!(m.message_count, 9);
    }

    #[test]
    fn selection_is_deterministic() {
        let a = select_response("solve this equation", 6);
        let b = select_response("solve this equation", 6);
        assert_eq!(a.message, b.message);
        assert_eq!(meta(&a), meta(&b));
    }
}
