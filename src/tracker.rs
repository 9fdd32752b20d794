//! Mastery and streak heuristics over the keyed blob store.
//!
//! Counters are non-negative and adjusted monotonically per user action:
//! chat turns bump per-topic activity, quiz results blend into mastery and
//! advance the daily streak. All of this is advisory analytics; nothing in
//! the tutoring path reads it back.

use chrono::Utc;
use tracing::{debug, instrument};

use crate::domain::{SkillMetric, Topic, UserProfile};
use crate::store::{BlobStore, KEY_PROFILE, KEY_SKILLS};

fn skill_entry<'a>(skills: &'a mut Vec<SkillMetric>, topic: &str) -> &'a mut SkillMetric {
    if let Some(pos) = skills.iter().position(|s| s.topic == topic) {
        return &mut skills[pos];
    }
    skills.push(SkillMetric { topic: topic.to_string(), ..SkillMetric::default() });
    let last = skills.len() - 1;
    &mut skills[last]
}

/// Recompute the profile aggregates that depend on the skill list.
fn refresh_aggregates(profile: &mut UserProfile, skills: &[SkillMetric]) {
    profile.total_topics_learned = skills.len() as u32;
    profile.average_mastery = if skills.is_empty() {
        0
    } else {
        (skills.iter().map(|s| s.mastery_level as u32).sum::<u32>() / skills.len() as u32) as u8
    };
}

/// Advance the consecutive-day streak based on the last practice date.
fn advance_streak(profile: &mut UserProfile, skill: &SkillMetric) {
    let today = Utc::now().date_naive();
    match skill.last_practiced.map(|t| t.date_naive()) {
        Some(last) if last == today => {}
        Some(last) if today.signed_duration_since(last).num_days() == 1 => {
            profile.current_streak += 1;
        }
        _ => profile.current_streak = 1,
    }
    profile.longest_streak = profile.longest_streak.max(profile.current_streak);
}

/// A chat turn touched these topics: count one question asked per tag and a
/// minute of practice time.
#[instrument(level = "debug", skip(store, tags))]
pub async fn record_chat_turn(store: &BlobStore, tags: &[Topic]) {
    if tags.is_empty() {
        return;
    }
    let mut skills: Vec<SkillMetric> = store.read(KEY_SKILLS).await;
    let mut profile: UserProfile = store.read(KEY_PROFILE).await;
    if profile.joined_date.is_none() {
        profile.joined_date = Some(Utc::now());
    }

    for tag in tags {
        let skill = skill_entry(&mut skills, tag.as_str());
        skill.questions_asked += 1;
        skill.time_spent_minutes += 1;
        advance_streak(&mut profile, skill);
        skill.last_practiced = Some(Utc::now());
    }
    profile.total_learning_minutes += tags.len() as u32;
    refresh_aggregates(&mut profile, &skills);

    store.write(KEY_SKILLS, &skills).await;
    store.write(KEY_PROFILE, &profile).await;
    debug!(target: "edubuddy_backend", tags = tags.len(), "Recorded chat turn");
}

/// Fold one finished quiz into the topic's mastery (3:1 rolling blend toward
/// the new percentage) and the validation counters.
#[instrument(level = "info", skip(store), fields(topic = topic.as_str(), correct, total))]
pub async fn record_quiz_result(store: &BlobStore, topic: Topic, correct: u32, total: u32) {
    if total == 0 {
        return;
    }
    let pct = (correct * 100 / total).min(100);

    let mut skills: Vec<SkillMetric> = store.read(KEY_SKILLS).await;
    let mut profile: UserProfile = store.read(KEY_PROFILE).await;
    if profile.joined_date.is_none() {
        profile.joined_date = Some(Utc::now());
    }

    let skill = skill_entry(&mut skills, topic.as_str());
    skill.questions_asked += total;
    skill.questions_correct += correct;
    skill.validations_passed += correct;
    skill.validations_failed += total - correct;
    skill.mastery_level = (((skill.mastery_level as u32) * 3 + pct) / 4).min(100) as u8;
    advance_streak(&mut profile, skill);
    skill.last_practiced = Some(Utc::now());
    skill.streak_days = profile.current_streak;

    refresh_aggregates(&mut profile, &skills);
    store.write(KEY_SKILLS, &skills).await;
    store.write(KEY_PROFILE, &profile).await;
}
