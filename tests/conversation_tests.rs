// Tests for conversation state
//
// These verify the append-only turn sequences, the positional zip of
// questions and responses, instruction derivation, and the clear semantics.

use serde_json::Value;
use viva_interview::{CandidateProfile, ConversationContext};

fn profile(pairs: &[(&str, &str)]) -> CandidateProfile {
    let mut map = CandidateProfile::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    map
}

#[test]
fn test_new_context_is_empty() {
    let ctx = ConversationContext::new();

    assert!(ctx.questions().is_empty());
    assert!(ctx.responses().is_empty());
    assert!(ctx.audio_refs().is_empty());
    assert!(ctx.profile().is_empty());
    assert!(!ctx.instructions().is_empty(), "default instructions exist");
}

#[test]
fn test_sequences_grow_independently() {
    let mut ctx = ConversationContext::new();

    ctx.add_question("Tell me about yourself.".to_string());
    ctx.add_question("What is a borrow checker?".to_string());
    ctx.add_response("I am a developer.".to_string());
    ctx.add_audio_reference("a1.mp3".to_string());

    assert_eq!(ctx.questions().len(), 2);
    assert_eq!(ctx.responses().len(), 1);
    assert_eq!(ctx.audio_refs().len(), 1);
}

#[test]
fn test_completed_turns_zip_to_min_length() {
    let mut ctx = ConversationContext::new();

    ctx.add_question("Q1".to_string());
    ctx.add_response("A1".to_string());
    ctx.add_question("Q2".to_string());
    ctx.add_response("A2".to_string());
    // Dangling unanswered question: valid transient state
    ctx.add_question("Q3".to_string());

    let turns: Vec<_> = ctx.completed_turns().collect();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0], (&"Q1".to_string(), &"A1".to_string()));
    assert_eq!(turns[1], (&"Q2".to_string(), &"A2".to_string()));
}

#[test]
fn test_has_asked_is_exact_match() {
    let mut ctx = ConversationContext::new();
    ctx.add_question("What is ownership?".to_string());

    assert!(ctx.has_asked("What is ownership?"));
    assert!(!ctx.has_asked("what is ownership?"));
    assert!(!ctx.has_asked("What is ownership"));
}

#[test]
fn test_set_instructions_embeds_profile() {
    let mut ctx = ConversationContext::new();
    ctx.set_instructions(profile(&[("name", "Ann"), ("skills", "Java")]));

    assert!(ctx.instructions().contains("name: Ann"));
    assert!(ctx.instructions().contains("skills: Java"));
    assert!(
        ctx.instructions().contains("Ask the first question"),
        "opening directive must be part of the derived instructions"
    );
}

#[test]
fn test_set_instructions_supersedes_previous_profile() {
    let mut ctx = ConversationContext::new();
    ctx.set_instructions(profile(&[("name", "Ann"), ("skills", "Java")]));
    ctx.add_question("Q1".to_string());
    ctx.add_response("A1".to_string());

    ctx.set_instructions(profile(&[("name", "Bob"), ("skills", "Rust")]));

    assert!(!ctx.instructions().contains("Ann"));
    assert!(!ctx.instructions().contains("Java"));
    assert!(ctx.instructions().contains("Bob"));
    assert!(ctx.questions().is_empty(), "prior turns must be dropped");
    assert!(ctx.responses().is_empty());
}

#[test]
fn test_clear_restores_defaults_and_is_idempotent() {
    let mut ctx = ConversationContext::new();
    ctx.set_instructions(profile(&[("name", "Ann")]));
    ctx.add_question("Q1".to_string());
    ctx.add_response("A1".to_string());
    ctx.add_audio_reference("a1.mp3".to_string());

    ctx.clear();
    ctx.clear();

    assert!(ctx.questions().is_empty());
    assert!(ctx.responses().is_empty());
    assert!(ctx.audio_refs().is_empty());
    assert!(ctx.profile().is_empty());
    assert!(!ctx.has_asked("Q1"));
    assert!(!ctx.instructions().contains("Ann"));
}

#[test]
fn test_title_from_name_and_skills() {
    let mut ctx = ConversationContext::new();
    ctx.set_instructions(profile(&[("name", "Ann"), ("skills", "Java")]));
    assert_eq!(ctx.title(), "Ann - Java");
}

#[test]
fn test_title_fallbacks() {
    let mut ctx = ConversationContext::new();
    assert_eq!(ctx.title(), "Interview");

    ctx.set_instructions(profile(&[("name", "Ann")]));
    assert_eq!(ctx.title(), "Ann");

    ctx.set_instructions(profile(&[("skills", "Rust")]));
    assert_eq!(ctx.title(), "Interview - Rust");
}
