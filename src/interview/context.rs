use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form description of the interviewee supplied at session start
/// (name, claimed skills, years of experience, ...).
pub type CandidateProfile = serde_json::Map<String, Value>;

/// Interviewer instructions used before a profile has been set.
const DEFAULT_INSTRUCTIONS: &str = "Perform a mock interview with the user.";

/// Mutable record of the current session: interviewer instructions, the
/// candidate profile, and the ordered question/response/audio sequences.
///
/// Questions and responses grow independently; history rendering zips them
/// positionally, so one unanswered question at the tail is valid state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    instructions: String,
    profile: CandidateProfile,
    questions: Vec<String>,
    responses: Vec<String>,
    audio_refs: Vec<String>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self {
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            profile: CandidateProfile::new(),
            questions: Vec::new(),
            responses: Vec::new(),
            audio_refs: Vec::new(),
        }
    }

    /// Set the candidate profile and derive the interviewer instructions.
    ///
    /// Any prior session content is dropped first, so nothing from a previous
    /// profile can leak into the next prompt.
    pub fn set_instructions(&mut self, profile: CandidateProfile) {
        self.clear();
        self.instructions = format!(
            "Perform a job interview. Here is the description of the candidate: {}. \
             Ask one question at a time and wait for the answer before moving on. \
             Respond in really short sentences: the candidate hears your questions \
             as synthesized speech, so anything long or formatted is lost. \
             Ask the first question.",
            describe_profile(&profile)
        );
        self.profile = profile;
    }

    /// Append an interviewer question.
    pub fn add_question(&mut self, question: String) {
        self.questions.push(question);
    }

    /// Append a transcribed candidate response.
    pub fn add_response(&mut self, response: String) {
        self.responses.push(response);
    }

    /// Append the storage reference of a synthesized question.
    pub fn add_audio_reference(&mut self, audio_ref: String) {
        self.audio_refs.push(audio_ref);
    }

    /// Exact-match check across every recorded question.
    pub fn has_asked(&self, question: &str) -> bool {
        self.questions.iter().any(|q| q == question)
    }

    /// Restore the default empty state. Idempotent.
    pub fn clear(&mut self) {
        self.instructions = DEFAULT_INSTRUCTIONS.to_string();
        self.profile.clear();
        self.questions.clear();
        self.responses.clear();
        self.audio_refs.clear();
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    pub fn audio_refs(&self) -> &[String] {
        &self.audio_refs
    }

    /// Completed turns: positions present in both sequences, in order.
    pub fn completed_turns(&self) -> impl Iterator<Item = (&String, &String)> {
        self.questions.iter().zip(self.responses.iter())
    }

    /// Snapshot title derived from the candidate name and claimed skills.
    pub fn title(&self) -> String {
        let name = profile_text(&self.profile, "name");
        let skills = profile_text(&self.profile, "skills");

        match (name, skills) {
            (Some(name), Some(skills)) => format!("{} - {}", name, skills),
            (Some(name), None) => name,
            (None, Some(skills)) => format!("Interview - {}", skills),
            (None, None) => "Interview".to_string(),
        }
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the profile map as "key: value" pairs for the instruction block.
/// `serde_json::Map` iterates in key order, so the rendering is deterministic.
fn describe_profile(profile: &CandidateProfile) -> String {
    if profile.is_empty() {
        return "(no details provided)".to_string();
    }

    profile
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}: {}", key, s),
            other => format!("{}: {}", key, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn profile_text(profile: &CandidateProfile, key: &str) -> Option<String> {
    match profile.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}
