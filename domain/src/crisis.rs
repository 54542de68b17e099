//! Keyword based crisis detection.
//!
//! Plain substring matching on the lower-cased message. There is no tokenization, so
//! short phrases such as "die" also match inside unrelated words.

/// Phrases that flag a message as a possible self-harm crisis. Must be lower-case.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "end it all",
    "want to die",
    "self-harm",
    "self harm",
    "hurt myself",
    "no reason to live",
    "better off dead",
    "hopeless",
    "worthless",
    "die",
];

pub const CRISIS_HOTLINE: &str = "If you are in immediate danger, call your local emergency number. \
     In the US you can call or text 988 to reach the Suicide & Crisis Lifeline, available 24/7.";

pub const CRISIS_ADVICE: &str = "You don't have to go through this alone. Please reach out to \
     someone you trust or a mental health professional right now.";

/// Static help returned alongside any message flagged as a crisis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrisisAdvisory {
    pub hotline: &'static str,
    pub advice: &'static str,
}

pub const CRISIS_ADVISORY: CrisisAdvisory = CrisisAdvisory {
    hotline: CRISIS_HOTLINE,
    advice: CRISIS_ADVICE,
};

/// True when any crisis phrase occurs in `text`, ignoring case.
pub fn detect(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CRISIS_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

/// The advisory to show for `text`, if it is a crisis message.
pub fn advisory_for(text: &str) -> Option<CrisisAdvisory> {
    detect(text).then_some(CRISIS_ADVISORY)
}
