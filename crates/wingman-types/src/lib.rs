// crates/wingman-types/src/lib.rs
// Shared types for Wingman (native + WASM compatible)
// No native-only dependencies allowed here

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════
// PERSONAS
// ═══════════════════════════════════════

/// Personas steer the tone of the generated pickup lines.
/// The selected persona contributes exactly one guidance clause to the
/// prompt; the other personas contribute nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Passive,
    Alpha,
    Cringy,
}

impl Persona {
    /// Every persona, in the order the picker lists them.
    pub const ALL: [Persona; 3] = [Persona::Passive, Persona::Alpha, Persona::Cringy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Passive => "passive",
            Persona::Alpha => "alpha",
            Persona::Cringy => "cringy",
        }
    }

    /// Capitalized name for display in the picker.
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Passive => "Passive",
            Persona::Alpha => "Alpha",
            Persona::Cringy => "Cringy",
        }
    }

    /// Returns the guidance clause for this persona.
    /// Each clause tells the model what register its two answers should hit.
    pub fn guidance(&self) -> &'static str {
        match self {
            Persona::Passive => "Make sure the answers suit a shy and subtle student.",
            Persona::Alpha => {
                "Make sure the answers suit a dominant and confident student. \
                 Sports, competition, or sheer bravado all work."
            }
            Persona::Cringy => "Remember to keep the answers cringeworthy and campus related.",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Persona {
    type Err = ();

    /// Parse a persona name from string.
    /// Used for the picker's `<select>` value round-trip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passive" => Ok(Persona::Passive),
            "alpha" => Ok(Persona::Alpha),
            "cringy" => Ok(Persona::Cringy),
            _ => Err(()),
        }
    }
}

// ═══════════════════════════════════════
// WIRE TYPES
// ═══════════════════════════════════════

/// Request body for the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
}

// ═══════════════════════════════════════
// PROMPT COMPOSITION
// ═══════════════════════════════════════

/// Builds the complete instruction prompt for one generation run.
///
/// The question goes in verbatim; a trailing period is appended only when
/// the question does not already end with one.
pub fn compose_prompt(persona: Persona, question: &str) -> String {
    let mut prompt = String::new();

    // 1. Role framing and persona vocabulary
    prompt.push_str(
        "You are Wingman, an AI that comes up with the best pickup lines for college students. ",
    );
    prompt.push_str(&format!(
        "Your task is to come up with the best response in the {} persona. ",
        persona.as_str()
    ));
    prompt.push_str("A passive student would be polite and shy. ");
    prompt.push_str("An alpha student would be overconfident and forceful. ");
    prompt.push_str(
        "A cringy student would use pickup lines that sound like they came from a grade schooler.\n\n",
    );

    // 2. Output format: exactly two answers, labeled
    prompt.push_str(
        "For your final answer, only provide 2 campus pickup lines labeled as \"1\" and \"2\". ",
    );
    prompt.push_str("You do not need to write out the answer for each step.\n");

    // 3. Guidance clause for the selected persona only
    prompt.push_str(persona.guidance());
    prompt.push_str("\n");

    // 4. Length cap, then the question verbatim
    prompt.push_str("Make sure each generated answer is less than 200 characters. ");
    prompt.push_str(question);
    if !question.ends_with('.') {
        prompt.push('.');
    }

    prompt
}

// ═══════════════════════════════════════
// ANSWER PARSING
// ═══════════════════════════════════════

/// Splits a streamed answer buffer into the individual lines the model
/// produced.
///
/// The model is asked to label its two answers "1" and "2". Everything up
/// to and including the first "1" label is preamble and gets dropped; the
/// remainder is split on the literal "2." marker. Output with no "1" label
/// at all yields no answers rather than one garbage card.
pub fn split_answers(buffer: &str) -> Vec<String> {
    let Some(label) = buffer.find('1') else {
        return Vec::new();
    };

    // Skip the label itself: the "1" plus its period when present
    let mut rest = &buffer[label + 1..];
    if let Some(stripped) = rest.strip_prefix('.') {
        rest = stripped;
    }

    rest.split("2.").map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Persona tests
    // ============================================================================

    #[test]
    fn test_persona_serialize() {
        assert_eq!(
            serde_json::to_string(&Persona::Passive).unwrap(),
            "\"passive\""
        );
        assert_eq!(serde_json::to_string(&Persona::Alpha).unwrap(), "\"alpha\"");
        assert_eq!(
            serde_json::to_string(&Persona::Cringy).unwrap(),
            "\"cringy\""
        );
    }

    #[test]
    fn test_persona_deserialize() {
        let alpha: Persona = serde_json::from_str("\"alpha\"").unwrap();
        assert_eq!(alpha, Persona::Alpha);

        let cringy: Persona = serde_json::from_str("\"cringy\"").unwrap();
        assert_eq!(cringy, Persona::Cringy);
    }

    #[test]
    fn test_persona_from_str() {
        assert_eq!("passive".parse::<Persona>().unwrap(), Persona::Passive);
        // Parsing is case-insensitive, matching the capitalized labels
        assert_eq!("Alpha".parse::<Persona>().unwrap(), Persona::Alpha);
        assert!("chad".parse::<Persona>().is_err());
        assert!("".parse::<Persona>().is_err());
    }

    #[test]
    fn test_persona_display_round_trip() {
        for persona in Persona::ALL {
            let parsed: Persona = persona.to_string().parse().unwrap();
            assert_eq!(parsed, persona);
        }
    }

    #[test]
    fn test_persona_labels() {
        assert_eq!(Persona::Passive.as_str(), "passive");
        assert_eq!(Persona::Passive.label(), "Passive");
        assert_eq!(Persona::Cringy.label(), "Cringy");
    }

    #[test]
    fn test_persona_all_order() {
        assert_eq!(
            Persona::ALL,
            [Persona::Passive, Persona::Alpha, Persona::Cringy]
        );
    }

    // ============================================================================
    // GenerateRequest tests
    // ============================================================================

    #[test]
    fn test_generate_request_serialize() {
        let req = GenerateRequest {
            prompt: "two lines please".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"prompt":"two lines please"}"#);
    }

    #[test]
    fn test_generate_request_deserialize() {
        let req: GenerateRequest = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
        assert_eq!(req.prompt, "hi");
    }

    #[test]
    fn test_generate_request_round_trip() {
        let req = GenerateRequest {
            prompt: compose_prompt(Persona::Alpha, "What do I say in the gym?"),
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: GenerateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    // ============================================================================
    // compose_prompt tests
    // ============================================================================

    #[test]
    fn test_compose_prompt_contains_question_verbatim() {
        let question = "What is the best pickup line to use at the library at 6pm?";
        for persona in Persona::ALL {
            let prompt = compose_prompt(persona, question);
            assert!(prompt.contains(question));
        }
    }

    #[test]
    fn test_compose_prompt_appends_trailing_period() {
        let prompt = compose_prompt(Persona::Passive, "How do I say hi at the dining hall");
        assert!(prompt.ends_with("How do I say hi at the dining hall."));
    }

    #[test]
    fn test_compose_prompt_keeps_existing_period() {
        let prompt = compose_prompt(Persona::Passive, "Help me out.");
        assert!(prompt.ends_with("Help me out."));
        assert!(!prompt.ends_with("Help me out.."));
    }

    #[test]
    fn test_compose_prompt_period_after_question_mark() {
        // A question mark is not a period, so one still gets appended
        let prompt = compose_prompt(Persona::Alpha, "What do I say at 6pm?");
        assert!(prompt.ends_with("What do I say at 6pm?."));
    }

    #[test]
    fn test_compose_prompt_empty_question() {
        for persona in Persona::ALL {
            let prompt = compose_prompt(persona, "");
            assert!(!prompt.is_empty());
            assert!(prompt.ends_with('.'));
        }
    }

    #[test]
    fn test_compose_prompt_selected_guidance_only() {
        let prompt = compose_prompt(Persona::Alpha, "anything");
        assert!(prompt.contains("dominant and confident"));
        assert!(!prompt.contains("shy and subtle"));
        assert!(!prompt.contains("cringeworthy"));

        let prompt = compose_prompt(Persona::Passive, "anything");
        assert!(prompt.contains("shy and subtle"));
        assert!(!prompt.contains("dominant and confident"));
    }

    #[test]
    fn test_compose_prompt_never_says_null() {
        for persona in Persona::ALL {
            let prompt = compose_prompt(persona, "anything");
            assert!(!prompt.contains("null"));
        }
    }

    #[test]
    fn test_compose_prompt_asks_for_labeled_answers() {
        let prompt = compose_prompt(Persona::Cringy, "anything");
        assert!(prompt.contains("labeled as \"1\" and \"2\""));
        assert!(prompt.contains("less than 200 characters"));
    }

    #[test]
    fn test_compose_prompt_names_persona() {
        let prompt = compose_prompt(Persona::Alpha, "anything");
        assert!(prompt.contains("in the alpha persona"));
    }

    // ============================================================================
    // split_answers tests
    // ============================================================================

    #[test]
    fn test_split_answers_canonical_stream() {
        // Chunks arrive exactly as the endpoint streams them
        let mut buffer = String::new();
        for chunk in ["Here are...", "1. Hey girl\n2. Nice shoes"] {
            buffer.push_str(chunk);
        }
        assert_eq!(
            split_answers(&buffer),
            vec![" Hey girl\n".to_string(), " Nice shoes".to_string()]
        );
    }

    #[test]
    fn test_split_answers_label_at_start() {
        let answers = split_answers("1. First line\n2. Second line");
        assert_eq!(answers, vec![" First line\n", " Second line"]);
    }

    #[test]
    fn test_split_answers_no_label() {
        assert!(split_answers("I cannot help with that").is_empty());
    }

    #[test]
    fn test_split_answers_empty_buffer() {
        assert!(split_answers("").is_empty());
    }

    #[test]
    fn test_split_answers_missing_second_marker() {
        let answers = split_answers("1. Only one line today");
        assert_eq!(answers, vec![" Only one line today"]);
    }

    #[test]
    fn test_split_answers_bare_label() {
        // Some completions label without the period
        let answers = split_answers("1 First\n2. Second");
        assert_eq!(answers, vec![" First\n", " Second"]);
    }

    #[test]
    fn test_split_answers_mid_stream() {
        // Re-parsed on every chunk: nothing until the first label lands
        assert!(split_answers("Here are ").is_empty());
        assert_eq!(split_answers("Here are...1. Hey"), vec![" Hey"]);
    }
}
