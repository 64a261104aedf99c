// src/cli/handlers.rs
use std::io::Write;

use crate::error::Result;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClassSelection, PasswordLength};
use crate::strength::{self, ContentAssessment};

pub fn handle_generate<W: Write>(
    out: &mut W,
    generator: &PasswordGenerator,
    length: PasswordLength,
    selection: CharacterClassSelection,
    json: bool,
) -> Result<()> {
    let outcome = generator.generate_password(length, &selection);

    if json {
        serde_json::to_writer(&mut *out, &outcome)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", outcome.password)?;
        writeln!(out, "Strength: {}", outcome.strength)?;
    }

    Ok(())
}

pub fn handle_check<W: Write>(out: &mut W, password: &str, json: bool) -> Result<()> {
    let assessment = strength::assess_content(password);

    if json {
        serde_json::to_writer(&mut *out, &assessment)?;
        writeln!(out)?;
    } else {
        write_assessment(out, &assessment)?;
    }

    Ok(())
}

fn write_assessment<W: Write>(out: &mut W, assessment: &ContentAssessment) -> Result<()> {
    writeln!(out, "Strength: {}", assessment.strength)?;
    for hint in &assessment.feedback {
        writeln!(out, "  - {}", hint)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenerationOutcome, StrengthLevel};

    #[test]
    fn generate_text_output() {
        let mut out = Vec::new();
        let selection = CharacterClassSelection {
            lowercase: true,
            ..Default::default()
        };
        let generator = PasswordGenerator::new();
        handle_generate(&mut out, &generator, PasswordLength::new(9), selection, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let password = lines.next().unwrap();
        assert_eq!(password.len(), 9);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(lines.next(), Some("Strength: Low"));
    }

    #[test]
    fn generate_json_with_empty_selection() {
        let mut out = Vec::new();
        handle_generate(
            &mut out,
            &PasswordGenerator::new(),
            PasswordLength::default(),
            CharacterClassSelection::default(),
            true,
        )
        .unwrap();

        let outcome: GenerationOutcome = serde_json::from_slice(&out).unwrap();
        assert_eq!(outcome, GenerationOutcome::no_criteria());
    }

    #[test]
    fn check_text_output_lists_hints() {
        let mut out = Vec::new();
        handle_check(&mut out, "abcdefgh", false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Strength: Low\n"));
        assert!(text.contains("  - Add uppercase letters\n"));
    }

    #[test]
    fn check_json_output() {
        let mut out = Vec::new();
        handle_check(&mut out, "Abcdef12!@", true).unwrap();
        let assessment: ContentAssessment = serde_json::from_slice(&out).unwrap();
        assert_eq!(assessment.strength, StrengthLevel::High);
    }
}
