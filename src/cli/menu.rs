// src/cli/menu.rs
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::{style, StyledObject};
use inquire::{CustomType, InquireError, Select, Text};

use crate::clipboard::{self, ClipboardSink, SystemClipboard};
use crate::core::state::{UiEvent, UiState};
use crate::error::Result;
use crate::generators::PasswordGenerator;
use crate::models::{PasswordLength, StrengthLevel, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Generate,
    Copy,
    SetLength,
    ToggleUppercase,
    ToggleLowercase,
    ToggleNumbers,
    ToggleSymbols,
    CheckPassword,
    ToggleVisibility,
    Exit,
}

struct MenuEntry {
    label: String,
    action: MenuAction,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn menu_entries(state: &UiState) -> Vec<MenuEntry> {
    let g = &state.generator;
    let entry = |label: String, action| MenuEntry { label, action };

    vec![
        entry("🎲  Generate password".into(), MenuAction::Generate),
        entry("📋  Copy password".into(), MenuAction::Copy),
        entry(format!("📏  Character length: {}", g.length), MenuAction::SetLength),
        entry(
            format!("{} Include Uppercase Letters", checkbox(g.selection.uppercase)),
            MenuAction::ToggleUppercase,
        ),
        entry(
            format!("{} Include Lowercase Letters", checkbox(g.selection.lowercase)),
            MenuAction::ToggleLowercase,
        ),
        entry(
            format!("{} Include Numbers", checkbox(g.selection.numbers)),
            MenuAction::ToggleNumbers,
        ),
        entry(
            format!("{} Include Symbols", checkbox(g.selection.symbols)),
            MenuAction::ToggleSymbols,
        ),
        entry("🔍  Check a password".into(), MenuAction::CheckPassword),
        entry(visibility_label(state.checker.visible).into(), MenuAction::ToggleVisibility),
        entry("❌  Exit".into(), MenuAction::Exit),
    ]
}

fn visibility_label(visible: bool) -> &'static str {
    if visible {
        "🙈  Hide checked password"
    } else {
        "👁  Show checked password"
    }
}

fn styled_strength(level: StrengthLevel) -> StyledObject<&'static str> {
    let label = style(level.label());
    match level {
        StrengthLevel::High => label.green().bold(),
        StrengthLevel::Medium => label.yellow(),
        StrengthLevel::Low => label.red(),
        StrengthLevel::NoCriteriaSelected => label.dim(),
    }
}

fn masked(text: &str, visible: bool) -> String {
    if visible {
        text.to_string()
    } else {
        "•".repeat(text.chars().count())
    }
}

/// Text rendering of both panels.
fn render_panels(state: &UiState) -> String {
    let g = &state.generator;
    let c = &state.checker;

    let generated = if g.password.is_empty() {
        "P4$5W0rD!".to_string()
    } else {
        g.password.clone()
    };
    let generated_strength = g
        .strength
        .map(|s| styled_strength(s).to_string())
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str("── Password Generator ──────────────────\n");
    out.push_str(&format!("  {}\n", generated));
    out.push_str(&format!("  STRENGTH  {}\n", generated_strength));
    if let Some(notice) = &g.notice {
        out.push_str(&format!("  {}\n", style(notice).green()));
    }
    out.push_str("── Password Strength Check ─────────────\n");
    out.push_str(&format!("  {}\n", masked(&c.typed, c.visible)));
    out.push_str(&format!("  STRENGTH  {}\n", styled_strength(c.strength)));
    out
}

fn action_event(action: MenuAction) -> Option<UiEvent> {
    match action {
        MenuAction::Generate => Some(UiEvent::Generate),
        MenuAction::Copy => Some(UiEvent::CopyPassword),
        MenuAction::ToggleUppercase => Some(UiEvent::ToggleUppercase),
        MenuAction::ToggleLowercase => Some(UiEvent::ToggleLowercase),
        MenuAction::ToggleNumbers => Some(UiEvent::ToggleNumbers),
        MenuAction::ToggleSymbols => Some(UiEvent::ToggleSymbols),
        MenuAction::ToggleVisibility => Some(UiEvent::ToggleVisibility),
        MenuAction::SetLength | MenuAction::CheckPassword | MenuAction::Exit => None,
    }
}

/// Ctrl+C inside a prompt arrives as `OperationInterrupted`, not as a signal,
/// so it raises the same exit flag the signal handler does.
fn settle_prompt<T>(
    answer: std::result::Result<Option<T>, InquireError>,
    should_exit: &AtomicBool,
) -> Result<Option<T>> {
    match answer {
        Err(InquireError::OperationInterrupted) => {
            should_exit.store(true, Ordering::SeqCst);
            Ok(None)
        }
        other => Ok(other?),
    }
}

pub async fn run_cli_menu(
    generator: PasswordGenerator,
    initial: UiState,
    should_exit: Arc<AtomicBool>,
) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║             🔐 PASSGAUGE             ║");
    println!("╚══════════════════════════════════════╝");

    let mut state = initial;
    let mut clipboard = SystemClipboard;

    while !should_exit.load(Ordering::SeqCst) {
        println!("\n{}", render_panels(&state));

        let entries = menu_entries(&state);
        let answer = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", entries)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .with_page_size(12)
                .prompt_skippable()
        })
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let selection_result = settle_prompt(answer, &should_exit)?;

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let action = match selection_result {
            Some(entry) => entry.action,
            None => break,
        };

        let event = match action {
            MenuAction::Exit => break,
            MenuAction::SetLength => {
                let help = format!("{}-{}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
                let answer = CustomType::<usize>::new("Character length:")
                    .with_default(state.generator.length.get())
                    .with_help_message(&help)
                    .with_error_message("Please type a whole number")
                    .prompt_skippable();
                match settle_prompt(answer, &should_exit)? {
                    Some(length) => UiEvent::SetLength {
                        length: PasswordLength::new(length),
                    },
                    None => continue,
                }
            }
            MenuAction::CheckPassword => {
                let answer = Text::new("Enter your password:")
                    .with_initial_value(&state.checker.typed)
                    .prompt_skippable();
                match settle_prompt(answer, &should_exit)? {
                    Some(value) => UiEvent::SetTypedPassword { value },
                    None => continue,
                }
            }
            MenuAction::Copy => {
                if !copy_generated(&mut clipboard, &state) {
                    let hint = style("Clipboard unavailable, copy it from the panel.").yellow();
                    println!("{}", hint);
                }
                UiEvent::CopyPassword
            }
            other => match action_event(other) {
                Some(event) => event,
                None => continue,
            },
        };

        state = generator.with_rng(|rng| state.apply(event, rng));
    }

    println!("\n👋 Goodbye!");
    Ok(())
}

/// The copy notice is applied whether or not this returns true.
fn copy_generated(sink: &mut dyn ClipboardSink, state: &UiState) -> bool {
    clipboard::copy_password(sink, &state.generator.password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::tests::RecordingClipboard;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn entries_reflect_selection() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = UiState::default().apply(UiEvent::ToggleNumbers, &mut rng);
        let labels: Vec<String> = menu_entries(&state).into_iter().map(|e| e.label).collect();
        assert!(labels.contains(&"[x] Include Numbers".to_string()));
        assert!(labels.contains(&"[ ] Include Symbols".to_string()));
        assert!(labels.contains(&"📏  Character length: 8".to_string()));
    }

    #[test]
    fn typed_password_is_masked_until_shown() {
        let mut rng = StdRng::seed_from_u64(5);
        let typed = UiEvent::SetTypedPassword {
            value: "hunter22".into(),
        };
        let state = UiState::default().apply(typed, &mut rng);
        assert!(!render_panels(&state).contains("hunter22"));
        assert!(render_panels(&state).contains("••••••••"));

        let state = state.apply(UiEvent::ToggleVisibility, &mut rng);
        assert!(render_panels(&state).contains("hunter22"));
    }

    #[test]
    fn copy_sends_generated_password() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = UiState::default()
            .apply(UiEvent::ToggleLowercase, &mut rng)
            .apply(UiEvent::Generate, &mut rng);
        let mut sink = RecordingClipboard::default();
        assert!(copy_generated(&mut sink, &state));
        assert_eq!(sink.contents.as_deref(), Some(state.generator.password.as_str()));
    }

    #[test]
    fn refused_copy_is_reported_but_notice_still_applies() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = UiState::default()
            .apply(UiEvent::ToggleLowercase, &mut rng)
            .apply(UiEvent::Generate, &mut rng);
        let mut sink = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(!copy_generated(&mut sink, &state));

        let state = state.apply(UiEvent::CopyPassword, &mut rng);
        assert!(state.generator.notice.is_some());
    }

    #[test]
    fn interrupted_prompt_raises_exit_flag() {
        let should_exit = AtomicBool::new(false);
        let answer = settle_prompt::<usize>(Err(InquireError::OperationInterrupted), &should_exit);
        assert!(matches!(answer, Ok(None)));
        assert!(should_exit.load(Ordering::SeqCst));
    }

    #[test]
    fn answered_or_skipped_prompt_leaves_flag_alone() {
        let should_exit = AtomicBool::new(false);
        assert!(matches!(settle_prompt(Ok(Some(12usize)), &should_exit), Ok(Some(12))));
        assert!(matches!(settle_prompt::<usize>(Ok(None), &should_exit), Ok(None)));
        assert!(!should_exit.load(Ordering::SeqCst));
    }

    #[test]
    fn other_prompt_errors_propagate() {
        let should_exit = AtomicBool::new(false);
        let answer = settle_prompt::<usize>(Err(InquireError::NotTTY), &should_exit);
        assert!(answer.is_err());
        assert!(!should_exit.load(Ordering::SeqCst));
    }

    #[test]
    fn menu_actions_map_to_events() {
        assert_eq!(action_event(MenuAction::Generate), Some(UiEvent::Generate));
        assert_eq!(action_event(MenuAction::ToggleVisibility), Some(UiEvent::ToggleVisibility));
        assert_eq!(action_event(MenuAction::Exit), None);
    }
}
