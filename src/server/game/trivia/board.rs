//! Answer buttons for trivia games.

use crate::server::game::{
    trivia::source::TriviaMode,
    view::{Control, ControlStyle},
};

/// Discord's limit on button label length.
const MAX_LABEL_CHARS: usize = 80;

pub fn answer_id(index: usize) -> String {
    format!("trivia:answer:{}", index)
}

/// Parses the answer index out of a control id.
pub fn parse_answer_id(control_id: &str) -> Option<usize> {
    control_id.strip_prefix("trivia:answer:")?.parse().ok()
}

fn truncate_label(answer: &str) -> String {
    answer.chars().take(MAX_LABEL_CHARS).collect()
}

/// Builds the single row of answer controls.
///
/// # Arguments
/// - `mode` - Boolean questions get icon buttons, multiple choice plain labels
/// - `answers` - Answer pool in display order
/// - `correct` - Index of the correct answer in `answers`
/// - `resolved` - Whether the question has been answered or timed out; resolved
///   controls are disabled and coloured by correctness
pub fn answer_controls(
    mode: TriviaMode,
    answers: &[String],
    correct: usize,
    resolved: bool,
) -> Vec<Vec<Control>> {
    let row = answers
        .iter()
        .enumerate()
        .map(|(index, answer)| {
            let mut control = match mode {
                TriviaMode::Boolean => {
                    let icon = if answer == "True" { "✔️" } else { "✖️" };
                    let mut control =
                        Control::labeled(answer_id(index), answer.as_str(), ControlStyle::Secondary);
                    control.emoji = Some(icon.to_string());
                    control
                }
                TriviaMode::Multiple => Control::labeled(
                    answer_id(index),
                    truncate_label(answer),
                    ControlStyle::Primary,
                ),
            };

            if resolved {
                let style = if index == correct {
                    ControlStyle::Success
                } else {
                    ControlStyle::Danger
                };
                control = control.style(style).disabled(true);
            }
            control
        })
        .collect();

    vec![row]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(answers: &[&str]) -> Vec<String> {
        answers.iter().map(|a| a.to_string()).collect()
    }

    /// Tests the boolean layout before an answer.
    ///
    /// Expected: two enabled secondary buttons with icons
    #[test]
    fn boolean_controls_before_answer() {
        let rows = answer_controls(TriviaMode::Boolean, &pool(&["True", "False"]), 0, false);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row[0].emoji.as_deref(), Some("✔️"));
        assert_eq!(row[1].emoji.as_deref(), Some("✖️"));
        assert!(row
            .iter()
            .all(|c| c.style == ControlStyle::Secondary && !c.disabled));
    }

    /// Tests recolouring after resolution.
    ///
    /// Expected: correct entry success, all others danger, all disabled
    #[test]
    fn resolved_controls_show_correct_answer() {
        let rows = answer_controls(TriviaMode::Multiple, &pool(&["A", "B", "C", "D"]), 2, true);

        for (index, control) in rows[0].iter().enumerate() {
            assert!(control.disabled);
            let expected = if index == 2 {
                ControlStyle::Success
            } else {
                ControlStyle::Danger
            };
            assert_eq!(control.style, expected);
        }
    }

    /// Tests that long answers fit a button label.
    ///
    /// Expected: label cut to 80 characters
    #[test]
    fn truncates_long_labels() {
        let long = "x".repeat(120);
        let rows = answer_controls(TriviaMode::Multiple, &[long, "y".to_string()], 0, false);

        assert_eq!(rows[0][0].label.as_ref().map(|l| l.chars().count()), Some(80));
    }

    /// Tests parsing answer ids.
    ///
    /// Expected: index for valid ids, None otherwise
    #[test]
    fn parses_answer_ids() {
        assert_eq!(parse_answer_id(&answer_id(3)), Some(3));
        assert_eq!(parse_answer_id("trivia:answer:-1"), None);
        assert_eq!(parse_answer_id("trivia:answer:"), None);
        assert_eq!(parse_answer_id("hangman:stop"), None);
    }
}
