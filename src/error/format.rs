use crate::error::{ErrorContext, SdkError};

const RED_BOLD: &str = "\x1b[1;31m";
const YELLOW_BOLD: &str = "\x1b[1;33m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(&self, style: &str, text: &str) -> String {
        if self.enabled {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Rendering for stderr; `use_color` adds ANSI styles, each closed on the
/// line it opens on.
///
/// Searched-location lines (`  - <path> (<source>)`) in the details are dimmed
/// so the missing root stands out.
pub fn format_error_with_color(error: &SdkError, use_color: bool) -> String {
    let palette = Palette { enabled: use_color };
    let context = ErrorContext::new(error);
    let mut output = format!("{} {error}\n", palette.paint(RED_BOLD, "Error:"));

    if let Some(details) = &context.details {
        output.push('\n');
        for line in details.lines() {
            if line.starts_with("  - ") {
                output.push_str(&palette.paint(DIM, line));
            } else {
                output.push_str(line);
            }
            output.push('\n');
        }
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{}\n", palette.paint(YELLOW_BOLD, "Suggestion:")));
        for line in suggestion.lines().filter(|line| !line.trim().is_empty()) {
            output.push_str(&format!("  {}\n", palette.paint(CYAN, line)));
        }
    }

    output
}
