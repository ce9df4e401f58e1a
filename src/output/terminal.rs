// Colored terminal output for analysis results.

use colored::{ColoredString, Colorize};

use crate::models::{AnalysisResult, Category};

/// Display one analysis in the terminal.
pub fn display_analysis(input: &str, result: &AnalysisResult) {
    println!("\n{}", "=== Danger Analysis ===".bold());
    println!("  Text: {}", preview(input.trim(), 80).dimmed());
    println!();

    println!(
        "  Score: {}  Category: {}",
        format!("{:.1}", result.score).bold(),
        colorize_category(result.category),
    );

    let m = &result.metrics;
    println!(
        "  Threat {:.0}%  /  Noise {:.0}%",
        m.threat_percent, m.noise_percent
    );

    if !result.matched_keywords.danger.is_empty() {
        println!(
            "  Danger terms: {}",
            result.matched_keywords.danger.join(", ").red()
        );
    }
    if !result.matched_keywords.noise.is_empty() {
        println!(
            "  Noise terms:  {}",
            result.matched_keywords.noise.join(", ").yellow()
        );
    }

    if m.drama_units > 0 {
        let d = &m.drama_breakdown;
        println!(
            "  Drama: {} units {}",
            m.drama_units,
            format!(
                "(exclaim {}, elongation {}, hype {}, caps {})",
                d.exclaim_groups, d.elongations, d.latin_hype, d.caps_shout
            )
            .dimmed()
        );
    }

    println!();
    println!("  {}", result.chosen_dialogue.bold());
    println!();
}

fn colorize_category(category: Category) -> ColoredString {
    match category {
        Category::High => category.as_str().red().bold(),
        Category::Medium => category.as_str().yellow(),
        Category::Low => category.as_str().green(),
    }
}

/// Truncate to `max_chars` characters on a char boundary, appending "..."
/// when something was cut. Byte slicing would panic mid-way through a
/// Malayalam cluster.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_char_safe() {
        let text = "ബോംബ് കണ്ടെത്തി";
        let short = preview(text, 5);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 8);
    }

    #[test]
    fn preview_keeps_short_text_unchanged() {
        assert_eq!(preview("short", 80), "short");
    }
}
