use std::io::IsTerminal;
use chrono::{Duration, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{Width, terminal_size};

use crate::overview::{DistressSummary, OverviewView, RankedLead};
use crate::scoring::{DistressBand, DistressDriver, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a band label, colored by severity (HIGH red, MEDIUM yellow, LOW green)
pub fn format_band(band: DistressBand, use_colors: bool) -> String {
    let label = format!("{:<6}", band.as_str());
    if !use_colors {
        return label;
    }
    match band {
        DistressBand::High => label.red().bold().to_string(),
        DistressBand::Medium => label.yellow().to_string(),
        DistressBand::Low => label.green().to_string(),
    }
}

/// Format drivers as an indented list, one per line
/// Format: "  +15  Rating: Poor (Condition)"
pub fn format_drivers(drivers: &[DistressDriver], use_colors: bool) -> String {
    if drivers.is_empty() {
        return "  (no contributing signals)".to_string();
    }

    drivers
        .iter()
        .map(|d| {
            let points = format!("+{:<3}", d.points);
            if use_colors {
                format!("  {}  {} ({})", points.bold(), d.signal, d.category.dimmed())
            } else {
                format!("  {}  {} ({})", points, d.signal, d.category)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a full score result with per-category breakdown
pub fn format_score_result(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Distress: {}/100 {}",
        result.score,
        format_band(result.band, use_colors).trim_end()
    ));
    lines.push(String::new());
    lines.push("Categories:".to_string());
    for c in &result.breakdown.categories {
        let clamped = if c.raw > c.capped {
            format!(" (raw {})", c.raw)
        } else {
            String::new()
        };
        lines.push(format!(
            "  {:<17}{:>3}/{:<3}{}",
            c.category.label(),
            c.capped,
            c.category.cap(),
            clamped
        ));
    }
    lines.push(String::new());
    lines.push("Top drivers:".to_string());
    lines.push(format_drivers(&result.drivers, use_colors));

    lines.join("\n")
}

/// Format a cached score summary
pub fn format_summary(property_id: u64, summary: &DistressSummary, use_colors: bool) -> String {
    format!(
        "Property {}: {}/100 {}\n{}",
        property_id,
        summary.score,
        format_band(summary.band, use_colors).trim_end(),
        format_drivers(&summary.drivers, use_colors)
    )
}

/// Format an overview: set fields, then the score
pub fn format_overview(view: &OverviewView, use_colors: bool) -> String {
    let mut lines = vec![format!(
        "Property {} (updated {} ago)",
        view.property_id,
        format_age(Utc::now() - view.updated_at)
    )];
    lines.extend(format_fields(&view.record));

    let drivers: Vec<DistressDriver> =
        serde_json::from_str(&view.distress_drivers).unwrap_or_default();
    lines.push(String::new());
    lines.push(format!(
        "Distress: {}/100 {}",
        view.distress_score,
        format_band(view.distress_band, use_colors).trim_end()
    ));
    lines.push(format_drivers(&drivers, use_colors));

    lines.join("\n")
}

/// Render each non-null field of a record as "  key: value"
pub fn format_fields<T: Serialize>(record: &T) -> Vec<String> {
    let value = match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => return Vec::new(),
    };

    value
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(key, v)| match v {
            serde_json::Value::String(s) => format!("  {}: {}", key, s),
            other => format!("  {}: {}", key, other),
        })
        .collect()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn driver_summary(lead: &RankedLead) -> String {
    match lead.top_driver {
        Some(ref d) => format!("{} (+{})", d.signal, d.points),
        None => "-".to_string(),
    }
}

/// Format ranked leads as a table with columns: Index, Score, Band, Property, Age, Top driver
/// No headers (minimal format)
pub fn format_ranked_table(leads: &[RankedLead], use_colors: bool) -> String {
    if leads.is_empty() {
        return "No leads found.".to_string();
    }

    let term_width = get_terminal_width();

    // Index 3 + score 3 + band 6 + id 8 + age 4, plus separators
    let fixed_width = 3 + 1 + 3 + 2 + 6 + 2 + 8 + 2 + 4 + 2;
    let separator = "  ";

    leads
        .iter()
        .enumerate()
        .map(|(idx, lead)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>3}", lead.score);
            let id_str = format!("#{:<7}", lead.property_id);
            let age_str = format!("{:>4}", format_age(Utc::now() - lead.updated_at));
            let driver = driver_summary(lead);

            let driver = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_text(&driver, width - fixed_width),
                Some(_) => truncate_text(&driver, 20),
                None => driver,
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    format_band(lead.band, true),
                    separator,
                    id_str.cyan(),
                    separator,
                    age_str.dimmed(),
                    separator,
                    driver
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str,
                    score_str,
                    separator,
                    format_band(lead.band, false),
                    separator,
                    id_str,
                    separator,
                    age_str,
                    separator,
                    driver
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked leads as tab-separated values for scripting
/// Columns: score, band, property_id, top driver (no headers, no colors)
pub fn format_tsv(leads: &[RankedLead]) -> String {
    leads
        .iter()
        .map(|lead| {
            let driver = lead
                .top_driver
                .as_ref()
                .map(|d| d.signal.as_str())
                .unwrap_or("");
            format!("{}\t{}\t{}\t{}", lead.score, lead.band, lead.property_id, driver)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overview::SignalRecord;
    use crate::scoring::{calculate_distress_score, Category};

    fn sample_lead(property_id: u64, score: u32, band: DistressBand) -> RankedLead {
        RankedLead {
            property_id,
            score,
            band,
            top_driver: Some(DistressDriver {
                signal: "Squatter Occupied".to_string(),
                points: 15,
                category: Category::Occupancy,
            }),
            updated_at: Utc::now() - Duration::hours(5),
        }
    }

    #[test]
    fn test_format_band_plain() {
        assert_eq!(format_band(DistressBand::High, false), "HIGH  ");
        assert_eq!(format_band(DistressBand::Medium, false), "MEDIUM");
    }

    #[test]
    fn test_format_drivers_empty() {
        assert_eq!(format_drivers(&[], false), "  (no contributing signals)");
    }

    #[test]
    fn test_format_score_result() {
        let record = SignalRecord {
            condition_rating: Some("Poor".to_string()),
            condition_tags: Some(r#"["Condemned"]"#.to_string()),
            ..Default::default()
        };
        let result = calculate_distress_score(&record);
        let output = format_score_result(&result, false);

        assert!(output.contains("Distress: 25/100 LOW"));
        assert!(output.contains("Condition         25/25  (raw 30)"));
        assert!(output.contains("+15   Rating: Poor (Condition)"));
        assert!(output.contains("+15   Condemned (Condition)"));
    }

    #[test]
    fn test_format_ranked_table_empty() {
        assert_eq!(format_ranked_table(&[], false), "No leads found.");
    }

    #[test]
    fn test_format_ranked_table_row() {
        let leads = vec![sample_lead(42, 61, DistressBand::High)];
        let output = format_ranked_table(&leads, false);
        assert!(output.starts_with(" 1.  61  HIGH"));
        assert!(output.contains("#42"));
        assert!(output.contains("5h"));
        assert!(output.contains("Squatter Occupied"));
    }

    #[test]
    fn test_format_tsv() {
        let leads = vec![
            sample_lead(1, 61, DistressBand::High),
            sample_lead(2, 30, DistressBand::Medium),
        ];
        let output = format_tsv(&leads);
        assert_eq!(
            output,
            "61\tHIGH\t1\tSquatter Occupied\n30\tMEDIUM\t2\tSquatter Occupied"
        );
    }

    #[test]
    fn test_format_fields_skips_null() {
        let record = SignalRecord {
            occupancy: Some("Vacant".to_string()),
            probate: Some(1),
            ..Default::default()
        };
        let lines = format_fields(&record);
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&"  occupancy: Vacant".to_string()));
        assert!(lines.contains(&"  probate: 1".to_string()));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer driver name", 10), "a longe...");
        assert_eq!(truncate_text("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_age_hours() {
        assert_eq!(format_age(Duration::hours(3)), "3h");
    }

    #[test]
    fn test_format_age_days() {
        assert_eq!(format_age(Duration::days(2)), "2d");
    }

    #[test]
    fn test_format_age_weeks() {
        assert_eq!(format_age(Duration::weeks(2)), "2w");
    }

    #[test]
    fn test_format_age_now() {
        assert_eq!(format_age(Duration::seconds(30)), "now");
    }
}
