//! Aggregation and formatting of poll results.
//!
//! # Design
//! Pure functions over an already-fetched [`PollResults`]: derive the total
//! vote count, rank options by votes, and render a multi-line text report.
//! None of these can fail — a poll with no votes yields a "No votes cast
//! yet." report rather than an error, and a zero total never divides.

use crate::types::{OptionTally, PollResults};

/// Sum of all vote counts.
pub fn total_votes(results: &[OptionTally]) -> u64 {
    results.iter().map(|t| t.vote_count).sum()
}

/// Tallies ordered by vote count descending.
///
/// The sort is stable: options with equal counts keep their relative order
/// from the input, so the server's insertion order breaks ties.
pub fn rank_options(results: &[OptionTally]) -> Vec<OptionTally> {
    let mut ranked = results.to_vec();
    ranked.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
    ranked
}

/// Render a human-readable report for one poll.
///
/// Layout: a `Poll #<id>: <question>` header, an `=` underline of the same
/// visible length, a blank line, the total-votes line, then one block per
/// option in ranked order with its 1-based rank, vote count, percentage to
/// one decimal place, and option id.
pub fn format_poll_results(results: &PollResults) -> String {
    let header = format!("Poll #{}: {}", results.poll_id, results.question);
    let mut out = format!("{header}\n{}\n\n", "=".repeat(header.chars().count()));

    if results.results.is_empty() {
        out.push_str("No votes cast yet.\n");
        return out;
    }

    let ranked = rank_options(&results.results);
    let total = total_votes(&ranked);
    out.push_str(&format!("Total votes: {total}\n\n"));

    for (i, tally) in ranked.iter().enumerate() {
        let percentage = if total > 0 {
            tally.vote_count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        out.push_str(&format!("{}. {}\n", i + 1, tally.text));
        out.push_str(&format!(
            "   Votes: {} ({percentage:.1}%)\n",
            tally.vote_count
        ));
        out.push_str(&format!("   Option ID: {}\n\n", tally.option_id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(option_id: i64, text: &str, vote_count: u64) -> OptionTally {
        OptionTally {
            option_id,
            text: text.to_string(),
            vote_count,
        }
    }

    fn results_with(tallies: Vec<OptionTally>) -> PollResults {
        PollResults {
            poll_id: 1,
            question: "Favorite language?".to_string(),
            results: tallies,
        }
    }

    #[test]
    fn empty_results_report_no_votes() {
        let report = format_poll_results(&results_with(Vec::new()));
        assert!(report.starts_with("Poll #1: Favorite language?\n"));
        assert!(report.contains("No votes cast yet.\n"));
        assert!(!report.contains("Total votes"));
    }

    #[test]
    fn underline_matches_header_length() {
        let report = format_poll_results(&results_with(Vec::new()));
        let mut lines = report.lines();
        let header = lines.next().unwrap();
        let underline = lines.next().unwrap();
        assert_eq!(header.chars().count(), underline.chars().count());
        assert!(underline.chars().all(|c| c == '='));
    }

    #[test]
    fn total_matches_sum_of_counts() {
        let tallies = vec![tally(1, "A", 3), tally(2, "B", 1), tally(3, "C", 0)];
        let report = format_poll_results(&results_with(tallies.clone()));
        assert_eq!(total_votes(&tallies), 4);
        assert!(report.contains("Total votes: 4\n"));
    }

    #[test]
    fn percentages_to_one_decimal_place() {
        let report = format_poll_results(&results_with(vec![
            tally(1, "A", 3),
            tally(2, "B", 1),
        ]));
        assert!(report.contains("1. A\n   Votes: 3 (75.0%)\n   Option ID: 1\n"));
        assert!(report.contains("2. B\n   Votes: 1 (25.0%)\n   Option ID: 2\n"));
    }

    #[test]
    fn ranking_is_descending_by_votes() {
        let ranked = rank_options(&[tally(1, "low", 2), tally(2, "high", 9)]);
        assert_eq!(ranked[0].text, "high");
        assert_eq!(ranked[1].text, "low");
    }

    #[test]
    fn ties_preserve_input_order() {
        let ranked = rank_options(&[
            tally(10, "first", 5),
            tally(11, "second", 5),
            tally(12, "third", 2),
        ]);
        let ids: Vec<i64> = ranked.iter().map(|t| t.option_id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn all_zero_counts_render_zero_percent() {
        let report = format_poll_results(&results_with(vec![tally(1, "A", 0)]));
        assert!(report.contains("Total votes: 0\n"));
        assert!(report.contains("Votes: 0 (0.0%)\n"));
    }
}
