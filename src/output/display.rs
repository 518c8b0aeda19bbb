//! Display functions for command results

use super::formatters::{create_progress_bar, format_progress_row, render_outline};
use crate::commands::{AnalysisResult, StrategyReport, StrategyStatistics};
use crate::core::GameConfig;
use crate::solver::SolveTrace;
use colored::Colorize;

/// Print every row of one finished game, followed by a blank line
pub fn print_progress(trace: &SolveTrace) {
    println!("Solution: {}", trace.secret());
    for row in trace.rows() {
        println!("{}", format_progress_row(row));
    }
    println!();
}

/// Print the full strategy outline and a summary
pub fn print_strategy_report(report: &StrategyReport, config: &GameConfig) {
    print!("{}", render_outline(&report.tree));

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("   Variant:          {config}");
    println!("   Codes solved:     {}", report.games);
    println!("   Tree nodes:       {}", report.tree.node_count());
    println!(
        "   Worst case:       {}",
        format!("{} guesses", report.max_guesses).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
}

/// Print the result of solving a code
pub fn print_solve_result(trace: &SolveTrace, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        trace.secret().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for row in trace.rows() {
        println!(
            "\nTurn {}: {} {}",
            row.row,
            row.guess,
            row.feedback.to_string().bright_white()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                row.candidates_before, row.candidates_after
            );
        }
    }

    println!();
    if trace.is_solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", trace.guess_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", trace.guess_count())
                .red()
                .bold()
        );
    }
}

/// Print how a guess partitions the code universe
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    for (feedback, count) in &result.partition {
        let bar = create_progress_bar(*count, result.worst_case, 30);
        let line = format!("   {feedback}  [{bar}] {count:5}");
        if *count == result.worst_case {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.green());
        }
    }

    println!(
        "\n   Worst case:  {}",
        format!("{} codes remain", result.worst_case).bright_yellow()
    );
    println!("   Outcomes:    {}", result.partition.len());
    if result.is_opening {
        println!("   {}", "This is the fixed opening guess".bright_black());
    }
}

/// Print strategy statistics
pub fn print_statistics(stats: &StrategyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Strategy Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes solved:  {}", stats.total_codes);
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Best case:           {}", stats.min_guesses);
    println!(
        "  Worst case:          {}",
        format!("{}", stats.max_guesses).yellow()
    );
    println!("  Tree nodes:          {}", stats.node_count);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().max().copied().unwrap_or(0);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.total_codes as f64 * 100.0;
        let bar = create_progress_bar(count, max_count, 40);
        println!(
            "  {guesses} guesses: {} {count:4} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.hardest_codes.iter().take(5) {
            println!("  {} ({} guesses)", code.yellow(), guesses);
        }
    }
}
