//! Card-style terminal output for analysis results.

use clauselens_core::present::{AnalysisCard, DisplayRecord};

pub fn print_record(record: &DisplayRecord) {
    match record {
        DisplayRecord::Analysis(card) => print_card(card),
        DisplayRecord::Error(message) => eprintln!("error: {message}"),
    }
}

fn print_card(card: &AnalysisCard) {
    section("Topic");
    line(&card.topic);
    section("Summary");
    line(&card.summary);
    section("Differences");
    list(&card.differences);
    section("Risk Flags");
    list(&card.risk_flags);
    section("Suggested Neutral Text");
    line(&card.suggested_neutral_text);
    section("Fake Contract Analysis");
    line(&format!("Score: {}", card.fake_contract_score));
    list(&card.fake_contract_signals);
}

fn section(title: &str) {
    println!("\n── {title} ──");
}

fn line(text: &str) {
    println!("  {text}");
}

fn list(items: &[String]) {
    for item in items {
        println!("  • {item}");
    }
}
