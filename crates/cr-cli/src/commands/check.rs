use comfy_table::{ContentArrangement, Table};
use cr_engine::TextResolver;

use crate::scenarios;

pub fn run(name: &str) -> Result<(), String> {
    let (definition, _) = scenarios::find(name)?.build()?;
    let scenario = &definition.scenario;

    let mut moves: Vec<_> = scenario.moves().collect();
    moves.sort_by(|a, b| a.id.cmp(&b.id));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Move", "Text", "Ways", "Ending"]);

    for mv in &moves {
        let ways: Vec<String> = mv.ways.iter().map(|w| format!("{} → {}", w.id, w.to)).collect();
        let text = definition.texts.resolve(&mv.text_key, None);
        table.add_row(vec![
            mv.id.to_string(),
            text,
            if ways.is_empty() { "-".to_string() } else { ways.join(", ") },
            if mv.is_end { "yes".to_string() } else { String::new() },
        ]);
    }

    println!("{table}");
    println!();

    let unregistered = definition.unregistered_achievements();
    if !unregistered.is_empty() {
        return Err(format!(
            "scenario '{name}' grants unregistered achievements: {}",
            unregistered.join(", ")
        ));
    }

    let endings = moves.iter().filter(|m| m.is_end).count();
    println!("  All checks passed for '{name}'.");
    println!(
        "  {} moves, {} endings, {} achievements",
        scenario.len(),
        endings,
        definition.achievements.len()
    );
    Ok(())
}
