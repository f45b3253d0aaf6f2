use comfy_table::{ContentArrangement, Table};

use crate::scenarios;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Scenario", "Description"]);

    for bundled in scenarios::ALL {
        table.add_row(vec![bundled.name, bundled.description]);
    }

    println!("{table}");
    Ok(())
}
