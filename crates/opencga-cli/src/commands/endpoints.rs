//! `opencga endpoints` command implementation
//!
//! Lists the registered categories, or the endpoints of one category.

use crate::error::Result;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use opencga_client::endpoint::{BodyKind, Category, Endpoint};
use opencga_client::resources::{self, CATEGORIES};

/// Print categories, or the endpoints of `category` when given
pub async fn run(category: Option<&str>) -> Result<()> {
    match category {
        Some(name) => {
            let category = resources::category(name)?;
            println!("{}", category_table(category));
        },
        None => {
            println!("{}", "OpenCGA categories:".cyan().bold());
            println!("{}", categories_table(CATEGORIES));
            println!();
            println!("Run 'opencga endpoints <CATEGORY>' to list its endpoints.");
        },
    }

    Ok(())
}

fn categories_table(categories: &[&Category]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Key", "Path", "Endpoints", "Description"]);

    for category in categories {
        table.add_row(vec![
            category.key.to_string(),
            category.path.to_string(),
            category.endpoints.len().to_string(),
            category.title.to_string(),
        ]);
    }

    table
}

fn category_table(category: &Category) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Endpoint", "Method", "Path", "Arguments", "Body", "Description"]);

    for endpoint in category.endpoints {
        table.add_row(vec![
            endpoint.name.to_string(),
            endpoint.method.to_string(),
            endpoint.template(category.path),
            argument_list(endpoint),
            body_label(endpoint.body).to_string(),
            endpoint.description.to_string(),
        ]);
    }

    table
}

fn argument_list(endpoint: &Endpoint) -> String {
    endpoint.arguments().collect::<Vec<_>>().join(", ")
}

fn body_label(body: BodyKind) -> &'static str {
    match body {
        BodyKind::None => "",
        BodyKind::Optional => "optional",
        BodyKind::Required => "required",
    }
}
