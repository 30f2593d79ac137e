//! Build automation tasks for the OpenCGA client
//!
//! - Generating the CLI reference from the clap definitions
//! - Generating the endpoint reference from the endpoint tables

use clap::Parser;
use opencga_client::endpoint::{BodyKind, Category};
use opencga_client::resources::CATEGORIES;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for the OpenCGA client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI and endpoint reference in Markdown
    GenerateDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateDocs { output_dir } => {
            let output_path = PathBuf::from(output_dir);
            fs::create_dir_all(&output_path)?;

            generate_cli_docs(&output_path)?;
            generate_endpoint_docs(&output_path)?;

            println!();
            println!("To update, run `cargo xtask generate-docs` and commit the result.");
        },
    }

    Ok(())
}

fn generate_cli_docs(output_path: &Path) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<opencga_cli::Cli>();

    let content = format!(
        r#"# OpenCGA CLI Reference

This documentation is auto-generated from the CLI source code. Last updated: {}.

## Quick Start

```bash
# List categories, then the endpoints of one
opencga endpoints
opencga endpoints clinical

# Preview a request without sending it
opencga call alignment run_stats --arg file=HG00096.bam --param study=user@1000g:phase1 --dry-run

# Send it
export OPENCGA_HOST=https://ws.example.org/opencga
export OPENCGA_TOKEN=...
opencga call families info --arg families=FAM1,FAM2 --param study=user@1000g:phase1
```

## Commands

{}

## Environment Variables

- `OPENCGA_HOST` - Server host including the context path (default: `http://localhost:8080/opencga`)
- `OPENCGA_API_VERSION` - REST API version (default: `v2`)
- `OPENCGA_TOKEN` - Authentication token
- `OPENCGA_TIMEOUT_SECS` - Request timeout in seconds (default: `90`)
- `OPENCGA_CONFIG` - YAML or JSON configuration file
- `LOG_LEVEL`, `LOG_FORMAT`, `LOG_OUTPUT`, `LOG_DIR`, `LOG_FILTER` - Logging

---

*Generated by `cargo xtask generate-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;
    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}

fn generate_endpoint_docs(output_path: &Path) -> anyhow::Result<()> {
    println!("Generating endpoint documentation...");

    let mut content = String::from(
        "# OpenCGA Endpoint Reference\n\n\
         Paths are relative to `{host}/webservices/rest/{version}`.\n",
    );

    for category in CATEGORIES {
        content.push_str(&category_section(category)?);
    }

    let file_path = output_path.join("endpoints.md");
    fs::write(&file_path, content)?;
    println!("✅ Generated endpoint documentation at: {}", file_path.display());

    Ok(())
}

fn category_section(category: &Category) -> anyhow::Result<String> {
    let mut section = String::new();

    writeln!(section)?;
    writeln!(section, "## {} (`{}`)", category.title, category.key)?;
    writeln!(section)?;
    writeln!(section, "| Endpoint | Method | Path | Arguments | Body | Description |")?;
    writeln!(section, "|---|---|---|---|---|---|")?;

    for endpoint in category.endpoints {
        let arguments: Vec<_> = endpoint.arguments().map(|a| format!("`{}`", a)).collect();
        let body = match endpoint.body {
            BodyKind::None => "",
            BodyKind::Optional => "optional",
            BodyKind::Required => "required",
        };

        writeln!(
            section,
            "| `{}` | {} | `{}` | {} | {} | {} |",
            endpoint.name,
            endpoint.method,
            endpoint.template(category.path),
            arguments.join(", "),
            body,
            endpoint.description
        )?;
    }

    Ok(section)
}
