//! Scaffold a new portfolio in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing vitrine...");

    let config_path = Path::new("portfolio.toml");
    if config_path.exists() && !yes {
        tracing::warn!("portfolio.toml already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG).context("Failed to write portfolio.toml")?;
    tracing::info!("Created portfolio.toml");

    let assets_dir = Path::new("assets");
    if !assets_dir.exists() {
        fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
        tracing::info!("Created assets/");
    }

    let css_path = assets_dir.join("main.css");
    if !css_path.exists() || yes {
        fs::write(&css_path, DEFAULT_CSS).context("Failed to write assets/main.css")?;
        tracing::info!("Created assets/main.css");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Edit portfolio.toml, then run 'vitrine serve'.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Vitrine Configuration

[site]
# Used in page titles
title = "My Portfolio"

[profile]
name = "Your Name"
tagline = "What you do, in one line"
about = [
    "First paragraph about yourself.",
    "Second paragraph about yourself.",
]
skills = ["Rust", "Python"]

[profile.social]
# github = "https://github.com/you"
# linkedin = "https://linkedin.com/in/you"
# email = "you@example.com"

[server]
host = "127.0.0.1"
port = 4173
# Directory served under /assets
assets_dir = "assets"

# Contact form relay. Leave this section out to disable the form.
# The VITRINE_MAIL_* environment variables override these values.
# [mail]
# service_id = "your_service_id"
# template_id = "your_template_id"
# user_id = "your_public_key"

# A project whose long-form content is fetched as the repository README,
# trying the main branch first, then master.
[[projects]]
title = "Example Project"
description = "A project whose README is fetched from its repository."
technologies = ["Rust", "Tokio"]
# image = "/assets/example.png"
repository = "https://github.com/you/example-project"

# A project with content embedded right here; no network access is made.
[[projects]]
title = "Write-up"
description = "A project with inline long-form content."
technologies = ["Markdown"]
inline_content = """
# Write-up

Replace this with your own markdown.
"""
"#;

const DEFAULT_CSS: &str = r#"body {
  font-family: system-ui, sans-serif;
  max-width: 960px;
  margin: 0 auto;
  padding: 0 1rem;
  color: #e5e7eb;
  background: #0b0b0f;
}

a { color: #60a5fa; }

.hero { padding: 4rem 0 2rem; }
.hero .tagline { color: #9ca3af; }
.social a { margin-right: 1rem; }

.grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 2rem;
}

.card {
  display: block;
  border: 1px solid #1f2937;
  border-radius: 0.75rem;
  padding: 1.5rem;
  text-decoration: none;
  color: inherit;
}
.card img { width: 100%; object-fit: contain; }

.tech, .skills { list-style: none; padding: 0; }
.tech li, .skills li {
  display: inline-block;
  border: 1px solid #1f2937;
  border-radius: 9999px;
  padding: 0.25rem 0.5rem;
  margin: 0 0.5rem 0.5rem 0;
  font-size: 0.75rem;
}

.banner { border-radius: 0.5rem; padding: 0.75rem 1rem; margin-bottom: 1rem; }
.banner-success { background: #064e3b; }
.banner-error { background: #7f1d1d; }

.contact form { display: grid; gap: 0.75rem; max-width: 480px; }
.contact input, .contact textarea {
  background: #111827;
  border: 1px solid #1f2937;
  border-radius: 0.5rem;
  padding: 0.5rem 0.75rem;
  color: inherit;
}

.detail .preview { max-width: 100%; border-radius: 0.75rem; }
.readme pre { background: #111827; padding: 1rem; border-radius: 0.5rem; overflow-x: auto; }
.readme table { border-collapse: collapse; }
.readme td, .readme th { border: 1px solid #1f2937; padding: 0.5rem; }
.not-found { color: #f87171; }
.muted { color: #9ca3af; }
"#;
