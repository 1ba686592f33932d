//! The `quizdrill init` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizdrill_store::{Catalog, JsonFileStore};

pub async fn execute(store_path: Option<PathBuf>) -> Result<()> {
    let store_path = store_path.unwrap_or_else(|| PathBuf::from("quizzes.json"));

    // Create quizdrill.toml
    if Path::new("quizdrill.toml").exists() {
        println!("quizdrill.toml already exists, skipping.");
    } else {
        std::fs::write("quizdrill.toml", sample_config(&store_path))?;
        println!("Created quizdrill.toml");
    }

    // Create the starter store
    let store = JsonFileStore::new(&store_path);
    if store.initialize(&Catalog::starter()).await? {
        println!("Created {}", store_path.display());
    } else {
        println!("{} already exists, skipping.", store_path.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: quizdrill list");
    println!("  2. Run: quizdrill add");
    println!("  3. Run: quizdrill play");

    Ok(())
}

fn sample_config(store_path: &Path) -> String {
    format!(
        r#"# quizdrill configuration

store_path = "{}"

# Fix the question order (omit for a fresh order every game)
# rng_seed = 42

prompt = "quizdrill> "
"#,
        store_path.display().to_string().replace('\\', "\\\\")
    )
}
