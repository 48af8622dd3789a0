use std::env;

use recipe_extract::{import_recipe_with_config, ExtractConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the URL from command-line arguments
    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let config = ExtractConfig::load()?;
    let recipe = import_recipe_with_config(url, &config).await?;

    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
