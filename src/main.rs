//! boardgen CLI - normalize link fields in the board data file and render
//! the static HTML pages.

use std::env;

use boardgen::{NormalizeLinksHandler, RenderPagesHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: boardgen <command> [options]");
        eprintln!("  normalize <data.json>                  - Normalize all link fields in place (backup kept)");
        eprintln!("  render <data.json> <out_dir> [base]    - Render static HTML pages");
        return Ok(());
    }

    let command = &args[1];
    match command.as_str() {
        "normalize" => {
            let data_path = args.get(2).map(String::as_str).unwrap_or("data.json");
            let handler = NormalizeLinksHandler::new();
            handler.normalize(data_path).await?;
            println!("All links normalized in {data_path}");
        }
        "render" => {
            let data_path = args.get(2).map(String::as_str).unwrap_or("data.json");
            let out_dir = args.get(3).map(String::as_str).unwrap_or(".");
            let base_root = args.get(4).map(String::as_str);
            let handler = RenderPagesHandler::new(base_root);
            handler.render(data_path, out_dir).await?;
            println!("HTML pages generated in {out_dir}");
        }
        _ => {
            eprintln!("Unknown command: {command}");
        }
    }

    Ok(())
}
