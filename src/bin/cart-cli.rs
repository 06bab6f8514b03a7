use clap::{Parser, Subcommand};
use reqwest::{redirect::Policy, StatusCode};
use serde_json::Value;
use url::Url;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(about = "Command-line client for the cart server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the items in the cart
    Show,
    /// Add a new item
    Add,
    /// Set the comment of the item at a position
    Comment {
        position: i64,
        text: String,
        /// Only apply if this identifier is still at the position
        #[arg(long)]
        item_id: Option<String>,
    },
    /// Delete the item at a position
    Delete {
        position: i64,
        /// Only apply if this identifier is still at the position
        #[arg(long)]
        item_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let base = Url::parse(&cli.url)?;
    let client = reqwest::Client::builder().redirect(Policy::none()).build()?;

    match cli.command {
        Commands::Show => {
            let res = client.get(base.join("/api/items")?).send().await?;
            if !res.status().is_success() {
                eprintln!("Error: cart server returned status {}", res.status());
                return Ok(());
            }
            let json: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Commands::Add => {
            let res = client.get(base.join("/api/add")?).send().await?;
            report(res.status());
        }
        Commands::Comment {
            position,
            text,
            item_id,
        } => {
            let mut form = vec![
                ("itemnumber", position.to_string()),
                ("comment", text),
            ];
            form.extend(item_id.map(|id| ("itemid", id)));
            let res = client
                .post(base.join("/api/updatecomment")?)
                .form(&form)
                .send()
                .await?;
            report(res.status());
        }
        Commands::Delete { position, item_id } => {
            let mut form = vec![("itemnumber", position.to_string())];
            form.extend(item_id.map(|id| ("itemid", id)));
            let res = client
                .post(base.join("/api/delete")?)
                .form(&form)
                .send()
                .await?;
            report(res.status());
        }
    }

    Ok(())
}

fn report(status: StatusCode) {
    match status {
        StatusCode::SEE_OTHER => println!("ok"),
        StatusCode::BAD_REQUEST => eprintln!("rejected: the server refused the request"),
        other => eprintln!("Error: cart server returned status {}", other),
    }
}
