use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "contacts-cli")]
#[command(about = "Command-line client for the contacts service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a greeting, optionally personalised
    Hello {
        #[arg(requires = "number")]
        name: Option<String>,
        number: Option<i32>,
    },
    /// List all contacts
    List,
    /// Show one contact
    Get { id: i32 },
    /// Create a contact
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Replace name and email of a contact
    Update {
        id: i32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Delete a contact
    Delete { id: i32 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Hello { name, number } => {
            let path = match (name, number) {
                (Some(name), Some(number)) => format!("/hello/{}/{}", name, number),
                _ => "/hello".to_string(),
            };
            client.get(format!("{}{}", base, path)).send().await?
        }
        Commands::List => client.get(format!("{}/contacts", base)).send().await?,
        Commands::Get { id } => client.get(format!("{}/contacts/{}", base, id)).send().await?,
        Commands::Create { name, email } => {
            client
                .post(format!("{}/contacts", base))
                .json(&json!({ "name": name, "email": email }))
                .send()
                .await?
        }
        Commands::Update { id, name, email } => {
            client
                .put(format!("{}/contacts/{}", base, id))
                .json(&json!({ "name": name, "email": email }))
                .send()
                .await?
        }
        Commands::Delete { id } => {
            client
                .delete(format!("{}/contacts/{}", base, id))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if let Some(location) = res.headers().get(reqwest::header::LOCATION) {
        println!("Location: {}", location.to_str()?);
    }

    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
