use clap::{Parser, Subcommand};
use phone_catalog::catalog::CellPhone;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "phones-cli")]
#[command(about = "Command-line client for the phone catalog service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:4000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Show the server's current UTC time
    Utc,
    /// List every phone in the catalog
    List,
    /// Fetch one phone by id
    Get { id: u64 },
    /// List phones from one manufacturer
    Make { make: String },
    /// List phones running one operating system
    Os { os: String },
    /// Submit a new phone record
    Create {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        os: String,
        #[arg(long)]
        release_date: String,
        #[arg(long)]
        image: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
        Commands::Utc => client.get(format!("{}/utc", base)).send().await?,
        Commands::List => client.get(format!("{}/api/phones", base)).send().await?,
        Commands::Get { id } => client.get(format!("{}/api/phones/{}", base, id)).send().await?,
        Commands::Make { make } => {
            client.get(format!("{}/api/phones/make/{}", base, make)).send().await?
        }
        Commands::Os { os } => client.get(format!("{}/api/phones/os/{}", base, os)).send().await?,
        Commands::Create {
            id,
            make,
            model,
            os,
            release_date,
            image,
        } => {
            let phone = CellPhone {
                id,
                make,
                model,
                os,
                release_date,
                image,
            };
            client
                .post(format!("{}/api/phones", base))
                .json(&phone)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let is_json = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if is_json {
        let json: Value = res.json().await?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", res.text().await?);
    }
    Ok(())
}
