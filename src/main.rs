use std::path::PathBuf;
use std::process::ExitCode;

use bookrec_client::models::BookForm;
use bookrec_client::token::{decode_claims, TOKEN_KEY};
use bookrec_client::{
    views, ApiClient, Browser, ClientConfig, ClientError, FileStorage, LocalStorage, Outcome,
    TerminalUi,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;

#[derive(Parser)]
#[command(name = "bookrec")]
#[command(about = "Book catalog and recommendation client", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend origin (overrides BOOKREC_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session storage file (overrides BOOKREC_STORAGE)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login { username: String, password: String },

    /// Forget the stored session token
    Logout,

    /// Look up a book by id
    Book { id: String },

    /// Ask for recommendations; exactly three distinct genres
    Recommend {
        #[arg(short = 'g', long = "genre", required = true)]
        genres: Vec<String>,
    },

    /// Add a book (admin)
    AddBook {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        rating: String,
    },

    /// Delete a book by id (admin)
    DeleteBook { id: String },

    /// Show what the stored token says about the session
    Session,
}

#[actix_rt::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Failure) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            eprintln!("bookrec: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome, ClientError> {
    let mut config = ClientConfig::load()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url)?;
    }
    if let Some(path) = cli.storage {
        config = config.with_storage_path(path);
    }

    let storage = FileStorage::open(&config.storage_path)?;
    let api = ApiClient::new(config.api_url.clone())?;
    let mut browser = Browser::new(api, storage, TerminalUi);

    let outcome = match cli.command {
        Commands::Login { username, password } => {
            views::login::submit(&mut browser, &username, &password).await
        }
        Commands::Logout => views::logout(&mut browser),
        Commands::Book { id } => views::user::search_book(&mut browser, &id).await,
        Commands::Recommend { genres } => {
            views::user::request_recommendations(&mut browser, genres).await
        }
        Commands::AddBook {
            title,
            author,
            genre,
            rating,
        } => {
            let form = BookForm {
                title,
                author,
                genre,
                rating,
            };
            views::admin::add_book(&mut browser, form).await
        }
        Commands::DeleteBook { id } => views::admin::delete_book(&mut browser, &id).await,
        Commands::Session => print_session(&browser.storage)?,
    };
    Ok(outcome)
}

fn print_session(storage: &FileStorage) -> Result<Outcome, ClientError> {
    let Some(token) = storage.get_item(TOKEN_KEY) else {
        println!("not logged in ({})", storage.path().display());
        return Ok(Outcome::Failure);
    };
    let claims = decode_claims(&token)?;
    println!("subject: {}", claims.sub.as_deref().unwrap_or("-"));
    println!("role:    {}", claims.role_name().unwrap_or("-"));
    if let Some(iat) = claims.issued_at() {
        println!("issued:  {}", iat.to_rfc3339());
    }
    if let Some(exp) = claims.expires_at() {
        println!("expires: {}", exp.to_rfc3339());
    }
    Ok(Outcome::Success)
}
