/**
 * Superuser Provisioning Tool
 *
 * Interactive command-line tool that creates a superuser account, or
 * promotes an existing account to superuser. Run it once against a fresh
 * database to bootstrap an administrator:
 *
 * ```text
 * DATABASE_URL=postgres://... cargo run --bin create-superuser
 * ```
 */

use std::io::{self, BufRead, Write};

use sqlx::PgPool;
use tasktrack::auth::users::{create_user, get_user_by_email, promote_to_superuser};
use tasktrack::server::config::AppConfig;

/// Prompt on stdout and read one trimmed line from stdin
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env()?;
    let pool = PgPool::connect(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let email = prompt("Enter superuser email: ")?;
    if email.is_empty() {
        eprintln!("Email must not be empty.");
        std::process::exit(1);
    }

    match get_user_by_email(&pool, &email).await? {
        Some(user) if user.is_superuser => {
            println!("User {email} is already a superuser.");
        }
        Some(user) => {
            let confirm = prompt("User exists. Promote to superuser? (y/n): ")?;
            if confirm.eq_ignore_ascii_case("y") {
                promote_to_superuser(&pool, user.id)
                    .await?
                    .ok_or("user disappeared during promotion")?;
                println!("User {email} promoted to superuser.");
            } else {
                println!("Aborted.");
            }
        }
        None => {
            let password = prompt("Enter superuser password: ")?;
            if password.is_empty() {
                eprintln!("Password must not be empty.");
                std::process::exit(1);
            }
            let user = create_user(&pool, &email, &password).await?;
            promote_to_superuser(&pool, user.id)
                .await?
                .ok_or("user disappeared during promotion")?;
            println!("Superuser {email} created successfully.");
        }
    }

    Ok(())
}
