use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

mod commands;

use commands::{Args, Commands};
use people::{IdGenerator, Person, PersonError};

const SAMPLE_PEOPLE: [(&str, &str); 2] = [("Emma", "1996-09-26"), ("Storm", "1993-03-26")];

fn describe_age(person: &Person) -> Result<String> {
    match person.age() {
        Ok(days) => Ok(format!("age: {} days", days)),
        Err(PersonError::MissingBirth { .. }) => Ok("age: unknown".to_string()),
        Err(e) => Err(e).context("Could not compute age"),
    }
}

// Only a missing .env is tolerated, RUST_LOG may come from the environment instead
fn check_env_file(loaded: Result<PathBuf, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env"),
    }
}

fn show(ids: &IdGenerator, name: &str, birth: Option<&str>) -> Result<()> {
    tracing::info!("Creating person {}", name);

    let person = Person::new(ids, name, birth).context("Could not create person")?;
    println!("{}", person);
    println!("{}", describe_age(&person)?);

    Ok(())
}

fn demo(ids: &IdGenerator) -> Result<()> {
    tracing::info!("Creating sample people");

    for (name, birth) in SAMPLE_PEOPLE {
        let person = Person::new(ids, name, Some(birth))
            .with_context(|| format!("Could not create sample person {}", name))?;
        println!("{} - {}", person, describe_age(&person)?);
    }

    tracing::info!("Created {} people", ids.count());

    Ok(())
}

fn main() -> Result<()> {
    check_env_file(dotenvy::dotenv())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let ids = IdGenerator::new();

    let cli = Args::parse();
    match cli.command {
        Some(Commands::Show { name, birth }) => show(&ids, &name, birth.as_deref())?,
        Some(Commands::Demo) => demo(&ids)?,
        None => {
            println!("Run with --help to see instructions");
        }
    }

    Ok(())
}
