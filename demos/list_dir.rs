//! List the immediate entries of a directory through the compat facade.
//!
//! ```text
//! cargo run --example list_dir -- /some/dir
//! FS_COMPAT_CAPABILITY=legacy RUST_LOG=trace cargo run --example list_dir -- .
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use fs_compat::CompatError;
use tracing_subscriber::EnvFilter;

fn run(dir: PathBuf) -> Result<(), CompatError> {
    println!("capability level: {}", fs_compat::capability_level());

    if !fs_compat::has_entries(&dir)? {
        println!("{} has no entries", dir.display());
        return Ok(());
    }

    fs_compat::with_directory_content(&dir, |session| {
        println!("{}:", session.directory().display());
        while session.has_next()? {
            let entry = session.next_entry()?;
            let kind = format!("{:?}", entry.file_type);
            println!("  {kind:<10} {}", entry.name);
        }
        Ok(())
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    match run(dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_expected() => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            tracing::error!(%err, "listing failed");
            ExitCode::FAILURE
        }
    }
}
