use std::io;
use std::process::ExitCode;
use tracing::{error, info};

use bucket_lifecycle::{
    client_for, client_region, clock, run_lifecycle, Result, Session, BUCKET_NAME, REGION,
};


async fn run() -> Result<()> {
    let now = clock::current_timestamp();
    println!("{}", clock::formatted_datetime(&now));
    println!("{}", clock::formatted_date(&now));
    println!("{}", clock::formatted_time(&now));

    let session = Session::from_default_chain(REGION).await?;
    println!("{}", session.region());
    let access_key_id = session.access_key_id().await?;
    info!(access_key_id = %access_key_id, "Credentials resolved");

    let client = client_for(&session);
    println!("{}", client_region(&client).unwrap_or("<no region>"));

    let mut stdout = io::stdout().lock();
    run_lifecycle(&client, BUCKET_NAME, &mut stdout).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Bucket lifecycle aborted");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
