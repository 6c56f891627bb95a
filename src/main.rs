use chat_oneshot::{report, telemetry, RequestRunner, RunConfig, RunResult};
use reqwest::Client;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {

    dotenvy::dotenv().ok();

    telemetry::init("info");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }

}

async fn run() -> RunResult<()> {

    // fails before any network activity when the key is missing
    let config = RunConfig::from_env()?;

    let runner = RequestRunner::new(Client::new(), config);
    let outcome = runner.run().await?;

    report::render(&outcome, &mut std::io::stdout().lock())?;

    Ok(())

}
