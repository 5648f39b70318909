mod config;
mod error;
mod prompt;
mod render;
mod session;

use headache_core::questions::verify_rule_base;
use headache_core::{shipped_engine, AnswerSet};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use prompt::Outcome;
use session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the questionnaire and the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting headache-guide");

    // 1. Load config from environment
    let config = Config::from_env()?;
    info!(
        batch = config.answers_path.is_some(),
        output = ?config.output,
        delay_ms = config.analysis_delay.as_millis() as u64,
        "configuration loaded"
    );

    // 2. Build the engine and check the rules against the question catalogue
    let engine = shipped_engine()?;
    verify_rule_base(engine.rules())?;
    info!(rules = engine.rules().len(), "rule base verified");

    let mut stdout = tokio::io::stdout();

    // 3. Diagnose a prepared answers file, or run the questionnaire
    let result = match &config.answers_path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await?;
            let answers = AnswerSet::from_json_str(&content)?;
            info!(path = %path.display(), answers = answers.len(), "answers loaded");
            engine.diagnose(&answers)
        }
        None => {
            let mut session = Session::new();
            let input = BufReader::new(tokio::io::stdin());
            match prompt::run(&mut session, input, &mut stdout).await? {
                Outcome::Quit => {
                    info!(
                        session = %session.id(),
                        answers = session.answers().len(),
                        "questionnaire abandoned"
                    );
                    return Ok(());
                }
                Outcome::Finished => {
                    info!(
                        session = %session.id(),
                        answers = session.answers().len(),
                        "questionnaire finished"
                    );
                    stdout.write_all(b"\nAnalyzing your answers...\n").await?;
                    stdout.flush().await?;
                    session
                        .complete(engine, config.analysis_delay)
                        .await
                        .clone()
                }
            }
        }
    };

    // 4. Render
    let rendered = render::render(&result, config.output)?;
    stdout.write_all(rendered.as_bytes()).await?;
    stdout.flush().await?;

    info!(
        primary = %result.primary_cause,
        emergency = result.is_emergency(),
        "result rendered"
    );
    Ok(())
}
