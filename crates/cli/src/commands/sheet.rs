use anyhow::{Context, Result};
use clarify_client::SheetsClient;
use clarify_core::constants::KEYSTORE_API_KEY;
use clarify_keystore::Keystore;
use clarify_session::SheetSession;

use super::prompt_line;

/// Interactive spreadsheet chat loop.
///
/// Key resolution order: `--api-key` flag, then the keystore, then
/// `CLARIFY_API_KEY`. The first key that survives a successful configure is
/// written through to the keystore for later runs.
pub async fn run(sheet_id: &str, api_key: Option<String>) -> Result<()> {
    let mut keystore = Keystore::open_default()?;
    let (key, from_flag_or_env) = resolve_key(api_key, &keystore)?;

    let client = SheetsClient::from_env()?;
    let mut session = SheetSession::new(client);
    session.configure(sheet_id, &key).await?;
    println!("sheet accessible, ask away (/quit to exit)");

    if from_flag_or_env {
        if let Err(e) = keystore.set(KEYSTORE_API_KEY, &key) {
            tracing::warn!(error = %e, "could not cache api key");
        }
    }

    loop {
        let Some(line) = prompt_line("you> ") else { break };
        match line.trim() {
            "" => {},
            "/quit" => break,
            question => match session.ask(question).await {
                Ok(answer) => println!("assistant> {answer}"),
                Err(e) => eprintln!("error: {}", e.display_message()),
            },
        }
    }

    Ok(())
}

/// Returns the key and whether it came from outside the keystore (and so is
/// worth caching after a successful configure).
fn resolve_key(flag: Option<String>, keystore: &Keystore) -> Result<(String, bool)> {
    if let Some(key) = flag {
        return Ok((key, true));
    }
    if let Some(key) = keystore.get(KEYSTORE_API_KEY) {
        return Ok((key.to_owned(), false));
    }
    let key = std::env::var("CLARIFY_API_KEY")
        .context("no api key: pass --api-key or set CLARIFY_API_KEY")?;
    Ok((key, true))
}
