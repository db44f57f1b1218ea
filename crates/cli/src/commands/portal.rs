use anyhow::Result;
use clarify_client::PortalClient;

use super::prompt_line;

/// Cookie-authenticated portal chat loop: login, ask, logout on exit.
pub async fn run(password: &str) -> Result<()> {
    let client = PortalClient::from_env()?;
    client.login(password).await?;
    println!("logged in, ask away (/quit to exit)");

    loop {
        let Some(line) = prompt_line("you> ") else { break };
        match line.trim() {
            "" => {},
            "/quit" => break,
            question => match client.process(question).await {
                Ok(answer) => println!("assistant> {answer}"),
                Err(e) => eprintln!("error: {}", e.display_message()),
            },
        }
    }

    if let Err(e) = client.logout().await {
        tracing::warn!(error = %e, "logout failed");
    }
    Ok(())
}
