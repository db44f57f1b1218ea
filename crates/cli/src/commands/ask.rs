use anyhow::Result;
use clarify_client::DocsClient;

/// One-shot agent-search question, for scripting.
pub async fn run(question: &str) -> Result<()> {
    let client = DocsClient::from_env()?;
    let answer = client.agent_search(question).await?;
    println!("{answer}");
    Ok(())
}
