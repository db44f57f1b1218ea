use anyhow::Result;
use clarify_client::DocsClient;
use clarify_core::QueryRoute;
use clarify_session::DocsSession;

use super::{print_turns, prompt_line};

/// Interactive documentation chat loop.
///
/// Without `--agent` the document is ingested first and questions go to the
/// configured collection; with it, questions go straight to the agent
/// endpoint and no setup call is made.
pub async fn run(url: Option<String>, collection: Option<String>, agent: bool) -> Result<()> {
    let client = DocsClient::from_env()?;
    let route = if agent { QueryRoute::AgentSearch } else { QueryRoute::Collection };
    let mut session = DocsSession::new(client).with_route(route);

    let setup = if agent {
        None
    } else {
        let (Some(url), Some(collection)) = (url, collection) else {
            anyhow::bail!("--url and --collection are required unless --agent is set");
        };
        let message = session.configure(&url, &collection).await?;
        println!("{message}");
        Some((url, collection))
    };

    println!("Ask away. Commands: /history, /clear, /quit");
    loop {
        let Some(line) = prompt_line("you> ") else { break };
        match line.trim() {
            "" => {},
            "/quit" => break,
            "/history" => match session.sync_history().await {
                Ok(_) => print_turns(session.turns()),
                Err(e) => eprintln!("error: {}", e.display_message()),
            },
            "/clear" => {
                if let Err(e) = session.clear().await {
                    eprintln!("error: {}", e.display_message());
                    continue;
                }
                println!("history cleared");
                // Clearing ends the session; re-establish it so the loop
                // stays usable on the collection route.
                if let Some((url, collection)) = &setup {
                    if let Err(e) = session.configure(url, collection).await {
                        eprintln!("error: {}", e.display_message());
                    }
                }
            },
            question => match session.ask(question).await {
                Ok(answer) => println!("assistant> {answer}"),
                Err(e) => eprintln!("error: {}", e.display_message()),
            },
        }
    }

    Ok(())
}
