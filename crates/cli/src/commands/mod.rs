pub mod ask;
pub mod chat;
pub mod portal;
pub mod sheet;

use std::io::{BufRead, Write};

use clarify_core::ConversationTurn;

/// Print a prompt and read one stdin line. `None` on EOF.
pub(crate) fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    std::io::stdout().flush().ok()?;

    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_owned()),
        Err(_) => None,
    }
}

/// Render a turn log the way the pages rendered their message list.
pub(crate) fn print_turns(turns: &[ConversationTurn]) {
    for turn in turns {
        println!("{:>9}: {}", turn.role.as_str(), turn.content);
    }
}
