//! `graphflow` binary: runs the demo workflows from the command line.

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use graphflow::{InMemorySessionStore, Message, SessionStore};
use graphflow_cli::demos::END_KEYWORDS;
use graphflow_cli::{
    basic_graph, build_llm, chat_graph, pipeline_graph, print_conversation, route_graph,
};

#[derive(Parser)]
#[command(name = "graphflow", about = "Conversational workflow demos", version)]
struct Cli {
    /// Use the echoing mock model even when an API key is configured.
    #[arg(long, global = true)]
    mock: bool,

    /// Model name passed to the real client.
    #[arg(long, global = true, default_value = "gpt-4o-mini")]
    model: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// One model turn: agent answers the message and the graph ends.
    Basic { message: String },
    /// Linear pipeline: init → greet → respond → summarize.
    Pipeline { message: String },
    /// Keyword intent routing to one of four handlers.
    Route { message: String },
    /// Interactive chat loop bounded by a turn counter.
    Chat {
        /// Conversation ends once this many user turns have been answered.
        #[arg(long, default_value_t = 10)]
        max_turns: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Basic { message } => {
            let graph = basic_graph(build_llm(cli.mock, &cli.model))?;
            let mut state = graph.initial_state();
            state.push_message(Message::human(message));
            print_conversation(&graph.invoke(state).await?);
        }
        Command::Pipeline { message } => {
            let graph = pipeline_graph()?;
            let mut state = graph.initial_state();
            state.push_message(Message::human(message));
            let state = graph.invoke(state).await?;
            print_conversation(&state);
            if let Some(summary) = state.get("summary") {
                println!("[Summary] {}", summary);
            }
        }
        Command::Route { message } => {
            let graph = route_graph()?;
            let mut state = graph.initial_state();
            state.push_message(Message::human(message));
            let state = graph.invoke(state).await?;
            print_conversation(&state);
            if let Some(intent) = state.get_str("next_step") {
                println!("[Intent] {}", intent);
            }
        }
        Command::Chat { max_turns } => {
            let graph = chat_graph(build_llm(cli.mock, &cli.model), max_turns)?;
            let store = InMemorySessionStore::new(graph.initial_state().schema().clone());
            println!(
                "Chat started (up to {} turns). Say one of {:?} to finish.",
                max_turns, END_KEYWORDS
            );

            let stdin = io::stdin();
            loop {
                print!("> ");
                io::stdout().flush()?;
                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }

                let mut state = store.get_or_create("cli").await;
                state.push_message(Message::human(text));
                let state = graph.invoke(state).await?;

                let messages = state.messages();
                if let Some(reply) = messages
                    .iter()
                    .rev()
                    .find(|m| matches!(m, Message::Assistant { .. }))
                {
                    println!("{}", reply.content());
                }

                let done = state.get_bool("should_end").unwrap_or(false);
                store.put("cli", state).await;
                if done {
                    break;
                }
            }
        }
    }

    Ok(())
}
