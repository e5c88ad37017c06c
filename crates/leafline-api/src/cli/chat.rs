//! Chat CLI commands: ask, history, clear.

use anyhow::Result;
use comfy_table::{ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use leafline_core::client::intent::{Intent, classify};
use leafline_core::client::search::{ProductSearch, format_product_results};
use leafline_core::client::session::APOLOGY;
use leafline_core::client::translate::Translator;
use leafline_infra::search::HttpProductSearch;
use leafline_infra::translate::MyMemoryTranslator;

use crate::state::AppState;

/// Run one message through the client flow and print the reply.
///
/// Mirrors what the browser widget does: translate into the working
/// language if needed, classify the intent, route to product search or the
/// chat service, translate the reply back. Collaborator failures print the
/// fixed apology and the conversation stays usable.
pub async fn ask(state: &AppState, message: String, lang: Option<String>) -> Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!("message must not be empty");
    }

    let client_config = &state.config.client;
    let working = client_config.working_language.clone();
    let lang = lang.unwrap_or_else(|| working.clone());
    let translator = MyMemoryTranslator::new(client_config.translation_endpoint.clone());

    let outbound = translator.translate(&message, &lang, &working).await;

    let reply = match classify(&outbound) {
        Intent::SearchProduct { query } => {
            let search = HttpProductSearch::new(client_config.search_base_url.clone());
            match search.search(&query).await {
                Ok(hits) => format_product_results(&query, &hits),
                Err(e) => {
                    tracing::error!(error = %e, "product search failed");
                    APOLOGY.to_string()
                }
            }
        }
        Intent::AskQuestion => match state.chat_service.submit_question(&outbound).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "chatbot query failed");
                APOLOGY.to_string()
            }
        },
    };

    let display = translator.translate(&reply, &working, &lang).await;
    println!("{display}");
    Ok(())
}

/// Print the recorded history, oldest first.
pub async fn history(state: &AppState, json: bool) -> Result<()> {
    let records = state.chat_service.list_history().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", style("No chat history recorded.").dim());
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Time", "Question", "Response"]);

    for record in &records {
        table.add_row([
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.question.clone(),
            record.response.clone(),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Delete the entire history after confirmation.
pub async fn clear(state: &AppState, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete the entire chat history?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let deleted = state.chat_service.clear_history().await?;
    println!(
        "  {} Deleted {} chat entries",
        style("✓").green().bold(),
        deleted
    );
    Ok(())
}
