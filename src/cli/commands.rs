//! CLI command handlers

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

use super::LangCommands;
use crate::{
    adapter::storage::JsonFileStore,
    config,
    domain::event::Event,
    i18n,
    service::event_service::EventService,
    ui::{display, prompts}
};

/// Build the event service over the configured storage location.
///
/// The default path comes from [`config::get_events_file_path`]; the core
/// itself never decides where data lives.
async fn open_service() -> Result<EventService> {
    let path = config::get_events_file_path().context("Failed to resolve events file location")?;
    let store = Arc::new(JsonFileStore::new(path));

    Ok(EventService::load(store).await?)
}

/// Parse a user-supplied date-time. Naive inputs are taken as UTC.
fn parse_datetime(raw: &str) -> Result<DateTime<Utc>> {
    const FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

    for format in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    anyhow::bail!(i18n::t_params("parse_datetime_failed", &[raw]));
}

/// Handle the add command - create an event, warn about conflicts
pub async fn handle_add_command(name: &str, start: &str, end: &str, description: Option<String>) -> Result<()> {
    let start_time = parse_datetime(start)?;
    let end_time = parse_datetime(end)?;

    let event = Event::new(name.to_string(), start_time, end_time, description)?;
    let event_id = event.id().to_string();

    let mut service = open_service().await?;
    let outcome = service.add_event(event).await?;

    if outcome.has_conflicts() {
        println!("{}", i18n::t_params("add_conflict_warning", &[&outcome.conflicts.len().to_string()]));
        for conflict in &outcome.conflicts {
            println!(
                "{}",
                i18n::t_params(
                    "conflict_item",
                    &[
                        conflict.name(),
                        &display::format_instant(conflict.start_time()),
                        &display::format_instant(conflict.end_time())
                    ]
                )
            );
        }
    }

    println!("{}", i18n::t_params("add_success", &[name, &event_id]));
    Ok(())
}

/// Handle the remove command
pub async fn handle_remove_command(event_id: &str) -> Result<()> {
    let mut service = open_service().await?;

    if service.remove_event(event_id).await? {
        println!("{}", i18n::t_params("remove_success", &[event_id]));
    } else {
        eprintln!("{}", i18n::t_params("remove_not_found", &[event_id]));
    }

    Ok(())
}

/// Handle the list command - chronological table, optionally windowed
pub async fn handle_list_command(from: Option<&str>, to: Option<&str>) -> Result<()> {
    let from = from.map(parse_datetime).transpose()?;
    let to = to.map(parse_datetime).transpose()?;

    let service = open_service().await?;
    let events = service.list_events_between(from, to);

    if events.is_empty() {
        println!("{}", i18n::t("list_empty"));
        return Ok(());
    }

    println!("{}", display::render_event_table(&events));
    Ok(())
}

/// Handle the conflicts command - full pairwise conflict report
pub async fn handle_conflicts_command() -> Result<()> {
    let service = open_service().await?;
    let conflicts = service.find_conflicts()?;

    if conflicts.is_empty() {
        println!("{}", i18n::t("conflicts_none"));
        return Ok(());
    }

    println!("{}", i18n::t("conflicts_header"));
    for (event_id, conflicting) in &conflicts {
        if let Some(event) = service.get_event_by_id(event_id) {
            display::show_conflict_entry(event, conflicting);
        }
    }

    Ok(())
}

/// Handle the show command
pub async fn handle_show_command(event_id: &str) -> Result<()> {
    let service = open_service().await?;

    match service.get_event_by_id(event_id) {
        Some(event) => println!("{}", display::render_event_table(std::slice::from_ref(event))),
        None => eprintln!("{}", i18n::t_params("show_not_found", &[event_id]))
    }

    Ok(())
}

/// Handle the clear command - destructive, so confirm unless --yes
pub async fn handle_clear_command(yes: bool) -> Result<()> {
    if !yes && !prompts::confirm_clear()? {
        println!("{}", i18n::t("clear_cancelled"));
        return Ok(());
    }

    let mut service = open_service().await?;
    service.clear_events().await?;

    println!("{}", i18n::t("clear_success"));
    Ok(())
}

/// Handle the init command - initialize configuration directories
pub async fn handle_init_command() -> Result<()> {
    println!("{}", i18n::t("init_initializing"));

    config::init_config_dirs().context("Failed to initialize configuration directories")?;

    let config_dir = config::get_config_dir()?;
    let data_dir = config::get_data_dir()?;
    let i18n_dir = config::get_i18n_dir()?;

    println!("{}", i18n::t("init_success"));
    println!("{}", i18n::t_params("init_config_dir", &[&config_dir.display().to_string()]));
    println!("{}", i18n::t_params("init_data_dir", &[&data_dir.display().to_string()]));
    println!("{}", i18n::t_params("init_i18n_dir", &[&i18n_dir.display().to_string()]));

    Ok(())
}

/// Handle language commands
pub async fn handle_lang_command(command: &LangCommands) -> Result<()> {
    match command {
        LangCommands::Set { language } => {
            let available_languages =
                config::list_available_languages().context("Failed to list available languages")?;

            if !available_languages.contains(language) {
                anyhow::bail!(i18n::t_params("lang_unknown_language", &[language, &available_languages.join(", ")]));
            }

            config::set_language(language).context("Failed to set language")?;

            println!("{}", i18n::t_params("lang_set_success", &[language]));
        }
        LangCommands::List => {
            let languages = config::list_available_languages().context("Failed to list available languages")?;
            let current = config::get_current_language().unwrap_or_else(|_| "en".to_string());

            println!("{}", i18n::t("lang_available_header"));
            for lang in languages {
                let marker = if lang == current { i18n::t("lang_current_marker") } else { String::new() };
                println!("  • {}{}", lang, marker);
            }
        }
        LangCommands::Current => {
            let current = config::get_current_language().context("Failed to get current language")?;
            println!("{}", i18n::t_params("lang_current_language", &[&current]));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_datetime_accepts_common_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();

        assert_eq!(parse_datetime("2024-01-01 10:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-01-01T10:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-01-01 10:00:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-01-01T10:00:00Z").unwrap(), expected);
    }

    #[test]
    fn test_parse_datetime_honours_rfc3339_offsets() {
        let parsed = parse_datetime("2024-01-01T10:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("next tuesday").is_err());
    }
}
