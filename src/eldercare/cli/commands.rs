use super::render::{
    render_config, render_error, render_messages, render_record, render_record_table,
};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use clap::Parser;
use eldercare::api::{CareApi, CmdMessage, CmdResult, ConfigAction, MessageLevel};
use eldercare::config::CareConfig;
use eldercare::error::Result;
use eldercare::init::initialize;
use eldercare::model::{NewRecord, RecordPatch};
use eldercare::store::fs::FileStorage;
use std::io;
use std::path::PathBuf;

struct AppContext {
    api: CareApi<FileStorage>,
    config: CareConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    super::init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Add {
            name,
            age,
            address,
            need,
            contact,
        }) => handle_add(&mut ctx, NewRecord::new(name, age, address, need, contact)),
        Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::Show { id }) => handle_show(&mut ctx, id),
        Some(Commands::Search { query }) => handle_search(&mut ctx, query.join(" ")),
        Some(Commands::Edit {
            id,
            name,
            age,
            address,
            need,
            contact,
        }) => {
            let patch = RecordPatch {
                name,
                age,
                address,
                need,
                contact,
            };
            handle_edit(&mut ctx, id, patch)
        }
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.file.as_deref())?;
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

/// Loads the data file before a one-shot command. Only problems are shown;
/// the routine "loaded"/"starting fresh" notes would be noise here.
fn load_quietly(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.load()?;
    let warnings: Vec<CmdMessage> = result
        .messages
        .into_iter()
        .filter(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
        .collect();
    eprint!("{}", render_messages(&warnings));
    Ok(())
}

fn save_after(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    print!("{}", render_messages(&result.messages));
    let saved = ctx.api.save()?;
    print!("{}", render_messages(&saved.messages));
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    if ctx.config.load_on_start {
        match ctx.api.load() {
            Ok(result) => print!("{}", render_messages(&result.messages)),
            Err(e) => print!("{}", render_error(&e)),
        }
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(
        &mut ctx.api,
        ctx.config.save_on_exit,
        stdin.lock(),
        stdout.lock(),
    )
    .run()
}

fn handle_add(ctx: &mut AppContext, fields: NewRecord) -> Result<()> {
    load_quietly(ctx)?;
    let result = ctx.api.add_record(fields)?;
    save_after(ctx, result)
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    load_quietly(ctx)?;
    let result = ctx.api.list_records()?;
    print!("{}", render_record_table(&result.listed_records));
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: u32) -> Result<()> {
    load_quietly(ctx)?;
    let result = ctx.api.view_record(id)?;
    for record in &result.listed_records {
        print!("{}", render_record(record));
    }
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: String) -> Result<()> {
    load_quietly(ctx)?;
    let result = ctx.api.search_records(&query)?;
    print!("{}", render_record_table(&result.listed_records));
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: u32, patch: RecordPatch) -> Result<()> {
    if patch.is_empty() {
        print!(
            "{}",
            render_messages(&[CmdMessage::warning(
                "Nothing to update: pass at least one field."
            )])
        );
        return Ok(());
    }
    load_quietly(ctx)?;
    let result = ctx.api.update_record(id, &patch)?;
    save_after(ctx, result)
}

fn handle_delete(ctx: &mut AppContext, id: u32) -> Result<()> {
    load_quietly(ctx)?;
    let result = ctx.api.delete_record(id)?;
    save_after(ctx, result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}
