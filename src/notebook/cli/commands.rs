use super::render::{
    print_json, print_notes, print_path, print_paths, print_success, print_warning,
};
use super::setup::{Cli, Commands, ImageCommands};
use clap::Parser;
use notebook::api::NotebookApi;
use notebook::config::CONFIG_KEYS;
use notebook::error::Result;
use notebook::host::StandaloneHost;
use notebook::logging::init_tracing;
use serde_json::{json, Value};
use std::io::{IsTerminal, Read};
use std::path::Path;

struct AppContext {
    api: NotebookApi<StandaloneHost>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    let ctx = init_context(&cli);

    match cli.command {
        Some(Commands::New { content }) => handle_new(&ctx, content),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { path }) => handle_show(&ctx, &path),
        Some(Commands::Update { path, content }) => handle_update(&ctx, &path, content),
        Some(Commands::Delete { path }) => handle_delete_note(&ctx, &path),
        Some(Commands::Read { path }) => handle_read(&ctx, &path),
        Some(Commands::Image(cmd)) => match cmd {
            ImageCommands::Save { data } => handle_image_save(&ctx, data),
            ImageCommands::Refs { path, check } => handle_image_refs(&ctx, &path, check),
            ImageCommands::Delete { path } => handle_image_delete(&ctx, &path),
        },
        Some(Commands::Paths) => handle_paths(&ctx),
        Some(Commands::Time) => emit(&ctx, ctx.api.get_current_time()),
        Some(Commands::Format { text }) => emit(&ctx, ctx.api.format_text(&text.join(" "))),
        Some(Commands::Fetch { url }) => handle_fetch(&ctx, &url),
        Some(Commands::Action { name, params }) => handle_action(&ctx, &name, params),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let mut host = StandaloneHost::new();
    if let Some(dir) = &cli.user_data {
        host = host.with_user_data(dir);
    }
    AppContext {
        api: NotebookApi::new(host),
        json: cli.json,
    }
}

/// Joined words, or all of stdin when no words were given and stdin is piped.
fn content_or_stdin(words: Vec<String>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

fn emit(ctx: &AppContext, text: String) -> Result<()> {
    if ctx.json {
        print_json(&text)
    } else {
        println!("{}", text);
        Ok(())
    }
}

fn handle_new(ctx: &AppContext, content: Vec<String>) -> Result<()> {
    let content = content_or_stdin(content)?;
    let note = ctx.api.create_note(&content)?;
    if ctx.json {
        print_json(&note)
    } else {
        print_path(&note.file_path);
        Ok(())
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let notes = ctx.api.list_notes()?;
    if ctx.json {
        print_json(&notes)
    } else {
        print_notes(&notes);
        Ok(())
    }
}

fn handle_show(ctx: &AppContext, path: &Path) -> Result<()> {
    let content = ctx.api.load_note_from_file(path);
    if ctx.json {
        print_json(&json!({ "path": path, "content": content }))
    } else {
        print!("{}", content);
        Ok(())
    }
}

fn handle_update(ctx: &AppContext, path: &Path, content: Vec<String>) -> Result<()> {
    let content = content_or_stdin(content)?;
    ctx.api.update_note_file(path, &content)?;
    if ctx.json {
        print_json(&json!({ "path": path, "updated": true }))
    } else {
        print_success(&format!("Note updated: {}", path.display()));
        Ok(())
    }
}

fn handle_delete_note(ctx: &AppContext, path: &Path) -> Result<()> {
    report_delete(ctx, path, ctx.api.delete_note_file(path), "Note")
}

fn handle_image_delete(ctx: &AppContext, path: &Path) -> Result<()> {
    report_delete(ctx, path, ctx.api.delete_image(path), "Image")
}

fn report_delete(ctx: &AppContext, path: &Path, deleted: bool, what: &str) -> Result<()> {
    if ctx.json {
        return print_json(&json!({ "path": path, "deleted": deleted }));
    }
    if deleted {
        print_success(&format!("{} deleted: {}", what, path.display()));
    } else {
        print_warning(&format!("Nothing to delete: {}", path.display()));
    }
    Ok(())
}

fn handle_read(ctx: &AppContext, path: &Path) -> Result<()> {
    let content = ctx.api.read_local_text_file(path)?;
    if ctx.json {
        print_json(&json!({ "path": path, "content": content }))
    } else {
        print!("{}", content);
        Ok(())
    }
}

fn handle_image_save(ctx: &AppContext, data: Option<String>) -> Result<()> {
    let data = content_or_stdin(data.into_iter().collect())?;
    let path = ctx.api.save_image_from_base64(&data)?;
    if ctx.json {
        print_json(&json!({ "path": path }))
    } else {
        print_path(&path);
        Ok(())
    }
}

fn handle_image_refs(ctx: &AppContext, path: &Path, check: bool) -> Result<()> {
    let content = ctx.api.load_note_from_file(path);
    if check {
        let has = ctx.api.has_images(&content)?;
        return if ctx.json {
            print_json(&has)
        } else {
            println!("{}", has);
            Ok(())
        };
    }

    let refs = ctx.api.extract_image_paths(&content)?;
    if ctx.json {
        print_json(&refs)
    } else {
        for r in &refs {
            println!("{}", r);
        }
        Ok(())
    }
}

fn handle_paths(ctx: &AppContext) -> Result<()> {
    let paths = ctx.api.paths()?;
    if ctx.json {
        print_json(&json!({
            "root": paths.root,
            "notes": paths.notes,
            "images": paths.images,
        }))
    } else {
        print_paths(&paths);
        Ok(())
    }
}

fn handle_fetch(ctx: &AppContext, url: &str) -> Result<()> {
    let body = ctx.api.fetch_data(url)?;
    if ctx.json {
        print_json(&body)
    } else {
        println!("{}", body);
        Ok(())
    }
}

fn handle_action(ctx: &AppContext, name: &str, params: Option<String>) -> Result<()> {
    let params: Value = match params {
        Some(raw) => serde_json::from_str(&raw)?,
        None => Value::Null,
    };
    ctx.api.on_enter(name, &params)?;
    if !ctx.json {
        print_success(&format!("Action '{}' done", name));
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            let config = ctx.api.config()?;
            if ctx.json {
                return print_json(&config);
            }
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
            Ok(())
        }
        (Some(key), None) => emit(ctx, ctx.api.config()?.get(&key)?),
        (Some(key), Some(value)) => {
            let config = ctx.api.set_config(&key, &value)?;
            let current = config.get(&key)?;
            if ctx.json {
                print_json(&json!({ "key": key, "value": current }))
            } else {
                print_success(&format!("{} set to {}", key, current));
                Ok(())
            }
        }
    }
}
