use clap::Parser;
use larder::api::{CmdResult, ConfigAction, LarderApi};
use larder::editor::{edit_recipe, new_recipe_template};
use larder::energy::{ActivityLevel, BodyMetrics, Sex};
use larder::error::{LarderError, Result};
use larder::init::{initialize, LarderContext};
use larder::model::Recipe;
use larder::store::fs::FileStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{
    print_config, print_diet_types, print_energy, print_full_recipe, print_messages, print_recipes,
};

/// Log filter directives, e.g. `LARDER_LOG=larder=debug`.
const LOG_ENV: &str = "LARDER_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data_dir)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx.api),
        Some(Commands::Show { id }) => handle_show(&mut ctx.api, &id),
        Some(Commands::Search { query, tags }) => handle_search(&ctx.api, &query, &tags),
        Some(Commands::Random { count, suggest }) => handle_random(&ctx, count, suggest),
        Some(Commands::Popular { limit }) => handle_popular(&ctx, limit),
        Some(Commands::Fav { id }) => handle_fav(&mut ctx.api, &id),
        Some(Commands::Favs) => handle_favs(&ctx.api),
        Some(Commands::Create { file }) => handle_create(&mut ctx.api, file),
        Some(Commands::Edit { id }) => handle_edit(&mut ctx.api, &id),
        Some(Commands::Update { file }) => handle_update(&mut ctx.api, &file),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx.api, &ids),
        Some(Commands::Import { paths }) => handle_import(&mut ctx.api, paths),
        Some(Commands::Tags) => handle_tags(&ctx.api),
        Some(Commands::Energy {
            weight,
            height,
            age,
            sex,
            activity,
        }) => handle_energy(&ctx, weight, height, age, &sex, activity.as_deref()),
        Some(Commands::Config { key, value }) => handle_config(&ctx.api, key, value),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx.api, yes),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_listing(result: &CmdResult) {
    print_recipes(&result.listed_recipes);
    print_messages(&result.messages);
}

fn handle_list(api: &LarderApi<FileStore>) -> Result<()> {
    print_listing(&api.list_recipes()?);
    Ok(())
}

fn handle_show(api: &mut LarderApi<FileStore>, id: &str) -> Result<()> {
    let result = api.show_recipe(id)?;
    for dr in &result.listed_recipes {
        print_full_recipe(dr, result.breakdown.as_ref());
    }
    if !result.messages.is_empty() {
        println!();
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &LarderApi<FileStore>, query: &str, tags: &[String]) -> Result<()> {
    print_listing(&api.search_recipes(query, tags)?);
    Ok(())
}

fn handle_random(ctx: &LarderContext, count: Option<usize>, suggest: bool) -> Result<()> {
    let count = if suggest {
        Some(ctx.config.suggestion_count)
    } else {
        count
    };
    let result = ctx.api.random_recipes(count)?;

    if let ([only], None) = (result.listed_recipes.as_slice(), count) {
        print_full_recipe(only, None);
        print_messages(&result.messages);
    } else {
        print_listing(&result);
    }
    Ok(())
}

fn handle_popular(ctx: &LarderContext, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config.popular_limit);
    print_listing(&ctx.api.popular_recipes(limit)?);
    Ok(())
}

fn handle_fav(api: &mut LarderApi<FileStore>, id: &str) -> Result<()> {
    print_messages(&api.toggle_favorite(id)?.messages);
    Ok(())
}

fn handle_favs(api: &LarderApi<FileStore>) -> Result<()> {
    let result = api.favorite_recipes()?;
    if !result.listed_recipes.is_empty() {
        print_recipes(&result.listed_recipes);
    }
    print_messages(&result.messages);
    Ok(())
}

fn read_recipe_file(path: &Path) -> Result<Recipe> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn handle_create(api: &mut LarderApi<FileStore>, file: Option<PathBuf>) -> Result<()> {
    let recipe = match file {
        Some(path) => read_recipe_file(&path)?,
        None => edit_recipe(&new_recipe_template())?,
    };
    print_messages(&api.create_recipe(recipe)?.messages);
    Ok(())
}

fn handle_edit(api: &mut LarderApi<FileStore>, id: &str) -> Result<()> {
    let current = api
        .get_recipe(id)?
        .listed_recipes
        .into_iter()
        .next()
        .map(|dr| dr.recipe)
        .ok_or_else(|| LarderError::RecipeNotFound(id.to_string()))?;

    let mut edited = edit_recipe(&current)?;
    // the id is the lookup key and cannot be changed here
    edited.id = current.id.clone();

    if edited == current {
        println!("No changes.");
        return Ok(());
    }
    print_messages(&api.update_recipe(edited)?.messages);
    Ok(())
}

fn handle_update(api: &mut LarderApi<FileStore>, file: &Path) -> Result<()> {
    let recipe = read_recipe_file(file)?;
    print_messages(&api.update_recipe(recipe)?.messages);
    Ok(())
}

fn handle_delete(api: &mut LarderApi<FileStore>, ids: &[String]) -> Result<()> {
    print_messages(&api.delete_recipes(ids)?.messages);
    Ok(())
}

fn handle_import(api: &mut LarderApi<FileStore>, paths: Vec<PathBuf>) -> Result<()> {
    print_messages(&api.import_recipes(paths)?.messages);
    Ok(())
}

fn handle_tags(api: &LarderApi<FileStore>) -> Result<()> {
    print_diet_types(&api.diet_types()?.diet_types);
    Ok(())
}

fn handle_energy(
    ctx: &LarderContext,
    weight: f64,
    height: f64,
    age: u32,
    sex: &str,
    activity: Option<&str>,
) -> Result<()> {
    let metrics = BodyMetrics {
        weight_kg: weight,
        height_cm: height,
        age,
        sex: sex.parse::<Sex>()?,
    };
    let level = match activity {
        Some(level) => level.parse::<ActivityLevel>()?,
        None => ctx.config.activity_level,
    };

    let result = ctx.api.energy(metrics, level)?;
    if let Some(report) = &result.energy {
        print_energy(report);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &LarderApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(api: &mut LarderApi<FileStore>, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "This replaces all {} recipes with the built-in collection. Run again with --yes to proceed.",
            api.catalog().len()
        );
        return Ok(());
    }
    print_messages(&api.reset()?.messages);
    Ok(())
}
