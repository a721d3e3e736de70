use colored::Colorize;
use larder::api::{CmdMessage, DisplayRecipe, MessageLevel};
use larder::config::LarderConfig;
use larder::energy::EnergyReport;
use larder::nutrition::CalorieBreakdown;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const FAVORITE_MARKER: &str = "★";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_recipes(recipes: &[DisplayRecipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    let id_width = recipes
        .iter()
        .map(|dr| dr.recipe.id.width())
        .max()
        .unwrap_or(0);

    for dr in recipes {
        let recipe = &dr.recipe;
        let marker = if dr.is_favorite {
            format!("{} ", FAVORITE_MARKER)
        } else {
            "  ".to_string()
        };

        let meta = format!(
            "{:>4} min  {:<6} {:>5} kcal",
            recipe.cook_time, recipe.difficulty, recipe.calories
        );
        let diet = recipe
            .diet_type
            .as_deref()
            .map(|d| format!("[{}]", d))
            .unwrap_or_default();

        let fixed = marker.width() + id_width + 2 + meta.width() + 1;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&recipe.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}  {}{} {} {}",
            marker.yellow(),
            recipe.id.dimmed(),
            " ".repeat(id_width - recipe.id.width()),
            title,
            " ".repeat(padding),
            meta,
            diet.cyan()
        );
    }
}

pub(crate) fn print_full_recipe(dr: &DisplayRecipe, breakdown: Option<&CalorieBreakdown>) {
    let recipe = &dr.recipe;
    let marker = if dr.is_favorite { FAVORITE_MARKER } else { "" };
    println!("{} {} {}", recipe.id.yellow(), recipe.title.bold(), marker.yellow());
    println!("--------------------------------");
    println!(
        "{} min · {} · {} kcal{}",
        recipe.cook_time,
        recipe.difficulty,
        recipe.calories,
        recipe
            .diet_type
            .as_deref()
            .map(|d| format!(" · {}", d))
            .unwrap_or_default()
    );
    if recipe.views > 0 {
        println!("{}", format!("viewed {} times", recipe.views).dimmed());
    }

    println!();
    println!("{}", "Ingredients".bold());
    match breakdown {
        Some(breakdown) => {
            for item in &breakdown.ingredients {
                let ing = &item.ingredient;
                println!(
                    "  {} {} {}  {}",
                    ing.quantity,
                    ing.unit,
                    ing.name,
                    format!("{:.0} kcal", item.calculated_calories).dimmed()
                );
            }
            println!("  {}", format!("Total: {:.0} kcal", breakdown.total_calories).bold());
        }
        None => {
            for ing in &recipe.ingredients {
                println!("  {} {} {}", ing.quantity, ing.unit, ing.name);
            }
        }
    }

    if !recipe.steps.is_empty() {
        println!();
        println!("{}", "Steps".bold());
        for (i, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }

    if let Some(video) = &recipe.video_url {
        println!();
        println!("{}", video.underline());
    }
}

pub(crate) fn print_energy(report: &EnergyReport) {
    println!("{} {:.0} kcal/day", "BMR:".bold(), report.bmr);
    println!();
    for entry in &report.by_activity {
        let line = format!("  {:<12} {:>6.0} kcal", entry.level.as_str(), entry.tdee);
        if entry.level == report.targets.level {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }

    let targets = &report.targets;
    println!();
    println!("{} ({})", "Targets".bold(), targets.level);
    println!("  lose weight  {:>6.0} kcal", targets.lose);
    println!("  maintain     {:>6.0} kcal", targets.maintain);
    println!(
        "  gain weight  {:>6.0}-{:.0} kcal",
        targets.gain_min, targets.gain_max
    );
}

pub(crate) fn print_diet_types(diet_types: &[String]) {
    if diet_types.is_empty() {
        println!("No diet types.");
    }
    for diet in diet_types {
        println!("{}", diet);
    }
}

pub(crate) fn print_config(config: &LarderConfig) {
    println!("popular-limit = {}", config.popular_limit);
    println!("suggestion-count = {}", config.suggestion_count);
    println!("activity-level = {}", config.activity_level);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Pad Thai", 20), "Pad Thai");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let cut = truncate_to_width("Green Chicken Curry", 10);
        assert_eq!(cut, "Green Chi…");
        assert_eq!(cut.width(), 10);
    }

    #[test]
    fn combining_marks_take_no_width() {
        // ไก่ is one column per base consonant; the tone mark is zero-width
        let title = "แกงเขียวหวานไก่";
        assert_eq!(truncate_to_width(title, title.width()), title);
    }
}
