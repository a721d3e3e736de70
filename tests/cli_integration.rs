use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn larder(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("larder").unwrap();
    cmd.env("LARDER_HOME", home.path())
        .env_remove("LARDER_LOG")
        .env("NO_COLOR", "1");
    cmd
}

const NOODLES: &str = r#"{
    "id": "noodles",
    "title": "Pad See Ew",
    "cookTime": 20,
    "difficulty": "easy",
    "calories": 0,
    "diet_type": "vegetarian",
    "ingredients": [
        {"id": "1", "name": "Wide rice noodles", "caloriesPerUnit": 190, "unit": "cup", "quantity": "2-3"},
        {"id": "2", "name": "Chinese broccoli", "caloriesPerUnit": 20, "unit": "cup", "quantity": "1"},
        {"id": "3", "name": "Dark soy sauce", "caloriesPerUnit": 10, "unit": "tbsp", "quantity": "-"}
    ],
    "steps": ["Soak the noodles", "Stir fry everything"]
}"#;

#[test]
fn list_shows_built_in_recipes_on_first_run() {
    let home = TempDir::new().unwrap();
    larder(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("แกงเขียวหวานไก่"));
    // reading never writes
    assert!(!home.path().join("recipes.json").exists());
}

#[test]
fn import_then_show_breakdown() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("noodles.json");
    fs::write(&file, NOODLES).unwrap();

    larder(&home)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total imported: 1"));
    assert!(home.path().join("recipes.json").exists());

    // 2.5 × 190 + 1 × 20 + 0
    larder(&home)
        .args(["show", "noodles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pad See Ew"))
        .stdout(predicate::str::contains("Total: 495 kcal"));
}

#[test]
fn search_combines_keywords_and_tags() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("noodles.json");
    fs::write(&file, NOODLES).unwrap();
    larder(&home).arg("import").arg(&file).assert().success();

    larder(&home)
        .args(["search", "broccoli, durian", "-t", "vegetarian"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pad See Ew"));

    larder(&home)
        .args(["search", "broccoli", "-t", "keto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn favorites_persist_between_runs() {
    let home = TempDir::new().unwrap();
    larder(&home)
        .args(["fav", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites"));

    larder(&home)
        .arg("favs")
        .assert()
        .success()
        .stdout(predicate::str::contains("แกงเขียวหวานไก่"));

    larder(&home)
        .args(["fav", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from favorites"));

    larder(&home)
        .arg("favs")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn delete_and_reset() {
    let home = TempDir::new().unwrap();
    larder(&home)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe deleted (1)"));

    larder(&home)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 1"));

    larder(&home).args(["reset", "--yes"]).assert().success();
    larder(&home).args(["show", "1"]).assert().success();
}

#[test]
fn update_from_file_replaces_by_id() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("noodles.json");
    fs::write(&file, NOODLES).unwrap();
    larder(&home).arg("import").arg(&file).assert().success();

    fs::write(&file, NOODLES.replace("Pad See Ew", "Rad Na")).unwrap();
    larder(&home)
        .args(["update", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe updated (noodles): Rad Na"));

    let ghost = home.path().join("ghost.json");
    fs::write(&ghost, NOODLES.replace(r#""id": "noodles""#, r#""id": "ghost""#)).unwrap();
    larder(&home)
        .args(["update", "--file"])
        .arg(&ghost)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing updated"));
}

#[test]
fn corrupt_storage_falls_back_to_seed() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("recipes.json"), "{ definitely not json").unwrap();

    larder(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("แกงเขียวหวานไก่"))
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn energy_report() {
    let home = TempDir::new().unwrap();
    larder(&home)
        .args([
            "energy", "--weight", "70", "--height", "175", "--age", "30", "--sex", "male",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("BMR: 1649 kcal/day"))
        .stdout(predicate::str::contains("Targets (moderate)"));

    larder(&home)
        .args([
            "energy", "--weight", "0", "--height", "175", "--age", "30", "--sex", "male",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid body metrics"));
}

#[test]
fn config_roundtrip() {
    let home = TempDir::new().unwrap();
    larder(&home)
        .args(["config", "popular-limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("popular-limit set to 2"));

    larder(&home)
        .args(["config", "popular-limit"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));
}

#[test]
fn tags_lists_diet_types() {
    let home = TempDir::new().unwrap();
    larder(&home)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("ฮาลาล"))
        .stdout(predicate::str::contains("คีโต"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let home = TempDir::new().unwrap();
    larder(&home)
        .args(["-v", "search", "ไก่"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search"))
        .stdout(predicate::str::contains("DEBUG").not());
}
