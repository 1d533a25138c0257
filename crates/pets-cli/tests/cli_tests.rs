use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn pets_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("pets").expect("Failed to find pets binary");
    cmd.args(["--no-color", "--database-file", db_path]);
    cmd
}

/// Adds a pet and returns its id as printed in the `# <id>. <name>` header
fn add_pet(db_arg: &str, args: &[&str]) -> String {
    let output = pets_cmd(db_arg)
        .arg("add")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8(output).expect("Invalid UTF-8");
    extract_id_from_output(&output_str)
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pets_cmd(db_path.to_str().unwrap())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pets found."));
}

#[test]
fn test_cli_no_command_lists_pets() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_pet(db_arg, &["Garfield", "--breed", "Tabby"]);

    pets_cmd(db_arg)
        .assert()
        .success()
        .stdout(predicate::str::contains("Garfield"));
}

#[test]
fn test_cli_add_pet() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pets_cmd(db_path.to_str().unwrap())
        .args([
            "add", "Toto", "--breed", "Terrier", "--gender", "male", "--weight", "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created pet with ID: 1"))
        .stdout(predicate::str::contains("# 1. Toto"))
        .stdout(predicate::str::contains("- Breed: Terrier"))
        .stdout(predicate::str::contains("- Gender: male"))
        .stdout(predicate::str::contains("- Weight: 7 kg"));
}

#[test]
fn test_cli_add_defaults_gender_and_weight() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pets_cmd(db_path.to_str().unwrap())
        .args(["add", "Binx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Breed: unknown breed"))
        .stdout(predicate::str::contains("- Gender: unknown"))
        .stdout(predicate::str::contains("- Weight: 0 kg"));
}

#[test]
fn test_cli_add_rejects_empty_name() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    pets_cmd(db_arg)
        .args(["add", "", "--breed", "Terrier"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing name"));

    pets_cmd(db_arg)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pets found."));
}

#[test]
fn test_cli_add_rejects_negative_weight() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pets_cmd(db_path.to_str().unwrap())
        .args(["add", "Rex", "--weight", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative weight"));
}

#[test]
fn test_cli_add_rejects_unknown_gender() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pets_cmd(db_path.to_str().unwrap())
        .args(["add", "Rex", "--gender", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid gender"));
}

#[test]
fn test_cli_show_pet() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let id = add_pet(db_arg, &["Lassie", "--breed", "Collie", "--gender", "f"]);

    pets_cmd(db_arg)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lassie"))
        .stdout(predicate::str::contains("- Gender: female"))
        .stdout(predicate::str::contains(format!(
            "content://com.example.android.pets/pets/{id}"
        )));
}

#[test]
fn test_cli_show_missing_pet() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pets_cmd(db_path.to_str().unwrap())
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pet with ID 42 not found"));
}

#[test]
fn test_cli_list_filters_by_breed_and_sorts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_pet(db_arg, &["Toto", "--breed", "Terrier", "--weight", "7"]);
    add_pet(db_arg, &["Lassie", "--breed", "Collie", "--weight", "30"]);
    add_pet(db_arg, &["Fido", "--breed", "Terrier", "--weight", "12"]);

    let output = pets_cmd(db_arg)
        .args(["list", "--breed", "Terrier", "--sort", "weight", "--desc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("Invalid UTF-8");

    assert!(!output.contains("Lassie"));
    let fido = output.find("Fido").expect("Fido listed");
    let toto = output.find("Toto").expect("Toto listed");
    assert!(fido < toto);
}

#[test]
fn test_cli_edit_pet() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let id = add_pet(db_arg, &["Toto", "--breed", "Terrier", "--weight", "7"]);

    pets_cmd(db_arg)
        .args(["edit", &id, "--weight", "8", "--name", "Toto II"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated pet with ID: {id}")))
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("- Name set to Toto II"))
        .stdout(predicate::str::contains("- Weight: 8 kg"))
        .stdout(predicate::str::contains("- Breed: Terrier"));
}

#[test]
fn test_cli_edit_without_changes_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let id = add_pet(db_arg, &["Toto"]);

    pets_cmd(db_arg)
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_cli_edit_missing_pet() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pets_cmd(db_path.to_str().unwrap())
        .args(["edit", "7", "--weight", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pet with ID 7 not found"));
}

#[test]
fn test_cli_delete_pet() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let id = add_pet(db_arg, &["Toto"]);

    pets_cmd(db_arg)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted pet with ID: {id}")));

    pets_cmd(db_arg)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("No pet with ID {id}.")));
}

#[test]
fn test_cli_delete_all_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_pet(db_arg, &["Toto"]);
    add_pet(db_arg, &["Rex"]);

    pets_cmd(db_arg)
        .arg("delete-all")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    pets_cmd(db_arg)
        .args(["delete-all", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 pets."));

    pets_cmd(db_arg)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pets found."));
}

#[test]
fn test_cli_seed() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    pets_cmd(db_path.to_str().unwrap())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Toto"))
        .stdout(predicate::str::contains("- Breed: Terrier"))
        .stdout(predicate::str::contains("- Gender: male"))
        .stdout(predicate::str::contains("- Weight: 7 kg"));
}

#[test]
fn test_cli_type() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    pets_cmd(db_arg)
        .args(["type", "content://com.example.android.pets/pets"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "vnd.android.cursor.dir/com.example.android.pets/pets",
        ));

    pets_cmd(db_arg)
        .args(["type", "content://com.example.android.pets/pets/3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "vnd.android.cursor.item/com.example.android.pets/pets",
        ));

    pets_cmd(db_arg)
        .args(["type", "content://com.example.android.pets/owners"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized identifier"));
}

#[test]
fn test_cli_json_output() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_pet(db_arg, &["Toto", "--breed", "Terrier", "--gender", "male", "--weight", "7"]);

    let output = pets_cmd(db_arg)
        .args(["--json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let pets: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let pets = pets.as_array().expect("JSON array");
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0]["name"], "Toto");
    assert_eq!(pets[0]["breed"], "Terrier");
    assert_eq!(pets[0]["weight"], 7);
}

#[test]
fn test_cli_persists_between_runs() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("nested").join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_pet(db_arg, &["Toto"]);
    add_pet(db_arg, &["Lassie"]);

    pets_cmd(db_arg)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Toto"))
        .stdout(predicate::str::contains("Lassie"));
}

fn extract_id_from_output(output: &str) -> String {
    // Look for the "# <number>. " header
    for line in output.lines() {
        if let Some(stripped) = line.strip_prefix("# ") {
            if let Some((potential_id, _)) = stripped.split_once('.') {
                if !potential_id.is_empty() && potential_id.chars().all(|c| c.is_ascii_digit()) {
                    return potential_id.to_string();
                }
            }
        }
    }

    panic!("Could not extract ID from output: {output}");
}
