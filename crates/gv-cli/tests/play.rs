#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gloomvault() -> Command {
    Command::cargo_bin("gloomvault").unwrap()
}

#[test]
fn banner_and_help_then_quit() {
    gloomvault()
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to Gloomvault!")
                .and(predicate::str::contains("move <direction>"))
                .and(predicate::str::contains("Thank you for playing. Goodbye!")),
        );
}

#[test]
fn end_of_input_exits_cleanly() {
    gloomvault().write_stdin("").assert().success();
}

#[test]
fn sword_gate_blocks_the_first_move() {
    gloomvault()
        .write_stdin("move right\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("without a sword"));
}

#[test]
fn unknown_command_keeps_the_loop_alive() {
    gloomvault()
        .write_stdin("dance\nlook\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Unknown command")
                .and(predicate::str::contains("Dungeon Entrance")),
        );
}

#[test]
fn scripted_opening_defeats_the_goblin() {
    gloomvault()
        .write_stdin("pickup sword\nmove right\nattack\nlook\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You picked up Sword.")
                .and(predicate::str::contains("You move to Goblins' Hell."))
                .and(predicate::str::contains("You defeated the Goblin!"))
                .and(predicate::str::contains("dead body lies on the ground")),
        );
}

#[test]
fn map_shows_the_dungeon() {
    gloomvault()
        .write_stdin("map\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("FINAL BOSS"));
}

#[test]
fn save_and_load_across_processes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save.json");
    let path = path.to_str().unwrap();

    gloomvault()
        .write_stdin(format!("pickup sword\nsave {path}\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Game saved"));

    gloomvault()
        .write_stdin(format!("load {path}\ninventory\nquit\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Game loaded")
                .and(predicate::str::contains("- Sword")),
        );
}

#[test]
fn failed_load_is_reported_and_play_continues() {
    gloomvault()
        .write_stdin("load /no/such/save.json\nlook\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("cannot access save file")
                .and(predicate::str::contains("Dungeon Entrance")),
        );
}
