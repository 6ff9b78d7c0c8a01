mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use common::{create_mixed_selection, create_test_image};
use image::GenericImageView;
use predicates::prelude::*;

fn img_batch(output_root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("img-batch").unwrap();
    cmd.arg("--output-root").arg(output_root.path());
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("img-batch").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NAMING RULES"));
}

#[test]
fn test_ratio_flag_out_of_range() {
    let mut cmd = Command::cargo_bin("img-batch").unwrap();
    cmd.args(["--ratio", "96", "whatever.jpg"]);
    cmd.assert().failure();
}

#[test]
fn test_unknown_rule_flag() {
    let mut cmd = Command::cargo_bin("img-batch").unwrap();
    cmd.args(["--rules", "1,42", "whatever.jpg"]);
    cmd.assert().failure();
}

#[test]
fn test_invalid_choice_exits_normally() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let image = create_test_image(input.path(), "a.png", 10, 10);

    img_batch(&output)
        .arg(&image)
        .write_stdin("5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid choice"));

    output.child("compressed_images").assert(predicate::path::missing());
    output.child("renamed_images").assert(predicate::path::missing());
}

#[test]
fn test_no_images_selected_exits_normally() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    input.child("notes.txt").write_str("not an image").unwrap();

    img_batch(&output)
        .arg(input.path())
        .write_stdin("1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("No images selected"));

    output.child("compressed_images").assert(predicate::path::missing());
}

#[test]
fn test_compress_reprompts_and_keeps_names() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    create_mixed_selection(input.path());

    img_batch(&output)
        .arg(input.path())
        .write_stdin("1\n4\n96\n50\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a number between 5 and 95.").count(2))
        .stdout(predicate::str::contains("Compressed and saved"))
        .stdout(predicate::str::contains("Done."));

    let folder = output.child("compressed_images");
    folder.child("A.jpg").assert(predicate::path::is_file());
    folder.child("B.png").assert(predicate::path::is_file());
    folder.child("C.bmp").assert(predicate::path::is_file());
    assert_eq!(
        image::open(folder.child("A.jpg").path()).unwrap().dimensions(),
        (50, 30)
    );
}

#[test]
fn test_second_compress_run_gets_new_folder() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let image = create_test_image(input.path(), "a.png", 40, 40);

    for _ in 0..2 {
        img_batch(&output)
            .arg(&image)
            .args(["--action", "compress", "--ratio", "50"])
            .assert()
            .success();
    }

    output.child("compressed_images/a.png").assert(predicate::path::is_file());
    output.child("compressed_images(1)/a.png").assert(predicate::path::is_file());
}

#[test]
fn test_rename_warns_about_unknown_rules() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let image = create_test_image(input.path(), "pic.png", 800, 600);

    img_batch(&output)
        .arg(&image)
        .write_stdin("2\n1, 99, x, 4,5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignoring unknown rules: 99, x"));

    output
        .child("renamed_images/1_800_600.png")
        .assert(predicate::path::is_file());
}

#[test]
fn test_both_renames_compressed_images() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    create_mixed_selection(input.path());

    img_batch(&output)
        .arg(input.path())
        .write_stdin("3\n50\n1,4,5\n")
        .assert()
        .success();

    output.child("compressed_images/B.png").assert(predicate::path::is_file());
    let folder = output.child("final_images");
    folder.child("1_50_30.jpg").assert(predicate::path::is_file());
    folder.child("2_40_20.png").assert(predicate::path::is_file());
    folder.child("3_10_10.bmp").assert(predicate::path::is_file());
    output.child("renamed_images").assert(predicate::path::missing());
}

#[test]
fn test_quiet_mode_hides_progress() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let image = create_test_image(input.path(), "a.png", 10, 10);

    img_batch(&output)
        .arg(&image)
        .args(["-q", "-a", "rename", "-R", "2"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    output.child("renamed_images/a.png").assert(predicate::path::is_file());
}

#[test]
fn test_corrupt_image_fails_run() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    input.child("broken.jpg").write_str("fake image data").unwrap();

    img_batch(&output)
        .arg(input.child("broken.jpg").path())
        .args(["-a", "compress", "-r", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image batch aborted"));
}
