use std::fs;
use std::path::PathBuf;

use notelogo::rendering::raster::pixel_digest;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn check_golden(size: u32) {
    let canvas = notelogo::render(size).expect("render");
    let digest = pixel_digest(&canvas);

    let expected_path = golden_path(&format!("logo{}.pixels.sha256", size));
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim(), "pixels for {}px differ from golden", size);
}

#[test]
fn golden_pixels_1024() {
    check_golden(1024);
}

#[test]
fn golden_pixels_128() {
    check_golden(128);
}

#[test]
fn golden_pixels_48() {
    check_golden(48);
}

#[test]
fn golden_pixels_16() {
    check_golden(16);
}
