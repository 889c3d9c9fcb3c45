use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use wineicon::{render, IconSpec, IconStyle};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(format!("{name}.sha256"));
    p
}

fn check_golden(name: &str, style: IconStyle) {
    let icon = render(&IconSpec::for_style(style)).expect("render");
    let digest = hex::encode(Sha256::digest(&icon.png_data));

    let expected_path = golden_path(name);
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
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
    assert_eq!(digest, exp.trim());
}

#[test]
fn golden_silhouette_icon() {
    check_golden("silhouette", IconStyle::Silhouette);
}

#[test]
fn golden_matte_icon() {
    check_golden("matte", IconStyle::Matte);
}
