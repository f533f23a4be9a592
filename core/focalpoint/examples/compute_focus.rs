//! Compute focal points for the fixture detection responses and show the
//! square thumbnail crop each one produces.
//!
//! Usage:
//!   cargo run --example compute_focus

use focalpoint::{centered_crop, focal_crop, parse_detect_labels, LabelCollection};

const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures");

fn main() {
    let fixtures = [
        "detect_labels_person.json",
        "detect_labels_no_person.json",
        "detect_labels_scene_only.json",
    ];

    // A typical camera frame
    let (width, height) = (4000u32, 3000u32);

    for fixture in &fixtures {
        let path = format!("{FIXTURE_DIR}/{fixture}");
        let json = std::fs::read_to_string(&path).unwrap();
        let labels = parse_detect_labels(&json).unwrap();

        println!("=== {fixture} ===");

        let mut collection = LabelCollection::new();
        for label in &labels {
            let located = label.instances.len();
            println!(
                "  {} (confidence {:.1}, {} instance{})",
                label.name,
                label.confidence,
                located,
                if located == 1 { "" } else { "s" },
            );
            collection.add(label);
        }

        match collection.center_of_gravity() {
            Some(focus) => {
                let crop = focal_crop(width, height, 1.0, focus).unwrap();
                println!(
                    "  → focal point ({:.4}, {:.4}){}",
                    focus.top,
                    focus.left,
                    if collection.contains_person() {
                        ", person priority"
                    } else {
                        ""
                    },
                );
                println!(
                    "  → crop ({}, {}, {}x{})",
                    crop.x, crop.y, crop.width, crop.height
                );
            }
            None => {
                let crop = centered_crop(width, height, 1.0).unwrap();
                println!("  → NO FOCAL POINT — falling back to center framing");
                println!(
                    "  → crop ({}, {}, {}x{})",
                    crop.x, crop.y, crop.width, crop.height
                );
            }
        }
        println!();
    }
}
