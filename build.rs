//! Build script to generate the embedded word catalog
//!
//! Reads the catalog file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/catalog.txt",
        &Path::new(&out_dir).join("catalog.rs"),
        "EMBEDDED",
        "Built-in word catalog",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/catalog.txt");
}

/// Map a subcategory slug to the Rust path of its category variant
fn category_path(slug: &str) -> Option<&'static str> {
    let path = match slug {
        "fruit" => "Category::Food(FoodKind::Fruit)",
        "vegetable" => "Category::Food(FoodKind::Vegetable)",
        "dish" => "Category::Food(FoodKind::Dish)",
        "drink" => "Category::Food(FoodKind::Drink)",
        "spice" => "Category::Food(FoodKind::Spice)",
        "city" => "Category::Place(PlaceKind::City)",
        "state" => "Category::Place(PlaceKind::State)",
        "country" => "Category::Place(PlaceKind::Country)",
        "weekday" => "Category::Calendar(CalendarKind::Weekday)",
        "month" => "Category::Calendar(CalendarKind::Month)",
        _ => return None,
    };
    Some(path)
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut entries = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_no = index + 1;
        let (slug, word) = trimmed.split_once(':').unwrap_or_else(|| {
            panic!("{input_path}:{line_no}: expected '<subcategory>: <word>'")
        });
        let slug = slug.trim();
        let path = category_path(slug).unwrap_or_else(|| {
            panic!("{input_path}:{line_no}: unknown subcategory '{slug}'")
        });

        entries.push((path, word.trim().to_string()));
    }

    assert!(!entries.is_empty(), "{input_path} holds no words");
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(Category, &str)] = &[").unwrap();

    for (path, word) in entries {
        writeln!(output, "    ({path}, {word:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
