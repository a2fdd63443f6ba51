// build.rs

use glob::glob;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A sample result table shipped in `data/`.
#[derive(Debug)]
struct Fixture {
    pub name: String,
    pub path: PathBuf,
}

/// Discovers all fixtures by scanning the `data/` directory.
fn get_all_fixtures() -> Vec<Fixture> {
    glob("data/*.data")
        .expect("Failed to read glob pattern")
        .filter_map(|entry| {
            let path = entry.ok()?;
            let name = path
                .file_stem()?
                .to_string_lossy()
                .to_string()
                .replace(['-', '.'], "_");
            Some(Fixture { name, path })
        })
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=data");

    // Get the Cargo output directory where we will place the generated code.
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("fixture_tests.rs");
    let mut file = BufWriter::new(File::create(&dest_path).unwrap());

    // Generate a separate `#[test]` function for each fixture.
    for fixture in get_all_fixtures() {
        let path = fixture.path.canonicalize().unwrap();
        writeln!(
            file,
            r#"
#[test]
fn fixture_loads_{name}() -> anyhow::Result<()> {{
    check_fixture("{name}", "{path}")
}}
"#,
            name = fixture.name,
            path = path.to_str().unwrap().escape_default(),
        )
        .unwrap();
    }
}
