use std::path::{Path, PathBuf};
use svg2compose::{ConvertOptions, convert_svg};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn fixtures_root() -> PathBuf {
    workspace_root().join("fixtures")
}

fn list_fixture_svg_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            if path.extension().is_some_and(|e| e == "svg") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

/// Set `SVG2COMPOSE_UPDATE_GOLDEN=1` to rewrite the `.golden.kt` files from the current output.
fn update_requested() -> bool {
    std::env::var_os("SVG2COMPOSE_UPDATE_GOLDEN").is_some_and(|v| v == "1")
}

#[test]
fn fixtures_match_golden_kotlin() {
    let fixtures = list_fixture_svg_files(&fixtures_root());
    assert!(
        !fixtures.is_empty(),
        "no fixtures found under {}",
        fixtures_root().display()
    );

    for svg_path in fixtures {
        let text = std::fs::read_to_string(&svg_path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", svg_path.display()));
        let options = ConvertOptions::default().with_file_path(&svg_path);
        let conversion = convert_svg(&text, &options)
            .unwrap_or_else(|e| panic!("conversion failed for {}: {e}", svg_path.display()));

        let golden_path = svg_path.with_extension("golden.kt");
        if update_requested() {
            std::fs::write(&golden_path, format!("{}\n", conversion.code)).unwrap_or_else(|e| {
                panic!("failed to write golden {}: {e}", golden_path.display())
            });
            continue;
        }
        let golden = std::fs::read_to_string(&golden_path).unwrap_or_else(|_| {
            panic!(
                "missing golden output {} (generate with `SVG2COMPOSE_UPDATE_GOLDEN=1`)",
                golden_path.display()
            )
        });

        assert_eq!(
            conversion.code,
            golden.trim_end_matches('\n'),
            "output mismatch for {} (update with `SVG2COMPOSE_UPDATE_GOLDEN=1`)",
            svg_path.display()
        );
    }
}
