//! Plain-text tree rendering
//!
//! The whole tree is built into one string and written to the sink once.
//! Sibling subtrees may be rendered in parallel; results are joined in
//! index order so the output is identical to a sequential render.

use std::io::Write;
use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;

use super::config::RenderConfig;
use super::listing::{DirectoryEntry, list_directory};
use super::utils::{child_indent, connector, format_size_suffix, with_workers};

/// Indent handed to each top-level branch. Starts with the newline that
/// separates a directory line from its first child.
const ROOT_PREFIX: &str = "\n";

/// Render the directory at `root` and write it to `out`.
///
/// Errors listing `root` itself abort the render. Errors listing any
/// subdirectory are swallowed and that directory is shown without children.
pub fn render_tree<W: Write>(out: &mut W, root: &Path, config: &RenderConfig) -> Result<()> {
    let entries = list_directory(root, config.include_files)?;

    let result = with_workers(config, || {
        let mut result = String::new();
        for branch in render_siblings(root, &entries, ROOT_PREFIX, config) {
            result.push_str(&branch);
            result.push('\n');
        }
        result
    });

    out.write_all(result.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render the entry at `index` of `siblings`, including its subtree.
///
/// `indent` is the accumulated prefix for lines below this entry; it begins
/// with a newline.
pub fn render_node(
    parent: &Path,
    siblings: &[DirectoryEntry],
    index: usize,
    indent: &str,
    config: &RenderConfig,
) -> String {
    let entry = &siblings[index];
    let mut line = String::new();
    line.push_str(connector(index, siblings.len()));
    line.push_str(&entry.name());

    if entry.is_dir {
        let path = parent.join(&entry.file_name);
        let children = list_directory(&path, config.include_files).unwrap_or_else(|e| {
            debug!(error = %e, "skipping unreadable directory");
            Vec::new()
        });
        for child in render_siblings(&path, &children, indent, config) {
            line.push_str(indent);
            line.push_str(&child);
        }
    } else {
        line.push_str(&format_size_suffix(entry.size));
    }

    line
}

/// Render every entry of one listing, in order.
fn render_siblings(
    parent: &Path,
    entries: &[DirectoryEntry],
    indent: &str,
    config: &RenderConfig,
) -> Vec<String> {
    let len = entries.len();
    let render = |i: usize| {
        let next = child_indent(indent, i, len);
        render_node(parent, entries, i, &next, config)
    };

    if config.is_parallel() {
        (0..len).into_par_iter().map(render).collect()
    } else {
        (0..len).map(render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn render(root: &Path, include_files: bool) -> String {
        let mut out = Vec::new();
        render_tree(&mut out, root, &RenderConfig::new(include_files)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dirs_sorted_with_connectors() {
        let dir = TempDir::new().unwrap();
        for name in ["b", "a", "c"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        assert_eq!(render(dir.path(), false), "├───a\n├───b\n└───c\n");
    }

    #[test]
    fn test_file_size_labels() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("empty.txt"), "").unwrap();
        fs::write(dir.path().join("full.txt"), "x".repeat(42)).unwrap();

        assert_eq!(
            render(dir.path(), true),
            "├───empty.txt (empty)\n└───full.txt (42b)\n"
        );
    }

    #[test]
    fn test_files_only_without_flag_is_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();

        assert_eq!(render(dir.path(), false), "");
    }

    #[test]
    fn test_nested_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("x")).unwrap();
        fs::write(dir.path().join("x").join("y.txt"), "hello").unwrap();

        assert_eq!(render(dir.path(), true), "└───x\n\t└───y.txt (5b)\n");
    }

    #[test]
    fn test_continuation_bars() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a").join("a1")).unwrap();
        fs::create_dir_all(dir.path().join("a").join("a2").join("deep")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b").join("f"), "1234").unwrap();

        let expected = "├───a\n\
                        │\t├───a1\n\
                        │\t└───a2\n\
                        │\t\t└───deep\n\
                        └───b\n\
                        \t└───f (4b)\n";
        assert_eq!(render(dir.path(), true), expected);
    }

    #[test]
    fn test_render_node_unreadable_directory_has_no_children() {
        let dir = TempDir::new().unwrap();
        let siblings = vec![DirectoryEntry::dir("ghost"), DirectoryEntry::dir("z")];
        fs::create_dir_all(dir.path().join("z").join("inner")).unwrap();

        let config = RenderConfig::new(true);
        assert_eq!(
            render_node(dir.path(), &siblings, 0, "\n│\t", &config),
            "├───ghost"
        );
        assert_eq!(
            render_node(dir.path(), &siblings, 1, "\n\t", &config),
            "└───z\n\t└───inner"
        );
    }

    #[test]
    fn test_render_node_file() {
        let config = RenderConfig::new(true);
        let siblings = vec![DirectoryEntry::file("a", 0), DirectoryEntry::file("b", 7)];
        let parent = Path::new("/unused");
        assert_eq!(render_node(parent, &siblings, 0, "\n│\t", &config), "├───a (empty)");
        assert_eq!(render_node(parent, &siblings, 1, "\n\t", &config), "└───b (7b)");
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let result = render_tree(
            &mut out,
            &dir.path().join("missing"),
            &RenderConfig::default(),
        );
        assert!(result.is_err());
        assert!(out.is_empty(), "nothing should be written on failure");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = TempDir::new().unwrap();
        for i in 0..6 {
            for j in 0..4 {
                let sub = dir.path().join(format!("d{}", i)).join(format!("s{}", j));
                fs::create_dir_all(&sub).unwrap();
                fs::write(sub.join("f.txt"), "x".repeat(i * j)).unwrap();
            }
        }

        let sequential = render(dir.path(), true);
        for workers in [0, 2, 4] {
            let config = RenderConfig {
                include_files: true,
                parallel_workers: workers,
            };
            let mut out = Vec::new();
            render_tree(&mut out, dir.path(), &config).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), sequential);
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_directory_keeps_children() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let bad = dir.path().join(OsStr::from_bytes(b"bad\xff"));
        fs::create_dir(&bad).unwrap();
        fs::write(bad.join("inner.txt"), "abc").unwrap();

        assert_eq!(
            render(dir.path(), true),
            "└───bad\u{fffd}\n\t└───inner.txt (3b)\n"
        );
    }
}
