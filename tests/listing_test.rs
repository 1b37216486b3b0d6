mod common;

use std::fs;
use std::path::Path;

use anyhow::Result;
use common::ScriptedEditor;
use relnav::core::config::ListingOrder;
use relnav::models::{ExtensionFilter, PathKey};
use relnav::services::fs::list_files_sync;
use relnav::{CommandOutcome, Config, ErrorKind, NavigationContext};
use tempfile::tempdir;

fn name_ordered() -> Config {
    let mut config = Config::default();
    config.listing.order = ListingOrder::Name;
    config
}

fn active(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

fn sorted(names: &[String]) -> Vec<String> {
    let mut names = names.to_vec();
    names.sort();
    names
}

#[tokio::test]
async fn cycles_through_real_directory() -> Result<()> {
    let temp_root = tempdir()?;
    let root = temp_root.path();
    for name in ["a.txt", "b.txt", "c.txt", "d.md"] {
        fs::write(root.join(name), name)?;
    }
    fs::create_dir(root.join("e.txt"))?;

    let ctx = NavigationContext::new(&name_ordered());
    let editor = ScriptedEditor::new(Some(active(root, "a.txt").as_str()));

    for expected in ["b.txt", "c.txt", "a.txt"] {
        match ctx.open_next(&editor).await {
            CommandOutcome::Opened { path } => assert!(path.ends_with(expected)),
            other => panic!("expected to open {expected}, got {other:?}"),
        }
    }

    match ctx.open_previous(&editor).await {
        CommandOutcome::Opened { path } => assert!(path.ends_with("c.txt")),
        other => panic!("expected to open c.txt, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn cached_listing_matches_direct_listing_across_key_changes() -> Result<()> {
    let temp_root = tempdir()?;
    let first = temp_root.path().join("first");
    let second = temp_root.path().join("second");
    fs::create_dir_all(&first)?;
    fs::create_dir_all(&second)?;
    for name in ["a.txt", "b.txt", "c.md", "d.md"] {
        fs::write(first.join(name), name)?;
    }
    for name in ["x.txt", "y.txt", "z.txt"] {
        fs::write(second.join(name), name)?;
    }

    let ctx = NavigationContext::new(&Config::default());
    let visits = [
        (&first, "a.txt"),
        (&first, "c.md"),
        (&second, "x.txt"),
        (&first, "b.txt"),
        (&second, "y.txt"),
    ];

    for (folder, name) in visits {
        let editor = ScriptedEditor::new(Some(active(folder, name).as_str()));
        ctx.open_next(&editor).await;

        let key = PathKey::new(folder.to_string_lossy());
        let filter = ExtensionFilter::new(&name[name.rfind('.').unwrap_or(0)..]);
        let direct = list_files_sync(&key, &filter)?;
        let entry = ctx.snapshot().await.expect("listing should be cached");

        assert_eq!(entry.folder, key);
        assert_eq!(entry.filter, filter);
        assert_eq!(sorted(entry.listing.names()), sorted(direct.names()));
    }
    Ok(())
}

#[tokio::test]
async fn new_files_appear_after_the_folder_context_changes() -> Result<()> {
    let temp_root = tempdir()?;
    let root = temp_root.path();
    fs::write(root.join("a.txt"), "a")?;
    fs::write(root.join("b.txt"), "b")?;

    let ctx = NavigationContext::new(&name_ordered());
    let editor = ScriptedEditor::new(Some(active(root, "a.txt").as_str()));
    ctx.open_next(&editor).await;

    fs::write(root.join("c.txt"), "c")?;
    let entry = ctx.snapshot().await.expect("listing should be cached");
    assert_eq!(entry.listing.len(), 2);

    ctx.deactivate().await;
    match ctx.open_next(&editor).await {
        CommandOutcome::Opened { path } => assert!(path.ends_with("c.txt")),
        other => panic!("expected to open c.txt, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn removed_folder_is_a_file_system_error() -> Result<()> {
    let temp_root = tempdir()?;
    let folder = temp_root.path().join("gone");
    fs::create_dir_all(&folder)?;
    let path = active(&folder, "a.txt");
    fs::remove_dir_all(&folder)?;

    let ctx = NavigationContext::new(&Config::default());
    let editor = ScriptedEditor::new(Some(path.as_str()));

    match ctx.show_files(&editor).await {
        CommandOutcome::Aborted { reason, .. } => {
            assert_eq!(reason, ErrorKind::FileSystemError)
        }
        other => panic!("expected a file system error, got {other:?}"),
    }
    assert!(editor.opened().is_empty());
    Ok(())
}
