use anyhow::Result;
use dirlist::models::file_entry::EntryKind;
use dirlist::services::fs::listing::{list_dir, list_dir_async, to_json};
use std::fs;
use std::path::MAIN_SEPARATOR;
use tempfile::tempdir;

#[test]
fn one_descriptor_per_entry() -> Result<()> {
    let temp_root = tempdir()?;
    let root = temp_root.path();

    for name in ["a.txt", "b.tar.gz", "README", ".hidden"] {
        fs::write(root.join(name), name)?;
    }
    fs::create_dir(root.join("nested"))?;
    fs::write(root.join("nested").join("deep.txt"), "not listed")?;

    let parent = root.to_string_lossy().into_owned();
    let entries = list_dir(&parent)?;
    assert_eq!(entries.len(), 5, "nested contents must not be listed");

    for entry in &entries {
        assert_eq!(entry.path, format!("{parent}{MAIN_SEPARATOR}{}", entry.name));
        let expected_kind = if entry.name == "nested" {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        assert_eq!(entry.kind, expected_kind);
        if entry.kind == EntryKind::File {
            assert_eq!(entry.size, entry.name.len() as u64);
        }
    }

    let ext_of = |name: &str| {
        entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.extension.clone())
    };
    assert_eq!(ext_of("b.tar.gz").as_deref(), Some(".gz"));
    assert_eq!(ext_of("README").as_deref(), Some(""));
    assert_eq!(ext_of(".hidden").as_deref(), Some(".hidden"));

    Ok(())
}

#[test]
fn repeated_listing_is_stable() -> Result<()> {
    let temp_root = tempdir()?;
    for i in 0..10 {
        fs::write(temp_root.path().join(format!("f{i}.log")), "x")?;
    }
    let parent = temp_root.path().to_string_lossy().into_owned();
    assert_eq!(to_json(&list_dir(&parent)?)?, to_json(&list_dir(&parent)?)?);
    Ok(())
}

#[tokio::test]
async fn json_round_trip_keeps_five_fields() -> Result<()> {
    let temp_root = tempdir()?;
    fs::write(temp_root.path().join("data.csv"), "1,2,3")?;
    fs::create_dir(temp_root.path().join("out"))?;

    let parent = temp_root.path().to_string_lossy().into_owned();
    let entries = list_dir_async(&parent).await?;
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&to_json(&entries)?)?;

    assert_eq!(parsed.len(), entries.len());
    for (value, entry) in parsed.iter().zip(&entries) {
        let obj = value.as_object().expect("descriptor is an object");
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["ext", "name", "path", "size", "type"]);
        assert_eq!(value["name"], entry.name.as_str());
        assert_eq!(value["path"], entry.path.as_str());
        assert_eq!(value["type"], entry.kind.as_str());
        assert_eq!(value["size"], entry.size);
        assert_eq!(value["ext"], entry.extension.as_str());
    }
    Ok(())
}
