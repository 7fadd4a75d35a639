use crate::config::Config;
use crate::store::FileSaveHandler;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use marquee_common::{DirectorySource, RecordSource};
use marquee_editor::{FieldMutation, Notice, NoticeKind, PreviewRegistry, SelectedFile};
use marquee_sections::lookup;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Section to edit
    pub section: String,

    /// JSON file with a list of mutations to replay
    #[arg(short, long)]
    pub mutations: Option<PathBuf>,

    /// Image to attach, as KEY=PATH (e.g. image=./team.jpg)
    #[arg(short, long)]
    pub image: Vec<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

/// Seed an editor, replay mutations, and save through the file-backed handler
pub async fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let source = DirectorySource::new(config.get_content_dir(cwd));
    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };

    let entry = lookup(&args.section)?;
    let record = source.load(entry.key)?;
    let mut editor = entry.editor(record, PreviewRegistry::new(), config.render_options());

    editor.begin_edit()?;

    if let Some(path) = &args.mutations {
        for mutation in load_mutations(path)? {
            editor.apply(mutation)?;
        }
    }

    for arg in &args.image {
        let (key, path) = parse_image_arg(arg)?;
        let file = read_image(&PathBuf::from(cwd).join(path))?;
        let selected = editor.select_image(key, file);
        print_notices(editor.take_notices());
        selected?;
    }

    let handler = FileSaveHandler::new(&out_dir);
    let saved = editor.save(&handler).await;
    print_notices(editor.take_notices());
    saved?;

    println!(
        "  {} {} → {}",
        "✓".green(),
        entry.key,
        handler.payload_path(entry.key).display()
    );

    Ok(())
}

fn load_mutations(path: &Path) -> Result<Vec<FieldMutation>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read mutations from {}", path.display()))?;
    let mutations = serde_json::from_str(&content)
        .with_context(|| format!("Invalid mutation list in {}", path.display()))?;
    Ok(mutations)
}

fn parse_image_arg(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .filter(|(key, path)| !key.is_empty() && !path.is_empty())
        .ok_or_else(|| anyhow!("Invalid --image value '{}'; expected KEY=PATH", arg))
}

fn read_image(path: &Path) -> Result<SelectedFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Cannot read image {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("Image path has no file name: {}", path.display()))?;

    Ok(SelectedFile::new(name, mime_for(path), bytes))
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        let label = match notice.kind {
            NoticeKind::Success => "✓".green(),
            NoticeKind::Error => "✗".red(),
            NoticeKind::Discard | NoticeKind::Validation => "!".yellow(),
        };
        println!("  {} {}", label, notice.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_image_arg() {
        assert_eq!(parse_image_arg("image=./a.png").unwrap(), ("image", "./a.png"));
        assert!(parse_image_arg("image").is_err());
        assert!(parse_image_arg("=a.png").is_err());
    }

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_for(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for(Path::new("a")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_edit_replays_mutations_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        std::fs::create_dir_all(dir.path().join("content")).unwrap();
        std::fs::write(
            dir.path().join("content/expertise.json"),
            r#"{"heading": "Expertise", "tags": ["Compliance"]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("mutations.json"),
            r#"[
                {"type": "appendListItem", "list": "tags"},
                {"type": "updateListItem", "list": "tags", "index": 1, "subfield": "text", "value": "Logistics"}
            ]"#,
        )
        .unwrap();

        edit(
            EditArgs {
                section: "expertise".to_string(),
                mutations: Some(dir.path().join("mutations.json")),
                image: vec![],
                out_dir: None,
            },
            cwd,
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("out/expertise.json")).unwrap();
        let payload: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            payload,
            json!({"title": "Expertise", "tags": ["Compliance", "Logistics"]})
        );
    }

    #[tokio::test]
    async fn test_edit_rejects_oversized_image() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        std::fs::write(dir.path().join("huge.png"), vec![0u8; 2 * 1024 * 1024]).unwrap();

        let result = edit(
            EditArgs {
                section: "about".to_string(),
                mutations: None,
                image: vec!["image=huge.png".to_string()],
                out_dir: None,
            },
            cwd,
        )
        .await;

        assert!(result.is_err());
        assert!(!dir.path().join("out/about.json").exists());
    }

    #[tokio::test]
    async fn test_edit_persists_durable_image_path() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        std::fs::write(dir.path().join("team.jpg"), vec![1u8, 2, 3]).unwrap();

        edit(
            EditArgs {
                section: "about".to_string(),
                mutations: None,
                image: vec!["image=team.jpg".to_string()],
                out_dir: None,
            },
            cwd,
        )
        .await
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("out/about.json")).unwrap();
        let payload: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(payload["image"], "assets/about/team.jpg");
        assert!(payload.get("imageFile").is_none());
        assert!(dir.path().join("out/assets/about/team.jpg").exists());
    }
}
