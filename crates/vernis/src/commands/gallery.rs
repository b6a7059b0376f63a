//! Gallery command - Write the component gallery and its documentation

use crate::config::VernisConfig;
use crate::error::CliError;
use clap::{Args, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use vernis_musea::docs::{
    generate_catalog, generate_category_index, generate_component_doc, generate_tags_index,
    CatalogEntry, DocOptions,
};
use vernis_musea::{builtin_arts, render_gallery, Art, GalleryOptions};

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum GalleryFormat {
    /// Standalone HTML page
    #[default]
    Html,
    /// Markdown catalog with one page per component
    Markdown,
    /// Catalog entries as JSON
    Json,
}

#[derive(Args)]
pub struct GalleryArgs {
    /// Output directory (defaults to `gallery.outDir` from the config file)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: GalleryFormat,
}

/// A generated file, relative to the output directory.
#[derive(Debug)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

impl OutputFile {
    fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

pub fn run(args: GalleryArgs, config: &VernisConfig) -> Result<(), CliError> {
    let start = Instant::now();
    let out_dir = args.out.unwrap_or_else(|| config.gallery.out_dir.clone());
    let arts = builtin_arts();
    let files = generate(&arts, args.format, config)?;

    for file in &files {
        write_file(&out_dir.join(&file.path), &file.contents)?;
    }

    eprintln!(
        "Wrote {} file(s) for {} components to {} in {:.2?}",
        files.len(),
        arts.len(),
        out_dir.display(),
        start.elapsed()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    let wrap = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, contents).map_err(wrap)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote");
    Ok(())
}

/// Produce the files for `format` without touching the filesystem.
pub fn generate(arts: &[Art], format: GalleryFormat, config: &VernisConfig) -> Result<Vec<OutputFile>, CliError> {
    let base_path = config.gallery.base_path.as_str();
    let entries: Vec<_> = arts.iter().map(|art| CatalogEntry::from_art(art, base_path)).collect();

    let files = match format {
        GalleryFormat::Html => {
            let options = GalleryOptions {
                title: config.gallery.title.clone(),
                data_slot: config.render.data_slot,
                ..GalleryOptions::default()
            };
            let output = render_gallery(arts, &options);
            tracing::debug!(hash = %output.hash, "gallery");
            vec![OutputFile::new(output.filename, output.html)]
        }
        GalleryFormat::Markdown => {
            let options = DocOptions {
                title: Some(config.gallery.title.clone()),
                base_path: base_path.to_string(),
                ..DocOptions::default()
            };
            let catalog = generate_catalog(&entries, &options);
            let mut files: Vec<_> = arts
                .iter()
                .map(|art| {
                    let doc = generate_component_doc(art, &options);
                    OutputFile::new(doc.filename, doc.markdown)
                })
                .collect();
            for category in &catalog.categories {
                let index = generate_category_index(&entries, category, &options);
                files.push(OutputFile::new(Path::new("categories").join(index.filename), index.markdown));
            }
            let tags = generate_tags_index(&entries);
            files.push(OutputFile::new(tags.filename, tags.markdown));
            files.push(OutputFile::new(catalog.filename, catalog.markdown));
            files
        }
        GalleryFormat::Json => vec![OutputFile::new("catalog.json", config.render.to_json(&entries)?)],
    };
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_is_one_file() {
        let arts = builtin_arts();
        let files = generate(&arts, GalleryFormat::Html, &VernisConfig::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, PathBuf::from("index.html"));
        assert!(files[0].contents.contains("<title>Vernis Gallery</title>"));
    }

    #[test]
    fn test_markdown_files() {
        let arts = builtin_arts();
        let files = generate(&arts, GalleryFormat::Markdown, &VernisConfig::default()).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.to_string_lossy().into_owned()).collect();
        assert!(paths.contains(&"README.md".to_string()));
        assert!(paths.contains(&"tags.md".to_string()));
        assert!(paths.contains(&"button.md".to_string()));
        assert!(paths.contains(&"landing-page.md".to_string()));
        assert!(paths.iter().any(|p| p.starts_with("categories")));
    }

    #[test]
    fn test_json_catalog() {
        let arts = builtin_arts();
        let files = generate(&arts, GalleryFormat::Json, &VernisConfig::default()).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&files[0].contents).unwrap();
        assert_eq!(entries.len(), arts.len());
        assert_eq!(entries[0]["title"], "Button");
        assert_eq!(entries[0]["component"], "button");
        assert_eq!(entries[0]["docPath"], "button.md");
    }

    #[test]
    fn test_writes_into_directory() {
        let dir = std::env::temp_dir().join(format!("vernis-gallery-{}", std::process::id()));
        let args = GalleryArgs {
            out: Some(dir.clone()),
            format: GalleryFormat::Html,
        };
        run(args, &VernisConfig::default()).unwrap();
        assert!(dir.join("index.html").is_file());
        fs::remove_dir_all(dir).unwrap();
    }
}
