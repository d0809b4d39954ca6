//! Render the site to static HTML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::Utc;
use serde::Serialize;

use sniper_core::Page;
use sniper_site::{ContactFormView, Site};

use super::RenderArgs;
use crate::context::Context;
use crate::output::format_bytes;

/// One written file.
#[derive(Debug, Serialize)]
pub struct RenderedFile {
    /// Page slug, or `404`.
    pub page: String,
    /// URL path the file answers.
    pub path: String,
    /// Location relative to the output directory.
    pub file: String,
    pub bytes: u64,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: String,
    hostname: &'a str,
    files: &'a [RenderedFile],
}

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let out = args.out.as_deref().unwrap_or(&ctx.config.render.out_dir);
    let out_dir = ctx.resolve_path(out);

    ctx.output.header("Rendering site");
    ctx.output.kv("Output", &out_dir.display().to_string());

    if args.clean && out_dir.exists() {
        fs::remove_dir_all(&out_dir)
            .with_context(|| format!("Failed to clean {}", out_dir.display()))?;
        ctx.output.debug(&format!("Removed {}", out_dir.display()));
    }

    let site = Site::default();
    ctx.output.step(1, 2, "Rendering pages");
    let progress = ctx.output.progress(Page::ALL.len() as u64 + 1, "pages");
    let files = render_site(&site, &out_dir, |file| {
        progress.set_message(file.file.clone());
        progress.inc(1);
    })?;
    progress.finish_and_clear();

    ctx.output.step(2, 2, "Writing manifest");
    let site_config = ctx.config.effective_site();
    let manifest = Manifest {
        generated_at: Utc::now().to_rfc3339(),
        hostname: site_config.hostname(),
        files: &files,
    };
    let manifest_json = serde_json::to_string_pretty(&manifest)?;
    fs::write(out_dir.join("manifest.json"), &manifest_json)
        .context("Failed to write manifest.json")?;

    if ctx.output.is_json() {
        ctx.output.json(&manifest);
        return Ok(());
    }

    for file in &files {
        ctx.output
            .list_item(&format!("{:<22} {}", file.file, format_bytes(file.bytes)));
    }
    let total: u64 = files.iter().map(|f| f.bytes).sum();
    ctx.output.success(&format!(
        "Rendered {} files ({})",
        files.len(),
        format_bytes(total)
    ));

    Ok(())
}

/// File path for a page: `/` is `index.html`, others `<slug>/index.html`.
pub fn page_file(page: Page) -> PathBuf {
    match page {
        Page::Home => PathBuf::from("index.html"),
        other => Path::new(other.slug()).join("index.html"),
    }
}

/// Write every page plus `404.html` under `out_dir`.
pub fn render_site(
    site: &Site,
    out_dir: &Path,
    mut on_written: impl FnMut(&RenderedFile),
) -> Result<Vec<RenderedFile>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let form = ContactFormView::new();
    let mut documents: Vec<(String, String, PathBuf, String)> = Page::ALL
        .iter()
        .map(|page| {
            (
                page.slug().to_string(),
                page.path().to_string(),
                page_file(*page),
                site.render_page(*page, &form),
            )
        })
        .collect();
    documents.push((
        "404".to_string(),
        "/404".to_string(),
        PathBuf::from("404.html"),
        site.render_not_found(),
    ));

    let mut files = Vec::with_capacity(documents.len());
    for (page, path, relative, html) in documents {
        let target = out_dir.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, &html)
            .with_context(|| format!("Failed to write {}", target.display()))?;

        let file = RenderedFile {
            page,
            path,
            file: relative.to_string_lossy().replace('\\', "/"),
            bytes: html.len() as u64,
        };
        tracing::debug!(file = %file.file, bytes = file.bytes, "page written");
        on_written(&file);
        files.push(file);
    }

    Ok(files)
}
