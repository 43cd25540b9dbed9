//! Terminal catalog viewer entry point.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::io::Write;

    use anyhow::Context;
    use clap::Parser;

    use catalogview_viewer::cli::Cli;
    use catalogview_viewer::render::render_text;
    use catalogview_viewer::{CatalogView, ViewerSession};

    let cli = Cli::parse();
    catalogview_observability::init();

    let source = cli.data_source();
    let reference = source
        .load()
        .with_context(|| format!("failed to load catalog data from {source:?}"))?;

    let mut session = ViewerSession::new(reference);
    for action in cli.filter_actions() {
        session.dispatch(action);
    }

    let visible = session.visible_products();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &visible).context("failed to write JSON output")?;
        writeln!(out)?;
    } else {
        let table = render_text(&CatalogView::from_products(&visible));
        out.write_all(table.as_bytes()).context("failed to write table")?;
    }

    tracing::info!(visible = visible.len(), "catalog rendered");
    Ok(())
}

// The browser build starts from `frontend::main` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
