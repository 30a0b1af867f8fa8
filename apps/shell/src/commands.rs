//! Subcommand handlers. Each writes to `out` and reports whether it succeeded.

use anyhow::{Context, Result, bail};
use orbit::domain::module::ModuleName;
use orbit::kernel::bootstrap::Console;
use orbit::kernel::route::{Params, params};
use orbit::kernel::store::AppStoreWriter;
use std::io::Write;
use tracing::debug;

pub(crate) fn list_routes(console: &Console, module: Option<ModuleName>, out: &mut impl Write) -> Result<()> {
    let rows: Vec<_> = match module {
        Some(module) => console.routes.module_routes(module).collect(),
        None => console.routes.iter().collect(),
    };
    for (name, entry) in rows {
        writeln!(out, "{name}\t{}\t{}\t{}", entry.page_id, entry.path, entry.title)?;
    }
    Ok(())
}

/// Returns `false` when duplicates were found.
pub(crate) fn check_routes(console: &Console, out: &mut impl Write) -> Result<bool> {
    let report = console.routes.uniqueness();
    if report.is_clean() {
        writeln!(out, "{} routes, all paths and page ids unique", console.routes.len())?;
        return Ok(true);
    }
    for path in &report.duplicate_paths {
        writeln!(out, "duplicate path: {path}")?;
    }
    for page_id in &report.duplicate_page_ids {
        writeln!(out, "duplicate page id: {page_id}")?;
    }
    Ok(false)
}

pub(crate) fn route_url(
    console: &Console,
    route: &str,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(entry) = console.routes.get(route) else {
        bail!("unknown route '{route}'");
    };
    let url = entry.url(&params(path_params), &params(query))?;
    writeln!(out, "{url}")?;
    Ok(())
}

pub(crate) fn render(console: &Console, writer: &AppStoreWriter, target: &str, out: &mut impl Write) -> Result<()> {
    let (path, query) = split_query(target);
    let Some((name, entry, path_params)) = console.routes.resolve(path) else {
        bail!("no route matches '{path}'");
    };
    debug!(route = name, page_id = %entry.page_id, "Rendering");
    writer.set_active_route(entry.page_id.clone(), path_params.clone());

    let view = console
        .render_route(name, &path_params, &query)
        .with_context(|| format!("route '{name}' disappeared"))?;
    write!(out, "{view}")?;
    Ok(())
}

pub(crate) fn landing(console: &Console, module: ModuleName, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", console.render_landing(module))?;
    Ok(())
}

pub(crate) fn modules(console: &Console, out: &mut impl Write) -> Result<()> {
    for (module, selection) in console.module_selection() {
        writeln!(out, "{module}\t{}\t{}\t{}", selection.label, selection.route, selection.description)?;
    }
    Ok(())
}

fn split_query(target: &str) -> (&str, Params) {
    match target.split_once('?') {
        Some((path, raw)) => (path, url::form_urlencoded::parse(raw.as_bytes()).into_owned().collect()),
        None => (target, Params::new()),
    }
}
