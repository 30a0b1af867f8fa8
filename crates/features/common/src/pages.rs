use orbit_domain::module::ModuleSet;
use orbit_kernel::factory::TriggerForm;
use orbit_kernel::view::{PageContext, View};

/// Frames a page with the account header.
pub fn account_layout(view: View, ctx: &PageContext<'_>) -> View {
    View::new(format!("{} | account {}", view.title, ctx.param("accountId"))).lines(view.lines)
}

pub(crate) fn home(ctx: &PageContext<'_>) -> View {
    let modules: Vec<String> = ctx.state.license.modules.modules().map(|m| m.to_string()).collect();
    View::new("Home")
        .line(format!("edition: {}", ctx.state.license.edition))
        .line(format!("licensed modules: {}", modules.join(", ")))
}

pub(crate) fn settings(ctx: &PageContext<'_>) -> View {
    let tab = ctx.query.get("tab").map_or("overview", String::as_str);
    View::new("Account Settings").line(format!("tab: {tab}"))
}

pub(crate) fn modules(ctx: &PageContext<'_>) -> View {
    let licensed = ctx.state.license.modules;
    ModuleSet::ALL.modules().fold(View::new("Modules"), |view, module| {
        let mark = if licensed.has(module) { "x" } else { " " };
        view.line(format!("[{mark}] {module}"))
    })
}

pub(crate) fn default_trigger(form: &TriggerForm) -> View {
    let view = View::new(format!("Trigger {}", form.identifier)).line(format!("type: {}", form.slot));
    view.lines(form.values.iter().map(|(k, v)| format!("{k}: {v}")))
}
