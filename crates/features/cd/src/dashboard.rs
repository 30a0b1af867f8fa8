use orbit_kernel::factory::DashboardContext;
use orbit_kernel::rsql::{self, Rsql, RsqlError};
use orbit_kernel::view::View;

const ACTIVE_STATUSES: [&str; 3] = ["Running", "Waiting", "Failed"];

/// Filter the dashboard sends to the executions API.
///
/// # Errors
/// Returns [`RsqlError`] if `service` contains a reserved RSQL character.
pub fn deployment_filter(service: Option<&str>) -> Result<Rsql, RsqlError> {
    let mut terms = vec![rsql::equals("module", "CD")?, rsql::includes("status", ACTIVE_STATUSES)?];
    if let Some(service) = service {
        terms.push(rsql::equals("serviceIdentifier", service)?);
    }
    rsql::and(terms)
}

pub(crate) fn landing(ctx: &DashboardContext<'_>) -> View {
    let view = View::new("Deployments overview").line(format!("account: {}", ctx.account_id));
    match deployment_filter(None) {
        Ok(filter) => view.line(format!("active deployments: filter={filter}")),
        Err(err) => view.line(format!("filter unavailable: {err}")),
    }
}
