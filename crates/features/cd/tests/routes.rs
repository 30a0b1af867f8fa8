use orbit_domain::features::FeatureFlags;
use orbit_domain::module::ModuleName;
use orbit_kernel::route::params;

#[test]
fn cd_routes_are_unique() {
    let table = orbit_cd::routes();
    assert!(table.validate_unique().is_ok());
    assert_eq!(table.module_routes(ModuleName::Cd).count(), table.len());
}

#[test]
fn pipeline_studio_url() {
    let table = orbit_cd::routes();
    let studio = table.get("cd-pipeline-studio").expect("studio route");
    let url = studio
        .url(
            &params([
                ("accountId", "acc"),
                ("orgIdentifier", "default"),
                ("projectIdentifier", "web"),
                ("pipelineIdentifier", "deploy_prod"),
            ]),
            &params([("view", "yaml")]),
        )
        .expect("url");
    assert_eq!(url, "/account/acc/cd/orgs/default/projects/web/pipelines/deploy_prod/pipeline-studio?view=yaml");
}

#[test]
fn gated_routes_declare_flags() {
    let table = orbit_cd::routes();
    assert_eq!(table.get("cd-gitops").map(|e| e.flags), Some(FeatureFlags::GITOPS));
    assert_eq!(table.get("cd-templates").map(|e| e.flags), Some(FeatureFlags::PIPELINE_TEMPLATES));
}

#[test]
fn deployment_filter_is_rsql() {
    let filter = orbit_cd::deployment_filter(Some("checkout")).expect("filter");
    assert_eq!(
        filter.as_str(),
        "(module==CD;status=in=(Running,Waiting,Failed);serviceIdentifier==checkout)"
    );
    assert!(orbit_cd::deployment_filter(Some("bad service")).is_err());
}
