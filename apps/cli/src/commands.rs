use crate::args::Policy;
use anyhow::{Context, Result};
use serde::Serialize;
use wpt::domain::brand::Brand;
use wpt::domain::config::ApiConfig;
use wpt::domain::tenant::{ResolutionPolicy, TenantRoute};
use wpt::features::access::Access;
use wpt::features::branding::{BrandFlags, Branding, NavigationRequest, NavigationView};
use wpt::features::tenancy::{Resolution, Tenancy};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutput {
    path: String,
    resolution: Resolution,
    brand: Brand,
    flags: BrandFlags,
    links: Vec<LinkOutput>,
}

#[derive(Debug, Serialize)]
pub struct LinkOutput {
    target: String,
    href: String,
}

#[derive(Debug, Serialize)]
pub struct TenantsOutput {
    policy: ResolutionPolicy,
    routes: Vec<TenantRoute>,
}

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    path: String,
    platform: bool,
    login: String,
    cookies: String,
}

pub fn resolve(
    mut config: ApiConfig,
    path: &str,
    targets: &[String],
    policy: Option<Policy>,
) -> Result<ResolveOutput> {
    if let Some(policy) = policy {
        config.tenancy.policy = policy.into();
    }
    let (tenancy, branding) = slices(&config)?;

    let ctx = branding.context(&tenancy, path);
    let links = targets
        .iter()
        .map(|target| LinkOutput { href: ctx.with_tenant(target), target: target.clone() })
        .collect();

    Ok(ResolveOutput {
        path: path.to_owned(),
        resolution: ctx.resolution().clone(),
        brand: ctx.brand(),
        flags: ctx.flags(),
        links,
    })
}

pub fn nav(config: &ApiConfig, path: &str, signed_in: bool, query: Option<String>) -> Result<NavigationView> {
    let (tenancy, branding) = slices(config)?;
    let mut request = NavigationRequest::new(path).signed_in(signed_in);
    request.query = query;
    Ok(branding.navigation(&tenancy, &request))
}

pub fn login(config: &ApiConfig, path: &str) -> Result<LoginOutput> {
    let access = Access::from_config(&config.access).context("Invalid access configuration")?;
    Ok(LoginOutput {
        path: path.to_owned(),
        platform: access.is_platform_path(path),
        login: access.login_path(path).to_owned(),
        cookies: access.cookies_path(path),
    })
}

pub fn tenants(config: &ApiConfig) -> Result<TenantsOutput> {
    let tenancy = Tenancy::from_config(&config.tenancy).context("Invalid tenant routes")?;
    Ok(TenantsOutput { policy: tenancy.policy(), routes: tenancy.table().routes().to_vec() })
}

fn slices(config: &ApiConfig) -> Result<(Tenancy, Branding)> {
    let tenancy = Tenancy::from_config(&config.tenancy).context("Invalid tenant routes")?;
    let branding = Branding::from_config(&config.branding).context("Invalid branding configuration")?;
    Ok((tenancy, branding))
}
