//! Navigation bar and footer view models.
//!
//! Renderers are pure: a [`BrandContext`] plus the request shape go in, a serializable
//! view comes out. Nothing here touches I/O.

use crate::context::{BrandContext, BrandFlags};
use serde::{Deserialize, Serialize};
use wpt_kernel::domain::brand::{Brand, Logo, TouristRegion};
use wpt_kernel::domain::constants::{EVENT_REGISTRATION_PATH, EVENTS_PATH, FROM_EVENTS_QUERY};

const EVENTS_ITEM: &str = "Eventos";
const MS_MAIN_ITEMS: [&str; 2] = [EVENTS_ITEM, "Parceiros"];
const GUATA_LABEL: &str = "Guatá";
const GUATA_PATH: &str = "/guata";
const REGIONS_LABEL: &str = "Regiões Turísticas";
const REGIONS_IN_MENU: usize = 4;
const ACCOUNT_LABEL: &str = "Minha Conta";

/// What the caller knows about the current page.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequest {
    /// Current pathname; a `?query` suffix is accepted.
    pub path: String,
    /// Query string without the leading `?`.
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub signed_in: bool,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Self::default() }
    }

    #[must_use]
    pub const fn signed_in(mut self, signed_in: bool) -> Self {
        self.signed_in = signed_in;
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Pathname and query, with an inline `?query` split off the path.
    fn parts(&self) -> (&str, &str) {
        let (path, inline) = self.path.split_once('?').unwrap_or((self.path.as_str(), ""));
        let query = self.query.as_deref().unwrap_or(inline).trim_start_matches('?');
        (path, query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub name: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegionLink {
    pub slug: String,
    pub name: String,
    pub color: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegionsMenu {
    pub label: String,
    pub regions: Vec<RegionLink>,
    pub see_all: NavLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Primary,
    Secondary,
    Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NavAction {
    pub kind: ActionKind,
    pub label: String,
    pub href: String,
}

/// Everything a navigation bar needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    /// `true` for the placeholder served when branding is unavailable.
    pub skeleton: bool,
    pub brand: Option<Brand>,
    pub flags: BrandFlags,
    pub logo: Option<Logo>,
    pub home_href: String,
    /// Only the events entry is shown (visitor came from the events landing page).
    pub events_only: bool,
    pub items: Vec<NavLink>,
    pub authenticated_items: Vec<NavLink>,
    pub regions_menu: Option<RegionsMenu>,
    pub actions: Vec<NavAction>,
}

impl NavigationView {
    /// Minimal placeholder: no brand, no links, home at `/`.
    pub fn skeleton() -> Self {
        Self {
            skeleton: true,
            brand: None,
            flags: BrandFlags::default(),
            logo: None,
            home_href: "/".to_owned(),
            events_only: false,
            items: Vec::new(),
            authenticated_items: Vec::new(),
            regions_menu: None,
            actions: Vec::new(),
        }
    }

    /// Builds the navigation bar for `request` under `ctx`.
    ///
    /// `regions` is the full region list; the MS menu shows the first few of them.
    pub fn render(
        ctx: &BrandContext,
        request: &NavigationRequest,
        regions: &[TouristRegion],
        ms_home: &str,
    ) -> Self {
        let (path, query) = request.parts();
        let config = ctx.config();
        let link = |name: &str, target: &str| {
            let href = ctx.with_tenant(target);
            NavLink { name: name.to_owned(), active: href == path, href }
        };

        let events_only = path == EVENTS_PATH
            || (ctx.resolution().is_tenant()
                && path == ctx.with_tenant(EVENT_REGISTRATION_PATH)
                && query.split('&').any(|pair| pair == FROM_EVENTS_QUERY));

        let items: Vec<NavLink> = if events_only {
            config
                .navigation
                .iter()
                .filter(|item| item.name == EVENTS_ITEM)
                .map(|item| NavLink { active: true, ..link(&item.name, &item.path) })
                .collect()
        } else if ctx.is_ms() {
            config
                .navigation
                .iter()
                .filter(|item| MS_MAIN_ITEMS.contains(&item.name.as_str()))
                .map(|item| link(&item.name, &item.path))
                .chain(std::iter::once(link(GUATA_LABEL, GUATA_PATH)))
                .collect()
        } else {
            config.navigation.iter().map(|item| link(&item.name, &item.path)).collect()
        };

        let authenticated_items = if request.signed_in {
            config.authenticated_navigation.iter().map(|item| link(&item.name, &item.path)).collect()
        } else {
            Vec::new()
        };

        let regions_menu = (ctx.is_ms() && !events_only).then(|| RegionsMenu {
            label: REGIONS_LABEL.to_owned(),
            regions: regions
                .iter()
                .take(REGIONS_IN_MENU)
                .map(|region| RegionLink {
                    slug: region.slug.clone(),
                    name: region.name.clone(),
                    color: region.color.clone(),
                    href: ctx.with_tenant(&format!("/regioes/{}", region.slug)),
                })
                .collect(),
            see_all: link("Ver todas as regiões", "/mapa-turistico"),
        });

        let actions = if events_only {
            Vec::new()
        } else if request.signed_in {
            vec![NavAction {
                kind: ActionKind::Account,
                label: ACCOUNT_LABEL.to_owned(),
                href: ctx.with_tenant("/profile"),
            }]
        } else if ctx.is_overflow_one() {
            vec![
                NavAction {
                    kind: ActionKind::Primary,
                    label: config.cta.primary.clone(),
                    href: "/contato".to_owned(),
                },
                NavAction {
                    kind: ActionKind::Secondary,
                    label: config.cta.secondary.clone(),
                    href: ms_home.to_owned(),
                },
            ]
        } else {
            vec![
                NavAction {
                    kind: ActionKind::Secondary,
                    label: config.cta.secondary.clone(),
                    href: ctx.with_tenant("/login"),
                },
                NavAction {
                    kind: ActionKind::Primary,
                    label: config.cta.primary.clone(),
                    href: ctx.with_tenant("/register"),
                },
            ]
        };

        let home_href = if ctx.is_overflow_one() { "/".to_owned() } else { ctx.with_tenant("/") };

        Self {
            skeleton: false,
            brand: Some(ctx.brand()),
            flags: ctx.flags(),
            logo: Some(config.logo.clone()),
            home_href,
            events_only,
            items,
            authenticated_items,
            regions_menu,
            actions,
        }
    }
}

/// Footer view: brand links plus legal pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub brand: Brand,
    pub brand_name: String,
    pub home_href: String,
    pub links: Vec<NavLink>,
    pub legal: Vec<NavLink>,
}

impl FooterView {
    pub fn render(ctx: &BrandContext, path: &str) -> Self {
        let config = ctx.config();
        let path = path.split_once('?').map_or(path, |(p, _)| p);
        let link = |name: &str, href: String| NavLink { name: name.to_owned(), active: href == path, href };

        let under_home = |page: &str| {
            if config.home == "/" { page.to_owned() } else { format!("{}{page}", config.home) }
        };

        Self {
            brand: ctx.brand(),
            brand_name: config.name.clone(),
            home_href: ctx.with_tenant("/"),
            links: config
                .navigation
                .iter()
                .map(|item| link(&item.name, ctx.with_tenant(&item.path)))
                .collect(),
            legal: vec![
                link("Privacidade", under_home("/privacidade")),
                link("Termos de Uso", under_home("/termos")),
                link("Cookies", under_home("/cookies")),
            ],
        }
    }
}
