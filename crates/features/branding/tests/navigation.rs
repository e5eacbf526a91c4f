use wpt_branding::{ActionKind, Branding, NavigationRequest, NavigationView};
use wpt_kernel::domain::brand::Brand;
use wpt_kernel::domain::config::{BrandingConfig, TenancyConfig};
use wpt_tenancy::Tenancy;

fn setup() -> (Tenancy, Branding) {
    let tenancy = Tenancy::from_config(&TenancyConfig::default()).expect("default tenancy");
    let branding = Branding::from_config(&BrandingConfig::default()).expect("default branding");
    (tenancy, branding)
}

fn hrefs(view: &NavigationView) -> Vec<&str> {
    view.items.iter().map(|item| item.href.as_str()).collect()
}

#[test]
fn ms_tenant_shows_reduced_menu_with_regions() {
    let (tenancy, branding) = setup();
    let view = branding.navigation(&tenancy, &NavigationRequest::new("/ms/eventos"));

    assert_eq!(view.brand, Some(Brand::DescubraMs));
    assert!(view.flags.is_ms);
    assert_eq!(hrefs(&view), ["/ms/eventos", "/ms/parceiros", "/ms/guata"]);
    assert!(view.items[0].active);
    assert_eq!(view.home_href, "/ms");

    let menu = view.regions_menu.expect("MS shows the regions menu");
    assert_eq!(menu.regions.len(), 4);
    assert_eq!(menu.regions[0].href, "/ms/regioes/pantanal");
    assert_eq!(menu.see_all.href, "/ms/mapa-turistico");

    let actions: Vec<_> = view.actions.iter().map(|a| (a.kind, a.href.as_str())).collect();
    assert_eq!(
        actions,
        [(ActionKind::Secondary, "/ms/login"), (ActionKind::Primary, "/ms/register")]
    );
}

#[test]
fn overflow_one_home_links_to_contact_and_ms_portal() {
    let (tenancy, branding) = setup();
    let view = branding.navigation(&tenancy, &NavigationRequest::new("/"));

    assert_eq!(view.brand, Some(Brand::OverflowOne));
    assert_eq!(view.home_href, "/");
    assert_eq!(view.items.len(), 5);
    assert!(view.regions_menu.is_none());
    assert_eq!(view.actions[0].href, "/contato");
    assert_eq!(view.actions[1].href, "/descubrams");
}

#[test]
fn flowtrip_segment_selects_flowtrip_with_global_links() {
    let (tenancy, branding) = setup();
    let view = branding.navigation(&tenancy, &NavigationRequest::new("/solucoes"));

    assert_eq!(view.brand, Some(Brand::FlowTrip));
    assert!(view.items.iter().any(|item| item.href == "/solucoes" && item.active));
    assert_eq!(view.actions[0].href, "/login");
    assert_eq!(view.actions[1].href, "/register");
}

#[test]
fn events_page_is_events_only() {
    let (tenancy, branding) = setup();
    let view = branding.navigation(&tenancy, &NavigationRequest::new("/eventos"));

    assert_eq!(view.brand, Some(Brand::DescubraMs));
    assert!(view.events_only);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].name, "Eventos");
    assert_eq!(view.items[0].href, "/descubrams/eventos");
    assert!(view.items[0].active);
    assert!(view.actions.is_empty());
    assert!(view.regions_menu.is_none());
}

#[test]
fn event_registration_from_events_is_events_only() {
    let (tenancy, branding) = setup();

    let from_events =
        NavigationRequest::new("/descubrams/cadastrar-evento").query("from=eventos");
    assert!(branding.navigation(&tenancy, &from_events).events_only);

    let inline = NavigationRequest::new("/descubrams/cadastrar-evento?lang=pt&from=eventos");
    assert!(branding.navigation(&tenancy, &inline).events_only);

    let direct = NavigationRequest::new("/descubrams/cadastrar-evento");
    assert!(!branding.navigation(&tenancy, &direct).events_only);
}

#[test]
fn global_event_registration_keeps_full_menu() {
    let (tenancy, branding) = setup();
    let view = branding.navigation(
        &tenancy,
        &NavigationRequest::new("/cadastrar-evento").query("from=eventos"),
    );

    assert_eq!(view.brand, Some(Brand::OverflowOne));
    assert!(!view.events_only);
    assert!(!view.items.is_empty());
    assert_eq!(view.actions.len(), 2);
}

#[test]
fn signed_in_users_get_account_action() {
    let (tenancy, branding) = setup();
    let view =
        branding.navigation(&tenancy, &NavigationRequest::new("/descubrams").signed_in(true));

    assert_eq!(view.actions.len(), 1);
    assert_eq!(view.actions[0].kind, ActionKind::Account);
    assert_eq!(view.actions[0].href, "/descubrams/profile");
    assert!(view.authenticated_items.iter().any(|item| item.href == "/descubrams/passaporte"));
}

#[test]
fn anonymous_users_see_no_authenticated_items() {
    let (tenancy, branding) = setup();
    let view = branding.navigation(&tenancy, &NavigationRequest::new("/ms"));
    assert!(view.authenticated_items.is_empty());
}

#[test]
fn exactly_one_flag_is_set() {
    let (tenancy, branding) = setup();
    for path in ["/", "/ms", "/descubrams/x", "/eventos", "/flowtrip", "/precos", "/xy/z"] {
        let flags = branding.context(&tenancy, path).flags();
        let set = [flags.is_ms, flags.is_overflow_one, flags.is_flow_trip]
            .into_iter()
            .filter(|f| *f)
            .count();
        assert_eq!(set, 1, "{path}");
    }
}

#[test]
fn skeleton_view_is_empty() {
    let view = NavigationView::skeleton();
    assert!(view.skeleton);
    assert!(view.brand.is_none());
    assert!(view.items.is_empty());
    assert_eq!(view.home_href, "/");
}

#[test]
fn navigation_serializes_flags_in_camel_case() {
    let (tenancy, branding) = setup();
    let json = serde_json::to_value(branding.navigation(&tenancy, &NavigationRequest::new("/ms")))
        .expect("serializable");
    assert_eq!(json["flags"]["isMS"], true);
    assert_eq!(json["homeHref"], "/ms");
    assert_eq!(json["brand"], "descubra-ms");
}
