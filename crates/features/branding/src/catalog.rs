use crate::error::BrandingError;
use std::collections::BTreeMap;
use std::sync::Arc;
use wpt_kernel::domain::brand::{Brand, BrandConfig, Cta, Logo, NavItem};

/// One read-only [`BrandConfig`] per [`Brand`].
///
/// Lookups are infallible: every brand variant owns a field.
#[derive(Debug, Clone)]
pub struct BrandCatalog {
    descubra_ms: Arc<BrandConfig>,
    overflow_one: Arc<BrandConfig>,
    flow_trip: Arc<BrandConfig>,
}

impl Default for BrandCatalog {
    fn default() -> Self {
        Self {
            descubra_ms: Arc::new(descubra_ms()),
            overflow_one: Arc::new(overflow_one()),
            flow_trip: Arc::new(flow_trip()),
        }
    }
}

impl BrandCatalog {
    /// Built-in catalog with logo overrides applied.
    ///
    /// # Errors
    /// Returns [`BrandingError::InvalidOverride`] if an override has an empty `src`.
    pub fn with_logos(logos: &BTreeMap<Brand, Logo>) -> Result<Self, BrandingError> {
        let mut catalog = Self::default();
        for (brand, logo) in logos {
            if logo.src.trim().is_empty() {
                return Err(BrandingError::InvalidOverride {
                    message: "logo src cannot be empty".into(),
                    context: Some(brand.to_string().into()),
                });
            }
            Arc::make_mut(catalog.slot_mut(*brand)).logo = logo.clone();
        }
        Ok(catalog)
    }

    pub fn get(&self, brand: Brand) -> &Arc<BrandConfig> {
        match brand {
            Brand::DescubraMs => &self.descubra_ms,
            Brand::OverflowOne => &self.overflow_one,
            Brand::FlowTrip => &self.flow_trip,
        }
    }

    fn slot_mut(&mut self, brand: Brand) -> &mut Arc<BrandConfig> {
        match brand {
            Brand::DescubraMs => &mut self.descubra_ms,
            Brand::OverflowOne => &mut self.overflow_one,
            Brand::FlowTrip => &mut self.flow_trip,
        }
    }
}

fn nav(items: &[(&str, &str)]) -> Vec<NavItem> {
    items.iter().map(|(name, path)| NavItem::new(*name, *path)).collect()
}

fn logo(file: &str, alt: &str) -> Logo {
    Logo {
        src: format!("/images/{file}"),
        alt: alt.to_owned(),
        fallback: format!("/images/{file}?fallback=true"),
    }
}

fn descubra_ms() -> BrandConfig {
    BrandConfig {
        name: "Descubra Mato Grosso do Sul".to_owned(),
        logo: logo("logo-descubra-ms.png", "Descubra Mato Grosso do Sul"),
        navigation: nav(&[
            ("Destinos", "/destinos"),
            ("Eventos", "/eventos"),
            ("Roteiros", "/roteiros"),
            ("Parceiros", "/parceiros"),
            ("Sobre", "/sobre"),
        ]),
        authenticated_navigation: nav(&[
            ("Passaporte Digital", "/passaporte"),
            ("Meu Perfil", "/profile"),
        ]),
        cta: Cta { primary: "Cadastrar".to_owned(), secondary: "Entrar".to_owned() },
        home: "/descubrams".to_owned(),
    }
}

fn overflow_one() -> BrandConfig {
    BrandConfig {
        name: "OverFlow One".to_owned(),
        logo: logo("logo-overflow-one.png", "OverFlow One"),
        navigation: nav(&[
            ("Serviços", "/servicos"),
            ("Parceiros", "/parceiros"),
            ("Cases", "/casos-sucesso"),
            ("Preços", "/precos"),
            ("Sobre", "/sobre-overflow-one"),
        ]),
        authenticated_navigation: nav(&[
            ("Dashboard", "/overflow-one/dashboard"),
            ("Inventário", "/overflow-one/inventario"),
            ("Master", "/overflow-one/master-dashboard"),
        ]),
        cta: Cta { primary: "Fale Conosco".to_owned(), secondary: "Descubra MS".to_owned() },
        home: "/".to_owned(),
    }
}

fn flow_trip() -> BrandConfig {
    BrandConfig {
        name: "FlowTrip".to_owned(),
        logo: logo("logo-flowtrip.png", "FlowTrip"),
        navigation: nav(&[
            ("Soluções", "/solucoes"),
            ("Cases", "/casos-sucesso"),
            ("Preços", "/precos"),
            ("Sobre", "/sobre-flowtrip"),
        ]),
        authenticated_navigation: nav(&[("Master Dashboard", "/master-dashboard")]),
        cta: Cta { primary: "Começar Agora".to_owned(), secondary: "Entrar".to_owned() },
        home: "/".to_owned(),
    }
}
