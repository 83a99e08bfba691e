use serde::Serialize;

use crate::domain::{
    brand::Brand,
    category::Category,
    product::{Product, ProductListQuery},
    purpose::Purpose,
};
use crate::forms::catalog::{CATALOG_PATH, CatalogParams};
use crate::repository::{BrandReader, CategoryReader, ProductReader, PurposeReader};
use crate::services::listing::{ProductListing, ViewMode};
use crate::services::{ServiceError, ServiceResult};

/// Heading shown when no filter dimension resolves to a name.
pub const DEFAULT_HEADING: &str = "Inventory";
/// Card text used when a product has no description.
pub const FALLBACK_DESCRIPTION: &str =
    "Professional grade industrial component. Contact for specifications.";
/// Number of products featured on the home page.
pub const FEATURED_PRODUCTS_LIMIT: usize = 8;

/// Display names of the selected filter values.
///
/// A name is `None` when the dimension is unset or its id matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveLabels {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub purpose: Option<String>,
}

impl ActiveLabels {
    fn resolve(
        params: &CatalogParams,
        brands: &[Brand],
        categories: &[Category],
        purposes: &[Purpose],
    ) -> Self {
        Self {
            brand: lookup_name(params.brand_id.as_deref(), brands, |b| (&b.id, &b.name)),
            category: lookup_name(params.category_id.as_deref(), categories, |c| {
                (&c.id, &c.name)
            }),
            purpose: lookup_name(params.purpose_id.as_deref(), purposes, |p| (&p.id, &p.name)),
        }
    }

    /// Brand name, else category name, else purpose name, else the default.
    pub fn heading(&self) -> &str {
        self.brand
            .as_deref()
            .or(self.category.as_deref())
            .or(self.purpose.as_deref())
            .unwrap_or(DEFAULT_HEADING)
    }
}

fn lookup_name<T, F>(id: Option<&str>, items: &[T], fields: F) -> Option<String>
where
    F: Fn(&T) -> (&String, &String),
{
    let id = id?;
    items.iter().find_map(|item| {
        let (item_id, name) = fields(item);
        (item_id == id).then(|| name.clone())
    })
}

/// Outcome of resolving one catalog request.
#[derive(Debug, Clone)]
pub struct CatalogResolution {
    pub params: CatalogParams,
    pub listing: ProductListing<Product>,
    pub labels: ActiveLabels,
    /// Full, unfiltered dimension lists ordered by name.
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    pub purposes: Vec<Purpose>,
}

impl CatalogResolution {
    pub fn view_mode(&self) -> ViewMode {
        self.listing.view_mode()
    }
}

/// Resolve catalog parameters into a grouped or flat listing.
///
/// Unknown ids are not errors; they simply match nothing. Any repository
/// failure aborts the whole resolution.
pub fn resolve_catalog<R>(repo: &R, params: CatalogParams) -> ServiceResult<CatalogResolution>
where
    R: BrandReader + CategoryReader + PurposeReader + ProductReader + ?Sized,
{
    let brands = repo.list_brands().map_err(ServiceError::from)?;
    let categories = repo.list_categories().map_err(ServiceError::from)?;
    let purposes = repo.list_purposes().map_err(ServiceError::from)?;

    let products = repo
        .list_products(ProductListQuery::new(params.to_filter()))
        .map_err(ServiceError::from)?;

    let view_mode = ViewMode::select(&params);
    log::debug!(
        "Resolved catalog {:?}: {} products, {:?} view",
        params,
        products.len(),
        view_mode
    );

    let labels = ActiveLabels::resolve(&params, &brands, &categories, &purposes);
    let listing = ProductListing::build(view_mode, products);

    Ok(CatalogResolution {
        params,
        listing,
        labels,
        brands,
        categories,
        purposes,
    })
}

/// Product card shown in catalog grids and on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub href: String,
    pub description: String,
    pub price: i32,
    pub brand_name: Option<String>,
    pub category_label: String,
    pub purpose_label: String,
    pub thumbnail_url: Option<String>,
    /// First letter of the name, used when there is no thumbnail.
    pub initial: String,
}

impl From<Product> for ProductCardView {
    fn from(product: Product) -> Self {
        let category_label = product.category_label().to_string();
        let purpose_label = product.purpose_label().to_string();
        let thumbnail_url = product.thumbnail().map(|image| image.url.clone());
        let initial = product
            .name
            .chars()
            .next()
            .map(|ch| ch.to_uppercase().collect())
            .unwrap_or_default();

        let Product {
            id,
            name,
            description,
            price,
            brand,
            ..
        } = product;

        Self {
            href: product_href(&id),
            id,
            name,
            description: description
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            price,
            brand_name: brand.map(|brand| brand.name),
            category_label,
            purpose_label,
            thumbnail_url,
            initial,
        }
    }
}

fn product_href(id: &str) -> String {
    format!("{CATALOG_PATH}/{id}")
}

/// Sidebar entry for one filter value.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
    pub selected: bool,
    pub href: String,
}

/// Chip describing an applied filter, with a link that removes it.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveFilter {
    pub dimension: &'static str,
    pub id: String,
    pub label: Option<String>,
    pub remove_href: String,
}

/// Data required to render the catalog template.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPageData {
    pub params: CatalogParams,
    pub view_mode: ViewMode,
    pub listing: ProductListing<ProductCardView>,
    pub total: usize,
    pub heading: String,
    pub labels: ActiveLabels,
    pub active_filters: Vec<ActiveFilter>,
    pub brands: Vec<FilterOption>,
    pub categories: Vec<FilterOption>,
    pub purposes: Vec<FilterOption>,
    pub clear_href: String,
}

/// Loads everything the catalog page renders.
pub fn load_catalog_page<R>(repo: &R, params: CatalogParams) -> ServiceResult<CatalogPageData>
where
    R: BrandReader + CategoryReader + PurposeReader + ProductReader + ?Sized,
{
    let CatalogResolution {
        params,
        listing,
        labels,
        brands,
        categories,
        purposes,
    } = resolve_catalog(repo, params)?;

    let brands = brands
        .into_iter()
        .map(|brand| FilterOption {
            selected: params.brand_id.as_deref() == Some(brand.id.as_str()),
            href: params.with_brand(brand.id.as_str()).href(),
            id: brand.id,
            name: brand.name,
        })
        .collect();

    let categories = categories
        .into_iter()
        .map(|category| FilterOption {
            selected: params.category_id.as_deref() == Some(category.id.as_str()),
            href: params.with_category(category.id.as_str()).href(),
            id: category.id,
            name: category.name,
        })
        .collect();

    let purposes = purposes
        .into_iter()
        .map(|purpose| FilterOption {
            selected: params.purpose_id.as_deref() == Some(purpose.id.as_str()),
            href: params.with_purpose(purpose.id.as_str()).href(),
            id: purpose.id,
            name: purpose.name,
        })
        .collect();

    let mut active_filters = Vec::new();
    if let Some(id) = params.brand_id.clone() {
        active_filters.push(ActiveFilter {
            dimension: "brand",
            id,
            label: labels.brand.clone(),
            remove_href: params.without_brand().href(),
        });
    }
    if let Some(id) = params.category_id.clone() {
        active_filters.push(ActiveFilter {
            dimension: "category",
            id,
            label: labels.category.clone(),
            remove_href: params.without_category().href(),
        });
    }
    if let Some(id) = params.purpose_id.clone() {
        active_filters.push(ActiveFilter {
            dimension: "purpose",
            id,
            label: labels.purpose.clone(),
            remove_href: params.without_purpose().href(),
        });
    }

    let view_mode = listing.view_mode();
    let total = listing.len();
    let listing = listing.map(ProductCardView::from);

    Ok(CatalogPageData {
        heading: labels.heading().to_string(),
        params,
        view_mode,
        listing,
        total,
        labels,
        active_filters,
        brands,
        categories,
        purposes,
        clear_href: CATALOG_PATH.to_string(),
    })
}

/// JSON rendition of a catalog resolution.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub filters: CatalogParams,
    pub view_mode: ViewMode,
    pub total: usize,
    pub labels: ActiveLabels,
    pub listing: ProductListing<ProductCardView>,
}

impl From<CatalogResolution> for CatalogResponse {
    fn from(value: CatalogResolution) -> Self {
        Self {
            view_mode: value.view_mode(),
            total: value.listing.len(),
            filters: value.params,
            labels: value.labels,
            listing: value.listing.map(ProductCardView::from),
        }
    }
}

/// Data required to render the home page.
#[derive(Debug, Clone, Serialize)]
pub struct HomePageData {
    pub featured: Vec<ProductCardView>,
}

/// Loads the highest-priority visible products for the home page showcase.
pub fn load_home_page<R>(repo: &R) -> ServiceResult<HomePageData>
where
    R: ProductReader + ?Sized,
{
    let query = ProductListQuery::default().limit(FEATURED_PRODUCTS_LIMIT);
    let products = repo.list_products(query).map_err(ServiceError::from)?;

    Ok(HomePageData {
        featured: products.into_iter().map(ProductCardView::from).collect(),
    })
}

/// Link to the catalog filtered by one dimension value.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionLink {
    pub name: String,
    pub href: String,
}

/// Data required to render a product detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPageData {
    pub card: ProductCardView,
    pub image_urls: Vec<String>,
    pub brand: Option<DimensionLink>,
    pub category: Option<DimensionLink>,
    pub purpose: Option<DimensionLink>,
}

/// Loads one visible product for its detail page.
pub fn load_product_page<R>(repo: &R, product_id: &str) -> ServiceResult<ProductPageData>
where
    R: ProductReader + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let blank = CatalogParams::default();
    let brand = product.brand.as_ref().map(|brand| DimensionLink {
        name: brand.name.clone(),
        href: blank.with_brand(brand.id.as_str()).href(),
    });
    let category = product.category.as_ref().map(|category| DimensionLink {
        name: category.name.clone(),
        href: blank.with_category(category.id.as_str()).href(),
    });
    let purpose = product.purpose.as_ref().map(|purpose| DimensionLink {
        name: purpose.name.clone(),
        href: blank.with_purpose(purpose.id.as_str()).href(),
    });
    let image_urls = product.images.iter().map(|image| image.url.clone()).collect();

    Ok(ProductPageData {
        card: product.into(),
        image_urls,
        brand,
        category,
        purpose,
    })
}
