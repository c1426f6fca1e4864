//! Declared BigCommerce V2 collections and endpoints.
//!
//! Every collection is the same capability set behind a different URL
//! suffix; the marker types here carry nothing but that declaration.
//!
//! | Marker | Kind | Path |
//! |--------|------|------|
//! | [`Products`] | collection | `/products` |
//! | [`Orders`] | collection | `/orders` |
//! | [`Customers`] | collection | `/customers` |
//! | [`Brands`] | collection | `/brands` |
//! | [`Coupons`] | collection | `/coupons` |
//! | [`OptionSets`] | collection | `/optionsets` |
//! | [`Categories`] | collection | `/categories` |
//! | [`CustomerGroups`] | collection | `/customer_groups` |
//! | [`OrderStatuses`] | singleton | `/order_statuses` |
//! | [`Store`] | singleton | `/store` |
//! | [`Countries`] | singleton | `/countries` |
//! | [`Time`] | singleton | `/time` |
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::{Product, ServerTime};
//! use bigcommerce_api::rest::FilterSet;
//!
//! let products = Product::new(&connection)
//!     .get(Some(&FilterSet::new().with("limit", 10)))
//!     .await?;
//! let now = ServerTime::new(&connection).get().await?;
//! ```

use crate::rest::{Collection, Resource, ResourceDescriptor, Singleton, SingletonResource};

/// The products in a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Products;

impl Collection for Products {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("products", "/products");
}

/// Orders placed against a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Orders;

impl Collection for Orders {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("orders", "/orders");
}

/// Customer accounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Customers;

impl Collection for Customers {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("customers", "/customers");
}

/// Product brands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Brands;

impl Collection for Brands {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("brands", "/brands");
}

/// Discount coupons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coupons;

impl Collection for Coupons {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("coupons", "/coupons");
}

/// Product option sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionSets;

impl Collection for OptionSets {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("optionsets", "/optionsets");
}

/// Catalog categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Categories;

impl Collection for Categories {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("categories", "/categories");
}

/// Customer groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CustomerGroups;

impl Collection for CustomerGroups {
    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("customer_groups", "/customer_groups");
}

/// The fixed list of order statuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderStatuses;

impl Singleton for OrderStatuses {
    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("order_statuses", "/order_statuses");
}

/// Store information.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Store;

impl Singleton for Store {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("store", "/store");
}

/// The country reference list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countries;

impl Singleton for Countries {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("countries", "/countries");
}

/// The server clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Time;

impl Singleton for Time {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("time", "/time");
}

/// A product.
pub type Product<'c> = Resource<'c, Products>;
/// An order.
pub type Order<'c> = Resource<'c, Orders>;
/// A customer.
pub type Customer<'c> = Resource<'c, Customers>;
/// A brand.
pub type Brand<'c> = Resource<'c, Brands>;
/// A coupon.
pub type Coupon<'c> = Resource<'c, Coupons>;
/// An option set.
pub type OptionSet<'c> = Resource<'c, OptionSets>;
/// A category.
pub type Category<'c> = Resource<'c, Categories>;
/// A customer group.
pub type CustomerGroup<'c> = Resource<'c, CustomerGroups>;

/// The order status list endpoint.
pub type OrderStatusList<'c> = SingletonResource<'c, OrderStatuses>;
/// The store information endpoint.
pub type StoreInfo<'c> = SingletonResource<'c, Store>;
/// The country list endpoint.
pub type CountryList<'c> = SingletonResource<'c, Countries>;
/// The server time endpoint.
pub type ServerTime<'c> = SingletonResource<'c, Time>;
