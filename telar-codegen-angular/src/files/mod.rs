//! One file struct per frontend artifact kind.

mod home_ts;
mod interceptor_ts;
mod layout_ts;
mod model_ts;
mod page_ts;
mod routes_ts;
mod service_ts;
mod ui;

pub use home_ts::HomePageFile;
pub use interceptor_ts::TrailingSlashInterceptor;
pub use layout_ts::LayoutFile;
pub use model_ts::ModelFile;
pub use page_ts::{PageFile, PageMode};
pub use routes_ts::RoutesFile;
pub use service_ts::ServiceFile;
pub use ui::{CardComponent, TableComponent};

use telar_core::to_kebab_case;
use telar_schema::Entity;

/// Frontend route path segment for an entity ("OrderItem" -> "order-item").
pub(crate) fn route_segment(entity: &Entity) -> String {
    to_kebab_case(&entity.name)
}
