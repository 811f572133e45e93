//! One file struct per backend artifact kind.

mod init_py;
mod models_py;
mod serializers_py;
mod urls_py;
mod views_py;

pub use init_py::DomainInit;
pub use models_py::ModelsFile;
pub use serializers_py::SerializersFile;
pub use urls_py::UrlsFile;
pub use views_py::ViewsFile;

use telar_schema::Catalog;

/// Comma-separated model class names, catalog order. Shared by the import
/// lines of the serializer, view, and url files.
pub(crate) fn class_list(catalog: &Catalog) -> String {
    catalog
        .entities()
        .map(|e| e.class_name())
        .collect::<Vec<_>>()
        .join(", ")
}
