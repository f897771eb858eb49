use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a workspace crate as seen from the
/// caller's Cargo.toml.
///
/// Generated code must name paths that are valid from the invoking crate,
/// which may depend on the facade `inflect` or on a member crate directly.
///
/// # Example
///
/// ```rust
/// # use inflect_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("inflect_reflect"));
/// ```
///
/// Reading the manifest is not cheap, call it once per proc-macro
/// invocation and keep the result.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested name begins with `inflect_` and the caller depends on
///    the facade `inflect`, return `::inflect::short_name`
///    (e.g. `inflect_reflect` -> `::inflect::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// A crate that expands its own derive should declare
/// `extern crate self as inflect_reflect;` in its root, so the fallback
/// path resolves inside the crate and its doctests alike.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "inflect";
const MEMBER_PREFIX: &str = "inflect_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path)
            .unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }

        let module = name.strip_prefix(MEMBER_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{module}")));
        }

        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// the caller's Cargo.toml. See the type level documentation for the
    /// resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(val) = Self::find_in_deps(deps, name)
            {
                return val;
            }
        }

        Self::parse_path(&format!("::{name}"))
    }

    /// Run `func` against the cached [`Manifest`] of the caller's Cargo.toml.
    ///
    /// The cache is keyed by manifest path and refreshed when the file's
    /// modified time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency_wins() {
        let m = manifest(
            r#"
            [dependencies]
            inflect = "0.0.1"
            inflect_reflect = "0.0.1"
            "#,
        );
        assert_eq!(path_string(&m.get_crate_path("inflect_reflect")), "::inflect_reflect");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest(
            r#"
            [dependencies]
            inflect = "0.0.1"
            "#,
        );
        assert_eq!(path_string(&m.get_crate_path("inflect_reflect")), "::inflect::reflect");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest(
            r#"
            [dev-dependencies]
            inflect = "0.0.1"
            "#,
        );
        assert_eq!(path_string(&m.get_crate_path("inflect_utils")), "::inflect::utils");
        assert_eq!(path_string(&m.get_crate_path("serde")), "::serde");
    }
}
