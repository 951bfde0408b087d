//! Template Store backed by [`tera`].
//!
//! Assets are `*.tmpl` files. The bundled set is compiled into the binary
//! with `rust-embed`; a directory named by `GOMAKE_TEMPLATES_DIR` replaces
//! it at runtime. Either way every asset is registered under its normalized
//! key: asset prefix and `.tmpl` suffix removed, `/` separators kept
//! (`templates/hexagonal/main.go.tmpl` → `hexagonal/main.go`).
//!
//! Loading is all-or-nothing: the first asset that fails to parse fails the
//! whole load with `TemplateParse`.

use std::error::Error as _;
use std::path::{Path, PathBuf};

use rust_embed::RustEmbed;
use tera::{Context, Tera};
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use gomake_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::RenderContext,
    error::GomakeResult,
};

/// Suffix that marks a file as a template asset.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Environment variable naming an asset directory that replaces the bundle.
pub const TEMPLATES_DIR_ENV: &str = "GOMAKE_TEMPLATES_DIR";

const ASSET_PREFIX: &str = "templates/";

#[derive(RustEmbed)]
#[folder = "templates/"]
struct BundledTemplates;

/// Named templates parsed once, rendered many times.
#[derive(Debug)]
pub struct TeraTemplateStore {
    tera: Tera,
    ids: Vec<String>,
    origin: String,
}

impl TeraTemplateStore {
    /// Load the bundled asset set.
    #[instrument]
    pub fn load() -> GomakeResult<Self> {
        let mut assets = Vec::new();
        for name in BundledTemplates::iter() {
            if let Some(file) = BundledTemplates::get(&name) {
                let body = decode_asset(&name, file.data.into_owned())?;
                assets.push((name.into_owned(), body));
            }
        }
        Self::build(assets, "embedded".into())
    }

    /// Load from `GOMAKE_TEMPLATES_DIR` if it is set and non-empty,
    /// otherwise the bundled set.
    pub fn load_default() -> GomakeResult<Self> {
        match std::env::var_os(TEMPLATES_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::from_dir(PathBuf::from(dir)),
            _ => Self::load(),
        }
    }

    /// Load every `*.tmpl` under `dir`, recursively.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn from_dir(dir: impl AsRef<Path>) -> GomakeResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "templates directory not found".into(),
            }
            .into());
        }

        let mut assets = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: format!("Failed to walk templates directory: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(dir) else {
                continue;
            };
            let name = relative.to_string_lossy().replace('\\', "/");
            if !name.ends_with(TEMPLATE_SUFFIX) {
                continue;
            }

            let bytes = std::fs::read(entry.path()).map_err(|e| ApplicationError::FilesystemError {
                path: entry.path().to_path_buf(),
                reason: format!("Failed to read template: {e}"),
            })?;
            let body = decode_asset(&name, bytes)?;
            assets.push((name, body));
        }

        Self::build(assets, dir.display().to_string())
    }

    /// Build a store from `(asset name, body)` pairs.
    ///
    /// Names not ending in `.tmpl` are ignored.
    pub fn from_assets<I, N, B>(assets: I) -> GomakeResult<Self>
    where
        I: IntoIterator<Item = (N, B)>,
        N: AsRef<str>,
        B: AsRef<str>,
    {
        let assets = assets
            .into_iter()
            .map(|(n, b)| (n.as_ref().to_string(), b.as_ref().to_string()));
        Self::build(assets, "assets".into())
    }

    /// Whether `id` was registered at load time.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.binary_search_by(|known| known.as_str().cmp(id)).is_ok()
    }

    /// Where the templates came from (`embedded`, a directory, `assets`).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn build(
        assets: impl IntoIterator<Item = (String, String)>,
        origin: String,
    ) -> GomakeResult<Self> {
        let mut tera = Tera::default();
        // generated files are source code, never HTML
        tera.autoescape_on(vec![]);

        let mut ids = Vec::new();
        for (name, body) in assets {
            let Some(id) = normalize_key(&name) else {
                continue;
            };

            tera.add_raw_template(&id, &body)
                .map_err(|e| ApplicationError::TemplateParse {
                    name: name.clone(),
                    reason: error_chain(&e),
                })?;
            debug!(id = %id, "Registered template");
            ids.push(id);
        }

        ids.sort();
        ids.dedup();
        info!(count = ids.len(), origin = %origin, "Templates loaded");

        Ok(Self { tera, ids, origin })
    }
}

impl TemplateStore for TeraTemplateStore {
    fn render(&self, id: &str, context: &RenderContext) -> GomakeResult<String> {
        if !self.contains(id) {
            return Err(ApplicationError::TemplateNotFound { id: id.to_string() }.into());
        }

        let ctx = Context::from_serialize(context).map_err(|e| ApplicationError::TemplateRender {
            id: id.to_string(),
            reason: error_chain(&e),
        })?;

        self.tera.render(id, &ctx).map_err(|e| {
            ApplicationError::TemplateRender {
                id: id.to_string(),
                reason: error_chain(&e),
            }
            .into()
        })
    }

    fn template_ids(&self) -> Vec<String> {
        self.ids.clone()
    }
}

/// `templates/common/env.tmpl` → `common/env`; `None` if not a template.
fn normalize_key(name: &str) -> Option<String> {
    let name = name.replace('\\', "/");
    let name = name.strip_prefix(ASSET_PREFIX).unwrap_or(&name);
    let key = name.strip_suffix(TEMPLATE_SUFFIX)?;
    (!key.is_empty()).then(|| key.to_string())
}

/// Asset bodies must be UTF-8 whether bundled or read from disk.
fn decode_asset(name: &str, bytes: Vec<u8>) -> GomakeResult<String> {
    String::from_utf8(bytes).map_err(|e| {
        ApplicationError::TemplateParse {
            name: name.to_string(),
            reason: format!("not valid UTF-8: {e}"),
        }
        .into()
    })
}

/// Tera nests the useful message (unknown variable, bad token) in the
/// source chain; flatten it into one line.
fn error_chain(e: &tera::Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
